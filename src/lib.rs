//! Crossword fill solver
//!
//! This library fills crossword-style grids from a fixed vocabulary by
//! treating the puzzle as a constraint-satisfaction problem: node and arc
//! consistency prune each slot's candidate words, then a backtracking search
//! with MRV/degree variable selection and least-constraining-value ordering
//! completes the assignment.

pub mod config;
pub mod puzzle;
pub mod csp;
pub mod generator;
pub mod utils;

pub use config::Settings;
pub use generator::{CrosswordProblem, Solution};

use anyhow::Result;

/// Main entry point for filling a configured puzzle. `Ok(None)` means no
/// assignment satisfies the constraints.
pub fn solve_crossword(settings: Settings) -> Result<Option<Solution>> {
    let problem = CrosswordProblem::new(settings)?;
    problem.solve()
}
