//! Crossword fill problem definition and solution handling

pub mod problem;
pub mod solution;
pub mod validator;

pub use problem::CrosswordProblem;
pub use solution::{Solution, SolutionEntry};
pub use validator::{SolutionValidator, ValidationResult, Violation};
