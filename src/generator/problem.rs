//! Crossword fill problem definition

use super::solution::{Solution, SolutionEntry};
use crate::config::Settings;
use crate::csp::{
    enforce_arc_consistency, enforce_node_consistency, BacktrackingSearch, ConstraintGraph,
    DomainStore, SearchOutcome, SearchStats, Vocabulary,
};
use crate::puzzle::{find_slots, load_structure_from_file, load_words_from_file, Structure};
use anyhow::{Context, Result};
use std::time::Instant;

/// A crossword fill problem: the structure, its constraint graph, and the
/// vocabulary, wired together from the configured input files.
pub struct CrosswordProblem {
    settings: Settings,
    structure: Structure,
    graph: ConstraintGraph,
    vocabulary: Vocabulary,
}

impl CrosswordProblem {
    /// Create a new problem from settings
    pub fn new(settings: Settings) -> Result<Self> {
        let structure = load_structure_from_file(&settings.input.structure_file)
            .context("Failed to load structure file")?;
        let words = load_words_from_file(&settings.input.words_file)
            .context("Failed to load word list")?;

        Self::with_parts(settings, structure, words)
    }

    /// Create a problem from an explicit structure and word list (useful for
    /// testing)
    pub fn with_parts(settings: Settings, structure: Structure, words: Vec<String>) -> Result<Self> {
        let slots = find_slots(&structure);
        if slots.is_empty() {
            anyhow::bail!("Structure contains no slots of length >= 2");
        }

        Ok(Self {
            settings,
            structure,
            graph: ConstraintGraph::new(slots),
            vocabulary: Vocabulary::from_words(words),
        })
    }

    /// Solve the fill problem. Returns `None` when no assignment satisfies
    /// the constraints (or the configured node limit was hit first); that is
    /// a normal outcome, not an error.
    pub fn solve(&self) -> Result<Option<Solution>> {
        let start_time = Instant::now();

        println!(
            "Filling {}x{} grid: {} slots, {} crossings, {} candidate words",
            self.structure.width,
            self.structure.height,
            self.graph.slot_count(),
            self.graph.constraint_count(),
            self.vocabulary.len()
        );

        let (mut domains, propagation_ok) = self.propagate();
        if !propagation_ok {
            println!("Constraint propagation emptied a domain; no solution.");
            return Ok(None);
        }

        let search = BacktrackingSearch::new(&self.graph, &self.vocabulary)
            .with_node_limit(self.settings.solver.max_nodes);
        let (outcome, stats) = search.solve(&mut domains);

        match outcome {
            SearchOutcome::Solved(assignment) => {
                let solution = self.build_solution(&assignment, start_time.elapsed(), stats);
                Ok(Some(solution))
            }
            SearchOutcome::Unsatisfiable => {
                println!(
                    "Search exhausted after {} nodes; no solution exists.",
                    stats.nodes_expanded
                );
                Ok(None)
            }
            SearchOutcome::LimitReached => {
                println!(
                    "Node limit of {} reached without a solution (unsatisfiability not proven).",
                    self.settings.solver.max_nodes.unwrap_or(0)
                );
                Ok(None)
            }
        }
    }

    /// Run node consistency followed by a global arc-consistency pass.
    /// Returns the pruned domains and whether every domain is still
    /// non-empty.
    pub fn propagate(&self) -> (DomainStore, bool) {
        let mut domains = DomainStore::new(self.graph.slot_count(), &self.vocabulary);
        enforce_node_consistency(&mut domains, self.graph.slots(), &self.vocabulary);

        if domains.has_empty_domain() {
            return (domains, false);
        }

        let ok = enforce_arc_consistency(&self.graph, &self.vocabulary, &mut domains, None);
        (domains, ok)
    }

    fn build_solution(
        &self,
        assignment: &crate::csp::Assignment,
        solve_time: std::time::Duration,
        stats: SearchStats,
    ) -> Solution {
        let entries: Vec<SolutionEntry> = assignment
            .iter()
            .map(|(&slot_id, &word)| SolutionEntry {
                slot: *self.graph.slot(slot_id),
                word: self.vocabulary.word(word).to_string(),
            })
            .collect();

        Solution::new(self.structure.clone(), entries, solve_time, stats)
    }

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::validator::SolutionValidator;

    fn cross_problem(words: &[&str]) -> CrosswordProblem {
        let structure = Structure::from_cells(vec![
            vec![true, true, true],
            vec![true, false, false],
            vec![true, false, false],
        ])
        .unwrap();
        let words = words.iter().map(|w| w.to_string()).collect();
        CrosswordProblem::with_parts(Settings::default(), structure, words).unwrap()
    }

    #[test]
    fn test_solve_produces_valid_solution() {
        let problem = cross_problem(&["cat", "car", "dog"]);
        let solution = problem.solve().unwrap().expect("expected a solution");

        let result = SolutionValidator::validate(&solution, problem.graph().slots());
        assert!(result.is_valid, "{}", result);

        // The shared first letter must agree
        let letters = solution.letter_grid();
        assert!(letters[0][0].is_some());
    }

    #[test]
    fn test_no_word_of_required_length_fails_before_search() {
        // Every slot needs 3 letters; the vocabulary has none
        let problem = cross_problem(&["at", "on", "mouse"]);
        let (domains, ok) = problem.propagate();
        assert!(!ok);
        assert!(domains.has_empty_domain());
        assert!(problem.solve().unwrap().is_none());
    }

    #[test]
    fn test_unsatisfiable_puzzle_returns_none() {
        let problem = cross_problem(&["cat", "dog", "emu"]);
        assert!(problem.solve().unwrap().is_none());
    }

    #[test]
    fn test_node_limit_returns_none() {
        let mut settings = Settings::default();
        settings.solver.max_nodes = Some(1);
        let structure = Structure::from_cells(vec![
            vec![true, true, true],
            vec![true, false, false],
            vec![true, false, false],
        ])
        .unwrap();
        let words = vec!["cat".to_string(), "car".to_string()];
        let problem = CrosswordProblem::with_parts(settings, structure, words).unwrap();
        assert!(problem.solve().unwrap().is_none());
    }

    #[test]
    fn test_structure_without_slots_is_rejected() {
        let structure = Structure::from_cells(vec![vec![true, false], vec![false, true]]).unwrap();
        let result =
            CrosswordProblem::with_parts(Settings::default(), structure, vec!["at".to_string()]);
        assert!(result.is_err());
    }
}
