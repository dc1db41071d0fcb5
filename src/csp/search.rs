//! Backtracking search with MRV/degree and least-constraining-value ordering

use super::ac3::enforce_arc_consistency;
use super::constraint_graph::{ConstraintGraph, SlotId};
use super::domains::DomainStore;
use super::vocabulary::{Vocabulary, WordId};
use std::collections::BTreeMap;

/// Partial mapping from slot to chosen word. Grows by one entry per
/// successful recursive step, shrinks on backtrack.
pub type Assignment = BTreeMap<SlotId, WordId>;

/// Result of a search run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A complete, consistent assignment
    Solved(Assignment),
    /// No assignment exists under the initial domains
    Unsatisfiable,
    /// The node limit was hit before the search finished; unsatisfiability
    /// was not proven
    LimitReached,
}

/// Counters collected during a search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchStats {
    /// Variable selections performed
    pub nodes_expanded: u64,
    /// Tentative value placements
    pub values_tried: u64,
    /// Branches exhausted without a solution
    pub backtracks: u64,
}

enum Step {
    Solved(Assignment),
    Exhausted,
    Limit,
}

/// The backtracking engine. Holds the read-only graph and vocabulary; the
/// mutable [`DomainStore`] is threaded through the recursion with strict
/// snapshot/restore discipline on every failing path.
pub struct BacktrackingSearch<'a> {
    graph: &'a ConstraintGraph,
    vocabulary: &'a Vocabulary,
    max_nodes: Option<u64>,
}

impl<'a> BacktrackingSearch<'a> {
    pub fn new(graph: &'a ConstraintGraph, vocabulary: &'a Vocabulary) -> Self {
        Self {
            graph,
            vocabulary,
            max_nodes: None,
        }
    }

    /// Bound the search to at most `limit` variable selections
    pub fn with_node_limit(mut self, limit: Option<u64>) -> Self {
        self.max_nodes = limit;
        self
    }

    /// Search for a complete assignment starting from the given domains.
    /// The domains should already be node- and arc-consistent; the caller
    /// keeps ownership of the store and may reuse it afterwards.
    pub fn solve(&self, domains: &mut DomainStore) -> (SearchOutcome, SearchStats) {
        let mut stats = SearchStats::default();
        let mut assignment = Assignment::new();
        let outcome = match self.backtrack(&mut assignment, domains, &mut stats) {
            Step::Solved(solution) => SearchOutcome::Solved(solution),
            Step::Exhausted => SearchOutcome::Unsatisfiable,
            Step::Limit => SearchOutcome::LimitReached,
        };
        (outcome, stats)
    }

    /// Whether every slot has an entry
    pub fn assignment_complete(&self, assignment: &Assignment) -> bool {
        assignment.len() == self.graph.slot_count()
    }

    /// Check a complete assignment for global word distinctness, per-slot
    /// length match, and agreement at every overlap. An incomplete
    /// assignment is consistent by definition; partial placements are
    /// policed by propagation, not by this predicate, and the search relies
    /// on that asymmetry.
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        if !self.assignment_complete(assignment) {
            return true;
        }

        let mut seen: Vec<WordId> = Vec::with_capacity(assignment.len());
        for (&slot_id, &word) in assignment {
            if seen.contains(&word) {
                return false;
            }
            seen.push(word);

            if self.vocabulary.word_len(word) != self.graph.slot(slot_id).length {
                return false;
            }

            for &neighbor in self.graph.neighbors(slot_id) {
                let Some(&neighbor_word) = assignment.get(&neighbor) else {
                    continue;
                };
                let (i, j) = self
                    .graph
                    .overlap(slot_id, neighbor)
                    .expect("neighbor without overlap record");
                if self.vocabulary.letter(word, i) != self.vocabulary.letter(neighbor_word, j) {
                    return false;
                }
            }
        }

        true
    }

    /// Minimum-remaining-values with degree tie-break; any remaining tie
    /// goes to the smallest slot id. Callers guarantee at least one
    /// unassigned slot.
    fn select_unassigned_variable(
        &self,
        assignment: &Assignment,
        domains: &DomainStore,
    ) -> SlotId {
        let mut best: Option<(SlotId, usize, usize)> = None;

        for slot_id in 0..self.graph.slot_count() {
            if assignment.contains_key(&slot_id) {
                continue;
            }
            let size = domains.domain_size(slot_id);
            let degree = self.graph.degree(slot_id);

            let better = match best {
                None => true,
                Some((_, best_size, best_degree)) => {
                    size < best_size || (size == best_size && degree > best_degree)
                }
            };
            if better {
                best = Some((slot_id, size, degree));
            }
        }

        best.expect("no unassigned slot to select").0
    }

    /// Least-constraining-value ordering: candidates ascending by the number
    /// of words they would eliminate from unassigned neighbors' domains.
    /// The sort is stable, so ties keep domain insertion order.
    fn order_domain_values(
        &self,
        slot_id: SlotId,
        assignment: &Assignment,
        domains: &DomainStore,
    ) -> Vec<WordId> {
        let mut ranked: Vec<(WordId, usize)> = domains
            .domain(slot_id)
            .iter()
            .map(|&word| {
                let mut eliminated = 0;
                for &neighbor in self.graph.neighbors(slot_id) {
                    if assignment.contains_key(&neighbor) {
                        continue;
                    }
                    let (i, j) = self
                        .graph
                        .overlap(slot_id, neighbor)
                        .expect("neighbor without overlap record");
                    let letter = self.vocabulary.letter(word, i);
                    eliminated += domains
                        .domain(neighbor)
                        .iter()
                        .filter(|&&other| self.vocabulary.letter(other, j) != letter)
                        .count();
                }
                (word, eliminated)
            })
            .collect();

        ranked.sort_by_key(|&(_, eliminated)| eliminated);
        ranked.into_iter().map(|(word, _)| word).collect()
    }

    fn backtrack(
        &self,
        assignment: &mut Assignment,
        domains: &mut DomainStore,
        stats: &mut SearchStats,
    ) -> Step {
        if self.assignment_complete(assignment) {
            return Step::Solved(assignment.clone());
        }

        if let Some(limit) = self.max_nodes {
            if stats.nodes_expanded >= limit {
                return Step::Limit;
            }
        }
        stats.nodes_expanded += 1;

        let slot_id = self.select_unassigned_variable(assignment, domains);

        for word in self.order_domain_values(slot_id, assignment, domains) {
            stats.values_tried += 1;
            assignment.insert(slot_id, word);

            if self.consistent(assignment) {
                let snapshot = domains.snapshot();
                domains.assign(slot_id, word);

                // Push the fixed value outward through the crossing slots
                let seed: Vec<(SlotId, SlotId)> = self
                    .graph
                    .neighbors(slot_id)
                    .iter()
                    .map(|&z| (z, slot_id))
                    .collect();

                if enforce_arc_consistency(self.graph, self.vocabulary, domains, Some(seed)) {
                    match self.backtrack(assignment, domains, stats) {
                        Step::Solved(solution) => return Step::Solved(solution),
                        Step::Limit => {
                            domains.restore(snapshot);
                            assignment.remove(&slot_id);
                            return Step::Limit;
                        }
                        Step::Exhausted => {}
                    }
                }

                domains.restore(snapshot);
            }

            assignment.remove(&slot_id);
        }

        stats.backtracks += 1;
        Step::Exhausted
    }
}
