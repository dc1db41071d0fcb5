//! Arc consistency propagation (AC-3)

use super::constraint_graph::{ConstraintGraph, SlotId};
use super::domains::DomainStore;
use super::vocabulary::Vocabulary;
use std::collections::VecDeque;

/// Make `x` arc consistent with `y`: remove from `domain(x)` every word with
/// no supporting word in `domain(y)` at the pair's overlap offsets. Returns
/// true if the domain shrank.
pub fn revise(
    graph: &ConstraintGraph,
    vocabulary: &Vocabulary,
    domains: &mut DomainStore,
    x: SlotId,
    y: SlotId,
) -> bool {
    let Some((i, j)) = graph.overlap(x, y) else {
        return false;
    };

    // Collect y's overlap letters once per revision
    let support: Vec<char> = domains
        .domain(y)
        .iter()
        .map(|&word| vocabulary.letter(word, j))
        .collect();

    domains.retain(x, |word| {
        let letter = vocabulary.letter(word, i);
        support.contains(&letter)
    })
}

/// Run AC-3 to a fixpoint from the given seed arcs, or over the whole graph
/// when no seed is supplied. Returns false as soon as any domain empties,
/// true once the queue drains. Revising `x` re-enqueues every arc `(z, x)`
/// for neighbors `z != y`; the FIFO discipline is an implementation choice,
/// the fixpoint is order-independent.
pub fn enforce_arc_consistency(
    graph: &ConstraintGraph,
    vocabulary: &Vocabulary,
    domains: &mut DomainStore,
    seed_arcs: Option<Vec<(SlotId, SlotId)>>,
) -> bool {
    let mut queue: VecDeque<(SlotId, SlotId)> = match seed_arcs {
        Some(arcs) => arcs.into(),
        None => graph.all_arcs().into(),
    };

    while let Some((x, y)) = queue.pop_front() {
        if revise(graph, vocabulary, domains, x, y) {
            if domains.domain(x).is_empty() {
                return false;
            }
            for &z in graph.neighbors(x) {
                if z != y {
                    queue.push_back((z, x));
                }
            }
        }
    }

    true
}
