//! Binary overlap constraints between crossing slots

use crate::puzzle::Slot;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Index of a slot in the solver's slot list
pub type SlotId = usize;

/// The crossing constraints of a puzzle, derived once from the slot list and
/// read-only afterwards. For every unordered pair of slots whose cells
/// intersect in exactly one grid cell, the graph records the offset of that
/// cell within each slot's word.
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    slots: Vec<Slot>,
    overlaps: BTreeMap<(SlotId, SlotId), (usize, usize)>,
    neighbors: Vec<Vec<SlotId>>,
}

impl ConstraintGraph {
    /// Build the graph from a slot list. The slot list order defines the
    /// `SlotId` space; callers pass the sorted output of
    /// [`crate::puzzle::find_slots`].
    pub fn new(slots: Vec<Slot>) -> Self {
        let mut overlaps = BTreeMap::new();
        let mut neighbors: Vec<Vec<SlotId>> = vec![Vec::new(); slots.len()];

        for (x, y) in (0..slots.len()).tuple_combinations() {
            if let Some((i, j)) = Self::overlap_offsets(&slots[x], &slots[y]) {
                overlaps.insert((x, y), (i, j));
                overlaps.insert((y, x), (j, i));
                neighbors[x].push(y);
                neighbors[y].push(x);
            }
        }

        // Neighbor ids come out of an ordered pair scan already, but make the
        // invariant explicit
        for list in &mut neighbors {
            list.sort_unstable();
        }

        Self { slots, overlaps, neighbors }
    }

    /// Find the single shared cell of two slots, if any, as offsets into each
    /// slot's word. Collinear slots overlapping in more than one cell and
    /// disjoint slots yield no record.
    fn overlap_offsets(x: &Slot, y: &Slot) -> Option<(usize, usize)> {
        let mut found = None;
        for (i, cell_x) in x.cells().into_iter().enumerate() {
            for (j, cell_y) in y.cells().into_iter().enumerate() {
                if cell_x == cell_y {
                    if found.is_some() {
                        return None; // more than one shared cell
                    }
                    found = Some((i, j));
                }
            }
        }
        found
    }

    /// Number of slots in the graph
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The slot for an id
    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id]
    }

    /// All slots in id order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The overlap offsets `(i, j)` for a directed slot pair: character `i`
    /// of `x`'s word must equal character `j` of `y`'s word.
    pub fn overlap(&self, x: SlotId, y: SlotId) -> Option<(usize, usize)> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Ids of the slots crossing the given slot, ascending
    pub fn neighbors(&self, id: SlotId) -> &[SlotId] {
        &self.neighbors[id]
    }

    /// Number of slots crossing the given slot
    pub fn degree(&self, id: SlotId) -> usize {
        self.neighbors[id].len()
    }

    /// Every directed arc `(x, y)` in the graph, in id order
    pub fn all_arcs(&self) -> Vec<(SlotId, SlotId)> {
        let mut arcs = Vec::new();
        for x in 0..self.slots.len() {
            for &y in &self.neighbors[x] {
                arcs.push((x, y));
            }
        }
        arcs
    }

    /// Total number of unordered crossing pairs
    pub fn constraint_count(&self) -> usize {
        self.overlaps.len() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{find_slots, Direction, Structure};

    fn cross_graph() -> ConstraintGraph {
        let structure = Structure::from_cells(vec![
            vec![true, true, true],
            vec![true, false, false],
            vec![true, false, false],
        ])
        .unwrap();
        ConstraintGraph::new(find_slots(&structure))
    }

    #[test]
    fn test_cross_overlap() {
        let graph = cross_graph();
        assert_eq!(graph.slot_count(), 2);
        assert_eq!(graph.slot(0).direction, Direction::Across);
        assert_eq!(graph.slot(1).direction, Direction::Down);

        // Both slots start at (0, 0), so they share their first letters
        assert_eq!(graph.overlap(0, 1), Some((0, 0)));
        assert_eq!(graph.constraint_count(), 1);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let structure = Structure::from_cells(vec![
            vec![false, true, false],
            vec![true, true, true],
            vec![false, true, false],
        ])
        .unwrap();
        let graph = ConstraintGraph::new(find_slots(&structure));
        assert_eq!(graph.slot_count(), 2);

        let (i, j) = graph.overlap(0, 1).unwrap();
        assert_eq!(graph.overlap(1, 0), Some((j, i)));
        // The across slot crosses the down slot at its middle letter
        assert_eq!((i, j), (1, 1));
    }

    #[test]
    fn test_disjoint_slots_have_no_overlap() {
        let structure = Structure::from_cells(vec![
            vec![true, true, false],
            vec![false, false, false],
            vec![false, true, true],
        ])
        .unwrap();
        let graph = ConstraintGraph::new(find_slots(&structure));
        assert_eq!(graph.slot_count(), 2);
        assert_eq!(graph.overlap(0, 1), None);
        assert!(graph.neighbors(0).is_empty());
    }

    #[test]
    fn test_all_arcs_directed_both_ways() {
        let graph = cross_graph();
        assert_eq!(graph.all_arcs(), vec![(0, 1), (1, 0)]);
    }

    #[test]
    fn test_degree() {
        let structure = Structure::from_cells(vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, false, true],
        ])
        .unwrap();
        let graph = ConstraintGraph::new(find_slots(&structure));
        // Top across slot crosses both down slots
        let across = (0..graph.slot_count())
            .find(|&id| graph.slot(id).direction == Direction::Across)
            .unwrap();
        assert_eq!(graph.degree(across), 2);
    }
}
