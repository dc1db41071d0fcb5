//! Slot extraction and representation

use super::Structure;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reading direction of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Across,
    Down,
}

/// One fill-in location in the grid. Identity is value-based; slots are
/// derived from the structure at load time and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Slot {
    /// Grid coordinates of the k-th cell of this slot
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }

    /// All grid coordinates occupied by this slot, in word order
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.length).map(|k| self.cell(k)).collect()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        write!(f, "({}, {}) {} [{}]", self.row, self.col, dir, self.length)
    }
}

/// Extract every slot from a structure: maximal horizontal and vertical runs
/// of fillable cells with length >= 2. The result is sorted by
/// (row, col, direction) so downstream iteration order is deterministic.
pub fn find_slots(structure: &Structure) -> Vec<Slot> {
    let mut slots = Vec::new();

    // Across: scan each row for maximal runs
    for row in 0..structure.height {
        let mut run_start = None;
        for col in 0..=structure.width {
            if col < structure.width && structure.is_fillable(row, col) {
                run_start.get_or_insert(col);
            } else if let Some(start) = run_start.take() {
                let length = col - start;
                if length >= 2 {
                    slots.push(Slot {
                        row,
                        col: start,
                        direction: Direction::Across,
                        length,
                    });
                }
            }
        }
    }

    // Down: scan each column
    for col in 0..structure.width {
        let mut run_start = None;
        for row in 0..=structure.height {
            if row < structure.height && structure.is_fillable(row, col) {
                run_start.get_or_insert(row);
            } else if let Some(start) = run_start.take() {
                let length = row - start;
                if length >= 2 {
                    slots.push(Slot {
                        row: start,
                        col,
                        direction: Direction::Down,
                        length,
                    });
                }
            }
        }
    }

    slots.sort();
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cross_structure() -> Structure {
        // Row 0 fully fillable, column 0 fully fillable
        Structure::from_cells(vec![
            vec![true, true, true],
            vec![true, false, false],
            vec![true, false, false],
        ])
        .unwrap()
    }

    #[test]
    fn test_find_slots_cross() {
        let slots = find_slots(&cross_structure());
        assert_eq!(slots.len(), 2);
        assert_eq!(
            slots[0],
            Slot { row: 0, col: 0, direction: Direction::Across, length: 3 }
        );
        assert_eq!(
            slots[1],
            Slot { row: 0, col: 0, direction: Direction::Down, length: 3 }
        );
    }

    #[test]
    fn test_single_cells_are_not_slots() {
        let structure = Structure::from_cells(vec![
            vec![true, false, true],
            vec![false, false, false],
        ])
        .unwrap();
        assert!(find_slots(&structure).is_empty());
    }

    #[test]
    fn test_runs_end_at_blocked_cells() {
        let structure = Structure::from_cells(vec![vec![true, true, false, true, true]]).unwrap();
        let slots = find_slots(&structure);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].col, 0);
        assert_eq!(slots[1].col, 3);
        assert!(slots.iter().all(|s| s.length == 2));
    }

    #[test]
    fn test_slot_cells() {
        let across = Slot { row: 1, col: 2, direction: Direction::Across, length: 3 };
        assert_eq!(across.cells(), vec![(1, 2), (1, 3), (1, 4)]);

        let down = Slot { row: 1, col: 2, direction: Direction::Down, length: 2 };
        assert_eq!(down.cells(), vec![(1, 2), (2, 2)]);
    }

    #[test]
    fn test_slots_are_sorted() {
        let structure = Structure::from_cells(vec![
            vec![true, true, true],
            vec![true, true, true],
            vec![true, true, true],
        ])
        .unwrap();
        let slots = find_slots(&structure);
        let mut sorted = slots.clone();
        sorted.sort();
        assert_eq!(slots, sorted);
        assert_eq!(slots.len(), 6);
    }
}
