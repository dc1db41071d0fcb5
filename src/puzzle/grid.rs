//! Grid structure representation for crossword puzzles

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy matrix of a blank crossword grid. `true` marks a fillable cell,
/// `false` a blocked one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl Structure {
    /// Create a structure from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        if cells.is_empty() {
            anyhow::bail!("Structure cannot be empty");
        }

        let height = cells.len();
        let width = cells[0].len();

        if width == 0 {
            anyhow::bail!("Structure width cannot be zero");
        }

        // Verify all rows have the same length
        for (i, row) in cells.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), width);
            }
        }

        let flat_cells: Vec<bool> = cells.into_iter().flatten().collect();

        Ok(Self {
            width,
            height,
            cells: flat_cells,
        })
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Whether the cell at the given coordinates is fillable
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        if row < self.height && col < self.width {
            self.cells[self.index(row, col)]
        } else {
            false // Out of bounds cells are blocked
        }
    }

    /// Get all fillable cell coordinates in row-major order
    pub fn fillable_cells(&self) -> Vec<(usize, usize)> {
        let mut fillable = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if self.is_fillable(row, col) {
                    fillable.push((row, col));
                }
            }
        }
        fillable
    }

    /// Count total fillable cells
    pub fn fillable_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the structure has no fillable cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.is_fillable(row, col) { '_' } else { '█' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_from_cells() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, false],
            vec![true, false, false],
        ];
        let structure = Structure::from_cells(cells).unwrap();
        assert_eq!(structure.width, 3);
        assert_eq!(structure.height, 3);
        assert_eq!(structure.fillable_count(), 5);
        assert!(structure.is_fillable(0, 2));
        assert!(!structure.is_fillable(1, 1));
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let structure = Structure::from_cells(vec![vec![true, true]]).unwrap();
        assert!(!structure.is_fillable(0, 2));
        assert!(!structure.is_fillable(1, 0));
    }

    #[test]
    fn test_invalid_structures() {
        assert!(Structure::from_cells(vec![]).is_err());
        assert!(Structure::from_cells(vec![vec![]]).is_err());

        let ragged = vec![vec![true, true], vec![true]];
        assert!(Structure::from_cells(ragged).is_err());
    }

    #[test]
    fn test_fillable_cells_row_major() {
        let cells = vec![vec![false, true], vec![true, false]];
        let structure = Structure::from_cells(cells).unwrap();
        assert_eq!(structure.fillable_cells(), vec![(0, 1), (1, 0)]);
    }
}
