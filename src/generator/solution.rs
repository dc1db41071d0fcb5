//! Solved crossword representation and output

use crate::csp::SearchStats;
use crate::puzzle::{Slot, Structure};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// One filled slot of a solved puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionEntry {
    pub slot: Slot,
    pub word: String,
}

/// A complete, consistent filling of the puzzle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub structure: Structure,
    /// Filled slots in slot order
    pub entries: Vec<SolutionEntry>,
    pub solve_time: Duration,
    pub stats: SearchStats,
}

impl Solution {
    pub fn new(
        structure: Structure,
        entries: Vec<SolutionEntry>,
        solve_time: Duration,
        stats: SearchStats,
    ) -> Self {
        Self {
            structure,
            entries,
            solve_time,
            stats,
        }
    }

    /// Project the assignment back onto grid coordinates: a height x width
    /// matrix with the chosen letter in each filled cell.
    pub fn letter_grid(&self) -> Vec<Vec<Option<char>>> {
        let mut letters = vec![vec![None; self.structure.width]; self.structure.height];
        for entry in &self.entries {
            for (k, ch) in entry.word.chars().enumerate() {
                let (row, col) = entry.slot.cell(k);
                letters[row][col] = Some(ch);
            }
        }
        letters
    }

    /// Render the filled grid: letters in fillable cells, blocks elsewhere
    pub fn render(&self) -> String {
        let letters = self.letter_grid();
        let mut output = String::new();
        for row in 0..self.structure.height {
            for col in 0..self.structure.width {
                if self.structure.is_fillable(row, col) {
                    output.push(letters[row][col].unwrap_or(' '));
                } else {
                    output.push('█');
                }
            }
            output.push('\n');
        }
        output
    }

    /// One-line summary for console reporting
    pub fn summary(&self) -> String {
        format!(
            "{} slots filled in {:.3}s ({} nodes, {} values tried, {} backtracks)",
            self.entries.len(),
            self.solve_time.as_secs_f64(),
            self.stats.nodes_expanded,
            self.stats.values_tried,
            self.stats.backtracks
        )
    }

    /// Save the solution as JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize solution")?;

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write solution: {}", path.as_ref().display()))?;

        Ok(())
    }
}
