//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::generator::Solution;
use crate::puzzle::Structure;
use anyhow::{Context, Result};
use std::path::Path;

/// Format puzzles and solutions for the terminal and for files
pub struct PuzzleFormatter;

impl PuzzleFormatter {
    /// Format a blank structure in compact form
    pub fn format_structure(structure: &Structure) -> String {
        let mut output = String::new();
        for row in 0..structure.height {
            for col in 0..structure.width {
                output.push(if structure.is_fillable(row, col) { '·' } else { '█' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a structure with row and column coordinates
    pub fn format_structure_with_coords(structure: &Structure) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..structure.width {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..structure.height {
            output.push_str(&format!("{:2} ", row));
            for col in 0..structure.width {
                output.push_str(if structure.is_fillable(row, col) { " ·" } else { " █" });
            }
            output.push('\n');
        }

        output
    }

    /// Format a solved puzzle with the word list below the grid
    pub fn format_solution(solution: &Solution) -> String {
        let mut output = String::new();
        output.push_str(&solution.render());
        output.push('\n');
        for entry in &solution.entries {
            output.push_str(&format!("{}: {}\n", entry.slot, entry.word));
        }
        output
    }

    /// Save a solution to a file in the configured format
    pub fn save_solution<P: AsRef<Path>>(
        solution: &Solution,
        path: P,
        format: &OutputFormat,
    ) -> Result<()> {
        match format {
            OutputFormat::Text => {
                let content = Self::format_solution(solution);
                if let Some(parent) = path.as_ref().parent() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory: {}", parent.display())
                    })?;
                }
                std::fs::write(&path, content).with_context(|| {
                    format!("Failed to write solution: {}", path.as_ref().display())
                })?;
            }
            OutputFormat::Json => {
                solution.save_to_file(&path)?;
            }
        }
        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
