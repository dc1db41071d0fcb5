//! File I/O for crossword structures and word lists

use super::Structure;
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

/// Structured parse errors for puzzle input files
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("structure file is empty or contains no rows")]
    EmptyStructure,
    #[error("structure has no fillable cells")]
    NoFillableCells,
    #[error("word list is empty")]
    EmptyWordList,
}

/// Load a grid structure from a text file.
/// Format: each line is a row; '_' marks a fillable cell, any other
/// non-whitespace character a blocked cell.
pub fn load_structure_from_file<P: AsRef<Path>>(path: P) -> Result<Structure> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read structure file: {}", path.as_ref().display()))?;

    parse_structure_from_string(&content)
        .with_context(|| format!("Failed to parse structure file: {}", path.as_ref().display()))
}

/// Parse a grid structure from a string representation
pub fn parse_structure_from_string(content: &str) -> Result<Structure> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim_end())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Err(PuzzleError::EmptyStructure.into());
    }

    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let mut cells = Vec::with_capacity(lines.len());

    for line in &lines {
        // Ragged rows are padded with blocked cells
        let mut row: Vec<bool> = line.chars().map(|ch| ch == '_').collect();
        row.resize(width, false);
        cells.push(row);
    }

    let structure = Structure::from_cells(cells)?;
    if structure.is_empty() {
        return Err(PuzzleError::NoFillableCells.into());
    }

    Ok(structure)
}

/// Load a vocabulary from a text file, one candidate word per line.
/// Duplicates are dropped keeping the first occurrence; no case folding or
/// other normalization is applied.
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read word list: {}", path.as_ref().display()))?;

    parse_words_from_string(&content)
        .with_context(|| format!("Failed to parse word list: {}", path.as_ref().display()))
}

/// Parse a word list from a string representation
pub fn parse_words_from_string(content: &str) -> Result<Vec<String>> {
    let mut words: Vec<String> = Vec::new();

    for line in content.lines() {
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        if !words.iter().any(|existing| existing == word) {
            words.push(word.to_string());
        }
    }

    if words.is_empty() {
        return Err(PuzzleError::EmptyWordList.into());
    }

    Ok(words)
}

/// Create example structure and word-list files for the setup command
pub fn create_example_puzzle<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // A small open grid: top row across, left column down
    let cross_structure = "____\n_##_\n_##_\n____\n";
    std::fs::write(dir.join("ring.txt"), cross_structure)
        .context("Failed to write ring.txt")?;

    let ladder_structure = "______\n#_##_#\n#_##_#\n______\n";
    std::fs::write(dir.join("ladder.txt"), ladder_structure)
        .context("Failed to write ladder.txt")?;

    // Enough words to fill both example structures, plus decoys
    let words = "\
star\nrats\nspit\ntots\nstop\npots\n\
eleven\nassess\nlens\neats\ntoes\n\
cat\ndog\ntree\nstone\n";
    std::fs::write(dir.join("words.txt"), words)
        .context("Failed to write words.txt")?;

    Ok(())
}
