//! Independent validation of solved puzzles

use super::solution::Solution;
use crate::puzzle::Slot;
use std::collections::BTreeMap;
use std::fmt;

/// Re-checks a solution against the structure without trusting the solver's
/// constraint graph: every slot filled, every word the right length, all
/// words distinct, and no two slots writing different letters into the same
/// cell.
pub struct SolutionValidator;

/// Result of solution validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    MissingSlot { slot: Slot },
    LengthMismatch { slot: Slot, word: String },
    DuplicateWord { word: String },
    OutOfBounds { slot: Slot },
    CellConflict { row: usize, col: usize, first: char, second: char },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingSlot { slot } => write!(f, "slot {} has no word", slot),
            Violation::LengthMismatch { slot, word } => {
                write!(f, "word '{}' does not fit slot {}", word, slot)
            }
            Violation::DuplicateWord { word } => write!(f, "word '{}' used more than once", word),
            Violation::OutOfBounds { slot } => {
                write!(f, "slot {} leaves the fillable grid", slot)
            }
            Violation::CellConflict { row, col, first, second } => write!(
                f,
                "cell ({}, {}) written as both '{}' and '{}'",
                row, col, first, second
            ),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(f, "Solution is valid")
        } else {
            writeln!(f, "Solution is invalid:")?;
            for violation in &self.violations {
                writeln!(f, "  - {}", violation)?;
            }
            Ok(())
        }
    }
}

impl SolutionValidator {
    /// Validate a solution against the expected slot list
    pub fn validate(solution: &Solution, expected_slots: &[Slot]) -> ValidationResult {
        let mut violations = Vec::new();

        for slot in expected_slots {
            if !solution.entries.iter().any(|entry| entry.slot == *slot) {
                violations.push(Violation::MissingSlot { slot: *slot });
            }
        }

        let mut seen_words: Vec<&str> = Vec::new();
        let mut cell_letters: BTreeMap<(usize, usize), char> = BTreeMap::new();

        for entry in &solution.entries {
            if entry.word.chars().count() != entry.slot.length {
                violations.push(Violation::LengthMismatch {
                    slot: entry.slot,
                    word: entry.word.clone(),
                });
                continue;
            }

            if seen_words.contains(&entry.word.as_str()) {
                violations.push(Violation::DuplicateWord {
                    word: entry.word.clone(),
                });
            }
            seen_words.push(&entry.word);

            let in_bounds = entry
                .slot
                .cells()
                .iter()
                .all(|&(row, col)| solution.structure.is_fillable(row, col));
            if !in_bounds {
                violations.push(Violation::OutOfBounds { slot: entry.slot });
                continue;
            }

            for (k, ch) in entry.word.chars().enumerate() {
                let (row, col) = entry.slot.cell(k);
                match cell_letters.get(&(row, col)) {
                    Some(&existing) if existing != ch => {
                        violations.push(Violation::CellConflict {
                            row,
                            col,
                            first: existing,
                            second: ch,
                        });
                    }
                    Some(_) => {}
                    None => {
                        cell_letters.insert((row, col), ch);
                    }
                }
            }
        }

        ValidationResult {
            is_valid: violations.is_empty(),
            violations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csp::SearchStats;
    use crate::generator::solution::SolutionEntry;
    use crate::puzzle::{find_slots, Direction, Structure};
    use std::time::Duration;

    fn cross_structure() -> Structure {
        Structure::from_cells(vec![
            vec![true, true, true],
            vec![true, false, false],
            vec![true, false, false],
        ])
        .unwrap()
    }

    fn solution_with(words: [&str; 2]) -> (Solution, Vec<Slot>) {
        let structure = cross_structure();
        let slots = find_slots(&structure);
        let entries = vec![
            SolutionEntry { slot: slots[0], word: words[0].to_string() },
            SolutionEntry { slot: slots[1], word: words[1].to_string() },
        ];
        (
            Solution::new(structure, entries, Duration::ZERO, SearchStats::default()),
            slots,
        )
    }

    #[test]
    fn test_valid_solution() {
        let (solution, slots) = solution_with(["car", "cat"]);
        let result = SolutionValidator::validate(&solution, &slots);
        assert!(result.is_valid, "{}", result);
    }

    #[test]
    fn test_crossing_conflict_detected() {
        let (solution, slots) = solution_with(["car", "dog"]);
        let result = SolutionValidator::validate(&solution, &slots);
        assert!(!result.is_valid);
        assert!(matches!(
            result.violations[0],
            Violation::CellConflict { row: 0, col: 0, first: 'c', second: 'd' }
        ));
    }

    #[test]
    fn test_duplicate_words_detected() {
        let (solution, slots) = solution_with(["cat", "cat"]);
        let result = SolutionValidator::validate(&solution, &slots);
        assert!(result
            .violations
            .iter()
            .any(|v| matches!(v, Violation::DuplicateWord { .. })));
    }

    #[test]
    fn test_length_mismatch_detected() {
        let (solution, slots) = solution_with(["car", "mouse"]);
        let result = SolutionValidator::validate(&solution, &slots);
        assert!(result
            .violations
            .iter()
            .any(|v| matches!(v, Violation::LengthMismatch { .. })));
    }

    #[test]
    fn test_missing_slot_detected() {
        let (mut solution, slots) = solution_with(["car", "cat"]);
        solution.entries.pop();
        let result = SolutionValidator::validate(&solution, &slots);
        assert!(result
            .violations
            .iter()
            .any(|v| matches!(v, Violation::MissingSlot { .. })));
    }

    #[test]
    fn test_out_of_bounds_detected() {
        let (mut solution, slots) = solution_with(["car", "cat"]);
        solution.entries.push(SolutionEntry {
            slot: Slot { row: 2, col: 0, direction: Direction::Across, length: 3 },
            word: "tin".to_string(),
        });
        let result = SolutionValidator::validate(&solution, &slots);
        assert!(result
            .violations
            .iter()
            .any(|v| matches!(v, Violation::OutOfBounds { .. })));
    }
}
