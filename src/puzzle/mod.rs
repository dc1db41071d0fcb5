//! Crossword puzzle structure and input handling

pub mod grid;
pub mod slot;
pub mod io;

pub use grid::Structure;
pub use slot::{Direction, Slot, find_slots};
pub use io::{
    load_structure_from_file, load_words_from_file, parse_structure_from_string,
    parse_words_from_string, create_example_puzzle, PuzzleError,
};
