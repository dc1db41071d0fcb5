//! Constraint-satisfaction core: vocabulary, constraint graph, domains,
//! arc consistency, and backtracking search

pub mod vocabulary;
pub mod constraint_graph;
pub mod domains;
pub mod ac3;
pub mod search;

pub use vocabulary::{Vocabulary, WordId};
pub use constraint_graph::{ConstraintGraph, SlotId};
pub use domains::{enforce_node_consistency, DomainSnapshot, DomainStore};
pub use ac3::{enforce_arc_consistency, revise};
pub use search::{Assignment, BacktrackingSearch, SearchOutcome, SearchStats};
