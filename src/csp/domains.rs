//! Per-slot candidate domains with snapshot/restore

use super::constraint_graph::SlotId;
use super::vocabulary::{Vocabulary, WordId};

/// Candidate words remaining for each slot, indexed by `SlotId`. Domains
/// preserve vocabulary insertion order, which fixes every iteration order the
/// heuristics see. The store is the only solver structure mutated during the
/// search; each branch snapshots it before propagating and restores on
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    domains: Vec<Vec<WordId>>,
}

/// A saved copy of every domain, handed back to [`DomainStore::restore`]
#[derive(Debug, Clone)]
pub struct DomainSnapshot {
    domains: Vec<Vec<WordId>>,
}

impl DomainStore {
    /// Initialize every slot's domain to the full vocabulary
    pub fn new(slot_count: usize, vocabulary: &Vocabulary) -> Self {
        let full: Vec<WordId> = vocabulary.ids().collect();
        Self {
            domains: vec![full; slot_count],
        }
    }

    /// Candidate words for a slot, in insertion order
    pub fn domain(&self, slot: SlotId) -> &[WordId] {
        &self.domains[slot]
    }

    /// Current domain size of a slot
    pub fn domain_size(&self, slot: SlotId) -> usize {
        self.domains[slot].len()
    }

    /// Whether any slot has run out of candidates
    pub fn has_empty_domain(&self) -> bool {
        self.domains.iter().any(|domain| domain.is_empty())
    }

    /// Remove every candidate the predicate rejects; returns true if the
    /// domain shrank.
    pub fn retain<F>(&mut self, slot: SlotId, mut keep: F) -> bool
    where
        F: FnMut(WordId) -> bool,
    {
        let before = self.domains[slot].len();
        self.domains[slot].retain(|&word| keep(word));
        self.domains[slot].len() != before
    }

    /// Narrow a slot to a single chosen word. This is the search engine's
    /// provisional narrowing; propagation then pushes the fixed value into
    /// the neighbors' domains.
    pub fn assign(&mut self, slot: SlotId, word: WordId) {
        self.domains[slot].clear();
        self.domains[slot].push(word);
    }

    /// Copy every domain for later [`restore`](Self::restore)
    pub fn snapshot(&self) -> DomainSnapshot {
        DomainSnapshot {
            domains: self.domains.clone(),
        }
    }

    /// Roll the store back to a snapshot taken earlier on this branch
    pub fn restore(&mut self, snapshot: DomainSnapshot) {
        self.domains = snapshot.domains;
    }
}

/// Remove from every domain the words whose length differs from the slot's
/// length. Runs once, before arc consistency.
pub fn enforce_node_consistency(
    domains: &mut DomainStore,
    slots: &[crate::puzzle::Slot],
    vocabulary: &Vocabulary,
) {
    for (slot_id, slot) in slots.iter().enumerate() {
        domains.retain(slot_id, |word| vocabulary.word_len(word) == slot.length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Direction, Slot};

    fn slot(length: usize) -> Slot {
        Slot { row: 0, col: 0, direction: Direction::Across, length }
    }

    #[test]
    fn test_initial_domains_are_full() {
        let vocab = Vocabulary::from_words(["cat", "dog", "bird"]);
        let domains = DomainStore::new(2, &vocab);
        assert_eq!(domains.domain(0), &[0, 1, 2]);
        assert_eq!(domains.domain(1), &[0, 1, 2]);
    }

    #[test]
    fn test_node_consistency_filters_by_length() {
        let vocab = Vocabulary::from_words(["cat", "dog", "bird", "horse"]);
        let slots = vec![slot(3), slot(5)];
        let mut domains = DomainStore::new(2, &vocab);

        enforce_node_consistency(&mut domains, &slots, &vocab);

        assert_eq!(domains.domain(0), &[0, 1]); // cat, dog
        assert_eq!(domains.domain(1), &[3]); // horse
    }

    #[test]
    fn test_node_consistency_is_idempotent() {
        let vocab = Vocabulary::from_words(["cat", "dog", "bird"]);
        let slots = vec![slot(3)];
        let mut domains = DomainStore::new(1, &vocab);

        enforce_node_consistency(&mut domains, &slots, &vocab);
        let filtered = domains.clone();
        enforce_node_consistency(&mut domains, &slots, &vocab);
        assert_eq!(domains, filtered);
    }

    #[test]
    fn test_snapshot_restore_round_trip() {
        let vocab = Vocabulary::from_words(["cat", "dog", "bird"]);
        let mut domains = DomainStore::new(2, &vocab);

        let snapshot = domains.snapshot();
        let before = domains.clone();

        domains.assign(0, 1);
        domains.retain(1, |word| word != 0);
        assert_ne!(domains, before);

        domains.restore(snapshot);
        assert_eq!(domains, before);
    }

    #[test]
    fn test_assign_narrows_to_single_word() {
        let vocab = Vocabulary::from_words(["cat", "dog"]);
        let mut domains = DomainStore::new(1, &vocab);
        domains.assign(0, 1);
        assert_eq!(domains.domain(0), &[1]);
    }

    #[test]
    fn test_empty_domain_detection() {
        let vocab = Vocabulary::from_words(["cat"]);
        let mut domains = DomainStore::new(1, &vocab);
        assert!(!domains.has_empty_domain());
        domains.retain(0, |_| false);
        assert!(domains.has_empty_domain());
    }
}
