//! Interned word table shared by domains and the search engine

/// Index of a word in the [`Vocabulary`]
pub type WordId = u32;

/// The candidate word table. Words are interned once, in first-seen order,
/// and the solver passes `WordId`s around instead of strings. Each word
/// caches its character sequence so overlap comparisons index in O(1)
/// regardless of UTF-8 byte width.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    letters: Vec<Vec<char>>,
}

impl Vocabulary {
    /// Build a vocabulary from candidate words, dropping duplicates and
    /// keeping first-occurrence order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self::default();
        for word in words {
            let word = word.into();
            if !vocabulary.words.contains(&word) {
                vocabulary.letters.push(word.chars().collect());
                vocabulary.words.push(word);
            }
        }
        vocabulary
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The word for an id
    pub fn word(&self, id: WordId) -> &str {
        &self.words[id as usize]
    }

    /// Character length of a word
    pub fn word_len(&self, id: WordId) -> usize {
        self.letters[id as usize].len()
    }

    /// Character at a given offset of a word
    pub fn letter(&self, id: WordId, offset: usize) -> char {
        self.letters[id as usize][offset]
    }

    /// All word ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = WordId> {
        0..self.words.len() as WordId
    }
}
