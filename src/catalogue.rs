use std::collections::BTreeSet;

/// The dictionary's words in lexicographic order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordCatalogue {
    words: BTreeSet<String>,
}

impl WordCatalogue {
    pub fn new() -> WordCatalogue {
        WordCatalogue::default()
    }

    /// Returns `false` when the word was already catalogued.
    pub fn add(&mut self, word: &str) -> bool {
        self.words.insert(word.to_string())
    }

    pub fn remove(&mut self, word: &str) -> bool {
        self.words.remove(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// All words, ascending.
    pub fn list_all(&self) -> Vec<String> {
        self.words.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
