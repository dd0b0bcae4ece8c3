use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::catalogue::WordCatalogue;
use crate::error::DictionaryError;
use crate::string_strategy::StringStrategy;
use crate::trie::Trie;
use crate::word_validation::sanitize_word;

/// Words longer than this are never indexed by default.
///
/// A word of `n` characters is stored on `2^n` trie paths, up to
/// `2^(n + 1) - 1` nodes of its own before sharing with other words. At 16
/// that is about 131k small nodes for the worst single word; every extra
/// character doubles it.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 16;

/// The spelling dictionary: a wildcard [`Trie`] for lookups and corrections
/// kept in lockstep with a sorted [`WordCatalogue`] for listing and
/// tie-breaking. A word is in both or in neither.
///
/// ```
/// use trie_corrector::{AsciiStringStrategy, Dictionary, DictionaryBuilder};
///
/// let mut dictionary: Dictionary<AsciiStringStrategy> = DictionaryBuilder::default()
///     .max_word_length(16)
///     .build()
///     .unwrap();
/// dictionary.add_words(["cat", "bat", "cut"]);
/// assert_eq!(dictionary.closest_correction("cot"), Some("cat".to_string()));
/// ```
#[derive(Builder, Clone, Debug)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct Dictionary<T: StringStrategy> {
    /// Longest token, in characters, that batch insertion, corpus loading and
    /// story correction will index or look up. A stored word occupies
    /// `2^len` trie paths.
    #[builder(default = "DEFAULT_MAX_WORD_LENGTH")]
    max_word_length: usize,
    #[builder(default = "T::new()")]
    string_strategy: T,
    #[builder(setter(skip))]
    trie: Trie,
    #[builder(setter(skip))]
    catalogue: WordCatalogue,
}

impl<T: StringStrategy> DictionaryBuilder<T> {
    fn validate(&self) -> Result<(), String> {
        if self.max_word_length == Some(0) {
            return Err("max_word_length must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl<T: StringStrategy> Default for Dictionary<T> {
    fn default() -> Dictionary<T> {
        Dictionary {
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
            string_strategy: T::new(),
            trie: Trie::new(),
            catalogue: WordCatalogue::new(),
        }
    }
}

impl<T: StringStrategy> Dictionary<T> {
    pub fn new() -> Dictionary<T> {
        Dictionary::default()
    }

    pub fn max_word_length(&self) -> usize {
        self.max_word_length
    }

    pub fn string_strategy(&self) -> &T {
        &self.string_strategy
    }

    /// Whether `word` is short enough to be indexed or searched.
    pub fn can_be_indexed(&self, word: &str) -> bool {
        self.string_strategy.len(word) <= self.max_word_length
    }

    /// Adds an already clean, lowercase word. Returns `Ok(false)` when the
    /// word is present already.
    pub fn add_word(&mut self, word: &str) -> Result<bool, DictionaryError> {
        if self.contains(word) {
            return Ok(false);
        }

        self.trie.insert(word)?;
        self.catalogue.add(word);
        Ok(true)
    }

    /// Removes `word`. Returns `false` when it was not in the dictionary.
    pub fn remove_word(&mut self, word: &str) -> bool {
        self.catalogue.remove(word);
        self.trie.delete(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    /// Every word, in ascending lexicographic order.
    pub fn list_words(&self) -> Vec<String> {
        self.catalogue.list_all()
    }

    /// All words in the best error tier for `word`.
    pub fn closest_matches(&self, word: &str) -> HashSet<String> {
        self.trie.closest_matches(word)
    }

    /// The lexicographically smallest word among the closest matches.
    pub fn closest_correction(&self, word: &str) -> Option<String> {
        let correction = self.trie.closest_matches(word).into_iter().min();
        debug_assert!(
            correction.as_ref().is_none_or(|c| self.catalogue.contains(c)),
            "trie and catalogue disagree on {:?}",
            correction
        );
        debug!("Closest correction for {:?} is {:?}", word, correction);
        correction
    }

    pub fn len(&self) -> usize {
        self.catalogue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogue.is_empty()
    }

    /// Sanitizes and prepares raw words, then adds them. Words that end up
    /// empty, contain characters outside the strategy's alphabet or exceed
    /// `max_word_length` are dropped. Returns the prepared words that were
    /// already present.
    pub fn add_words<I, S>(&mut self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut duplicates = Vec::new();

        for raw in words {
            let raw = raw.as_ref();
            let word = self.string_strategy.prepare(sanitize_word(raw));

            if !self.string_strategy.is_valid_word(&word) {
                warn!("Invalid word found: {:?}. Will not add to dictionary...", raw);
                continue;
            }
            if !self.can_be_indexed(&word) {
                warn!(
                    "Word {:?} is longer than {} characters. Will not add to dictionary...",
                    raw, self.max_word_length
                );
                continue;
            }

            match self.add_word(&word) {
                Ok(true) => {}
                Ok(false) => {
                    debug!("Word already exists: {:?}. Skipping...", word);
                    duplicates.push(word);
                }
                Err(err) => warn!("Could not add {:?}: {}", word, err),
            }
        }

        duplicates
    }

    /// Removes words exactly as given. Words with characters outside the
    /// strategy's alphabet are skipped. Returns the words that were not found.
    pub fn remove_words<I, S>(&mut self, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut not_found = Vec::new();

        for word in words {
            let word = word.as_ref();

            if !self.string_strategy.is_valid_word(word) {
                warn!("Invalid word provided: {:?}. Will not delete from dictionary...", word);
                continue;
            }
            if !self.remove_word(word) {
                debug!("Word not found in dictionary: {:?}. Skipping...", word);
                not_found.push(word.to_string());
            }
        }

        not_found
    }

    /// Loads a corpus file, one entry per line. The term is the field at
    /// `term_index` once the line is split by `separator`, so frequency lists
    /// such as `the 23135851162` load with `term_index = 0, separator = " "`.
    /// Returns how many new words were added.
    pub fn load_dictionary(
        &mut self,
        corpus: impl AsRef<Path>,
        term_index: usize,
        separator: &str,
    ) -> Result<usize, DictionaryError> {
        let corpus = corpus.as_ref();
        let reader = BufReader::new(File::open(corpus)?);

        let mut added = 0;
        for line in reader.lines() {
            if self.load_dictionary_line(&line?, term_index, separator) {
                added += 1;
            }
        }

        info!("Loaded {} words from {:?} ({} total)", added, corpus, self.len());
        Ok(added)
    }

    /// Same as [`Dictionary::load_dictionary`] for an in-memory corpus.
    pub fn load_dictionary_from_str(
        &mut self,
        corpus: &str,
        term_index: usize,
        separator: &str,
    ) -> usize {
        let added = corpus
            .lines()
            .filter(|line| self.load_dictionary_line(line, term_index, separator))
            .count();

        info!("Loaded {} words ({} total)", added, self.len());
        added
    }

    /// Adds the term of a single corpus line. Returns `true` when it was new.
    pub fn load_dictionary_line(&mut self, line: &str, term_index: usize, separator: &str) -> bool {
        let Some(term) = line.split(separator).nth(term_index) else {
            return false;
        };
        if sanitize_word(term).is_empty() {
            return false;
        }

        let before = self.len();
        self.add_words([term]);
        self.len() > before
    }
}
