use unidecode::unidecode;

/// Decides which alphabet a dictionary accepts and how raw tokens are
/// brought into dictionary form before they reach the trie.
pub trait StringStrategy: Clone + Default {
    fn new() -> Self;
    /// Normalizes a sanitized token into the stored (lowercase) form.
    fn prepare(&self, s: &str) -> String;
    /// True when `s` is non-empty and made only of letters, `'` and `-`.
    fn is_valid_word(&self, s: &str) -> bool;
    fn len(&self, s: &str) -> usize;
}

fn is_word_punctuation(c: char) -> bool {
    c == '\'' || c == '-'
}

/// Transliterates to ASCII and accepts `[a-zA-Z'-]` only.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default)]
pub struct AsciiStringStrategy {}

impl StringStrategy for AsciiStringStrategy {
    fn new() -> Self {
        Self {}
    }

    fn prepare(&self, s: &str) -> String {
        unidecode(s).to_ascii_lowercase()
    }

    fn is_valid_word(&self, s: &str) -> bool {
        !s.is_empty()
            && s
                .chars()
                .all(|c| c.is_ascii_alphabetic() || is_word_punctuation(c))
    }

    fn len(&self, s: &str) -> usize {
        s.len()
    }
}

/// Keeps tokens as they are apart from lowercasing; any alphabetic
/// character is allowed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Default)]
pub struct UnicodeStringStrategy {}

impl StringStrategy for UnicodeStringStrategy {
    fn new() -> Self {
        Self {}
    }

    fn prepare(&self, s: &str) -> String {
        s.to_lowercase()
    }

    fn is_valid_word(&self, s: &str) -> bool {
        !s.is_empty() && s.chars().all(|c| c.is_alphabetic() || is_word_punctuation(c))
    }

    fn len(&self, s: &str) -> usize {
        s.chars().count()
    }
}
