/// A story token missing from the dictionary together with its best
/// correction. An empty `close_match` means nothing was close enough.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WordCorrection {
    pub word: String,
    pub close_match: String,
}

impl WordCorrection {
    pub fn new(word: impl Into<String>, close_match: impl Into<String>) -> WordCorrection {
        WordCorrection {
            word: word.into(),
            close_match: close_match.into(),
        }
    }

    pub fn uncorrectable(word: impl Into<String>) -> WordCorrection {
        WordCorrection::new(word, "")
    }

    pub fn is_uncorrectable(&self) -> bool {
        self.close_match.is_empty()
    }
}

/// The corrected story as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StoryCorrections {
    pub story: String,
    pub unmatched_words: Vec<WordCorrection>,
}
