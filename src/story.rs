use log::{debug, warn};

use crate::correction::{StoryCorrections, WordCorrection};
use crate::dictionary::Dictionary;
use crate::string_strategy::StringStrategy;
use crate::word_validation::{sanitize_word, story_words};

/// Finds corrections for the words of a story that are missing from a
/// dictionary.
pub struct StoryCorrector<'a, T: StringStrategy> {
    dictionary: &'a Dictionary<T>,
}

impl<'a, T: StringStrategy> StoryCorrector<'a, T> {
    pub fn new(dictionary: &'a Dictionary<T>) -> StoryCorrector<'a, T> {
        StoryCorrector { dictionary }
    }

    pub fn correct(&self, story: &str) -> StoryCorrections {
        StoryCorrections {
            story: story.to_string(),
            unmatched_words: self.corrections(story),
        }
    }

    /// One entry per token that is not in the dictionary, in story order.
    ///
    /// Tokens outside the dictionary's alphabet, or too long to search, are
    /// reported with an empty correction. A correction keeps the capital
    /// first letter of the token it replaces.
    pub fn corrections(&self, story: &str) -> Vec<WordCorrection> {
        story_words(story)
            .filter_map(|token| self.correct_token(token))
            .collect()
    }

    fn correct_token(&self, token: &str) -> Option<WordCorrection> {
        let strategy = self.dictionary.string_strategy();
        let sanitized = sanitize_word(token);

        if sanitized.is_empty() {
            debug!("Token {:?} has no word characters. Skipping...", token);
            return None;
        }

        let word = strategy.prepare(sanitized);
        if !strategy.is_valid_word(&word) {
            warn!("Invalid word provided for correction: {:?}. Will not attempt to correct...", token);
            return Some(WordCorrection::uncorrectable(token));
        }
        if !self.dictionary.can_be_indexed(&word) {
            warn!("Word {:?} is too long to correct", token);
            return Some(WordCorrection::uncorrectable(token));
        }
        if self.dictionary.contains(&word) {
            debug!("Word {:?} found in dictionary. No correction required.", token);
            return None;
        }

        let correction = self
            .dictionary
            .closest_correction(&word)
            .map(|correction| match_case(sanitized, &correction))
            .unwrap_or_default();
        debug!("Final correction for {:?} is {:?}.", token, correction);
        Some(WordCorrection::new(token, correction))
    }
}

/// Upper-cases the first character of `correction` when `original` starts
/// with an upper-case character.
pub fn match_case(original: &str, correction: &str) -> String {
    let capitalized = original.chars().next().is_some_and(char::is_uppercase);
    let mut chars = correction.chars();

    match chars.next() {
        Some(first) if capitalized => first.to_uppercase().chain(chars).collect(),
        _ => correction.to_string(),
    }
}
