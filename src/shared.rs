use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::correction::StoryCorrections;
use crate::dictionary::Dictionary;
use crate::error::DictionaryError;
use crate::story::StoryCorrector;
use crate::string_strategy::StringStrategy;

/// Cloneable handle for serving one [`Dictionary`] to concurrent callers.
///
/// Mutations hold the write lock for their whole duration, so queries only
/// ever see fully applied additions and removals.
#[derive(Debug)]
pub struct SharedDictionary<T: StringStrategy> {
    inner: Arc<RwLock<Dictionary<T>>>,
}

impl<T: StringStrategy> Clone for SharedDictionary<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: StringStrategy> From<Dictionary<T>> for SharedDictionary<T> {
    fn from(dictionary: Dictionary<T>) -> Self {
        SharedDictionary::new(dictionary)
    }
}

impl<T: StringStrategy> SharedDictionary<T> {
    pub fn new(dictionary: Dictionary<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dictionary)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Dictionary<T>>, DictionaryError> {
        self.inner
            .read()
            .map_err(|e| DictionaryError::LockPoisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Dictionary<T>>, DictionaryError> {
        self.inner
            .write()
            .map_err(|e| DictionaryError::LockPoisoned(e.to_string()))
    }

    pub fn add_word(&self, word: &str) -> Result<bool, DictionaryError> {
        self.write()?.add_word(word)
    }

    pub fn remove_word(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.write()?.remove_word(word))
    }

    pub fn add_words<I, S>(&self, words: I) -> Result<Vec<String>, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.write()?.add_words(words))
    }

    pub fn remove_words<I, S>(&self, words: I) -> Result<Vec<String>, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.write()?.remove_words(words))
    }

    pub fn contains(&self, word: &str) -> Result<bool, DictionaryError> {
        Ok(self.read()?.contains(word))
    }

    pub fn list_words(&self) -> Result<Vec<String>, DictionaryError> {
        Ok(self.read()?.list_words())
    }

    pub fn closest_correction(&self, word: &str) -> Result<Option<String>, DictionaryError> {
        Ok(self.read()?.closest_correction(word))
    }

    pub fn correct_story(&self, story: &str) -> Result<StoryCorrections, DictionaryError> {
        let dictionary = self.read()?;
        Ok(StoryCorrector::new(&dictionary).correct(story))
    }
}
