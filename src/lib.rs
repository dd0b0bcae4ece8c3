/*!

"Did you mean" spelling correction over a mutable dictionary.

Words are stored in a trie that mirrors every edge with a wildcard edge, so a
single priority-ordered walk finds the dictionary words reachable from a
misspelling with the fewest substituted, extra or missing characters.

# Basic Example

```
use trie_corrector::{AsciiStringStrategy, Dictionary, StoryCorrector};

let mut dictionary: Dictionary<AsciiStringStrategy> = Dictionary::new();
dictionary.add_words(["the", "cat", "bat", "cut", "sat"]);

assert_eq!(dictionary.closest_correction("cot"), Some("cat".to_string()));

let corrections = StoryCorrector::new(&dictionary).corrections("The cot sat");
assert_eq!(corrections[0].word, "cot");
assert_eq!(corrections[0].close_match, "cat");
```
*/

#[macro_use]
extern crate derive_builder;

mod catalogue;
mod correction;
mod dictionary;
mod error;
mod match_state;
mod shared;
mod story;
mod string_strategy;
mod trie;
pub mod word_validation;

pub use catalogue::WordCatalogue;
pub use correction::{StoryCorrections, WordCorrection};
pub use dictionary::{DEFAULT_MAX_WORD_LENGTH, Dictionary, DictionaryBuilder, DictionaryBuilderError};
pub use error::DictionaryError;
pub use shared::SharedDictionary;
pub use story::{StoryCorrector, match_case};
pub use string_strategy::{AsciiStringStrategy, StringStrategy, UnicodeStringStrategy};
pub use trie::Trie;
