//! Token clean-up applied before words are looked up or stored.

/// Trims whitespace, drops every leading ASCII punctuation mark and every
/// trailing character that is neither alphanumeric nor an apostrophe.
///
/// `"(Hello),"` becomes `"Hello"`, `"dogs'."` becomes `"dogs'"`.
pub fn sanitize_word(word: &str) -> &str {
    word.trim()
        .trim_start_matches(|c: char| c.is_ascii_punctuation())
        .trim_end_matches(|c: char| !(c.is_alphanumeric() || c == '\''))
}

/// Splits a story into whitespace separated tokens.
pub fn story_words(story: &str) -> impl Iterator<Item = &str> {
    story.split_whitespace()
}
