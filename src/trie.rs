use std::collections::{BinaryHeap, HashSet};
use std::sync::Arc;

use crate::error::DictionaryError;
use crate::match_state::MatchState;

/// A node of the wildcard trie.
///
/// Besides the exact children keyed by character, every node that has an
/// exact child also owns a single wildcard child standing in for "any
/// character" at that depth. Because several words can reach the same
/// wildcard path, a node keeps the full set of words ending at it rather
/// than a terminal flag.
///
/// A word lands in up to `2^len` nodes, so nodes stay small: children are a
/// sorted `Vec`, the word set is a sorted `Vec` of handles shared by every
/// node the word ends at, and none of them allocate while empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct TrieNode {
    children: Vec<(char, TrieNode)>,
    wildcard: Option<Box<TrieNode>>,
    words: Vec<Arc<str>>,
}

impl TrieNode {
    fn child(&self, c: char) -> Option<&TrieNode> {
        self.children
            .binary_search_by_key(&c, |&(k, _)| k)
            .ok()
            .map(|i| &self.children[i].1)
    }

    fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        let i = match self.children.binary_search_by_key(&c, |&(k, _)| k) {
            Ok(i) => i,
            Err(i) => {
                self.children.insert(i, (c, TrieNode::default()));
                i
            }
        };
        &mut self.children[i].1
    }

    fn holds(&self, word: &str) -> bool {
        self.word_position(word).is_ok()
    }

    fn word_position(&self, word: &str) -> Result<usize, usize> {
        self.words.binary_search_by(|w| (**w).cmp(word))
    }

    fn is_empty(&self) -> bool {
        self.words.is_empty() && self.children.is_empty() && self.wildcard.is_none()
    }

    fn insert(&mut self, word: &Arc<str>, rest: &[char]) {
        let Some((&c, rest)) = rest.split_first() else {
            if let Err(i) = self.word_position(word) {
                self.words.insert(i, Arc::clone(word));
            }
            return;
        };

        self.child_or_insert(c).insert(word, rest);
        self.wildcard
            .get_or_insert_with(Box::default)
            .insert(word, rest);
    }

    fn delete(&mut self, word: &str, rest: &[char]) {
        let Some((&c, rest)) = rest.split_first() else {
            match self.word_position(word) {
                Ok(i) => {
                    self.words.remove(i);
                }
                Err(_) => panic!("trie node on the path of {:?} does not hold it", word),
            }
            return;
        };

        let i = self
            .children
            .binary_search_by_key(&c, |&(k, _)| k)
            .unwrap_or_else(|_| panic!("missing {:?} edge while deleting {:?}", c, word));
        let child = &mut self.children[i].1;
        child.delete(word, rest);
        if child.is_empty() {
            self.children.remove(i);
        }

        let wildcard = self
            .wildcard
            .as_deref_mut()
            .unwrap_or_else(|| panic!("missing wildcard edge while deleting {:?}", word));
        wildcard.delete(word, rest);
        if wildcard.is_empty() {
            self.wildcard = None;
        }
    }

    #[cfg(test)]
    fn node_count(&self) -> usize {
        1 + self.children.iter().map(|(_, child)| child.node_count()).sum::<usize>()
            + self.wildcard.as_ref().map_or(0, |w| w.node_count())
    }
}

/// Prefix tree with a wildcard branch at every level.
///
/// Every word is stored along `2^len` paths: at each depth the path either
/// follows the word's real character or the wildcard. A fuzzy lookup is then
/// a single walk that can trade an error for a wildcard step instead of
/// comparing the query against every stored word.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Trie {
        Trie::default()
    }

    /// Stores `word` along its exact path and every wildcard variant of it.
    pub fn insert(&mut self, word: &str) -> Result<(), DictionaryError> {
        if word.is_empty() {
            return Err(DictionaryError::EmptyWord);
        }

        let chars: Vec<char> = word.chars().collect();
        self.root.insert(&Arc::from(word), &chars);
        Ok(())
    }

    /// Exact membership. Only real character edges are followed.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            match node.child(c) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.holds(word)
    }

    /// Removes `word`, pruning every exact or wildcard edge whose subtree no
    /// longer holds any word. Returns `false` without touching the trie when
    /// the word is absent.
    pub fn delete(&mut self, word: &str) -> bool {
        if !self.contains(word) {
            return false;
        }

        let chars: Vec<char> = word.chars().collect();
        self.root.delete(word, &chars);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns every stored word reachable from `word` with the fewest errors,
    /// where one error is a substituted, an extra, or a missing character.
    ///
    /// At most `ceil(len / 2)` errors are tolerated. States are expanded in
    /// increasing error order and the budget drops to the error count of the
    /// first complete match, so the result only ever holds the best tier.
    pub fn closest_matches(&self, word: &str) -> HashSet<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut max_errors = chars.len().div_ceil(2);
        let mut best_matches = HashSet::new();

        let mut queue = BinaryHeap::new();
        queue.push(MatchState::new(0, &self.root, 0));

        while let Some(state) = queue.pop() {
            if state.errors > max_errors {
                continue;
            }
            let node = state.node;

            let Some(&c) = chars.get(state.index) else {
                if node.words.is_empty() {
                    continue;
                }
                if state.errors < max_errors {
                    best_matches.clear();
                    max_errors = state.errors;
                }
                best_matches.extend(node.words.iter().map(|w| w.to_string()));
                continue;
            };

            // an exact step is free and never blocked by the budget
            if let Some(child) = node.child(c) {
                queue.push(MatchState::new(state.index + 1, child, state.errors));
            }

            if state.errors == max_errors {
                continue;
            }
            let errors = state.errors + 1;

            if let Some(wildcard) = node.wildcard.as_deref() {
                // substituted character
                queue.push(MatchState::new(state.index + 1, wildcard, errors));
                // character missing from the input
                queue.push(MatchState::new(state.index, wildcard, errors));
            }
            // extra character in the input
            queue.push(MatchState::new(state.index + 1, node, errors));
        }

        best_matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    fn set_of(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn words_at(node: &TrieNode) -> Vec<&str> {
        node.words.iter().map(|w| &**w).collect()
    }

    #[test]
    fn insert_rejects_empty_word() {
        let mut trie = Trie::new();
        assert!(matches!(trie.insert(""), Err(DictionaryError::EmptyWord)));
        assert!(trie.is_empty());
    }

    #[test]
    fn contains_follows_exact_edges_only() {
        let trie = trie_of(&["cat"]);
        assert!(trie.contains("cat"));
        assert!(!trie.contains("ca"));
        assert!(!trie.contains("cats"));
        assert!(!trie.contains("cot"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn insert_mirrors_every_edge_with_a_wildcard() {
        let trie = trie_of(&["ab"]);
        // root, {a, *}, {ab, a*, *b, **}
        assert_eq!(trie.root.node_count(), 7);

        let a = trie.root.child('a').unwrap();
        let star = trie.root.wildcard.as_deref().unwrap();
        for leaf in [
            a.child('b').unwrap(),
            a.wildcard.as_deref().unwrap(),
            star.child('b').unwrap(),
            star.wildcard.as_deref().unwrap(),
        ] {
            assert_eq!(words_at(leaf), ["ab"]);
        }
    }

    #[test]
    fn wildcard_edges_are_shared_between_words() {
        let trie = trie_of(&["ab", "cb"]);
        let star = trie.root.wildcard.as_deref().unwrap();
        assert_eq!(star.children.len(), 1);
        assert_eq!(words_at(star.child('b').unwrap()), ["ab", "cb"]);
        // root, {a, c, *}, {ab, a*, cb, c*, *b, **}
        assert_eq!(trie.root.node_count(), 10);
    }

    #[test]
    fn delete_missing_word_leaves_trie_untouched() {
        let mut trie = trie_of(&["cat", "cut"]);
        let before = trie.clone();
        assert!(!trie.delete("cot"));
        assert!(!trie.delete("ca"));
        assert!(!trie.delete(""));
        assert_eq!(trie, before);
    }

    #[test]
    fn delete_keeps_words_sharing_a_prefix() {
        let mut trie = trie_of(&["hello", "help"]);
        assert!(trie.delete("hello"));
        assert!(!trie.contains("hello"));
        assert!(trie.contains("help"));
        assert_eq!(trie, trie_of(&["help"]));
        assert!(!trie.delete("hello"));
    }

    #[test]
    fn delete_prunes_only_empty_subtrees() {
        let mut trie = trie_of(&["a", "ab"]);
        assert!(trie.delete("ab"));
        assert!(trie.contains("a"));

        let a = trie.root.child('a').unwrap();
        assert!(a.children.is_empty());
        assert!(a.wildcard.is_none());
        assert_eq!(words_at(a), ["a"]);

        let star = trie.root.wildcard.as_deref().unwrap();
        assert!(!star.is_empty());
        assert_eq!(words_at(star), ["a"]);
        assert!(star.children.is_empty());
    }

    #[test]
    fn deleting_several_words_matches_a_trie_built_without_them() {
        let mut trie = trie_of(&["cat", "cut", "cart", "a", "at", "bat", "cats"]);
        for word in ["cat", "a", "cats"] {
            assert!(trie.delete(word));
        }
        assert_eq!(trie, trie_of(&["cut", "cart", "at", "bat"]));
        assert_eq!(trie.closest_matches("cot"), set_of(&["cut"]));
    }

    #[test]
    fn terminal_nodes_share_one_word_allocation() {
        let trie = trie_of(&["abc"]);
        let leaf = trie.root.child('a').unwrap().child('b').unwrap().child('c').unwrap();
        // one handle per exact or wildcard variant of the three edges
        assert_eq!(Arc::strong_count(&leaf.words[0]), 8);
    }

    #[test]
    fn long_word_node_count_is_bounded() {
        let word = "abcdefghijklmnop";
        let mut trie = trie_of(&[word]);
        assert_eq!(trie.root.node_count(), (1 << (word.len() + 1)) - 1);
        assert!(std::mem::size_of::<TrieNode>() <= 64);

        assert!(trie.delete(word));
        assert_eq!(trie, Trie::new());
    }

    #[test]
    fn empty_nodes_do_not_allocate() {
        let trie = trie_of(&["ab"]);
        let leaf = trie.root.child('a').unwrap().child('b').unwrap();
        assert_eq!(leaf.children.capacity(), 0);
        assert!(trie.root.words.is_empty());
        assert_eq!(trie.root.words.capacity(), 0);
    }

    #[test]
    fn deleting_everything_restores_a_fresh_trie() {
        let words = ["cat", "bat", "cut", "cart", "a", "at"];
        let mut trie = trie_of(&words);
        for word in words.iter().rev() {
            assert!(trie.delete(word));
        }
        assert_eq!(trie, Trie::new());
        assert!(trie.is_empty());
    }

    #[test]
    fn empty_trie_has_no_matches() {
        assert!(Trie::new().closest_matches("cat").is_empty());
    }

    #[test]
    fn substitution_tier() {
        let trie = trie_of(&["cat", "bat", "cut"]);
        assert_eq!(trie.closest_matches("cot"), set_of(&["cat", "cut"]));
    }

    #[test]
    fn nothing_within_budget() {
        let trie = trie_of(&["boat"]);
        assert!(trie.closest_matches("xxxx").is_empty());
    }

    #[test]
    fn exact_match_wins_alone() {
        let trie = trie_of(&["cat", "cot", "cut"]);
        assert_eq!(trie.closest_matches("cat"), set_of(&["cat"]));
    }

    #[test]
    fn missing_character_in_input() {
        let trie = trie_of(&["apple"]);
        assert_eq!(trie.closest_matches("aple"), set_of(&["apple"]));
    }

    #[test]
    fn extra_character_in_input() {
        let trie = trie_of(&["cat"]);
        assert_eq!(trie.closest_matches("catt"), set_of(&["cat"]));
    }

    #[test]
    fn different_edits_share_a_tier() {
        let trie = trie_of(&["hello", "help"]);
        assert_eq!(trie.closest_matches("helo"), set_of(&["hello", "help"]));
    }

    #[test]
    fn worse_tiers_are_dropped() {
        let trie = trie_of(&["bat", "bolt"]);
        assert_eq!(trie.closest_matches("bet"), set_of(&["bat"]));
    }

    #[test]
    fn exact_steps_continue_at_the_budget_ceiling() {
        let trie = trie_of(&["xyz"]);
        assert_eq!(trie.closest_matches("abz"), set_of(&["xyz"]));
    }

    #[test]
    fn budget_is_half_the_input_rounded_up() {
        let trie = trie_of(&["xy"]);
        assert!(trie.closest_matches("ab").is_empty());
        assert_eq!(trie.closest_matches("aby"), set_of(&["xy"]));
    }
}
