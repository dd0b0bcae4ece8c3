use std::cmp::{Ordering, Reverse};

use crate::trie::TrieNode;

/// One position of the fuzzy walk: how much of the input has been consumed,
/// where in the trie we are, and how many errors it took to get there.
#[derive(Debug)]
pub(crate) struct MatchState<'a> {
    pub index: usize,
    pub node: &'a TrieNode,
    pub errors: usize,
}

impl<'a> MatchState<'a> {
    pub fn new(index: usize, node: &'a TrieNode, errors: usize) -> MatchState<'a> {
        MatchState {
            index,
            node,
            errors,
        }
    }
}

impl MatchState<'_> {
    // BinaryHeap pops the greatest element, so fewer errors must compare greater.
    fn key(&self) -> (Reverse<usize>, usize, *const TrieNode) {
        (Reverse(self.errors), self.index, std::ptr::from_ref(self.node))
    }
}

impl Ord for MatchState<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for MatchState<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MatchState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl Eq for MatchState<'_> {}
