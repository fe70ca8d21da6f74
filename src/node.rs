//! Arena records of the tree: nodes, edges and the per-node word sets.

use std::fmt;

pub type NodeId = usize;

/// The root always occupies the first arena slot.
pub const ROOT: NodeId = 0;

/// A set of word ids, one bit per word. Word ids are bounded by the
/// terminator alphabet, so 16 bits are plenty.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Membership(u16);

impl Membership {
    pub fn singleton(word: usize) -> Self {
        let mut set = Self::default();
        set.insert(word);
        set
    }

    /// Returns `true` if `word` was not present before.
    pub fn insert(&mut self, word: usize) -> bool {
        debug_assert!(word < 16, "word id {word} out of range");
        let bit = 1u16 << word;
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    pub fn contains(&self, word: usize) -> bool {
        word < 16 && self.0 & (1 << word) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..16).filter(move |w| self.contains(*w))
    }
}

impl fmt::Debug for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A tree vertex. Edges are stored separately in the edge index, so a node
/// only knows how it hangs from its parent.
#[derive(Debug, Clone)]
pub struct Node {
    /// String depth: number of corpus bytes on the path from the root.
    pub depth: usize,

    pub parent: Option<NodeId>,

    pub suffix_link: Option<NodeId>,

    /// First byte of the label of the edge from `parent`. Meaningless for
    /// the root.
    pub first_edge_char: u8,

    pub membership: Membership,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            depth: 0,
            parent: None,
            suffix_link: None,
            first_edge_char: 0,
            membership: Membership::default(),
        }
    }

    pub(crate) fn new(parent: NodeId, first_edge_char: u8, depth: usize) -> Self {
        Self {
            depth,
            parent: Some(parent),
            suffix_link: None,
            first_edge_char,
            membership: Membership::default(),
        }
    }

    pub(crate) fn get_suffix_link(&self) -> NodeId {
        match self.suffix_link {
            Some(link) => link,
            None => panic!("Invalid suffix link"),
        }
    }
}

/// Right boundary of an edge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    Closed(usize),
    /// Leaf edges grow with the tree: the end is whatever position the
    /// construction has reached when the label is read.
    Open,
}

/// An edge labeled by the half-open corpus range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub start: usize,
    pub end: EdgeEnd,
    pub child: NodeId,
}

impl Edge {
    /// Resolves the label's end against the tree's current end position.
    pub fn end_at(&self, current_end: usize) -> usize {
        match self.end {
            EdgeEnd::Closed(end) => end,
            EdgeEnd::Open => current_end,
        }
    }

    pub fn len_at(&self, current_end: usize) -> usize {
        self.end_at(current_end) - self.start
    }

    pub fn is_leaf(&self) -> bool {
        self.end == EdgeEnd::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_insert_is_idempotent() {
        let mut set = Membership::default();
        assert!(set.is_empty());
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert!(set.insert(0));
        assert_eq!(set.len(), 2);
        assert!(set.contains(0) && set.contains(3));
        assert!(!set.contains(1));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 3]);
        assert_eq!(format!("{set:?}"), "{0, 3}");
    }

    #[test]
    fn test_membership_union() {
        let set = Membership::singleton(1).union(&Membership::singleton(9));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 9]);
    }

    #[test]
    fn test_open_edge_resolves_to_current_end() {
        let leaf = Edge { start: 2, end: EdgeEnd::Open, child: 5 };
        assert!(leaf.is_leaf());
        assert_eq!(leaf.len_at(3), 1);
        assert_eq!(leaf.len_at(10), 8);

        let inner = Edge { start: 2, end: EdgeEnd::Closed(4), child: 6 };
        assert!(!inner.is_leaf());
        assert_eq!(inner.len_at(10), 2);
    }
}
