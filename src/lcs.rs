//! Longest common substring lookup on a classified tree.

use crate::node::{NodeId, ROOT};
use crate::tree::GeneralizedSuffixTree;

/// The deepest non-root node whose subtree holds suffixes of every word.
///
/// Among equally deep candidates the one allocated first wins.
pub fn deepest_common_node(tree: &GeneralizedSuffixTree) -> Option<NodeId> {
    let k = tree.word_count();
    let mut best: Option<NodeId> = None;
    for (id, node) in tree.nodes().iter().enumerate() {
        if node.membership.len() != k {
            continue;
        }
        match best {
            Some(b) if tree.node(b).depth >= node.depth => {}
            _ => best = Some(id),
        }
    }
    best.filter(|&id| id != ROOT)
}

/// Spells out the path from the root to `node`.
pub fn path_label(tree: &GeneralizedSuffixTree, node: NodeId) -> Vec<u8> {
    let mut path = Vec::new();
    let mut cur = node;
    while let Some(parent) = tree.node(cur).parent {
        path.push(tree.node(cur).first_edge_char);
        cur = parent;
    }

    let mut out = Vec::with_capacity(tree.node(node).depth);
    let mut cur = ROOT;
    for &ch in path.iter().rev() {
        let edge = tree.edge_at(cur, ch);
        out.extend_from_slice(tree.label(&edge));
        cur = edge.child;
    }
    debug_assert_eq!(out.len(), tree.node(node).depth);
    out
}

/// Length of the longest substring shared by all words.
pub fn common_substring_len(tree: &GeneralizedSuffixTree) -> usize {
    if tree.word_count() == 1 {
        return tree.corpus().word(0).len();
    }
    deepest_common_node(tree).map_or(0, |id| tree.node(id).depth)
}

/// The longest substring shared by all words, empty if there is none.
///
/// With a single word the answer is the word itself.
pub fn locate(tree: &GeneralizedSuffixTree) -> Vec<u8> {
    if tree.word_count() == 1 {
        return tree.corpus().word(0).to_vec();
    }
    match deepest_common_node(tree) {
        Some(id) => path_label(tree, id),
        None => Vec::new(),
    }
}
