//! Post-construction pass tagging every node with the words below it.

use crate::tree::GeneralizedSuffixTree;

/// Walks from every leaf towards the root, adding the leaf's word to each
/// node on the way.
///
/// A walk stops early at the first ancestor that already holds the word:
/// the earlier walk that put it there has covered everything above.
pub(crate) fn classify(tree: &mut GeneralizedSuffixTree) {
    let GeneralizedSuffixTree {
        nodes, leaf_groups, ..
    } = tree;

    for (word, leaves) in leaf_groups.iter().enumerate() {
        for &leaf in leaves {
            let mut cur = Some(leaf);
            while let Some(id) = cur {
                let node = &mut nodes[id];
                if !node.membership.insert(word) {
                    break;
                }
                cur = node.parent;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::TreeConfig;
    use crate::corpus::Corpus;
    use crate::node::{Membership, ROOT};
    use crate::tree::GeneralizedSuffixTree;

    fn build(words: &[&str]) -> GeneralizedSuffixTree {
        let corpus = Corpus::assemble(words).unwrap();
        GeneralizedSuffixTree::build(corpus, &TreeConfig::default()).unwrap()
    }

    #[test]
    fn test_leaves_are_singletons() {
        let tree = build(&["abab", "baba", "aab"]);
        for word in 0..tree.word_count() {
            for &leaf in tree.leaves(word) {
                assert_eq!(tree.node(leaf).membership, Membership::singleton(word));
            }
        }
    }

    #[test]
    fn test_membership_is_union_of_children() {
        let tree = build(&["abab", "baba", "aab"]);
        let mut unions = vec![Membership::default(); tree.node_count()];
        for (id, node) in tree.nodes().iter().enumerate() {
            if let Some(parent) = node.parent {
                unions[parent] = unions[parent].union(&node.membership);
            }
            if tree.is_leaf(id) {
                assert_eq!(node.membership.len(), 1);
            }
        }
        for (id, node) in tree.nodes().iter().enumerate() {
            if !tree.is_leaf(id) {
                assert_eq!(node.membership, unions[id], "node {id}");
            }
        }
    }

    #[test]
    fn test_root_spans_all_words() {
        let tree = build(&["x", "", "yz"]);
        assert_eq!(tree.node(ROOT).membership.len(), 3);
    }

    #[test]
    fn test_node_of_shared_prefix() {
        let tree = build(&["cab", "cat"]);
        let ca = tree.edge(ROOT, b'c').unwrap().child;
        assert_eq!(tree.node(ca).depth, 2);
        assert_eq!(tree.node(ca).membership.iter().collect::<Vec<_>>(), vec![0, 1]);

        let b = tree.edge(ROOT, b'b').unwrap().child;
        assert_eq!(tree.node(b).membership, Membership::singleton(0));
    }
}
