use std::collections::HashMap;
use std::fmt::Write;

use log::debug;

use crate::builder::Ukkonen;
use crate::config::TreeConfig;
use crate::corpus::{is_terminator, Corpus, TERMINATORS};
use crate::error::Result;
use crate::membership;
use crate::node::{Edge, Node, NodeId, ROOT};

/// A generalized suffix tree over up to ten words, built with Ukkonen's
/// algorithm on the terminated concatenation of the words.
///
/// Nodes live in an arena indexed by [`NodeId`]; edges are looked up by
/// `(parent, first byte)`. Once [`build`](Self::build) returns the tree is
/// complete and every node knows which words its subtree belongs to.
///
/// # Examples
///
/// ```
/// use gst_lcs::{Corpus, GeneralizedSuffixTree, TreeConfig};
/// let corpus = Corpus::assemble(&["banana", "bandana"]).unwrap();
/// let tree = GeneralizedSuffixTree::build(corpus, &TreeConfig::default()).unwrap();
/// assert!(tree.is_substr(b"anan"));
/// assert!(tree.is_suffix(b"dana"));
/// assert!(!tree.is_suffix(b"band"));
/// ```
#[derive(Debug)]
pub struct GeneralizedSuffixTree {
    pub(crate) corpus: Corpus,
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: HashMap<(NodeId, u8), Edge>,
    /// Leaves created for each word, in creation order.
    pub(crate) leaf_groups: Vec<Vec<NodeId>>,
    /// End of every open leaf label: the number of corpus bytes consumed.
    pub(crate) end: usize,
}

impl GeneralizedSuffixTree {
    pub(crate) fn empty(corpus: Corpus, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity);
        nodes.push(Node::root());
        let leaf_groups = vec![Vec::new(); corpus.word_count()];
        Self {
            corpus,
            nodes,
            edges: HashMap::with_capacity(capacity),
            leaf_groups,
            end: 0,
        }
    }

    /// Builds the tree over `corpus` and classifies every node by word.
    pub fn build(corpus: Corpus, config: &TreeConfig) -> Result<Self> {
        let node_limit = config.node_limit_for(corpus.len());
        let mut tree = Ukkonen::new(corpus, node_limit).run()?;
        membership::classify(&mut tree);
        debug!(
            "built suffix tree: {} words, {} bytes, {} nodes ({} leaves)",
            tree.word_count(),
            tree.corpus.len(),
            tree.node_count(),
            tree.leaf_count()
        );
        Ok(tree)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn word_count(&self) -> usize {
        self.corpus.word_count()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_groups.iter().map(Vec::len).sum()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Leaves created for the suffixes of `word`.
    pub fn leaves(&self, word: usize) -> &[NodeId] {
        &self.leaf_groups[word]
    }

    pub fn edge(&self, parent: NodeId, first: u8) -> Option<&Edge> {
        self.edges.get(&(parent, first))
    }

    pub fn is_leaf(&self, id: NodeId) -> bool {
        let node = &self.nodes[id];
        match node.parent {
            Some(parent) => self.edge_at(parent, node.first_edge_char).is_leaf(),
            None => false,
        }
    }

    /// The corpus bytes an edge is labeled with.
    pub fn label(&self, edge: &Edge) -> &[u8] {
        &self.corpus.as_bytes()[edge.start..edge.end_at(self.end)]
    }

    /// Checks whether `s` is a suffix of any of the words.
    #[must_use]
    pub fn is_suffix(&self, s: &[u8]) -> bool {
        self.is_suffix_or_substr(s, false)
    }

    /// Checks whether `s` is a substring of any of the words.
    #[must_use]
    pub fn is_substr(&self, s: &[u8]) -> bool {
        self.is_suffix_or_substr(s, true)
    }

    fn is_suffix_or_substr(&self, s: &[u8], check_substr: bool) -> bool {
        if s.iter().any(|ch| is_terminator(*ch)) {
            return false;
        }
        let mut node = ROOT;
        let mut index = 0;
        while index < s.len() {
            let edge = match self.edge(node, s[index]) {
                Some(edge) => edge,
                None => return false,
            };
            for &ch in self.label(edge) {
                if index == s.len() {
                    // Ran out mid-edge: a suffix is followed by its terminator.
                    return check_substr || is_terminator(ch);
                }
                if s[index] != ch {
                    return false;
                }
                index += 1;
            }
            node = edge.child;
        }
        check_substr || TERMINATORS.iter().any(|t| self.edges.contains_key(&(node, *t)))
    }

    /// Renders the tree as indented edge labels, children in byte order.
    pub fn render(&self) -> String {
        let mut children: Vec<Vec<(u8, Edge)>> = vec![Vec::new(); self.nodes.len()];
        for (&(parent, ch), edge) in &self.edges {
            children[parent].push((ch, *edge));
        }
        for list in &mut children {
            list.sort_unstable_by_key(|(ch, _)| *ch);
        }

        let mut out = String::new();
        let mut stack: Vec<(Edge, usize)> =
            children[ROOT].iter().rev().map(|(_, e)| (*e, 0)).collect();
        while let Some((edge, indent)) = stack.pop() {
            let _ = writeln!(
                out,
                "{:indent$}{}",
                "",
                String::from_utf8_lossy(self.label(&edge)),
                indent = indent
            );
            stack.extend(
                children[edge.child]
                    .iter()
                    .rev()
                    .map(|(_, e)| (*e, indent + 4)),
            );
        }
        out
    }

    pub(crate) fn edge_at(&self, parent: NodeId, first: u8) -> Edge {
        match self.edges.get(&(parent, first)) {
            Some(edge) => *edge,
            None => panic!("no edge from node {parent} on {:?}", first as char),
        }
    }

    pub(crate) fn edge_mut(&mut self, parent: NodeId, first: u8) -> &mut Edge {
        match self.edges.get_mut(&(parent, first)) {
            Some(edge) => edge,
            None => panic!("no edge from node {parent} on {:?}", first as char),
        }
    }

    /// Registers a new edge. At most one edge may leave a node per first byte.
    pub(crate) fn insert_edge(&mut self, parent: NodeId, first: u8, edge: Edge) {
        let previous = self.edges.insert((parent, first), edge);
        assert!(
            previous.is_none(),
            "duplicate edge from node {parent} on {:?}",
            first as char
        );
    }
}
