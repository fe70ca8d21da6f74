//! Ukkonen's online construction over the terminated corpus.

use log::{trace, warn};

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::node::{Edge, EdgeEnd, Node, NodeId, ROOT};
use crate::tree::GeneralizedSuffixTree;

/// The active point: `node` plus the corpus range `[start, end)` still to be
/// walked from it. An empty range means the point is `node` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReferencePoint {
    node: NodeId,
    start: usize,
    end: usize,
}

impl ReferencePoint {
    const fn new(node: NodeId, start: usize, end: usize) -> Self {
        Self { node, start, end }
    }

    fn is_implicit(&self) -> bool {
        self.start < self.end
    }

    fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

/// State of one build. Dropped (with any partial tree) when the build
/// finishes or fails.
pub(crate) struct Ukkonen {
    tree: GeneralizedSuffixTree,
    active: ReferencePoint,
    /// Word whose suffixes are currently being turned into leaves.
    current_word: usize,
    node_limit: usize,
}

impl Ukkonen {
    pub(crate) fn new(corpus: Corpus, node_limit: usize) -> Self {
        Self {
            tree: GeneralizedSuffixTree::empty(corpus, node_limit),
            active: ReferencePoint::new(ROOT, 0, 0),
            current_word: 0,
            node_limit,
        }
    }

    pub(crate) fn run(mut self) -> Result<GeneralizedSuffixTree> {
        for i in 0..self.tree.corpus.len() {
            self.extend(i)?;
        }
        debug_assert_eq!(self.current_word, self.tree.corpus.word_count());
        Ok(self.tree)
    }

    /// Adds `corpus[i]` to every suffix on the boundary path, stopping at
    /// the first suffix that is already present.
    fn extend(&mut self, i: usize) -> Result<()> {
        // Every open leaf edge now ends after `corpus[i]`.
        self.tree.end = i + 1;
        let ch = self.tree.corpus[i];
        let mut last_branch: Option<NodeId> = None;

        loop {
            let branch = if self.active.is_implicit() {
                let first = self.tree.corpus[self.active.start];
                let edge = self.tree.edge_at(self.active.node, first);
                let span = self.active.len();
                if self.tree.corpus[edge.start + span] == ch {
                    break;
                }
                self.split_edge(self.active.node, first, span)?
            } else {
                if self.tree.edges.contains_key(&(self.active.node, ch)) {
                    break;
                }
                self.active.node
            };

            let branch_depth = self.tree.nodes[branch].depth;
            debug_assert_eq!(
                self.tree.corpus.word_at(i - branch_depth),
                self.current_word,
                "leaf for suffix {} tagged with the wrong word",
                i - branch_depth
            );
            let leaf_depth = branch_depth + self.tree.corpus.len() - i;
            let leaf = self.alloc(Node::new(branch, ch, leaf_depth))?;
            self.tree.insert_edge(
                branch,
                ch,
                Edge {
                    start: i,
                    end: EdgeEnd::Open,
                    child: leaf,
                },
            );
            self.tree.leaf_groups[self.current_word].push(leaf);

            if let Some(prev) = last_branch {
                self.tree.nodes[prev].suffix_link = Some(branch);
            }
            last_branch = (branch != ROOT).then_some(branch);

            // Move on to the next shorter suffix.
            if self.active.node == ROOT {
                self.active.start += 1;
            } else {
                self.active.node = self.tree.nodes[self.active.node].get_suffix_link();
            }
            self.canonize();

            // The lone terminator hangs from the root: the word is done.
            if branch == ROOT && ch == self.tree.corpus.terminator(self.current_word) {
                trace!("word {} complete at position {}", self.current_word, i);
                self.current_word += 1;
            }
        }

        if let Some(prev) = last_branch {
            self.tree.nodes[prev].suffix_link = Some(self.active.node);
        }

        self.active.end += 1;
        self.canonize();
        trace!("phase {} done, active point {:?}", i, self.active);
        Ok(())
    }

    /// Splits the edge leaving `node` with first byte `first` after `span`
    /// bytes and returns the new internal node. The upper part keeps its key.
    fn split_edge(&mut self, node: NodeId, first: u8, span: usize) -> Result<NodeId> {
        let edge = self.tree.edge_at(node, first);
        let mid = edge.start + span;
        debug_assert!(span > 0 && mid < edge.end_at(self.tree.end));

        let depth = self.tree.nodes[node].depth + span;
        let new_node = self.alloc(Node::new(node, first, depth))?;

        let lower_char = self.tree.corpus[mid];
        self.tree.insert_edge(
            new_node,
            lower_char,
            Edge {
                start: mid,
                end: edge.end,
                child: edge.child,
            },
        );
        let child = &mut self.tree.nodes[edge.child];
        child.parent = Some(new_node);
        child.first_edge_char = lower_char;

        let upper = self.tree.edge_mut(node, first);
        upper.end = EdgeEnd::Closed(mid);
        upper.child = new_node;

        Ok(new_node)
    }

    /// Walks the active point down while its range covers whole edges.
    fn canonize(&mut self) {
        while self.active.is_implicit() {
            let edge = self
                .tree
                .edge_at(self.active.node, self.tree.corpus[self.active.start]);
            let edge_len = edge.len_at(self.tree.end);
            if edge_len > self.active.len() {
                break;
            }
            self.active.start += edge_len;
            self.active.node = edge.child;
        }
    }

    fn alloc(&mut self, node: Node) -> Result<NodeId> {
        if self.tree.nodes.len() >= self.node_limit {
            warn!(
                "node arena exhausted at {} nodes (corpus of {} bytes)",
                self.node_limit,
                self.tree.corpus.len()
            );
            return Err(Error::CapacityExhausted {
                limit: self.node_limit,
            });
        }
        self.tree.nodes.push(node);
        Ok(self.tree.nodes.len() - 1)
    }
}
