//! Longest common substring of up to ten strings, found with a generalized
//! suffix tree built by Ukkonen's algorithm.
//!
//! The input words are concatenated with a distinct terminator after each
//! one (see [`corpus::TERMINATORS`]), the tree is built over the result in
//! linear time, every node is tagged with the words its subtree contains,
//! and the deepest node shared by all words spells the answer.
//!
//! ```
//! let lcs = gst_lcs::longest_common_substring(&["xyzabc", "abcxyz", "pqabct"]).unwrap();
//! assert_eq!(lcs, b"abc");
//! ```
mod builder;
pub mod config;
pub mod corpus;
pub mod error;
pub mod lcs;
mod membership;
pub mod node;
pub mod tree;

use log::debug;

pub use crate::config::TreeConfig;
pub use crate::corpus::Corpus;
pub use crate::error::{Error, Result};
pub use crate::node::{Edge, EdgeEnd, Membership, Node, NodeId, ROOT};
pub use crate::tree::GeneralizedSuffixTree;

/// Finds the longest substring common to all `words`.
///
/// A single word is returned unchanged. Words sharing nothing give an empty
/// result.
pub fn longest_common_substring<S: AsRef<[u8]>>(words: &[S]) -> Result<Vec<u8>> {
    LcsFinder::new().find(words)
}

/// Configurable entry point for tree builds and common substring queries.
///
/// ```
/// use gst_lcs::{Error, LcsFinder};
/// let finder = LcsFinder::new().with_node_limit(4);
/// assert_eq!(
///     finder.find(&["abcdef", "fedcba"]),
///     Err(Error::CapacityExhausted { limit: 4 })
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct LcsFinder {
    config: TreeConfig,
}

impl LcsFinder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Caps the node arena below its default of twice the corpus length.
    #[must_use]
    pub fn with_node_limit(mut self, node_limit: usize) -> Self {
        self.config.node_limit = Some(node_limit);
        self
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Assembles the corpus and builds the classified tree, even for a
    /// single word.
    pub fn build_tree<S: AsRef<[u8]>>(&self, words: &[S]) -> Result<GeneralizedSuffixTree> {
        let corpus = Corpus::assemble(words)?;
        GeneralizedSuffixTree::build(corpus, &self.config)
    }

    pub fn find<S: AsRef<[u8]>>(&self, words: &[S]) -> Result<Vec<u8>> {
        if let [word] = words {
            debug!("single word, skipping tree construction");
            return Ok(word.as_ref().to_vec());
        }
        let tree = self.build_tree(words)?;
        let result = lcs::locate(&tree);
        debug!("longest common substring has {} bytes", result.len());
        Ok(result)
    }
}
