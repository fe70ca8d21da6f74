/// Knobs for a single tree build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Upper bound on arena size. `None` means the structural bound of
    /// `2 * corpus length` nodes; larger values are clamped to it.
    pub node_limit: Option<usize>,
}

impl TreeConfig {
    /// Arena size allowed for a corpus of `corpus_len` bytes.
    pub fn node_limit_for(&self, corpus_len: usize) -> usize {
        let bound = 2 * corpus_len.max(1);
        match self.node_limit {
            Some(limit) => limit.min(bound),
            None => bound,
        }
    }
}
