//! Static taxonomy nodes.

/// A single cognitive bias (leaf node).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bias {
    pub name: &'static str,
}

impl Bias {
    /// Creates a bias leaf.
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

/// Shared mechanism explaining why a cluster of biases occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rationale {
    pub name: &'static str,
    pub biases: &'static [Bias],
}

/// Top-level grouping, named with a leading ordinal such as `"1. "`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub rationales: &'static [Rationale],
}
