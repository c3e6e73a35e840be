//! Constituency trees and dependency graphs.

/// Printed form of a tree for a sentence the parser skipped or failed on.
pub const UNPARSABLE_SENTINEL: &str = "SENTENCE_SKIPPED_OR_UNPARSABLE";

/// A constituency tree node. Leaves carry words, inner nodes carry labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseTree {
    pub label: String,
    pub children: Vec<ParseTree>,
}

impl ParseTree {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self { label: label.into(), children: Vec::new() }
    }

    pub fn node(label: impl Into<String>, children: Vec<ParseTree>) -> Self {
        Self { label: label.into(), children }
    }

    /// The tree a parser leaves behind for a skipped or unparsable sentence.
    pub fn unparsable() -> Self {
        Self::leaf(UNPARSABLE_SENTINEL)
    }

    pub fn is_unparsable(&self) -> bool {
        self.children.is_empty() && self.label == UNPARSABLE_SENTINEL
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A node whose only child is a leaf (a part-of-speech node).
    pub fn is_preterminal(&self) -> bool {
        self.children.len() == 1 && self.children[0].is_leaf()
    }
}

/// One typed head-to-dependent edge. Token indexes are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    pub governor: usize,
    pub dependent: usize,
    pub relation: String,
}

impl DependencyEdge {
    pub fn new(governor: usize, dependent: usize, relation: impl Into<String>) -> Self {
        Self { governor, dependent, relation: relation.into() }
    }
}

/// A dependency parse: root tokens plus edges, in the order produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    pub roots: Vec<usize>,
    pub edges: Vec<DependencyEdge>,
}

impl DependencyGraph {
    pub fn new(roots: Vec<usize>, edges: Vec<DependencyEdge>) -> Self {
        Self { roots, edges }
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.edges.is_empty()
    }
}
