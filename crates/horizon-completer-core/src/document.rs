//! Document handle bundling the node tree and input capture registry.

use crate::capture::InputCapture;
use crate::node::{NodeId, SharedNodeTree};

/// A document: one node tree plus the registry of top-level input captures.
///
/// Cloning a `Document` yields another handle to the same tree and registry.
#[derive(Debug, Clone, Default)]
pub struct Document {
    tree: SharedNodeTree,
    capture: InputCapture,
}

impl Document {
    /// Create an empty document containing only its root node.
    pub fn new() -> Self {
        Self::default()
    }

    /// The document's node tree.
    pub fn tree(&self) -> &SharedNodeTree {
        &self.tree
    }

    /// The document's input capture registry.
    pub fn capture(&self) -> &InputCapture {
        &self.capture
    }

    /// The document root node.
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }
}
