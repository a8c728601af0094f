//! The reference surface the popup completes for.

use horizon_completer_core::NodeId;

/// Host surface (typically an editor) owning the text cursor.
///
/// The popup only uses its node for identity: key events are handled when
/// their target lies inside this node.
pub trait ReferenceSurface: Send + Sync {
    fn node(&self) -> NodeId;
}

/// A reference surface that is just a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeReference {
    node: NodeId,
}

impl NodeReference {
    pub fn new(node: NodeId) -> Self {
        Self { node }
    }
}

impl ReferenceSurface for NodeReference {
    fn node(&self) -> NodeId {
        self.node
    }
}
