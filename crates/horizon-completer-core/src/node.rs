//! Structural node tree.
//!
//! Provides the element tree that popups render into and that input events
//! target:
//! - Unique node identifiers via arena-based storage
//! - Parent-child relationships with cascade destroy
//! - Class lists, string attributes and trusted markup per node
//! - Layout state (geometry, scroll offset, overflow style, hidden flag)
//!
//! Every tree has a fixed document root. Ancestor walks stop at the root, the
//! same way a DOM walk stops at the document element.
//!
//! # Key Types
//!
//! - [`NodeId`] - Stable identifier for each node
//! - [`NodeTree`] - Arena owning all nodes of one document
//! - [`SharedNodeTree`] - Thread-safe, cloneable handle to a [`NodeTree`]
//! - [`Overflow`] - Overflow style used by scroll classification

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use slotmap::{SlotMap, new_key_type};

use crate::error::{NodeError, NodeResult};
use crate::geometry::Rect;
use crate::logging::targets;
use crate::lookup::NodeLookup;

new_key_type! {
    /// A unique identifier for a node in a [`NodeTree`].
    ///
    /// `NodeId`s stay valid until the node (or one of its ancestors) is destroyed.
    pub struct NodeId;
}

/// Overflow style of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Content is shown outside the node's box.
    #[default]
    Visible,
    /// Content is clipped and the node never scrolls.
    Hidden,
    /// Content scrolls when it overflows.
    Auto,
    /// Content always shows scrollbars.
    Scroll,
}

impl Overflow {
    /// Whether the style clips content without scrolling it.
    pub fn is_clipped(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Internal data stored for each node.
#[derive(Debug, Clone)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attributes: HashMap<String, String>,
    markup: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    hidden: bool,
    overflow: Overflow,
    geometry: Rect,
    scroll_top: f32,
}

impl NodeData {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attributes: HashMap::new(),
            markup: String::new(),
            parent: None,
            children: Vec::new(),
            hidden: false,
            overflow: Overflow::default(),
            geometry: Rect::ZERO,
            scroll_top: 0.0,
        }
    }
}

/// Arena holding every node of a document.
///
/// Uses SlotMap storage for stable node IDs and cheap parent-child bookkeeping.
#[derive(Debug, Clone)]
pub struct NodeTree {
    nodes: SlotMap<NodeId, NodeData>,
    root: NodeId,
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeTree {
    /// Create a tree containing only the document root.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(NodeData::new("html"));
        Self { nodes, root }
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Create a detached element and return its ID.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let data = NodeData::new(tag);
        let tag_name = data.tag.clone();
        let id = self.nodes.insert(data);
        tracing::trace!(target: targets::NODE, ?id, tag = %tag_name, "created element");
        id
    }

    /// Check if a node exists in the tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn data(&self, id: NodeId) -> NodeResult<&NodeData> {
        self.nodes.get(id).ok_or(NodeError::InvalidNodeId)
    }

    fn data_mut(&mut self, id: NodeId) -> NodeResult<&mut NodeData> {
        self.nodes.get_mut(id).ok_or(NodeError::InvalidNodeId)
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Append `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> NodeResult<()> {
        if child == self.root {
            return Err(NodeError::RootImmutable);
        }
        self.data(child)?;
        self.data(parent)?;

        // Walk up from the new parent to detect cycles.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(NodeError::CircularParentage);
            }
            cursor = self.data(id)?.parent;
        }

        self.detach(child)?;
        self.data_mut(parent)?.children.push(child);
        self.data_mut(child)?.parent = Some(parent);
        Ok(())
    }

    /// Remove a node from its parent, keeping it (and its subtree) alive.
    pub fn detach(&mut self, id: NodeId) -> NodeResult<()> {
        if id == self.root {
            return Err(NodeError::RootImmutable);
        }
        let Some(parent_id) = self.data(id)?.parent else {
            return Ok(());
        };
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            parent.children.retain(|&c| c != id);
        }
        self.data_mut(id)?.parent = None;
        Ok(())
    }

    /// Destroy a node and its whole subtree.
    pub fn destroy(&mut self, id: NodeId) -> NodeResult<()> {
        if id == self.root {
            return Err(NodeError::RootImmutable);
        }
        self.detach(id)?;
        let descendants = self.descendants(id)?;
        tracing::trace!(target: targets::NODE, ?id, descendant_count = descendants.len(), "destroying subtree");
        for descendant in descendants {
            self.nodes.remove(descendant);
        }
        self.nodes.remove(id);
        Ok(())
    }

    /// Destroy every child of a node, leaving the node itself in place.
    pub fn clear_children(&mut self, id: NodeId) -> NodeResult<()> {
        let children = std::mem::take(&mut self.data_mut(id)?.children);
        for child in children {
            for descendant in self.descendants(child)? {
                self.nodes.remove(descendant);
            }
            self.nodes.remove(child);
        }
        Ok(())
    }

    /// Parent of a node (`None` for the root and detached nodes).
    pub fn parent(&self, id: NodeId) -> NodeResult<Option<NodeId>> {
        Ok(self.data(id)?.parent)
    }

    /// Children of a node in document order.
    pub fn children(&self, id: NodeId) -> NodeResult<&[NodeId]> {
        Ok(&self.data(id)?.children)
    }

    /// All descendants of a node in depth-first pre-order.
    pub fn descendants(&self, id: NodeId) -> NodeResult<Vec<NodeId>> {
        let mut result = Vec::new();
        let mut stack: Vec<NodeId> = self.data(id)?.children.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            result.push(current);
            stack.extend(self.data(current)?.children.iter().rev().copied());
        }
        Ok(result)
    }

    /// Descendants of `id` carrying `class`, in document order.
    pub fn find_by_class(&self, id: NodeId, class: &str) -> NodeResult<Vec<NodeId>> {
        Ok(self
            .descendants(id)?
            .into_iter()
            .filter(|&node| self.nodes[node].classes.iter().any(|c| c == class))
            .collect())
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Tag name of a node.
    pub fn tag(&self, id: NodeId) -> NodeResult<&str> {
        Ok(&self.data(id)?.tag)
    }

    /// Add a class to a node. Adding an existing class is a no-op.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> NodeResult<()> {
        let data = self.data_mut(id)?;
        if !data.classes.iter().any(|c| c == class) {
            data.classes.push(class.to_string());
        }
        Ok(())
    }

    /// Remove a class from a node.
    pub fn remove_class(&mut self, id: NodeId, class: &str) -> NodeResult<()> {
        self.data_mut(id)?.classes.retain(|c| c != class);
        Ok(())
    }

    /// Check whether a node carries a class. Unknown nodes carry none.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|d| d.classes.iter().any(|c| c == class))
    }

    /// Class list of a node.
    pub fn classes(&self, id: NodeId) -> NodeResult<&[String]> {
        Ok(&self.data(id)?.classes)
    }

    /// Set a string attribute.
    pub fn set_attribute(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> NodeResult<()> {
        self.data_mut(id)?.attributes.insert(name.into(), value.into());
        Ok(())
    }

    /// Read a string attribute.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|d| d.attributes.get(name))
            .map(String::as_str)
    }

    /// Names of every attribute set on a node, in no particular order.
    pub fn attribute_names(&self, id: NodeId) -> NodeResult<Vec<&str>> {
        Ok(self.data(id)?.attributes.keys().map(String::as_str).collect())
    }

    /// Replace the node's trusted markup content.
    pub fn set_markup(&mut self, id: NodeId, markup: impl Into<String>) -> NodeResult<()> {
        self.data_mut(id)?.markup = markup.into();
        Ok(())
    }

    /// The node's markup content.
    pub fn markup(&self, id: NodeId) -> NodeResult<&str> {
        Ok(&self.data(id)?.markup)
    }

    // =========================================================================
    // Layout state
    // =========================================================================

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) -> NodeResult<()> {
        self.data_mut(id)?.hidden = hidden;
        Ok(())
    }

    pub fn is_hidden(&self, id: NodeId) -> NodeResult<bool> {
        Ok(self.data(id)?.hidden)
    }

    pub fn set_overflow(&mut self, id: NodeId, overflow: Overflow) -> NodeResult<()> {
        self.data_mut(id)?.overflow = overflow;
        Ok(())
    }

    pub fn overflow(&self, id: NodeId) -> NodeResult<Overflow> {
        Ok(self.data(id)?.overflow)
    }

    /// Set the node's box in viewport coordinates (content coordinates for
    /// children of a scrolling node).
    pub fn set_geometry(&mut self, id: NodeId, geometry: Rect) -> NodeResult<()> {
        self.data_mut(id)?.geometry = geometry;
        Ok(())
    }

    pub fn geometry(&self, id: NodeId) -> NodeResult<Rect> {
        Ok(self.data(id)?.geometry)
    }

    /// Set the vertical scroll offset. Negative values are clamped to zero.
    pub fn set_scroll_top(&mut self, id: NodeId, scroll_top: f32) -> NodeResult<()> {
        self.data_mut(id)?.scroll_top = scroll_top.max(0.0);
        Ok(())
    }

    pub fn scroll_top(&self, id: NodeId) -> NodeResult<f32> {
        Ok(self.data(id)?.scroll_top)
    }
}

impl NodeLookup for NodeTree {
    type Key = NodeId;

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|d| d.parent)
    }

    fn is_document_root(&self, node: NodeId) -> bool {
        node == self.root
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        NodeTree::has_class(self, node, class)
    }

    fn is_clipped(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|d| d.overflow.is_clipped())
    }
}

/// Thread-safe, cloneable handle to a [`NodeTree`].
///
/// All clones refer to the same tree.
#[derive(Debug, Clone, Default)]
pub struct SharedNodeTree {
    inner: Arc<RwLock<NodeTree>>,
}

impl SharedNodeTree {
    /// Create a handle to a new tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a read lock on the tree.
    pub fn read(&self) -> RwLockReadGuard<'_, NodeTree> {
        self.inner.read()
    }

    /// Acquire a write lock on the tree.
    pub fn write(&self) -> RwLockWriteGuard<'_, NodeTree> {
        self.inner.write()
    }

    /// Run a closure with read access.
    pub fn with_read<R>(&self, f: impl FnOnce(&NodeTree) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run a closure with write access.
    pub fn with_write<R>(&self, f: impl FnOnce(&mut NodeTree) -> R) -> R {
        f(&mut self.inner.write())
    }

    /// The document root.
    pub fn root(&self) -> NodeId {
        self.inner.read().root()
    }
}
