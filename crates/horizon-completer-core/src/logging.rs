//! Logging and debugging facilities for Horizon Completer.
//!
//! This module provides:
//! - Target names for filtering `tracing` output by subsystem
//! - [`NodeTreeDebug`], a textual dump of a node subtree
//!
//! # Tracing Integration
//!
//! The crates only emit events; install a subscriber in the host application
//! to see them:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_completer=debug,horizon_completer_core=trace")
//!     .init();
//! ```

use std::fmt::Write as FmtWrite;

use crate::error::NodeResult;
use crate::node::{NodeId, NodeTree};

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_completer_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_completer_core::signal";
    /// Node tree target.
    pub const NODE: &str = "horizon_completer_core::node";
    /// Input capture target.
    pub const CAPTURE: &str = "horizon_completer_core::capture";
    /// Deferred update target.
    pub const UPDATE: &str = "horizon_completer_core::update";
    /// Popup controller target.
    pub const POPUP: &str = "horizon_completer::popup";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_completer::config";
}

/// Debug utility rendering a node subtree as indented text.
///
/// ```
/// use horizon_completer_core::{NodeTree, NodeTreeDebug};
///
/// let mut tree = NodeTree::new();
/// let list = tree.create_element("ul");
/// tree.add_class(list, "menu").unwrap();
///
/// let dump = NodeTreeDebug::new().format_subtree(&tree, list).unwrap();
/// assert_eq!(dump, "ul.menu\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct NodeTreeDebug {
    show_ids: bool,
    show_attributes: bool,
}

impl NodeTreeDebug {
    /// Create a visualizer printing tags, classes and hidden flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also print node IDs.
    pub fn with_ids(mut self, show: bool) -> Self {
        self.show_ids = show;
        self
    }

    /// Also print attributes, sorted by name.
    pub fn with_attributes(mut self, show: bool) -> Self {
        self.show_attributes = show;
        self
    }

    /// Format the subtree rooted at `id`.
    pub fn format_subtree(&self, tree: &NodeTree, id: NodeId) -> NodeResult<String> {
        let mut output = String::new();
        self.format_into(tree, id, 0, &mut output)?;
        Ok(output)
    }

    fn format_into(
        &self,
        tree: &NodeTree,
        id: NodeId,
        depth: usize,
        output: &mut String,
    ) -> NodeResult<()> {
        output.push_str(&"  ".repeat(depth));
        output.push_str(tree.tag(id)?);
        for class in tree.classes(id)? {
            output.push('.');
            output.push_str(class);
        }
        if self.show_ids {
            let _ = write!(output, " [{id:?}]");
        }
        if self.show_attributes {
            let mut names = tree.attribute_names(id)?;
            names.sort_unstable();
            for name in names {
                let value = tree.attribute(id, name).unwrap_or_default();
                let _ = write!(output, " {name}={value:?}");
            }
        }
        if tree.is_hidden(id)? {
            output.push_str(" (hidden)");
        }
        output.push('\n');

        for &child in tree.children(id)? {
            self.format_into(tree, child, depth + 1, output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_nested_with_attributes() {
        let mut tree = NodeTree::new();
        let list = tree.create_element("ul");
        let item = tree.create_element("li");
        tree.append_child(list, item).unwrap();
        tree.add_class(item, "item").unwrap();
        tree.set_attribute(item, "data-value", "foo").unwrap();
        tree.set_hidden(list, true).unwrap();

        let dump = NodeTreeDebug::new()
            .with_attributes(true)
            .format_subtree(&tree, list)
            .unwrap();
        assert_eq!(dump, "ul (hidden)\n  li.item data-value=\"foo\"\n");
    }
}
