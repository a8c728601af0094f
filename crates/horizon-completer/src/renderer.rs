//! Rendering of completion items into popup nodes.

use horizon_completer_core::{NodeId, NodeResult, NodeTree};

use crate::model::CompletionItem;

/// Class carried by the popup's list container.
pub const CONTAINER_CLASS: &str = "completer";
/// Class carried by every item row.
pub const ITEM_CLASS: &str = "completer-item";
/// Class marking the active item row.
pub const ACTIVE_CLASS: &str = "completer-item-active";
/// Attribute holding an item row's raw value.
pub const VALUE_ATTRIBUTE: &str = "data-value";

/// Builds the node for one completion item.
///
/// The returned node must carry [`ITEM_CLASS`] and store the item's raw value
/// under [`VALUE_ATTRIBUTE`]; hit-testing and selection rely on both. It is
/// returned detached; the popup appends it to the list.
pub trait ItemRenderer: Send + Sync {
    /// Create the node for `item`.
    fn create_item_node(&self, tree: &mut NodeTree, item: &CompletionItem) -> NodeResult<NodeId>;
}

/// Renders each item's display markup verbatim inside an `li` row.
///
/// The markup is trusted; highlighting and escaping happen upstream in the
/// model.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl ItemRenderer for DefaultRenderer {
    fn create_item_node(&self, tree: &mut NodeTree, item: &CompletionItem) -> NodeResult<NodeId> {
        let node = tree.create_element("li");
        tree.add_class(node, ITEM_CLASS)?;
        tree.set_attribute(node, VALUE_ATTRIBUTE, item.raw.as_str())?;
        tree.set_markup(node, item.text.as_str())?;
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_renderer_contract() {
        let mut tree = NodeTree::new();
        let item = CompletionItem::new("print", "<b>pr</b>int");
        let node = DefaultRenderer.create_item_node(&mut tree, &item).unwrap();

        assert_eq!(tree.tag(node).unwrap(), "li");
        assert!(tree.has_class(node, ITEM_CLASS));
        assert_eq!(tree.attribute(node, VALUE_ATTRIBUTE), Some("print"));
        assert_eq!(tree.markup(node).unwrap(), "<b>pr</b>int");
        assert_eq!(tree.parent(node).unwrap(), None);
    }
}
