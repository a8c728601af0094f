//! Positioning and sizing of the popup relative to the text cursor.
//!
//! The popup opens upward: its bottom edge sits on the anchor's top, and its
//! height is limited by both the configured maximum and the space between the
//! viewport top and the anchor.

use horizon_completer_core::Rect;

use crate::config::CompleterConfig;
use crate::model::Anchor;

/// Computed popup box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
    /// Height of all rows laid end to end.
    pub content_height: f32,
    /// Whether the content overflows and the list scrolls.
    pub scrollable: bool,
}

impl Placement {
    /// The popup box in viewport coordinates.
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.width, self.height)
    }
}

/// Place a popup of `item_count` rows above `anchor`.
pub fn compute_placement(config: &CompleterConfig, anchor: Anchor, item_count: usize) -> Placement {
    let content_height = item_count as f32 * config.item_height;
    let available = anchor.top.max(0.0);
    let max_height = available.min(config.max_height);
    let height = content_height.min(max_height);
    let scrollable = content_height > max_height;

    let width = if scrollable {
        config.min_width + config.scrollbar_width
    } else {
        config.min_width
    };

    Placement {
        top: available - height,
        left: anchor.left.floor() + config.border_offset,
        width,
        height,
        content_height,
        scrollable,
    }
}

/// New scroll offset that brings an item into the visible window.
///
/// `item_top` and `item_bottom` are relative to the viewport (content
/// position minus `scroll_top`). Items within `margin` of the window are
/// left alone.
pub fn scroll_into_view(
    scroll_top: f32,
    item_top: f32,
    item_bottom: f32,
    viewport_height: f32,
    content_height: f32,
    margin: f32,
) -> f32 {
    let target = if item_top < -margin {
        scroll_top - (-item_top + margin)
    } else if item_bottom > viewport_height + margin {
        scroll_top + (item_bottom - viewport_height + margin)
    } else {
        scroll_top
    };
    target.clamp(0.0, (content_height - viewport_height).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_above_anchor() {
        let config = CompleterConfig::default();
        let placement = compute_placement(&config, Anchor::new(300.0, 50.0), 6);
        assert_eq!(placement.height, 120.0);
        assert_eq!(placement.top, 180.0);
        assert_eq!(placement.left, 51.0);
        assert!(!placement.scrollable);
        assert_eq!(placement.width, config.min_width);
    }

    #[test]
    fn test_left_is_floored() {
        let config = CompleterConfig::default();
        let placement = compute_placement(&config, Anchor::new(300.0, 50.7), 2);
        assert_eq!(placement.left, 51.0);
    }

    #[test]
    fn test_clamped_to_max_height() {
        let config = CompleterConfig::default();
        let placement = compute_placement(&config, Anchor::new(600.0, 0.0), 40);
        assert_eq!(placement.height, 250.0);
        assert_eq!(placement.top, 350.0);
        assert_eq!(placement.content_height, 800.0);
        assert!(placement.scrollable);
        assert_eq!(placement.width, config.min_width + config.scrollbar_width);
    }

    #[test]
    fn test_clamped_to_available_space() {
        let config = CompleterConfig::default();
        let placement = compute_placement(&config, Anchor::new(100.0, 0.0), 10);
        assert_eq!(placement.height, 100.0);
        assert_eq!(placement.top, 0.0);
        assert!(placement.scrollable);
    }

    #[test]
    fn test_scroll_into_view() {
        // Viewport 100 high over 200 of content, margin 10.
        assert_eq!(scroll_into_view(0.0, 40.0, 60.0, 100.0, 200.0, 10.0), 0.0);
        assert_eq!(scroll_into_view(0.0, 100.0, 120.0, 100.0, 200.0, 10.0), 30.0);
        assert_eq!(scroll_into_view(80.0, -80.0, -60.0, 100.0, 200.0, 10.0), 0.0);
        assert_eq!(scroll_into_view(100.0, -40.0, -20.0, 100.0, 200.0, 10.0), 50.0);
        // Clamped to the scrollable range.
        assert_eq!(scroll_into_view(90.0, 100.0, 120.0, 100.0, 200.0, 10.0), 100.0);
    }
}
