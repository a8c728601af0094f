//! The completion model contract and an in-memory implementation.
//!
//! The popup never builds candidates itself. It reads the query, item list
//! and cursor anchor from a [`CompleterModel`], writes the query back for
//! prefix completion, and subscribes to the model's change notification to
//! know when to redraw.

use std::sync::Arc;

use horizon_completer_core::Signal;
use parking_lot::RwLock;

// ============================================================================
// Items and Anchors
// ============================================================================

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    /// Value handed back to the host when the item is selected.
    pub raw: String,
    /// Display markup, possibly with match highlighting.
    pub text: String,
}

impl CompletionItem {
    /// Create an item with separate raw value and display markup.
    pub fn new(raw: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            text: text.into(),
        }
    }

    /// Create an item displayed as its raw value.
    pub fn plain(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            text: raw.clone(),
            raw,
        }
    }
}

/// Viewport-relative position of the text cursor, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchor {
    pub top: f32,
    pub left: f32,
}

impl Anchor {
    pub const fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }
}

// ============================================================================
// Completer Model Trait
// ============================================================================

/// Source of completion state consumed by the popup.
///
/// Implementations must emit [`state_changed`](Self::state_changed) whenever
/// any of the readable fields change.
pub trait CompleterModel: Send + Sync {
    /// The text being completed.
    fn query(&self) -> String;

    /// Replace the text being completed.
    fn set_query(&self, query: String);

    /// Current candidates in display order.
    fn items(&self) -> Arc<[CompletionItem]>;

    /// Cursor position when the completion session started.
    fn original(&self) -> Anchor;

    /// Cursor position now, if it moved during the session.
    fn current(&self) -> Option<Anchor>;

    /// Change notification.
    fn state_changed(&self) -> &Signal<()>;

    /// Abandon the pending completion session.
    fn reset(&self);

    /// Anchor the popup should open from.
    fn anchor(&self) -> Anchor {
        self.current().unwrap_or_else(|| self.original())
    }
}

// ============================================================================
// In-memory Model
// ============================================================================

#[derive(Debug, Clone)]
struct ModelState {
    query: String,
    items: Arc<[CompletionItem]>,
    original: Anchor,
    current: Option<Anchor>,
    sessions_abandoned: u64,
}

impl Default for ModelState {
    fn default() -> Self {
        Self {
            query: String::new(),
            items: Arc::from(Vec::new()),
            original: Anchor::default(),
            current: None,
            sessions_abandoned: 0,
        }
    }
}

/// A completion model whose state is set directly by its owner.
///
/// Every setter emits `state_changed` after releasing its lock, so slots may
/// read the model back.
///
/// ```
/// use horizon_completer::{CompleterModel, CompletionItem, CompletionModel};
///
/// let model = CompletionModel::new();
/// model.set_query("pr");
/// model.set_items(vec![CompletionItem::plain("print"), CompletionItem::plain("proc")]);
/// assert_eq!(model.items().len(), 2);
///
/// model.reset();
/// assert!(model.items().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CompletionModel {
    state: RwLock<ModelState>,
    state_changed: Signal<()>,
}

impl CompletionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query. Shadows the trait method to accept `&str`.
    pub fn set_query(&self, query: impl Into<String>) {
        CompleterModel::set_query(self, query.into());
    }

    /// Replace the candidates.
    pub fn set_items(&self, items: Vec<CompletionItem>) {
        self.state.write().items = Arc::from(items);
        self.state_changed.emit(());
    }

    /// Start a session anchored at `anchor`, clearing any moved cursor.
    pub fn set_original(&self, anchor: Anchor) {
        {
            let mut state = self.state.write();
            state.original = anchor;
            state.current = None;
        }
        self.state_changed.emit(());
    }

    /// Record that the cursor moved during the session.
    pub fn set_current(&self, anchor: Option<Anchor>) {
        self.state.write().current = anchor;
        self.state_changed.emit(());
    }

    /// Number of times [`reset`](CompleterModel::reset) abandoned a session.
    pub fn sessions_abandoned(&self) -> u64 {
        self.state.read().sessions_abandoned
    }
}

impl CompleterModel for CompletionModel {
    fn query(&self) -> String {
        self.state.read().query.clone()
    }

    fn set_query(&self, query: String) {
        self.state.write().query = query;
        self.state_changed.emit(());
    }

    fn items(&self) -> Arc<[CompletionItem]> {
        Arc::clone(&self.state.read().items)
    }

    fn original(&self) -> Anchor {
        self.state.read().original
    }

    fn current(&self) -> Option<Anchor> {
        self.state.read().current
    }

    fn state_changed(&self) -> &Signal<()> {
        &self.state_changed
    }

    fn reset(&self) {
        {
            let mut state = self.state.write();
            let abandoned = state.sessions_abandoned + 1;
            *state = ModelState {
                original: state.original,
                sessions_abandoned: abandoned,
                ..ModelState::default()
            };
        }
        self.state_changed.emit(());
    }
}

static_assertions::assert_impl_all!(CompletionModel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_setters_notify() {
        let model = CompletionModel::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let _subscription = model.state_changed().subscribe(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        model.set_query("fo");
        model.set_items(vec![CompletionItem::plain("foo")]);
        model.set_original(Anchor::new(10.0, 20.0));
        model.set_current(Some(Anchor::new(12.0, 40.0)));
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_anchor_prefers_current() {
        let model = CompletionModel::new();
        model.set_original(Anchor::new(100.0, 5.0));
        assert_eq!(model.anchor(), Anchor::new(100.0, 5.0));
        model.set_current(Some(Anchor::new(120.0, 30.0)));
        assert_eq!(model.anchor(), Anchor::new(120.0, 30.0));
        model.set_original(Anchor::new(50.0, 5.0));
        assert_eq!(model.current(), None);
    }

    #[test]
    fn test_reset_abandons_session() {
        let model = CompletionModel::new();
        model.set_original(Anchor::new(100.0, 5.0));
        model.set_query("fo");
        model.set_items(vec![CompletionItem::plain("foo"), CompletionItem::plain("for")]);

        model.reset();
        assert_eq!(model.query(), "");
        assert!(model.items().is_empty());
        assert_eq!(model.sessions_abandoned(), 1);
    }

    #[test]
    fn test_slot_can_read_back() {
        let model = Arc::new(CompletionModel::new());
        let seen = Arc::new(RwLock::new(String::new()));
        let (weak, seen_clone) = (Arc::downgrade(&model), Arc::clone(&seen));
        let _subscription = model.state_changed().subscribe(move |_| {
            if let Some(model) = weak.upgrade() {
                *seen_clone.write() = model.query();
            }
        });
        model.set_query("abc");
        assert_eq!(*seen.read(), "abc");
    }
}
