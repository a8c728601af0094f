//! The completion popup controller.
//!
//! [`Completer`] renders a model's candidates as a list above the text
//! cursor, intercepts input while attached, and reports the chosen value
//! through its [`selected`](Completer::selected) signal.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_completer::{
//!     Anchor, Completer, CompletionItem, CompletionModel, Lifecycle, NodeReference,
//! };
//! use horizon_completer_core::Document;
//!
//! let document = Document::new();
//! let editor = document.tree().with_write(|tree| {
//!     let editor = tree.create_element("textarea");
//!     let root = tree.root();
//!     tree.append_child(root, editor).map(|_| editor)
//! }).unwrap();
//!
//! let model = Arc::new(CompletionModel::new());
//! let reference = Arc::new(NodeReference::new(editor));
//! let mut completer = Completer::new(&document)
//!     .with_model(&model)
//!     .with_reference(&reference);
//!
//! completer.selected.connect(|value| println!("insert {value}"));
//! completer.on_attach();
//!
//! model.set_original(Anchor::new(300.0, 50.0));
//! model.set_items(vec![CompletionItem::plain("print"), CompletionItem::plain("proc")]);
//! completer.on_redraw_requested();
//! assert!(completer.is_visible());
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use horizon_completer_core::logging::targets;
use horizon_completer_core::{
    CaptureId, CaptureKind, Document, NodeError, NodeId, NodeResult, NodeTree, NodeTreeDebug,
    Overflow, Rect, Signal, Subscription, UpdateRequest,
};

use crate::config::CompleterConfig;
use crate::events::{InputEvent, Key, KeyPressEvent, MousePressEvent, ScrollEvent};
use crate::hit_test::{self, HitRegion, ScrollOrigin};
use crate::lifecycle::Lifecycle;
use crate::model::{CompleterModel, CompletionItem};
use crate::placement::{Placement, compute_placement, scroll_into_view};
use crate::prefix::common_prefix;
use crate::reference::ReferenceSurface;
use crate::renderer::{ACTIVE_CLASS, CONTAINER_CLASS, DefaultRenderer, ITEM_CLASS, ItemRenderer, VALUE_ATTRIBUTE};

fn warn_node_failure(operation: &'static str, err: NodeError) {
    tracing::warn!(target: targets::POPUP, operation, %err, "popup node operation failed");
}

// ============================================================================
// Popup State
// ============================================================================

/// Everything the state machine mutates.
struct PopupState {
    model: Option<Weak<dyn CompleterModel>>,
    reference: Option<Weak<dyn ReferenceSurface>>,
    renderer: Arc<dyn ItemRenderer>,
    /// Index into `rows`; in bounds whenever `visible`.
    active_index: usize,
    visible: bool,
    /// Item rows of the last render, in model order.
    rows: Vec<NodeId>,
    placement: Option<Placement>,
}

impl Default for PopupState {
    fn default() -> Self {
        Self {
            model: None,
            reference: None,
            renderer: Arc::new(DefaultRenderer),
            active_index: 0,
            visible: false,
            rows: Vec::new(),
            placement: None,
        }
    }
}

// ============================================================================
// Completer
// ============================================================================

/// Popup completion menu bound to a model and a reference surface.
///
/// The completer holds only weak handles to its model and reference; a
/// dropped collaborator behaves as if it had never been set.
///
/// # Signals
///
/// - `selected(String)`: a value was accepted (Enter, Tab, click, or a
///   single remaining candidate)
/// - `highlighted(String)`: the active item changed through Up/Down
/// - `visibility_changed(bool)`: the popup was shown or hidden
pub struct Completer {
    document: Document,
    config: CompleterConfig,
    /// The list container.
    popup: NodeId,
    state: PopupState,
    update: UpdateRequest,
    /// Shared with the model slot, which only requests redraws while set.
    attached: Arc<AtomicBool>,
    capture: Option<CaptureId>,
    model_subscription: Option<Subscription>,
    disposed: bool,

    // Signals
    /// Signal emitted when a completion value is selected.
    pub selected: Signal<String>,

    /// Signal emitted when the active item changes.
    pub highlighted: Signal<String>,

    /// Signal emitted when the popup is shown (`true`) or hidden (`false`).
    pub visibility_changed: Signal<bool>,
}

impl Completer {
    /// Create a detached, hidden completer in `document` with default layout.
    pub fn new(document: &Document) -> Self {
        Self::with_config(document, CompleterConfig::default())
    }

    /// Create a detached, hidden completer with the given layout constants.
    pub fn with_config(document: &Document, config: CompleterConfig) -> Self {
        let popup = document.tree().with_write(|tree| {
            let popup = tree.create_element("ul");
            if let Err(err) = Self::init_container(tree, popup) {
                warn_node_failure("init_container", err);
            }
            popup
        });

        tracing::debug!(target: targets::POPUP, ?popup, "created completer");

        Self {
            document: document.clone(),
            config,
            popup,
            state: PopupState::default(),
            update: UpdateRequest::new(),
            attached: Arc::new(AtomicBool::new(false)),
            capture: None,
            model_subscription: None,
            disposed: false,
            selected: Signal::new(),
            highlighted: Signal::new(),
            visibility_changed: Signal::new(),
        }
    }

    fn init_container(tree: &mut NodeTree, popup: NodeId) -> NodeResult<()> {
        tree.add_class(popup, CONTAINER_CLASS)?;
        tree.set_overflow(popup, Overflow::Auto)?;
        tree.set_hidden(popup, true)?;
        let root = tree.root();
        tree.append_child(root, popup)
    }

    /// Set the model using builder pattern.
    pub fn with_model<M: CompleterModel + 'static>(mut self, model: &Arc<M>) -> Self {
        self.set_model(model);
        self
    }

    /// Set the reference surface using builder pattern.
    pub fn with_reference<R: ReferenceSurface + 'static>(mut self, reference: &Arc<R>) -> Self {
        self.set_reference(reference);
        self
    }

    /// Set the item renderer using builder pattern.
    pub fn with_renderer(mut self, renderer: impl ItemRenderer + 'static) -> Self {
        self.set_renderer(renderer);
        self
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// The model, if set and still alive.
    pub fn model(&self) -> Option<Arc<dyn CompleterModel>> {
        self.state.model.as_ref().and_then(Weak::upgrade)
    }

    /// Bind to a model, replacing any previous one.
    ///
    /// The previous model's subscription is torn down before the new one is
    /// installed. Setting the model already bound is a no-op.
    pub fn set_model<M: CompleterModel + 'static>(&mut self, model: &Arc<M>) {
        let model: Arc<dyn CompleterModel> = Arc::clone(model) as Arc<dyn CompleterModel>;
        self.swap_model(Some(model));
    }

    /// Unbind the model.
    pub fn clear_model(&mut self) {
        self.swap_model(None);
    }

    fn swap_model(&mut self, model: Option<Arc<dyn CompleterModel>>) {
        if self.disposed {
            return;
        }
        let unchanged = match (self.model(), &model) {
            (Some(current), Some(new)) => std::ptr::addr_eq(Arc::as_ptr(&current), Arc::as_ptr(new)),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return;
        }

        self.model_subscription = None;
        self.state.model = model.as_ref().map(Arc::downgrade);
        self.state.active_index = 0;

        if let Some(model) = &model {
            let update = self.update.clone();
            let attached = Arc::clone(&self.attached);
            self.model_subscription = Some(model.state_changed().subscribe(move |_| {
                if attached.load(Ordering::Acquire) {
                    update.request();
                }
            }));
        }

        tracing::debug!(target: targets::POPUP, has_model = model.is_some(), "model swapped");
        if self.is_attached() {
            self.update.request();
        }
    }

    /// The reference surface, if set and still alive.
    pub fn reference(&self) -> Option<Arc<dyn ReferenceSurface>> {
        self.state.reference.as_ref().and_then(Weak::upgrade)
    }

    /// Bind to a reference surface, replacing any previous one.
    pub fn set_reference<R: ReferenceSurface + 'static>(&mut self, reference: &Arc<R>) {
        if self.disposed {
            return;
        }
        let reference: Arc<dyn ReferenceSurface> = Arc::clone(reference) as Arc<dyn ReferenceSurface>;
        self.state.reference = Some(Arc::downgrade(&reference));
        tracing::debug!(target: targets::POPUP, node = ?reference.node(), "reference set");
    }

    /// Unbind the reference surface.
    pub fn clear_reference(&mut self) {
        self.state.reference = None;
    }

    /// Replace the item renderer and redraw with it.
    pub fn set_renderer(&mut self, renderer: impl ItemRenderer + 'static) {
        self.state.renderer = Arc::new(renderer);
        self.update.request();
    }

    // =========================================================================
    // State Access
    // =========================================================================

    /// Layout constants in use.
    pub fn config(&self) -> &CompleterConfig {
        &self.config
    }

    /// The popup's list container node.
    pub fn popup_node(&self) -> NodeId {
        self.popup
    }

    /// Item rows of the current render, in model order.
    pub fn rows(&self) -> &[NodeId] {
        &self.state.rows
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index
    }

    /// Position and size of the last render.
    pub fn placement(&self) -> Option<Placement> {
        self.state.placement
    }

    /// Whether a redraw is waiting for the next refresh cycle.
    pub fn redraw_pending(&self) -> bool {
        self.update.is_pending()
    }

    /// Textual rendering of the popup subtree, for debugging.
    pub fn dump_tree(&self) -> String {
        let tree = self.document.tree().read();
        NodeTreeDebug::new()
            .with_attributes(true)
            .format_subtree(&tree, self.popup)
            .unwrap_or_default()
    }

    // =========================================================================
    // Redraw
    // =========================================================================

    #[tracing::instrument(target = "horizon_completer::popup", level = "trace", skip(self))]
    fn redraw(&mut self) {
        let Some(model) = self.model() else {
            self.hide();
            return;
        };
        let items = model.items();
        match items.len() {
            0 => self.hide(),
            1 => {
                let value = items[0].raw.clone();
                tracing::debug!(target: targets::POPUP, %value, "single candidate accepted");
                self.selected.emit(value);
                self.reset();
            }
            _ => {
                if let Err(err) = self.render(model.as_ref(), &items) {
                    warn_node_failure("render", err);
                    self.hide();
                }
            }
        }
    }

    fn render(&mut self, model: &dyn CompleterModel, items: &[CompletionItem]) -> NodeResult<()> {
        if !self.state.visible || self.state.active_index >= items.len() {
            self.state.active_index = 0;
        }
        let placement = compute_placement(&self.config, model.anchor(), items.len());
        let item_height = self.config.item_height;
        let row_width = self.config.min_width;

        // Row IDs die with clear_children, even if the rebuild fails.
        self.state.rows.clear();
        self.state.placement = None;
        let mut rows = Vec::with_capacity(items.len());
        {
            let mut tree = self.document.tree().write();
            tree.clear_children(self.popup)?;
            for (index, item) in items.iter().enumerate() {
                let row = self.state.renderer.create_item_node(&mut tree, item)?;
                tree.append_child(self.popup, row)?;
                let top = index as f32 * item_height;
                tree.set_geometry(row, Rect::new(0.0, top, row_width, item_height))?;
                rows.push(row);
            }
            if let Some(&active) = rows.get(self.state.active_index) {
                tree.add_class(active, ACTIVE_CLASS)?;
            }
            tree.set_geometry(self.popup, placement.rect())?;
            tree.set_scroll_top(self.popup, 0.0)?;
            tree.set_hidden(self.popup, false)?;
        }

        tracing::trace!(
            target: targets::POPUP,
            rows = rows.len(),
            top = placement.top,
            left = placement.left,
            height = placement.height,
            "rendered popup"
        );
        self.state.rows = rows;
        self.state.placement = Some(placement);
        self.set_visible(true);
        Ok(())
    }

    fn set_visible(&mut self, visible: bool) {
        if self.state.visible == visible {
            return;
        }
        self.state.visible = visible;
        tracing::debug!(target: targets::POPUP, visible, "popup visibility changed");
        self.visibility_changed.emit(visible);
    }

    fn hide(&mut self) {
        if let Err(err) = self.document.tree().write().set_hidden(self.popup, true) {
            warn_node_failure("hide", err);
        }
        self.set_visible(false);
    }

    /// Dismiss the popup and abandon the model's completion session.
    pub fn reset(&mut self) {
        self.state.active_index = 0;
        if let Some(model) = self.model() {
            model.reset();
        }
        self.hide();
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle an intercepted input event.
    ///
    /// Returns `true` if the popup consumed the event; the host should then
    /// stop delivering it. Events are ignored while detached.
    pub fn handle_event(&mut self, event: &mut InputEvent) -> bool {
        if !self.is_attached() {
            return false;
        }
        match event {
            InputEvent::KeyPress(event) => self.handle_key_press(event),
            InputEvent::MousePress(event) => self.handle_mouse_press(event),
            InputEvent::Scroll(event) => self.handle_scroll(event),
        }
    }

    fn handle_key_press(&mut self, event: &mut KeyPressEvent) -> bool {
        if !self.state.visible {
            return false;
        }
        let Some(reference) = self.reference() else {
            return false;
        };

        let inside = {
            let tree = self.document.tree().read();
            hit_test::is_within(&*tree, event.target, reference.node())
        };
        if !inside {
            tracing::trace!(target: targets::POPUP, target = ?event.target, "key outside reference");
            self.reset();
            return false;
        }

        tracing::trace!(target: targets::POPUP, key = ?event.key, "key press");
        match event.key {
            Key::Tab => {
                if !self.complete_subset() {
                    self.select_active();
                }
            }
            Key::Enter => self.select_active(),
            Key::Escape => self.reset(),
            Key::ArrowUp => self.cycle(false),
            Key::ArrowDown => self.cycle(true),
            _ => return false,
        }
        event.base.prevent_default();
        true
    }

    fn handle_mouse_press(&mut self, event: &mut MousePressEvent) -> bool {
        if !self.state.visible || self.reference().is_none() {
            return false;
        }
        if event.is_nonstandard() {
            tracing::trace!(target: targets::POPUP, button = ?event.button, "nonstandard click");
            self.reset();
            return false;
        }

        let (region, value) = {
            let tree = self.document.tree().read();
            let region = hit_test::classify(&*tree, event.target, self.popup, ITEM_CLASS);
            let value = match region {
                HitRegion::OnItem(row) => tree.attribute(row, VALUE_ATTRIBUTE).map(str::to_owned),
                _ => None,
            };
            (region, value)
        };

        match region {
            HitRegion::OnItem(_) => {
                event.base.prevent_default();
                if let Some(value) = value {
                    tracing::debug!(target: targets::POPUP, %value, "item clicked");
                    self.selected.emit(value);
                }
                self.reset();
                true
            }
            HitRegion::OnPopup => {
                event.base.prevent_default();
                true
            }
            HitRegion::Outside => {
                self.reset();
                false
            }
        }
    }

    fn handle_scroll(&mut self, event: &mut ScrollEvent) -> bool {
        if !self.state.visible {
            return false;
        }
        let origin = {
            let tree = self.document.tree().read();
            hit_test::classify_scroll(&*tree, event.target, self.popup)
        };
        if origin == ScrollOrigin::Outside {
            tracing::trace!(target: targets::POPUP, target = ?event.target, "page scrolled");
            self.reset();
        }
        false
    }

    // =========================================================================
    // Selection and Navigation
    // =========================================================================

    fn active_value(&self) -> Option<String> {
        let row = *self.state.rows.get(self.state.active_index)?;
        let tree = self.document.tree().read();
        tree.attribute(row, VALUE_ATTRIBUTE).map(str::to_owned)
    }

    fn select_active(&mut self) {
        if let Some(value) = self.active_value() {
            tracing::debug!(target: targets::POPUP, %value, "active item selected");
            self.selected.emit(value);
        }
        self.reset();
    }

    /// Extend the query to the longest prefix shared by every rendered row.
    fn complete_subset(&mut self) -> bool {
        let Some(model) = self.model() else {
            return false;
        };
        let values: Vec<String> = {
            let tree = self.document.tree().read();
            self.state
                .rows
                .iter()
                .filter_map(|&row| tree.attribute(row, VALUE_ATTRIBUTE).map(str::to_owned))
                .collect()
        };
        let subset = common_prefix(&values);
        let query = model.query();
        if subset.is_empty() || subset == query || !subset.starts_with(query.as_str()) {
            return false;
        }

        tracing::debug!(target: targets::POPUP, %query, %subset, "completed common prefix");
        model.set_query(subset.clone());
        self.selected.emit(subset);
        self.update.request();
        true
    }

    fn cycle(&mut self, forward: bool) {
        let count = self.state.rows.len();
        if count == 0 {
            return;
        }
        let previous = self.state.active_index.min(count - 1);
        let next = if forward {
            (previous + 1) % count
        } else {
            (previous + count - 1) % count
        };
        self.state.active_index = next;

        let result = self.document.tree().with_write(|tree| {
            tree.remove_class(self.state.rows[previous], ACTIVE_CLASS)?;
            tree.add_class(self.state.rows[next], ACTIVE_CLASS)?;
            self.scroll_row_into_view(tree, self.state.rows[next])?;
            Ok::<_, NodeError>(tree.attribute(self.state.rows[next], VALUE_ATTRIBUTE).map(str::to_owned))
        });

        match result {
            Ok(Some(value)) => self.highlighted.emit(value),
            Ok(None) => {}
            Err(err) => warn_node_failure("cycle", err),
        }
    }

    fn scroll_row_into_view(&self, tree: &mut NodeTree, row: NodeId) -> NodeResult<()> {
        let viewport_height = tree.geometry(self.popup)?.height;
        let scroll_top = tree.scroll_top(self.popup)?;
        let row_box = tree.geometry(row)?;
        let content_height = self.state.placement.map_or(0.0, |p| p.content_height);
        let target = scroll_into_view(
            scroll_top,
            row_box.top() - scroll_top,
            row_box.bottom() - scroll_top,
            viewport_height,
            content_height,
            self.config.scroll_margin,
        );
        if target != scroll_top {
            tracing::trace!(target: targets::POPUP, from = scroll_top, to = target, "scrolled active row into view");
            tree.set_scroll_top(self.popup, target)?;
        }
        Ok(())
    }

    // =========================================================================
    // Teardown
    // =========================================================================

    /// Detach, drop the model subscription and destroy the popup's nodes.
    ///
    /// Calling this more than once is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.on_detach();
        self.set_visible(false);
        self.disposed = true;

        self.model_subscription = None;
        self.state.model = None;
        self.state.reference = None;
        self.state.rows.clear();
        self.state.placement = None;
        self.update.cancel();

        if let Err(err) = self.document.tree().write().destroy(self.popup) {
            warn_node_failure("dispose", err);
        }
        tracing::debug!(target: targets::POPUP, popup = ?self.popup, "disposed completer");
    }
}

impl Lifecycle for Completer {
    fn on_attach(&mut self) {
        if self.disposed || self.capture.is_some() {
            return;
        }
        self.capture = Some(self.document.capture().install(self.popup, CaptureKind::ALL));
        self.attached.store(true, Ordering::Release);
        tracing::debug!(target: targets::POPUP, popup = ?self.popup, "attached");
        self.update.request();
    }

    fn on_detach(&mut self) {
        let Some(capture) = self.capture.take() else {
            return;
        };
        self.document.capture().remove(capture);
        self.attached.store(false, Ordering::Release);
        self.update.cancel();
        self.hide();
        tracing::debug!(target: targets::POPUP, popup = ?self.popup, "detached");
    }

    fn on_redraw_requested(&mut self) -> bool {
        if !self.update.take() || !self.is_attached() {
            return false;
        }
        self.redraw();
        true
    }
}

impl Drop for Completer {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Completer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completer")
            .field("popup", &self.popup)
            .field("visible", &self.state.visible)
            .field("attached", &self.is_attached())
            .field("active_index", &self.state.active_index)
            .field("rows", &self.state.rows.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}

static_assertions::assert_impl_all!(Completer: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{KeyboardModifiers, MouseButton};
    use crate::model::{Anchor, CompletionModel};
    use crate::reference::NodeReference;
    use parking_lot::Mutex;

    struct Fixture {
        document: Document,
        editor: NodeId,
        model: Arc<CompletionModel>,
        _reference: Arc<NodeReference>,
        completer: Completer,
        selections: Arc<Mutex<Vec<String>>>,
    }

    fn fixture(values: &[&str]) -> Fixture {
        let document = Document::new();
        let editor = document.tree().with_write(|tree| {
            let editor = tree.create_element("textarea");
            let root = tree.root();
            tree.append_child(root, editor).unwrap();
            editor
        });
        let model = Arc::new(CompletionModel::new());
        let reference = Arc::new(NodeReference::new(editor));
        let mut completer = Completer::new(&document)
            .with_model(&model)
            .with_reference(&reference);

        let selections = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&selections);
        completer.selected.connect(move |value| sink.lock().push(value.clone()));

        completer.on_attach();
        model.set_original(Anchor::new(300.0, 50.0));
        model.set_items(values.iter().map(|v| CompletionItem::plain(*v)).collect());
        completer.on_redraw_requested();

        Fixture {
            document,
            editor,
            model,
            _reference: reference,
            completer,
            selections,
        }
    }

    fn key(target: NodeId, key: Key) -> InputEvent {
        KeyPressEvent::new(target, key, KeyboardModifiers::NONE).into()
    }

    #[test]
    fn test_notifications_coalesce_into_one_redraw() {
        let mut f = fixture(&["foo", "bar"]);
        f.model.set_query("f");
        f.model.set_items(vec![CompletionItem::plain("foo"), CompletionItem::plain("far")]);
        f.model.set_current(Some(Anchor::new(200.0, 10.0)));
        assert!(f.completer.on_redraw_requested());
        assert!(!f.completer.on_redraw_requested());
        assert_eq!(f.completer.placement().unwrap().top, 160.0);
    }

    #[test]
    fn test_detached_ignores_notifications() {
        let mut f = fixture(&["foo", "bar"]);
        f.completer.on_detach();
        assert!(!f.completer.is_visible());
        f.model.set_items(vec![CompletionItem::plain("a"), CompletionItem::plain("b")]);
        assert!(!f.completer.redraw_pending());
        assert!(!f.completer.on_redraw_requested());
    }

    #[test]
    fn test_active_index_clamped_when_list_shrinks() {
        let mut f = fixture(&["a", "b", "c", "d"]);
        let editor = f.editor;
        f.completer.handle_event(&mut key(editor, Key::ArrowUp));
        assert_eq!(f.completer.active_index(), 3);

        f.model.set_items(vec![CompletionItem::plain("a"), CompletionItem::plain("b")]);
        f.completer.on_redraw_requested();
        assert_eq!(f.completer.active_index(), 0);
    }

    #[test]
    fn test_cycle_scrolls_active_row_into_view() {
        let values: Vec<String> = (0..20).map(|i| format!("item{i:02}")).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let mut f = fixture(&refs);
        let editor = f.editor;
        let popup = f.completer.popup_node();

        // 250 high viewport over 400 of content.
        f.completer.handle_event(&mut key(editor, Key::ArrowUp));
        assert_eq!(f.completer.active_index(), 19);
        let scroll_top = f.document.tree().read().scroll_top(popup).unwrap();
        assert_eq!(scroll_top, 150.0);

        f.completer.handle_event(&mut key(editor, Key::ArrowDown));
        assert_eq!(f.completer.active_index(), 0);
        let scroll_top = f.document.tree().read().scroll_top(popup).unwrap();
        assert_eq!(scroll_top, 0.0);
    }

    #[test]
    fn test_click_on_popup_whitespace_keeps_state() {
        let mut f = fixture(&["foo", "bar"]);
        let popup = f.completer.popup_node();
        let mut event: InputEvent =
            MousePressEvent::new(popup, MouseButton::Left, KeyboardModifiers::NONE).into();
        assert!(f.completer.handle_event(&mut event));
        assert!(event.base().is_default_prevented());
        assert!(f.completer.is_visible());
        assert!(f.selections.lock().is_empty());
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let mut f = fixture(&["foo", "bar"]);
        let popup = f.completer.popup_node();
        f.completer.dispose();
        f.completer.dispose();
        assert!(f.completer.is_disposed());
        assert!(!f.document.tree().read().contains(popup));
        assert_eq!(f.document.capture().listener_count(), 0);
        assert_eq!(f.model.state_changed().connection_count(), 0);
    }

    #[test]
    fn test_dump_tree_lists_rows() {
        let f = fixture(&["foo", "bar"]);
        let dump = f.completer.dump_tree();
        assert!(dump.starts_with("ul.completer"));
        assert!(dump.contains("li.completer-item.completer-item-active data-value=\"foo\""));
        assert!(dump.contains("li.completer-item data-value=\"bar\""));
    }
}
