//! Popup completion menu for Horizon Completer.
//!
//! A [`Completer`] watches a [`CompleterModel`] for candidates, renders them as
//! a scrollable list just above the text cursor, and lets the user pick one
//! with the keyboard or pointer. The chosen value is reported through the
//! [`Completer::selected`] signal; inserting it is up to the host.
//!
//! - **Prefix matching**: [`common_prefix`] backs Tab completion of the
//!   longest shared prefix
//! - **Hit-testing**: [`hit_test`] classifies event targets by walking their
//!   ancestor chain
//! - **Rendering**: [`ItemRenderer`] turns candidates into list rows
//! - **Placement**: [`compute_placement`] positions and sizes the popup
//! - **Configuration**: [`CompleterConfig`] loaded from TOML
//!
//! # Host Loop
//!
//! The host attaches the completer, routes captured input to
//! [`Completer::handle_event`], and calls
//! [`Lifecycle::on_redraw_requested`] once per refresh cycle:
//!
//! ```
//! use std::sync::Arc;
//! use horizon_completer::{
//!     Anchor, Completer, CompletionItem, CompletionModel, InputEvent, Key, KeyPressEvent,
//!     KeyboardModifiers, Lifecycle, NodeReference,
//! };
//! use horizon_completer_core::{CaptureKind, Document};
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
//! let mut completer = Completer::new(&document).with_model(&model).with_reference(&reference);
//! completer.on_attach();
//!
//! model.set_original(Anchor::new(300.0, 50.0));
//! model.set_items(vec![CompletionItem::plain("print"), CompletionItem::plain("proc")]);
//! completer.on_redraw_requested();
//!
//! let mut event: InputEvent = KeyPressEvent::new(editor, Key::Enter, KeyboardModifiers::NONE).into();
//! if document.capture().owners(CaptureKind::KeyDown).contains(&completer.popup_node()) {
//!     assert!(completer.handle_event(&mut event));
//! }
//! assert!(!completer.is_visible());
//! ```

pub mod config;
pub mod events;
mod lifecycle;
mod model;
mod placement;
mod popup;
mod prefix;
mod reference;
pub mod renderer;

pub use config::{CompleterConfig, ConfigError, ConfigResult};
pub use events::{
    EventBase, InputEvent, Key, KeyPressEvent, KeyboardModifiers, MouseButton, MousePressEvent,
    ScrollEvent,
};
pub use hit_test::{HitRegion, ScrollOrigin};
pub use lifecycle::Lifecycle;
pub use model::{Anchor, CompleterModel, CompletionItem, CompletionModel};
pub use placement::{Placement, compute_placement, scroll_into_view};
pub use popup::Completer;
pub use prefix::common_prefix;
pub use reference::{NodeReference, ReferenceSurface};
pub use renderer::{ACTIVE_CLASS, CONTAINER_CLASS, DefaultRenderer, ITEM_CLASS, ItemRenderer, VALUE_ATTRIBUTE};
