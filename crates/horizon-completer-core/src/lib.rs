//! Core primitives for Horizon Completer.
//!
//! This crate provides the building blocks the completion popup is written
//! against:
//!
//! - **Node Tree**: Arena of document nodes with classes, attributes, layout
//!   boxes and scroll offsets
//! - **Node Lookup**: Parent-chain queries used by hit-testing
//! - **Signal/Slot System**: Change notification with disposable subscriptions
//! - **Input Capture**: Registry of top-level key, pointer and scroll captures
//! - **Deferred Updates**: Coalesced redraw requests
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_completer_core::Signal;
//!
//! let selected = Signal::<String>::new();
//! let mut subscription = selected.subscribe(|value| {
//!     println!("selected {value}");
//! });
//!
//! selected.emit("print".to_string());
//! subscription.dispose();
//! assert_eq!(selected.connection_count(), 0);
//! ```
//!
//! # Node Tree Example
//!
//! ```
//! use horizon_completer_core::{Document, NodeLookup};
//!
//! let document = Document::new();
//! let mut tree = document.tree().write();
//! let body = tree.create_element("body");
//! let list = tree.create_element("ul");
//! let root = tree.root();
//! tree.append_child(root, body).unwrap();
//! tree.append_child(body, list).unwrap();
//!
//! let chain: Vec<_> = tree.ancestor_walk(list).collect();
//! assert_eq!(chain, vec![list, body]);
//! ```

pub mod capture;
mod document;
mod error;
mod geometry;
pub mod logging;
pub mod lookup;
pub mod node;
pub mod signal;
mod update;

pub use capture::{CaptureId, CaptureKind, InputCapture};
pub use document::Document;
pub use error::{NodeError, NodeResult};
pub use geometry::Rect;
pub use logging::NodeTreeDebug;
pub use lookup::{AncestorWalk, NodeLookup};
pub use node::{NodeId, NodeTree, Overflow, SharedNodeTree};
pub use signal::{ConnectionId, Signal, Subscription};
pub use update::UpdateRequest;
