//! Top-level input interception.
//!
//! A host dispatches raw input to whichever components have installed a
//! capture for that kind of input, before normal delivery to the target. A
//! component installs its capture when it attaches and removes it when it
//! detaches; [`InputCapture`] keeps the books so the host can route events and
//! so leaked listeners are observable.
//!
//! ```
//! use horizon_completer_core::{CaptureKind, Document};
//!
//! let document = Document::new();
//! let popup = document.tree().with_write(|tree| tree.create_element("ul"));
//!
//! let id = document.capture().install(popup, CaptureKind::ALL);
//! assert_eq!(document.capture().owners(CaptureKind::KeyDown), vec![popup]);
//!
//! assert!(document.capture().remove(id));
//! assert_eq!(document.capture().listener_count(), 0);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;
use crate::node::NodeId;

new_key_type! {
    /// Identifier of one installed capture.
    pub struct CaptureId;
}

/// Kind of input a capture intercepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureKind {
    /// Key press events.
    KeyDown,
    /// Pointer button press events.
    MouseDown,
    /// Scroll events from any scrolling container.
    Scroll,
}

impl CaptureKind {
    /// Every capture kind.
    pub const ALL: &'static [CaptureKind] =
        &[CaptureKind::KeyDown, CaptureKind::MouseDown, CaptureKind::Scroll];
}

#[derive(Debug, Clone)]
struct CaptureEntry {
    owner: NodeId,
    kinds: Vec<CaptureKind>,
}

/// Registry of installed top-level input captures.
///
/// Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct InputCapture {
    entries: Arc<Mutex<SlotMap<CaptureId, CaptureEntry>>>,
}

impl InputCapture {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a capture for `kinds` on behalf of `owner`.
    pub fn install(&self, owner: NodeId, kinds: &[CaptureKind]) -> CaptureId {
        let id = self.entries.lock().insert(CaptureEntry {
            owner,
            kinds: kinds.to_vec(),
        });
        tracing::debug!(target: targets::CAPTURE, ?id, ?owner, ?kinds, "installed input capture");
        id
    }

    /// Remove a capture.
    ///
    /// Returns `true` if the capture was installed.
    pub fn remove(&self, id: CaptureId) -> bool {
        let removed = self.entries.lock().remove(id).is_some();
        if removed {
            tracing::debug!(target: targets::CAPTURE, ?id, "removed input capture");
        }
        removed
    }

    /// Whether a capture is currently installed.
    pub fn is_installed(&self, id: CaptureId) -> bool {
        self.entries.lock().contains_key(id)
    }

    /// Owners that intercept `kind`.
    pub fn owners(&self, kind: CaptureKind) -> Vec<NodeId> {
        self.entries
            .lock()
            .values()
            .filter(|entry| entry.kinds.contains(&kind))
            .map(|entry| entry.owner)
            .collect()
    }

    /// Total number of (capture, kind) listeners installed.
    pub fn listener_count(&self) -> usize {
        self.entries.lock().values().map(|entry| entry.kinds.len()).sum()
    }
}
