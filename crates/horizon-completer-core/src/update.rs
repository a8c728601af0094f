//! Deferred, coalesced update requests.
//!
//! Change notifications often arrive in bursts (a model updating its query,
//! items and anchor in one go). Rather than rebuilding on every notification,
//! a component requests an update; the host takes the request once per
//! refresh cycle. Any number of requests made before the take collapse into a
//! single update.
//!
//! ```
//! use horizon_completer_core::UpdateRequest;
//!
//! let request = UpdateRequest::new();
//! assert!(request.request());
//! assert!(!request.request()); // coalesced into the pending update
//!
//! assert!(request.take());
//! assert!(!request.take());
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::logging::targets;

#[derive(Debug, Default)]
struct UpdateState {
    pending: AtomicBool,
    coalesced: AtomicU64,
}

/// Shared flag marking a pending update.
///
/// Clones share the same flag, so a signal slot can hold one clone and the
/// owning component another.
#[derive(Debug, Clone, Default)]
pub struct UpdateRequest {
    state: Arc<UpdateState>,
}

impl UpdateRequest {
    /// Create a flag with no pending update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request an update.
    ///
    /// Returns `true` if this call scheduled a new update, `false` if it was
    /// folded into one already pending.
    pub fn request(&self) -> bool {
        let was_pending = self.state.pending.swap(true, Ordering::AcqRel);
        if was_pending {
            let coalesced = self.state.coalesced.fetch_add(1, Ordering::Relaxed) + 1;
            tracing::trace!(target: targets::UPDATE, coalesced, "update request coalesced");
        } else {
            tracing::trace!(target: targets::UPDATE, "update requested");
        }
        !was_pending
    }

    /// Whether an update is pending.
    pub fn is_pending(&self) -> bool {
        self.state.pending.load(Ordering::Acquire)
    }

    /// Consume the pending update.
    ///
    /// Returns `true` if an update was pending; the caller should perform it.
    pub fn take(&self) -> bool {
        self.state.pending.swap(false, Ordering::AcqRel)
    }

    /// Drop any pending update without performing it.
    pub fn cancel(&self) {
        self.state.pending.store(false, Ordering::Release);
    }

    /// Total number of requests folded into an already pending update.
    pub fn coalesced_count(&self) -> u64 {
        self.state.coalesced.load(Ordering::Relaxed)
    }
}
