use std::collections::HashMap;
use std::sync::Arc;

use super::traits::Hook;
use super::{HookKind, HostEvent};
use crate::client::Client;

/// Central router dispatching captured host events to their hooks.
///
/// The router maintains a registry of hooks keyed by interception kind
/// and dispatches each event to the matching hook. Dispatch awaits the
/// hook's async chain before returning, so the host's forward progress
/// is gated on the pipeline settling.
pub struct HookRouter {
    /// Map of interception kind -> hook for fast lookups
    hooks: HashMap<HookKind, Arc<dyn Hook>>,
}

impl HookRouter {
    /// Create a new empty router.
    pub fn new() -> Self {
        Self {
            hooks: HashMap::new(),
        }
    }

    /// Register a hook for its kind.
    ///
    /// # Panics
    /// Panics if a hook is already registered for the same kind to
    /// prevent accidental overwrites during load.
    pub fn register(&mut self, hook: Arc<dyn Hook>) {
        let kind = hook.kind();
        if self.hooks.insert(kind, hook).is_some() {
            panic!("Hook for kind {kind:?} already registered");
        }
    }

    /// Remove the hook for `kind`.
    ///
    /// Safe to call repeatedly; removing an unregistered kind is a
    /// no-op. Returns whether a hook was actually removed.
    pub fn unregister(&mut self, kind: HookKind) -> bool {
        self.hooks.remove(&kind).is_some()
    }

    /// Drop every registered hook.
    pub fn clear(&mut self) {
        self.hooks.clear();
    }

    /// Dispatch an event to its hook.
    ///
    /// # Returns
    /// `true` if a hook was registered for the event's kind and
    /// consumed it, `false` otherwise.
    pub async fn dispatch(&self, client: &Client, event: &mut HostEvent<'_>) -> bool {
        if let Some(hook) = self.hooks.get(&event.kind()) {
            hook.handle(client, event).await
        } else {
            false
        }
    }

    /// Get the number of registered hooks (useful for testing).
    pub fn handler_count(&self) -> usize {
        self.hooks.len()
    }
}

impl Default for HookRouter {
    fn default() -> Self {
        Self::new()
    }
}
