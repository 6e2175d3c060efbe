use std::sync::Arc;
use tokio::sync::broadcast;

use crate::hooks::HookKind;
use crate::host::InterceptionPoint;

// The size of the broadcast channel buffer.
const CHANNEL_CAPACITY: usize = 100;

/// An interception point the running host does not expose. The affected
/// surface stays disabled; everything else keeps working.
#[derive(Debug, Clone)]
pub struct ModuleMissing {
    pub point: InterceptionPoint,
}

/// A carrier was tagged as a voice message.
#[derive(Debug, Clone)]
pub struct Converted {
    pub kind: HookKind,
    /// True when the constant fallback envelope was stamped instead of
    /// a computed one.
    pub fallback: bool,
}

/// Decoding failed and the constant fallback envelope was stamped.
#[derive(Debug, Clone)]
pub struct FallbackUsed {
    pub kind: HookKind,
}

// Macro to generate EventBus fields and constructor
macro_rules! define_event_bus {
    ($(($field:ident, $type:ty)),* $(,)?) => {
        /// Typed event bus with a separate broadcast channel per event
        /// kind. Subscribers are best-effort: a lagging or absent
        /// receiver never blocks the pipeline.
        #[derive(Debug)]
        pub struct EventBus {
            $(
                pub $field: broadcast::Sender<$type>,
            )*
        }

        impl EventBus {
            pub fn new() -> Self {
                Self {
                    $(
                        $field: broadcast::channel(CHANNEL_CAPACITY).0,
                    )*
                }
            }
        }
    };
}

define_event_bus! {
    (module_missing, Arc<ModuleMissing>),
    (converted, Arc<Converted>),
    (fallback_used, Arc<FallbackUsed>),
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
