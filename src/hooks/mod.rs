//! Interception hooks over the host's event surface.

pub mod router;
pub mod store;
pub mod traits;
pub mod upload;

use vtcore::types::{Message, PendingUpload};

/// The interception kinds the engine serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// Outgoing upload, captured before the host transmits it.
    UploadSubmit,
    /// A batch of historical messages, captured after fetch.
    MessagesLoaded,
    /// One newly arrived message.
    MessageCreate,
    /// One changed message.
    MessageUpdate,
}

/// One event captured at a host interception point.
///
/// Carries mutable views of host-owned records; hooks mutate them in
/// place and never retain a reference past the invocation.
#[derive(Debug)]
pub enum HostEvent<'a> {
    UploadSubmit(&'a mut PendingUpload),
    MessagesLoaded(&'a mut [Message]),
    MessageCreate(&'a mut Message),
    MessageUpdate(&'a mut Message),
}

impl HostEvent<'_> {
    pub fn kind(&self) -> HookKind {
        match self {
            HostEvent::UploadSubmit(_) => HookKind::UploadSubmit,
            HostEvent::MessagesLoaded(_) => HookKind::MessagesLoaded,
            HostEvent::MessageCreate(_) => HookKind::MessageCreate,
            HostEvent::MessageUpdate(_) => HookKind::MessageUpdate,
        }
    }
}
