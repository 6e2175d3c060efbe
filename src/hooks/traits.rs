use async_trait::async_trait;

use super::{HookKind, HostEvent};
use crate::client::Client;

/// Trait for hook functions attached to the host's interception points.
///
/// Each hook serves one [`HookKind`]. The router awaits the returned
/// future before handing control back to the host, so the host's
/// continuation (submission, render) is gated on the hook settling.
#[async_trait]
pub trait Hook: Send + Sync {
    /// The interception kind this hook serves.
    fn kind(&self) -> HookKind;

    /// Handle one captured event, mutating the carried records in
    /// place.
    ///
    /// # Returns
    /// `true` if the hook consumed the event and mutated at least one
    /// carrier, `false` for a silent pass-through.
    async fn handle(&self, client: &Client, event: &mut HostEvent<'_>) -> bool;
}
