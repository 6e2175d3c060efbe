use async_trait::async_trait;

use vtcore::classify::is_audio_mime;
use vtcore::tag;

use super::traits::Hook;
use super::{HookKind, HostEvent};
use crate::client::Client;
use crate::fetch::ByteSource;
use crate::pipeline;

/// Outgoing-submission hook.
///
/// Fires before the host transmits a pending upload. The decode chain
/// is awaited, so actual submission is deferred until the envelope is
/// stamped and the host never sends a half-tagged upload.
#[derive(Default)]
pub struct UploadSubmitHook;

#[async_trait]
impl Hook for UploadSubmitHook {
    fn kind(&self) -> HookKind {
        HookKind::UploadSubmit
    }

    async fn handle(&self, client: &Client, event: &mut HostEvent<'_>) -> bool {
        let HostEvent::UploadSubmit(upload) = event else {
            return false;
        };
        // Toggles are re-read on every firing.
        if !client.settings().send_as_voice() {
            return false;
        }
        if upload.is_voice_message() {
            return false;
        }
        let Some(item) = upload.items.first() else {
            return false;
        };
        if !is_audio_mime(item.mime_type.as_deref()) {
            return false;
        }

        let source = match &item.bytes {
            Some(data) => ByteSource::Bytes(data.clone()),
            None => ByteSource::Missing,
        };
        let (envelope, fallback) = pipeline::compute_envelope(&source).await;

        // The engine may have been torn down while the decode chain was
        // in flight; a carrier must not be mutated after unload.
        if client.is_shutdown() {
            return false;
        }
        let tagged = tag::tag_upload(upload, &envelope);
        if tagged {
            client.emit_converted(HookKind::UploadSubmit, fallback);
        }
        tagged
    }
}
