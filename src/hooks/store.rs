//! Inbound message-store hooks: batch load, create, update.

use async_trait::async_trait;

use vtcore::classify::is_audio_mime;
use vtcore::tag;
use vtcore::types::Message;

use super::traits::Hook;
use super::{HookKind, HostEvent};
use crate::client::Client;
use crate::fetch::ByteSource;
use crate::pipeline;

/// Tag the first audio attachment of one inbound message.
///
/// Skips messages already carrying the marker. Attachments with a
/// fetchable URL get a computed envelope; anything else degrades to
/// the fallback.
async fn convert_message(client: &Client, kind: HookKind, message: &mut Message) -> bool {
    if message.is_voice_message() {
        return false;
    }
    let Some(index) = message
        .attachments
        .iter()
        .position(|a| is_audio_mime(a.content_type.as_deref()))
    else {
        return false;
    };

    let source = match &message.attachments[index].url {
        Some(url) => ByteSource::Url(url.clone()),
        None => ByteSource::Missing,
    };
    let (envelope, fallback) = pipeline::compute_envelope(&source).await;

    if client.is_shutdown() {
        return false;
    }
    let tagged = tag::tag_message(message, index, &envelope);
    if tagged {
        client.emit_converted(kind, fallback);
    }
    tagged
}

/// Inbound-batch-load hook.
///
/// Fires after a batch of historical messages is fetched; every
/// message in the batch goes through the same eligibility + tag logic.
#[derive(Default)]
pub struct MessagesLoadedHook;

#[async_trait]
impl Hook for MessagesLoadedHook {
    fn kind(&self) -> HookKind {
        HookKind::MessagesLoaded
    }

    async fn handle(&self, client: &Client, event: &mut HostEvent<'_>) -> bool {
        let HostEvent::MessagesLoaded(messages) = event else {
            return false;
        };
        if !client.settings().all_audio_as_voice() {
            return false;
        }
        let mut any = false;
        for message in messages.iter_mut() {
            any |= convert_message(client, HookKind::MessagesLoaded, message).await;
        }
        any
    }
}

/// Inbound-create hook: one newly arrived message.
#[derive(Default)]
pub struct MessageCreateHook;

#[async_trait]
impl Hook for MessageCreateHook {
    fn kind(&self) -> HookKind {
        HookKind::MessageCreate
    }

    async fn handle(&self, client: &Client, event: &mut HostEvent<'_>) -> bool {
        let HostEvent::MessageCreate(message) = event else {
            return false;
        };
        if !client.settings().all_audio_as_voice() {
            return false;
        }
        convert_message(client, HookKind::MessageCreate, message).await
    }
}

/// Inbound-update hook: one changed message.
#[derive(Default)]
pub struct MessageUpdateHook;

#[async_trait]
impl Hook for MessageUpdateHook {
    fn kind(&self) -> HookKind {
        HookKind::MessageUpdate
    }

    async fn handle(&self, client: &Client, event: &mut HostEvent<'_>) -> bool {
        let HostEvent::MessageUpdate(message) = event else {
            return false;
        };
        if !client.settings().all_audio_as_voice() {
            return false;
        }
        convert_message(client, HookKind::MessageUpdate, message).await
    }
}
