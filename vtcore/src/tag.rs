//! Idempotent voice-message tagging.
//!
//! Both entry points enforce the same invariant: the marker bit is set
//! if and only if the carrier's MIME type, waveform and duration were
//! rewritten, all in one synchronous in-place edit. A carrier that
//! already holds the marker is never touched again.

use log::debug;

use crate::classify::is_audio_mime;
use crate::types::{
    EncodedEnvelope, Message, PendingUpload, VOICE_MESSAGE_FLAG, VOICE_MESSAGE_MIME,
};

/// Stamp a pending upload as a voice message. Targets `items[0]`.
///
/// A no-op when the marker is already set, when the upload has no
/// items, or when the first item is not audio. Returns whether the
/// carrier was mutated.
pub fn tag_upload(upload: &mut PendingUpload, envelope: &EncodedEnvelope) -> bool {
    if upload.is_voice_message() {
        return false;
    }
    let Some(item) = upload.items.first_mut() else {
        return false;
    };
    if !is_audio_mime(item.mime_type.as_deref()) {
        return false;
    }
    item.mime_type = Some(VOICE_MESSAGE_MIME.to_string());
    item.waveform = Some(envelope.waveform.clone());
    item.duration_secs = Some(envelope.duration_secs);
    upload.flags |= VOICE_MESSAGE_FLAG;
    debug!("tagged pending upload as voice message");
    true
}

/// Stamp one attachment of an inbound message as a voice message.
///
/// Same contract as [`tag_upload`], against `attachments[index]`.
pub fn tag_message(message: &mut Message, index: usize, envelope: &EncodedEnvelope) -> bool {
    if message.is_voice_message() {
        return false;
    }
    let Some(attachment) = message.attachments.get_mut(index) else {
        return false;
    };
    if !is_audio_mime(attachment.content_type.as_deref()) {
        return false;
    }
    attachment.content_type = Some(VOICE_MESSAGE_MIME.to_string());
    attachment.waveform = Some(envelope.waveform.clone());
    attachment.duration_secs = Some(envelope.duration_secs);
    message.flags |= VOICE_MESSAGE_FLAG;
    debug!("tagged inbound message attachment {index} as voice message");
    true
}
