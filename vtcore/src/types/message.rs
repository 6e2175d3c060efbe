use bytes::Bytes;

use crate::types::envelope::VOICE_MESSAGE_FLAG;

/// One attachment of an inbound message record.
///
/// A mutable fragment of a host-owned record: the tagger rewrites
/// `content_type`, `waveform` and `duration_secs` in place and the host
/// keeps ownership after the hook returns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attachment {
    pub content_type: Option<String>,
    pub url: Option<String>,
    pub waveform: Option<String>,
    pub duration_secs: Option<f32>,
}

/// Inbound message record as seen at the store interception points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    pub flags: u32,
    pub attachments: Vec<Attachment>,
}

impl Message {
    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }

    pub fn is_voice_message(&self) -> bool {
        self.has_flag(VOICE_MESSAGE_FLAG)
    }
}

/// One item of a pending upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadItem {
    pub mime_type: Option<String>,
    /// Raw payload, when the host hands the bytes over with the record.
    pub bytes: Option<Bytes>,
    pub waveform: Option<String>,
    pub duration_secs: Option<f32>,
}

/// Outgoing upload record captured before the host transmits it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingUpload {
    pub flags: u32,
    pub items: Vec<UploadItem>,
}

impl PendingUpload {
    pub fn is_voice_message(&self) -> bool {
        self.flags & VOICE_MESSAGE_FLAG != 0
    }
}
