pub mod envelope;
pub mod message;

pub use envelope::{
    EncodedEnvelope, PcmBuffer, VOICE_MESSAGE_FLAG, VOICE_MESSAGE_MIME, WAVEFORM_BIT_DEPTH,
    WAVEFORM_BUCKETS, WAVEFORM_MAX_VALUE, WaveformEnvelope,
};
pub use message::{Attachment, Message, PendingUpload, UploadItem};
