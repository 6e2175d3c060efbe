use thiserror::Error;

/// Failure to turn an audio byte source into PCM.
///
/// Always recovered locally with the fallback envelope; never surfaced
/// to the host, and never allowed to abort the surrounding upload or
/// message render.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("byte source unreadable: {0}")]
    Source(String),
    #[error("no decodable audio track in payload")]
    NoAudioTrack,
    #[error("audio decoding failed: {0}")]
    Codec(#[from] symphonia::core::errors::Error),
    #[error("decode task cancelled")]
    Cancelled,
}
