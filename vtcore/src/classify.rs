/// Prefix every eligible content type must carry.
const AUDIO_MIME_PREFIX: &str = "audio";

/// True iff the declared MIME type marks an audio asset.
///
/// A missing MIME type is ineligible, not an error.
pub fn is_audio_mime(mime: Option<&str>) -> bool {
    mime.is_some_and(|m| m.starts_with(AUDIO_MIME_PREFIX))
}
