//! The decode → reduce → encode chain, with fallback.

use log::warn;

use vtcore::fallback::fallback_envelope;
use vtcore::types::EncodedEnvelope;
use vtcore::{waveform, wire};

use crate::audio;
use crate::error::DecodeError;
use crate::fetch::{self, ByteSource};

/// Compute the transport envelope for an audio byte source.
///
/// Never fails: any fetch or decode error degrades to the constant
/// fallback envelope so the carrier can still be tagged consistently.
/// Returns the envelope and whether the fallback was used.
pub async fn compute_envelope(source: &ByteSource) -> (EncodedEnvelope, bool) {
    match try_compute(source).await {
        Ok(envelope) => (envelope, false),
        Err(e) => {
            warn!("waveform computation failed, using fallback envelope: {e}");
            (fallback_envelope().clone(), true)
        }
    }
}

async fn try_compute(source: &ByteSource) -> Result<EncodedEnvelope, DecodeError> {
    let data = fetch::fetch(source).await?;
    let pcm = audio::decode(data).await?;
    let envelope = waveform::reduce_default(&pcm);
    Ok(EncodedEnvelope {
        waveform: wire::encode_waveform(&envelope.buckets),
        duration_secs: envelope.duration_secs as f32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_corrupt_bytes_degrade_to_fallback() {
        let source = ByteSource::Bytes(Bytes::from_static(b"\x00\x01corrupt"));
        let (envelope, fallback) = compute_envelope(&source).await;
        assert!(fallback);
        assert_eq!(&envelope, fallback_envelope());
    }

    #[tokio::test]
    async fn test_missing_source_degrades_to_fallback() {
        let (envelope, fallback) = compute_envelope(&ByteSource::Missing).await;
        assert!(fallback);
        assert_eq!(envelope.duration_secs, 60.0);
    }
}
