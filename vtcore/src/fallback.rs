//! Stand-in envelope for undecodable audio.

use once_cell::sync::Lazy;

use crate::types::EncodedEnvelope;

/// Flat, near-silent waveform shipped when no real one can be computed.
const FALLBACK_WAVEFORM: &str = "AEtWPyUaGA4OEAcA";

/// Conservative placeholder duration.
const FALLBACK_DURATION_SECS: f32 = 60.0;

static FALLBACK: Lazy<EncodedEnvelope> = Lazy::new(|| EncodedEnvelope {
    waveform: FALLBACK_WAVEFORM.to_string(),
    duration_secs: FALLBACK_DURATION_SECS,
});

/// The constant envelope applied when decoding fails.
///
/// Tagging with it keeps the marker invariant intact, so the feature
/// degrades to a generic-looking voice message instead of leaving the
/// carrier half-converted.
pub fn fallback_envelope() -> &'static EncodedEnvelope {
    &FALLBACK
}
