//! Wire encoding of waveform envelopes.
//!
//! The host's transport format: one unsigned byte per bucket holding a
//! 6-bit amplitude (`0..=63`), base64-encoded into an opaque string.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::types::WAVEFORM_MAX_VALUE;

/// Quantize normalized buckets and pack them into the transport string.
pub fn encode_waveform(buckets: &[f32]) -> String {
    let quantized: Vec<u8> = buckets.iter().map(|&value| quantize(value)).collect();
    STANDARD.encode(quantized)
}

/// Recover the quantized bucket bytes from a transport string.
///
/// Together with [`encode_waveform`] this is lossless: quantization is
/// the only lossy step, the packing round-trips exactly.
pub fn decode_waveform(waveform: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(waveform)
}

/// Map one normalized amplitude to its quantized value.
///
/// `floor(value * 63)` clamped into range; the clamp guards against
/// floating-point overshoot at `value == 1.0`.
fn quantize(value: f32) -> u8 {
    let scaled = (value * WAVEFORM_MAX_VALUE as f32).floor();
    scaled.clamp(0.0, WAVEFORM_MAX_VALUE as f32) as u8
}
