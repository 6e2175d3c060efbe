//! Audio analysis for voice-message conversion.
//!
//! This module provides:
//! - Compressed audio → linear PCM decoding (symphonia)
//! - An async wrapper that keeps CPU-bound decoding off the event loop

mod decode;

pub use decode::{decode, decode_bytes};
