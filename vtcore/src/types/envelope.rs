/// Reserved flag bit (value 8192, bit 13) the host renderer reads as
/// "display this attachment as a voice message".
///
/// The exact bit position is dictated by the host and must be preserved
/// for interoperability.
pub const VOICE_MESSAGE_FLAG: u32 = 1 << 13;

/// MIME type the host expects on a voice-message attachment.
pub const VOICE_MESSAGE_MIME: &str = "audio/ogg";

/// Number of amplitude buckets in a waveform envelope.
pub const WAVEFORM_BUCKETS: usize = 64;

/// Bit depth of a quantized bucket. Buckets are still stored one per
/// byte on the wire, so valid byte values are `0..=WAVEFORM_MAX_VALUE`.
pub const WAVEFORM_BIT_DEPTH: u32 = 6;

/// Largest representable quantized bucket value.
pub const WAVEFORM_MAX_VALUE: u8 = (1 << WAVEFORM_BIT_DEPTH) - 1;

/// Linear PCM decoded from an audio payload.
///
/// Samples are interleaved `f32` in `[-1, 1]`. This buffer only exists
/// between decode and reduction; it is never persisted.
#[derive(Debug, Clone, Default)]
pub struct PcmBuffer {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: u16,
    /// Duration reported by the decoder, when the container carries one.
    pub duration_secs: Option<f64>,
}

impl PcmBuffer {
    /// Number of frames (one sample per channel).
    pub fn frames(&self) -> usize {
        match self.channels {
            0 => 0,
            n => self.samples.len() / n as usize,
        }
    }

    /// Playback duration in seconds. The decoder-reported value wins
    /// when present since it accounts for the source channel layout;
    /// otherwise the duration is derived from the frame count.
    pub fn duration(&self) -> f64 {
        match self.duration_secs {
            Some(d) => d,
            None if self.sample_rate == 0 => 0.0,
            None => self.frames() as f64 / self.sample_rate as f64,
        }
    }
}

/// Reduced amplitude envelope, before quantization.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveformEnvelope {
    /// Normalized bucket amplitudes in `[0, 1]`.
    pub buckets: Vec<f32>,
    pub duration_secs: f64,
}

/// The transport form of an envelope: the quantized, base64-packed
/// waveform string plus the duration the host renders.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedEnvelope {
    pub waveform: String,
    pub duration_secs: f32,
}
