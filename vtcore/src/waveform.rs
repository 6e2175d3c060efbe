//! Amplitude envelope reduction for voice-message waveforms.

use crate::types::{PcmBuffer, WAVEFORM_BUCKETS, WaveformEnvelope};

/// Reduce a PCM buffer to [`WAVEFORM_BUCKETS`] normalized buckets.
pub fn reduce_default(pcm: &PcmBuffer) -> WaveformEnvelope {
    reduce(pcm, WAVEFORM_BUCKETS)
}

/// Reduce a PCM buffer to `bucket_count` normalized amplitude buckets.
///
/// Channel 0 only. The frame sequence is split into `bucket_count`
/// contiguous blocks of `frames / bucket_count` frames each (the
/// trailing remainder is dropped, not redistributed). Every block
/// contributes its mean absolute amplitude and the result is normalized
/// against the loudest block. Silent input yields all-zero buckets.
pub fn reduce(pcm: &PcmBuffer, bucket_count: usize) -> WaveformEnvelope {
    let duration_secs = pcm.duration();
    if bucket_count == 0 {
        return WaveformEnvelope {
            buckets: Vec::new(),
            duration_secs,
        };
    }

    let stride = pcm.channels.max(1) as usize;
    let frames = pcm.frames();
    let block_len = frames / bucket_count;

    if block_len == 0 {
        // Fewer frames than buckets: one bucket per frame, zero-padded.
        let mut buckets: Vec<f32> = pcm
            .samples
            .iter()
            .step_by(stride)
            .map(|s| s.abs().min(1.0))
            .collect();
        buckets.resize(bucket_count, 0.0);
        return WaveformEnvelope {
            buckets,
            duration_secs,
        };
    }

    let mut block_means = Vec::with_capacity(bucket_count);
    for block in 0..bucket_count {
        let start = block * block_len;
        let sum: f32 = (start..start + block_len)
            .map(|frame| pcm.samples[frame * stride].abs())
            .sum();
        block_means.push(sum / block_len as f32);
    }

    let peak = block_means.iter().copied().fold(0.0f32, f32::max);
    if peak < f32::EPSILON {
        return WaveformEnvelope {
            buckets: vec![0.0; bucket_count],
            duration_secs,
        };
    }

    let buckets = block_means
        .iter()
        .map(|mean| (mean / peak).clamp(0.0, 1.0))
        .collect();
    WaveformEnvelope {
        buckets,
        duration_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(samples: Vec<f32>, sample_rate: u32) -> PcmBuffer {
        PcmBuffer {
            samples,
            sample_rate,
            channels: 1,
            duration_secs: None,
        }
    }

    #[test]
    fn test_bucket_count() {
        let pcm = mono(vec![0.5; 6400], 16000);
        let envelope = reduce_default(&pcm);
        assert_eq!(envelope.buckets.len(), WAVEFORM_BUCKETS);
    }

    #[test]
    fn test_silence_yields_zero_buckets() {
        let pcm = mono(vec![0.0; 6400], 16000);
        let envelope = reduce_default(&pcm);
        assert!(envelope.buckets.iter().all(|&b| b == 0.0));
    }

    #[test]
    fn test_loudest_block_normalizes_to_one() {
        // 64 blocks of 10 frames; block 3 is the loudest.
        let mut samples = vec![0.1f32; 640];
        for sample in &mut samples[30..40] {
            *sample = 0.8;
        }
        let envelope = reduce(&mono(samples, 16000), 64);
        assert_eq!(envelope.buckets[3], 1.0);
        assert!(envelope.buckets[0] < 1.0);
    }

    #[test]
    fn test_trailing_remainder_is_dropped() {
        // 4 buckets over 9 frames: block length 2, frame 8 ignored.
        let samples = vec![0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 0.2, 1.0];
        let envelope = reduce(&mono(samples, 8), 4);
        assert!(envelope.buckets.iter().all(|&b| b == 1.0));
    }

    #[test]
    fn test_short_input_pads_with_zeros() {
        let envelope = reduce(&mono(vec![0.5, 0.25], 8000), 4);
        assert_eq!(envelope.buckets.len(), 4);
        assert_eq!(envelope.buckets[2], 0.0);
        assert_eq!(envelope.buckets[3], 0.0);
    }

    #[test]
    fn test_channel_zero_only() {
        // Stereo with a silent left channel: envelope must be silent.
        let mut samples = Vec::new();
        for _ in 0..640 {
            samples.push(0.0); // channel 0
            samples.push(0.9); // channel 1
        }
        let pcm = PcmBuffer {
            samples,
            sample_rate: 16000,
            channels: 2,
            duration_secs: None,
        };
        let envelope = reduce(&pcm, 64);
        assert!(envelope.buckets.iter().all(|&b| b == 0.0));
    }

    #[test]
    fn test_duration_prefers_decoder_report() {
        let mut pcm = mono(vec![0.0; 16000], 16000);
        assert_eq!(reduce_default(&pcm).duration_secs, 1.0);
        pcm.duration_secs = Some(2.5);
        assert_eq!(reduce_default(&pcm).duration_secs, 2.5);
    }
}
