//! Compressed audio → linear PCM decoding (symphonia).

use std::io::Cursor;

use bytes::Bytes;
use log::trace;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::DecodeError;
use vtcore::types::PcmBuffer;

/// Decode an audio payload on the blocking pool.
///
/// Decoding is CPU-bound; the event loop only suspends here, it never
/// stalls on the work itself.
pub async fn decode(data: Bytes) -> Result<PcmBuffer, DecodeError> {
    tokio::task::spawn_blocking(move || decode_bytes(data))
        .await
        .map_err(|_| DecodeError::Cancelled)?
}

/// Decode an audio payload to interleaved f32 PCM.
///
/// The container is probed without a filename hint, the first real
/// track is decoded in full, and packets that fail mid-stream are
/// skipped rather than aborting the run.
pub fn decode_bytes(data: Bytes) -> Result<PcmBuffer, DecodeError> {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(data)), Default::default());
    let probed = symphonia::default::get_probe().format(
        &Hint::new(),
        mss,
        &FormatOptions::default(),
        &MetadataOptions::default(),
    )?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(DecodeError::NoAudioTrack)?;
    let track_id = track.id;
    let params = track.codec_params.clone();

    let sample_rate = params.sample_rate.ok_or(DecodeError::NoAudioTrack)?;
    let channels = params.channels.map(|c| c.count()).unwrap_or(1) as u16;
    // Container-reported duration, when the track carries one.
    let duration_secs = params.n_frames.map(|frames| match params.time_base {
        Some(tb) => {
            let time = tb.calc_time(frames);
            time.seconds as f64 + time.frac
        }
        None => frames as f64 / sample_rate as f64,
    });

    let mut decoder =
        symphonia::default::get_codecs().make(&params, &DecoderOptions::default())?;

    let mut samples: Vec<f32> = Vec::new();
    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(SymphoniaError::ResetRequired) => break,
            Err(e) => return Err(e.into()),
        };
        if packet.track_id() != track_id {
            continue;
        }
        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            Err(e) => {
                trace!("skipping undecodable packet: {e}");
                continue;
            }
        };
        let spec = *decoded.spec();
        let mut buffer = SampleBuffer::<f32>::new(decoded.frames() as u64, spec);
        buffer.copy_interleaved_ref(decoded);
        samples.extend_from_slice(buffer.samples());
    }

    if samples.is_empty() {
        return Err(DecodeError::NoAudioTrack);
    }

    Ok(PcmBuffer {
        samples,
        sample_rate,
        channels,
        duration_secs,
    })
}
