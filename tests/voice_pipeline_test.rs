use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bytes::Bytes;

use voicetag::client::Client;
use voicetag::config::MemorySettings;
use voicetag::hooks::HostEvent;
use voicetag::host::FullHost;
use voicetag::types::{
    PendingUpload, UploadItem, VOICE_MESSAGE_MIME, WAVEFORM_BUCKETS, WAVEFORM_MAX_VALUE,
};

// Minimal RIFF/WAVE container around 16-bit mono PCM.
fn wav_bytes(samples: &[i16], sample_rate: u32) -> Bytes {
    let data_len = (samples.len() * 2) as u32;
    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    Bytes::from(out)
}

fn audio_upload(mime: &str, data: Bytes) -> PendingUpload {
    PendingUpload {
        flags: 0,
        items: vec![UploadItem {
            mime_type: Some(mime.to_string()),
            bytes: Some(data),
            ..Default::default()
        }],
    }
}

async fn loaded_client() -> Arc<Client> {
    let _ = env_logger::builder().is_test(true).try_init();
    let client = Client::new(Arc::new(FullHost), Arc::new(MemorySettings::default()));
    client.load().await;
    client
}

#[tokio::test]
async fn test_upload_wav_end_to_end() {
    let client = loaded_client().await;

    let samples: Vec<i16> = (0..16000)
        .map(|i| ((i as f32 * 0.05).sin() * 20000.0) as i16)
        .collect();
    let mut upload = audio_upload("audio/wav", wav_bytes(&samples, 16000));
    let mut event = HostEvent::UploadSubmit(&mut upload);
    assert!(client.dispatch(&mut event).await);

    assert!(upload.is_voice_message());
    let item = &upload.items[0];
    assert_eq!(item.mime_type.as_deref(), Some(VOICE_MESSAGE_MIME));

    let decoded = STANDARD.decode(item.waveform.as_deref().unwrap()).unwrap();
    assert_eq!(decoded.len(), WAVEFORM_BUCKETS);
    assert!(decoded.iter().all(|&b| b <= WAVEFORM_MAX_VALUE));
    // The loudest bucket of a computed envelope always normalizes to
    // the maximum representable value.
    assert_eq!(decoded.iter().copied().max(), Some(WAVEFORM_MAX_VALUE));

    let duration = item.duration_secs.unwrap();
    assert!((duration - 1.0).abs() < 0.05, "duration was {duration}");
}

#[tokio::test]
async fn test_corrupt_audio_degrades_to_fallback() {
    let client = loaded_client().await;
    let mut fallback_rx = client.event_bus.fallback_used.subscribe();

    let mut upload = audio_upload("audio/mpeg", Bytes::from_static(b"\x00corrupt bytes\x00"));
    let mut event = HostEvent::UploadSubmit(&mut upload);
    assert!(client.dispatch(&mut event).await);

    // The marker invariant holds even when decoding failed.
    assert!(upload.is_voice_message());
    let item = &upload.items[0];
    assert_eq!(item.mime_type.as_deref(), Some(VOICE_MESSAGE_MIME));
    assert_eq!(item.waveform.as_deref(), Some("AEtWPyUaGA4OEAcA"));
    assert_eq!(item.duration_secs, Some(60.0));

    assert!(fallback_rx.try_recv().is_ok());
}

#[tokio::test]
async fn test_second_dispatch_is_a_noop() {
    let client = loaded_client().await;

    let mut upload = audio_upload("audio/ogg", Bytes::from_static(b"not really ogg"));
    let mut event = HostEvent::UploadSubmit(&mut upload);
    assert!(client.dispatch(&mut event).await);
    let after_first = upload.clone();

    let mut event = HostEvent::UploadSubmit(&mut upload);
    assert!(!client.dispatch(&mut event).await);
    assert_eq!(upload, after_first);
}

#[tokio::test]
async fn test_non_audio_upload_passes_through() {
    let client = loaded_client().await;

    let mut upload = audio_upload("image/png", Bytes::from_static(b"\x89PNG"));
    let snapshot = upload.clone();
    let mut event = HostEvent::UploadSubmit(&mut upload);
    assert!(!client.dispatch(&mut event).await);
    assert_eq!(upload, snapshot);
}

#[tokio::test]
async fn test_upload_without_items_passes_through() {
    let client = loaded_client().await;

    let mut upload = PendingUpload::default();
    let mut event = HostEvent::UploadSubmit(&mut upload);
    assert!(!client.dispatch(&mut event).await);
    assert_eq!(upload.flags, 0);
}
