use std::io::Read;

use bytes::Bytes;
use log::debug;

use crate::error::DecodeError;

/// Where an audio asset's bytes live: already in memory (a pending
/// upload), behind a URL (a received attachment), or nowhere at all.
#[derive(Debug, Clone)]
pub enum ByteSource {
    Bytes(Bytes),
    Url(String),
    Missing,
}

/// Resolve a byte source to its raw payload.
///
/// URL fetches run on the blocking pool so the event loop only
/// suspends while waiting.
pub async fn fetch(source: &ByteSource) -> Result<Bytes, DecodeError> {
    match source {
        ByteSource::Bytes(data) => Ok(data.clone()),
        ByteSource::Url(url) => {
            let url = url.clone();
            tokio::task::spawn_blocking(move || -> Result<Bytes, DecodeError> {
                debug!("fetching audio payload from {url}");
                let resp = ureq::get(&url)
                    .call()
                    .map_err(|e| DecodeError::Source(e.to_string()))?;
                let mut body = resp.into_body();
                let mut data = Vec::new();
                body.as_reader()
                    .read_to_end(&mut data)
                    .map_err(|e| DecodeError::Source(e.to_string()))?;
                Ok(Bytes::from(data))
            })
            .await
            .map_err(|_| DecodeError::Cancelled)?
        }
        ByteSource::Missing => Err(DecodeError::Source("no byte source".to_string())),
    }
}
