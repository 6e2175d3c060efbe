// Re-export the pure core modules at the crate root
pub use vtcore::{classify, fallback, tag, waveform, wire};

// Core types are re-exported; events (with EventBus) remain here since
// they carry runtime-specific channels
pub mod types {
    pub use vtcore::types::*;
    pub mod events;
}

pub mod audio;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod hooks;
pub mod host;
pub mod pipeline;
