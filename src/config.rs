use std::sync::atomic::{AtomicBool, Ordering};

/// Read accessor for the two user toggles.
///
/// Implementations must return the current value on every call: hooks
/// re-read the toggles per firing, and the host's settings UI may flip
/// them between any two events.
pub trait SettingsStore: Send + Sync {
    /// "Send audio files as voice messages": gates the outgoing hook.
    fn send_as_voice(&self) -> bool;
    /// "Show every audio file as a voice message": gates the inbound
    /// hooks.
    fn all_audio_as_voice(&self) -> bool;
}

/// In-memory settings backing store, written by the host's settings UI.
#[derive(Debug)]
pub struct MemorySettings {
    send_as_voice: AtomicBool,
    all_audio_as_voice: AtomicBool,
}

impl MemorySettings {
    pub fn new(send_as_voice: bool, all_audio_as_voice: bool) -> Self {
        Self {
            send_as_voice: AtomicBool::new(send_as_voice),
            all_audio_as_voice: AtomicBool::new(all_audio_as_voice),
        }
    }

    pub fn set_send_as_voice(&self, value: bool) {
        self.send_as_voice.store(value, Ordering::SeqCst);
    }

    pub fn set_all_audio_as_voice(&self, value: bool) {
        self.all_audio_as_voice.store(value, Ordering::SeqCst);
    }
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl SettingsStore for MemorySettings {
    fn send_as_voice(&self) -> bool {
        self.send_as_voice.load(Ordering::SeqCst)
    }

    fn all_audio_as_voice(&self) -> bool {
        self.all_audio_as_voice.load(Ordering::SeqCst)
    }
}
