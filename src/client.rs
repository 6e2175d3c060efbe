use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Result, anyhow};
use bytes::Bytes;
use log::{debug, info, warn};
use tokio::sync::RwLock;

use vtcore::types::Message;

use crate::config::SettingsStore;
use crate::fetch::{self, ByteSource};
use crate::hooks::router::HookRouter;
use crate::hooks::store::{MessageCreateHook, MessageUpdateHook, MessagesLoadedHook};
use crate::hooks::traits::Hook;
use crate::hooks::upload::UploadSubmitHook;
use crate::hooks::{HookKind, HostEvent};
use crate::host::{HostModules, InterceptionPoint};
use crate::types::events::{Converted, EventBus, FallbackUsed, ModuleMissing};

/// Central engine object.
///
/// Owns the hook registry, the host capability boundary, the settings
/// accessor and the notification bus. The host drives it through
/// [`Client::dispatch`] at each interception point; hooks borrow it
/// back for settings, shutdown checks and notifications.
pub struct Client {
    host: Arc<dyn HostModules>,
    settings: Arc<dyn SettingsStore>,
    router: RwLock<HookRouter>,
    /// Set by [`Client::unload`]; in-flight chains re-check it after
    /// every suspension point before mutating a carrier.
    shutdown: AtomicBool,
    pub event_bus: EventBus,
}

impl Client {
    pub fn new(host: Arc<dyn HostModules>, settings: Arc<dyn SettingsStore>) -> Arc<Self> {
        Arc::new(Self {
            host,
            settings,
            router: RwLock::new(HookRouter::new()),
            shutdown: AtomicBool::new(false),
            event_bus: EventBus::new(),
        })
    }

    pub fn settings(&self) -> &dyn SettingsStore {
        self.settings.as_ref()
    }

    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Resolve every interception point and register the hooks the
    /// host supports.
    ///
    /// A missing point disables its surface only: one `module_missing`
    /// notification is emitted for it and the rest of the engine keeps
    /// working. Returns the number of hooks registered.
    pub async fn load(&self) -> usize {
        let mut router = self.router.write().await;
        router.clear();
        self.shutdown.store(false, Ordering::SeqCst);

        let mut available: HashSet<HookKind> = HashSet::new();
        for point in InterceptionPoint::ALL {
            match self.host.resolve(point) {
                Some(capability) => {
                    debug!("resolved interception point '{}'", capability.point.name());
                    available.insert(point.hook_kind());
                }
                None => self.report_missing(point),
            }
        }

        if available.contains(&HookKind::UploadSubmit) {
            router.register(Arc::new(UploadSubmitHook) as Arc<dyn Hook>);
        }
        if available.contains(&HookKind::MessagesLoaded) {
            router.register(Arc::new(MessagesLoadedHook) as Arc<dyn Hook>);
        }
        if available.contains(&HookKind::MessageCreate) {
            router.register(Arc::new(MessageCreateHook) as Arc<dyn Hook>);
        }
        if available.contains(&HookKind::MessageUpdate) {
            router.register(Arc::new(MessageUpdateHook) as Arc<dyn Hook>);
        }

        let registered = router.handler_count();
        info!("voicetag loaded, {registered} hook(s) registered");
        registered
    }

    /// Tear down every hook.
    ///
    /// Idempotent. The shutdown flag is raised before the registry
    /// lock is taken, so a chain that is already in flight observes it
    /// and completes without mutating its carrier; once this returns,
    /// no dispatch can reach a hook.
    pub async fn unload(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        let mut router = self.router.write().await;
        router.clear();
        info!("voicetag unloaded");
    }

    /// Entry point the host calls at each interception point.
    ///
    /// Awaits the full pipeline before returning, so the host's
    /// continuation (submission, render) never observes a half-tagged
    /// carrier. Returns whether a hook consumed the event.
    pub async fn dispatch(&self, event: &mut HostEvent<'_>) -> bool {
        if self.is_shutdown() {
            return false;
        }
        let router = self.router.read().await;
        router.dispatch(self, event).await
    }

    fn report_missing(&self, point: InterceptionPoint) {
        warn!(
            "host interception point '{}' is missing, surface disabled",
            point.name()
        );
        let _ = self
            .event_bus
            .module_missing
            .send(Arc::new(ModuleMissing { point }));
    }

    pub(crate) fn emit_converted(&self, kind: HookKind, fallback: bool) {
        if fallback {
            let _ = self
                .event_bus
                .fallback_used
                .send(Arc::new(FallbackUsed { kind }));
        }
        let _ = self
            .event_bus
            .converted
            .send(Arc::new(Converted { kind, fallback }));
    }

    /// Fetch the raw bytes of a tagged voice message's attachment.
    pub async fn download_voice_message(&self, message: &Message) -> Result<Bytes> {
        if !message.is_voice_message() {
            return Err(anyhow!("message is not a voice message"));
        }
        let url = self
            .voice_message_url(message)
            .ok_or_else(|| anyhow!("voice message has no attachment URL"))?;
        let data = fetch::fetch(&ByteSource::Url(url.to_string())).await?;
        Ok(data)
    }

    /// URL of the voice-message attachment, for host-side copy/share
    /// actions.
    pub fn voice_message_url<'a>(&self, message: &'a Message) -> Option<&'a str> {
        message.attachments.first().and_then(|a| a.url.as_deref())
    }
}
