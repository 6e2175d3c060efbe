//! Capability discovery over the running host's module surface.

use crate::hooks::HookKind;

/// Named points of the host dispatch surface this engine can intercept.
///
/// Two distinct upload points exist because hosts route local and cloud
/// uploads through separate submission paths; both feed the same hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterceptionPoint {
    UploadLocal,
    UploadCloud,
    MessagesLoaded,
    MessageCreate,
    MessageUpdate,
}

impl InterceptionPoint {
    pub const ALL: [InterceptionPoint; 5] = [
        InterceptionPoint::UploadLocal,
        InterceptionPoint::UploadCloud,
        InterceptionPoint::MessagesLoaded,
        InterceptionPoint::MessageCreate,
        InterceptionPoint::MessageUpdate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            InterceptionPoint::UploadLocal => "upload:local",
            InterceptionPoint::UploadCloud => "upload:cloud",
            InterceptionPoint::MessagesLoaded => "store:messages-loaded",
            InterceptionPoint::MessageCreate => "store:message-create",
            InterceptionPoint::MessageUpdate => "store:message-update",
        }
    }

    /// The hook kind served by this point.
    pub fn hook_kind(&self) -> HookKind {
        match self {
            InterceptionPoint::UploadLocal | InterceptionPoint::UploadCloud => {
                HookKind::UploadSubmit
            }
            InterceptionPoint::MessagesLoaded => HookKind::MessagesLoaded,
            InterceptionPoint::MessageCreate => HookKind::MessageCreate,
            InterceptionPoint::MessageUpdate => HookKind::MessageUpdate,
        }
    }
}

/// An interception point the host actually exposes in this build.
#[derive(Debug, Clone)]
pub struct Capability {
    pub point: InterceptionPoint,
}

/// Discovery interface over the host's module surface.
///
/// `None` means the point does not exist in the running host version:
/// the affected hook is simply not registered and the rest of the
/// engine keeps working. Never dereferenced unchecked.
pub trait HostModules: Send + Sync {
    fn resolve(&self, point: InterceptionPoint) -> Option<Capability>;
}

/// A host boundary that exposes every interception point.
#[derive(Debug, Default)]
pub struct FullHost;

impl HostModules for FullHost {
    fn resolve(&self, point: InterceptionPoint) -> Option<Capability> {
        Some(Capability { point })
    }
}
