//! UI callbacks the client fires from its interceptors and auth flows.

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

/// Surface the client talks back to: toasts and navigation.
pub trait ClientHooks {
    fn notify(&self, notice: Notice);
    fn redirect(&self, path: &str);
}

/// Hooks that only log. Used when no UI is attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingHooks;

impl ClientHooks for TracingHooks {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => tracing::error!("{}", notice.message),
            NoticeLevel::Warning => tracing::warn!("{}", notice.message),
            NoticeLevel::Info | NoticeLevel::Success => tracing::info!("{}", notice.message),
        }
    }

    fn redirect(&self, path: &str) {
        tracing::debug!("redirect to {} ignored (no router attached)", path);
    }
}
