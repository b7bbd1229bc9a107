use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(4);

/// Toast notification level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Success,
    Error,
}

impl ToastLevel {
    /// Icon shown next to the message.
    pub fn icon(self) -> &'static str {
        match self {
            ToastLevel::Success => "check-circle",
            ToastLevel::Error => "exclamation-circle",
        }
    }
}

/// A transient notice shown to the user.
///
/// # Example
///
/// ```ignore
/// notifier.notify(Toast::success("Saved"));
/// notifier.notify(Toast::error("Please try again").with_duration(Duration::from_secs(8)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    /// How long to show the toast
    pub duration: Duration,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Success,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: ToastLevel::Error,
            duration: DEFAULT_TOAST_DURATION,
        }
    }

    /// Set custom duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

impl From<String> for Toast {
    fn from(message: String) -> Self {
        Toast::success(message)
    }
}

impl From<&str> for Toast {
    fn from(message: &str) -> Self {
        Toast::success(message)
    }
}

/// The single toast slot of a page.
///
/// Showing a toast replaces whatever is visible. Expiry only affects what
/// [`ToastState::visible`] reports; nothing else depends on it.
#[derive(Debug, Clone, Default)]
pub struct ToastState {
    current: Option<(Toast, Instant)>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, toast: Toast, now: Instant) {
        self.current = Some((toast, now));
    }

    /// The toast on screen at `now`, if it has not yet expired.
    pub fn visible(&self, now: Instant) -> Option<&Toast> {
        self.current
            .as_ref()
            .filter(|(toast, shown_at)| now.saturating_duration_since(*shown_at) < toast.duration)
            .map(|(toast, _)| toast)
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.visible(now).is_some()
    }

    /// Forget an expired toast. Returns true if one was removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        if self.current.is_some() && !self.is_visible(now) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
