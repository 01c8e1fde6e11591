//! Status banners.

/// How long success and error banners stay up.
pub const NOTICE_DISMISS_MS: u32 = 3000;

/// Message used when a loading banner is shown without one.
pub const DEFAULT_LOADING_MESSAGE: &str = "Loading...";

/// Element id of the single loading banner.
pub const LOADING_BANNER_ID: &str = "loadingMessage";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    /// CSS class list for the banner element.
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Info => "alert alert-info",
            NoticeKind::Success => "alert alert-success",
            NoticeKind::Error => "alert alert-error",
        }
    }

    /// Background color of a floating banner. Info banners are never
    /// floated; the stylesheet's `alert-info` class colors them.
    pub fn background(self) -> Option<&'static str> {
        match self {
            NoticeKind::Success => Some("#28a745"),
            NoticeKind::Error => Some("#dc3545"),
            NoticeKind::Info => None,
        }
    }

    /// Inline style for a floating banner of this kind.
    pub fn floating_style(self) -> String {
        let mut style = String::from(
            "position: fixed; top: 20px; right: 20px; padding: 1rem 1.5rem; \
             border-radius: 5px; color: white; font-weight: 500; z-index: 1000; \
             animation: slideIn 0.3s ease;",
        );
        if let Some(color) = self.background() {
            style.push_str(&format!(" background: {color};"));
        }
        style
    }
}

/// A floating banner waiting to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Floating banners always dismiss on the same timer.
    pub fn dismiss_after_ms(&self) -> u32 {
        NOTICE_DISMISS_MS
    }
}
