//! Transient notifications
//!
//! Toasts are plain DOM nodes styled inline; the keyframes they animate with
//! and the screen-reader-only class are injected once at start-up.

/// Shown by the page-level error handler
pub const RELOAD_MESSAGE: &str = "Ha ocurrido un error. Por favor recarga la página.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#28a745",
            NotificationKind::Error => "#dc3545",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }

    pub fn class_name(&self) -> String {
        format!("notification {}", self.kind.as_str())
    }

    /// Inline style for the toast as it slides in
    pub fn css_text(&self) -> String {
        format!(
            "position: fixed; top: 20px; left: 50%; transform: translateX(-50%); \
             background: {}; color: white; padding: 15px 25px; border-radius: 8px; \
             z-index: 10000; font-weight: 600; box-shadow: 0 4px 20px rgba(0,0,0,0.3); \
             animation: slideDown 0.3s ease-out;",
            self.kind.background()
        )
    }
}

/// Animation applied when the toast leaves
pub const SLIDE_OUT_ANIMATION: &str = "slideUp 0.3s ease-out forwards";

/// Stylesheet injected into `<head>`
pub const INJECTED_STYLES: &str = r#"
@keyframes slideDown {
    from { opacity: 0; transform: translateX(-50%) translateY(-20px); }
    to { opacity: 1; transform: translateX(-50%) translateY(0); }
}

@keyframes slideUp {
    from { opacity: 1; transform: translateX(-50%) translateY(0); }
    to { opacity: 0; transform: translateX(-50%) translateY(-20px); }
}

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}
"#;
