//! Copy-to-clipboard buttons
//!
//! Each target names the field holding the text, the button that gets the
//! "copied" feedback, and how the copy is attempted.

use crate::error::{DeckError, Result};

pub const COPIED_LABEL: &str = "✅ Copiado";
pub const COPIED_BACKGROUND: &str = "#28a745";
pub const RESTORED_BACKGROUND: &str = "var(--primary)";
pub const COPY_FAILED_MESSAGE: &str = "Error al copiar. Selecciona y copia manualmente.";
pub const EMPTY_URL_MESSAGE: &str = "Por favor ingresa una URL válida";

/// How a target writes to the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStrategy {
    /// Async Clipboard API, falling back to select + `execCommand("copy")`
    ClipboardApi,
    /// Select + `execCommand("copy")` only
    Legacy,
}

/// Which copy path succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    ClipboardApi,
    Legacy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    /// Prompt text on the prompt slide
    Prompt,
    /// Project URL typed in by the audience
    ProjectUrl,
    /// Mascot image URL on the title slide
    MascotUrl,
}

impl CopyTarget {
    pub const ALL: [CopyTarget; 3] = [
        CopyTarget::Prompt,
        CopyTarget::ProjectUrl,
        CopyTarget::MascotUrl,
    ];

    /// Id of the input/textarea holding the text
    pub fn field_id(&self) -> &'static str {
        match self {
            CopyTarget::Prompt => "promptText",
            CopyTarget::ProjectUrl => "projectUrl",
            CopyTarget::MascotUrl => "mascotaUrl",
        }
    }

    /// Selector of the button that shows copy feedback
    pub fn button_selector(&self) -> &'static str {
        match self {
            CopyTarget::Prompt => ".copy-btn",
            CopyTarget::ProjectUrl => ".copy-url-btn",
            CopyTarget::MascotUrl => ".copy-mascot-btn",
        }
    }

    /// Name of the global function the markup calls
    pub fn entry_point(&self) -> &'static str {
        match self {
            CopyTarget::Prompt => "copyPrompt",
            CopyTarget::ProjectUrl => "copyUrl",
            CopyTarget::MascotUrl => "copyMascotUrl",
        }
    }

    pub fn strategy(&self) -> CopyStrategy {
        match self {
            CopyTarget::Prompt | CopyTarget::MascotUrl => CopyStrategy::ClipboardApi,
            CopyTarget::ProjectUrl => CopyStrategy::Legacy,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            CopyTarget::Prompt => "Prompt copiado al portapapeles 📋",
            CopyTarget::ProjectUrl => "URL copiada al portapapeles 🔗",
            CopyTarget::MascotUrl => "URL de la mascota copiada 🎭",
        }
    }

    /// Whether a copy made with `method` swaps the button label. A Clipboard
    /// API target that had to fall back only shows the notification.
    pub fn flashes_on(&self, method: CopyMethod) -> bool {
        match self.strategy() {
            CopyStrategy::ClipboardApi => method == CopyMethod::ClipboardApi,
            CopyStrategy::Legacy => true,
        }
    }

    /// Check the field value before copying. The project URL must not be
    /// blank; the other targets copy whatever is there.
    pub fn validate(&self, value: &str) -> Result<()> {
        match self {
            CopyTarget::ProjectUrl if value.trim().is_empty() => Err(DeckError::EmptyUrl),
            _ => Ok(()),
        }
    }
}

/// Settle a copy attempt. `legacy` only runs when the primary write failed.
pub fn resolve_copy<F>(primary: Result<()>, legacy: F) -> Result<CopyMethod>
where
    F: FnOnce() -> Result<()>,
{
    match primary {
        Ok(()) => Ok(CopyMethod::ClipboardApi),
        Err(e) => {
            log::error!("Error al copiar: {}", e);
            legacy().map(|()| CopyMethod::Legacy)
        }
    }
}

/// User-facing text for a failed copy action
pub fn failure_message(err: &DeckError) -> &'static str {
    match err {
        DeckError::EmptyUrl => EMPTY_URL_MESSAGE,
        _ => COPY_FAILED_MESSAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_primary_success_skips_fallback() {
        let called = Cell::new(false);
        let result = resolve_copy(Ok(()), || {
            called.set(true);
            Ok(())
        });
        assert_eq!(result, Ok(CopyMethod::ClipboardApi));
        assert!(!called.get());
    }

    #[test]
    fn test_fallback_after_clipboard_failure() {
        let result = resolve_copy(Err(DeckError::Clipboard("denied".into())), || Ok(()));
        assert_eq!(result, Ok(CopyMethod::Legacy));
    }

    #[test]
    fn test_both_paths_fail() {
        let result = resolve_copy(Err(DeckError::Clipboard("denied".into())), || {
            Err(DeckError::LegacyCopy)
        });
        let err = result.unwrap_err();
        assert_eq!(err, DeckError::LegacyCopy);
        assert_eq!(failure_message(&err), COPY_FAILED_MESSAGE);
    }

    #[test]
    fn test_project_url_must_not_be_blank() {
        assert_eq!(CopyTarget::ProjectUrl.validate("   "), Err(DeckError::EmptyUrl));
        assert!(CopyTarget::ProjectUrl.validate("https://example.dev").is_ok());
        assert_eq!(failure_message(&DeckError::EmptyUrl), EMPTY_URL_MESSAGE);
    }

    #[test]
    fn test_other_targets_accept_any_value() {
        assert!(CopyTarget::Prompt.validate("").is_ok());
        assert!(CopyTarget::MascotUrl.validate("").is_ok());
    }

    #[test]
    fn test_strategies() {
        assert_eq!(CopyTarget::Prompt.strategy(), CopyStrategy::ClipboardApi);
        assert_eq!(CopyTarget::MascotUrl.strategy(), CopyStrategy::ClipboardApi);
        assert_eq!(CopyTarget::ProjectUrl.strategy(), CopyStrategy::Legacy);
    }

    #[test]
    fn test_button_flash_rules() {
        assert!(CopyTarget::Prompt.flashes_on(CopyMethod::ClipboardApi));
        assert!(!CopyTarget::Prompt.flashes_on(CopyMethod::Legacy));
        assert!(CopyTarget::MascotUrl.flashes_on(CopyMethod::ClipboardApi));
        assert!(!CopyTarget::MascotUrl.flashes_on(CopyMethod::Legacy));
        assert!(CopyTarget::ProjectUrl.flashes_on(CopyMethod::Legacy));
    }

    #[test]
    fn test_entry_points_unique() {
        let names: std::collections::HashSet<_> =
            CopyTarget::ALL.iter().map(|t| t.entry_point()).collect();
        assert_eq!(names.len(), CopyTarget::ALL.len());
    }
}
