//! Deck configuration
//!
//! Embedded in the page as a JSON script element; every field has a default
//! so the element can be omitted or partial.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{DeckError, Result};

/// Build variants of the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeckVariant {
    /// Ten slides with the checklist slide
    #[default]
    Standard,
    /// Nine slides with checklist and logo/mascot upload slots
    Branding,
}

impl DeckVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeckVariant::Standard => "Standard",
            DeckVariant::Branding => "Branding",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "10" => Some(DeckVariant::Standard),
            "branding" | "9" => Some(DeckVariant::Branding),
            _ => None,
        }
    }

    /// Number of slides in this build
    pub fn total_slides(&self) -> usize {
        match self {
            DeckVariant::Standard => STANDARD_TOTAL_SLIDES,
            DeckVariant::Branding => BRANDING_TOTAL_SLIDES,
        }
    }

    /// Whether the logo/mascot upload slots are wired
    pub fn uploads_enabled(&self) -> bool {
        match self {
            DeckVariant::Standard => false,
            DeckVariant::Branding => true,
        }
    }
}

/// Selectors for the checklist slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    pub checkbox_selector: String,
    pub fill_id: String,
    pub text_id: String,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            checkbox_selector: "#slide-6 input[type=\"checkbox\"]".to_string(),
            fill_id: "progressFill".to_string(),
            text_id: "progressText".to_string(),
        }
    }
}

/// Deck configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub variant: DeckVariant,
    /// Fixed slide count
    pub total_slides: usize,

    // === Gestures ===
    /// Horizontal swipe distance (px) that triggers navigation
    pub swipe_threshold_px: f64,
    /// Double tap window (ms) suppressed to block zoom
    pub double_tap_ms: f64,

    // === Timing ===
    pub resize_debounce_ms: u32,
    pub focus_delay_ms: u32,
    pub announce_cleanup_ms: u32,
    pub button_reset_ms: u32,
    pub notification_ms: u32,
    pub notification_fade_ms: u32,

    // === Features ===
    /// Checklist progress bar (None disables it)
    pub checklist: Option<ChecklistConfig>,
    pub uploads: bool,
    /// Image URLs fetched at start-up so later slides render without delay
    pub preload_images: Vec<String>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::from_variant(DeckVariant::default())
    }
}

impl DeckConfig {
    /// Element holding the embedded JSON config
    pub const ELEMENT_ID: &'static str = "deck-config";

    /// Create config from a variant (applies variant defaults)
    pub fn from_variant(variant: DeckVariant) -> Self {
        Self {
            variant,
            total_slides: variant.total_slides(),

            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            double_tap_ms: DOUBLE_TAP_MS,

            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            focus_delay_ms: FOCUS_DELAY_MS,
            announce_cleanup_ms: ANNOUNCE_CLEANUP_MS,
            button_reset_ms: BUTTON_RESET_MS,
            notification_ms: NOTIFICATION_MS,
            notification_fade_ms: NOTIFICATION_FADE_MS,

            checklist: Some(ChecklistConfig::default()),
            uploads: variant.uploads_enabled(),
            preload_images: Vec::new(),
        }
    }

    /// Parse and validate a JSON config.
    ///
    /// When `variant` is given but `total_slides`/`uploads` are not, the
    /// variant's values are used rather than the standard defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(json)?;
        let Some(overrides) = raw.as_object() else {
            return Err(DeckError::Config(format!(
                "expected a JSON object, got {}",
                raw
            )));
        };
        let variant = match overrides.get("variant") {
            Some(v) => serde_json::from_value(v.clone())?,
            None => DeckVariant::default(),
        };

        let mut base = serde_json::to_value(Self::from_variant(variant))?;
        if let Some(base_map) = base.as_object_mut() {
            for (key, value) in overrides {
                base_map.insert(key.clone(), value.clone());
            }
        }

        let config: Self = serde_json::from_value(base)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.total_slides == 0 {
            return Err(DeckError::Config("total_slides must be at least 1".into()));
        }
        if !(self.swipe_threshold_px > 0.0) {
            return Err(DeckError::Config(format!(
                "swipe_threshold_px must be positive, got {}",
                self.swipe_threshold_px
            )));
        }
        Ok(())
    }

    /// Load config from the page's JSON script element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!(
                        "Loaded deck config ({}, {} slides)",
                        config.variant.as_str(),
                        config.total_slides
                    );
                    return config;
                }
                Err(e) => log::warn!("Ignoring deck config: {}", e),
            }
        }

        log::info!("Using default deck config");
        Self::default()
    }

    /// Load config from a JSON file, falling back to defaults (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("Loaded deck config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring deck config: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_defaults() {
        let standard = DeckConfig::from_variant(DeckVariant::Standard);
        assert_eq!(standard.total_slides, 10);
        assert!(!standard.uploads);
        assert!(standard.checklist.is_some());

        let branding = DeckConfig::from_variant(DeckVariant::Branding);
        assert_eq!(branding.total_slides, 9);
        assert!(branding.uploads);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(DeckVariant::from_str("Branding"), Some(DeckVariant::Branding));
        assert_eq!(DeckVariant::from_str("10"), Some(DeckVariant::Standard));
        assert_eq!(DeckVariant::from_str("wide"), None);
    }

    #[test]
    fn test_partial_json_uses_variant_defaults() {
        let config = DeckConfig::from_json(r#"{"variant":"Branding","swipe_threshold_px":80}"#)
            .unwrap();
        assert_eq!(config.total_slides, 9);
        assert!(config.uploads);
        assert_eq!(config.swipe_threshold_px, 80.0);
        assert_eq!(config.resize_debounce_ms, RESIZE_DEBOUNCE_MS);
    }

    #[test]
    fn test_empty_json_is_standard() {
        let config = DeckConfig::from_json("{}").unwrap();
        assert_eq!(config, DeckConfig::default());
    }

    #[test]
    fn test_checklist_can_be_disabled() {
        let config = DeckConfig::from_json(r#"{"checklist":null}"#).unwrap();
        assert!(config.checklist.is_none());
    }

    #[test]
    fn test_rejects_zero_slides() {
        let err = DeckConfig::from_json(r#"{"total_slides":0}"#).unwrap_err();
        assert!(matches!(err, DeckError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(DeckConfig::from_json("{not json").is_err());
        assert!(DeckConfig::from_json(r#"{"variant":"Huge"}"#).is_err());
    }

    #[test]
    fn test_rejects_non_object_json() {
        for json in ["[]", "null", "42", r#""Branding""#] {
            let err = DeckConfig::from_json(json).unwrap_err();
            assert!(matches!(err, DeckError::Config(_)), "{json}");
        }
    }
}
