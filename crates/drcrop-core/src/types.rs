//! Core domain types for Dr. Crop

use serde::{Deserialize, Serialize};

/// Lowest confidence score the diagnosis can report (inclusive)
pub const CONFIDENCE_MIN: u8 = 80;

/// Highest confidence score the diagnosis can report (inclusive)
pub const CONFIDENCE_MAX: u8 = 99;

// ─────────────────────────────────────────────────────────────────────────────
// Language
// ─────────────────────────────────────────────────────────────────────────────

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    /// All supported languages, in display order
    pub const ALL: [Language; 2] = [Language::En, Language::Hi];

    /// Two-letter code used in the persisted slots (`en`, `hi`)
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// Parse a language code. Accepts a few common spellings.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en_us" | "english" => Some(Language::En),
            "hi" | "hi-in" | "hi_in" | "hindi" => Some(Language::Hi),
            _ => None,
        }
    }

    /// Native name shown on the language picker
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी (Hindi)",
        }
    }

    /// Badge text shown in screen headers
    pub fn badge(&self) -> &'static str {
        match self {
            Language::En => "🇺🇸 English",
            Language::Hi => "🇮🇳 हिंदी",
        }
    }

    /// Pick the string for this language
    pub fn pick<'a>(&self, en: &'a str, hi: &'a str) -> &'a str {
        match self {
            Language::En => en,
            Language::Hi => hi,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Crop
// ─────────────────────────────────────────────────────────────────────────────

/// A crop the user can declare, or the auto-detect sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Auto,
    Tomato,
    Potato,
    Maize,
    Cotton,
    Apple,
    Rice,
}

impl Crop {
    /// Every selectable value as listed on the dashboard: auto-detect first
    pub const SELECTABLE: [Crop; 7] = [
        Crop::Auto,
        Crop::Tomato,
        Crop::Potato,
        Crop::Maize,
        Crop::Cotton,
        Crop::Apple,
        Crop::Rice,
    ];

    /// Identifier stored in a [`SessionRecord`]
    pub fn id(&self) -> &'static str {
        match self {
            Crop::Auto => "auto",
            Crop::Tomato => "tomato",
            Crop::Potato => "potato",
            Crop::Maize => "maize",
            Crop::Cotton => "cotton",
            Crop::Apple => "apple",
            Crop::Rice => "rice",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::SELECTABLE.into_iter().find(|c| c.id() == id)
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Crop::Auto => "🤖",
            Crop::Tomato => "🍅",
            Crop::Potato => "🥔",
            Crop::Maize => "🌽",
            Crop::Cotton => "🌿",
            Crop::Apple => "🍎",
            Crop::Rice => "🌾",
        }
    }

    /// Localized crop name
    pub fn name(&self, language: Language) -> &'static str {
        match self {
            Crop::Auto => language.pick("Auto-detected", "स्वतः पहचाना गया"),
            Crop::Tomato => language.pick("Tomato", "टमाटर"),
            Crop::Potato => language.pick("Potato", "आलू"),
            Crop::Maize => language.pick("Maize", "मक्का"),
            Crop::Cotton => language.pick("Cotton", "कपास"),
            Crop::Apple => language.pick("Apple", "सेब"),
            Crop::Rice => language.pick("Rice", "चावल"),
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Crop::Auto)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session Record
// ─────────────────────────────────────────────────────────────────────────────

/// The crop/image/language triple captured when the user submits for analysis.
///
/// Serialized as `{"crop":"tomato","image":"data:image/png;base64,…","language":"en"}`.
/// `crop` is kept as a raw identifier (empty when nothing was chosen) so that
/// records written by other versions still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(default)]
    pub crop: String,

    /// Self-contained `data:` URI of the uploaded image
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub language: Language,
}

impl SessionRecord {
    pub fn new(crop: Option<Crop>, image: Option<String>, language: Language) -> Self {
        Self {
            crop: crop.map(|c| c.id().to_string()).unwrap_or_default(),
            image,
            language,
        }
    }

    /// The crop as a catalog entry, if the identifier is known
    pub fn crop_kind(&self) -> Option<Crop> {
        Crop::from_id(&self.crop)
    }

    /// Only records carrying an image can be analyzed
    pub fn is_analyzable(&self) -> bool {
        self.image.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Localized crop name, `"Unknown"` for missing or unrecognized identifiers
    pub fn crop_display_name(&self) -> &'static str {
        self.crop_kind()
            .map(|c| c.name(self.language))
            .unwrap_or("Unknown")
    }

    /// Crop emoji, 🌱 for missing or unrecognized identifiers
    pub fn crop_emoji(&self) -> &'static str {
        self.crop_kind().map(|c| c.emoji()).unwrap_or("🌱")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Diagnosis
// ─────────────────────────────────────────────────────────────────────────────

/// Health verdict kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Healthy,
    Diseased,
}

/// Outcome of one diagnosis run. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosisResult {
    pub is_healthy: bool,
    /// Integer percentage in `CONFIDENCE_MIN..=CONFIDENCE_MAX`
    pub confidence: u8,
}

impl DiagnosisResult {
    pub fn new(is_healthy: bool, confidence: u8) -> Self {
        Self {
            is_healthy,
            confidence: confidence.clamp(CONFIDENCE_MIN, CONFIDENCE_MAX),
        }
    }

    pub fn verdict(&self) -> Verdict {
        if self.is_healthy {
            Verdict::Healthy
        } else {
            Verdict::Diseased
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Hi.code(), "hi");
        assert_eq!(Language::from_code("HI"), Some(Language::Hi));
        assert_eq!(Language::from_code("english"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_crop_ids_round_trip() {
        for crop in Crop::SELECTABLE {
            assert_eq!(Crop::from_id(crop.id()), Some(crop));
        }
        assert_eq!(Crop::from_id("banana"), None);
        assert_eq!(Crop::from_id(""), None);
    }

    #[test]
    fn test_crop_names_localized() {
        assert_eq!(Crop::Tomato.name(Language::En), "Tomato");
        assert_eq!(Crop::Tomato.name(Language::Hi), "टमाटर");
        assert_eq!(Crop::Auto.name(Language::En), "Auto-detected");
    }

    #[test]
    fn test_auto_is_listed_first_and_only_once() {
        assert!(Crop::SELECTABLE[0].is_auto());
        assert_eq!(Crop::SELECTABLE.iter().filter(|c| c.is_auto()).count(), 1);
    }

    #[test]
    fn test_session_record_wire_shape() {
        let record = SessionRecord::new(
            Some(Crop::Tomato),
            Some("data:image/png;base64,AAAA".to_string()),
            Language::Hi,
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"crop":"tomato","image":"data:image/png;base64,AAAA","language":"hi"}"#
        );
    }

    #[test]
    fn test_session_record_without_crop_serializes_empty_string() {
        let record = SessionRecord::new(None, None, Language::En);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"crop":"","image":null,"language":"en"}"#);
        assert!(!record.is_analyzable());
    }

    #[test]
    fn test_session_record_unknown_crop_falls_back() {
        let record: SessionRecord =
            serde_json::from_str(r#"{"crop":"banana","image":"data:x","language":"en"}"#).unwrap();
        assert_eq!(record.crop_kind(), None);
        assert_eq!(record.crop_display_name(), "Unknown");
        assert_eq!(record.crop_emoji(), "🌱");
        assert!(record.is_analyzable());
    }

    #[test]
    fn test_empty_image_is_not_analyzable() {
        let record = SessionRecord::new(Some(Crop::Rice), Some(String::new()), Language::En);
        assert!(!record.is_analyzable());
    }

    #[test]
    fn test_diagnosis_verdict_partition() {
        assert_eq!(DiagnosisResult::new(true, 90).verdict(), Verdict::Healthy);
        assert_eq!(DiagnosisResult::new(false, 90).verdict(), Verdict::Diseased);
    }

    #[test]
    fn test_diagnosis_confidence_clamped() {
        assert_eq!(DiagnosisResult::new(true, 12).confidence, CONFIDENCE_MIN);
        assert_eq!(DiagnosisResult::new(true, 150).confidence, CONFIDENCE_MAX);
    }
}
