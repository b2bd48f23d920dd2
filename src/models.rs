// src/models.rs
use serde::{Deserialize, Serialize};

/// Shortest password the UI offers.
pub const MIN_LENGTH: usize = 4;
/// Longest password the UI offers.
pub const MAX_LENGTH: usize = 64;

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_symbols: bool,
    /// When set, the string is used verbatim as the alphabet (duplicates and
    /// all) and `include_symbols` has no effect.
    pub custom_alphabet: Option<String>,
}

impl GenerationRequest {
    /// Builds a request the way the on-screen controls would: the length is
    /// clamped into the range the length input allows, and the symbols
    /// checkbox is ignored whenever a custom alphabet is supplied.
    pub fn new(length: usize, include_symbols: bool, custom_alphabet: Option<String>) -> Self {
        let include_symbols = custom_alphabet.is_none() && include_symbols;
        Self {
            length: length.clamp(MIN_LENGTH, MAX_LENGTH),
            include_symbols,
            custom_alphabet,
        }
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 12,
            include_symbols: true,
            custom_alphabet: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLabel {
    Unknown,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Maps an additive predicate score onto the three-tier scale.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::Unknown => write!(f, "unknown"),
            StrengthLabel::Weak => write!(f, "weak"),
            StrengthLabel::Medium => write!(f, "medium"),
            StrengthLabel::Strong => write!(f, "strong"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthAssessment {
    pub label: StrengthLabel,
    pub score: u8,
}

// Output shape for `--json` mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub password: String,
    pub strength: StrengthAssessment,
}
