// src/generators/strength.rs
use crate::models::{StrengthAssessment, StrengthLabel};

/// Score a password with the additive heuristic the page uses: one point per
/// satisfied predicate (length thresholds at 8 and 12, then one per character
/// class present), mapped onto weak/medium/strong.
///
/// Anything outside ASCII letters and digits counts toward the symbol
/// predicate, non-ASCII included. An empty password has no meaningful score
/// and comes back as `Unknown`.
pub fn assess_strength(password: &str) -> StrengthAssessment {
    if password.is_empty() {
        return StrengthAssessment {
            label: StrengthLabel::Unknown,
            score: 0,
        };
    }

    let length = password.chars().count();
    let mut score = 0u8;

    if length >= 8 {
        score += 1;
    }
    if length >= 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    StrengthAssessment {
        label: StrengthLabel::from_score(score),
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_is_unknown() {
        let assessment = assess_strength("");
        assert_eq!(assessment.label, StrengthLabel::Unknown);
        assert_eq!(assessment.score, 0);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        // 8 chars, lowercase plus a non-ASCII char: 8+, lower, symbol
        let assessment = assess_strength("passwörd");
        assert_eq!(assessment.score, 3);
        assert_eq!(assessment.label, StrengthLabel::Medium);
    }
}
