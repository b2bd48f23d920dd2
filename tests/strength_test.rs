use passgen::generators::strength::assess_strength;
use passgen::models::StrengthLabel;

#[test]
fn empty_password_scores_unknown() {
    let assessment = assess_strength("");
    assert_eq!(assessment.label, StrengthLabel::Unknown);
    assert_eq!(assessment.score, 0);
}

#[test]
fn twelve_lowercase_characters_score_medium() {
    // length >= 8, length >= 12, lowercase
    let assessment = assess_strength("abcdefghijkl");
    assert_eq!(assessment.score, 3);
    assert_eq!(assessment.label, StrengthLabel::Medium);
}

#[test]
fn eight_characters_with_all_classes_score_strong() {
    // length >= 8, lowercase, uppercase, digit, symbol
    let assessment = assess_strength("aB3$efgh");
    assert_eq!(assessment.score, 5);
    assert_eq!(assessment.label, StrengthLabel::Strong);
}

#[test]
fn four_lowercase_characters_score_weak() {
    let assessment = assess_strength("abcd");
    assert_eq!(assessment.score, 1);
    assert_eq!(assessment.label, StrengthLabel::Weak);
}

#[test]
fn predicates_add_independently() {
    // digits only, short
    let assessment = assess_strength("1234");
    assert_eq!(assessment.score, 1);
    assert_eq!(assessment.label, StrengthLabel::Weak);

    // mixed case, short
    let assessment = assess_strength("aBcD");
    assert_eq!(assessment.score, 2);
    assert_eq!(assessment.label, StrengthLabel::Weak);

    // 12+ chars with every class
    let assessment = assess_strength("aB3$efghijkl");
    assert_eq!(assessment.score, 6);
    assert_eq!(assessment.label, StrengthLabel::Strong);
}

#[test]
fn symbols_alone_still_count() {
    let assessment = assess_strength("!!!!!!!!");
    // length >= 8 plus the symbol class
    assert_eq!(assessment.score, 2);
    assert_eq!(assessment.label, StrengthLabel::Weak);
}

#[test]
fn assessment_is_deterministic() {
    for password in ["", "abcd", "aB3$efgh", "correct horse battery staple"] {
        assert_eq!(assess_strength(password), assess_strength(password));
    }
}
