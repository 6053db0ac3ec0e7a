/*!
 * Tests for translation language utilities
 */

use quizparse::language_utils::{is_translation_language, TranslationLanguage};

/// Test every supported language is found by name
#[test]
fn test_fromName_withSupportedNames_shouldFindLanguage() {
    let names = ["Danish", "Dutch", "French", "German", "Norwegian", "Polish", "Romanian", "Swedish", "Mandarin"];
    for name in names {
        let language = TranslationLanguage::from_name(name).expect("language should be supported");
        assert_eq!(language.display_name(), name);
        assert_eq!(language.key(), name.to_lowercase());
    }
}

/// Test name lookup ignores case and surrounding whitespace
#[test]
fn test_fromName_withMixedCase_shouldFindLanguage() {
    assert_eq!(TranslationLanguage::from_name("fReNcH"), Some(TranslationLanguage::French));
    assert_eq!(TranslationLanguage::from_name("  swedish "), Some(TranslationLanguage::Swedish));
}

/// Test unsupported languages are rejected
#[test]
fn test_fromName_withUnsupportedName_shouldReturnNone() {
    assert_eq!(TranslationLanguage::from_name("Spanish"), None);
    assert_eq!(TranslationLanguage::from_name("Chinese"), None);
    assert!(!is_translation_language("Note"));
    assert!(is_translation_language("Polish"));
}

/// Test FromStr and Display use the lowercase key
#[test]
fn test_fromStr_withValidAndInvalidNames_shouldParseOrFail() {
    let language: TranslationLanguage = "German".parse().unwrap();
    assert_eq!(language, TranslationLanguage::German);
    assert_eq!(language.to_string(), "german");

    assert!("Klingon".parse::<TranslationLanguage>().is_err());
}

/// Test the regex alternation lists every language once
#[test]
fn test_nameAlternation_shouldListAllLanguages() {
    let alternation = TranslationLanguage::name_alternation();
    let parts: Vec<&str> = alternation.split('|').collect();

    assert_eq!(parts.len(), TranslationLanguage::ALL.len());
    assert_eq!(parts[0], "Danish");
    assert_eq!(parts[8], "Mandarin");
}
