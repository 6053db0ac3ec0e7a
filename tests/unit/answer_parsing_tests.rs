/*!
 * Tests for answer splitting and header number resolution
 */

use quizparse::quiz_parser::{parse_answer, word_to_number};

/// Test the parenthesised accept form
#[test]
fn test_parseAnswer_withAcceptParenthesis_shouldSplitAlternates() {
    let parsed = parse_answer("Paris (accept Paris, France)");

    assert_eq!(parsed.answer, "Paris");
    assert_eq!(parsed.accept, vec!["Paris", "France"]);
}

/// Test the accept keyword is matched case-insensitively
#[test]
fn test_parseAnswer_withUppercaseAccept_shouldStillMatch() {
    let parsed = parse_answer("Everest (ACCEPT Chomolungma,Sagarmatha )");

    assert_eq!(parsed.answer, "Everest");
    assert_eq!(parsed.accept, vec!["Chomolungma", "Sagarmatha"]);
}

/// Test text after the closing parenthesis is dropped
#[test]
fn test_parseAnswer_withTrailingText_shouldStopAtFirstParenthesis() {
    let parsed = parse_answer("Paris (accept Lutetia) [capital]");

    assert_eq!(parsed.answer, "Paris");
    assert_eq!(parsed.accept, vec!["Lutetia"]);
}

/// Test the single "or" form
#[test]
fn test_parseAnswer_withOrSeparator_shouldUseFirstAsAnswer() {
    let parsed = parse_answer("Tokyo or Kyoto");

    assert_eq!(parsed.answer, "Tokyo");
    assert_eq!(parsed.accept, vec!["Kyoto"]);
}

/// Test several "or" alternates are all kept
#[test]
fn test_parseAnswer_withSeveralOrSeparators_shouldKeepAllAlternates() {
    let parsed = parse_answer("Tokyo or Kyoto  or   Osaka");

    assert_eq!(parsed.answer, "Tokyo");
    assert_eq!(parsed.accept, vec!["Kyoto", "Osaka"]);
}

/// Test "or" splitting is case-sensitive and needs surrounding whitespace
#[test]
fn test_parseAnswer_withOrInsideWords_shouldNotSplit() {
    let parsed = parse_answer("Oregon Trail");
    assert_eq!(parsed.answer, "Oregon Trail");
    assert!(parsed.accept.is_empty());

    let parsed = parse_answer("Black OR White");
    assert_eq!(parsed.answer, "Black OR White");
    assert!(parsed.accept.is_empty());
}

/// Test the accept form takes precedence over "or"
#[test]
fn test_parseAnswer_withAcceptAndOr_shouldPreferAccept() {
    let parsed = parse_answer("Gold or Au (accept aurum)");

    assert_eq!(parsed.answer, "Gold or Au");
    assert_eq!(parsed.accept, vec!["aurum"]);
}

/// Test a plain answer is trimmed and has no alternates
#[test]
fn test_parseAnswer_withPlainAnswer_shouldReturnTrimmedText() {
    let parsed = parse_answer("  Leonardo da Vinci  ");

    assert_eq!(parsed.answer, "Leonardo da Vinci");
    assert!(parsed.accept.is_empty());
}

/// Test digits parse directly
#[test]
fn test_wordToNumber_withDigits_shouldParse() {
    assert_eq!(word_to_number("7"), 7);
    assert_eq!(word_to_number("12"), 12);
    assert_eq!(word_to_number("007"), 7);
}

/// Test number words ONE..TEN in any case
#[test]
fn test_wordToNumber_withWords_shouldLookUp() {
    let words = ["one", "TWO", "Three", "four", "FIVE", "six", "Seven", "eight", "NINE", "ten"];
    for (index, word) in words.iter().enumerate() {
        assert_eq!(word_to_number(word), index as u64 + 1, "word: {}", word);
    }
}

/// Test anything unrecognised falls back to 1
#[test]
fn test_wordToNumber_withUnknownToken_shouldDefaultToOne() {
    assert_eq!(word_to_number("ELEVEN"), 1);
    assert_eq!(word_to_number("A"), 1);
    assert_eq!(word_to_number(""), 1);
    assert_eq!(word_to_number("18446744073709551616"), 1);
}

/// Test large integers and underscore-grouped digits keep their value
#[test]
fn test_wordToNumber_withLargeAndGroupedDigits_shouldParse() {
    assert_eq!(word_to_number("5000000000"), 5_000_000_000);
    assert_eq!(word_to_number("1_0"), 10);
    assert_eq!(word_to_number("18446744073709551615"), u64::MAX);
}
