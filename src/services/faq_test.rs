use super::*;
use crate::dataset::FaqRecord;
use crate::state::test_helpers;

#[test]
fn straw_example_matches() {
    let table = test_helpers::faq_table();
    let result = ask(&table, "What about my drinking straw?");
    assert_eq!(result, AnswerResult::Matched { answer: "Use bamboo straws.".into() });
}

#[test]
fn windows_example_is_unmatched() {
    let table = test_helpers::faq_table();
    let result = ask(&table, "tell me about windows");
    assert_eq!(result, AnswerResult::Unmatched { answer: FALLBACK_ANSWER.into() });
    assert_eq!(result.answer(), Some(FALLBACK_ANSWER));
}

#[test]
fn empty_question_is_rejected() {
    let table = test_helpers::faq_table();
    assert_eq!(ask(&table, ""), AnswerResult::EmptyQuestion);
    assert_eq!(ask(&table, "   \t\n"), AnswerResult::EmptyQuestion);
    assert_eq!(ask(&table, "").answer(), None);
}

#[test]
fn empty_question_never_scans_rows() {
    let table = FaqTable::new(vec![FaqRecord { keywords: vec![String::new()], answer: "catch-all".into() }]);
    assert_eq!(ask(&table, "  "), AnswerResult::EmptyQuestion);
}

#[test]
fn keyword_match_is_case_insensitive() {
    let table = test_helpers::faq_table();
    let result = ask(&table, "WATER BOTTLE options?");
    assert_eq!(result.answer(), Some("Switch to glass or steel bottles."));
}

#[test]
fn keywords_match_as_substrings() {
    let table = test_helpers::faq_table();
    let result = ask(&table, "any alternatives to bottles");
    assert!(matches!(result, AnswerResult::Matched { .. }));
}

#[test]
fn earlier_row_wins_when_several_match() {
    let table = test_helpers::faq_table();
    // "straw" appears in the first and third rows.
    let result = ask(&table, "shopping for a straw");
    assert_eq!(result.answer(), Some("Use bamboo straws."));
}

#[test]
fn later_row_matches_when_earlier_do_not() {
    let table = test_helpers::faq_table();
    let result = ask(&table, "shopping tips");
    assert_eq!(result.answer(), Some("Carry a reusable jute bag."));
}

#[test]
fn row_without_keywords_never_matches() {
    let table = FaqTable::new(vec![
        FaqRecord::new(" , ", "dead"),
        FaqRecord::new("bag", "Carry a jute bag."),
    ]);
    assert_eq!(ask(&table, "anything at all").answer(), Some(FALLBACK_ANSWER));
    assert_eq!(ask(&table, "bag").answer(), Some("Carry a jute bag."));
}

#[test]
fn empty_table_is_unmatched() {
    let table = FaqTable::default();
    assert!(matches!(ask(&table, "bottle"), AnswerResult::Unmatched { .. }));
}
