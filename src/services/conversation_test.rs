use super::*;

#[test]
fn new_log_is_empty() {
    let log = ConversationLog::new();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert_eq!(log.state(), LogState::Empty);
    assert!(log.all().is_empty());
}

#[test]
fn append_returns_recorded_turn() {
    let mut log = ConversationLog::new();
    let turn = log.append("bottle?", "Use glass.");
    assert_eq!(turn.order, 0);
    assert_eq!(turn.question, "bottle?");
    assert_eq!(turn.answer, "Use glass.");
    assert_eq!(log.state(), LogState::HasTurns);
}

#[test]
fn orders_are_sequential_in_insertion_order() {
    let mut log = ConversationLog::new();
    for i in 0..5 {
        log.append(format!("q{i}"), format!("a{i}"));
    }

    assert_eq!(log.len(), 5);
    for (i, turn) in log.all().iter().enumerate() {
        assert_eq!(turn.order, i);
        assert_eq!(turn.question, format!("q{i}"));
        assert_eq!(turn.answer, format!("a{i}"));
    }
}

#[test]
fn duplicate_questions_are_separate_turns() {
    let mut log = ConversationLog::new();
    log.append("straw", "Use bamboo straws.");
    log.append("straw", "Use bamboo straws.");
    assert_eq!(log.len(), 2);
    assert_eq!(log.all()[1].order, 1);
}

#[test]
fn turn_lines_put_answer_above_question() {
    let mut log = ConversationLog::new();
    let turn = log.append("bag?", "Carry jute.");
    let [first, second] = turn.lines();
    assert_eq!(first, ChatLine { speaker: Speaker::Bot, text: "Carry jute." });
    assert_eq!(second, ChatLine { speaker: Speaker::User, text: "bag?" });
}

#[test]
fn chat_line_serializes_speaker_lowercase() {
    let line = ChatLine { speaker: Speaker::Bot, text: "hi" };
    let json = serde_json::to_value(line).unwrap();
    assert_eq!(json, serde_json::json!({"speaker": "bot", "text": "hi"}));
}
