//! Conversation log: append-only chat turns for one session.
//!
//! DESIGN
//! ======
//! Turns are stored in insertion order and numbered from zero. There is no
//! removal; a log lives exactly as long as the session that owns it. Display
//! puts each turn's answer above its question.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogState {
    Empty,
    HasTurns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Bot,
    User,
}

/// One rendered line of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChatLine<'a> {
    pub speaker: Speaker,
    pub text: &'a str,
}

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatTurn {
    pub order: usize,
    pub question: String,
    pub answer: String,
}

impl ChatTurn {
    /// Presentation lines: answer first, then question.
    #[must_use]
    pub fn lines(&self) -> [ChatLine<'_>; 2] {
        [
            ChatLine { speaker: Speaker::Bot, text: &self.answer },
            ChatLine { speaker: Speaker::User, text: &self.question },
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    turns: Vec<ChatTurn>,
}

impl ConversationLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a turn with the next order value.
    pub fn append(&mut self, question: impl Into<String>, answer: impl Into<String>) -> &ChatTurn {
        let order = self.turns.len();
        self.turns.push(ChatTurn { order, question: question.into(), answer: answer.into() });
        &self.turns[order]
    }

    /// All turns in insertion order.
    #[must_use]
    pub fn all(&self) -> &[ChatTurn] {
        &self.turns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> LogState {
        if self.turns.is_empty() { LogState::Empty } else { LogState::HasTurns }
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
