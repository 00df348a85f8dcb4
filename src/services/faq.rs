//! FAQ matcher: keyword lookup behind the chatbot.
//!
//! The first FAQ row (in source order) with any keyword appearing in the
//! question wins. Questions that match nothing get a fixed fallback answer.

use crate::dataset::FaqTable;

pub const FALLBACK_ANSWER: &str =
    "Sorry, I don't have an answer yet. Try asking about bottles, straws, packaging, bags, or cutlery.";

/// Outcome of asking one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerResult {
    /// Blank input; the caller should prompt again.
    EmptyQuestion,
    Matched { answer: String },
    Unmatched { answer: String },
}

impl AnswerResult {
    /// Answer text, absent only for `EmptyQuestion`.
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::EmptyQuestion => None,
            Self::Matched { answer } | Self::Unmatched { answer } => Some(answer),
        }
    }
}

/// Answer `question` from `table`.
#[must_use]
pub fn ask(table: &FaqTable, question: &str) -> AnswerResult {
    if question.trim().is_empty() {
        return AnswerResult::EmptyQuestion;
    }

    let question = question.to_lowercase();
    table
        .rows()
        .iter()
        .find(|row| row.keywords.iter().any(|k| question.contains(k.as_str())))
        .map_or_else(
            || AnswerResult::Unmatched { answer: FALLBACK_ANSWER.to_owned() },
            |row| AnswerResult::Matched { answer: row.answer.clone() },
        )
}

#[cfg(test)]
#[path = "faq_test.rs"]
mod tests;
