//! Chat service: answers questions and records them in the session log.
//!
//! DESIGN
//! ======
//! Blank questions are answered with `EmptyQuestion` and leave every session
//! untouched. Every other question, matched or not, is appended to the
//! session's conversation log together with the answer it received.
//!
//! Session ids are minted here and nowhere else. A caller-supplied id is only
//! reused when it names a live session; anything else gets a fresh id, so a
//! client cannot plant map entries under ids of its choosing. Each write first
//! sweeps sessions idle for longer than the configured TTL.

use std::time::Instant;

use tracing::debug;
use uuid::Uuid;

use crate::services::conversation::{ChatTurn, ConversationLog};
use crate::services::faq::{self, AnswerResult};
use crate::state::{AppState, ChatSession};

/// Result of one ask action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskReply {
    /// Blank question; nothing was recorded and no session was touched.
    Empty,
    /// The question was answered and recorded as `turn` in `session_id`.
    Recorded { session_id: Uuid, matched: bool, turn: ChatTurn },
}

/// Answer `question` and record the turn.
///
/// `known` is the session id the caller presented, if any. The turn lands in
/// that session while it is still live, otherwise in a newly issued one.
pub async fn ask(state: &AppState, known: Option<Uuid>, question: &str) -> AskReply {
    let result = faq::ask(&state.dataset.faq, question);
    let Some(answer) = result.answer() else {
        return AskReply::Empty;
    };
    let matched = matches!(result, AnswerResult::Matched { .. });

    let now = Instant::now();
    let mut sessions = state.sessions.write().await;

    let before = sessions.len();
    sessions.retain(|_, session| !session.is_expired(now, state.session_ttl));
    let evicted = before - sessions.len();
    if evicted > 0 {
        debug!(evicted, "idle chat sessions evicted");
    }

    let session_id = match known {
        Some(id) if sessions.contains_key(&id) => id,
        _ => Uuid::new_v4(),
    };

    let session = sessions.entry(session_id).or_insert_with(ChatSession::new);
    session.last_active = now;
    let turn = session.log.append(question, answer).clone();

    debug!(%session_id, matched, order = turn.order, "chat question answered");
    AskReply::Recorded { session_id, matched, turn }
}

/// Snapshot of a session's log. Unknown or idle-expired sessions have an empty one.
pub async fn history(state: &AppState, session_id: Uuid) -> ConversationLog {
    let sessions = state.sessions.read().await;
    sessions
        .get(&session_id)
        .filter(|session| !session.is_expired(Instant::now(), state.session_ttl))
        .map(|session| session.log.clone())
        .unwrap_or_default()
}

/// End a session, dropping its log. Returns whether the session existed.
pub async fn end_session(state: &AppState, session_id: Uuid) -> bool {
    state.sessions.write().await.remove(&session_id).is_some()
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
