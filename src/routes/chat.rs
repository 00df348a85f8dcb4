//! Chatbot routes for asking, history, and session reset.
//!
//! Chat sessions are keyed by an HttpOnly cookie holding a v4 UUID. The
//! cookie is only ever set to an id the server issued, and only once a
//! question has actually been recorded.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;
use uuid::Uuid;

use crate::services::chat::{self, AskReply};
use crate::services::conversation::{ChatLine, ChatTurn, ConversationLog, LogState};
use crate::state::AppState;

pub(crate) const SESSION_COOKIE: &str = "greenmind_session";
pub const EMPTY_QUESTION_PROMPT: &str = "Please type your question!";

// =============================================================================
// SESSION COOKIE
// =============================================================================

fn existing_session(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE).and_then(|c| Uuid::parse_str(c.value()).ok())
}

/// Point the session cookie at `session_id` unless it already does.
fn with_session(jar: CookieJar, session_id: Uuid, secure: bool) -> CookieJar {
    if existing_session(&jar) == Some(session_id) {
        return jar;
    }

    let cookie = Cookie::build((SESSION_COOKIE, session_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure);
    jar.add(cookie)
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AskBody {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AskResponse {
    EmptyQuestion { message: &'static str },
    Matched { answer: String, turn: ChatTurn },
    Unmatched { answer: String, turn: ChatTurn },
}

impl From<AskReply> for AskResponse {
    fn from(reply: AskReply) -> Self {
        match reply {
            AskReply::Empty => Self::EmptyQuestion { message: EMPTY_QUESTION_PROMPT },
            AskReply::Recorded { matched: true, turn, .. } => Self::Matched { answer: turn.answer.clone(), turn },
            AskReply::Recorded { matched: false, turn, .. } => Self::Unmatched { answer: turn.answer.clone(), turn },
        }
    }
}

/// A turn rendered for display: answer line above question line.
#[derive(Debug, Serialize)]
pub struct TurnView<'a> {
    pub order: usize,
    pub lines: [ChatLine<'a>; 2],
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse<'a> {
    pub state: LogState,
    pub turns: Vec<TurnView<'a>>,
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/chat/ask`: answer a question and record it in the session.
pub async fn ask(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<AskBody>,
) -> (CookieJar, Json<AskResponse>) {
    let reply = chat::ask(&state, existing_session(&jar), &body.question).await;
    let jar = match &reply {
        AskReply::Recorded { session_id, .. } => with_session(jar, *session_id, state.cookie_secure),
        AskReply::Empty => jar,
    };
    (jar, Json(AskResponse::from(reply)))
}

/// `GET /api/chat/history`: the session's turns in insertion order.
pub async fn history(State(state): State<AppState>, jar: CookieJar) -> Response {
    let log = match existing_session(&jar) {
        Some(session_id) => chat::history(&state, session_id).await,
        None => ConversationLog::new(),
    };
    let response = HistoryResponse {
        state: log.state(),
        turns: log.all().iter().map(|t| TurnView { order: t.order, lines: t.lines() }).collect(),
    };
    Json(&response).into_response()
}

/// `POST /api/chat/reset`: end the session and clear its cookie.
pub async fn reset(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, StatusCode) {
    if let Some(session_id) = existing_session(&jar) {
        chat::end_session(&state, session_id).await;
    }

    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.cookie_secure)
        .max_age(Duration::ZERO);
    (jar.add(cookie), StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
