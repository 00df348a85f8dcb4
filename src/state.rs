//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the read-only dataset loaded at startup and a map of chat
//! sessions. Each session owns exactly one conversation log; handlers reach
//! a log only through its session id. Only server-issued ids are ever keys,
//! and sessions idle longer than `session_ttl` are evicted on the next write.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dataset::Dataset;
use crate::services::conversation::ConversationLog;

// =============================================================================
// CHAT SESSION
// =============================================================================

/// One chat session: its log and when it was last written.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub log: ConversationLog,
    pub last_active: Instant,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        Self { log: ConversationLog::new(), last_active: Instant::now() }
    }

    /// Whether the session has been idle for at least `ttl` as of `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_active) >= ttl
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    /// Catalog and FAQ tables. Never written after startup.
    pub dataset: Arc<Dataset>,
    /// Chat sessions: `session_id` -> session.
    pub sessions: Arc<RwLock<HashMap<Uuid, ChatSession>>>,
    /// Idle time after which a session ends.
    pub session_ttl: Duration,
    /// Whether session cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(dataset: Arc<Dataset>, session_ttl: Duration, cookie_secure: bool) -> Self {
        Self { dataset, sessions: Arc::new(RwLock::new(HashMap::new())), session_ttl, cookie_secure }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_state_new_has_no_sessions() {
        let state = test_helpers::test_app_state();
        assert!(state.sessions.try_read().unwrap().is_empty());
        assert!(!state.cookie_secure);
    }

    #[test]
    fn app_state_clone_shares_dataset_and_sessions() {
        let state = test_helpers::test_app_state();
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.dataset, &cloned.dataset));
        assert!(Arc::ptr_eq(&state.sessions, &cloned.sessions));
    }

    #[tokio::test]
    async fn seed_session_records_turns() {
        let state = test_helpers::test_app_state();
        let id = test_helpers::seed_session(&state, &[("q", "a")]).await;
        let sessions = state.sessions.read().await;
        assert_eq!(sessions.get(&id).unwrap().log.len(), 1);
    }

    #[test]
    fn chat_session_expires_at_ttl() {
        let session = ChatSession::new();
        let ttl = Duration::from_secs(60);
        assert!(!session.is_expired(session.last_active, ttl));
        assert!(!session.is_expired(session.last_active + Duration::from_secs(59), ttl));
        assert!(session.is_expired(session.last_active + ttl, ttl));
    }

    #[test]
    fn chat_session_clock_skew_is_not_expiry() {
        let session = ChatSession::new();
        let earlier = session.last_active.checked_sub(Duration::from_secs(5)).unwrap();
        assert!(!session.is_expired(earlier, Duration::from_secs(1)));
    }
}
