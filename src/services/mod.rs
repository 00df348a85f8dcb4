//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the lookup logic over the loaded dataset and the
//! per-session chat bookkeeping so route handlers can stay focused on
//! request parsing and response shaping.

pub mod catalog;
pub mod chat;
pub mod conversation;
pub mod faq;
