//! Conversation session management.
//!
//! A `Session` owns the transcript (the ordered chat history sent to the
//! completion service), appends one user/assistant pair per round-trip,
//! and can be reset back to its initial single-system-turn state.

mod chat;
mod manager;
mod types;

pub use manager::Session;
