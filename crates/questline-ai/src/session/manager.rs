//! Session struct and transcript management.

use std::sync::atomic::AtomicBool;

use questline_common::SessionId;

use crate::token_tracker::TokenTracker;
use crate::Message;

/// A conversation session owning the transcript sent to the completion API.
///
/// The transcript always starts with a system turn carrying the behavioral
/// directive; that turn sits at index 0 for the whole life of the session
/// and is only ever replaced wholesale by [`Session::reset`]. Each
/// successful round-trip appends a user turn followed by an assistant turn.
pub struct Session {
    /// Session identifier, used to correlate log lines.
    pub(super) id: SessionId,
    /// Full conversation history, system turn first.
    pub(super) transcript: Vec<Message>,
    /// Behavioral directive, kept so `reset` restores it verbatim.
    pub(super) system_prompt: String,
    /// Token usage tracker.
    pub(super) tracker: TokenTracker,
    /// Whether a round-trip is currently in flight.
    pub(super) busy: AtomicBool,
}

impl Session {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        let system_prompt = system_prompt.into();
        Self {
            id: SessionId::new(),
            transcript: vec![Message::system(system_prompt.clone())],
            system_prompt,
            tracker: TokenTracker::new(),
            busy: AtomicBool::new(false),
        }
    }

    /// Replace the transcript with a fresh single-system-turn history.
    ///
    /// Infallible and idempotent; the original directive is restored
    /// verbatim.
    pub fn reset(&mut self) {
        tracing::debug!(session = %self.id, "Resetting transcript");
        self.transcript = vec![Message::system(self.system_prompt.clone())];
    }

    /// The full conversation history, including the system turn.
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// The turns to render to the user: everything except the system turn
    /// at index 0, in conversation order.
    pub fn display_turns(&self) -> &[Message] {
        &self.transcript[1..]
    }

    /// Number of turns in the transcript, system turn included.
    pub fn turn_count(&self) -> usize {
        self.transcript.len()
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Get the token tracker.
    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    const DIRECTIVE: &str = "You are an educational choose-your-own-adventure guide.";

    #[test]
    fn new_session_has_single_system_turn() {
        let session = Session::new(DIRECTIVE);
        assert_eq!(session.turn_count(), 1);
        assert_eq!(session.transcript()[0].role, Role::System);
        assert_eq!(session.transcript()[0].content, DIRECTIVE);
    }

    #[test]
    fn display_turns_excludes_system_turn() {
        let mut session = Session::new(DIRECTIVE);
        assert!(session.display_turns().is_empty());

        session.transcript.push(Message::user("Hello"));
        session.transcript.push(Message::assistant("Hi there"));

        let display = session.display_turns();
        assert_eq!(display.len(), 2);
        assert_eq!(display[0].role, Role::User);
        assert_eq!(display[1].role, Role::Assistant);
        assert!(display.iter().all(|m| m.role != Role::System));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut session = Session::new(DIRECTIVE);
        session.transcript.push(Message::user("round one"));
        session.transcript.push(Message::assistant("reply one"));
        session.transcript.push(Message::user("round two"));
        session.transcript.push(Message::assistant("reply two"));

        session.reset();
        assert_eq!(session.transcript(), &[Message::system(DIRECTIVE)]);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut session = Session::new(DIRECTIVE);
        session.transcript.push(Message::user("Hello"));

        session.reset();
        let first = session.transcript().to_vec();
        session.reset();
        session.reset();
        assert_eq!(session.transcript(), first.as_slice());
        assert_eq!(session.turn_count(), 1);
    }

    #[test]
    fn sessions_get_distinct_ids() {
        let a = Session::new(DIRECTIVE);
        let b = Session::new(DIRECTIVE);
        assert_ne!(a.id(), b.id());
    }
}
