//! Per-session game ownership.
//!
//! Each [`Session`] owns its own [`Game`] (and therefore its own board), so
//! any number of games can run side by side without shared state.

use crate::games::tictactoe::{Game, Snapshot};
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// One game from player assignment to its outcome, plus restarts.
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID.
    pub id: SessionId,
    /// The game state.
    pub game: Game,
}

impl Session {
    /// Creates a session with a fresh game and no players.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            game: Game::new(),
        }
    }

    /// Runs the start/restart gesture: assign players, then clear the board.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn start(&mut self, name1: &str, name2: &str) {
        self.game.set_players(name1, name2);
        self.game.reset_game();
    }

    /// Read model of the session's game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.game)
    }
}

/// What went wrong in a session lookup.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionErrorKind {
    /// A session with this id already exists.
    #[display("session {} already exists", _0)]
    AlreadyExists(SessionId),
    /// No session with this id.
    #[display("session {} not found", _0)]
    NotFound(SessionId),
    /// Another thread panicked while holding the session map.
    #[display("session store lock poisoned")]
    Poisoned,
}

/// Session error with caller location.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Session error: {} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// Error kind.
    pub kind: SessionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Thread-safe registry of sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, Session>>>,
}

impl SessionManager {
    /// Creates an empty session manager.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session manager");
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<SessionId, Session>>, SessionError> {
        self.sessions
            .lock()
            .map_err(|_| SessionError::new(SessionErrorKind::Poisoned))
    }

    /// Creates a new game session.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId) -> Result<SessionId, SessionError> {
        let mut sessions = self.lock()?;

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::new(SessionErrorKind::AlreadyExists(id)));
        }

        sessions.insert(id.clone(), Session::new(id.clone()));
        info!(session_id = %id, "Created new session");
        Ok(id)
    }

    /// Runs `f` against the session while holding the lock.
    #[instrument(skip(self, f))]
    pub fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, SessionError> {
        let mut sessions = self.lock()?;
        let session = sessions.get_mut(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::new(SessionErrorKind::NotFound(id.to_string()))
        })?;
        Ok(f(session))
    }

    /// Plays a move in the given session; `Ok(false)` when the move was ignored.
    #[instrument(skip(self))]
    pub fn play_round(&self, id: &str, index: usize) -> Result<bool, SessionError> {
        self.with_session(id, |session| session.game.play_round(index))
    }

    /// Read model of a session's game.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: &str) -> Result<Snapshot, SessionError> {
        self.with_session(id, |session| session.snapshot())
    }

    /// Removes a session and returns it.
    #[instrument(skip(self))]
    pub fn remove_session(&self, id: &str) -> Result<Session, SessionError> {
        let session = self
            .lock()?
            .remove(id)
            .ok_or_else(|| SessionError::new(SessionErrorKind::NotFound(id.to_string())))?;
        info!(session_id = id, "Removed session");
        Ok(session)
    }

    /// Lists all session IDs, sorted.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Result<Vec<SessionId>, SessionError> {
        let mut ids: Vec<_> = self.lock()?.keys().cloned().collect();
        ids.sort();
        debug!(count = ids.len(), "Listed sessions");
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_clears_previous_game() {
        let mut session = Session::new("s1".to_string());
        session.start("Ann", "Bob");
        session.game.play_round(0);
        session.start("Cy", "Di");
        assert!(session.game.history().is_empty());
        assert_eq!(session.game.status_text(), "Cy's turn");
    }

    #[test]
    fn test_error_carries_location() {
        let err = SessionError::new(SessionErrorKind::NotFound("x".into()));
        assert_eq!(err.file, file!());
        assert!(err.to_string().contains("session x not found"));
    }
}
