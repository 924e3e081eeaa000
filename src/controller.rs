//! Front-end adapter over a game session.
//!
//! Translates user gestures (start, cell activation) into engine calls and
//! exposes only what a front-end needs to render. Both the terminal UI and
//! the replay command drive the engine through this type.

use crate::games::tictactoe::{Cell, GamePhase, Snapshot, CELL_COUNT};
use crate::session::{Session, SessionId};
use tracing::{debug, info, instrument};

/// Name used when the first name field is left empty.
pub const DEFAULT_PLAYER1: &str = "Player 1";

/// Name used when the second name field is left empty.
pub const DEFAULT_PLAYER2: &str = "Player 2";

/// Adapter between a front-end and one game session.
#[derive(Debug, Clone)]
pub struct GameController {
    session: Session,
}

impl GameController {
    /// Creates a controller over a fresh session.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        Self {
            session: Session::new(id),
        }
    }

    /// Start/restart gesture.
    ///
    /// Blank names fall back to [`DEFAULT_PLAYER1`] / [`DEFAULT_PLAYER2`].
    /// Players are assigned first, then the board is cleared.
    #[instrument(skip(self))]
    pub fn start(&mut self, name1: &str, name2: &str) {
        let name1 = name_or_default(name1, DEFAULT_PLAYER1);
        let name2 = name_or_default(name2, DEFAULT_PLAYER2);
        info!(%name1, %name2, "Starting game");
        self.session.start(name1, name2);
    }

    /// Restarts with the names already assigned.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.session.game.reset_game();
    }

    /// Cell activation gesture; `true` when the move was applied.
    #[instrument(skip(self))]
    pub fn activate_cell(&mut self, index: usize) -> bool {
        let applied = self.session.game.play_round(index);
        debug!(applied, status = %self.status_text(), "Cell activated");
        applied
    }

    /// The nine cells to render.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        self.session.game.board()
    }

    /// Status line: whose turn it is, or the result.
    pub fn status_text(&self) -> String {
        self.session.game.status_text()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        self.session.game.phase()
    }

    /// Board rendered as text.
    pub fn board_text(&self) -> String {
        self.session.game.board_text()
    }

    /// Serializable read model.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Names of both players, once assigned.
    pub fn player_names(&self) -> Option<(&str, &str)> {
        self.session
            .game
            .players()
            .map(|[p1, p2]| (p1.name().as_str(), p2.name().as_str()))
    }
}

fn name_or_default<'a>(name: &'a str, default: &'a str) -> &'a str {
    let trimmed = name.trim();
    if trimmed.is_empty() { default } else { trimmed }
}
