//! Two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Games**: the rules engine ([`Board`], [`Game`]) with win and tie detection
//! - **Session**: per-game ownership so several games can run side by side
//! - **Controller**: the adapter front-ends drive the engine through
//! - **TUI**: ratatui front-end; **Replay**: headless front-end
//!
//! # Example
//!
//! ```
//! use tictactoe::Game;
//!
//! let mut game = Game::with_players("Ann", "Bob");
//! for index in [0, 1, 4, 2, 8] {
//!     game.play_round(index);
//! }
//! assert!(game.is_game_over());
//! assert_eq!(game.result_message(), "Ann wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod games;
mod replay;
mod session;
mod settings;
mod tui;

// Crate-level exports - Game types
pub use games::tictactoe::{
    check_invariants, rules, Board, Cell, Game, GamePhase, InvariantViolation, Marker, Move,
    Outcome, Player, Position, Snapshot, CELL_COUNT, SETUP_MESSAGE, TIE_MESSAGE,
};

// Crate-level exports - Sessions
pub use session::{Session, SessionError, SessionErrorKind, SessionId, SessionManager};

// Crate-level exports - Front-end adapter
pub use controller::{GameController, DEFAULT_PLAYER1, DEFAULT_PLAYER2};

// Crate-level exports - Replay
pub use replay::{parse_moves, replay, MoveParseError, ReplayReport};

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings, DEFAULT_SETTINGS_FILE};

// Crate-level exports - Terminal UI
pub use tui::{run_tui, App, NameField, Screen};
