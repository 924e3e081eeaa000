//! Turn-based game engine for tic-tac-toe.
//!
//! A [`Game`] owns its [`Board`], the two players, and the turn and result
//! state. Gameplay never fails loudly: a move on an occupied or invalid
//! cell, or after the game is over, is a no-op.

use super::action::Move;
use super::invariants;
use super::phases::{GamePhase, Outcome};
use super::rules;
use super::types::{Board, Cell, Marker, Player, CELL_COUNT};
use tracing::{debug, info, instrument};

/// Message shown when the board fills with no line.
pub const TIE_MESSAGE: &str = "It's a tie!";

/// Status shown before players are assigned.
pub const SETUP_MESSAGE: &str = "Enter player names to start";

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct Game {
    pub(super) board: Board,
    pub(super) players: Option<[Player; 2]>,
    pub(super) current: usize,
    pub(super) phase: GamePhase,
    pub(super) outcome: Option<Outcome>,
    pub(super) result_message: String,
    pub(super) history: Vec<Move>,
}

impl Game {
    /// Creates a game with an empty board and no players.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game and assigns players in one step.
    #[instrument(skip_all)]
    pub fn with_players(name1: impl Into<String>, name2: impl Into<String>) -> Self {
        let mut game = Self::new();
        game.set_players(name1, name2);
        game
    }

    /// Assigns player 1 (X) and player 2 (O) and starts a fresh turn order.
    ///
    /// Leaves the board as it is; call [`Game::reset_game`] to clear it.
    #[instrument(skip_all)]
    pub fn set_players(&mut self, name1: impl Into<String>, name2: impl Into<String>) {
        let players = [Player::new(name1, Marker::X), Player::new(name2, Marker::O)];
        info!(
            player1 = %players[0].name(),
            player2 = %players[1].name(),
            "Players assigned"
        );
        self.players = Some(players);
        self.current = 0;
        self.phase = GamePhase::InProgress;
        self.outcome = None;
        self.result_message.clear();
        self.check_invariants();
    }

    /// Plays the current player's marker at `index`.
    ///
    /// Returns `true` when the move was applied. Nothing changes when the
    /// game is not in progress or the cell is occupied or out of range.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn play_round(&mut self, index: usize) -> bool {
        if self.phase != GamePhase::InProgress {
            debug!("Ignoring move, game not in progress");
            return false;
        }
        let Some(players) = self.players.as_ref() else {
            return false;
        };
        let mover = &players[self.current];
        let marker = mover.marker();

        if !self.board.set_cell(index, marker) {
            debug!(%marker, "Cell unavailable, turn not advanced");
            return false;
        }
        self.history.push(Move::new(marker, index));

        let cells = self.board.state();
        if rules::has_won(&cells, marker) {
            let message = format!("{} wins!", mover.name());
            self.finish(Outcome::Winner(marker), message);
        } else if rules::is_full(&cells) {
            self.finish(Outcome::Tie, TIE_MESSAGE.to_string());
        } else {
            self.current = 1 - self.current;
            debug!(next = %marker.opponent(), "Turn passed");
        }

        self.check_invariants();
        true
    }

    /// Clears the board and history and gives the first turn back to player 1.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.current = 0;
        self.phase = if self.players.is_some() {
            GamePhase::InProgress
        } else {
            GamePhase::Setup
        };
        self.outcome = None;
        self.result_message.clear();
        self.history.clear();
        debug!(phase = %self.phase, "Game reset");
        self.check_invariants();
    }

    /// Player whose turn it is; `None` until players are assigned.
    pub fn current_player(&self) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[self.current])
    }

    /// Both players, once assigned.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Checks whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// `"{name} wins!"` or `"It's a tie!"` once over, empty before.
    pub fn result_message(&self) -> &str {
        &self.result_message
    }

    /// Copy of the nine cells.
    pub fn board(&self) -> [Cell; CELL_COUNT] {
        self.board.state()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// How the game ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Moves applied since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Line to show the user for the current phase.
    pub fn status_text(&self) -> String {
        match (self.phase, self.current_player()) {
            (GamePhase::Over, _) => self.result_message.clone(),
            (GamePhase::InProgress, Some(player)) => format!("{}'s turn", player.name()),
            _ => SETUP_MESSAGE.to_string(),
        }
    }

    /// Renders the board as text.
    pub fn board_text(&self) -> String {
        self.board.to_string()
    }

    fn finish(&mut self, outcome: Outcome, message: String) {
        info!(?outcome, %message, moves = self.history.len(), "Game over");
        self.outcome = Some(outcome);
        self.result_message = message;
        self.phase = GamePhase::Over;
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = invariants::check_all(self)
        {
            panic!("game invariants violated: {violations:?}");
        }
    }
}
