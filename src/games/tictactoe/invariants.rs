//! Structural invariants of a [`Game`].
//!
//! Checked after every state transition in debug builds and testable on
//! their own.

use super::game::Game;
use super::phases::GamePhase;
use super::types::Cell;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("invariant violated: {description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns every violation, or `Ok(())` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation { description })
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Players exist exactly when the game has left setup.
pub struct PlayersAssignedInvariant;

impl Invariant<Game> for PlayersAssignedInvariant {
    fn holds(game: &Game) -> bool {
        let assigned = game.players.is_some();
        let in_setup = game.phase == GamePhase::Setup;
        assigned != in_setup && game.current < 2
    }

    fn description() -> &'static str {
        "Current player is one of the two assigned players outside setup"
    }
}

/// Result message and outcome are set exactly when the game is over.
pub struct ResultMatchesPhaseInvariant;

impl Invariant<Game> for ResultMatchesPhaseInvariant {
    fn holds(game: &Game) -> bool {
        let over = game.phase == GamePhase::Over;
        over == !game.result_message.is_empty() && over == game.outcome.is_some()
    }

    fn description() -> &'static str {
        "Game over iff a result message and outcome are recorded"
    }
}

/// Occupied cells are exactly the cells in the move history.
pub struct HistoryMatchesBoardInvariant;

impl Invariant<Game> for HistoryMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        let cells = game.board.state();
        let occupied = cells.iter().filter(|cell| !cell.is_empty()).count();
        occupied == game.history.len()
            && game
                .history
                .iter()
                .all(|mv| cells.get(mv.index) == Some(&Cell::Marked(mv.marker)))
    }

    fn description() -> &'static str {
        "Board cells match the recorded move history"
    }
}

/// All game invariants as a composable set.
pub type GameInvariants = (
    PlayersAssignedInvariant,
    ResultMatchesPhaseInvariant,
    HistoryMatchesBoardInvariant,
);

/// Checks every game invariant.
pub fn check_all(game: &Game) -> Result<(), Vec<InvariantViolation>> {
    GameInvariants::check_all(game)
}
