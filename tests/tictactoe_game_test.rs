//! Gameplay properties of the tic-tac-toe engine.

use tictactoe::{rules::LINES, Cell, Game, GamePhase, Marker, Outcome, CELL_COUNT};

fn play(game: &mut Game, moves: &[usize]) {
    for &index in moves {
        assert!(game.play_round(index), "move {index} rejected");
    }
}

fn current_marker(game: &Game) -> Option<Marker> {
    game.current_player().map(|player| player.marker())
}

#[test]
fn test_diagonal_win_scenario() {
    let mut game = Game::with_players("Ann", "Bob");
    play(&mut game, &[0, 1, 4, 2, 8]);

    assert!(game.is_game_over());
    assert_eq!(game.result_message(), "Ann wins!");
}

#[test]
fn test_full_board_tie_scenario() {
    let mut game = Game::with_players("Ann", "Bob");
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    for (i, &index) in moves.iter().enumerate() {
        assert!(!game.is_game_over(), "ended early before move {i}");
        assert!(game.play_round(index));
    }

    assert!(game.is_game_over());
    assert_eq!(game.result_message(), "It's a tie!");
    assert_eq!(game.outcome(), Some(Outcome::Tie));
    assert!(game.board().iter().all(|cell| !cell.is_empty()));
}

#[test]
fn test_every_line_wins_for_either_player() {
    for line in LINES {
        // X takes the line; O answers on cells outside it
        let mut x_game = Game::with_players("Ann", "Bob");
        let mut fillers = (0..CELL_COUNT).filter(|i| !line.contains(i));
        for &index in &line {
            assert!(x_game.play_round(index));
            if !x_game.is_game_over() {
                let filler = fillers.next().expect("free cell");
                assert!(x_game.play_round(filler));
            }
        }
        assert!(x_game.is_game_over(), "line {line:?}");
        assert_eq!(x_game.result_message(), "Ann wins!");
        assert_eq!(x_game.outcome(), Some(Outcome::Winner(Marker::X)));
    }
}

#[test]
fn test_o_can_win() {
    let mut game = Game::with_players("Ann", "Bob");
    // O takes the middle column
    play(&mut game, &[0, 1, 2, 4, 6, 7]);
    assert_eq!(game.result_message(), "Bob wins!");
    assert_eq!(game.outcome(), Some(Outcome::Winner(Marker::O)));
}

#[test]
fn test_turn_alternation() {
    let mut game = Game::with_players("Ann", "Bob");
    assert_eq!(current_marker(&game), Some(Marker::X));

    assert!(game.play_round(4));
    assert_eq!(current_marker(&game), Some(Marker::O));

    assert!(!game.play_round(4));
    assert_eq!(current_marker(&game), Some(Marker::O));

    assert!(!game.play_round(9));
    assert_eq!(current_marker(&game), Some(Marker::O));

    assert!(game.play_round(8));
    assert_eq!(current_marker(&game), Some(Marker::X));
}

#[test]
fn test_game_over_is_idempotent() {
    let mut game = Game::with_players("Ann", "Bob");
    play(&mut game, &[0, 1, 4, 2, 8]);
    let board = game.board();
    let current = game.current_player().cloned();

    for index in 0..CELL_COUNT + 3 {
        assert!(!game.play_round(index));
    }

    assert_eq!(game.board(), board);
    assert_eq!(game.current_player().cloned(), current);
    assert_eq!(game.result_message(), "Ann wins!");
    assert_eq!(game.phase(), GamePhase::Over);
}

#[test]
fn test_board_snapshot_cannot_mutate_game() {
    let mut game = Game::with_players("Ann", "Bob");
    game.play_round(0);
    let mut cells = game.board();
    cells[0] = Cell::Empty;
    cells[1] = Cell::Marked(Marker::X);
    assert_eq!(game.board()[0], Cell::Marked(Marker::X));
    assert_eq!(game.board()[1], Cell::Empty);
}

#[test]
fn test_set_players_does_not_clear_board() {
    let mut game = Game::with_players("Ann", "Bob");
    play(&mut game, &[0, 4]);
    game.set_players("Cy", "Di");
    assert_eq!(game.board()[0], Cell::Marked(Marker::X));
    assert_eq!(game.board()[4], Cell::Marked(Marker::O));

    game.reset_game();
    assert_eq!(game.board(), [Cell::Empty; CELL_COUNT]);
    assert_eq!(game.status_text(), "Cy's turn");
}

#[test]
fn test_status_text_follows_phase() {
    let mut game = Game::new();
    assert_eq!(game.status_text(), tictactoe::SETUP_MESSAGE);
    game.set_players("Ann", "Bob");
    assert_eq!(game.status_text(), "Ann's turn");
    game.play_round(0);
    assert_eq!(game.status_text(), "Bob's turn");
}

#[test]
fn test_history_records_applied_moves_only() {
    let mut game = Game::with_players("Ann", "Bob");
    game.play_round(4);
    game.play_round(4);
    game.play_round(0);
    let history: Vec<_> = game.history().iter().map(|mv| (mv.marker, mv.index)).collect();
    assert_eq!(history, vec![(Marker::X, 4), (Marker::O, 0)]);
    assert!(tictactoe::check_invariants(&game).is_ok());
}
