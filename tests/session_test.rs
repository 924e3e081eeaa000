//! Tests for per-session game ownership.

use std::thread;

use tictactoe::{GamePhase, Marker, SessionErrorKind, SessionManager};

#[test]
fn test_sessions_are_independent() {
    let manager = SessionManager::new();
    manager.create_session("a".to_string()).expect("create a");
    manager.create_session("b".to_string()).expect("create b");

    manager
        .with_session("a", |s| s.start("Ann", "Bob"))
        .expect("start a");
    manager
        .with_session("b", |s| s.start("Cy", "Di"))
        .expect("start b");

    assert_eq!(manager.play_round("a", 4), Ok(true));
    assert_eq!(manager.play_round("b", 0), Ok(true));
    assert_eq!(manager.play_round("b", 4), Ok(true));

    let a = manager.snapshot("a").expect("snapshot a");
    let b = manager.snapshot("b").expect("snapshot b");
    assert_eq!(a.cells[4], Some(Marker::X));
    assert_eq!(a.cells[0], None);
    assert_eq!(b.cells[4], Some(Marker::O));
    assert_eq!(a.status, "Bob's turn");
    assert_eq!(b.status, "Cy's turn");
}

#[test]
fn test_duplicate_and_unknown_sessions() {
    let manager = SessionManager::new();
    manager.create_session("a".to_string()).expect("create");

    let err = manager.create_session("a".to_string()).unwrap_err();
    assert_eq!(err.kind, SessionErrorKind::AlreadyExists("a".to_string()));

    let err = manager.snapshot("missing").unwrap_err();
    assert_eq!(err.kind, SessionErrorKind::NotFound("missing".to_string()));
}

#[test]
fn test_move_before_start_is_ignored() {
    let manager = SessionManager::new();
    manager.create_session("a".to_string()).expect("create");
    assert_eq!(manager.play_round("a", 0), Ok(false));
    assert_eq!(manager.snapshot("a").map(|s| s.phase), Ok(GamePhase::Setup));
}

#[test]
fn test_remove_and_list() {
    let manager = SessionManager::new();
    for id in ["c", "a", "b"] {
        manager.create_session(id.to_string()).expect("create");
    }
    assert_eq!(manager.list_sessions().expect("list"), vec!["a", "b", "c"]);

    let removed = manager.remove_session("b").expect("remove");
    assert_eq!(removed.id, "b");
    assert_eq!(manager.list_sessions().expect("list"), vec!["a", "c"]);
    assert!(manager.remove_session("b").is_err());
}

#[test]
fn test_concurrent_games() {
    let manager = SessionManager::new();
    let handles: Vec<_> = (0..4)
        .map(|n| {
            let manager = manager.clone();
            thread::spawn(move || {
                let id = format!("game-{n}");
                manager.create_session(id.clone()).expect("create");
                manager
                    .with_session(&id, |s| s.start("Ann", "Bob"))
                    .expect("start");
                for index in [0, 1, 4, 2, 8] {
                    manager.play_round(&id, index).expect("session exists");
                }
                manager.snapshot(&id).expect("snapshot")
            })
        })
        .collect();

    for handle in handles {
        let snapshot = handle.join().expect("thread");
        assert_eq!(snapshot.result_message, "Ann wins!");
        assert_eq!(snapshot.history.len(), 5);
    }
}
