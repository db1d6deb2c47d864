//! Session tests - gravity, commands and the game-over transition

use tui_gridfall::core::{GameSession, Grid, ScriptedSource, TickOutcome};
use tui_gridfall::types::{Command, PieceKind, Speed, Status};

fn scripted(grid: Grid, kinds: &[PieceKind]) -> GameSession<ScriptedSource> {
    GameSession::with_source(grid, Speed::Normal, ScriptedSource::new(kinds.to_vec()))
}

/// Feed 16ms frames until a gravity step happens.
fn tick_until_step(session: &mut GameSession<ScriptedSource>) -> TickOutcome {
    for _ in 0..100 {
        let outcome = session.tick(16);
        if outcome != TickOutcome::Idle {
            return outcome;
        }
    }
    panic!("no gravity step within 100 frames");
}

#[test]
fn test_scenario_a_straight_piece_falls_then_locks() {
    let mut session = scripted(Grid::default(), &[PieceKind::I]);
    assert_eq!((session.active().x, session.active().y), (3, 0));

    for expected_y in 1..=19 {
        assert_eq!(tick_until_step(&mut session), TickOutcome::Fell);
        assert_eq!(session.active().y, expected_y);
        assert_eq!(session.clock().elapsed_ms(), 0);
    }

    assert_eq!(tick_until_step(&mut session), TickOutcome::Locked { lines: 0 });
    assert_eq!(&session.grid().row(19)[3..7], &[1, 1, 1, 1]);
    assert_eq!(session.pieces_locked(), 1);
    assert_eq!((session.active().x, session.active().y), (3, 0));
    assert_eq!(session.status(), Status::Running);
}

#[test]
fn test_gravity_waits_for_strictly_more_than_interval() {
    let mut session = scripted(Grid::default(), &[PieceKind::T]);
    assert_eq!(session.tick(250), TickOutcome::Idle);
    assert_eq!(session.tick(250), TickOutcome::Idle);
    assert_eq!(session.active().y, 0);
    assert_eq!(session.tick(1), TickOutcome::Fell);
    assert_eq!(session.active().y, 1);
}

#[test]
fn test_speed_change_applies_to_next_comparison() {
    let mut session = scripted(Grid::default(), &[PieceKind::T]);
    assert_eq!(session.tick(300), TickOutcome::Idle);
    assert!(session.apply(Command::SelectSpeed(Speed::Fast)));
    assert_eq!(session.clock().elapsed_ms(), 300);
    assert_eq!(session.active().y, 0);
    assert_eq!(session.tick(0), TickOutcome::Fell);
}

#[test]
fn test_unknown_speed_name_is_ignored() {
    let mut session = scripted(Grid::default(), &[PieceKind::T]);
    assert!(!session.select_speed("NOMAL"));
    assert!(!session.select_speed("slow"));
    assert_eq!(session.speed(), Speed::Normal);
    assert!(session.select_speed("SLOW"));
    assert_eq!(session.snapshot().speed_name(), "SLOW");
}

#[test]
fn test_lock_clears_completed_line() {
    // Bottom row full except where a horizontal I will land.
    let mut rows = vec![vec![0u8; 10]; 20];
    rows[19] = vec![2, 2, 2, 0, 0, 0, 0, 2, 2, 2];
    let mut session = scripted(Grid::from_rows(&rows).unwrap(), &[PieceKind::I, PieceKind::O]);

    for _ in 0..19 {
        assert!(session.apply(Command::SoftDrop));
    }
    // A failed soft drop does not lock.
    assert!(!session.apply(Command::SoftDrop));
    assert_eq!(session.pieces_locked(), 0);

    assert_eq!(tick_until_step(&mut session), TickOutcome::Locked { lines: 1 });
    assert!(session.grid().cells().iter().all(|&v| v == 0));
    assert_eq!(session.lines_cleared(), 1);
    assert_eq!(session.active().kind, PieceKind::O);
}

#[test]
fn test_rotation_is_all_or_nothing() {
    let mut session = scripted(Grid::default(), &[PieceKind::I]);
    // Horizontal I against the right wall: x = 6 covers columns 6..=9.
    for _ in 0..3 {
        assert!(session.apply(Command::MoveRight));
    }
    assert!(!session.apply(Command::MoveRight));

    // Vertical I at the same anchor fits (column 6, rows 0..=3).
    assert!(session.apply(Command::Rotate));
    assert_eq!(session.active().shape.width(), 1);

    // With (9, 0) occupied, a vertical I in column 6 cannot turn back to
    // horizontal: that needs columns 6..=9 on row 0.
    let mut rows = vec![vec![0u8; 10]; 20];
    rows[0][9] = 5;
    let mut blocked = scripted(Grid::from_rows(&rows).unwrap(), &[PieceKind::I]);
    assert!(blocked.apply(Command::Rotate));
    for _ in 0..3 {
        assert!(blocked.apply(Command::MoveRight));
    }
    let before = *blocked.active();
    assert!(!blocked.apply(Command::Rotate));
    assert_eq!(*blocked.active(), before);
}

#[test]
fn test_scenario_c_top_out_after_lock() {
    // Rows 1 and 2 filled except the last column, so they never clear.
    // With rows 0 and 1 completely full the lock would clear them instead
    // (see test_full_top_rows_clear_on_first_lock).
    let mut rows = vec![vec![0u8; 10]; 20];
    for row in rows.iter_mut().take(3).skip(1) {
        *row = vec![3, 3, 3, 3, 3, 3, 3, 3, 3, 0];
    }
    let mut session = scripted(Grid::from_rows(&rows).unwrap(), &[PieceKind::I]);
    assert_eq!(session.status(), Status::Running);

    // The I cannot fall onto row 1, so the first gravity step locks it on
    // row 0 and its replacement spawns on top of it.
    assert_eq!(tick_until_step(&mut session), TickOutcome::ToppedOut { lines: 0 });
    assert_eq!(session.status(), Status::GameOver);
    assert!(session.is_game_over());

    let frozen = session.snapshot();
    assert_eq!(session.tick(10_000), TickOutcome::Idle);
    assert_eq!(session.clock().elapsed_ms(), 0);
    for command in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::Rotate,
        Command::SelectSpeed(Speed::Fast),
    ] {
        assert!(!session.apply(command));
    }
    assert!(!session.select_speed("SLOW"));
    assert_eq!(session.snapshot(), frozen);
}

#[test]
fn test_full_top_rows_clear_on_first_lock() {
    // Rows 0 and 1 full: the first piece spawns inside them and cannot top
    // out, because locking it leaves both rows full and they clear.
    let mut rows = vec![vec![0u8; 10]; 20];
    rows[0] = vec![1; 10];
    rows[1] = vec![1; 10];
    let mut session = scripted(Grid::from_rows(&rows).unwrap(), &[PieceKind::T, PieceKind::O]);

    assert_eq!(session.status(), Status::Running);
    assert!(!session.apply(Command::MoveLeft));
    assert!(!session.apply(Command::Rotate));

    assert_eq!(tick_until_step(&mut session), TickOutcome::Locked { lines: 2 });
    assert_eq!(session.status(), Status::Running);
    assert!(session.grid().cells().iter().all(|&v| v == 0));
    assert_eq!(session.lines_cleared(), 2);
    assert_eq!(session.active().kind, PieceKind::O);

    assert_eq!(tick_until_step(&mut session), TickOutcome::Fell);
}

#[test]
fn test_seeded_sessions_repeat() {
    let mut a = GameSession::new(99);
    let mut b = GameSession::new(99);
    for _ in 0..2_000 {
        a.apply(Command::MoveLeft);
        b.apply(Command::MoveLeft);
        assert_eq!(a.tick(16), b.tick(16));
    }
    assert_eq!(a.snapshot(), b.snapshot());
}
