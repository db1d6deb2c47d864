//! Headless driver: runs a session without a terminal.
//!
//! Each frame optionally issues one pseudo-random command, then advances the
//! session by one fixed host frame. Useful for soak runs and for watching the
//! rules through the log.

use log::{debug, info};

use crate::core::{GameSession, GameSnapshot, PieceSource, SimpleRng, TickOutcome};
use crate::types::{Command, PieceKind, Status, TICK_MS};

/// Summary of a headless run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessReport {
    pub frames: u32,
    pub pieces_locked: u32,
    pub lines_cleared: u32,
    pub status: Status,
    pub snapshot: GameSnapshot,
}

/// Drive `session` for at most `max_frames` frames of [`TICK_MS`] each.
///
/// Commands are drawn from a generator seeded with `input_seed`. Stops early
/// once the session is over.
pub fn run<S: PieceSource>(
    session: &mut GameSession<S>,
    max_frames: u32,
    input_seed: u32,
) -> HeadlessReport {
    let mut input = SimpleRng::new(input_seed);
    let mut frames = 0;

    while frames < max_frames && !session.is_game_over() {
        if let Some(command) = pick_command(&mut input) {
            session.apply(command);
        }

        match session.tick(TICK_MS) {
            TickOutcome::Locked { lines } if lines > 0 => {
                debug!("frame {}: cleared {} line(s)", frames, lines)
            }
            TickOutcome::ToppedOut { .. } => info!("frame {}: topped out", frames),
            _ => {}
        }
        frames += 1;
    }

    HeadlessReport {
        frames,
        pieces_locked: session.pieces_locked(),
        lines_cleared: session.lines_cleared(),
        status: session.status(),
        snapshot: session.snapshot(),
    }
}

/// Roughly one command every other frame, biased toward sideways moves.
fn pick_command(rng: &mut SimpleRng) -> Option<Command> {
    match rng.next_range(16) {
        0..=2 => Some(Command::MoveLeft),
        3..=5 => Some(Command::MoveRight),
        6 | 7 => Some(Command::Rotate),
        8 => Some(Command::SoftDrop),
        _ => None,
    }
}

/// Plain-text picture of a snapshot: `.` empty, piece letters for locked
/// cells, `@` for the active piece.
pub fn render_text(snap: &GameSnapshot) -> String {
    let cols = snap.cols as usize;
    let mut rows: Vec<Vec<char>> = (0..snap.rows as usize)
        .map(|y| {
            (0..cols)
                .map(|x| match PieceKind::from_cell_value(snap.cell(x, y)) {
                    Some(kind) => kind.as_str().chars().next().unwrap_or('#'),
                    None => '.',
                })
                .collect()
        })
        .collect();

    if let Some(active) = snap.active {
        for (x, y) in active.cells() {
            if x >= 0 && y >= 0 && (x as usize) < cols && (y as usize) < rows.len() {
                rows[y as usize][x as usize] = '@';
            }
        }
    }

    let mut out = String::with_capacity(rows.len() * (cols + 1));
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}
