#![cfg(feature = "std")]

use std::fmt::Write;

use crate::core::{BoardSide, CellState, CellView, Coord, GamePhase, GameSession, GridBoard, RecordStore};
use crate::driver::Renderer;
use crate::store::StoredRecord;

/// Status line shown above the boards.
pub fn phase_banner(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Preparing => "Preparing to battle... put ships on your board!",
        GamePhase::Battle => "Battle started!",
        GamePhase::Finished => "Battle finished!",
    }
}

fn header(size: u8) -> String {
    let mut out = String::from("    ");
    for c in 0..size {
        let _ = write!(out, " {} ", (b'A' + c) as char);
    }
    out
}

fn board_rows(size: u8, cell: impl Fn(Coord) -> (CellState, bool)) -> Vec<String> {
    let mut rows = vec![header(size)];
    for r in 0..size {
        let mut line = format!(" {:2} ", r as u16 + 1);
        for c in 0..size {
            let (state, hovered) = cell(Coord::new(c, r));
            if hovered {
                let _ = write!(line, "[{}]", state.glyph());
            } else {
                let _ = write!(line, " {} ", state.glyph());
            }
        }
        rows.push(line);
    }
    rows
}

/// Text picture of one board: column letters, row numbers, one glyph per
/// cell with hovered cells bracketed, and the title underneath.
pub fn render_board(board: &GridBoard) -> String {
    let mut rows = board_rows(board.size(), |c| {
        (
            board.get(c).unwrap_or(CellState::Empty),
            board.is_hovered(c),
        )
    });
    rows.push(format!("    {} ({:?})", board.title(), board.phase()));
    rows.join("\n")
}

/// Both boards side by side under the phase banner.
pub fn render_session<S: RecordStore>(session: &GameSession<S>) -> String {
    let left: Vec<String> = render_board(session.own()).lines().map(String::from).collect();
    let right: Vec<String> = render_board(session.opponent())
        .lines()
        .map(String::from)
        .collect();
    let width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = format!("{}\n\n", phase_banner(session.phase()));
    for (l, r) in left.iter().zip(right.iter()) {
        let _ = writeln!(out, "{:<width$}    {}", l, r, width = width);
    }
    out
}

/// Both boards of a stored game, with its id and date.
pub fn render_record(record: &StoredRecord) -> String {
    let size = record
        .data
        .own
        .entries()
        .last()
        .map(|(c, _)| c.col.max(c.row) + 1)
        .unwrap_or(0);
    let lookup = |snap: &crate::core::BoardSnapshot, c: Coord| {
        (snap.get(c).unwrap_or(CellState::Empty), false)
    };
    let left = board_rows(size, |c| lookup(&record.data.own, c));
    let right = board_rows(size, |c| lookup(&record.data.opponent, c));
    let width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = format!(
        "Game #{} from {}\n\n",
        record.id,
        record.created_at.format("%Y-%m-%d %H:%M")
    );
    for (l, r) in left.iter().zip(right.iter()) {
        let _ = writeln!(out, "{:<width$}    {}", l, r, width = width);
    }
    out
}

/// One summary line per stored game.
pub fn render_history(records: &[StoredRecord]) -> String {
    if records.is_empty() {
        return "No finished games yet.".to_string();
    }
    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "#{:<4} {}  ships {:>2}  sunk {:>2}  shots {:>2}",
            record.id,
            record.created_at.format("%Y-%m-%d"),
            record.data.own.count(CellState::Ship) + record.data.own.count(CellState::HitShip),
            record.data.opponent.count(CellState::HitShip),
            record
                .data
                .opponent
                .entries()
                .iter()
                .filter(|(_, s)| s.is_hit())
                .count(),
        );
    }
    out
}

/// Renderer printing to stdout.
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn draw(&mut self, side: BoardSide, board: &GridBoard, changed: &[CellView]) {
        let full = (board.size() as usize).pow(2);
        if !changed.is_empty() && changed.len() < full {
            let cells: Vec<String> = changed
                .iter()
                .map(|v| format!("{}={:?}", v.coord, v.state))
                .take(8)
                .collect();
            let more = changed.len().saturating_sub(cells.len());
            if more > 0 {
                println!("{:?} changed: {} (+{} more)", side, cells.join(" "), more);
            } else {
                println!("{:?} changed: {}", side, cells.join(" "));
            }
        }
        println!("{}\n", render_board(board));
    }

    fn banner(&mut self, phase: GamePhase) {
        println!("\n== {} ==\n", phase_banner(phase));
    }

    fn rejected(&mut self, reason: &str) {
        println!("! {}", reason);
    }
}
