use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;
use log::LevelFilter;
use ships::prelude::*;
use ships::{init_logging_with_default, BOARD_SIZE};

/// `Forbidden` marks exactly the non-ship neighbours of ships, and the map
/// covers the whole grid.
fn spacing_holds(board: &GridBoard) -> bool {
    let zone = board.forbidden_zone();
    board.data().len() == (board.size() as usize).pow(2)
        && board
            .data()
            .iter()
            .all(|(c, s)| (*s == CellState::Forbidden) == zone.contains(c))
}

fn random_coord(rng: &mut SmallRng) -> Coord {
    Coord::new(rng.random_range(0..BOARD_SIZE), rng.random_range(0..BOARD_SIZE))
}

fn main() -> anyhow::Result<()> {
    // stdout carries the JSON summary, so only errors are logged by default
    init_logging_with_default(LevelFilter::Error);
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <events>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let events: usize = args[2].parse()?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = GameSession::new(MemoryStore::new());
    let mut toggles = 0usize;
    let mut rejected = 0usize;
    let mut placement_checks = 0usize;
    let mut invariants_held = true;

    for _ in 0..events {
        let side = if rng.random_bool(0.5) {
            BoardSide::Own
        } else {
            BoardSide::Opponent
        };
        let coord = random_coord(&mut rng);
        match rng.random_range(0..100u32) {
            0..=49 => {
                let board = session.board_mut(side);
                if board.click(coord)?.is_some() {
                    toggles += 1;
                }
                board.clear_touched();
            }
            50..=69 => {
                let steps = rng.random_range(1..6);
                let board = session.board_mut(side);
                board.pointer_down(coord)?;
                let mut cur = coord;
                for _ in 0..steps {
                    let next: Vec<Coord> = cur.neighbors(BOARD_SIZE).collect();
                    cur = next[rng.random_range(0..next.len())];
                    board.pointer_move(cur)?;
                }
                board.pointer_up();
                board.click(cur)?;
                board.clear_touched();
            }
            70..=79 => {
                let board = session.board_mut(side);
                board.hover_enter(coord)?;
                board.hover_exit(coord)?;
            }
            80..=89 => {
                if session.start_battle().is_err() {
                    rejected += 1;
                }
            }
            90..=95 => {
                if session.end_battle().is_err() {
                    rejected += 1;
                }
            }
            _ => session.start_new_game(),
        }
        if session.own().is_placing() {
            placement_checks += 1;
            invariants_held &= spacing_holds(session.own());
        }
        invariants_held &= session.opponent().data().len() == (BOARD_SIZE as usize).pow(2);
    }

    let result = json!({
        "seed": seed,
        "events": events,
        "toggles": toggles,
        "rejected_transitions": rejected,
        "records": session.store().len(),
        "phase": format!("{:?}", session.phase()),
        "placement_checks": placement_checks,
        "invariants_held": invariants_held,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
