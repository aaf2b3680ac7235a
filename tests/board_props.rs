use proptest::prelude::*;
use ships::{BoardPhase, CellState, Coord, GridBoard, BOARD_SIZE};

fn coord() -> impl Strategy<Value = Coord> {
    (0..BOARD_SIZE, 0..BOARD_SIZE).prop_map(|(col, row)| Coord::new(col, row))
}

fn placing() -> GridBoard {
    let mut board = GridBoard::default_own();
    board.set_phase(BoardPhase::Placement);
    board
}

fn forbidden_matches_zone(board: &GridBoard) -> bool {
    let zone = board.forbidden_zone();
    board
        .data()
        .iter()
        .all(|(c, s)| (*s == CellState::Forbidden) == zone.contains(c))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn forbidden_tracks_ship_neighbours(clicks in prop::collection::vec(coord(), 0..60)) {
        let mut board = placing();
        for c in clicks {
            board.toggle_cell(c).unwrap();
            prop_assert!(forbidden_matches_zone(&board));
            prop_assert_eq!(board.data().len(), (BOARD_SIZE as usize).pow(2));
        }
    }

    #[test]
    fn ships_never_touch_when_forbidden_cells_are_skipped(clicks in prop::collection::vec(coord(), 0..60)) {
        let mut board = placing();
        for c in clicks {
            if board.get(c) != Some(CellState::Forbidden) {
                board.toggle_cell(c).unwrap();
            }
        }
        for (c, s) in board.data() {
            if *s == CellState::Ship {
                for n in c.neighbors(BOARD_SIZE) {
                    prop_assert_ne!(board.get(n), Some(CellState::Ship));
                }
            }
        }
    }

    #[test]
    fn reconcile_is_idempotent(clicks in prop::collection::vec(coord(), 0..40)) {
        let mut board = placing();
        for c in clicks {
            board.toggle_cell(c).unwrap();
        }
        let before = board.snapshot();
        board.take_dirty();
        board.reconcile_forbidden();
        prop_assert_eq!(board.snapshot(), before);
        prop_assert!(board.take_dirty().is_empty());
    }

    #[test]
    fn full_marking_double_toggle_restores(
        clicks in prop::collection::vec(coord(), 0..30),
        target in coord(),
    ) {
        let mut board = placing();
        for c in clicks {
            board.toggle_cell(c).unwrap();
        }
        board.set_phase(BoardPhase::Marking);
        let before = board.snapshot();
        let first = board.toggle_cell(target).unwrap();
        prop_assert!(first.is_some());
        board.toggle_cell(target).unwrap();
        prop_assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn label_parses_back(c in coord()) {
        prop_assert_eq!(c.to_string().parse::<Coord>().unwrap(), c);
    }
}
