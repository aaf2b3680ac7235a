//! Core board state machine (no_std compatible)
//!
//! This module contains the pure game logic: cell states, the grid board with
//! its placement spacing rules, and the session lifecycle. It only needs
//! `alloc` and the `log` facade, so it can be compiled to WebAssembly and
//! driven by any rendering front end.

pub mod board;
pub mod cell;
pub mod common;
pub mod config;
pub mod coord;
pub mod game;
pub mod gesture;
pub mod transition;

// Re-export commonly used types
pub use board::{BoardSnapshot, CellView, GridBoard};
pub use cell::{BoardPhase, CellState};
pub use common::{BoardError, SessionAction, SessionError};
pub use config::*;
pub use coord::{Coord, CoordParseError};
pub use game::{BoardSide, GamePhase, GameSession, GameSnapshot, RecordId, RecordStore};
pub use gesture::DragTracker;
pub use transition::TransitionTable;
