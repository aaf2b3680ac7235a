//! Commonly used types and utilities for ease of import.

pub use crate::core::{
    BoardConfig, BoardPhase, BoardSide, CellState, Coord, GamePhase, GameSession, GridBoard,
    RecordStore, TransitionTable,
};

#[cfg(feature = "std")]
pub use crate::{
    ChannelSource, InputEvent, JsonFileStore, MemoryStore, SessionDriver, TextRenderer,
};
