use super::common::BoardError;
use super::transition::TransitionTable;

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

pub const BOARD_SIZE: u8 = 10;

/// Largest board that still gets single-letter column labels.
pub const MAX_BOARD_SIZE: u8 = 26;

/// Delay between pointer-up and clearing a board's drag-touched set. It has
/// to outlive the click event that trails the same gesture.
pub const DRAG_CLEAR_DELAY_MS: u64 = 100;

/// Runtime configuration of a single [`GridBoard`](super::board::GridBoard).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    pub size: u8,
    /// Transitions applied by clicks while the board is in `Marking`.
    pub marking: TransitionTable,
    pub title: String,
}

impl BoardConfig {
    /// Config for the player's own board: full six-state marking toggle.
    pub fn own() -> Self {
        Self {
            size: BOARD_SIZE,
            marking: TransitionTable::full_marking(),
            title: "Your board".to_string(),
        }
    }

    /// Config for the opponent board: three-state hit progression.
    pub fn opponent() -> Self {
        Self {
            size: BOARD_SIZE,
            marking: TransitionTable::opponent_marking(),
            title: "Opponent".to_string(),
        }
    }

    pub fn with_size(mut self, size: u8) -> Self {
        self.size = size;
        self
    }

    pub fn validate(&self) -> Result<(), BoardError> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize { size: self.size });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            marking: TransitionTable::full_marking(),
            title: "Board".to_string(),
        }
    }
}
