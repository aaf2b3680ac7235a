//! Error types shared by the board and session state machines.

use super::game::GamePhase;

#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

/// Errors returned by [`GridBoard`](super::board::GridBoard) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside `[0, size)²`.
    OutOfBounds { col: u8, row: u8, size: u8 },
    /// Board size is zero or too large to label.
    InvalidSize { size: u8 },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { col, row, size } => {
                write!(f, "Coordinate ({}, {}) is outside a {}x{} board", col, row, size, size)
            }
            BoardError::InvalidSize { size } => write!(f, "Unsupported board size {}", size),
        }
    }
}

/// Session lifecycle actions, used to report rejected transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    StartBattle,
    EndBattle,
}

impl core::fmt::Display for SessionAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SessionAction::StartBattle => write!(f, "start battle"),
            SessionAction::EndBattle => write!(f, "end battle"),
        }
    }
}

/// Errors returned by [`GameSession`](super::game::GameSession).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The action is not allowed from the current phase; nothing changed.
    InvalidTransition { phase: GamePhase, action: SessionAction },
    /// The record store refused the finished game.
    Store(String),
}

impl core::fmt::Display for SessionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SessionError::InvalidTransition { phase, action } => {
                write!(f, "Cannot {} while the game is {:?}", action, phase)
            }
            SessionError::Store(msg) => write!(f, "Record store error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for SessionError {}

