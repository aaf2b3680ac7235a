//! Session lifecycle over the two boards of one game.

#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

use log::{info, warn};

use super::board::{BoardSnapshot, GridBoard};
use super::cell::BoardPhase;
use super::common::{BoardError, SessionAction, SessionError};
use super::config::BoardConfig;

/// Identifier assigned by a [`RecordStore`] to a finished game.
pub type RecordId = u64;

/// Session-level phase, advanced only forward until a new game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Preparing,
    Battle,
    Finished,
}

/// Selects one of the session's two boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardSide {
    Own,
    Opponent,
}

impl BoardSide {
    pub const BOTH: [BoardSide; 2] = [BoardSide::Own, BoardSide::Opponent];
}

/// Final state of both boards, produced when a battle ends.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    #[cfg_attr(feature = "std", serde(rename = "me"))]
    pub own: BoardSnapshot,
    pub opponent: BoardSnapshot,
}

/// External sink for finished games. The session never reads records back.
pub trait RecordStore {
    type Error: core::fmt::Display;

    fn add(&mut self, snapshot: GameSnapshot) -> Result<RecordId, Self::Error>;
}

pub struct GameSession<S: RecordStore> {
    own: GridBoard,
    opponent: GridBoard,
    phase: GamePhase,
    store: S,
}

impl<S: RecordStore> GameSession<S> {
    /// Standard session: 10×10 boards, own board open for placement.
    pub fn new(store: S) -> Self {
        Self::from_boards(GridBoard::default_own(), GridBoard::default_opponent(), store)
    }

    /// Session over boards built from custom configs.
    pub fn with_config(
        own: BoardConfig,
        opponent: BoardConfig,
        store: S,
    ) -> Result<Self, BoardError> {
        Ok(Self::from_boards(
            GridBoard::new(own)?,
            GridBoard::new(opponent)?,
            store,
        ))
    }

    fn from_boards(mut own: GridBoard, mut opponent: GridBoard, store: S) -> Self {
        own.set_phase(BoardPhase::Placement);
        opponent.set_phase(BoardPhase::Disabled);
        Self {
            own,
            opponent,
            phase: GamePhase::Preparing,
            store,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn own(&self) -> &GridBoard {
        &self.own
    }

    pub fn opponent(&self) -> &GridBoard {
        &self.opponent
    }

    pub fn board(&self, side: BoardSide) -> &GridBoard {
        match side {
            BoardSide::Own => &self.own,
            BoardSide::Opponent => &self.opponent,
        }
    }

    pub fn board_mut(&mut self, side: BoardSide) -> &mut GridBoard {
        match side {
            BoardSide::Own => &mut self.own,
            BoardSide::Opponent => &mut self.opponent,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// `Preparing -> Battle`; both boards switch to marking.
    pub fn start_battle(&mut self) -> Result<(), SessionError> {
        self.require(GamePhase::Preparing, SessionAction::StartBattle)?;
        self.phase = GamePhase::Battle;
        self.own.set_phase(BoardPhase::Marking);
        self.opponent.set_phase(BoardPhase::Marking);
        info!("battle started");
        Ok(())
    }

    /// `Battle -> Finished`; snapshots both boards into the store and
    /// disables input. The phase change stands even if the store fails.
    pub fn end_battle(&mut self) -> Result<RecordId, SessionError> {
        self.require(GamePhase::Battle, SessionAction::EndBattle)?;
        let snapshot = self.snapshot();
        self.phase = GamePhase::Finished;
        self.own.set_phase(BoardPhase::Disabled);
        self.opponent.set_phase(BoardPhase::Disabled);
        let id = self
            .store
            .add(snapshot)
            .map_err(|e| SessionError::Store(e.to_string()))?;
        info!("battle finished, saved as record {}", id);
        Ok(id)
    }

    /// Any phase `-> Preparing`; both boards are re-initialised and the own
    /// board opens for placement.
    pub fn start_new_game(&mut self) {
        self.phase = GamePhase::Preparing;
        self.own.init();
        self.opponent.init();
        self.own.set_phase(BoardPhase::Placement);
        info!("new game");
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            own: self.own.snapshot(),
            opponent: self.opponent.snapshot(),
        }
    }

    fn require(&self, expected: GamePhase, action: SessionAction) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            warn!("rejected {} in phase {:?}", action, self.phase);
            Err(SessionError::InvalidTransition {
                phase: self.phase,
                action,
            })
        }
    }
}

