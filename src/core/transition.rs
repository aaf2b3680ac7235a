//! Cell transition tables for placement and marking clicks.

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::BTreeMap;

use super::cell::CellState;

/// Explicit `current -> next` mapping of cell states. States without an
/// entry are left untouched by a click.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    map: BTreeMap<CellState, CellState>,
}

impl TransitionTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builder-style insertion, replacing any existing entry for `from`.
    pub fn with(mut self, from: CellState, to: CellState) -> Self {
        self.map.insert(from, to);
        self
    }

    /// Fixed table used while placing ships.
    pub fn placement() -> Self {
        Self::empty()
            .with(CellState::Empty, CellState::Ship)
            .with(CellState::Ship, CellState::Empty)
            .with(CellState::Forbidden, CellState::Ship)
    }

    /// Six-state toggle between every state and its hit counterpart.
    pub fn full_marking() -> Self {
        Self::empty()
            .with(CellState::Empty, CellState::Hit)
            .with(CellState::Hit, CellState::Empty)
            .with(CellState::Ship, CellState::HitShip)
            .with(CellState::HitShip, CellState::Ship)
            .with(CellState::Forbidden, CellState::HitForbidden)
            .with(CellState::HitForbidden, CellState::Forbidden)
    }

    /// Three-state hit progression `Empty -> Hit -> HitShip -> Empty`.
    pub fn opponent_marking() -> Self {
        Self::empty()
            .with(CellState::Empty, CellState::Hit)
            .with(CellState::Hit, CellState::HitShip)
            .with(CellState::HitShip, CellState::Empty)
    }

    pub fn next(&self, current: CellState) -> Option<CellState> {
        self.map.get(&current).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
