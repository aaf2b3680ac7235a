//! One player's grid: cell states, interaction phase and the placement
//! spacing rules.

#[cfg(not(feature = "std"))]
use alloc::{
    collections::{BTreeMap, BTreeSet},
    string::String,
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{
    collections::{BTreeMap, BTreeSet},
    string::String,
    vec::Vec,
};

use log::{debug, trace};

use super::cell::{BoardPhase, CellState};
use super::common::BoardError;
use super::config::BoardConfig;
use super::coord::Coord;
use super::gesture::DragTracker;
use super::transition::TransitionTable;

/// A changed cell handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub coord: Coord,
    pub state: CellState,
    pub hovered: bool,
}

/// Point-in-time copy of a board's cells, in coordinate order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(from = "Vec<(Coord, CellState)>", into = "Vec<(Coord, CellState)>")
)]
pub struct BoardSnapshot {
    entries: Vec<(Coord, CellState)>,
}

impl From<Vec<(Coord, CellState)>> for BoardSnapshot {
    /// Entries may come in any order; the first one wins for a repeated
    /// coordinate.
    fn from(mut entries: Vec<(Coord, CellState)>) -> Self {
        entries.sort_by_key(|(c, _)| *c);
        entries.dedup_by_key(|(c, _)| *c);
        Self { entries }
    }
}

impl From<BoardSnapshot> for Vec<(Coord, CellState)> {
    fn from(snapshot: BoardSnapshot) -> Self {
        snapshot.entries
    }
}

impl BoardSnapshot {
    pub fn entries(&self) -> &[(Coord, CellState)] {
        &self.entries
    }

    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.entries
            .binary_search_by_key(&coord, |(c, _)| *c)
            .ok()
            .map(|i| self.entries[i].1)
    }

    pub fn count(&self, state: CellState) -> usize {
        self.entries.iter().filter(|(_, s)| *s == state).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct GridBoard {
    size: u8,
    title: String,
    phase: BoardPhase,
    placement: TransitionTable,
    marking: TransitionTable,
    cells: BTreeMap<Coord, CellState>,
    hovered: BTreeSet<Coord>,
    gesture: DragTracker,
    dirty: BTreeSet<Coord>,
}

impl GridBoard {
    /// Create a disabled board with every cell `Empty`.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// Player's own board with the standard config.
    pub fn default_own() -> Self {
        Self::build(BoardConfig::own())
    }

    /// Opponent board with the standard config.
    pub fn default_opponent() -> Self {
        Self::build(BoardConfig::opponent())
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn phase(&self) -> BoardPhase {
        self.phase
    }

    pub fn is_disabled(&self) -> bool {
        self.phase == BoardPhase::Disabled
    }

    pub fn is_placing(&self) -> bool {
        self.phase == BoardPhase::Placement
    }

    pub fn is_marking(&self) -> bool {
        self.phase == BoardPhase::Marking
    }

    pub fn marking_table(&self) -> &TransitionTable {
        &self.marking
    }

    /// Full coordinate-to-state map. Always holds exactly `size²` entries.
    pub fn data(&self) -> &BTreeMap<Coord, CellState> {
        &self.cells
    }

    pub fn get(&self, coord: Coord) -> Option<CellState> {
        self.cells.get(&coord).copied()
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.values().filter(|s| **s == state).count()
    }

    pub fn is_hovered(&self, coord: Coord) -> bool {
        self.hovered.contains(&coord)
    }

    pub fn gesture(&self) -> &DragTracker {
        &self.gesture
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            entries: self.cells.iter().map(|(c, s)| (*c, *s)).collect(),
        }
    }

    /// Switch interaction mode. Cells are left as they are.
    pub fn set_phase(&mut self, phase: BoardPhase) {
        if self.phase != phase {
            debug!("{}: phase {:?} -> {:?}", self.title, self.phase, phase);
        }
        self.phase = phase;
    }

    /// Clear every cell and transient input state; the phase is kept.
    pub fn reset(&mut self) {
        let hovered = core::mem::take(&mut self.hovered);
        self.dirty.extend(hovered);
        self.gesture.reset();
        self.fill_empty();
    }

    /// `reset` followed by disabling input.
    pub fn init(&mut self) {
        self.reset();
        self.set_phase(BoardPhase::Disabled);
    }

    /// Apply the phase's transition to `coord`.
    ///
    /// Returns the new state, or `None` when the board is disabled or the
    /// current state has no entry in the active table. Placement toggles are
    /// followed by forbidden-zone reconciliation.
    pub fn toggle_cell(&mut self, coord: Coord) -> Result<Option<CellState>, BoardError> {
        self.check_bounds(coord)?;
        let table = match self.phase {
            BoardPhase::Disabled => return Ok(None),
            BoardPhase::Placement => &self.placement,
            BoardPhase::Marking => &self.marking,
        };
        let current = self.cells[&coord];
        let Some(next) = table.next(current) else {
            trace!("{}: no transition from {:?} at {}", self.title, current, coord);
            return Ok(None);
        };
        self.set(coord, next);
        debug!("{}: {} {:?} -> {:?}", self.title, coord, current, next);
        if self.phase == BoardPhase::Placement {
            self.reconcile_forbidden();
        }
        Ok(Some(next))
    }

    /// Non-ship cells 8-adjacent to at least one ship.
    pub fn forbidden_zone(&self) -> BTreeSet<Coord> {
        let size = self.size;
        self.cells
            .iter()
            .filter(|(_, s)| **s == CellState::Ship)
            .flat_map(|(c, _)| c.neighbors(size))
            .filter(|n| self.cells[n] != CellState::Ship)
            .collect()
    }

    /// Recompute forbidden marks from scratch: stale marks return to `Empty`
    /// and every non-ship neighbour of a ship becomes `Forbidden`.
    pub fn reconcile_forbidden(&mut self) {
        let stale: Vec<Coord> = self
            .cells
            .iter()
            .filter(|(_, s)| **s == CellState::Forbidden)
            .map(|(c, _)| *c)
            .collect();
        let zone = self.forbidden_zone();
        let mut cleared = 0;
        for coord in stale {
            if !zone.contains(&coord) {
                self.set(coord, CellState::Empty);
                cleared += 1;
            }
        }
        for coord in zone.iter() {
            self.set(*coord, CellState::Forbidden);
        }
        trace!(
            "{}: forbidden zone {} cells, {} cleared",
            self.title,
            zone.len(),
            cleared
        );
    }

    pub fn hover_enter(&mut self, coord: Coord) -> Result<(), BoardError> {
        self.check_bounds(coord)?;
        if !self.is_disabled() && self.hovered.insert(coord) {
            self.dirty.insert(coord);
        }
        Ok(())
    }

    pub fn hover_exit(&mut self, coord: Coord) -> Result<(), BoardError> {
        self.check_bounds(coord)?;
        if !self.is_disabled() && self.hovered.remove(&coord) {
            self.dirty.insert(coord);
        }
        Ok(())
    }

    pub fn pointer_down(&mut self, coord: Coord) -> Result<(), BoardError> {
        self.check_bounds(coord)?;
        if !self.is_disabled() {
            self.gesture.pointer_down(coord);
        }
        Ok(())
    }

    /// Pointer entered `coord` with the button held; toggles each newly
    /// dragged-over cell once per gesture.
    pub fn pointer_move(&mut self, coord: Coord) -> Result<(), BoardError> {
        self.check_bounds(coord)?;
        if self.is_disabled() {
            return Ok(());
        }
        for target in self.gesture.pointer_move(coord) {
            self.toggle_cell(target)?;
        }
        Ok(())
    }

    /// Pointer released anywhere. Touched cells stay recorded until
    /// [`clear_touched`](Self::clear_touched) runs.
    pub fn pointer_up(&mut self) {
        self.gesture.pointer_up();
    }

    /// Click on `coord`, ignored if this gesture already toggled it.
    pub fn click(&mut self, coord: Coord) -> Result<Option<CellState>, BoardError> {
        self.check_bounds(coord)?;
        if self.is_disabled() || !self.gesture.click(coord) {
            return Ok(None);
        }
        self.toggle_cell(coord)
    }

    pub fn clear_touched(&mut self) {
        self.gesture.clear_touched();
    }

    /// Drain the cells changed since the last call, in coordinate order.
    pub fn take_dirty(&mut self) -> Vec<CellView> {
        let dirty = core::mem::take(&mut self.dirty);
        dirty
            .into_iter()
            .map(|coord| CellView {
                coord,
                state: self.cells[&coord],
                hovered: self.hovered.contains(&coord),
            })
            .collect()
    }

    fn check_bounds(&self, coord: Coord) -> Result<(), BoardError> {
        if coord.in_bounds(self.size) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                col: coord.col,
                row: coord.row,
                size: self.size,
            })
        }
    }

    fn set(&mut self, coord: Coord, state: CellState) {
        if self.cells.insert(coord, state) != Some(state) {
            self.dirty.insert(coord);
        }
    }

    fn build(config: BoardConfig) -> Self {
        let mut board = GridBoard {
            size: config.size,
            title: config.title,
            phase: BoardPhase::Disabled,
            placement: TransitionTable::placement(),
            marking: config.marking,
            cells: BTreeMap::new(),
            hovered: BTreeSet::new(),
            gesture: DragTracker::new(),
            dirty: BTreeSet::new(),
        };
        board.fill_empty();
        board
    }

    fn fill_empty(&mut self) {
        for coord in Coord::all(self.size) {
            self.set(coord, CellState::Empty);
        }
    }
}

impl Default for GridBoard {
    fn default() -> Self {
        Self::build(BoardConfig::default())
    }
}

impl core::fmt::Debug for GridBoard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "GridBoard {{ title: {:?}, phase: {:?}", self.title, self.phase)?;
        for row in 0..self.size {
            write!(f, "  ")?;
            for col in 0..self.size {
                write!(f, "{}", self.cells[&Coord::new(col, row)].glyph())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
