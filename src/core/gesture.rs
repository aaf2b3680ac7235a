//! Pointer gesture tracking for drag-to-toggle.
//!
//! A gesture spans pointer-down to pointer-up. Every cell toggled during a
//! gesture is recorded in a touched set, so dragging across a cell or the
//! click that trails a drag never toggles the same cell twice. The set
//! outlives pointer-up and is cleared by the owner after
//! [`DRAG_CLEAR_DELAY_MS`](super::config::DRAG_CLEAR_DELAY_MS).

#[cfg(not(feature = "std"))]
use alloc::{collections::BTreeSet, vec::Vec};
#[cfg(feature = "std")]
use std::{collections::BTreeSet, vec::Vec};

use super::coord::Coord;

#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    pointer_down: bool,
    origin: Option<Coord>,
    dragging: bool,
    touched: BTreeSet<Coord>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_touched(&self, coord: Coord) -> bool {
        self.touched.contains(&coord)
    }

    pub fn touched(&self) -> &BTreeSet<Coord> {
        &self.touched
    }

    pub fn pointer_down(&mut self, coord: Coord) {
        self.pointer_down = true;
        self.origin = Some(coord);
        self.dragging = false;
    }

    /// Cells to toggle because the pointer entered `coord` while held down.
    ///
    /// The origin cell only joins once the pointer has left it, so a plain
    /// click never counts as a drag.
    pub fn pointer_move(&mut self, coord: Coord) -> Vec<Coord> {
        let mut out = Vec::new();
        if !self.pointer_down {
            return out;
        }
        if !self.dragging {
            match self.origin {
                Some(origin) if origin == coord => return out,
                Some(origin) => {
                    self.dragging = true;
                    if self.touched.insert(origin) {
                        out.push(origin);
                    }
                }
                None => self.dragging = true,
            }
        }
        if self.touched.insert(coord) {
            out.push(coord);
        }
        out
    }

    pub fn pointer_up(&mut self) {
        self.pointer_down = false;
        self.origin = None;
        self.dragging = false;
    }

    /// Returns `true` when a click on `coord` should toggle it.
    pub fn click(&mut self, coord: Coord) -> bool {
        self.touched.insert(coord)
    }

    /// Deferred clear scheduled after pointer-up.
    pub fn clear_touched(&mut self) {
        self.touched.clear();
    }

    /// Drops every trace of the current gesture.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_within_origin_is_not_a_drag() {
        let mut t = DragTracker::new();
        t.pointer_down(Coord::new(2, 2));
        assert!(t.is_pointer_down());
        assert!(t.pointer_move(Coord::new(2, 2)).is_empty());
        assert!(!t.is_dragging());
        t.pointer_up();
        assert!(!t.is_pointer_down());
        assert!(t.click(Coord::new(2, 2)));
    }

    #[test]
    fn drag_toggles_origin_then_each_cell_once() {
        let mut t = DragTracker::new();
        t.pointer_down(Coord::new(0, 0));
        assert_eq!(
            t.pointer_move(Coord::new(1, 0)),
            vec![Coord::new(0, 0), Coord::new(1, 0)]
        );
        assert_eq!(t.pointer_move(Coord::new(2, 0)), vec![Coord::new(2, 0)]);
        assert!(t.pointer_move(Coord::new(1, 0)).is_empty());
        t.pointer_up();
        // trailing click on the last cell of the drag
        assert!(!t.click(Coord::new(2, 0)));
        t.clear_touched();
        assert!(t.click(Coord::new(2, 0)));
    }

    #[test]
    fn move_without_pointer_down_is_ignored() {
        let mut t = DragTracker::new();
        assert!(t.pointer_move(Coord::new(3, 3)).is_empty());
        assert!(t.touched().is_empty());
    }
}
