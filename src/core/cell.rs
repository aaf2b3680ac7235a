//! Per-cell state and the board interaction mode.

/// State of a single grid cell. Exactly one holds per cell at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum CellState {
    Empty,
    Ship,
    /// Non-ship cell touching a ship; no ship may be placed here.
    Forbidden,
    Hit,
    HitShip,
    HitForbidden,
}

impl CellState {
    pub const ALL: [CellState; 6] = [
        CellState::Empty,
        CellState::Ship,
        CellState::Forbidden,
        CellState::Hit,
        CellState::HitShip,
        CellState::HitForbidden,
    ];

    /// Returns `true` for the three hit variants.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            CellState::Hit | CellState::HitShip | CellState::HitForbidden
        )
    }

    /// Single character used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Ship => '#',
            CellState::Forbidden => 'x',
            CellState::Hit => 'o',
            CellState::HitShip => 'X',
            CellState::HitForbidden => '*',
        }
    }
}

/// Interaction mode of one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardPhase {
    /// All input is ignored.
    Disabled,
    /// Clicks place and remove ships; forbidden zones are maintained.
    Placement,
    /// Clicks follow the board's marking transition table.
    Marking,
}
