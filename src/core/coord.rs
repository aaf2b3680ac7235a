//! Grid coordinates used directly as board map keys.

use core::fmt;
use core::str::FromStr;

/// Zero-based `(column, row)` position on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(from = "(u8, u8)", into = "(u8, u8)"))]
pub struct Coord {
    pub col: u8,
    pub row: u8,
}

static OFFSETS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Coord {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    pub fn in_bounds(self, size: u8) -> bool {
        self.col < size && self.row < size
    }

    /// The 8-connected neighbours that lie inside a `size`×`size` board.
    pub fn neighbors(self, size: u8) -> impl Iterator<Item = Coord> {
        let (col, row) = (self.col as i16, self.row as i16);
        let size = size as i16;
        OFFSETS.iter().filter_map(move |&(dc, dr)| {
            let (c, r) = (col + dc, row + dr);
            if c < 0 || r < 0 || c >= size || r >= size {
                None
            } else {
                Some(Coord::new(c as u8, r as u8))
            }
        })
    }

    /// Every coordinate of a `size`×`size` board in map order.
    pub fn all(size: u8) -> impl Iterator<Item = Coord> {
        (0..size).flat_map(move |col| (0..size).map(move |row| Coord::new(col, row)))
    }
}

impl From<(u8, u8)> for Coord {
    fn from((col, row): (u8, u8)) -> Self {
        Self::new(col, row)
    }
}

impl From<Coord> for (u8, u8) {
    fn from(c: Coord) -> Self {
        (c.col, c.row)
    }
}

impl fmt::Display for Coord {
    /// Column letter followed by the one-based row, e.g. `B5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", b'A'.wrapping_add(self.col) as char, self.row as u16 + 1)
    }
}

/// Errors produced when parsing a coordinate label such as `C7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    Empty,
    InvalidColumn(char),
    InvalidRow,
}

impl fmt::Display for CoordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordParseError::Empty => write!(f, "Empty coordinate"),
            CoordParseError::InvalidColumn(c) => {
                write!(f, "Invalid column '{}' - must be a letter A-Z", c)
            }
            CoordParseError::InvalidRow => write!(f, "Row must be a number starting at 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordParseError {}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let col_ch = chars.next().ok_or(CoordParseError::Empty)?.to_ascii_uppercase();
        if !col_ch.is_ascii_uppercase() {
            return Err(CoordParseError::InvalidColumn(col_ch));
        }
        let row: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| CoordParseError::InvalidRow)?;
        if row == 0 {
            return Err(CoordParseError::InvalidRow);
        }
        Ok(Coord::new(col_ch as u8 - b'A', row - 1))
    }
}
