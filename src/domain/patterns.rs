use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Built-in seed shapes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum PatternName {
    Block,
    Beehive,
    Blinker,
    RPentomino,
    Diehard,
    Acorn,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unknown pattern {0:?}")]
    Unknown(String),
}

// Offsets are (d_row, d_col) from the origin.
const BLOCK: &[(isize, isize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
const BEEHIVE: &[(isize, isize)] = &[(0, 0), (0, 1), (1, -1), (1, 2), (2, 0), (2, 1)];
const BLINKER: &[(isize, isize)] = &[(0, 0), (1, 0), (2, 0)];
const R_PENTOMINO: &[(isize, isize)] = &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)];
const DIEHARD: &[(isize, isize)] = &[(0, 6), (1, 0), (1, 1), (2, 1), (2, 5), (2, 6), (2, 7)];
const ACORN: &[(isize, isize)] = &[(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)];

impl PatternName {
    pub const fn all() -> [PatternName; 6] {
        [
            PatternName::Block,
            PatternName::Beehive,
            PatternName::Blinker,
            PatternName::RPentomino,
            PatternName::Diehard,
            PatternName::Acorn,
        ]
    }

    /// Alive cells relative to the placement origin
    pub const fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            PatternName::Block => BLOCK,
            PatternName::Beehive => BEEHIVE,
            PatternName::Blinker => BLINKER,
            PatternName::RPentomino => R_PENTOMINO,
            PatternName::Diehard => DIEHARD,
            PatternName::Acorn => ACORN,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            PatternName::Block => "Still life",
            PatternName::Beehive => "Still life",
            PatternName::Blinker => "Oscillator (period 2)",
            PatternName::RPentomino => "Methuselah - stabilizes at gen 1103",
            PatternName::Diehard => "Methuselah - vanishes at gen 130",
            PatternName::Acorn => "Methuselah - stabilizes at gen 5206",
        }
    }

    /// Whether every offset lands inside a `rows` x `cols` grid when placed
    /// at (`row`, `col`). Placement itself never checks this.
    pub fn fits(self, rows: usize, cols: usize, row: usize, col: usize) -> bool {
        self.offsets().iter().all(|&(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols
        })
    }

    /// Absolute positions of the pattern's cells at the given origin.
    ///
    /// # Panics
    /// If an offset would land at a negative row or column.
    pub fn cells_at(self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        self.offsets().iter().map(move |&(dr, dc)| {
            let r = row
                .checked_add_signed(dr)
                .unwrap_or_else(|| panic!("{self} row offset {dr} underflows origin row {row}"));
            let c = col
                .checked_add_signed(dc)
                .unwrap_or_else(|| panic!("{self} column offset {dc} underflows origin column {col}"));
            (r, c)
        })
    }
}

impl fmt::Display for PatternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatternName::Block => "Block",
            PatternName::Beehive => "Beehive",
            PatternName::Blinker => "Blinker",
            PatternName::RPentomino => "R-pentomino",
            PatternName::Diehard => "Diehard",
            PatternName::Acorn => "Acorn",
        };
        f.write_str(name)
    }
}

impl FromStr for PatternName {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(PatternName::Block),
            "beehive" => Ok(PatternName::Beehive),
            "blinker" => Ok(PatternName::Blinker),
            "r-pentomino" | "rpentomino" => Ok(PatternName::RPentomino),
            "diehard" => Ok(PatternName::Diehard),
            "acorn" => Ok(PatternName::Acorn),
            _ => Err(PatternError::Unknown(s.to_owned())),
        }
    }
}
