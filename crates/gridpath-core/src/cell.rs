//! The [`Cell`] passability flag and the [`CellStatus`] search overlay.

/// A single grid cell.
///
/// Only passability is stored on the grid itself; search progress lives in a
/// separate [`StatusMap`](crate::StatusMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub passable: bool,
}

impl Cell {
    /// A passable cell.
    pub const OPEN: Self = Self { passable: true };
    /// A barrier.
    pub const BARRIER: Self = Self { passable: false };

    /// Whether this cell blocks movement.
    #[inline]
    pub const fn is_barrier(self) -> bool {
        !self.passable
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::OPEN
    }
}

impl From<bool> for Cell {
    fn from(passable: bool) -> Self {
        Self { passable }
    }
}

/// Per-cell visibility state exposed while a search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    /// Not yet discovered.
    #[default]
    Unvisited,
    /// Discovered and waiting in the frontier.
    Open,
    /// Fully expanded.
    Closed,
    Start,
    End,
    /// Part of the reconstructed route between start and end.
    Path,
}

impl CellStatus {
    /// Whether this status marks one of the two search endpoints.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        for s in [CellStatus::Open, CellStatus::Closed, CellStatus::Path] {
            let json = serde_json::to_string(&s).unwrap();
            let back: CellStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(s, back);
        }
    }
}
