//! A per-cell [`CellStatus`] overlay matching a grid's dimensions.

use crate::cell::CellStatus;
use crate::geom::Coord;

/// One [`CellStatus`] per cell of a `size x size` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMap {
    statuses: Vec<CellStatus>,
    size: usize,
}

impl StatusMap {
    /// Create an overlay with every cell [`Unvisited`](CellStatus::Unvisited).
    pub fn new(size: usize) -> Self {
        Self {
            statuses: vec![CellStatus::Unvisited; size * size],
            size,
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (r, col) = (c.row as usize, c.col as usize);
        (r < self.size && col < self.size).then_some(r * self.size + col)
    }

    /// Status at `c`, or `None` if out of bounds.
    pub fn get(&self, c: Coord) -> Option<CellStatus> {
        self.index(c).map(|i| self.statuses[i])
    }

    /// Set the status at `c`. Returns `false` (and does nothing) if `c` is
    /// out of bounds.
    pub fn set(&mut self, c: Coord, status: CellStatus) -> bool {
        match self.index(c) {
            Some(i) => {
                self.statuses[i] = status;
                true
            }
            None => false,
        }
    }

    /// Set every cell back to [`Unvisited`](CellStatus::Unvisited).
    pub fn reset(&mut self) {
        self.statuses.fill(CellStatus::Unvisited);
    }

    /// Number of cells currently holding `status`.
    pub fn count(&self, status: CellStatus) -> usize {
        self.statuses.iter().filter(|&&s| s == status).count()
    }

    /// Row-major iterator over `(Coord, CellStatus)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellStatus)> + '_ {
        self.statuses.iter().enumerate().map(|(i, &s)| {
            let c = Coord::new((i / self.size) as i32, (i % self.size) as i32);
            (c, s)
        })
    }

    /// Coordinates holding `status`, row-major.
    pub fn cells_with(&self, status: CellStatus) -> Vec<Coord> {
        self.iter()
            .filter(|&(_, s)| s == status)
            .map(|(c, _)| c)
            .collect()
    }
}
