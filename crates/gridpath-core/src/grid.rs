//! The [`Grid`] type: a fixed-size square arrangement of [`Cell`]s.
//!
//! Cells are stored row-major in a flat buffer. Adjacency is never stored;
//! [`Grid::neighbors_of`] derives it from the current passability flags each
//! time it is called.

use std::fmt;

use smallvec::SmallVec;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::Coord;

/// Up to four orthogonal neighbours of a cell.
pub type Neighbors = SmallVec<[Coord; 4]>;

/// A square `size x size` grid of passable and barrier cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    size: usize,
}

impl Grid {
    /// Largest side length; keeps every flat index representable as `i32`.
    pub const MAX_SIZE: usize = 46_340;

    /// Create a new grid with every cell passable.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        if size > Self::MAX_SIZE {
            return Err(GridError::DimensionTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self {
            cells: vec![Cell::OPEN; size * size],
            size,
        })
    }

    /// Build a grid from text rows of `.` (passable) and `#` (barrier).
    ///
    /// Blank lines and surrounding whitespace are ignored. The number of rows
    /// must equal the length of every row.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let mut grid = Self::new(rows.len())?;
        for (r, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != rows.len() {
                return Err(GridError::NotSquare {
                    rows: rows.len(),
                    row: r,
                    len,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let coord = Coord::new(r as i32, c as i32);
                let cell = match ch {
                    '.' => Cell::OPEN,
                    '#' => Cell::BARRIER,
                    _ => return Err(GridError::InvalidChar { ch, coord }),
                };
                grid.cells[r * grid.size + c] = cell;
            }
        }
        Ok(grid)
    }

    /// Side length `N`.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`N * N`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid holds at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(row, col)` lies inside the grid.
    #[inline]
    pub fn is_in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.is_in_bounds(c.row, c.col)
    }

    /// Flat row-major index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.size + c.col as usize)
    }

    /// Coordinate for a flat row-major index.
    #[inline]
    pub fn coord(&self, idx: usize) -> Coord {
        Coord::new((idx / self.size) as i32, (idx % self.size) as i32)
    }

    /// Like [`index`](Grid::index) but reports the bad coordinate.
    pub fn checked_index(&self, c: Coord) -> Result<usize, GridError> {
        self.index(c).ok_or(GridError::OutOfBounds {
            coord: c,
            size: self.size,
        })
    }

    /// The cell at `c`.
    pub fn cell(&self, c: Coord) -> Result<Cell, GridError> {
        Ok(self.cells[self.checked_index(c)?])
    }

    /// Whether the cell at `c` can be walked through.
    pub fn is_passable(&self, c: Coord) -> Result<bool, GridError> {
        self.cell(c).map(|cell| cell.passable)
    }

    /// Mark the cell at `c` passable or not.
    pub fn set_passable(&mut self, c: Coord, passable: bool) -> Result<(), GridError> {
        let i = self.checked_index(c)?;
        self.cells[i].passable = passable;
        Ok(())
    }

    /// Set every cell to the same passability.
    pub fn fill(&mut self, passable: bool) {
        self.cells.fill(Cell::from(passable));
    }

    /// Number of barrier cells.
    pub fn count_barriers(&self) -> usize {
        self.cells.iter().filter(|c| c.is_barrier()).count()
    }

    /// Row-major iterator over `(Coord, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (self.coord(i), cell))
    }

    /// Passable, in-bounds orthogonal neighbours of `c` in the order down,
    /// up, left, right.
    ///
    /// The cell at `c` itself may be a barrier; only the neighbours are
    /// filtered.
    pub fn neighbors_of(&self, c: Coord) -> Result<Neighbors, GridError> {
        self.checked_index(c)?;
        Ok(c.neighbors_4()
            .into_iter()
            .filter(|&n| self.index(n).is_some_and(|i| self.cells[i].passable))
            .collect())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for cell in row {
                f.write_str(if cell.passable { "." } else { "#" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
