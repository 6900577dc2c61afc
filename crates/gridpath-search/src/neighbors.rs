use gridpath_core::{Coord, Grid, Neighbors};

/// Adjacency lists captured from a [`Grid`] at one moment.
///
/// A search takes one snapshot before its main loop; the grid is treated as
/// frozen for the rest of the run. Barrier edits made between runs are
/// picked up by the next snapshot.
#[derive(Debug, Clone)]
pub struct Adjacency {
    lists: Vec<Neighbors>,
}

impl Adjacency {
    /// Compute the passable orthogonal neighbours of every cell of `grid`.
    pub fn snapshot(grid: &Grid) -> Self {
        let lists = grid
            .iter()
            .map(|(c, _)| grid.neighbors_of(c).unwrap_or_default())
            .collect();
        Self { lists }
    }

    /// Neighbours of the cell at flat index `idx`, empty if out of range.
    #[inline]
    pub fn of(&self, idx: usize) -> &[Coord] {
        match self.lists.get(idx) {
            Some(l) => l.as_slice(),
            None => &[],
        }
    }

    /// Number of cells covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_matches_grid_and_ignores_later_edits() {
        let mut grid = Grid::parse(
            "..
             #.",
        )
        .unwrap();
        let adj = Adjacency::snapshot(&grid);
        assert_eq!(adj.len(), 4);
        assert_eq!(adj.of(0), &[Coord::new(0, 1)]);
        assert_eq!(adj.of(1), &[Coord::new(1, 1), Coord::new(0, 0)]);
        assert!(adj.of(99).is_empty());

        grid.set_passable(Coord::new(1, 0), true).unwrap();
        assert_eq!(adj.of(0), &[Coord::new(0, 1)]);
        let fresh = Adjacency::snapshot(&grid);
        assert_eq!(fresh.of(0), &[Coord::new(1, 0), Coord::new(0, 1)]);
    }
}
