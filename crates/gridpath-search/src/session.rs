//! Caller-owned editing and search context.
//!
//! A [`SearchSession`] holds everything an interactive front-end needs
//! between frames: the grid, the chosen endpoints, and the status overlay
//! left behind by the latest search. Drawing and input translation stay
//! with the caller.

use gridpath_core::{CellStatus, Coord, Grid, GridError, StatusMap};
use log::trace;

use crate::astar::PathSearch;
use crate::config::SessionConfig;
use crate::error::{SearchError, SearchOutcome};
use crate::step::{Step, StepControl};
use crate::traits::{Heuristic, Manhattan};

/// What [`SearchSession::place`] did to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Start,
    End,
    Barrier,
    /// The cell is already the start or the end.
    Unchanged,
}

/// Grid, endpoints and display overlay for one interactive user.
#[derive(Debug, Clone)]
pub struct SearchSession<H = Manhattan> {
    grid: Grid,
    status: StatusMap,
    start: Option<Coord>,
    end: Option<Coord>,
    search: PathSearch<H>,
}

impl SearchSession<Manhattan> {
    /// An empty session with an all-passable grid.
    pub fn new(config: &SessionConfig) -> Result<Self, GridError> {
        Ok(Self::from_grid(Grid::new(config.size)?))
    }

    /// A session over an existing grid, with no endpoints placed.
    pub fn from_grid(grid: Grid) -> Self {
        Self::with_search(grid, PathSearch::new())
    }
}

impl<H: Heuristic> SearchSession<H> {
    /// A session using a specific search configuration.
    pub fn with_search(grid: Grid, search: PathSearch<H>) -> Self {
        Self {
            status: StatusMap::new(grid.size()),
            grid,
            start: None,
            end: None,
            search,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Coord> {
        self.end
    }

    /// The overlay from the latest search, with endpoints marked.
    #[inline]
    pub fn status(&self) -> &StatusMap {
        &self.status
    }

    /// Status of a single cell, `None` if out of bounds.
    #[inline]
    pub fn status_at(&self, c: Coord) -> Option<CellStatus> {
        self.status.get(c)
    }

    /// Apply the primary edit action to `c`.
    ///
    /// The first placement becomes the start, the next one the end, and any
    /// later one a barrier. The start and end themselves are left alone.
    /// A start or end placed on a barrier clears it.
    pub fn place(&mut self, c: Coord) -> Result<Placement, GridError> {
        self.grid.checked_index(c)?;
        let placement = if self.start.is_none() && self.end != Some(c) {
            self.grid.set_passable(c, true)?;
            self.status.set(c, CellStatus::Start);
            self.start = Some(c);
            Placement::Start
        } else if self.end.is_none() && self.start != Some(c) {
            self.grid.set_passable(c, true)?;
            self.status.set(c, CellStatus::End);
            self.end = Some(c);
            Placement::End
        } else if self.start != Some(c) && self.end != Some(c) {
            self.grid.set_passable(c, false)?;
            self.status.set(c, CellStatus::Unvisited);
            Placement::Barrier
        } else {
            Placement::Unchanged
        };
        trace!("[Session] place {c}: {placement:?}");
        Ok(placement)
    }

    /// Apply the secondary edit action: make `c` a plain passable cell,
    /// forgetting it as start or end.
    pub fn erase(&mut self, c: Coord) -> Result<(), GridError> {
        self.grid.set_passable(c, true)?;
        self.status.set(c, CellStatus::Unvisited);
        if self.start == Some(c) {
            self.start = None;
        } else if self.end == Some(c) {
            self.end = None;
        }
        trace!("[Session] erase {c}");
        Ok(())
    }

    /// Discard every edit: all cells passable, no endpoints, blank overlay.
    pub fn clear(&mut self) {
        self.grid.fill(true);
        self.status.reset();
        self.start = None;
        self.end = None;
        trace!("[Session] cleared {0}x{0} grid", self.grid.size());
    }

    /// Search between the placed endpoints.
    ///
    /// The overlay from any previous search is wiped first, then updated
    /// from each step's notifications before `on_step` sees it.
    pub fn run<F, C>(&mut self, mut on_step: F) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(&Step<'_>) -> C,
        C: Into<StepControl>,
    {
        let start = self.start.ok_or(SearchError::MissingStart)?;
        let end = self.end.ok_or(SearchError::MissingEnd)?;

        self.status.reset();
        self.status.set(start, CellStatus::Start);
        self.status.set(end, CellStatus::End);

        let status = &mut self.status;
        self.search.run(&self.grid, start, end, |step: &Step<'_>| {
            // Closed cells were marked before this iteration's openings.
            for &c in step.closed {
                status.set(c, CellStatus::Closed);
            }
            for &c in step.opened {
                status.set(c, CellStatus::Open);
            }
            for &c in step.path {
                if c != start && c != end {
                    status.set(c, CellStatus::Path);
                }
            }
            Into::<StepControl>::into(on_step(step))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    fn session(size: usize) -> SearchSession {
        SearchSession::new(&SessionConfig::with_size(size)).unwrap()
    }

    #[test]
    fn new_rejects_empty_grid() {
        assert_eq!(
            SearchSession::new(&SessionConfig::with_size(0)).err(),
            Some(GridError::EmptyGrid)
        );
        let s = SearchSession::new(&SessionConfig::default()).unwrap();
        assert_eq!(s.grid().size(), 50);
    }

    #[test]
    fn placement_order() {
        let mut s = session(4);
        assert_eq!(s.place(c(0, 0)), Ok(Placement::Start));
        assert_eq!(s.place(c(0, 0)), Ok(Placement::Unchanged));
        assert_eq!(s.place(c(3, 3)), Ok(Placement::End));
        assert_eq!(s.place(c(3, 3)), Ok(Placement::Unchanged));
        assert_eq!(s.place(c(1, 1)), Ok(Placement::Barrier));
        assert_eq!(s.grid().is_passable(c(1, 1)), Ok(false));
        assert_eq!(s.start(), Some(c(0, 0)));
        assert_eq!(s.end(), Some(c(3, 3)));
        assert_eq!(s.status_at(c(0, 0)), Some(CellStatus::Start));
        assert_eq!(s.status_at(c(3, 3)), Some(CellStatus::End));
        assert!(s.place(c(4, 0)).is_err());
    }

    #[test]
    fn start_cannot_land_on_end() {
        let mut s = session(3);
        s.place(c(0, 0)).unwrap();
        s.place(c(2, 2)).unwrap();
        s.erase(c(0, 0)).unwrap();
        assert_eq!(s.start(), None);
        // With the start gone, clicking the end leaves it as is.
        assert_eq!(s.place(c(2, 2)), Ok(Placement::Unchanged));
        assert_eq!(s.place(c(1, 0)), Ok(Placement::Start));
    }

    #[test]
    fn endpoint_placed_on_barrier_clears_it() {
        let mut s = SearchSession::from_grid(Grid::parse("#.\n..").unwrap());
        assert_eq!(s.place(c(0, 0)), Ok(Placement::Start));
        assert_eq!(s.grid().is_passable(c(0, 0)), Ok(true));
    }

    #[test]
    fn erase_and_clear() {
        let mut s = session(3);
        s.place(c(0, 0)).unwrap();
        s.place(c(2, 2)).unwrap();
        s.place(c(1, 1)).unwrap();
        s.erase(c(1, 1)).unwrap();
        assert_eq!(s.grid().count_barriers(), 0);
        s.erase(c(2, 2)).unwrap();
        assert_eq!(s.end(), None);
        assert_eq!(s.status_at(c(2, 2)), Some(CellStatus::Unvisited));

        s.place(c(1, 0)).unwrap();
        s.place(c(0, 1)).unwrap();
        s.clear();
        assert_eq!(s.start(), None);
        assert_eq!(s.end(), None);
        assert_eq!(s.grid().count_barriers(), 0);
        assert_eq!(s.status().count(CellStatus::Unvisited), 9);
    }

    #[test]
    fn run_requires_endpoints() {
        let mut s = session(3);
        assert_eq!(s.run(|_: &Step<'_>| ()), Err(SearchError::MissingStart));
        s.place(c(0, 0)).unwrap();
        assert_eq!(s.run(|_: &Step<'_>| ()), Err(SearchError::MissingEnd));
    }

    #[test]
    fn overlay_tracks_search_state() {
        let mut s = SearchSession::from_grid(Grid::parse("...\n.#.\n...").unwrap());
        s.place(c(0, 0)).unwrap();
        s.place(c(2, 2)).unwrap();

        let mut mismatches = 0;
        let outcome = s.run(|_: &Step<'_>| StepControl::Continue).unwrap();
        assert!(outcome.is_found());
        assert_eq!(
            s.status().cells_with(CellStatus::Path),
            vec![c(1, 0), c(2, 0), c(2, 1)]
        );
        assert_eq!(
            s.status().cells_with(CellStatus::Closed),
            vec![c(0, 1), c(0, 2), c(1, 2)]
        );

        // A second run on an edited grid starts from a clean overlay.
        s.place(c(2, 0)).unwrap();
        let outcome = s
            .run(|step: &Step<'_>| {
                if step.is_terminal() && step.status.count(CellStatus::Path) != 3 {
                    mismatches += 1;
                }
            })
            .unwrap();
        assert_eq!(
            outcome.path(),
            Some(&[c(0, 0), c(0, 1), c(0, 2), c(1, 2), c(2, 2)][..])
        );
        assert_eq!(mismatches, 0);
        assert_eq!(
            s.status().cells_with(CellStatus::Path),
            vec![c(0, 1), c(0, 2), c(1, 2)]
        );
        assert_eq!(s.status().get(c(2, 0)), Some(CellStatus::Unvisited));
    }

    #[test]
    fn overlay_matches_search_status_every_step() {
        let mut s = SearchSession::from_grid(
            Grid::parse(
                ".....
                 .###.
                 .#...
                 .#.#.
                 ...#.",
            )
            .unwrap(),
        );
        s.place(c(0, 0)).unwrap();
        s.place(c(4, 4)).unwrap();
        let (start, end) = (c(0, 0), c(4, 4));
        let mut mirror = StatusMap::new(5);
        mirror.set(start, CellStatus::Start);
        mirror.set(end, CellStatus::End);
        let mut steps = 0;
        let outcome = s
            .run(|step: &Step<'_>| {
                for &p in step.closed {
                    mirror.set(p, CellStatus::Closed);
                }
                for &p in step.opened {
                    mirror.set(p, CellStatus::Open);
                }
                for &p in step.path {
                    if p != start && p != end {
                        mirror.set(p, CellStatus::Path);
                    }
                }
                assert_eq!(&mirror, step.status, "diverged at step {}", step.expanded);
                steps += 1;
            })
            .unwrap();
        assert!(outcome.is_found());
        assert_eq!(steps, 15);
        assert_eq!(&mirror, s.status());
    }

    #[test]
    fn cancelled_run_keeps_partial_overlay() {
        let mut s = session(10);
        s.place(c(0, 0)).unwrap();
        s.place(c(9, 9)).unwrap();
        let outcome = s.run(|_: &Step<'_>| StepControl::Stop).unwrap();
        assert_eq!(outcome, SearchOutcome::Cancelled);
        assert_eq!(s.status().count(CellStatus::Open), 2);
        assert_eq!(s.status().count(CellStatus::Closed), 0);
    }
}
