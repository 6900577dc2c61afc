use gridpath_core::{Coord, Grid};
use log::{debug, trace};

use crate::error::{InvalidReason, SearchError, SearchOutcome};
use crate::neighbors::Adjacency;
use crate::reconstruct::reconstruct;
use crate::state::SearchState;
use crate::step::{Step, StepControl, StepPhase};
use crate::traits::{Heuristic, Manhattan};

/// Cost of one orthogonal move.
const STEP_COST: i32 = 1;

/// A* search over a [`Grid`] with per-expansion progress callbacks.
///
/// `PathSearch` holds no per-run state; every call to [`run`](Self::run)
/// builds its own scores, frontier and predecessor links and drops them on
/// return, so one instance can serve any number of sequential runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathSearch<H = Manhattan> {
    heuristic: H,
}

impl PathSearch<Manhattan> {
    /// A search using the Manhattan heuristic.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: Heuristic> PathSearch<H> {
    /// A search using a custom heuristic. It must be admissible and
    /// consistent for 4-connected unit-cost moves.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self { heuristic }
    }

    /// Run to completion without observing intermediate steps.
    pub fn find_path(
        &self,
        grid: &Grid,
        start: Coord,
        end: Coord,
    ) -> Result<SearchOutcome, SearchError> {
        self.run(grid, start, end, |_: &Step<'_>| StepControl::Continue)
    }

    /// Search for a shortest route from `start` to `end`.
    ///
    /// `on_step` is called once after each expanded cell, and once more when
    /// the search ends by reaching `end` or by exhausting the frontier.
    /// Returning [`StepControl::Stop`] from a non-terminal step cancels the
    /// run. Neighbours are expanded down, up, left, right, and frontier ties
    /// are broken by insertion order, so identical inputs yield identical
    /// paths and step sequences.
    ///
    /// When `start == end` the single-cell path is returned without calling
    /// `on_step`.
    pub fn run<F, C>(
        &self,
        grid: &Grid,
        start: Coord,
        end: Coord,
        mut on_step: F,
    ) -> Result<SearchOutcome, SearchError>
    where
        F: FnMut(&Step<'_>) -> C,
        C: Into<StepControl>,
    {
        let start_idx = endpoint_index(grid, start)?;
        let end_idx = endpoint_index(grid, end)?;

        if start_idx == end_idx {
            debug!("[AStar] start equals end at {start}");
            return Ok(SearchOutcome::Found(vec![start]));
        }

        trace!("[AStar] run: start={start} end={end} size={}", grid.size());

        // The grid is frozen for the rest of the run.
        let adjacency = Adjacency::snapshot(grid);
        let start_estimate = self.heuristic.estimate(start, end);
        let mut state = SearchState::new(grid, start, end, start_estimate);

        while let Some(entry) = state.frontier.pop() {
            let ci = entry.idx;
            let current = grid.coord(ci);
            state.expanded += 1;

            if ci == end_idx {
                let path = reconstruct(&state.preds, end);
                state.mark_path(&path);
                state.emit(StepPhase::Found, &path, &mut on_step);
                debug!(
                    "[AStar] found: length={} cells, expanded={}",
                    path.len(),
                    state.expanded
                );
                return Ok(SearchOutcome::Found(path));
            }

            let tentative_g = state.g[ci] + STEP_COST;
            for &np in adjacency.of(ci) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if tentative_g >= state.g[ni] {
                    continue;
                }
                state.preds.set(np, current);
                state.g[ni] = tentative_g;
                state.f[ni] = tentative_g + self.heuristic.estimate(np, end);
                if !state.frontier.contains(ni) {
                    state.frontier.push(ni, state.f[ni]);
                    state.open(ni, np);
                }
            }

            trace!(
                "[AStar] expanded {current} g={} f={} frontier={}",
                state.g[ci],
                entry.key.f,
                state.frontier.len()
            );

            let control = state.emit(StepPhase::Expanding, &[], &mut on_step);
            state.close(ci, current);

            if control == StepControl::Stop {
                debug!("[AStar] cancelled after {} expansions", state.expanded);
                return Ok(SearchOutcome::Cancelled);
            }
        }

        // Flush the last closed cell so observers see the final state.
        state.emit(StepPhase::Exhausted, &[], &mut on_step);
        debug!(
            "[AStar] no path: {} cells expanded, {} closed",
            state.expanded,
            state.visited.iter().filter(|&&v| v).count()
        );
        Ok(SearchOutcome::NoPath)
    }
}

/// Flat index of a search endpoint, rejecting cells outside the grid or on
/// a barrier.
fn endpoint_index(grid: &Grid, c: Coord) -> Result<usize, SearchError> {
    let reject = |reason: InvalidReason| {
        debug!("[AStar] rejected endpoint {c}: {reason}");
        SearchError::InvalidCoordinate { coord: c, reason }
    };
    let Some(idx) = grid.index(c) else {
        return Err(reject(InvalidReason::OutOfBounds));
    };
    if !grid.is_passable(c).unwrap_or(false) {
        return Err(reject(InvalidReason::Impassable));
    }
    Ok(idx)
}
