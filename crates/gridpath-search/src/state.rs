use gridpath_core::{CellStatus, Coord, Grid, StatusMap};

use crate::frontier::Frontier;
use crate::reconstruct::Predecessors;
use crate::step::{Step, StepControl, StepPhase};

/// Score of a cell no route has reached yet.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Everything one search run owns. Created when a run starts and dropped
/// when it returns.
#[derive(Debug)]
pub(crate) struct SearchState {
    /// Best known cost from the start, by flat index.
    pub(crate) g: Vec<i32>,
    /// `g` plus the heuristic estimate to the end.
    pub(crate) f: Vec<i32>,
    pub(crate) preds: Predecessors,
    pub(crate) frontier: Frontier,
    /// Cells already expanded.
    pub(crate) visited: Vec<bool>,
    pub(crate) expanded: usize,
    status: StatusMap,
    // Notifications pending for the next step callback.
    opened: Vec<Coord>,
    closed: Vec<Coord>,
}

impl SearchState {
    /// Seed a run: the start is scored and queued, and both endpoints get
    /// their fixed status.
    pub(crate) fn new(
        grid: &Grid,
        start: Coord,
        end: Coord,
        start_estimate: i32,
    ) -> Self {
        let len = grid.len();
        let mut state = Self {
            g: vec![UNREACHABLE; len],
            f: vec![UNREACHABLE; len],
            preds: Predecessors::new(grid.size()),
            frontier: Frontier::new(len),
            visited: vec![false; len],
            expanded: 0,
            status: StatusMap::new(grid.size()),
            opened: Vec::new(),
            closed: Vec::new(),
        };
        if let Some(si) = grid.index(start) {
            state.g[si] = 0;
            state.f[si] = start_estimate;
            state.frontier.push(si, start_estimate);
        }
        state.status.set(start, CellStatus::Start);
        state.status.set(end, CellStatus::End);
        state
    }

    #[inline]
    fn is_endpoint(&self, c: Coord) -> bool {
        self.status.get(c).is_some_and(CellStatus::is_endpoint)
    }

    /// Record that `c` joined the frontier.
    pub(crate) fn open(&mut self, idx: usize, c: Coord) {
        self.visited[idx] = false;
        if self.is_endpoint(c) {
            return;
        }
        self.status.set(c, CellStatus::Open);
        self.opened.push(c);
    }

    /// Record that `c` has been fully expanded.
    pub(crate) fn close(&mut self, idx: usize, c: Coord) {
        self.visited[idx] = true;
        if self.is_endpoint(c) {
            return;
        }
        self.status.set(c, CellStatus::Closed);
        self.closed.push(c);
    }

    /// Mark the interior of a found route.
    pub(crate) fn mark_path(&mut self, path: &[Coord]) {
        for &c in path {
            if !self.is_endpoint(c) {
                self.status.set(c, CellStatus::Path);
            }
        }
    }

    /// Hand the pending notifications to `on_step`, then clear them.
    pub(crate) fn emit<F, C>(
        &mut self,
        phase: StepPhase,
        path: &[Coord],
        on_step: &mut F,
    ) -> StepControl
    where
        F: FnMut(&Step<'_>) -> C,
        C: Into<StepControl>,
    {
        let step = Step {
            phase,
            opened: &self.opened,
            closed: &self.closed,
            path,
            status: &self.status,
            expanded: self.expanded,
        };
        let control: StepControl = on_step(&step).into();
        self.opened.clear();
        self.closed.clear();
        control
    }
}
