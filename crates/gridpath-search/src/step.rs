use gridpath_core::{Coord, StatusMap};

/// Where a search is when it reports a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPhase {
    /// A cell was expanded and the search will continue.
    Expanding,
    /// The end cell was reached; [`Step::path`] holds the route.
    Found,
    /// The frontier ran dry; the end is unreachable.
    Exhausted,
}

/// What the step callback wants the search to do next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StepControl {
    #[default]
    Continue,
    /// Abandon the search and return
    /// [`SearchOutcome::Cancelled`](crate::SearchOutcome::Cancelled).
    Stop,
}

impl From<()> for StepControl {
    fn from(_: ()) -> Self {
        Self::Continue
    }
}

/// Per-iteration view handed to the step callback.
///
/// `opened` and `closed` hold the cells whose status changed since the
/// previous call. A cell expanded in one iteration is reported as closed in
/// the next call. The start and end cells keep their own status and never
/// appear in either list.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    pub phase: StepPhase,
    pub opened: &'a [Coord],
    pub closed: &'a [Coord],
    /// The full start-to-end route on a [`StepPhase::Found`] step, empty
    /// otherwise.
    pub path: &'a [Coord],
    /// Current status of every cell.
    pub status: &'a StatusMap,
    /// Cells taken off the frontier so far, including the current one.
    pub expanded: usize,
}

impl Step<'_> {
    /// Whether this is the last call of the run.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase != StepPhase::Expanding
    }
}
