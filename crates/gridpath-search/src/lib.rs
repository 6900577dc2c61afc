//! Step-observable A* search over a square uniform-cost grid.
//!
//! [`PathSearch::run`] finds a shortest 4-connected route between two
//! passable cells of a [`Grid`](gridpath_core::Grid), calling back after every
//! expansion with the cells newly opened and closed so a front-end can
//! animate the search. The callback may stop the run early.
//!
//! Results are fully deterministic: neighbours are visited down, up, left,
//! right, and frontier ties on `f` are broken by insertion order.
//!
//! [`SearchSession`] wraps a grid, its endpoints and the last search's
//! [`StatusMap`](gridpath_core::StatusMap) into one caller-owned context for
//! interactive editing.
//!
//! | Outcome | Meaning |
//! |---|---|
//! | [`SearchOutcome::Found`] | route from start to end, both included |
//! | [`SearchOutcome::NoPath`] | end unreachable |
//! | [`SearchOutcome::Cancelled`] | the step callback returned [`StepControl::Stop`] |

mod astar;
mod config;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod reconstruct;
mod session;
mod state;
mod step;
mod traits;

pub use astar::PathSearch;
pub use config::SessionConfig;
pub use distance::manhattan;
pub use error::{InvalidReason, SearchError, SearchOutcome};
pub use neighbors::Adjacency;
pub use reconstruct::{Predecessors, reconstruct};
pub use session::{Placement, SearchSession};
pub use step::{Step, StepControl, StepPhase};
pub use traits::{Heuristic, Manhattan};
