//! **gridpath-core**: the grid model behind an interactive shortest-path
//! search.
//!
//! This crate provides the types shared by the search and by any front-end
//! that edits or displays a grid: coordinates, passability cells, the square
//! [`Grid`] with on-demand adjacency, and the [`StatusMap`] overlay that
//! records per-cell search progress.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod status;

pub use cell::{Cell, CellStatus};
pub use error::GridError;
pub use geom::Coord;
pub use grid::{Grid, Neighbors};
pub use status::StatusMap;
