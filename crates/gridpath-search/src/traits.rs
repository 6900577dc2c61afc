use gridpath_core::Coord;

use crate::distance::manhattan;

/// Remaining-cost estimate used to order the frontier.
///
/// Must never overestimate the true cost (admissible) and must satisfy the
/// triangle inequality across one unit step (consistent); otherwise returned
/// paths are no longer guaranteed shortest.
pub trait Heuristic {
    /// Estimated cost from `from` to `to`.
    fn estimate(&self, from: Coord, to: Coord) -> i32;
}

/// The Manhattan heuristic, exact on an open 4-connected unit-cost grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> i32 {
        manhattan(from, to)
    }
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> i32 {
        (**self).estimate(from, to)
    }
}
