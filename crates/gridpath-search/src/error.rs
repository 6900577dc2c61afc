use std::fmt;

use gridpath_core::Coord;

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    OutOfBounds,
    Impassable,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("outside the grid"),
            Self::Impassable => f.write_str("on a barrier"),
        }
    }
}

/// Errors that stop a search before it begins.
///
/// Unreachable ends and cancellations are not errors; see
/// [`SearchOutcome`](crate::SearchOutcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The start or end cannot take part in a search.
    InvalidCoordinate { coord: Coord, reason: InvalidReason },
    /// A session was asked to search before a start cell was placed.
    MissingStart,
    /// A session was asked to search before an end cell was placed.
    MissingEnd,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { coord, reason } => {
                write!(f, "invalid search endpoint {coord}: {reason}")
            }
            Self::MissingStart => write!(f, "no start cell placed"),
            Self::MissingEnd => write!(f, "no end cell placed"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Terminal result of a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The route from start to end, both included.
    Found(Vec<Coord>),
    /// Every reachable cell was expanded without meeting the end.
    NoPath,
    /// The step callback asked the search to stop.
    Cancelled,
}

impl SearchOutcome {
    /// The route, if one was found.
    pub fn path(&self) -> Option<&[Coord]> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    /// Consume the outcome, returning the route if one was found.
    pub fn into_path(self) -> Option<Vec<Coord>> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = SearchError::InvalidCoordinate {
            coord: Coord::new(9, 0),
            reason: InvalidReason::OutOfBounds,
        };
        assert_eq!(
            e.to_string(),
            "invalid search endpoint (9, 0): outside the grid"
        );
        assert_eq!(SearchError::MissingEnd.to_string(), "no end cell placed");
    }

    #[test]
    fn outcome_accessors() {
        let found = SearchOutcome::Found(vec![Coord::ZERO]);
        assert!(found.is_found());
        assert_eq!(found.path(), Some(&[Coord::ZERO][..]));
        assert_eq!(SearchOutcome::NoPath.path(), None);
        assert_eq!(SearchOutcome::Cancelled.into_path(), None);
    }
}
