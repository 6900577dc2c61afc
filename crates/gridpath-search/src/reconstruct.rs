use gridpath_core::Coord;

/// Best-known origin of each discovered cell, keyed by flat grid index.
///
/// The recorded links form a tree rooted at the search start: a link is only
/// replaced when a strictly cheaper route is found, so it can never point
/// back into its own subtree.
#[derive(Debug, Clone)]
pub struct Predecessors {
    parents: Vec<Option<Coord>>,
    size: usize,
}

impl Predecessors {
    /// An empty relation for a `size x size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            parents: vec![None; size * size],
            size,
        }
    }

    #[inline]
    fn index(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.col < 0 {
            return None;
        }
        let (r, col) = (c.row as usize, c.col as usize);
        (r < self.size && col < self.size).then_some(r * self.size + col)
    }

    /// Origin recorded for `c`, if any.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Coord> {
        self.index(c).and_then(|i| self.parents[i])
    }

    /// Record `from` as the origin of `c`. Out-of-bounds `c` is ignored.
    pub fn set(&mut self, c: Coord, from: Coord) {
        if let Some(i) = self.index(c) {
            self.parents[i] = Some(from);
        }
    }

    /// Number of cells with a recorded origin.
    pub fn recorded(&self) -> usize {
        self.parents.iter().filter(|p| p.is_some()).count()
    }
}

/// Walk the predecessor links back from `end` and return the route in
/// travel order, from the root (the cell with no origin) to `end`.
///
/// When `end` has no origin the result is just `[end]`.
pub fn reconstruct(preds: &Predecessors, end: Coord) -> Vec<Coord> {
    let mut path = vec![end];
    let mut cur = end;
    while let Some(prev) = preds.get(cur) {
        debug_assert!(
            path.len() <= preds.parents.len(),
            "predecessor links contain a cycle"
        );
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_back_to_root() {
        let mut p = Predecessors::new(3);
        p.set(Coord::new(1, 0), Coord::new(0, 0));
        p.set(Coord::new(2, 0), Coord::new(1, 0));
        p.set(Coord::new(2, 1), Coord::new(2, 0));
        assert_eq!(p.recorded(), 3);
        assert_eq!(
            reconstruct(&p, Coord::new(2, 1)),
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(2, 1)
            ]
        );
    }

    #[test]
    fn root_alone() {
        let p = Predecessors::new(2);
        assert_eq!(reconstruct(&p, Coord::new(1, 1)), vec![Coord::new(1, 1)]);
    }

    #[test]
    fn overwritten_link_is_followed() {
        let mut p = Predecessors::new(3);
        p.set(Coord::new(0, 1), Coord::new(0, 0));
        p.set(Coord::new(1, 1), Coord::new(0, 1));
        p.set(Coord::new(1, 1), Coord::new(1, 0));
        p.set(Coord::new(1, 0), Coord::new(0, 0));
        assert_eq!(
            reconstruct(&p, Coord::new(1, 1)),
            vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)]
        );
        assert_eq!(p.get(Coord::new(5, 5)), None);
    }
}
