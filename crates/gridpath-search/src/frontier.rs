use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Frontier ordering key, compared lexicographically: lowest `f` first, then
/// earliest insertion among equal `f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct FrontierKey {
    pub(crate) f: i32,
    pub(crate) seq: u64,
}

/// A frontier entry referring to a cell by flat grid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrontierEntry {
    pub(crate) key: FrontierKey,
    pub(crate) idx: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        // Sequence numbers are unique, so `idx` never decides.
        other.key.cmp(&self.key)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Open set: a priority queue plus a membership table mirroring its contents.
///
/// An entry's key is fixed when pushed. A member whose score later improves
/// keeps its original position.
#[derive(Debug)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    members: Vec<bool>,
    next_seq: u64,
}

impl Frontier {
    /// An empty frontier over `cells` flat indices.
    pub(crate) fn new(cells: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            members: vec![false; cells],
            next_seq: 0,
        }
    }

    /// Insert `idx` with score `f`, returning the sequence number used.
    ///
    /// The first push receives sequence 0.
    pub(crate) fn push(&mut self, idx: usize, f: i32) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            key: FrontierKey { f, seq },
            idx,
        });
        self.members[idx] = true;
        seq
    }

    /// Remove and return the entry with the smallest key.
    pub(crate) fn pop(&mut self) -> Option<FrontierEntry> {
        let entry = self.heap.pop()?;
        self.members[entry.idx] = false;
        Some(entry)
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.members.get(idx).copied().unwrap_or(false)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
