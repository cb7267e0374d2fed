use grid_util::point::Point;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A scored candidate. `order` is the discovery index used to break distance ties.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub point: Point,
    pub distance: f64,
    order: usize,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys so the max-heap pops the smallest distance, and among equal
        // distances the earliest discovered entry
        match other.distance.total_cmp(&self.distance) {
            Ordering::Equal => other.order.cmp(&self.order),
            s => s,
        }
    }
}

/// Min-priority frontier of discovered but not yet selected cells.
#[derive(Clone, Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    discovered: usize,
}

impl Frontier {
    pub fn push(&mut self, point: Point, distance: f64) {
        self.heap.push(FrontierEntry {
            point,
            distance,
            order: self.discovered,
        });
        self.discovered += 1;
    }

    /// Removes and returns the best candidate.
    pub fn pop_best(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Drops the pending candidates. The discovery counter keeps running.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Number of entries ever pushed.
    pub fn discovered(&self) -> usize {
        self.discovered
    }
}
