use super::Ticks;
use std::{cmp::Reverse, collections::BinaryHeap, fmt, str::FromStr};

/// A set of entries (input index + ordering key) from which the minimum key is
/// taken first. Equal keys come out in input order.
pub trait ReadyQueue {
    fn pop_min(&mut self) -> Option<usize>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Binary min-heap keyed on `(key, index)`, O(log n) per extraction.
pub struct HeapQueue {
    heap: BinaryHeap<Reverse<(Ticks, usize)>>,
}

impl HeapQueue {
    pub fn new(keys: &[Ticks]) -> Self {
        Self {
            heap: keys
                .iter()
                .enumerate()
                .map(|(index, &key)| Reverse((key, index)))
                .collect(),
        }
    }
}

impl ReadyQueue for HeapQueue {
    fn pop_min(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, index))| index)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Scans every remaining entry on each extraction, O(n) per extraction.
pub struct LinearScanQueue {
    entries: Vec<Option<Ticks>>,
    remaining: usize,
}

impl LinearScanQueue {
    pub fn new(keys: &[Ticks]) -> Self {
        Self {
            entries: keys.iter().copied().map(Some).collect(),
            remaining: keys.len(),
        }
    }
}

impl ReadyQueue for LinearScanQueue {
    fn pop_min(&mut self) -> Option<usize> {
        // min_by_key keeps the first of equal keys
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.map(|key| (index, key)))
            .min_by_key(|&(_, key)| key)?
            .0;

        self.entries[index] = None;
        self.remaining -= 1;
        Some(index)
    }

    fn len(&self) -> usize {
        self.remaining
    }
}

/// Mechanism used to pick the next process in the non-preemptive policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionStrategy {
    #[default]
    Heap,
    LinearScan,
}

impl SelectionStrategy {
    pub fn ready_queue(self, keys: &[Ticks]) -> Box<dyn ReadyQueue> {
        match self {
            SelectionStrategy::Heap => Box::new(HeapQueue::new(keys)),
            SelectionStrategy::LinearScan => Box::new(LinearScanQueue::new(keys)),
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionStrategy::Heap => write!(f, "heap"),
            SelectionStrategy::LinearScan => write!(f, "linear"),
        }
    }
}

impl FromStr for SelectionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heap" => Ok(SelectionStrategy::Heap),
            "linear" => Ok(SelectionStrategy::LinearScan),
            other => Err(format!("unknown selection strategy: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut queue: Box<dyn ReadyQueue>) -> Vec<usize> {
        let mut order = Vec::new();
        while let Some(index) = queue.pop_min() {
            order.push(index);
        }
        order
    }

    #[test]
    fn test_strategies_agree_on_ties() {
        let keys = [3, 1, 3, 1, 2, 1];
        let heap = drain(SelectionStrategy::Heap.ready_queue(&keys));
        let linear = drain(SelectionStrategy::LinearScan.ready_queue(&keys));

        assert_eq!(heap, vec![1, 3, 5, 4, 0, 2]);
        assert_eq!(heap, linear);
    }

    #[test]
    fn test_len_tracks_extractions() {
        let mut queue = LinearScanQueue::new(&[4, 2]);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop_min(), Some(1));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_min(), Some(0));
        assert!(queue.is_empty());
        assert_eq!(queue.pop_min(), None);
    }

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("heap".parse(), Ok(SelectionStrategy::Heap));
        assert_eq!("linear".parse(), Ok(SelectionStrategy::LinearScan));
        assert!("bogus".parse::<SelectionStrategy>().is_err());
        assert_eq!(SelectionStrategy::LinearScan.to_string(), "linear");
    }
}
