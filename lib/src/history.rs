//! Undo and redo.

use crate::grid::SparseGrid;
use log::debug;
use std::collections::VecDeque;

/// A bounded log of grid snapshots, with a cursor for undo and redo.
///
/// The log is never empty, and the cursor always points at an entry.
/// The entry under the cursor is the grid as it was just before the latest
/// step that has not been undone.
///
/// Snapshots are copies: changing the live grid afterwards never changes
/// a recorded entry.
#[derive(Clone, Debug)]
pub struct HistoryStore {
    /// Recorded snapshots, oldest first.
    entries: VecDeque<SparseGrid>,
    /// Index of the current entry.
    position: usize,
    /// Maximal number of entries.
    capacity: usize,
}

impl HistoryStore {
    /// A log holding a single empty snapshot.
    ///
    /// A `capacity` of 0 is treated as 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut entries = VecDeque::with_capacity(capacity.min(1024));
        entries.push_back(SparseGrid::new());
        HistoryStore {
            entries,
            position: 0,
            capacity,
        }
    }

    /// Records a copy of the grid, just before a step.
    ///
    /// When the log is full, the oldest entry is dropped first.
    /// Every entry after the cursor (the redo branch) is discarded.
    pub fn record(&mut self, grid: &SparseGrid) {
        // The number of entries up to and including the cursor,
        // after dropping the oldest one if needed.
        let mut keep = self.position + 1;
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
            keep -= 1;
            debug!("History is full, dropped the oldest snapshot");
        }
        self.entries.truncate(keep);
        self.entries.push_back(grid.clone());
        self.position = self.entries.len() - 1;
    }

    /// Moves the cursor back, and returns a copy of the entry it lands on.
    ///
    /// Returns `None` if the cursor is already at the oldest entry.
    pub fn undo(&mut self) -> Option<SparseGrid> {
        if self.has_undo() {
            self.position -= 1;
            self.entries.get(self.position).cloned()
        } else {
            None
        }
    }

    /// Moves the cursor forward, and returns a copy of the entry it lands on.
    ///
    /// Returns `None` if the cursor is already at the newest entry.
    pub fn redo(&mut self) -> Option<SparseGrid> {
        if self.has_redo() {
            self.position += 1;
            self.entries.get(self.position).cloned()
        } else {
            None
        }
    }

    /// Returns true if there is something to undo, or false otherwise.
    pub fn has_undo(&self) -> bool {
        self.position > 0
    }

    /// Returns true if there is something to redo, or false otherwise.
    pub fn has_redo(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the log holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the current entry.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Maximal number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The current entry.
    pub fn current(&self) -> Option<&SparseGrid> {
        self.entries.get(self.position)
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_HISTORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(x: i64) -> SparseGrid {
        std::iter::once((x, 0)).collect()
    }

    #[test]
    fn starts_with_an_empty_snapshot() {
        let history = HistoryStore::new(10);
        assert_eq!(history.len(), 1);
        assert_eq!(history.position(), 0);
        assert_eq!(history.current(), Some(&SparseGrid::new()));
        assert!(!history.has_undo());
        assert!(!history.has_redo());
    }

    #[test]
    fn undo_and_redo() {
        let mut history = HistoryStore::new(10);
        history.record(&single(1));
        history.record(&single(2));
        assert_eq!(history.position(), 2);

        assert_eq!(history.undo(), Some(single(1)));
        assert_eq!(history.undo(), Some(SparseGrid::new()));
        assert_eq!(history.undo(), None);
        assert_eq!(history.position(), 0);

        assert_eq!(history.redo(), Some(single(1)));
        assert_eq!(history.redo(), Some(single(2)));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn recording_discards_the_redo_branch() {
        let mut history = HistoryStore::new(10);
        history.record(&single(1));
        history.record(&single(2));
        history.undo();
        history.record(&single(3));
        assert_eq!(history.len(), 3);
        assert!(!history.has_redo());
        assert_eq!(history.redo(), None);
        assert_eq!(history.undo(), Some(single(1)));
    }

    #[test]
    fn oldest_entries_are_dropped() {
        let mut history = HistoryStore::new(3);
        for x in 1..=5 {
            history.record(&single(x));
            assert!(history.len() <= 3);
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.position(), 2);
        assert_eq!(history.undo(), Some(single(4)));
        assert_eq!(history.undo(), Some(single(3)));
        assert_eq!(history.undo(), None);
    }

    #[test]
    fn full_log_with_cursor_at_the_start() {
        let mut history = HistoryStore::new(3);
        history.record(&single(1));
        history.record(&single(2));
        history.undo();
        history.undo();
        history.record(&single(3));
        assert_eq!(history.len(), 1);
        assert_eq!(history.position(), 0);
        assert_eq!(history.current(), Some(&single(3)));
    }

    #[test]
    fn capacity_of_one() {
        let mut history = HistoryStore::new(0);
        assert_eq!(history.capacity(), 1);
        history.record(&single(1));
        history.record(&single(2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), Some(&single(2)));
        assert!(!history.has_undo());
    }

    #[test]
    fn snapshots_are_copies() {
        let mut history = HistoryStore::new(10);
        let mut grid = single(1);
        history.record(&grid);
        grid.add_cell((7, 7));
        grid.remove_cell((1, 0));
        assert_eq!(history.current(), Some(&single(1)));
    }
}
