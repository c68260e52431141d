use std::collections::VecDeque;

use crate::types::HistorySnapshot;

/// Linear undo/redo buffer holding at most `limit` snapshots.
///
/// `cursor` points at the snapshot that matches the live state. Committing after an
/// undo drops everything past the cursor; overflowing the limit drops the oldest entry.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    entries: VecDeque<HistorySnapshot>,
    cursor: usize,
    limit: usize,
}

impl HistoryStack {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            limit: limit.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn commit(&mut self, snapshot: HistorySnapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push_back(snapshot);
        if self.entries.len() > self.limit {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Step back; returns the snapshot to restore
    pub fn undo(&mut self) -> Option<&HistorySnapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward; returns the snapshot to restore
    pub fn redo(&mut self) -> Option<&HistorySnapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GridSpace;

    fn snapshot(count: u32) -> HistorySnapshot {
        HistorySnapshot {
            items: Vec::new(),
            town_center_count: count,
            grid: GridSpace::new(80, 80),
        }
    }

    #[test]
    fn undo_redo_walks_the_stack() {
        let mut history = HistoryStack::new(50);
        history.commit(snapshot(0));
        history.commit(snapshot(1));
        history.commit(snapshot(2));
        assert_eq!(history.undo().map(|s| s.town_center_count), Some(1));
        assert_eq!(history.undo().map(|s| s.town_center_count), Some(0));
        assert!(history.undo().is_none());
        assert_eq!(history.redo().map(|s| s.town_center_count), Some(1));
        assert_eq!(history.redo().map(|s| s.town_center_count), Some(2));
        assert!(history.redo().is_none());
    }

    #[test]
    fn commit_after_undo_discards_redo() {
        let mut history = HistoryStack::new(50);
        history.commit(snapshot(0));
        history.commit(snapshot(1));
        history.commit(snapshot(2));
        history.undo();
        history.undo();
        history.commit(snapshot(7));
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.undo().map(|s| s.town_center_count), Some(0));
    }

    #[test]
    fn oldest_entry_is_evicted_past_limit() {
        let mut history = HistoryStack::new(50);
        for i in 0..60 {
            history.commit(snapshot(i));
        }
        assert_eq!(history.len(), 50);
        assert_eq!(history.cursor(), 49);
        let mut oldest = None;
        while let Some(s) = history.undo() {
            oldest = Some(s.town_center_count);
        }
        assert_eq!(oldest, Some(10));
    }

    #[test]
    fn empty_stack_cannot_move() {
        let mut history = HistoryStack::new(5);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }
}
