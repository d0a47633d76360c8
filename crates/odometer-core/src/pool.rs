//! Reuse pool for digit cells
//!
//! Cells live in an arena and are addressed by [`CellId`]. Each cell is
//! either in use (owned by a scroll track) or free (parked in the free
//! list for its tag). Rolls hand their cells back when the next roll is
//! prepared, so steady-state updates allocate nothing.

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use crate::{Error, Result};

/// Tag shared by every cell the roll engine creates
pub const DIGIT_CELL_TAG: &str = "digit-cell";

/// Handle to a cell in a [`CellPool`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single character stacked in a scroll track
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitCell {
    reuse_tag: String,
    /// Character shown by the cell
    pub text: char,
    /// Top row of the cell inside its track
    pub y: u16,
}

impl DigitCell {
    fn new(reuse_tag: &str) -> Self {
        Self {
            reuse_tag: reuse_tag.to_string(),
            text: ' ',
            y: 0,
        }
    }

    pub fn reuse_tag(&self) -> &str {
        &self.reuse_tag
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    InUse,
    Free,
}

#[derive(Debug, Default)]
pub struct CellPool {
    cells: Vec<DigitCell>,
    slots: Vec<Slot>,
    free: HashMap<String, Vec<CellId>>,
}

impl CellPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a free cell with `tag`, or create one, and mark it in use
    pub fn dequeue(&mut self, tag: &str) -> CellId {
        if let Some(id) = self.free.get_mut(tag).and_then(Vec::pop) {
            self.slots[id.0] = Slot::InUse;
            return id;
        }

        let id = CellId(self.cells.len());
        self.cells.push(DigitCell::new(tag));
        self.slots.push(Slot::InUse);
        id
    }

    /// Return an in-use cell to the free list of its tag
    pub fn enqueue(&mut self, id: CellId) -> Result<()> {
        match self.slots.get(id.0) {
            Some(Slot::InUse) => {}
            _ => {
                warn!("Enqueue of cell {} that is not in use", id);
                return Err(Error::Pool(id));
            }
        }

        self.slots[id.0] = Slot::Free;
        let tag = self.cells[id.0].reuse_tag.clone();
        self.free.entry(tag).or_default().push(id);
        Ok(())
    }

    pub fn get(&self, id: CellId) -> Option<&DigitCell> {
        self.cells.get(id.0)
    }

    pub fn get_mut(&mut self, id: CellId) -> Option<&mut DigitCell> {
        self.cells.get_mut(id.0)
    }

    pub fn is_in_use(&self, id: CellId) -> bool {
        matches!(self.slots.get(id.0), Some(Slot::InUse))
    }

    pub fn is_free(&self, id: CellId) -> bool {
        matches!(self.slots.get(id.0), Some(Slot::Free))
    }

    pub fn in_use_count(&self) -> usize {
        self.slots.iter().filter(|s| **s == Slot::InUse).count()
    }

    pub fn free_count(&self) -> usize {
        self.free.values().map(Vec::len).sum()
    }

    /// Total cells ever created
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_creates_when_empty() {
        let mut pool = CellPool::new();
        let a = pool.dequeue(DIGIT_CELL_TAG);
        let b = pool.dequeue(DIGIT_CELL_TAG);

        assert_ne!(a, b);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.in_use_count(), 2);
        assert_eq!(pool.free_count(), 0);
        assert_eq!(pool.get(a).unwrap().reuse_tag(), DIGIT_CELL_TAG);
    }

    #[test]
    fn test_enqueued_cell_is_reused() {
        let mut pool = CellPool::new();
        let a = pool.dequeue(DIGIT_CELL_TAG);
        pool.enqueue(a).unwrap();

        assert!(pool.is_free(a));
        assert!(!pool.is_in_use(a));

        let again = pool.dequeue(DIGIT_CELL_TAG);
        assert_eq!(again, a);
        assert!(pool.is_in_use(a));
        assert!(!pool.is_free(a));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_membership_is_exclusive() {
        let mut pool = CellPool::new();
        let ids: Vec<CellId> = (0..6).map(|_| pool.dequeue(DIGIT_CELL_TAG)).collect();
        for id in ids.iter().step_by(2) {
            pool.enqueue(*id).unwrap();
        }

        for id in &ids {
            assert_ne!(pool.is_in_use(*id), pool.is_free(*id));
        }
        assert_eq!(pool.in_use_count() + pool.free_count(), pool.len());
    }

    #[test]
    fn test_double_enqueue_rejected() {
        let mut pool = CellPool::new();
        let a = pool.dequeue(DIGIT_CELL_TAG);
        pool.enqueue(a).unwrap();

        assert!(matches!(pool.enqueue(a), Err(Error::Pool(id)) if id == a));
        assert_eq!(pool.free_count(), 1);
    }

    #[test]
    fn test_tags_do_not_mix() {
        let mut pool = CellPool::new();
        let digit = pool.dequeue(DIGIT_CELL_TAG);
        pool.enqueue(digit).unwrap();

        let other = pool.dequeue("separator");
        assert_ne!(other, digit);
        assert!(pool.is_free(digit));
    }

    #[test]
    fn test_cell_contents_survive_reuse() {
        let mut pool = CellPool::new();
        let a = pool.dequeue(DIGIT_CELL_TAG);
        {
            let cell = pool.get_mut(a).unwrap();
            cell.text = '7';
            cell.y = 3;
        }
        pool.enqueue(a).unwrap();
        let b = pool.dequeue(DIGIT_CELL_TAG);
        assert_eq!(pool.get(b).unwrap().text, '7');
    }
}
