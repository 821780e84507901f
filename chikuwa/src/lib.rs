use std::fmt::Debug;

/// A cyclic sequence of items with a movable cursor.
///
/// Items live in a plain [Vec] in traversal order. Index 0 is the anchor,
/// the oldest item still present, and stepping past the last item wraps
/// back around to it. The cursor is an index into the same Vec, so as long
/// as the ring is non-empty it always points at a member.
#[derive(Debug, Clone)]
pub struct Ring<T: Debug + Clone + PartialEq> {
    items: Vec<T>,
    cursor: Option<usize>,
}

impl<T: Debug + Clone + PartialEq> Default for Ring<T> {
    fn default() -> Self {
        Ring::new()
    }
}

impl<T: Debug + Clone + PartialEq> Ring<T> {
    pub fn new() -> Self {
        Ring {
            items: Vec::new(),
            cursor: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item at the logical end of the cycle, just before the
    /// wrap back to the anchor. The first push also places the cursor.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        if self.cursor.is_none() {
            self.cursor = Some(0);
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Index of the item under the cursor, `None` when the ring is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The item under the cursor.
    pub fn current(&self) -> Result<&T, RingError> {
        match self.cursor {
            Some(index) => Ok(&self.items[index]),
            None => Err(RingError::EmptyRing),
        }
    }

    /// Moves the cursor to its successor and returns the new current item.
    /// From the last item the cursor wraps to the anchor, so on a ring of
    /// one this is a no-op that still succeeds.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&T, RingError> {
        let cursor = self.cursor.ok_or(RingError::EmptyRing)?;
        let next = (cursor + 1) % self.items.len();
        self.cursor = Some(next);
        Ok(&self.items[next])
    }

    /// Moves the cursor to its predecessor and returns the new current
    /// item, wrapping from the anchor to the last item.
    pub fn prev(&mut self) -> Result<&T, RingError> {
        let cursor = self.cursor.ok_or(RingError::EmptyRing)?;
        let prev = (cursor + self.items.len() - 1) % self.items.len();
        self.cursor = Some(prev);
        Ok(&self.items[prev])
    }

    /// Splices the item at `index` out of the cycle, leaving its
    /// predecessor and successor adjacent, and returns it.
    ///
    /// The cursor is repaired so it still points at a member: removing the
    /// only item clears it, removing the item under it moves it to that
    /// item's successor, and removing an item before it shifts it down by
    /// one. Removing the anchor makes the next item the new anchor.
    pub fn remove(&mut self, index: usize) -> Result<T, RingError> {
        if self.items.is_empty() {
            return Err(RingError::EmptyRing);
        }
        if index >= self.items.len() {
            return Err(RingError::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }

        let item = self.items.remove(index);

        if self.items.is_empty() {
            self.cursor = None;
        } else if let Some(cursor) = self.cursor {
            if cursor == index {
                // the successor now sits at `index` itself, unless the
                // removed item was the last one and the successor is the
                // anchor
                self.cursor = Some(if index == self.items.len() { 0 } else { index });
            } else if cursor > index {
                self.cursor = Some(cursor - 1);
            }
        }

        Ok(item)
    }

    /// Visits every item exactly once, in traversal order from the anchor.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = None;
    }
}

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RingError {
    #[error("Index out of bounds! Index {index} is over len {len}")]
    OutOfBounds { index: usize, len: usize },
    #[error("The ring is empty!")]
    EmptyRing,
}
