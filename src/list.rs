//! Growable list over a contiguous buffer of presence-tagged slots
//!
//! Capacity starts at [`INITIAL_CAPACITY`] and doubles whenever an insertion
//! finds every slot occupied. It only shrinks on `clear`, which resets it to
//! the initial capacity.

use std::fmt;

use crate::error::ListError;

/// Number of slots a fresh or cleared list starts with
pub const INITIAL_CAPACITY: usize = 9;

/// Positional list with front/back/indexed insertion and removal
///
/// Every operation validates its arguments before touching the buffer, so a
/// call that returns an error leaves the list unchanged.
#[derive(Clone)]
pub struct ArrayList<T> {
    /// Slots `[0, len)` are `Some`, slots `[len, capacity)` are `None`
    slots: Box<[Option<T>]>,
    len: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self {
            slots: empty_slots(INITIAL_CAPACITY),
            len: 0,
        }
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right
    ///
    /// `index == len` appends. Passing `None` as the value is rejected with
    /// [`ListError::InvalidArgument`]; the index is checked first.
    ///
    /// O(len - index), amortized O(1) when appending.
    pub fn insert_at(&mut self, index: usize, value: impl Into<Option<T>>) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::out_of_range(index, self.len));
        }
        let value: Option<T> = value.into();
        let value = value.ok_or(ListError::InvalidArgument)?;

        self.grow_if_full();
        // The empty slot at `len` rotates down to `index`
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Insert `value` before the first element. O(len).
    pub fn insert_front(&mut self, value: impl Into<Option<T>>) -> Result<(), ListError> {
        self.insert_at(0, value)
    }

    /// Append `value`. Amortized O(1).
    pub fn insert_back(&mut self, value: impl Into<Option<T>>) -> Result<(), ListError> {
        let value: Option<T> = value.into();
        let value = value.ok_or(ListError::InvalidArgument)?;
        self.push(value);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the tail left
    ///
    /// O(len - index), O(1) for the last element.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(ListError::out_of_range(index, self.len));
        }
        let value = self.slots[index]
            .take()
            .ok_or_else(|| ListError::out_of_range(index, self.len))?;

        // The vacated slot rotates up to `len - 1`
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(value)
    }

    /// Remove and return the first element. O(len).
    pub fn remove_front(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyContainer);
        }
        self.remove_at(0)
    }

    /// Remove and return the last element. O(1).
    ///
    /// Fails with [`ListError::EmptyContainer`] on an empty list.
    pub fn remove_back(&mut self) -> Result<T, ListError> {
        let last = self.len.checked_sub(1).ok_or(ListError::EmptyContainer)?;
        let value = self.slots[last].take().ok_or(ListError::EmptyContainer)?;
        self.len = last;
        Ok(value)
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.slots[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| ListError::out_of_range(index, self.len))
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every element and go back to a fresh initial-capacity buffer
    pub fn clear(&mut self) {
        self.slots = empty_slots(INITIAL_CAPACITY);
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Raw view of the backing buffer, empty slots included
    ///
    /// Meant for inspection and tests; it cannot be used to mutate the list.
    pub fn backing_array(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Live elements in positional order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }

    fn push(&mut self, value: T) {
        self.grow_if_full();
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Double the buffer when no empty slot is left
    fn grow_if_full(&mut self) {
        if self.len < self.slots.len() {
            return;
        }
        let mut grown = empty_slots(self.slots.len() * 2);
        for (dst, src) in grown.iter_mut().zip(self.slots.iter_mut()) {
            *dst = src.take();
        }
        self.slots = grown;
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Lists are equal when their live elements are; capacity is ignored
impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        list
    }
}
