// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered pool of elements and the logical indices they show.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// Pooled elements in slot order, each paired with its logical index.
///
/// Indices always form a contiguous ascending run: slot `i + 1` shows the item
/// right after slot `i`. Wraps rotate both sequences by one in lockstep, so
/// moving an element between the ends is O(1).
///
/// Elements set aside by a failed initialization are parked: they keep their
/// identity for reuse but are not part of any slot.
#[derive(Debug, Clone)]
pub struct Pool<E> {
    elements: VecDeque<E>,
    indices: VecDeque<usize>,
    /// Most recently parked element last; popping yields the original slot order.
    parked: Vec<E>,
}

impl<E> Default for Pool<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Pool<E> {
    /// Creates an empty pool.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: VecDeque::new(),
            indices: VecDeque::new(),
            parked: Vec::new(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the pool has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Logical index in the first slot.
    #[must_use]
    pub fn first_index(&self) -> Option<usize> {
        self.indices.front().copied()
    }

    /// Logical index in the last slot.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.indices.back().copied()
    }

    /// Logical indices in slot order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Elements paired with their logical indices, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&E, usize)> + '_ {
        self.elements.iter().zip(self.indices.iter().copied())
    }

    /// Element and logical index in `slot`.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<(&E, usize)> {
        Some((self.elements.get(slot)?, *self.indices.get(slot)?))
    }

    /// Element currently showing logical item `index`, if it is materialized.
    #[must_use]
    pub fn element_for_index(&self, index: usize) -> Option<&E> {
        let first = self.first_index()?;
        self.elements.get(index.checked_sub(first)?)
    }

    /// Number of parked elements.
    #[must_use]
    pub fn parked_len(&self) -> usize {
        self.parked.len()
    }

    /// Returns `true` if the indices form a contiguous ascending run.
    #[must_use]
    pub fn is_contiguous(&self) -> bool {
        self.indices
            .iter()
            .zip(self.indices.iter().skip(1))
            .all(|(a, b)| a + 1 == *b)
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<(&mut E, usize)> {
        Some((self.elements.get_mut(slot)?, *self.indices.get(slot)?))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&mut E, usize)> + '_ {
        self.elements.iter_mut().zip(self.indices.iter().copied())
    }

    /// Appends an element showing the item after the current last one, or
    /// item `0` in an empty pool.
    pub(crate) fn push(&mut self, element: E) {
        let next = self.last_index().map_or(0, |last| last + 1);
        self.elements.push_back(element);
        self.indices.push_back(next);
    }

    /// Empties every slot into the parked set, keeping slot order for
    /// [`Self::unpark`].
    pub(crate) fn park(&mut self) {
        self.indices.clear();
        self.parked.extend(self.elements.drain(..).rev());
    }

    /// Takes back the earliest parked element.
    pub(crate) fn unpark(&mut self) -> Option<E> {
        self.parked.pop()
    }

    /// Removes every parked element, earliest first.
    pub(crate) fn drain_parked(&mut self) -> impl Iterator<Item = E> + '_ {
        self.parked.drain(..).rev()
    }

    /// Reassigns indices `start..start + len` in slot order.
    pub(crate) fn renumber(&mut self, start: usize) {
        for (offset, index) in self.indices.iter_mut().enumerate() {
            *index = start + offset;
        }
    }

    /// Moves the first slot to the end, showing the item after the current
    /// last one. Returns the new index, or `None` when that would reach
    /// `total_count` or the pool is empty.
    pub(crate) fn head_to_tail(&mut self, total_count: usize) -> Option<usize> {
        let next = self.last_index()? + 1;
        if next >= total_count {
            return None;
        }
        self.elements.rotate_left(1);
        self.indices.rotate_left(1);
        if let Some(last) = self.indices.back_mut() {
            *last = next;
        }
        Some(next)
    }

    /// Moves the last slot to the front, showing the item before the current
    /// first one. Returns the new index, or `None` at item `0` or when the
    /// pool is empty.
    pub(crate) fn tail_to_head(&mut self) -> Option<usize> {
        let previous = self.first_index()?.checked_sub(1)?;
        self.elements.rotate_right(1);
        self.indices.rotate_right(1);
        if let Some(first) = self.indices.front_mut() {
            *first = previous;
        }
        Some(previous)
    }
}
