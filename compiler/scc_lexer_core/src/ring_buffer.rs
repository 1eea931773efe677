//! Double-buffered character ring.
//!
//! The ring is split into two halves. A refill writes at most half the
//! capacity, so at least half the capacity of already-read characters
//! survives every refill and stays available for rewinding.
//!
//! # Layout
//!
//! ```text
//!  absolute:  ... [fill - capacity ............ head ........ fill)
//!                  └── retained history ──────┘└─ unread ──┘
//!  slot:      absolute % capacity
//! ```
//!
//! All indices the ring exposes are absolute character counts; the modulo
//! arithmetic never leaves this module.

use crate::{Character, Feed};

/// Fixed-capacity character ring fed from a [`Feed`].
#[derive(Clone, Debug)]
pub struct RingBuffer {
    storage: Vec<Character>,
    /// Absolute index of the next unread character.
    head: u64,
    /// Absolute index one past the last character written.
    fill: u64,
    /// Storage was handed in by the caller and is handed back on teardown.
    caller_owned: bool,
}

impl RingBuffer {
    /// Zero-filled ring of `capacity` characters. `capacity` must be even
    /// and non-zero (see [`ScannerConfig::validate`](crate::ScannerConfig::validate)).
    pub fn new(capacity: usize) -> Self {
        debug_assert!(
            capacity > 0 && capacity % 2 == 0,
            "ring capacity must be even and non-zero, got {capacity}"
        );
        RingBuffer {
            storage: vec![0; capacity],
            head: 0,
            fill: 0,
            caller_owned: false,
        }
    }

    /// Ring over caller-supplied storage. Its length is the capacity; the
    /// contents are overwritten.
    pub fn with_storage(mut storage: Vec<Character>) -> Self {
        debug_assert!(
            !storage.is_empty() && storage.len() % 2 == 0,
            "ring capacity must be even and non-zero, got {}",
            storage.len()
        );
        storage.fill(0);
        RingBuffer {
            storage,
            head: 0,
            fill: 0,
            caller_owned: true,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn half(&self) -> usize {
        self.storage.len() / 2
    }

    /// Absolute index of the next unread character.
    #[inline]
    pub fn head(&self) -> u64 {
        self.head
    }

    /// Absolute index one past the last character written.
    #[inline]
    pub fn fill(&self) -> u64 {
        self.fill
    }

    /// Every written character has been read.
    #[inline]
    pub fn is_drained(&self) -> bool {
        self.head == self.fill
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "result is < capacity, which is a usize"
    )]
    #[inline]
    fn slot(&self, absolute: u64) -> usize {
        (absolute % self.storage.len() as u64) as usize
    }

    /// Pull the next chunk from `feed`.
    ///
    /// Only legal once the ring is drained. Writes at most half the capacity
    /// into one contiguous run of slots and returns how many characters the
    /// feed produced; zero means the feed broke its contract.
    pub fn refill<F: Feed + ?Sized>(&mut self, feed: &mut F) -> usize {
        debug_assert!(self.is_drained(), "refill with unread characters");
        let start = self.slot(self.fill);
        let len = self.half().min(self.capacity() - start);
        let fetched = feed.fetch(&mut self.storage[start..start + len]).min(len);
        self.fill += fetched as u64;
        fetched
    }

    /// Append a single character. Only legal once the ring is drained.
    pub fn push(&mut self, ch: Character) {
        debug_assert!(self.is_drained(), "push with unread characters");
        let slot = self.slot(self.fill);
        self.storage[slot] = ch;
        self.fill += 1;
    }

    /// Character `behind` places before the read head.
    ///
    /// `at(0)` is the next unread character. Returns `None` if that character
    /// has not been written yet or has already been overwritten.
    pub fn at(&self, behind: u64) -> Option<Character> {
        let absolute = self.head.checked_sub(behind)?;
        if absolute >= self.fill || self.fill - absolute > self.capacity() as u64 {
            return None;
        }
        Some(self.storage[self.slot(absolute)])
    }

    /// Mark the next unread character as read.
    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.head < self.fill, "advance past written characters");
        self.head += 1;
    }

    /// Hand caller-supplied storage back; `None` if the ring allocated its own.
    pub fn into_storage(self) -> Option<Vec<Character>> {
        self.caller_owned.then_some(self.storage)
    }
}

#[cfg(test)]
mod tests;
