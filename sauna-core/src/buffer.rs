//! Fixed-Size Circular Buffer
//!
//! ## Overview
//!
//! Ring buffer with a compile-time capacity for memory-constrained targets.
//! Nothing is allocated after construction: storage is an array of `N` slots
//! plus a write cursor and a fill count.
//!
//! When full, a push overwrites the oldest element. Recent data is worth
//! more than old data for sensor history, so there is no "full" error.
//!
//! ### Memory Layout
//!
//! ```text
//! CircularBuffer<_, 5> after 7 pushes (A..G):
//! ┌─────┬─────┬─────┬─────┬─────┐
//! │  F  │  G  │  C  │  D  │  E  │  ← physical slots
//! └─────┴─────┴─────┴─────┴─────┘
//!                ↑
//!                └── write_pos = 2: next write, and the oldest entry
//!
//! Logical view (oldest first): [C, D, E, F, G]
//! ```
//!
//! The modulo in `push()` compiles to a mask when N is a power of 2, so
//! prefer sizes like 64 or 128.
//!
//! ## Usage Example
//!
//! ```rust
//! use sauna_core::buffer::CircularBuffer;
//!
//! let mut recent: CircularBuffer<f32, 3> = CircularBuffer::new();
//! for t in [21.0, 22.5, 24.0, 26.0] {
//!     recent.push(t);
//! }
//!
//! let kept: Vec<f32> = recent.iter().copied().collect();
//! assert_eq!(kept, vec![22.5, 24.0, 26.0]);
//! ```

use core::fmt;

/// Fixed-size circular buffer
///
/// ## Internal Invariants
///
/// - `write_pos < N`
/// - `len <= N`
/// - slots `[0, len)` are populated before the first wrap, all slots after
///
/// ## Thread Safety
///
/// Not synchronized. Callers on a multi-threaded host must serialize access.
#[derive(Clone)]
pub struct CircularBuffer<T: Copy, const N: usize> {
    /// Storage array using Option for slots never written
    /// We use Option instead of MaybeUninit to avoid unsafe code
    data: [Option<T>; N],

    /// Index where the next write will occur
    write_pos: usize,

    /// Current number of valid elements, saturates at N
    len: usize,
}

impl<T: Copy, const N: usize> CircularBuffer<T, N> {
    const NON_ZERO_CAPACITY: () = assert!(N > 0, "CircularBuffer capacity must be non-zero");

    /// Creates a new empty circular buffer
    ///
    /// This is a const function, allowing creation in static contexts.
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NON_ZERO_CAPACITY;

        Self {
            data: [None; N],
            write_pos: 0,
            len: 0,
        }
    }

    /// Adds an element, overwriting the oldest one when full
    pub fn push(&mut self, item: T) {
        self.data[self.write_pos] = Some(item);
        self.write_pos = (self.write_pos + 1) % N;

        if self.len < N {
            self.len += 1;
        }
    }

    /// Get number of stored elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum number of elements ever held
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Check if buffer is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if buffer is full
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Get the most recent element
    pub fn last(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        // Most recent is one before write position
        let idx = if self.write_pos == 0 { N - 1 } else { self.write_pos - 1 };

        self.data[idx].as_ref()
    }

    /// Get the oldest element still held
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Iterate over elements from oldest to newest
    pub fn iter(&self) -> CircularBufferIter<'_, T, N> {
        CircularBufferIter {
            buffer: self,
            index: 0,
        }
    }

    /// Gets an element by its logical index (0 = oldest, len-1 = newest)
    ///
    /// Before the first wrap the data starts at slot 0. Once full, the
    /// oldest element sits at `write_pos`:
    ///
    /// ```text
    /// Physical array:  [D, E, A, B, C]  (write_pos = 2)
    /// Logical view:    [A, B, C, D, E]
    /// logical[0] = physical[(2+0)%5] = A
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        let actual_index = if self.len < N {
            index
        } else {
            (self.write_pos + index) % N
        };

        self.data[actual_index].as_ref()
    }
}

/// Iterator over circular buffer contents, oldest first
///
/// A clone continues from the current position. Call
/// [`CircularBuffer::iter`] again for a fresh pass.
#[derive(Clone)]
pub struct CircularBufferIter<'a, T: Copy, const N: usize> {
    buffer: &'a CircularBuffer<T, N>,
    index: usize,
}

impl<'a, T: Copy, const N: usize> Iterator for CircularBufferIter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.buffer.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.buffer.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for CircularBufferIter<'_, T, N> {}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a CircularBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = CircularBufferIter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for CircularBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Copy, const N: usize> Default for CircularBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
