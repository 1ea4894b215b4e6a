use core::fmt;

use crate::align::Alignment;
use crate::error::PackError;

/// Bounds-tracked position inside a fixed byte region.
///
/// The cursor owns no memory: it only knows how large the region is, how
/// much of it has been consumed, and which alignment unit every step is
/// rounded to. Invariant: `offset <= capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    capacity: usize,
    offset: usize,
    alignment: Alignment,
}

impl Cursor {
    pub const fn new(capacity: usize, alignment: Alignment) -> Self {
        Self { capacity, offset: 0, alignment }
    }

    /// Cursor without a ceiling. Only used to measure encodings.
    pub(crate) const fn unbounded(alignment: Alignment) -> Self {
        Self::new(usize::MAX, alignment)
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.offset
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.offset == self.capacity
    }

    /// Number of bytes a step of `size` occupies once padded.
    #[inline]
    pub fn step(&self, size: usize) -> Option<usize> {
        self.alignment.pad(size)
    }

    /// Moves forward by `size` rounded up to the alignment unit.
    ///
    /// Returns the offset the step starts at. Nothing moves on failure, and
    /// the error reports the padded step that did not fit.
    pub fn advance(&mut self, size: usize) -> Result<usize, PackError> {
        let remaining = self.remaining();
        // Report the padded step; padding that overflows can never fit.
        let step = self.step(size).unwrap_or(usize::MAX);
        if step > remaining {
            return Err(PackError::CapacityExceeded { requested: step, remaining });
        }

        let start = self.offset;
        self.offset += step;
        Ok(start)
    }

    /// Moves back by exactly `size` bytes.
    pub fn retreat(&mut self, size: usize) -> Result<(), PackError> {
        if size > self.offset {
            return Err(PackError::Underflow { requested: size, consumed: self.offset });
        }

        self.offset -= size;
        Ok(())
    }

    /// Restores an offset previously read from [`Cursor::offset`].
    pub fn rewind_to(&mut self, offset: usize) -> Result<(), PackError> {
        match self.offset.checked_sub(offset) {
            Some(delta) => self.retreat(delta),
            None => Err(PackError::Underflow { requested: offset, consumed: self.offset }),
        }
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} (align {})", self.offset, self.capacity, self.alignment.bytes())
    }
}
