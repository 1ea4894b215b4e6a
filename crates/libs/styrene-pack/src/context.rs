//! Per-call views handed to codecs.
//!
//! [`PackContext`] writes through a [`Cursor`] into the packer's region (or
//! only counts bytes when measuring). [`UnpackContext`] reads a borrowed
//! payload through its own cursor whose capacity is the payload length.

use crate::align::Alignment;
use crate::codec::{Pack, Unpack};
use crate::cursor::Cursor;
use crate::error::PackError;

/// Terminator byte of encoded text.
pub const TEXT_TERMINATOR: u8 = 0x00;

/// Width of the element-count prefix of collections (native word).
pub const COUNT_SIZE: usize = core::mem::size_of::<usize>();

pub struct PackContext<'b> {
    region: Option<&'b mut [u8]>,
    cursor: &'b mut Cursor,
}

impl<'b> PackContext<'b> {
    /// The cursor's capacity must not exceed `region.len()`.
    pub(crate) fn new(region: &'b mut [u8], cursor: &'b mut Cursor) -> Self {
        debug_assert!(cursor.capacity() <= region.len());
        Self { region: Some(region), cursor }
    }

    /// Context that advances the cursor without storing anything.
    pub(crate) fn measuring(cursor: &'b mut Cursor) -> Self {
        Self { region: None, cursor }
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn alignment(&self) -> Alignment {
        self.cursor.alignment()
    }

    pub fn is_measuring(&self) -> bool {
        self.region.is_none()
    }

    /// Copies `bytes` as one cursor step.
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), PackError> {
        let start = self.cursor.advance(bytes.len())?;
        if let Some(region) = self.region.as_deref_mut() {
            region[start..start + bytes.len()].copy_from_slice(bytes);
        }
        Ok(())
    }

    /// Copies `bytes` followed by the text terminator as one cursor step.
    pub fn write_terminated(&mut self, bytes: &[u8]) -> Result<(), PackError> {
        let size = bytes.len().checked_add(1).ok_or(PackError::CapacityExceeded {
            requested: usize::MAX,
            remaining: self.cursor.remaining(),
        })?;
        let start = self.cursor.advance(size)?;
        if let Some(region) = self.region.as_deref_mut() {
            let end = start + bytes.len();
            region[start..end].copy_from_slice(bytes);
            region[end] = TEXT_TERMINATOR;
        }
        Ok(())
    }

    pub fn write_count(&mut self, count: usize) -> Result<(), PackError> {
        self.write(&count.to_ne_bytes())
    }

    /// Encodes `value` with its own codec.
    pub fn put<T: Pack + ?Sized>(&mut self, value: &T) -> Result<(), PackError> {
        value.pack(self)
    }
}

pub struct UnpackContext<'a> {
    payload: &'a [u8],
    cursor: Cursor,
}

impl<'a> UnpackContext<'a> {
    pub fn new(payload: &'a [u8], alignment: Alignment) -> Self {
        Self { payload, cursor: Cursor::new(payload.len(), alignment) }
    }

    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    pub fn offset(&self) -> usize {
        self.cursor.offset()
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn alignment(&self) -> Alignment {
        self.cursor.alignment()
    }

    pub(crate) fn rewind_to(&mut self, offset: usize) -> Result<(), PackError> {
        self.cursor.rewind_to(offset)
    }

    pub(crate) fn reset(&mut self) {
        self.cursor.reset();
    }

    fn advance(&mut self, size: usize) -> Result<usize, PackError> {
        self.cursor.advance(size).map_err(|err| match err {
            PackError::CapacityExceeded { requested, remaining } => {
                PackError::Truncated { requested, remaining }
            }
            other => other,
        })
    }

    /// Borrows the next `size` bytes of the payload.
    pub fn read(&mut self, size: usize) -> Result<&'a [u8], PackError> {
        let start = self.advance(size)?;
        Ok(&self.payload[start..start + size])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], PackError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read(N)?);
        Ok(out)
    }

    /// Borrows the bytes up to the next terminator and steps past it.
    pub fn read_terminated(&mut self) -> Result<&'a [u8], PackError> {
        let start = self.cursor.offset();
        let rest = &self.payload[start..];
        let len = rest
            .iter()
            .position(|&b| b == TEXT_TERMINATOR)
            .ok_or(PackError::MissingTerminator { remaining: rest.len() })?;
        self.advance(len + 1)?;
        Ok(&rest[..len])
    }

    pub fn read_count(&mut self) -> Result<usize, PackError> {
        Ok(usize::from_ne_bytes(self.read_array()?))
    }

    /// Decodes the next value with the codec of `T`.
    pub fn get<T: Unpack<'a>>(&mut self) -> Result<T, PackError> {
        T::unpack(self)
    }
}
