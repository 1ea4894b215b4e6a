use core::any::type_name;
use core::fmt;

use crate::align::Alignment;
use crate::codec::Pack;
use crate::config::PackConfig;
use crate::context::PackContext;
use crate::cursor::Cursor;
use crate::error::PackError;
use crate::unpacker::Unpacker;

/// Encode facade over a fixed-capacity byte region.
///
/// `B` is the storage: an inline array ([`StackPackBuffer`]), a heap
/// allocation ([`HeapPackBuffer`]), or a borrowed `&mut [u8]`. Capacity is
/// fixed at construction; `put` fails once it is exhausted.
///
/// A failed `put` rewinds to where the call started, so `data()` only ever
/// holds complete encodings.
pub struct Packer<B> {
    storage: B,
    cursor: Cursor,
}

/// Packer with inline storage of `N` bytes.
pub type StackPackBuffer<const N: usize> = Packer<[u8; N]>;

/// Packer with a heap allocation sized at runtime.
pub type HeapPackBuffer = Packer<Box<[u8]>>;

impl<B: AsRef<[u8]> + AsMut<[u8]>> Packer<B> {
    pub fn new(storage: B) -> Self {
        Self::with_alignment(storage, Alignment::default())
    }

    pub fn with_alignment(storage: B, alignment: Alignment) -> Self {
        let capacity = storage.as_ref().len();
        Self { storage, cursor: Cursor::new(capacity, alignment) }
    }

    pub fn with_config(storage: B, config: &PackConfig) -> Self {
        Self::with_alignment(storage, config.alignment)
    }

    /// Encodes `value` after the data already written.
    ///
    /// Returns the number of bytes the call consumed, padding included.
    pub fn put<T: Pack + ?Sized>(&mut self, value: &T) -> Result<usize, PackError> {
        let start = self.cursor.offset();
        let result = value.pack(&mut PackContext::new(self.storage.as_mut(), &mut self.cursor));

        match result {
            Ok(()) => Ok(self.cursor.offset() - start),
            Err(err) => {
                log::debug!(
                    "pack: put {} failed at offset {} of {}: {}",
                    type_name::<T>(),
                    start,
                    self.cursor.capacity(),
                    err
                );
                self.cursor.rewind_to(start)?;
                Err(err)
            }
        }
    }

    /// Bytes `put(value)` would consume with this packer's alignment.
    pub fn packed_len<T: Pack + ?Sized>(&self, value: &T) -> Result<usize, PackError> {
        packed_len(value, self.cursor.alignment())
    }

    /// Whether `value` fits in the remaining capacity.
    pub fn fits<T: Pack + ?Sized>(&self, value: &T) -> bool {
        self.packed_len(value).is_ok_and(|len| len <= self.remaining())
    }

    /// The written prefix of the region.
    pub fn data(&self) -> &[u8] {
        &self.storage.as_ref()[..self.cursor.offset()]
    }

    pub fn data_size(&self) -> usize {
        self.cursor.offset()
    }

    pub fn capacity(&self) -> usize {
        self.cursor.capacity()
    }

    pub fn remaining(&self) -> usize {
        self.cursor.remaining()
    }

    pub fn alignment(&self) -> Alignment {
        self.cursor.alignment()
    }

    pub fn is_empty(&self) -> bool {
        self.cursor.offset() == 0
    }

    pub fn is_full(&self) -> bool {
        self.cursor.is_exhausted()
    }

    /// Rewinds to the start. Old bytes stay in the region until overwritten.
    pub fn reset(&mut self) {
        log::trace!("pack: reset after {} bytes", self.cursor.offset());
        self.cursor.reset();
    }

    /// Checked unpacker over the written data, using the same alignment.
    pub fn unpacker(&self) -> Unpacker<'_> {
        Unpacker::with_alignment(self.data(), self.cursor.alignment())
    }

    pub fn into_inner(self) -> B {
        self.storage
    }
}

impl<const N: usize> Packer<[u8; N]> {
    const NON_EMPTY: () = assert!(N > 0, "stack pack buffer needs a non-zero capacity");

    /// Zeroed inline storage of `N` bytes.
    pub fn stack() -> Self {
        let () = Self::NON_EMPTY;
        Self::new([0u8; N])
    }
}

impl<const N: usize> Default for Packer<[u8; N]> {
    fn default() -> Self {
        Self::stack()
    }
}

impl Packer<Box<[u8]>> {
    /// Zeroed heap storage of `capacity` bytes, freed when the packer drops.
    pub fn heap(capacity: usize) -> Self {
        Self::new(vec![0u8; capacity].into_boxed_slice())
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> AsRef<[u8]> for Packer<B> {
    fn as_ref(&self) -> &[u8] {
        self.data()
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> fmt::Display for Packer<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ 0x{} ]", hex::encode(self.data()))
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> fmt::Debug for Packer<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packer")
            .field("cursor", &self.cursor)
            .field("data", &hex::encode(self.data()))
            .finish()
    }
}

/// Bytes `value` encodes to at `alignment`, without a destination buffer.
pub fn packed_len<T: Pack + ?Sized>(value: &T, alignment: Alignment) -> Result<usize, PackError> {
    let mut cursor = Cursor::unbounded(alignment);
    value.pack(&mut PackContext::measuring(&mut cursor))?;
    Ok(cursor.offset())
}

#[cfg(test)]
mod tests {
    use super::{packed_len, HeapPackBuffer, Packer, StackPackBuffer};
    use crate::align::Alignment;
    use crate::context::COUNT_SIZE;
    use crate::error::PackError;

    #[test]
    fn stack_buffer_fills_to_capacity() {
        let mut buffer = StackPackBuffer::<3>::stack();
        assert_eq!(buffer.put(&1u8), Ok(1));
        assert_eq!(buffer.put(&2u8), Ok(1));
        assert_eq!(buffer.put(&3u8), Ok(1));
        assert!(buffer.is_full());
        assert_eq!(
            buffer.put(&4u8),
            Err(PackError::CapacityExceeded { requested: 1, remaining: 0 })
        );
        assert_eq!(buffer.data(), &[1, 2, 3]);
    }

    #[test]
    fn heap_buffer_reports_sizes() {
        let mut buffer = HeapPackBuffer::heap(16);
        assert!(buffer.is_empty());
        buffer.put(&0xABCDu16).expect("u16");
        assert_eq!(buffer.data_size(), 2);
        assert_eq!(buffer.capacity(), 16);
        assert_eq!(buffer.remaining(), 14);
        assert_eq!(buffer.into_inner().len(), 16);
    }

    #[test]
    fn borrowed_region_is_written_in_place() {
        let mut region = [0u8; 16];
        let written = {
            let mut packer = Packer::new(&mut region[..]);
            packer.put(&[0x11u8, 0x22][..]).expect("slice");
            packer.data_size()
        };
        assert_eq!(written, COUNT_SIZE + 2);
        assert_eq!(&region[..COUNT_SIZE], &2usize.to_ne_bytes());
    }

    #[test]
    fn failed_composite_put_rewinds() {
        let mut buffer = HeapPackBuffer::heap(COUNT_SIZE + 4);
        buffer.put(&0xEEu8).expect("prefix");

        let err = buffer.put(&vec![1u32, 2, 3]).expect_err("payload does not fit");
        assert!(err.is_capacity());
        assert_eq!(buffer.data_size(), 1);

        buffer.put(&0xFFu8).expect("next put reuses the space");
        assert_eq!(buffer.data(), &[0xEE, 0xFF]);
    }

    #[test]
    fn reset_rewinds_without_clearing() {
        let mut buffer = StackPackBuffer::<4>::default();
        buffer.put(&[9u8, 9]).expect_err("count needs a full word");
        buffer.put(&7u16).expect("u16");
        buffer.reset();
        assert_eq!(buffer.data_size(), 0);
        assert!(buffer.data().is_empty());
        buffer.put(&1u8).expect("u8");
        assert_eq!(buffer.into_inner()[..2], [1, 7u16.to_ne_bytes()[1]]);
    }

    #[test]
    fn packed_len_matches_put() {
        let value = (String::from("len"), vec![1u64, 2], 'z');
        for alignment in [Alignment::Bits8, Alignment::Bits32, Alignment::Bits64] {
            let mut buffer = Packer::with_alignment(vec![0u8; 128], alignment);
            let predicted = buffer.packed_len(&value).expect("measure");
            assert!(buffer.fits(&value));
            assert_eq!(buffer.put(&value), Ok(predicted));
            assert_eq!(packed_len(&value, alignment), Ok(predicted));
        }
    }

    #[test]
    fn fits_rejects_oversized_and_invalid_values() {
        let buffer = StackPackBuffer::<4>::stack();
        assert!(buffer.fits("abc"));
        assert!(!buffer.fits("abcd"));
        assert!(!buffer.fits("a\0"));
    }

    #[test]
    fn display_renders_hex() {
        let mut buffer = StackPackBuffer::<4>::stack();
        buffer.put(&0xABu8).expect("u8");
        buffer.put(&0x01u8).expect("u8");
        assert_eq!(buffer.to_string(), "[ 0xab01 ]");
    }
}
