use serde::{Deserialize, Serialize};

/// Alignment unit applied to every cursor step.
///
/// Each primitive, text, or count write advances the cursor by its size
/// rounded up to this unit. Both sides of a payload must agree on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Alignment {
    #[default]
    Bits8 = 1,
    Bits16 = 2,
    Bits32 = 4,
    Bits64 = 8,
}

impl Alignment {
    /// Alignment unit in bytes.
    #[inline]
    pub const fn bytes(self) -> usize {
        self as usize
    }

    /// `size` rounded up to the next multiple of the unit, or `None` on overflow.
    #[inline]
    pub const fn pad(self, size: usize) -> Option<usize> {
        let unit = self.bytes();
        match size.checked_add(unit - 1) {
            Some(v) => Some(v / unit * unit),
            None => None,
        }
    }

    /// Maps a unit in bytes (1, 2, 4, 8) back to an alignment.
    pub const fn from_bytes(bytes: usize) -> Option<Self> {
        match bytes {
            1 => Some(Self::Bits8),
            2 => Some(Self::Bits16),
            4 => Some(Self::Bits32),
            8 => Some(Self::Bits64),
            _ => None,
        }
    }
}
