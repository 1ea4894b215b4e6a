/// Errors from pack/unpack operations.
///
/// Every failure is reported at the `put`/`get` call that caused it. The
/// facades rewind their cursor before returning one of these, so a failed
/// call never leaves a partial encoding behind the logical end of the data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PackError {
    #[error("capacity exceeded: need {requested} bytes, {remaining} left")]
    CapacityExceeded { requested: usize, remaining: usize },

    #[error("payload truncated: need {requested} bytes, {remaining} left")]
    Truncated { requested: usize, remaining: usize },

    #[error("cursor underflow: release {requested} bytes, {consumed} consumed")]
    Underflow { requested: usize, consumed: usize },

    #[error("missing text terminator in remaining {remaining} bytes")]
    MissingTerminator { remaining: usize },

    #[error("text contains interior nul at byte {position}")]
    InteriorNul { position: usize },

    #[error("invalid utf-8 in text (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("invalid bool byte: 0x{0:02x}")]
    InvalidBool(u8),

    #[error("invalid char scalar: 0x{0:08x}")]
    InvalidChar(u32),

    #[error("fixed array length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("unknown variant tag: 0x{0:02x}")]
    UnknownTag(u8),
}

impl PackError {
    /// Returns `true` when a larger buffer could make the failed call succeed.
    pub fn is_capacity(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }

    /// Returns `true` for errors caused by malformed or short input bytes.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Truncated { .. }
                | Self::MissingTerminator { .. }
                | Self::InvalidUtf8 { .. }
                | Self::InvalidBool(_)
                | Self::InvalidChar(_)
                | Self::LengthMismatch { .. }
                | Self::UnknownTag(_)
        )
    }
}
