use core::any::type_name;

use crate::align::Alignment;
use crate::codec::Unpack;
use crate::config::PackConfig;
use crate::context::UnpackContext;
use crate::error::PackError;

/// Decode facade over a borrowed payload.
///
/// Always bounds-checked: the payload slice carries its length and every
/// read past it is reported as [`PackError::Truncated`]. Values must be read
/// back in the order they were packed, with the same alignment.
pub struct Unpacker<'a> {
    ctx: UnpackContext<'a>,
}

impl<'a> Unpacker<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self::with_alignment(payload, Alignment::default())
    }

    pub fn with_alignment(payload: &'a [u8], alignment: Alignment) -> Self {
        Self { ctx: UnpackContext::new(payload, alignment) }
    }

    pub fn with_config(payload: &'a [u8], config: &PackConfig) -> Self {
        Self::with_alignment(payload, config.alignment)
    }

    /// Decodes the next value as `T`.
    ///
    /// On failure the position is left where the call started.
    pub fn get<T: Unpack<'a>>(&mut self) -> Result<T, PackError> {
        let start = self.ctx.offset();
        match T::unpack(&mut self.ctx) {
            Ok(value) => Ok(value),
            Err(err) => {
                log::debug!(
                    "unpack: get {} failed at offset {} of {}: {}",
                    type_name::<T>(),
                    start,
                    self.ctx.payload().len(),
                    err
                );
                self.ctx.rewind_to(start)?;
                Err(err)
            }
        }
    }

    /// Decodes the next value as text, borrowed from the payload.
    pub fn get_str(&mut self) -> Result<&'a str, PackError> {
        self.get()
    }

    /// Decodes the next value into `out`, for chained extraction.
    pub fn get_into<T: Unpack<'a>>(&mut self, out: &mut T) -> Result<&mut Self, PackError> {
        *out = self.get()?;
        Ok(self)
    }

    /// Rewinds to the start of the payload.
    pub fn reset(&mut self) {
        log::trace!("unpack: reset after {} bytes", self.ctx.offset());
        self.ctx.reset();
    }

    pub fn position(&self) -> usize {
        self.ctx.offset()
    }

    pub fn remaining(&self) -> usize {
        self.ctx.remaining()
    }

    /// Whether every byte of the payload has been consumed.
    pub fn is_empty(&self) -> bool {
        self.ctx.remaining() == 0
    }

    pub fn alignment(&self) -> Alignment {
        self.ctx.alignment()
    }

    pub fn payload(&self) -> &'a [u8] {
        self.ctx.payload()
    }
}
