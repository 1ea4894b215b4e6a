use std::ffi::{CStr, CString};

use super::{Pack, Unpack};
use crate::context::{PackContext, UnpackContext, TEXT_TERMINATOR};
use crate::error::PackError;

fn pack_text(bytes: &[u8], ctx: &mut PackContext<'_>) -> Result<(), PackError> {
    // An interior terminator would split the text on decode.
    if let Some(position) = bytes.iter().position(|&b| b == TEXT_TERMINATOR) {
        return Err(PackError::InteriorNul { position });
    }
    ctx.write_terminated(bytes)
}

impl Pack for str {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        pack_text(self.as_bytes(), ctx)
    }
}

impl Pack for String {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        self.as_str().pack(ctx)
    }
}

impl Pack for CStr {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        ctx.write_terminated(self.to_bytes())
    }
}

impl Pack for CString {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        self.as_c_str().pack(ctx)
    }
}

impl<'a> Unpack<'a> for &'a str {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        let bytes = ctx.read_terminated()?;
        core::str::from_utf8(bytes)
            .map_err(|err| PackError::InvalidUtf8 { valid_up_to: err.valid_up_to() })
    }
}

impl<'a> Unpack<'a> for String {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        <&str>::unpack(ctx).map(str::to_owned)
    }
}

impl<'a> Unpack<'a> for &'a CStr {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        let start = ctx.offset();
        let len = ctx.read_terminated()?.len();
        let with_nul = &ctx.payload()[start..start + len + 1];
        CStr::from_bytes_with_nul(with_nul)
            .map_err(|_| PackError::MissingTerminator { remaining: with_nul.len() })
    }
}

impl<'a> Unpack<'a> for CString {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        <&CStr>::unpack(ctx).map(CStr::to_owned)
    }
}
