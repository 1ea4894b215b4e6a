//! Type-directed codec dispatch.
//!
//! Every packable type implements [`Pack`], every unpackable type implements
//! [`Unpack`]. The codec for a value is chosen by the compiler from its
//! static type; there is no registry and no runtime tag on the wire. User
//! aggregates plug in by implementing both traits in terms of the built-in
//! codecs, usually through [`pack_fields!`](crate::pack_fields).
//!
//! The decoder of a type must consume exactly the bytes its encoder wrote.

mod collection;
mod primitive;
mod text;
mod tuple;

use crate::context::{PackContext, UnpackContext};
use crate::error::PackError;

/// Encode side of a codec.
pub trait Pack {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError>;
}

/// Decode side of a codec.
///
/// `'a` is the lifetime of the payload, so borrowed types such as `&'a str`
/// can decode without copying.
pub trait Unpack<'a>: Sized {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError>;
}

impl<T: Pack + ?Sized> Pack for &T {
    #[inline]
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        (**self).pack(ctx)
    }
}

impl<T: Pack + ?Sized> Pack for &mut T {
    #[inline]
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        (**self).pack(ctx)
    }
}

impl<T: Pack + ?Sized> Pack for Box<T> {
    #[inline]
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        (**self).pack(ctx)
    }
}

impl<'a, T: Unpack<'a>> Unpack<'a> for Box<T> {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        T::unpack(ctx).map(Box::new)
    }
}
