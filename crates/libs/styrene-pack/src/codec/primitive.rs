use super::{Pack, Unpack};
use crate::context::{PackContext, UnpackContext};
use crate::error::PackError;

// Native byte order, native size, no tag.
macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Pack for $ty {
                #[inline]
                fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
                    ctx.write(&self.to_ne_bytes())
                }
            }

            impl<'a> Unpack<'a> for $ty {
                #[inline]
                fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
                    Ok(<$ty>::from_ne_bytes(ctx.read_array()?))
                }
            }
        )*
    };
}

impl_scalar!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl Pack for bool {
    #[inline]
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        ctx.write(&[u8::from(*self)])
    }
}

impl<'a> Unpack<'a> for bool {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        match ctx.read_array::<1>()?[0] {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(PackError::InvalidBool(other)),
        }
    }
}

impl Pack for char {
    #[inline]
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        u32::from(*self).pack(ctx)
    }
}

impl<'a> Unpack<'a> for char {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        let scalar = u32::unpack(ctx)?;
        char::from_u32(scalar).ok_or(PackError::InvalidChar(scalar))
    }
}
