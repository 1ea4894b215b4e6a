use super::{Pack, Unpack};
use crate::context::{PackContext, UnpackContext};
use crate::error::PackError;

// Arity is static, so tuples carry no prefix: each element follows the last.
macro_rules! impl_tuple {
    ($($name:ident),+) => {
        impl<$($name: Pack),+> Pack for ($($name,)+) {
            #[allow(non_snake_case)]
            fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
                let ($($name,)+) = self;
                $($name.pack(ctx)?;)+
                Ok(())
            }
        }

        impl<'a, $($name: Unpack<'a>),+> Unpack<'a> for ($($name,)+) {
            fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
                Ok(($($name::unpack(ctx)?,)+))
            }
        }
    };
}

impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
