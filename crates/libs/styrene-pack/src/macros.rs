/// Implements [`Pack`](crate::Pack) and [`Unpack`](crate::Unpack) for a
/// struct by encoding the listed fields in order.
///
/// Every field must be listed, and both sides must list them in the same
/// order: the order is the wire layout. Invoke it in the module that defines
/// the struct so private fields are reachable.
///
/// ```rust
/// use styrene_pack::{pack_fields, Packer};
///
/// #[derive(Debug, PartialEq)]
/// struct Reading {
///     sensor: u16,
///     label: String,
///     samples: Vec<f32>,
/// }
///
/// pack_fields!(Reading { sensor, label, samples });
///
/// let reading = Reading { sensor: 7, label: "temp".into(), samples: vec![21.5, 21.75] };
/// let mut packer = Packer::heap(64);
/// packer.put(&reading).unwrap();
/// assert_eq!(packer.unpacker().get::<Reading>().unwrap(), reading);
/// ```
#[macro_export]
macro_rules! pack_fields {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::Pack for $ty {
            fn pack(
                &self,
                ctx: &mut $crate::PackContext<'_>,
            ) -> ::core::result::Result<(), $crate::PackError> {
                $( $crate::Pack::pack(&self.$field, ctx)?; )+
                ::core::result::Result::Ok(())
            }
        }

        impl<'a> $crate::Unpack<'a> for $ty {
            fn unpack(
                ctx: &mut $crate::UnpackContext<'a>,
            ) -> ::core::result::Result<Self, $crate::PackError> {
                // Struct literal fields evaluate in source order.
                ::core::result::Result::Ok(Self { $( $field: ctx.get()?, )+ })
            }
        }
    };
}
