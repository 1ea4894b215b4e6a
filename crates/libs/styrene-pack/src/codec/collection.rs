//! Count-prefixed collections.
//!
//! Layout: native-width element count, then every element with its own
//! codec (maps: key then value). Empty collections still write a zero
//! count, so "empty" and "absent" stay distinguishable on the wire.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::mem::size_of;

use super::{Pack, Unpack};
use crate::context::{PackContext, UnpackContext};
use crate::error::PackError;

fn pack_items<'i, T, I>(count: usize, items: I, ctx: &mut PackContext<'_>) -> Result<(), PackError>
where
    T: Pack + 'i,
    I: IntoIterator<Item = &'i T>,
{
    ctx.write_count(count)?;
    for item in items {
        item.pack(ctx)?;
    }
    Ok(())
}

fn pack_entries<'i, K, V, I>(
    count: usize,
    entries: I,
    ctx: &mut PackContext<'_>,
) -> Result<(), PackError>
where
    K: Pack + 'i,
    V: Pack + 'i,
    I: IntoIterator<Item = (&'i K, &'i V)>,
{
    ctx.write_count(count)?;
    for (key, value) in entries {
        key.pack(ctx)?;
        value.pack(ctx)?;
    }
    Ok(())
}

/// Reads a count and a capacity hint for `count` items of type `T`.
///
/// The hint never reserves more memory than the payload has bytes left, so a
/// malformed count cannot inflate the allocation.
fn unpack_count<T>(ctx: &mut UnpackContext<'_>) -> Result<(usize, usize), PackError> {
    let count = ctx.read_count()?;
    let fit = ctx.remaining() / size_of::<T>().max(1);
    Ok((count, count.min(fit)))
}

fn unpack_into<'a, T, C>(ctx: &mut UnpackContext<'a>, mut sink: C) -> Result<(), PackError>
where
    T: Unpack<'a>,
    C: FnMut(T),
{
    let count = ctx.read_count()?;
    for _ in 0..count {
        sink(T::unpack(ctx)?);
    }
    Ok(())
}

impl<T: Pack> Pack for [T] {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        pack_items(self.len(), self, ctx)
    }
}

impl<T: Pack> Pack for Vec<T> {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        self.as_slice().pack(ctx)
    }
}

impl<'a, T: Unpack<'a>> Unpack<'a> for Vec<T> {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        let (count, hint) = unpack_count::<T>(ctx)?;
        let mut out = Vec::with_capacity(hint);
        for _ in 0..count {
            out.push(T::unpack(ctx)?);
        }
        Ok(out)
    }
}

impl<T: Pack, const N: usize> Pack for [T; N] {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        self.as_slice().pack(ctx)
    }
}

impl<'a, T: Unpack<'a>, const N: usize> Unpack<'a> for [T; N] {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        let found = ctx.read_count()?;
        if found != N {
            return Err(PackError::LengthMismatch { expected: N, found });
        }
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::unpack(ctx)?);
        }
        items.try_into().map_err(|items: Vec<T>| PackError::LengthMismatch {
            expected: N,
            found: items.len(),
        })
    }
}

impl<T: Pack> Pack for VecDeque<T> {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        pack_items(self.len(), self, ctx)
    }
}

impl<'a, T: Unpack<'a>> Unpack<'a> for VecDeque<T> {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        let (count, hint) = unpack_count::<T>(ctx)?;
        let mut out = VecDeque::with_capacity(hint);
        for _ in 0..count {
            out.push_back(T::unpack(ctx)?);
        }
        Ok(out)
    }
}

impl<T: Pack> Pack for LinkedList<T> {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        pack_items(self.len(), self, ctx)
    }
}

impl<'a, T: Unpack<'a>> Unpack<'a> for LinkedList<T> {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        let mut out = LinkedList::new();
        unpack_into(ctx, |item| out.push_back(item))?;
        Ok(out)
    }
}

impl<T: Pack> Pack for BTreeSet<T> {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        pack_items(self.len(), self, ctx)
    }
}

impl<'a, T: Unpack<'a> + Ord> Unpack<'a> for BTreeSet<T> {
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        let mut out = BTreeSet::new();
        unpack_into(ctx, |item| {
            out.insert(item);
        })?;
        Ok(out)
    }
}

impl<T: Pack, S> Pack for HashSet<T, S> {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        pack_items(self.len(), self, ctx)
    }
}

impl<'a, T, S> Unpack<'a> for HashSet<T, S>
where
    T: Unpack<'a> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        let (count, hint) = unpack_count::<T>(ctx)?;
        let mut out = HashSet::with_capacity_and_hasher(hint, S::default());
        for _ in 0..count {
            out.insert(T::unpack(ctx)?);
        }
        Ok(out)
    }
}

impl<K: Pack, V: Pack> Pack for BTreeMap<K, V> {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        pack_entries(self.len(), self, ctx)
    }
}

impl<'a, K, V> Unpack<'a> for BTreeMap<K, V>
where
    K: Unpack<'a> + Ord,
    V: Unpack<'a>,
{
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        let mut out = BTreeMap::new();
        unpack_into(ctx, |(key, value)| {
            out.insert(key, value);
        })?;
        Ok(out)
    }
}

impl<K: Pack, V: Pack, S> Pack for HashMap<K, V, S> {
    fn pack(&self, ctx: &mut PackContext<'_>) -> Result<(), PackError> {
        pack_entries(self.len(), self, ctx)
    }
}

impl<'a, K, V, S> Unpack<'a> for HashMap<K, V, S>
where
    K: Unpack<'a> + Eq + Hash,
    V: Unpack<'a>,
    S: BuildHasher + Default,
{
    fn unpack(ctx: &mut UnpackContext<'a>) -> Result<Self, PackError> {
        let (count, hint) = unpack_count::<(K, V)>(ctx)?;
        let mut out = HashMap::with_capacity_and_hasher(hint, S::default());
        for _ in 0..count {
            let key = K::unpack(ctx)?;
            let value = V::unpack(ctx)?;
            out.insert(key, value);
        }
        Ok(out)
    }
}
