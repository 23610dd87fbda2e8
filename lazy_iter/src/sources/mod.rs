pub mod empty;
pub mod from_fn;
pub mod from_std;
pub mod once;
pub mod slice_iter;
pub mod vec_iter;

pub use self::{
  empty::Empty,
  from_fn::FromFn,
  from_std::FromStd,
  once::Once,
  slice_iter::SliceIter,
  vec_iter::VecIter,
};

////////////////////////////////////////////////////////////////////////////////////////////////

use {
  crate::iter::Iterable,
  std::marker::PhantomData,
};

////////////////////////////////////////////////////////////////////////////////////////////////

/// Starts a lazy pipeline from a vector, array, slice or another iterator.
pub fn from<I>(iterable: I) -> I::IntoIter where
  I: Iterable
{
  iterable.iterate()
}

pub fn empty<T>() -> Empty<T> {
  Empty { item_type: PhantomData }
}

pub fn once<T>(value: T) -> Once<T> {
  Once { value: Some(value) }
}

/// Calls `f` for every element until it returns `None`; `f` is not called again after
/// that.
pub fn from_fn<T, F>(f: F) -> FromFn<F> where
  F: FnMut() -> Option<T>
{
  FromFn { f, done: false }
}

/// Wraps a standard library iterator. The result is only as fused as `iter` is; call
/// [`fuse`](crate::Iter::fuse) when that matters.
pub fn from_std<I>(iter: I) -> FromStd<I::IntoIter> where
  I: IntoIterator
{
  FromStd { inner: iter.into_iter() }
}

////////////////////////////////////////////////////////////////////////////////////////////////
