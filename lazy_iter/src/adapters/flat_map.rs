use {
  crate::{
    adapters::{Flatten, Map},
    iter::{Iter, Iterable},
  },
};

////////////////////////////////////////////////////////////////////////////////////////////////

#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FlatMap<I, U, F> where
  U: Iterable
{
  inner: Flatten<Map<I, F>, U::IntoIter>,
}

impl<I, U, F> FlatMap<I, U, F> where
  U: Iterable
{
  pub fn new(outer: I, f: F) -> Self {
    Self { inner: Flatten::new(Map::new(outer, f)) }
  }
}

impl<I, U, F> Iter for FlatMap<I, U, F> where
  I: Iter, U: Iterable, F: FnMut(I::Item) -> U
{
  type Item = U::Item;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next()
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
