use {
  crate::iter::{DoubleEndedIter, Iter},
};

////////////////////////////////////////////////////////////////////////////////////////////////

#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Rev<I> {
  inner: I,
}

impl<I> Rev<I> {
  pub fn new(inner: I) -> Self {
    Self { inner }
  }
}

impl<I> Iter for Rev<I> where
  I: DoubleEndedIter
{
  type Item = I::Item;

  fn next(&mut self) -> Option<Self::Item> {
    self.inner.next_back()
  }
}

impl<I> DoubleEndedIter for Rev<I> where
  I: DoubleEndedIter
{
  fn next_back(&mut self) -> Option<Self::Item> {
    self.inner.next()
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
