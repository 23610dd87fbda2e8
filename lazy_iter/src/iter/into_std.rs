use {
  crate::iter::{DoubleEndedIter, Iter},
};

////////////////////////////////////////////////////////////////////////////////////////////////

/// Exposes an [`Iter`] as a standard library iterator, so it can drive a `for` loop or
/// any `std::iter` consumer. Created by [`Iter::into_std`].
pub struct IntoStd<I> {
  inner: I,
}

impl<I> IntoStd<I> {
  pub fn new(inner: I) -> Self {
    Self { inner }
  }

  pub fn into_inner(self) -> I {
    self.inner
  }
}

impl<I> Iterator for IntoStd<I> where
  I: Iter
{
  type Item = I::Item;

  fn next(&mut self) -> Option<Self::Item> {
    Iter::next(&mut self.inner)
  }
}

impl<I> DoubleEndedIterator for IntoStd<I> where
  I: DoubleEndedIter
{
  fn next_back(&mut self) -> Option<Self::Item> {
    DoubleEndedIter::next_back(&mut self.inner)
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
