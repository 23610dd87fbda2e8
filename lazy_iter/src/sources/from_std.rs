use {
  crate::iter::{DoubleEndedIter, Iter},
};

////////////////////////////////////////////////////////////////////////////////////////////////

pub struct FromStd<I> {
  pub(crate) inner: I,
}

impl<I> FromStd<I> {
  pub fn into_inner(self) -> I {
    self.inner
  }
}

impl<I> Iter for FromStd<I> where
  I: Iterator
{
  type Item = I::Item;

  fn next(&mut self) -> Option<Self::Item> {
    Iterator::next(&mut self.inner)
  }
}

impl<I> DoubleEndedIter for FromStd<I> where
  I: DoubleEndedIterator
{
  fn next_back(&mut self) -> Option<Self::Item> {
    DoubleEndedIterator::next_back(&mut self.inner)
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
