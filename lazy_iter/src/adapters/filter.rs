use {
  crate::iter::{DoubleEndedIter, Iter},
};

////////////////////////////////////////////////////////////////////////////////////////////////

#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Filter<I, P> {
  inner: I,
  predicate: P,
}

impl<I, P> Filter<I, P> {
  pub fn new(inner: I, predicate: P) -> Self {
    Self { inner, predicate }
  }
}

impl<I, P> Iter for Filter<I, P> where
  I: Iter, P: FnMut(&I::Item) -> bool
{
  type Item = I::Item;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      let item = self.inner.next()?;
      if (self.predicate)(&item) { return Some(item); }
    }
  }
}

impl<I, P> DoubleEndedIter for Filter<I, P> where
  I: DoubleEndedIter, P: FnMut(&I::Item) -> bool
{
  fn next_back(&mut self) -> Option<Self::Item> {
    loop {
      let item = self.inner.next_back()?;
      if (self.predicate)(&item) { return Some(item); }
    }
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
