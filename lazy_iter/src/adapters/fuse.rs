use {
  crate::iter::{DoubleEndedIter, Iter},
  log::trace,
};

////////////////////////////////////////////////////////////////////////////////////////////////

/// Drops the upstream iterator the first time it reports exhaustion from either end,
/// so every later pull returns `None` without touching it.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Fuse<I> {
  inner: Option<I>,
}

impl<I> Fuse<I> {
  pub fn new(inner: I) -> Self {
    Self { inner: Some(inner) }
  }

  pub fn is_done(&self) -> bool {
    self.inner.is_none()
  }

  fn pull<F, T>(&mut self, f: F) -> Option<T> where
    F: FnOnce(&mut I) -> Option<T>
  {
    let item = f(self.inner.as_mut()?);
    if item.is_none() {
      trace!("fuse: upstream exhausted, dropping it");
      self.inner = None;
    }
    item
  }
}

impl<I> Iter for Fuse<I> where
  I: Iter
{
  type Item = I::Item;

  fn next(&mut self) -> Option<Self::Item> {
    self.pull(|inner| inner.next())
  }
}

impl<I> DoubleEndedIter for Fuse<I> where
  I: DoubleEndedIter
{
  fn next_back(&mut self) -> Option<Self::Item> {
    self.pull(|inner| inner.next_back())
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
  use crate::{
    DoubleEndedIter, Iter, from, from_std,
    testing::assert_fused,
  };

  #[test]
  fn test_fuse_over_unfused_source() {
    // Returns `None` on the second call only.
    let mut calls = 0;
    let source = from_std(std::iter::from_fn(move || {
      calls += 1;
      if calls == 2 { None } else { Some(calls) }
    }));

    let mut iter = source.fuse();
    assert_eq!(iter.next(), Some(1));
    assert!(!iter.is_done());
    assert_eq!(iter.next(), None);
    assert!(iter.is_done());
    assert_fused(&mut iter);
  }

  #[test]
  fn test_fuse_from_back() {
    let mut iter = from(vec![1, 2]).fuse();
    assert_eq!(iter.next_back(), Some(2));
    assert_eq!(iter.next_back(), Some(1));
    assert_eq!(iter.next_back(), None);
    assert!(iter.is_done());
    assert_eq!(iter.next(), None);
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////
