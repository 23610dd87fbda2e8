use {
  crate::iter::Iter,
  log::trace,
};

////////////////////////////////////////////////////////////////////////////////////////////////

/// Drops the first `n` upstream elements on the first pull, then forwards everything.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Skip<I> {
  inner: I,
  remaining: usize,
}

impl<I> Skip<I> {
  pub fn new(inner: I, n: usize) -> Self {
    Self { inner, remaining: n }
  }
}

impl<I> Iter for Skip<I> where
  I: Iter
{
  type Item = I::Item;

  fn next(&mut self) -> Option<Self::Item> {
    if self.remaining > 0 {
      trace!("skip: discarding {} leading elements", self.remaining);
    }

    while self.remaining > 0 {
      self.inner.next()?;
      self.remaining -= 1;
    }

    self.inner.next()
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
  use crate::{
    Iter, from,
    testing::{Counted, assert_fused},
  };

  #[test]
  fn test_skip() {
    assert_eq!(from(vec![1, 2, 3, 4]).skip(2).to_vec(), vec![3, 4]);
    assert_eq!(from(vec![1, 2]).skip(5).to_vec(), Vec::<i32>::new());
  }

  #[test]
  fn test_skip_zero_passes_through() {
    let (source, pulls) = Counted::new(from(vec![1, 2, 3]));
    let mut iter = source.skip(0);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(pulls.get(), 1);
    assert_eq!(iter.to_vec(), vec![2, 3]);
  }

  #[test]
  fn test_skip_is_lazy() {
    let (source, pulls) = Counted::new(from(vec![1, 2, 3, 4]));
    let mut iter = source.skip(2);
    assert_eq!(pulls.get(), 0);
    assert_eq!(iter.next(), Some(3));
    assert_eq!(pulls.get(), 3);
    assert_eq!(iter.next(), Some(4));
    assert_fused(&mut iter);
  }

  #[test]
  fn test_skip_past_end_is_fused() {
    let mut iter = from(vec![1, 2]).skip(3);
    assert_fused(&mut iter);
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////
