use {
  crate::iter::{DoubleEndedIter, Iter},
};

////////////////////////////////////////////////////////////////////////////////////////////////

#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Map<I, F> {
  inner: I,
  f: F,
}

impl<I, F> Map<I, F> {
  pub fn new(inner: I, f: F) -> Self {
    Self { inner, f }
  }
}

impl<B, I, F> Iter for Map<I, F> where
  I: Iter, F: FnMut(I::Item) -> B
{
  type Item = B;

  fn next(&mut self) -> Option<B> {
    self.inner.next().map(&mut self.f)
  }
}

impl<B, I, F> DoubleEndedIter for Map<I, F> where
  I: DoubleEndedIter, F: FnMut(I::Item) -> B
{
  fn next_back(&mut self) -> Option<B> {
    self.inner.next_back().map(&mut self.f)
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
  use crate::{
    DoubleEndedIter, Iter, from,
    testing::{assert_fused, init_logger},
  };

  #[test]
  fn test_map() {
    assert_eq!(from(vec![1, 2, 3]).map(|x| x * 10).to_vec(), vec![10, 20, 30]);
    assert_eq!(from(vec!["a", "bc"]).map(str::len).to_vec(), vec![1, 2]);
  }

  #[test]
  fn test_map_is_lazy() {
    init_logger();
    let mut calls = 0;
    {
      let mut iter = from(vec![1, 2, 3, 4, 5]).map(|x| { calls += 1; x + 1 });
      assert_eq!(iter.next(), Some(2));
      assert_eq!(iter.next(), Some(3));
    }
    assert_eq!(calls, 2);
  }

  #[test]
  fn test_map_back() {
    let mut iter = from(vec![1, 2, 3]).map(|x| -x);
    assert_eq!(iter.next_back(), Some(-3));
    assert_eq!(iter.next(), Some(-1));
    assert_eq!(iter.next_back(), Some(-2));
    assert_fused(&mut iter);
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////
