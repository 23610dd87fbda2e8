use {
  crate::iter::{DoubleEndedIter, Iter},
};

////////////////////////////////////////////////////////////////////////////////////////////////

/// Borrowing iterator over a slice; the unvisited middle shrinks from both ends.
#[derive(Clone, Debug)]
pub struct SliceIter<'a, T> {
  rest: &'a [T],
}

impl<'a, T> SliceIter<'a, T> {
  pub fn new(slice: &'a [T]) -> Self {
    Self { rest: slice }
  }

  pub fn as_slice(&self) -> &'a [T] {
    self.rest
  }
}

impl<'a, T> Iter for SliceIter<'a, T> {
  type Item = &'a T;

  fn next(&mut self) -> Option<&'a T> {
    let (first, rest) = self.rest.split_first()?;
    self.rest = rest;
    Some(first)
  }
}

impl<'a, T> DoubleEndedIter for SliceIter<'a, T> {
  fn next_back(&mut self) -> Option<&'a T> {
    let (last, rest) = self.rest.split_last()?;
    self.rest = rest;
    Some(last)
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
  use crate::{
    DoubleEndedIter, Iter, from,
    testing::assert_fused,
  };

  #[test]
  fn test_slice_iter() {
    let items = [1, 2, 3, 4];
    let mut iter = from(&items[..]);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.as_slice(), &[2, 3]);
    assert_eq!(iter.by_ref().map(|x| x * 10).to_vec(), vec![20, 30]);
    assert_fused(&mut iter);
    assert_eq!(items.len(), 4);
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////
