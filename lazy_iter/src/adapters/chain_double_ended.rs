use {
  crate::{
    adapters::Fuse,
    iter::{DoubleEndedIter, Iter},
  },
};

////////////////////////////////////////////////////////////////////////////////////////////////

/// A [`Chain`](crate::adapters::Chain) over two double-ended halves.
///
/// The front drains `first` then `second`, the back drains `second` then `first`. A
/// half is dropped as soon as it reports exhaustion from either end, so the front and
/// back cursors can meet inside either half but never pass each other.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChainDoubleEnded<A, B> {
  first: Fuse<A>,
  second: Fuse<B>,
}

impl<A, B> ChainDoubleEnded<A, B> {
  pub fn new(first: A, second: B) -> Self {
    Self { first: Fuse::new(first), second: Fuse::new(second) }
  }
}

impl<A, B> Iter for ChainDoubleEnded<A, B> where
  A: DoubleEndedIter, B: DoubleEndedIter<Item = A::Item>
{
  type Item = A::Item;

  fn next(&mut self) -> Option<Self::Item> {
    match self.first.next() {
      None => self.second.next(),
      item => item,
    }
  }
}

impl<A, B> DoubleEndedIter for ChainDoubleEnded<A, B> where
  A: DoubleEndedIter, B: DoubleEndedIter<Item = A::Item>
{
  fn next_back(&mut self) -> Option<Self::Item> {
    match self.second.next_back() {
      None => self.first.next_back(),
      item => item,
    }
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
  use crate::{
    DoubleEndedIter, Iter, from, once,
    testing::{assert_fused, init_logger},
  };

  #[test]
  fn test_front_and_back_order() {
    init_logger();
    let front = from(vec![1, 2]).chain_double_ended(vec![3, 4]).to_vec();
    assert_eq!(front, vec![1, 2, 3, 4]);

    let back = from(vec![1, 2]).chain_double_ended(vec![3, 4]).rev().to_vec();
    assert_eq!(back, vec![4, 3, 2, 1]);
  }

  #[test]
  fn test_alternating_pulls_never_overlap() {
    let mut iter = from(vec![1, 2]).chain_double_ended(vec![3, 4]);
    let mut seen = Vec::new();
    let mut from_front = true;

    loop {
      let item = if from_front { iter.next() } else { iter.next_back() };
      match item {
        Some(item) => seen.push(item),
        None => break,
      }
      from_front = !from_front;
    }

    assert_eq!(seen, vec![1, 4, 2, 3]);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
  }

  #[test]
  fn test_cursors_meet_in_first_half() {
    let mut iter = from(vec![1, 2, 3]).chain_double_ended(once(4));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
  }

  #[test]
  fn test_every_interleaving_yields_each_element_once() {
    // Bit i of `pattern` picks the end used for the i-th pull.
    for pattern in 0u32..64 {
      let mut iter = from(vec![1, 2]).chain_double_ended(vec![3, 4, 5]);
      let mut seen = Vec::new();

      for step in 0..6 {
        let item = if pattern & (1 << step) == 0 { iter.next() } else { iter.next_back() };
        seen.extend(item);
      }

      seen.sort();
      assert_eq!(seen, vec![1, 2, 3, 4, 5], "pattern {:06b}", pattern);
      assert_fused(&mut iter);
    }
  }

  #[test]
  fn test_empty_halves() {
    let mut iter = from(Vec::<i32>::new()).chain_double_ended(vec![7]);
    assert_eq!(iter.next(), Some(7));
    assert_fused(&mut iter);

    let mut iter = from(vec![8]).chain_double_ended(Vec::new());
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next(), None);
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////
