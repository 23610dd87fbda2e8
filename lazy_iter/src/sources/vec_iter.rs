use {
  crate::iter::{DoubleEndedIter, Iter},
  std::collections::VecDeque,
};

////////////////////////////////////////////////////////////////////////////////////////////////

/// Owning iterator over a vector. Both ends pop from the same buffer, so the front and
/// back cursors can never pass each other.
#[derive(Clone, Debug)]
pub struct VecIter<T> {
  items: VecDeque<T>,
}

impl<T> VecIter<T> {
  pub fn new(items: Vec<T>) -> Self {
    Self { items: VecDeque::from(items) }
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl<T> Iter for VecIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.items.pop_front()
  }
}

impl<T> DoubleEndedIter for VecIter<T> {
  fn next_back(&mut self) -> Option<T> {
    self.items.pop_back()
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
