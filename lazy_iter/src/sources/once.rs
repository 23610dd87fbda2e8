use {
  crate::iter::{DoubleEndedIter, Iter},
};

////////////////////////////////////////////////////////////////////////////////////////////////

pub struct Once<T> {
  pub(crate) value: Option<T>,
}

impl<T> Iter for Once<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.value.take()
  }
}

impl<T> DoubleEndedIter for Once<T> {
  fn next_back(&mut self) -> Option<T> {
    self.value.take()
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
