use {
  crate::iter::{DoubleEndedIter, Iter},
  std::marker::PhantomData,
};

////////////////////////////////////////////////////////////////////////////////////////////////

pub struct Empty<T> {
  pub(crate) item_type: PhantomData<T>,
}

impl<T> Iter for Empty<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    None
  }
}

impl<T> DoubleEndedIter for Empty<T> {
  fn next_back(&mut self) -> Option<T> {
    None
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////
