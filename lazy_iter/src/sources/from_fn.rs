use {
  crate::iter::Iter,
};

////////////////////////////////////////////////////////////////////////////////////////////////

pub struct FromFn<F> {
  pub(crate) f: F,
  pub(crate) done: bool,
}

impl<T, F> Iter for FromFn<F> where
  F: FnMut() -> Option<T>
{
  type Item = T;

  fn next(&mut self) -> Option<T> {
    if self.done { return None; }

    let item = (self.f)();
    self.done = item.is_none();
    item
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
  use crate::{
    Iter, from_fn,
    testing::assert_fused,
  };

  #[test]
  fn test_generator_not_called_after_end() {
    let mut calls = 0;
    {
      let mut iter = from_fn(|| {
        calls += 1;
        if calls < 3 { Some(calls) } else { None }
      });
      assert_eq!(iter.by_ref().to_vec(), vec![1, 2]);
      assert_fused(&mut iter);
    }
    assert_eq!(calls, 3);
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////
