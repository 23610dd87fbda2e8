use {
  crate::iter::{DoubleEndedIter, Iter},
  std::{
    cell::Cell,
    rc::Rc,
  },
};

////////////////////////////////////////////////////////////////////////////////////////////////

pub fn init_logger() {
  let _ = env_logger::try_init();
}

/// Drains `iter`, then checks that it stays exhausted.
pub fn assert_fused<I>(iter: &mut I) where
  I: Iter
{
  while iter.next().is_some() { }

  for _ in 0..3 {
    assert!(iter.next().is_none(), "iterator yielded an element after exhaustion");
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////

/// Counts how many times the wrapped iterator is pulled, from either end.
pub struct Counted<I> {
  inner: I,
  pulls: Rc<Cell<usize>>,
}

impl<I> Counted<I> {
  pub fn new(inner: I) -> (Self, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    (Self { inner, pulls: pulls.clone() }, pulls)
  }

  fn bump(&self) {
    self.pulls.set(self.pulls.get() + 1);
  }
}

impl<I> Iter for Counted<I> where
  I: Iter
{
  type Item = I::Item;

  fn next(&mut self) -> Option<Self::Item> {
    self.bump();
    self.inner.next()
  }
}

impl<I> DoubleEndedIter for Counted<I> where
  I: DoubleEndedIter
{
  fn next_back(&mut self) -> Option<Self::Item> {
    self.bump();
    self.inner.next_back()
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////
