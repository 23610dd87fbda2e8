use {
  crate::iter::{Iter, Iterable},
  log::trace,
};

////////////////////////////////////////////////////////////////////////////////////////////////

/// Yields the elements of each inner iterable in turn.
///
/// `J` is the iterator of the inner sequence currently being drained, if any. Empty
/// inner sequences are stepped over.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Flatten<I, J> {
  outer: I,
  inner: Option<J>,
}

impl<I, J> Flatten<I, J> {
  pub fn new(outer: I) -> Self {
    Self { outer, inner: None }
  }
}

impl<I, J> Iter for Flatten<I, J> where
  I: Iter, I::Item: Iterable<IntoIter = J>, J: Iter
{
  type Item = J::Item;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(inner) = self.inner.as_mut() {
        match inner.next() {
          None => self.inner = None,
          item => return item,
        }
      }

      let next_inner = self.outer.next()?;
      trace!("flatten: moving to next inner iterator");
      self.inner = Some(next_inner.iterate());
    }
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
