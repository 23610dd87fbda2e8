use {
  crate::iter::Iter,
};

////////////////////////////////////////////////////////////////////////////////////////////////

#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Enumerate<I> {
  inner: I,
  count: usize,
}

impl<I> Enumerate<I> {
  pub fn new(inner: I) -> Self {
    Self { inner, count: 0 }
  }
}

impl<I> Iter for Enumerate<I> where
  I: Iter
{
  type Item = (usize, I::Item);

  fn next(&mut self) -> Option<Self::Item> {
    let item = self.inner.next()?;
    let index = self.count;
    self.count += 1;
    Some((index, item))
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
