use {
  crate::{
    iter::Iter,
    sources::{SliceIter, VecIter},
  },
};

////////////////////////////////////////////////////////////////////////////////////////////////

/// Anything that can be turned into an [`Iter`].
///
/// This is what `chain`, `flatten` and `flat_map` accept as their inner sequences.
pub trait Iterable {
  type Item;
  type IntoIter: Iter<Item = Self::Item>;

  fn iterate(self) -> Self::IntoIter;
}

////////////////////////////////////////////////////////////////////////////////////////////////

impl<I> Iterable for I where
  I: Iter
{
  type Item = I::Item;
  type IntoIter = I;

  fn iterate(self) -> I {
    self
  }
}

impl<T> Iterable for Vec<T> {
  type Item = T;
  type IntoIter = VecIter<T>;

  fn iterate(self) -> VecIter<T> {
    VecIter::new(self)
  }
}

impl<T, const N: usize> Iterable for [T; N] {
  type Item = T;
  type IntoIter = VecIter<T>;

  fn iterate(self) -> VecIter<T> {
    VecIter::new(Vec::from(self))
  }
}

impl<'a, T> Iterable for &'a [T] {
  type Item = &'a T;
  type IntoIter = SliceIter<'a, T>;

  fn iterate(self) -> SliceIter<'a, T> {
    SliceIter::new(self)
  }
}

impl<'a, T> Iterable for &'a Vec<T> {
  type Item = &'a T;
  type IntoIter = SliceIter<'a, T>;

  fn iterate(self) -> SliceIter<'a, T> {
    SliceIter::new(self.as_slice())
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
