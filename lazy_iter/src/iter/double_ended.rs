use {
  crate::{
    adapters::{ChainDoubleEnded, Rev},
    iter::{Iter, Iterable},
  },
  log::trace,
};

////////////////////////////////////////////////////////////////////////////////////////////////

/// An iterator that can also be pulled from the back.
///
/// Front and back pulls may be interleaved freely. The two cursors never cross: once
/// they meet, both `next` and `next_back` return `None`.
pub trait DoubleEndedIter: Iter {
  fn next_back(&mut self) -> Option<Self::Item>;

  fn advance_back_by(&mut self, n: usize) -> Result<(), usize> {
    for advanced in 0..n {
      if self.next_back().is_none() {
        trace!("advance_back_by: stopped after {} of {} elements", advanced, n);
        return Err(advanced);
      }
    }
    Ok(())
  }

  /// Like [`chain`](Iter::chain), but the result can be pulled from both ends: the back
  /// of `other` is drained before the back of `self`.
  fn chain_double_ended<U>(self, other: U) -> ChainDoubleEnded<Self, U::IntoIter> where
    Self: Sized, U: Iterable<Item = Self::Item>, U::IntoIter: DoubleEndedIter
  {
    ChainDoubleEnded::new(self, other.iterate())
  }

  fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
    if self.advance_back_by(n).is_err() { return None; }
    self.next_back()
  }

  fn rev(self) -> Rev<Self> where
    Self: Sized
  {
    Rev::new(self)
  }

  fn rfind<P>(&mut self, mut predicate: P) -> Option<Self::Item> where
    Self: Sized, P: FnMut(&Self::Item) -> bool
  {
    while let Some(item) = self.next_back() {
      if predicate(&item) { return Some(item); }
    }
    None
  }

  fn rfold<B, F>(mut self, init: B, mut f: F) -> B where
    Self: Sized, F: FnMut(B, Self::Item) -> B
  {
    let mut acc = init;
    while let Some(item) = self.next_back() {
      acc = f(acc, item);
    }
    acc
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////

impl<'a, I> DoubleEndedIter for &'a mut I where
  I: DoubleEndedIter + ?Sized
{
  fn next_back(&mut self) -> Option<Self::Item> {
    (**self).next_back()
  }
}

impl<I> DoubleEndedIter for Box<I> where
  I: DoubleEndedIter + ?Sized
{
  fn next_back(&mut self) -> Option<Self::Item> {
    (**self).next_back()
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
