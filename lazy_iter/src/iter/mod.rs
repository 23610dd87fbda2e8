pub mod double_ended;
pub mod into_std;
pub mod iterable;

pub use self::{
  double_ended::DoubleEndedIter,
  into_std::IntoStd,
  iterable::Iterable,
};

////////////////////////////////////////////////////////////////////////////////////////////////

use {
  crate::{
    adapters::{Chain, Enumerate, Filter, FlatMap, Flatten, Fuse, Map, Skip},
    collections::{IndexMap, IndexSet},
  },
  log::trace,
  std::{
    hash::Hash,
    iter::FromIterator,
  },
};

////////////////////////////////////////////////////////////////////////////////////////////////

/// A single-pass cursor over a sequence of elements.
///
/// Implementors provide [`next`](Iter::next) and nothing else; every other method is
/// written against it. Once `next` has returned `None` it must keep returning `None`.
pub trait Iter {
  type Item;

  /// Pulls the next element, or `None` once the sequence is exhausted.
  fn next(&mut self) -> Option<Self::Item>;

  /// Discards the next `n` elements.
  ///
  /// Returns `Err(k)` when the sequence ran out after only `k` elements.
  fn advance_by(&mut self, n: usize) -> Result<(), usize> {
    for advanced in 0..n {
      if self.next().is_none() {
        trace!("advance_by: stopped after {} of {} elements", advanced, n);
        return Err(advanced);
      }
    }
    Ok(())
  }

  /// Tests every remaining element, stopping right after the first one that fails.
  fn all<F>(&mut self, mut f: F) -> bool where
    Self: Sized, F: FnMut(Self::Item) -> bool
  {
    while let Some(item) = self.next() {
      if !f(item) { return false; }
    }
    true
  }

  /// Tests remaining elements, stopping right after the first one that passes.
  fn any<F>(&mut self, mut f: F) -> bool where
    Self: Sized, F: FnMut(Self::Item) -> bool
  {
    while let Some(item) = self.next() {
      if f(item) { return true; }
    }
    false
  }

  fn by_ref(&mut self) -> &mut Self where
    Self: Sized
  {
    self
  }

  fn chain<U>(self, other: U) -> Chain<Self, U::IntoIter> where
    Self: Sized, U: Iterable<Item = Self::Item>
  {
    Chain::new(self, other.iterate())
  }

  fn collect<C>(self) -> C where
    Self: Sized, C: FromIterator<Self::Item>
  {
    self.into_std().collect()
  }

  fn count(self) -> usize where
    Self: Sized
  {
    self.fold(0, |count, _| count + 1)
  }

  fn enumerate(self) -> Enumerate<Self> where
    Self: Sized
  {
    Enumerate::new(self)
  }

  fn filter<P>(self, predicate: P) -> Filter<Self, P> where
    Self: Sized, P: FnMut(&Self::Item) -> bool
  {
    Filter::new(self, predicate)
  }

  fn find<P>(&mut self, mut predicate: P) -> Option<Self::Item> where
    Self: Sized, P: FnMut(&Self::Item) -> bool
  {
    while let Some(item) = self.next() {
      if predicate(&item) { return Some(item); }
    }
    None
  }

  /// Maps every element to an iterable and yields the elements of those in order.
  ///
  /// `f` runs on an outer element only once the previous inner iterator is drained.
  fn flat_map<U, F>(self, f: F) -> FlatMap<Self, U, F> where
    Self: Sized, U: Iterable, F: FnMut(Self::Item) -> U
  {
    FlatMap::new(self, f)
  }

  fn flatten(self) -> Flatten<Self, <Self::Item as Iterable>::IntoIter> where
    Self: Sized, Self::Item: Iterable
  {
    Flatten::new(self)
  }

  fn fold<B, F>(mut self, init: B, mut f: F) -> B where
    Self: Sized, F: FnMut(B, Self::Item) -> B
  {
    let mut acc = init;
    while let Some(item) = self.next() {
      acc = f(acc, item);
    }
    acc
  }

  fn for_each<F>(self, mut f: F) where
    Self: Sized, F: FnMut(Self::Item)
  {
    self.fold((), |(), item| f(item))
  }

  fn fuse(self) -> Fuse<Self> where
    Self: Sized
  {
    Fuse::new(self)
  }

  fn into_std(self) -> IntoStd<Self> where
    Self: Sized
  {
    IntoStd::new(self)
  }

  fn last(self) -> Option<Self::Item> where
    Self: Sized
  {
    self.fold(None, |_, item| Some(item))
  }

  fn map<B, F>(self, f: F) -> Map<Self, F> where
    Self: Sized, F: FnMut(Self::Item) -> B
  {
    Map::new(self, f)
  }

  /// Returns the element `n` places ahead, consuming it and everything before it.
  fn nth(&mut self, n: usize) -> Option<Self::Item> {
    if self.advance_by(n).is_err() { return None; }
    self.next()
  }

  fn position<P>(&mut self, mut predicate: P) -> Option<usize> where
    Self: Sized, P: FnMut(Self::Item) -> bool
  {
    let mut index = 0;
    while let Some(item) = self.next() {
      if predicate(item) { return Some(index); }
      index += 1;
    }
    None
  }

  /// Folds with the first element as the seed; `None` for an empty sequence.
  fn reduce<F>(mut self, f: F) -> Option<Self::Item> where
    Self: Sized, F: FnMut(Self::Item, Self::Item) -> Self::Item
  {
    let first = self.next()?;
    Some(self.fold(first, f))
  }

  fn skip(self, n: usize) -> Skip<Self> where
    Self: Sized
  {
    Skip::new(self, n)
  }

  /// Collects `(key, value)` pairs into a map. A repeated key keeps its first
  /// position and takes the last value written.
  fn to_map<K, V>(self) -> IndexMap<K, V> where
    Self: Sized + Iter<Item = (K, V)>, K: Hash + Eq
  {
    self.fold(IndexMap::default(), |mut map, (key, value)| {
      map.insert(key, value);
      map
    })
  }

  /// Collects into a set that remembers the order elements were first seen in.
  fn to_set(self) -> IndexSet<Self::Item> where
    Self: Sized, Self::Item: Hash + Eq
  {
    self.fold(IndexSet::default(), |mut set, item| {
      set.insert(item);
      set
    })
  }

  fn to_vec(self) -> Vec<Self::Item> where
    Self: Sized
  {
    self.fold(Vec::new(), |mut items, item| {
      items.push(item);
      items
    })
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////

impl<'a, I> Iter for &'a mut I where
  I: Iter + ?Sized
{
  type Item = I::Item;

  fn next(&mut self) -> Option<Self::Item> {
    (**self).next()
  }
}

impl<I> Iter for Box<I> where
  I: Iter + ?Sized
{
  type Item = I::Item;

  fn next(&mut self) -> Option<Self::Item> {
    (**self).next()
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
