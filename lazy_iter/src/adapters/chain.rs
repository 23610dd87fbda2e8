use {
  crate::iter::Iter,
  log::trace,
};

////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Active {
  First,
  Second,
}

////////////////////////////////////////////////////////////////////////////////////////////////

/// Yields everything from `first`, then everything from `second`.
///
/// Once `first` reports exhaustion it is never pulled again.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<A, B> {
  first: A,
  second: B,
  active: Active,
}

impl<A, B> Chain<A, B> {
  pub fn new(first: A, second: B) -> Self {
    Self { first, second, active: Active::First }
  }
}

impl<A, B> Iter for Chain<A, B> where
  A: Iter, B: Iter<Item = A::Item>
{
  type Item = A::Item;

  fn next(&mut self) -> Option<Self::Item> {
    if self.active == Active::First {
      match self.first.next() {
        Some(item) => return Some(item),
        None => {
          trace!("chain: first half exhausted, switching to second");
          self.active = Active::Second;
        }
      }
    }

    self.second.next()
  }
}

////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////
