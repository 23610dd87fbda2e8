//! Lazy, pull-based iterators.
//!
//! Every iterator implements the single primitive [`Iter::next`]. Terminal operations
//! (`count`, `find`, `fold`, `nth`, `advance_by`, ...) and adapter constructors
//! (`map`, `filter`, `chain`, `flatten`, ...) are provided methods of [`Iter`], so a
//! new source or adapter only has to say how to produce its next element.
//!
//! ```
//! use lazy_iter::prelude::*;
//!
//! let sum = lazy_iter::from(vec![1, 2, 3])
//!   .chain(vec![4, 5])
//!   .filter(|x| x % 2 == 1)
//!   .fold(0, |acc, x| acc + x);
//!
//! assert_eq!(sum, 9);
//! ```

////////////////////////////////////////////////////////////////////////////////////////////////

pub mod adapters;
pub mod collections;
pub mod iter;
pub mod sources;

#[cfg(test)]
mod testing;

pub use {
  crate::{
    iter::{DoubleEndedIter, IntoStd, Iter, Iterable},
    sources::{empty, from, from_fn, from_std, once},
  },
  ::log,
};

////////////////////////////////////////////////////////////////////////////////////////////////

pub mod prelude {
  pub use {
    crate::{
      collections::{IndexMap, IndexSet},
      iter::{DoubleEndedIter, Iter, Iterable},
    },
  };
}

////////////////////////////////////////////////////////////////////////////////////////////////
