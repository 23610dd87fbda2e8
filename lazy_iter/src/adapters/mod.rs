pub mod chain;
pub mod chain_double_ended;
pub mod enumerate;
pub mod filter;
pub mod flat_map;
pub mod flatten;
pub mod fuse;
pub mod map;
pub mod rev;
pub mod skip;

pub use self::{
  chain::Chain,
  chain_double_ended::ChainDoubleEnded,
  enumerate::Enumerate,
  filter::Filter,
  flat_map::FlatMap,
  flatten::Flatten,
  fuse::Fuse,
  map::Map,
  rev::Rev,
  skip::Skip,
};

////////////////////////////////////////////////////////////////////////////////////////////////
