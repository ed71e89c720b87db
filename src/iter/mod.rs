mod order_iter;
mod pruners;
mod pruning_iter;

pub use order_iter::{Iter, OwnedIter};
pub(crate) use pruners::*;
pub(crate) use pruning_iter::*;
