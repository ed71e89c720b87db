#![forbid(unsafe_code)]

//! An augmented red-black interval tree.
//!
//! [`IntervalTree`] stores `(interval, value)` mappings keyed by half-open
//! intervals `[left, right)` over any [`Point`] domain — a type equipped
//! with a single strict-weak `less` predicate. On top of the usual map
//! operations it answers ordered neighbour queries and four kinds of
//! overlap query, each in time logarithmic in the tree size:
//!
//! - the nodes containing a point,
//! - the nodes containing an interval,
//! - the nodes contained in an interval,
//! - the nodes overlapping an interval.
//!
//! Every node caches the maximum right endpoint of the intervals in its
//! subtree; the cached maxima ride along with the red-black rebalancing
//! and let the overlap queries prune entire subtrees from the search.
//!
//! ```
//! use rbitree::{Interval, IntervalTree};
//!
//! let mut tree = IntervalTree::default();
//! tree.replace_or_insert(Interval::from(1..4), "a");
//! tree.replace_or_insert(Interval::from(3..9), "b");
//!
//! assert_eq!(tree.get(&Interval::from(1..4)), Some(&"a"));
//!
//! let overlapping: Vec<_> = tree
//!     .nodes_overlapping_interval(&Interval::from(0..2))
//!     .map(|id| *tree.value(id))
//!     .collect();
//! assert_eq!(overlapping, ["a"]);
//! ```

mod interval;
mod iter;
mod node;
mod point;
mod tree;


pub use interval::Interval;
pub use iter::{Iter, OwnedIter};
pub use node::NodeId;
pub use point::Point;
pub use tree::IntervalTree;
