use crate::{interval::Interval, node::NodeId, point::Point, tree::IntervalTree};

/// The pruning decisions of one range-query shape, driving a
/// [`PruningIter`] walk.
///
/// The oracle sees only the data the walk needs: the cached subtree
/// maximum on entry to a subtree, and the node interval at each visited
/// node.
pub(crate) trait PruningOracle<P> {
    /// Returns true when the subtree with the given cached maximum right
    /// endpoint may hold a match and should be entered.
    fn enter_subtree(&self, max_right: &P) -> bool;

    /// Returns true when the left child of a node with this interval
    /// should be descended into.
    fn visit_left(&self, interval: &Interval<P>) -> bool;

    /// Returns true when the right child of a node with this interval
    /// should be descended into.
    fn visit_right(&self, interval: &Interval<P>) -> bool;

    /// Returns true if a node with this interval matches the query and
    /// should be yielded.
    fn filter_yield(&self, interval: &Interval<P>) -> bool;
}

/// An [`Iterator`] performing a depth-first, in-order walk of the tree,
/// yielding the nodes that match a [`PruningOracle`] in interval order.
pub(crate) struct PruningIter<'a, P, V, O> {
    tree: &'a IntervalTree<P, V>,
    stack: Vec<NodeId>,
    oracle: O,
}

impl<'a, P, V, O> PruningIter<'a, P, V, O>
where
    P: Point + Clone,
    O: PruningOracle<P>,
{
    pub(crate) fn new(tree: &'a IntervalTree<P, V>, oracle: O) -> Self {
        let mut this = Self {
            tree,
            stack: Vec::new(),
            oracle,
        };

        // Descend down the left side of the tree, pushing the internal
        // nodes onto the stack until the left-most unpruned node is
        // reached.
        this.push_subtree(tree.root());

        this
    }

    /// Walk the left spine of the subtree rooted at `id`, pushing every
    /// node that survives pruning.
    fn push_subtree(&mut self, mut id: Option<NodeId>) {
        while let Some(current) = id {
            let n = self.tree.node(current);
            if !self.oracle.enter_subtree(&n.max_right) {
                // No interval in this subtree can satisfy the query.
                break;
            }
            self.stack.push(current);
            id = if self.oracle.visit_left(&n.interval) {
                n.left
            } else {
                None
            };
        }
    }
}

impl<'a, P, V, O> Iterator for PruningIter<'a, P, V, O>
where
    P: Point + Clone,
    O: PruningOracle<P>,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.stack.pop()?;
            let n = self.tree.node(id);

            // Queue the right subtree to be visited after this node.
            if self.oracle.visit_right(&n.interval) {
                self.push_subtree(n.right);
            }

            if self.oracle.filter_yield(&n.interval) {
                return Some(id);
            }
        }
    }
}
