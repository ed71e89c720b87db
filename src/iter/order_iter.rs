use crate::{
    interval::Interval,
    node::{NodeId, Slot},
    point::Point,
    tree::IntervalTree,
};

/// An in-order cursor over a tree, yielding `(interval, value)` tuple
/// references from lowest to highest.
///
/// The cursor follows the parent links of the tree rather than keeping a
/// traversal stack, making a full walk amortised O(1) per step without
/// recursion or allocation.
#[derive(Debug)]
pub struct Iter<'a, P, V> {
    tree: &'a IntervalTree<P, V>,
    cursor: Option<NodeId>,
}

impl<'a, P, V> Iter<'a, P, V>
where
    P: Point + Clone,
{
    pub(crate) fn new(tree: &'a IntervalTree<P, V>) -> Self {
        Self {
            tree,
            cursor: tree.min(),
        }
    }
}

impl<'a, P, V> Iterator for Iter<'a, P, V>
where
    P: Point + Clone,
{
    type Item = (&'a Interval<P>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.tree.next(id);

        let n = self.tree.node(id);
        Some((&n.interval, &n.value))
    }
}

/// An iterator of owned `(interval, value)` tuples as the underlying tree
/// `into_iter()` impl.
#[derive(Debug)]
pub struct OwnedIter<P, V> {
    slots: Vec<Slot<P, V>>,
    order: std::vec::IntoIter<NodeId>,
}

impl<P, V> OwnedIter<P, V>
where
    P: Point + Clone,
{
    pub(crate) fn new(tree: IntervalTree<P, V>) -> Self {
        // Snapshot the in-order node sequence before taking the slots
        // apart.
        let mut order = Vec::with_capacity(tree.len());
        let mut cursor = tree.min();
        while let Some(id) = cursor {
            order.push(id);
            cursor = tree.next(id);
        }

        Self {
            slots: tree.into_slots(),
            order: order.into_iter(),
        }
    }
}

impl<P, V> Iterator for OwnedIter<P, V> {
    type Item = (Interval<P>, V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.order.next()?;
        match std::mem::replace(&mut self.slots[id.index()], Slot::Vacant(None)) {
            Slot::Occupied(n) => Some((n.interval, n.value)),
            Slot::Vacant(_) => unreachable!("traversal order references a freed node"),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}
