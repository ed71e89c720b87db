use crate::{
    interval::Interval,
    point::{less_or_equal, Point},
};

use super::pruning_iter::PruningOracle;

/// Selects nodes whose interval contains a single point.
pub(crate) struct ContainsPointPruner<'a, P>(pub(crate) &'a P);

impl<'a, P> PruningOracle<P> for ContainsPointPruner<'a, P>
where
    P: Point,
{
    fn enter_subtree(&self, max_right: &P) -> bool {
        // No interval in the subtree reaches past the point.
        !less_or_equal(max_right, self.0)
    }

    fn visit_left(&self, _interval: &Interval<P>) -> bool {
        true
    }

    fn visit_right(&self, interval: &Interval<P>) -> bool {
        // Keys to the right start at or after this one; once the left
        // endpoint passes the point no further matches can exist.
        less_or_equal(interval.left(), self.0)
    }

    fn filter_yield(&self, interval: &Interval<P>) -> bool {
        interval.contains_point(self.0)
    }
}

/// Selects nodes whose interval contains the whole query interval.
pub(crate) struct ContainsIntervalPruner<'a, P>(pub(crate) &'a Interval<P>);

impl<'a, P> PruningOracle<P> for ContainsIntervalPruner<'a, P>
where
    P: Point,
{
    fn enter_subtree(&self, max_right: &P) -> bool {
        // No interval in the subtree reaches the query right endpoint.
        !max_right.less(self.0.right())
    }

    fn visit_left(&self, _interval: &Interval<P>) -> bool {
        true
    }

    fn visit_right(&self, interval: &Interval<P>) -> bool {
        less_or_equal(interval.left(), self.0.left())
    }

    fn filter_yield(&self, interval: &Interval<P>) -> bool {
        interval.contains_interval(self.0)
    }
}

/// Selects nodes whose interval lies within the query interval.
pub(crate) struct ContainedInPruner<'a, P>(pub(crate) &'a Interval<P>);

impl<'a, P> PruningOracle<P> for ContainedInPruner<'a, P>
where
    P: Point,
{
    fn enter_subtree(&self, max_right: &P) -> bool {
        // No interval in the subtree reaches past the query left endpoint.
        !less_or_equal(max_right, self.0.left())
    }

    fn visit_left(&self, interval: &Interval<P>) -> bool {
        // Keys to the left start at or before this one; once the left
        // endpoint falls below the query no contained key can sit there.
        less_or_equal(self.0.left(), interval.left())
    }

    fn visit_right(&self, _interval: &Interval<P>) -> bool {
        true
    }

    fn filter_yield(&self, interval: &Interval<P>) -> bool {
        self.0.contains_interval(interval)
    }
}

/// Selects nodes whose interval overlaps the query interval.
pub(crate) struct OverlapsPruner<'a, P>(pub(crate) &'a Interval<P>);

impl<'a, P> PruningOracle<P> for OverlapsPruner<'a, P>
where
    P: Point,
{
    fn enter_subtree(&self, max_right: &P) -> bool {
        // No interval in the subtree reaches past the query left endpoint.
        !less_or_equal(max_right, self.0.left())
    }

    fn visit_left(&self, interval: &Interval<P>) -> bool {
        self.0.left().less(interval.right())
    }

    fn visit_right(&self, _interval: &Interval<P>) -> bool {
        true
    }

    fn filter_yield(&self, interval: &Interval<P>) -> bool {
        interval.overlaps(self.0)
    }
}
