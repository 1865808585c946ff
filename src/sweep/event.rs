use crate::core::math::{signed_area, Point, Segment};
use crate::core::traits::Real;

/// Input the edge of a sweep event came from.
///
/// Boolean operations tag edges `Subject` or `Clipping`; hole detection tags
/// them with the index of the contour they belong to. The derived ordering
/// (subject before clipping, contours by index) is the final tie breaker of
/// the event queue order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventSource {
    Subject,
    Clipping,
    Contour(usize),
}

impl EventSource {
    /// Contour index for hole detection events.
    #[inline]
    pub(crate) fn contour_index(self) -> Option<usize> {
        match self {
            EventSource::Contour(i) => Some(i),
            _ => None,
        }
    }
}

/// Classification of an edge relative to the other input, assigned while
/// sweeping and consumed by the inclusion rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EdgeType {
    Normal,
    NonContributing,
    SameTransition,
    DifferentTransition,
}

/// One endpoint of an edge processed by the sweep line.
///
/// Events live in an arena (`Vec<SweepEvent<T>>`) and reference each other by
/// index: `other` is the event at the edge's opposite endpoint and is rewired
/// when the edge is split. All fields below `edge_type` are only meaningful
/// on left events.
#[derive(Debug, Clone)]
pub struct SweepEvent<T> {
    /// Point associated with the event.
    pub point: Point<T>,
    /// Is `point` the left (first processed) endpoint of the edge?
    pub left: bool,
    /// Arena index of the event at the edge's other endpoint.
    pub other: usize,
    /// Input the edge belongs to.
    pub source: EventSource,
    pub edge_type: EdgeType,
    /// Does the edge represent an inside-outside transition of its own input
    /// for a vertical ray from below?
    pub in_out: bool,
    /// Same transition flag for the closest edge of the other input below
    /// this one in the status line.
    pub other_in_out: bool,
    /// Closest edge below this one in the status line that is part of the
    /// result.
    pub prev_in_result: Option<usize>,
    /// Is the edge part of the operation's result?
    pub in_result: bool,
    // contour assembly bookkeeping
    pub sort_pos: usize,
    pub result_in_out: bool,
    pub contour_id: usize,
}

impl<T> SweepEvent<T>
where
    T: Real,
{
    pub fn new(point: Point<T>, left: bool, other: usize, source: EventSource) -> Self {
        SweepEvent {
            point,
            left,
            other,
            source,
            edge_type: EdgeType::Normal,
            in_out: false,
            other_in_out: false,
            prev_in_result: None,
            in_result: false,
            sort_pos: 0,
            result_in_out: false,
            contour_id: 0,
        }
    }

    pub fn with_in_out(
        point: Point<T>,
        left: bool,
        other: usize,
        source: EventSource,
        in_out: bool,
    ) -> Self {
        let mut e = Self::new(point, left, other, source);
        e.in_out = in_out;
        e
    }
}

/// Edge associated to the event at `i`, directed from the event's point to
/// its twin's point.
#[inline]
pub fn event_segment<T>(events: &[SweepEvent<T>], i: usize) -> Segment<T>
where
    T: Real,
{
    Segment::new(events[i].point, events[events[i].other].point)
}

/// Is the edge of event `i` below point `p`?
#[inline]
pub fn below<T>(events: &[SweepEvent<T>], i: usize, p: Point<T>) -> bool
where
    T: Real,
{
    let e = &events[i];
    let o = events[e.other].point;
    if e.left {
        signed_area(e.point, o, p) > T::zero()
    } else {
        signed_area(o, e.point, p) > T::zero()
    }
}

/// Is the edge of event `i` above point `p`?
#[inline]
pub fn above<T>(events: &[SweepEvent<T>], i: usize, p: Point<T>) -> bool
where
    T: Real,
{
    !below(events, i, p)
}

/// Is the edge of event `i` vertical?
#[inline]
pub fn vertical<T>(events: &[SweepEvent<T>], i: usize) -> bool
where
    T: Real,
{
    events[i].point.x == events[events[i].other].point.x
}
