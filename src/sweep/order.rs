//! The two strict total orders driving the sweep.
//!
//! [queue_cmp] orders events by processing time (the event queue order),
//! [boolean_status_cmp] and [hole_status_cmp] order the left events currently
//! cut by the sweep line from bottom to top. The status orders differ in how
//! they resolve segments with different left endpoints and in the direction
//! of their collinear fallback, so they are kept as two explicit functions
//! rather than one flag-switched comparator.

use super::event::{above, below, SweepEvent};
use crate::core::math::signed_area;
use crate::core::traits::Real;
use std::cmp::Ordering;

/// Event queue order: the event compared `Less` is processed first.
///
/// Events are ordered by x, then y, right endpoints before left at the same
/// point, then the event whose edge lies below, then source tag and arena
/// index so the order is total.
pub fn queue_cmp<T>(events: &[SweepEvent<T>], a: usize, b: usize) -> Ordering
where
    T: Real,
{
    if a == b {
        return Ordering::Equal;
    }
    let (ea, eb) = (&events[a], &events[b]);
    if ea.point.x < eb.point.x {
        return Ordering::Less;
    }
    if ea.point.x > eb.point.x {
        return Ordering::Greater;
    }
    if ea.point.y < eb.point.y {
        return Ordering::Less;
    }
    if ea.point.y > eb.point.y {
        return Ordering::Greater;
    }
    if ea.left != eb.left {
        // same point, the right endpoint is processed first
        return if eb.left {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    if signed_area(ea.point, events[ea.other].point, events[eb.other].point) != T::zero() {
        // same point, both left or both right, not collinear: the event
        // whose edge lies below goes first
        return if below(events, a, events[eb.other].point) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    ea.source.cmp(&eb.source).then(a.cmp(&b))
}

/// Status line order used by the Boolean operation sweep.
///
/// `a` and `b` must be left events. Returns `Less` when `a`'s edge lies below
/// `b`'s edge on the sweep line.
pub fn boolean_status_cmp<T>(events: &[SweepEvent<T>], a: usize, b: usize) -> Ordering
where
    T: Real,
{
    if a == b {
        return Ordering::Equal;
    }
    let pa = events[a].point;
    let oa = events[events[a].other].point;
    let pb = events[b].point;
    let ob = events[events[b].other].point;

    if signed_area(pa, oa, pb) != T::zero() || signed_area(pa, oa, ob) != T::zero() {
        // segments not collinear
        if pa == pb {
            // shared left endpoint, sort by the right endpoint
            return if below(events, a, ob) {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        if pa.x == pb.x {
            return if pa.y < pb.y {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        if queue_cmp(events, a, b) == Ordering::Greater {
            // a entered the status line after b
            return if above(events, b, pa) {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        // b entered the status line after a
        return if below(events, a, pb) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    // collinear segments
    if events[a].source != events[b].source {
        // subject edges sort below clipping edges
        return events[a].source.cmp(&events[b].source);
    }
    if pa == pb {
        return Ordering::Equal;
    }
    queue_cmp(events, b, a)
}

/// Status line order used by hole detection.
///
/// Differs from [boolean_status_cmp] in how segments with different left
/// endpoints are resolved and in using the ascending queue order as the
/// collinear fallback.
pub fn hole_status_cmp<T>(events: &[SweepEvent<T>], a: usize, b: usize) -> Ordering
where
    T: Real,
{
    if a == b {
        return Ordering::Equal;
    }
    let pa = events[a].point;
    let oa = events[events[a].other].point;
    let pb = events[b].point;
    let ob = events[events[b].other].point;

    if signed_area(pa, oa, pb) != T::zero() || signed_area(pa, oa, ob) != T::zero() {
        // segments not collinear
        if pa == pb {
            return if below(events, a, ob) {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        if queue_cmp(events, a, b) == Ordering::Less {
            // a was queued before b
            return if below(events, a, pb) {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        return if above(events, b, pa) {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }

    // collinear segments
    if pa == pb {
        return Ordering::Equal;
    }
    queue_cmp(events, a, b)
}
