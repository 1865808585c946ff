//! Boolean set operations on polygons via a sweep line over the edges.
//!
//! The sweep processes edge endpoint events left to right, maintaining the
//! set of edges currently cut by the sweep line. Each left event is
//! classified against the nearest edge below it, crossing edges are split at
//! their intersection points, and the surviving edges are stitched back into
//! contours with hole nesting resolved.

use crate::core::math::{segment_intr, Point, Segment, SegmentIntr};
use crate::core::traits::Real;
use crate::error::ClipError;
use crate::polygon::{BoundingBox, Contour, Polygon};
use crate::sweep::event::{event_segment, vertical};
use crate::sweep::order::queue_cmp;
use crate::sweep::{EdgeType, EventQueue, EventSource, StatusOrder, SweepEvent, SweepLineStatus};
use std::cmp::Ordering;

/// The supported Boolean set operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BooleanOp {
    Intersection,
    Union,
    Difference,
    Xor,
}

/// Computes `subject op clipping`.
///
/// The inputs are not modified. Fails with
/// [ClipError::SelfOverlappingEdges] when an input polygon has overlapping
/// edges with itself.
pub fn boolean_op<T>(
    subject: &Polygon<T>,
    clipping: &Polygon<T>,
    op: BooleanOp,
) -> Result<Polygon<T>, ClipError>
where
    T: Real,
{
    let subject_bb = subject.bounding_box();
    let clipping_bb = clipping.bounding_box();

    if let Some(result) = trivial_op(subject, clipping, &subject_bb, &clipping_bb, op) {
        return Ok(result);
    }

    BooleanSweep::new(subject, clipping, op).execute(&subject_bb, &clipping_bb)
}

/// Intersection of the two polygons.
pub fn intersection<T>(subject: &Polygon<T>, clipping: &Polygon<T>) -> Result<Polygon<T>, ClipError>
where
    T: Real,
{
    boolean_op(subject, clipping, BooleanOp::Intersection)
}

/// Union of the two polygons.
pub fn union<T>(subject: &Polygon<T>, clipping: &Polygon<T>) -> Result<Polygon<T>, ClipError>
where
    T: Real,
{
    boolean_op(subject, clipping, BooleanOp::Union)
}

/// Difference `subject - clipping`.
pub fn difference<T>(subject: &Polygon<T>, clipping: &Polygon<T>) -> Result<Polygon<T>, ClipError>
where
    T: Real,
{
    boolean_op(subject, clipping, BooleanOp::Difference)
}

/// Symmetric difference of the two polygons.
pub fn xor<T>(subject: &Polygon<T>, clipping: &Polygon<T>) -> Result<Polygon<T>, ClipError>
where
    T: Real,
{
    boolean_op(subject, clipping, BooleanOp::Xor)
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// Computes `self op other`, see [boolean_op].
    pub fn boolean(&self, other: &Polygon<T>, op: BooleanOp) -> Result<Polygon<T>, ClipError> {
        boolean_op(self, other, op)
    }
}

/// Resolves the cases that need no sweep: an empty operand, or bounding boxes
/// that do not overlap.
fn trivial_op<T>(
    subject: &Polygon<T>,
    clipping: &Polygon<T>,
    subject_bb: &BoundingBox<T>,
    clipping_bb: &BoundingBox<T>,
    op: BooleanOp,
) -> Option<Polygon<T>>
where
    T: Real,
{
    if subject.is_empty() || clipping.is_empty() {
        return Some(match op {
            BooleanOp::Intersection => Polygon::new(),
            BooleanOp::Difference => subject.clone(),
            BooleanOp::Union | BooleanOp::Xor => {
                if subject.is_empty() {
                    clipping.clone()
                } else {
                    subject.clone()
                }
            }
        });
    }
    if !subject_bb.overlaps(clipping_bb) {
        return Some(match op {
            BooleanOp::Intersection => Polygon::new(),
            BooleanOp::Difference => subject.clone(),
            BooleanOp::Union | BooleanOp::Xor => {
                let mut result = subject.clone();
                result.join(clipping);
                result
            }
        });
    }
    None
}

struct BooleanSweep<T> {
    events: Vec<SweepEvent<T>>,
    queue: EventQueue,
    op: BooleanOp,
}

impl<T> BooleanSweep<T>
where
    T: Real,
{
    fn new(subject: &Polygon<T>, clipping: &Polygon<T>, op: BooleanOp) -> Self {
        let capacity = 2 * (subject.point_count() + clipping.point_count());
        let mut sweep = BooleanSweep {
            events: Vec::with_capacity(capacity),
            queue: EventQueue::with_capacity(capacity),
            op,
        };
        for contour in subject {
            for j in 0..contour.len() {
                sweep.add_segment(contour.segment(j), EventSource::Subject);
            }
        }
        for contour in clipping {
            for j in 0..contour.len() {
                sweep.add_segment(contour.segment(j), EventSource::Clipping);
            }
        }
        sweep
    }

    /// Creates the pair of twin events for segment `s` and queues them.
    fn add_segment(&mut self, s: Segment<T>, source: EventSource) {
        if s.is_degenerate() {
            return;
        }
        let i1 = self.events.len();
        let i2 = i1 + 1;
        let mut e1 = SweepEvent::new(s.begin, true, i2, source);
        let mut e2 = SweepEvent::new(s.end, true, i1, source);
        if s.min() == s.begin {
            e2.left = false;
        } else {
            e1.left = false;
        }
        self.events.push(e1);
        self.events.push(e2);
        self.queue.push(&self.events, i1);
        self.queue.push(&self.events, i2);
    }

    fn execute(
        mut self,
        subject_bb: &BoundingBox<T>,
        clipping_bb: &BoundingBox<T>,
    ) -> Result<Polygon<T>, ClipError> {
        // past this x no further event can contribute to the result
        let right_bound = subject_bb.x_max.min(clipping_bb.x_max);

        let mut status = SweepLineStatus::new(StatusOrder::Boolean);
        let mut sorted_events: Vec<usize> = Vec::with_capacity(self.events.len());

        while let Some(e) = self.queue.pop(&self.events) {
            let ex = self.events[e].point.x;
            if (self.op == BooleanOp::Intersection && ex > right_bound)
                || (self.op == BooleanOp::Difference && ex > subject_bb.x_max)
            {
                break;
            }
            sorted_events.push(e);

            if self.events[e].left {
                let pos = status.insert(&self.events, e);
                let prev = status.prev(pos);
                let next = status.next(pos);

                self.compute_fields(e, prev);
                if let Some(next) = next {
                    if self.possible_intersection(e, next)? == 2 {
                        self.compute_fields(e, prev);
                        self.compute_fields(next, Some(e));
                    }
                }
                if let Some(prev) = prev {
                    if self.possible_intersection(prev, e)? == 2 {
                        let prev_prev = if pos >= 2 { status.get(pos - 2) } else { None };
                        self.compute_fields(prev, prev_prev);
                        self.compute_fields(e, Some(prev));
                    }
                }
            } else {
                // remove the edge, then check its former neighbors against
                // each other
                let left = self.events[e].other;
                if let Some(pos) = status.position(&self.events, left) {
                    let prev = if pos > 0 { status.get(pos - 1) } else { None };
                    let next = status.get(pos + 1);
                    status.remove_at(pos);
                    if let (Some(prev), Some(next)) = (prev, next) {
                        self.possible_intersection(prev, next)?;
                    }
                }
            }
        }

        self.connect_edges(&sorted_events)
    }

    /// Does the edge of left event `e` belong to the result?
    fn in_result(&self, e: usize) -> bool {
        let ev = &self.events[e];
        match ev.edge_type {
            EdgeType::Normal => match self.op {
                BooleanOp::Intersection => !ev.other_in_out,
                BooleanOp::Union => ev.other_in_out,
                BooleanOp::Difference => match ev.source {
                    EventSource::Subject => ev.other_in_out,
                    _ => !ev.other_in_out,
                },
                BooleanOp::Xor => true,
            },
            EdgeType::SameTransition => {
                matches!(self.op, BooleanOp::Intersection | BooleanOp::Union)
            }
            EdgeType::DifferentTransition => self.op == BooleanOp::Difference,
            EdgeType::NonContributing => false,
        }
    }

    /// Computes the transition flags of left event `e` from its status line
    /// predecessor.
    fn compute_fields(&mut self, e: usize, prev: Option<usize>) {
        match prev {
            None => {
                self.events[e].in_out = false;
                self.events[e].other_in_out = true;
            }
            Some(p) => {
                if self.events[e].source == self.events[p].source {
                    self.events[e].in_out = !self.events[p].in_out;
                    self.events[e].other_in_out = self.events[p].other_in_out;
                } else {
                    self.events[e].in_out = !self.events[p].other_in_out;
                    self.events[e].other_in_out =
                        vertical(&self.events, p) != self.events[p].in_out;
                }
                self.events[e].prev_in_result =
                    if !self.in_result(p) || vertical(&self.events, p) {
                        self.events[p].prev_in_result
                    } else {
                        Some(p)
                    };
            }
        }
        self.events[e].in_result = self.in_result(e);
    }

    /// Checks the edges of left events `le1` and `le2` for intersection,
    /// splitting them as needed.
    ///
    /// Returns 0 when nothing was done, 1 for a simple crossing, 2 when the
    /// edges overlap starting at the same point (the caller must recompute
    /// fields), 3 for other overlap configurations.
    fn possible_intersection(&mut self, le1: usize, le2: usize) -> Result<u8, ClipError> {
        let seg1 = event_segment(&self.events, le1);
        let seg2 = event_segment(&self.events, le2);

        let p1 = self.events[le1].point;
        let o1 = self.events[self.events[le1].other].point;
        let p2 = self.events[le2].point;
        let o2 = self.events[self.events[le2].other].point;

        match segment_intr(seg1, seg2) {
            SegmentIntr::NoIntersect => Ok(0),
            SegmentIntr::OnePoint { point } => {
                if p1.is_close_to(p2) || o1.is_close_to(o2) {
                    // the segments intersect at an endpoint of both
                    return Ok(0);
                }
                if !p1.is_close_to(point) && !o1.is_close_to(point) {
                    self.divide_segment(le1, point);
                }
                if !p2.is_close_to(point) && !o2.is_close_to(point) {
                    self.divide_segment(le2, point);
                }
                Ok(1)
            }
            SegmentIntr::Overlapping { .. } => {
                if self.events[le1].source == self.events[le2].source {
                    return Err(ClipError::SelfOverlappingEdges);
                }

                // endpoint events of both edges in queue order, None marking
                // a pair of coincident endpoints
                let r1 = self.events[le1].other;
                let r2 = self.events[le2].other;
                let mut sorted: Vec<Option<usize>> = Vec::with_capacity(4);
                if p1.is_close_to(p2) {
                    sorted.push(None);
                } else if queue_cmp(&self.events, le1, le2) == Ordering::Less {
                    sorted.push(Some(le1));
                    sorted.push(Some(le2));
                } else {
                    sorted.push(Some(le2));
                    sorted.push(Some(le1));
                }
                if o1.is_close_to(o2) {
                    sorted.push(None);
                } else if queue_cmp(&self.events, r1, r2) == Ordering::Less {
                    sorted.push(Some(r1));
                    sorted.push(Some(r2));
                } else {
                    sorted.push(Some(r2));
                    sorted.push(Some(r1));
                }

                if sorted.len() == 2 || (sorted.len() == 3 && sorted[2].is_some()) {
                    // the edges are equal or share their left endpoint
                    self.events[le1].edge_type = EdgeType::NonContributing;
                    self.events[le2].edge_type =
                        if self.events[le1].in_out == self.events[le2].in_out {
                            EdgeType::SameTransition
                        } else {
                            EdgeType::DifferentTransition
                        };
                    if sorted.len() == 3 {
                        // split the longer edge at the shorter one's right end
                        if let (Some(first_right), Some(last_right)) = (sorted[1], sorted[2]) {
                            let p = self.events[first_right].point;
                            let longer_left = self.events[last_right].other;
                            self.divide_segment(longer_left, p);
                        }
                    }
                    return Ok(2);
                }
                if sorted.len() == 3 {
                    // the edges share their right endpoint
                    if let (Some(first), Some(second)) = (sorted[0], sorted[1]) {
                        let p = self.events[second].point;
                        self.divide_segment(first, p);
                    }
                    return Ok(3);
                }
                if let (Some(first), Some(second), Some(third), Some(fourth)) =
                    (sorted[0], sorted[1], sorted[2], sorted[3])
                {
                    if first != self.events[fourth].other {
                        // partial overlap, neither edge contains the other
                        let pa = self.events[second].point;
                        let pb = self.events[third].point;
                        self.divide_segment(first, pa);
                        self.divide_segment(second, pb);
                    } else {
                        // one edge fully contains the other
                        let pa = self.events[second].point;
                        let pb = self.events[third].point;
                        self.divide_segment(first, pa);
                        // the containing edge's left piece was rewired by the
                        // first split, fetch the remainder's left event
                        let remainder_left = self.events[fourth].other;
                        self.divide_segment(remainder_left, pb);
                    }
                }
                Ok(3)
            }
        }
    }

    /// Splits the edge of left event `le` at point `p` into two edges.
    fn divide_segment(&mut self, le: usize, p: Point<T>) {
        let old_right = self.events[le].other;
        let source = self.events[le].source;

        // right event of the left piece
        let r_idx = self.events.len();
        self.events.push(SweepEvent::new(p, false, le, source));
        // left event of the right piece
        let l_idx = r_idx + 1;
        self.events.push(SweepEvent::new(p, true, old_right, source));

        if queue_cmp(&self.events, l_idx, old_right) == Ordering::Greater {
            // rounding would make the new left event process after the right
            // piece's right event, swap their roles
            self.events[old_right].left = true;
            self.events[l_idx].left = false;
        }

        self.events[old_right].other = l_idx;
        self.events[le].other = r_idx;

        self.queue.push(&self.events, l_idx);
        self.queue.push(&self.events, r_idx);
    }

    /// Stitches the in-result edges into closed contours with hole nesting.
    fn connect_edges(&mut self, sorted_events: &[usize]) -> Result<Polygon<T>, ClipError> {
        let mut result_events: Vec<usize> = sorted_events
            .iter()
            .copied()
            .filter(|&e| {
                (self.events[e].left && self.events[e].in_result)
                    || (!self.events[e].left && self.events[self.events[e].other].in_result)
            })
            .collect();

        // splits of overlapping edges can leave the pop order slightly off
        let events = &self.events;
        result_events.sort_by(|&a, &b| queue_cmp(events, a, b));

        // sort_pos of each event ends up holding its twin's position
        for i in 0..result_events.len() {
            let e = result_events[i];
            if self.events[e].left {
                self.events[e].sort_pos = i;
            } else {
                let other = self.events[e].other;
                self.events[e].sort_pos = self.events[other].sort_pos;
                self.events[other].sort_pos = i;
            }
        }

        let mut result: Polygon<T> = Polygon::new();
        let mut processed = vec![false; result_events.len()];
        let mut depth: Vec<usize> = Vec::new();
        let mut hole_of: Vec<Option<usize>> = Vec::new();

        for i in 0..result_events.len() {
            if processed[i] {
                continue;
            }

            let contour_id = result.len();
            let mut contour: Contour<T> = Contour::new();
            depth.push(0);
            hole_of.push(None);

            if let Some(prev) = self.events[result_events[i]].prev_in_result {
                let lower_contour_id = self.events[prev].contour_id;
                if !self.events[prev].result_in_out {
                    // the contour is directly inside the lower one
                    result.contour_mut(lower_contour_id).add_hole(contour_id);
                    hole_of[contour_id] = Some(lower_contour_id);
                    depth[contour_id] = depth[lower_contour_id] + 1;
                    contour.set_is_hole(true);
                } else if result.contour(lower_contour_id).is_hole() {
                    // sibling of the lower contour under the same parent
                    if let Some(parent) = hole_of[lower_contour_id] {
                        result.contour_mut(parent).add_hole(contour_id);
                        hole_of[contour_id] = Some(parent);
                    }
                    depth[contour_id] = depth[lower_contour_id];
                    contour.set_is_hole(true);
                }
            }

            let mut pos = i;
            let initial = self.events[result_events[i]].point;
            contour.add(initial);
            // walk positions parallel to the contour points, and the loops
            // pinched off when the walk re-reaches one of its own points
            let mut walked: Vec<usize> = vec![pos];
            let mut pinched: Vec<(Vec<Point<T>>, Vec<usize>)> = Vec::new();

            while self.events[self.events[result_events[pos]].other].point != initial {
                processed[pos] = true;
                let e = result_events[pos];
                if self.events[e].left {
                    self.events[e].result_in_out = false;
                    self.events[e].contour_id = contour_id;
                } else {
                    let other = self.events[e].other;
                    self.events[other].result_in_out = true;
                    self.events[other].contour_id = contour_id;
                }
                // jump to the twin, then to the next edge out of its point
                pos = self.events[e].sort_pos;
                processed[pos] = true;
                let point = self.events[result_events[pos]].point;
                match contour.points().iter().position(|&q| q == point) {
                    Some(at) => {
                        // the walk is back at one of this contour's points;
                        // everything since that visit closes a loop of its
                        // own, pinched onto the contour at `point`, which
                        // the walk would otherwise traverse in the same
                        // sense as the contour and double its region
                        let mut loop_edges = walked.split_off(at + 1);
                        loop_edges.push(pos);
                        pinched.push((contour.split_loop(at), loop_edges));
                    }
                    None => {
                        contour.add(point);
                        walked.push(pos);
                    }
                }
                pos = self.next_pos(pos, &result_events, &processed)?;
            }

            processed[pos] = true;
            let e = result_events[pos];
            processed[self.events[e].sort_pos] = true;
            let other = self.events[e].other;
            self.events[other].result_in_out = true;
            self.events[other].contour_id = contour_id;

            if depth[contour_id] % 2 == 1 {
                // holes at odd depth wind opposite to their parent
                contour.change_orientation();
            }
            result.add(contour);

            for (loop_points, loop_edges) in pinched {
                if loop_points.len() < 3 {
                    continue;
                }
                let loop_id = result.len();
                let mut loop_contour = Contour::from_points(loop_points);
                depth.push(depth[contour_id]);
                hole_of.push(hole_of[contour_id]);

                // place the loop by a boundary point away from the pinch:
                // inside the contour it was pinched off from it is a hole of
                // that contour, outside it is a sibling. The walk can come
                // around a loop in either sense, so its winding is set
                // explicitly from the placement
                let host_ccw = result.contour(contour_id).counter_clockwise();
                let mid = (loop_contour.point(1) + loop_contour.point(2)) / T::two();
                if result.contour(contour_id).contains(mid) {
                    result.contour_mut(contour_id).add_hole(loop_id);
                    hole_of[loop_id] = Some(contour_id);
                    depth[loop_id] += 1;
                    loop_contour.set_is_hole(true);
                    if host_ccw {
                        loop_contour.set_clockwise();
                    } else {
                        loop_contour.set_counter_clockwise();
                    }
                } else {
                    if let Some(parent) = hole_of[contour_id] {
                        result.contour_mut(parent).add_hole(loop_id);
                        loop_contour.set_is_hole(true);
                    }
                    if host_ccw {
                        loop_contour.set_counter_clockwise();
                    } else {
                        loop_contour.set_clockwise();
                    }
                }

                for &p in &loop_edges {
                    let ev = result_events[p];
                    let le = if self.events[ev].left {
                        ev
                    } else {
                        self.events[ev].other
                    };
                    self.events[le].contour_id = loop_id;
                }

                result.add(loop_contour);
            }
        }

        Ok(result)
    }

    /// Next unprocessed position continuing the contour out of the point at
    /// `pos`: first an unprocessed event at the exact same point, otherwise
    /// the nearest unprocessed event below.
    fn next_pos(
        &self,
        pos: usize,
        result_events: &[usize],
        processed: &[bool],
    ) -> Result<usize, ClipError> {
        let point = self.events[result_events[pos]].point;
        let mut forward = pos + 1;
        while forward < result_events.len() && self.events[result_events[forward]].point == point {
            if !processed[forward] {
                return Ok(forward);
            }
            forward += 1;
        }
        let mut backward = pos;
        while backward > 0 {
            backward -= 1;
            if !processed[backward] {
                return Ok(backward);
            }
        }
        Err(ClipError::ConnectEdges)
    }
}
