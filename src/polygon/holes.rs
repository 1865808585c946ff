//! Hole detection for an unordered set of contours.
//!
//! A reduced sweep over the contour edges: each contour is classified when
//! its first left event is processed, by looking at the edge directly below
//! it in the status line. No intersections are computed, so the contours must
//! not cross each other.

use super::Polygon;
use crate::core::traits::Real;
use crate::sweep::{EventQueue, EventSource, StatusOrder, SweepEvent, SweepLineStatus};

impl<T> Polygon<T>
where
    T: Real,
{
    /// Recomputes the hole relations between the polygon's contours.
    ///
    /// Clears all existing hole information, then determines for every
    /// contour whether it is a top level contour or a hole (and of which
    /// contour). Top level contours end up counter-clockwise, holes wind
    /// opposite to their parent.
    pub fn compute_holes(&mut self) {
        for i in 0..self.len() {
            let c = self.contour_mut(i);
            c.clear_holes();
            c.set_is_hole(false);
        }

        if self.len() < 2 {
            if self.len() == 1 {
                self.contour_mut(0).set_counter_clockwise();
            }
            return;
        }

        let mut events: Vec<SweepEvent<T>> = Vec::with_capacity(2 * self.point_count());
        let mut queue = EventQueue::with_capacity(2 * self.point_count());

        for i in 0..self.len() {
            self.contour_mut(i).set_counter_clockwise();
            for j in 0..self.contour(i).len() {
                let s = self.contour(i).segment(j);
                if s.is_vertical() {
                    // vertical edges carry no in/out transition information
                    continue;
                }
                let b = events.len();
                let e = b + 1;
                if s.begin.x < s.end.x {
                    events.push(SweepEvent::with_in_out(
                        s.begin,
                        true,
                        e,
                        EventSource::Contour(i),
                        false,
                    ));
                    events.push(SweepEvent::with_in_out(
                        s.end,
                        false,
                        b,
                        EventSource::Contour(i),
                        true,
                    ));
                } else {
                    events.push(SweepEvent::with_in_out(
                        s.begin,
                        false,
                        e,
                        EventSource::Contour(i),
                        true,
                    ));
                    events.push(SweepEvent::with_in_out(
                        s.end,
                        true,
                        b,
                        EventSource::Contour(i),
                        true,
                    ));
                }
                queue.push(&events, b);
                queue.push(&events, e);
            }
        }

        let mut status = SweepLineStatus::new(StatusOrder::Hole);
        let mut classified = vec![false; self.len()];
        let mut classified_count = 0;
        let mut hole_of: Vec<Option<usize>> = vec![None; self.len()];

        while classified_count < self.len() {
            let Some(e) = queue.pop(&events) else {
                break;
            };

            if !events[e].left {
                status.remove(&events, events[e].other);
                continue;
            }

            let pos = status.insert(&events, e);

            let Some(ci) = events[e].source.contour_index() else {
                continue;
            };
            if classified[ci] {
                continue;
            }
            classified[ci] = true;
            classified_count += 1;

            let below = status
                .prev(pos)
                .and_then(|prev| events[prev].source.contour_index().map(|pi| (prev, pi)));
            match below {
                None => {
                    // nothing below, top level contour
                    self.contour_mut(ci).set_counter_clockwise();
                }
                Some((prev, pi)) => {
                    if !events[prev].in_out {
                        // below edge enters its contour's interior, so this
                        // contour is directly inside it
                        self.set_hole_of(ci, pi, &mut hole_of);
                    } else if let Some(parent) = hole_of[pi] {
                        // below contour is itself a hole, share its parent
                        self.set_hole_of(ci, parent, &mut hole_of);
                    } else {
                        self.contour_mut(ci).set_counter_clockwise();
                    }
                }
            }
        }
    }

    fn set_hole_of(&mut self, hole: usize, parent: usize, hole_of: &mut [Option<usize>]) {
        hole_of[hole] = Some(parent);
        self.contour_mut(hole).set_is_hole(true);
        self.contour_mut(parent).add_hole(hole);
        // holes wind opposite to their parent
        if self.contour(parent).counter_clockwise() {
            self.contour_mut(hole).set_clockwise();
        } else {
            self.contour_mut(hole).set_counter_clockwise();
        }
    }
}
