use super::event::SweepEvent;
use super::order::{boolean_status_cmp, hole_status_cmp};
use crate::core::traits::Real;
use std::cmp::Ordering;

/// Which status line order to use, see [order](super::order).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StatusOrder {
    Boolean,
    Hole,
}

impl StatusOrder {
    #[inline]
    fn cmp<T>(self, events: &[SweepEvent<T>], a: usize, b: usize) -> Ordering
    where
        T: Real,
    {
        match self {
            StatusOrder::Boolean => boolean_status_cmp(events, a, b),
            StatusOrder::Hole => hole_status_cmp(events, a, b),
        }
    }
}

/// The sweep line status: left events of the edges currently cut by the
/// sweep line, ordered bottom to top.
///
/// Backed by a sorted vector of arena indices. Lookups binary search against
/// the live arena and fall back to a linear scan, shielding against entries
/// whose sort position went stale after their twin was rewired by a split.
#[derive(Debug)]
pub struct SweepLineStatus {
    order: StatusOrder,
    entries: Vec<usize>,
}

impl SweepLineStatus {
    #[inline]
    pub fn new(order: StatusOrder) -> Self {
        SweepLineStatus {
            order,
            entries: Vec::new(),
        }
    }

    /// Inserts the left event `e`, returning its position.
    pub fn insert<T>(&mut self, events: &[SweepEvent<T>], e: usize) -> usize
    where
        T: Real,
    {
        assert!(events[e].left, "only left events enter the status line");
        let order = self.order;
        let pos = self
            .entries
            .partition_point(|&x| order.cmp(events, x, e) == Ordering::Less);
        self.entries.insert(pos, e);
        pos
    }

    /// Position of event `e`, if present.
    pub fn position<T>(&self, events: &[SweepEvent<T>], e: usize) -> Option<usize>
    where
        T: Real,
    {
        let order = self.order;
        if let Ok(pos) = self
            .entries
            .binary_search_by(|&x| order.cmp(events, x, e))
        {
            if self.entries[pos] == e {
                return Some(pos);
            }
        }
        self.entries.iter().position(|&x| x == e)
    }

    /// Removes event `e`, returning the position it held.
    pub fn remove<T>(&mut self, events: &[SweepEvent<T>], e: usize) -> Option<usize>
    where
        T: Real,
    {
        let pos = self.position(events, e)?;
        self.entries.remove(pos);
        Some(pos)
    }

    #[inline]
    pub fn remove_at(&mut self, pos: usize) -> usize {
        self.entries.remove(pos)
    }

    /// Event at `pos`, if in range.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<usize> {
        self.entries.get(pos).copied()
    }

    /// Event just below position `pos`.
    #[inline]
    pub fn prev(&self, pos: usize) -> Option<usize> {
        if pos == 0 {
            None
        } else {
            self.get(pos - 1)
        }
    }

    /// Event just above position `pos`.
    #[inline]
    pub fn next(&self, pos: usize) -> Option<usize> {
        self.get(pos + 1)
    }
}
