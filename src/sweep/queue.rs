use super::event::SweepEvent;
use super::order::queue_cmp;
use crate::core::traits::Real;
use std::cmp::Ordering;

/// Priority queue of pending events, smallest first under
/// [queue_cmp](super::order::queue_cmp).
///
/// A plain binary heap over arena indices. The comparator needs access to the
/// live event arena (twins are rewired when segments split), so the arena is
/// passed to every operation instead of being owned by the queue.
#[derive(Debug, Default)]
pub struct EventQueue {
    heap: Vec<usize>,
}

impl EventQueue {
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        EventQueue {
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn push<T>(&mut self, events: &[SweepEvent<T>], event: usize)
    where
        T: Real,
    {
        self.heap.push(event);
        self.sift_up(events, self.heap.len() - 1);
    }

    pub fn pop<T>(&mut self, events: &[SweepEvent<T>]) -> Option<usize>
    where
        T: Real,
    {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let top = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(events, 0);
        }
        top
    }

    fn sift_up<T>(&mut self, events: &[SweepEvent<T>], mut i: usize)
    where
        T: Real,
    {
        while i > 0 {
            let parent = (i - 1) / 2;
            if queue_cmp(events, self.heap[i], self.heap[parent]) == Ordering::Less {
                self.heap.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down<T>(&mut self, events: &[SweepEvent<T>], mut i: usize)
    where
        T: Real,
    {
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < self.heap.len()
                && queue_cmp(events, self.heap[left], self.heap[smallest]) == Ordering::Less
            {
                smallest = left;
            }
            if right < self.heap.len()
                && queue_cmp(events, self.heap[right], self.heap[smallest]) == Ordering::Less
            {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}
