//! Sweep line machinery shared by the Boolean operations and hole detection:
//! the event arena, the event queue and status line orders, and the ordered
//! containers built on them.
pub(crate) mod event;
pub(crate) mod order;
pub(crate) mod queue;
pub(crate) mod status;

pub(crate) use event::{EdgeType, EventSource, SweepEvent};
pub(crate) use queue::EventQueue;
pub(crate) use status::{StatusOrder, SweepLineStatus};
