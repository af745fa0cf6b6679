//! FIFO scheduling of twists that are animated one at a time.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{PyraminxState, Twist};

/// Animation timing for queued twists.
///
/// When several twists are waiting, each one is animated faster so that the
/// queue catches up.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TwistTiming {
    /// Duration of a twist when nothing else is waiting.
    pub base: Duration,
    /// Shortest duration of any twist.
    pub min: Duration,
}
impl Default for TwistTiming {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(750),
            min: Duration::from_millis(200),
        }
    }
}
impl TwistTiming {
    /// Returns the duration of a twist when `pending` more twists are waiting
    /// behind it.
    pub fn duration_for(&self, pending: usize) -> Duration {
        let divisor = u32::try_from(pending).unwrap_or(u32::MAX).saturating_add(1);
        std::cmp::max(self.min, self.base / divisor)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct QueuedTwist {
    twist: Twist,
    duration_override: Option<Duration>,
}

/// Twist that has started animating.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScheduledTwist {
    /// Twist being animated.
    pub twist: Twist,
    /// How long the animation should take.
    pub duration: Duration,
}

/// Queue of requested twists.
///
/// At most one twist is in flight at a time. A twist is only applied to the
/// puzzle when [`TwistQueue::finish()`] reports that its animation is
/// complete. Requests are never reordered or merged.
#[derive(Debug, Default, Clone)]
pub struct TwistQueue {
    pending: VecDeque<QueuedTwist>,
    in_flight: Option<ScheduledTwist>,
    timing: TwistTiming,
}
impl TwistQueue {
    /// Constructs an empty queue.
    pub fn new(timing: TwistTiming) -> Self {
        Self {
            pending: VecDeque::new(),
            in_flight: None,
            timing,
        }
    }

    /// Returns the animation timing.
    pub fn timing(&self) -> TwistTiming {
        self.timing
    }

    /// Requests a twist.
    pub fn push(&mut self, twist: Twist) {
        self.push_with_duration(twist, None);
    }

    /// Requests a twist, optionally with a fixed animation duration.
    pub fn push_with_duration(&mut self, twist: Twist, duration_override: Option<Duration>) {
        log::trace!("queued twist {twist}");
        self.pending.push_back(QueuedTwist {
            twist,
            duration_override,
        });
    }

    /// Starts animating the next twist, if no twist is in flight.
    ///
    /// Returns `None` if a twist is already in flight or the queue is empty.
    pub fn start_next(&mut self) -> Option<ScheduledTwist> {
        if self.in_flight.is_some() {
            return None;
        }
        let QueuedTwist {
            twist,
            duration_override,
        } = self.pending.pop_front()?;
        let waiting = self.pending.len();
        let duration = duration_override.unwrap_or_else(|| self.timing.duration_for(waiting));
        log::debug!("starting twist {twist} ({duration:?}, {waiting} waiting)");
        let scheduled = ScheduledTwist { twist, duration };
        self.in_flight = Some(scheduled);
        Some(scheduled)
    }

    /// Returns the twist currently being animated.
    pub fn in_flight(&self) -> Option<ScheduledTwist> {
        self.in_flight
    }

    /// Marks the in-flight twist as complete and applies it to `state`.
    ///
    /// Returns `None` if no twist was in flight.
    pub fn finish(&mut self, state: &mut PyraminxState) -> Option<Twist> {
        let ScheduledTwist { twist, .. } = self.in_flight.take()?;
        state.apply_twist(twist);
        Some(twist)
    }

    /// Applies the in-flight twist and every pending twist to `state`
    /// immediately. Returns the twists applied, in order.
    pub fn drain_into(&mut self, state: &mut PyraminxState) -> Vec<Twist> {
        let mut applied = vec![];
        applied.extend(self.finish(state));
        while self.start_next().is_some() {
            applied.extend(self.finish(state));
        }
        applied
    }

    /// Returns whether a twist is in flight or waiting.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some() || !self.pending.is_empty()
    }

    /// Returns the number of twists waiting, not counting the one in flight.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether no twists are waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Discards all waiting twists. The in-flight twist is kept.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
