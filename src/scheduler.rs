//! Frame scheduling for the effect engine.
//!
//! The engine never blocks between animation frames: it suspends itself by
//! scheduling a future tick and resumes when the host feeds that tick back
//! in. The host supplies the clock and the callback queue through the
//! [`FrameScheduler`] trait, so the engine works the same under a real
//! compositor loop and under the deterministic [`ManualScheduler`] used in
//! tests and headless demos.

use bitflags::bitflags;

/// Monotonic time in milliseconds.
pub type TimeMillis = u64;

bitflags! {
    /// Flags indicating what aspects of rendering need to be updated
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ChangeFlags: u8 {
        /// Widget needs layout recalculation (size/position may change)
        const NEEDS_LAYOUT = 0b01;
        /// Widget needs repainting (visual appearance changed)
        const NEEDS_PAINT  = 0b10;
    }
}

/// Identifier for one scheduled tick.
///
/// A tick fires at most once; cancelling an id that already fired is a no-op.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TickId(u64);

/// Host-provided frame tick primitive.
///
/// Implementations must fire each scheduled tick at most once, at or after
/// the requested time, on the same thread that drives the effect.
pub trait FrameScheduler {
    /// Current monotonic time in milliseconds.
    fn now(&self) -> TimeMillis;

    /// Request a tick at or after `at`. Returns the id used to cancel it.
    fn schedule(&mut self, at: TimeMillis) -> TickId;

    /// Cancel a previously scheduled tick if it has not fired yet.
    fn cancel(&mut self, id: TickId);

    /// Signal that visible parameters changed. No synchronous repaint is
    /// assumed; the host repaints whenever it next processes a frame.
    fn request_redraw(&mut self);
}

/// Deterministic single-threaded scheduler with a manually advanced clock.
///
/// The host loop advances the clock, pops due ticks, and feeds them to the
/// engine:
///
/// ```ignore
/// scheduler.advance(16);
/// while let Some(id) = scheduler.pop_due() {
///     button.handle_tick(id, &mut scheduler);
/// }
/// if scheduler.take_change_flags().contains(ChangeFlags::NEEDS_PAINT) {
///     button.paint(&mut renderer);
/// }
/// ```
#[derive(Debug)]
pub struct ManualScheduler {
    clock: TimeMillis,
    next_id: u64,
    queue: Vec<(TimeMillis, TickId)>,
    change_flags: ChangeFlags,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self {
            clock: 0,
            next_id: 1,
            queue: Vec::new(),
            change_flags: ChangeFlags::empty(),
        }
    }

    /// Advance the clock by `ms` milliseconds.
    pub fn advance(&mut self, ms: TimeMillis) {
        self.clock += ms;
    }

    /// Advance the clock to an absolute time. The clock never goes backward.
    pub fn advance_to(&mut self, at: TimeMillis) {
        self.clock = self.clock.max(at);
    }

    /// Pop the earliest tick whose target time has been reached.
    /// Ties fire in scheduling order.
    pub fn pop_due(&mut self) -> Option<TickId> {
        let mut best: Option<usize> = None;
        for (index, &(at, _)) in self.queue.iter().enumerate() {
            if at <= self.clock && best.map_or(true, |b| at < self.queue[b].0) {
                best = Some(index);
            }
        }
        best.map(|index| self.queue.remove(index).1)
    }

    /// Target time of the next pending tick, if any.
    pub fn next_due(&self) -> Option<TimeMillis> {
        self.queue.iter().map(|&(at, _)| at).min()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Mark additional change flags (e.g. NEEDS_LAYOUT after a resize).
    pub fn mark(&mut self, flags: ChangeFlags) {
        self.change_flags |= flags;
    }

    /// Take and clear the accumulated change flags.
    pub fn take_change_flags(&mut self) -> ChangeFlags {
        std::mem::replace(&mut self.change_flags, ChangeFlags::empty())
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for ManualScheduler {
    fn now(&self) -> TimeMillis {
        self.clock
    }

    fn schedule(&mut self, at: TimeMillis) -> TickId {
        let id = TickId(self.next_id);
        self.next_id += 1;
        self.queue.push((at, id));
        id
    }

    fn cancel(&mut self, id: TickId) {
        self.queue.retain(|&(_, queued)| queued != id);
    }

    fn request_redraw(&mut self) {
        self.change_flags |= ChangeFlags::NEEDS_PAINT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_not_due_before_target_time() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(16);
        assert_eq!(scheduler.pop_due(), None);
        scheduler.advance(16);
        assert!(scheduler.pop_due().is_some());
        assert_eq!(scheduler.pop_due(), None);
    }

    #[test]
    fn test_ticks_fire_in_time_order() {
        let mut scheduler = ManualScheduler::new();
        let late = scheduler.schedule(32);
        let early = scheduler.schedule(16);
        scheduler.advance(32);
        assert_eq!(scheduler.pop_due(), Some(early));
        assert_eq!(scheduler.pop_due(), Some(late));
    }

    #[test]
    fn test_equal_times_fire_in_scheduling_order() {
        let mut scheduler = ManualScheduler::new();
        let first = scheduler.schedule(16);
        let second = scheduler.schedule(16);
        scheduler.advance(16);
        assert_eq!(scheduler.pop_due(), Some(first));
        assert_eq!(scheduler.pop_due(), Some(second));
    }

    #[test]
    fn test_cancel_removes_pending_tick() {
        let mut scheduler = ManualScheduler::new();
        let id = scheduler.schedule(16);
        scheduler.cancel(id);
        scheduler.advance(16);
        assert_eq!(scheduler.pop_due(), None);
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let mut scheduler = ManualScheduler::new();
        let id = scheduler.schedule(0);
        assert_eq!(scheduler.pop_due(), Some(id));
        scheduler.cancel(id);
        assert_eq!(scheduler.pop_due(), None);
    }

    #[test]
    fn test_redraw_sets_paint_flag_once_taken() {
        let mut scheduler = ManualScheduler::new();
        scheduler.request_redraw();
        scheduler.request_redraw();
        assert_eq!(scheduler.take_change_flags(), ChangeFlags::NEEDS_PAINT);
        assert_eq!(scheduler.take_change_flags(), ChangeFlags::empty());
    }

    #[test]
    fn test_clock_never_goes_backward() {
        let mut scheduler = ManualScheduler::new();
        scheduler.advance(100);
        scheduler.advance_to(50);
        assert_eq!(scheduler.now(), 100);
    }
}
