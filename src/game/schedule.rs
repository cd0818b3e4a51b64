//! Deferred simulation actions
//!
//! Some effects fire a fixed delay after their trigger (the heal pickup
//! respawns five seconds after consumption, the winner is reported one
//! second after the last elimination). Entries carry the match generation
//! they were scheduled under; a reset bumps the generation and stale
//! entries are dropped instead of firing into the new match.

/// A deferred action kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Make the heal pickup available again at a fresh position
    RespawnHeal,
    /// Emit the match-over event for the surviving ball
    ReportWinner,
}

#[derive(Debug, Clone)]
struct Scheduled {
    due_tick: u64,
    generation: u64,
    action: Action,
}

/// Tick-ordered queue of deferred actions.
///
/// The queue is tiny (at most a handful of entries) so a plain vector
/// with a linear drain is simpler than a binary heap.
#[derive(Debug, Clone, Default)]
pub struct ScheduleQueue {
    pending: Vec<Scheduled>,
}

impl ScheduleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire once `current_tick + delay_ticks` is reached
    pub fn schedule(&mut self, action: Action, current_tick: u64, delay_ticks: u64, generation: u64) {
        self.pending.push(Scheduled {
            due_tick: current_tick + delay_ticks,
            generation,
            action,
        });
    }

    /// Remove and return every action due at `current_tick`, in schedule
    /// order. Entries from other generations are silently discarded.
    pub fn drain_due(&mut self, current_tick: u64, generation: u64) -> Vec<Action> {
        let mut due = Vec::new();
        self.pending.retain(|entry| {
            if entry.generation != generation {
                return false;
            }
            if entry.due_tick <= current_tick {
                due.push(entry.action);
                false
            } else {
                true
            }
        });
        due
    }

    /// Drop every pending entry
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_exactly_at_due_tick() {
        let mut queue = ScheduleQueue::new();
        queue.schedule(Action::RespawnHeal, 10, 5, 0);
        assert!(queue.drain_due(14, 0).is_empty());
        assert_eq!(queue.drain_due(15, 0), vec![Action::RespawnHeal]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_fires_once() {
        let mut queue = ScheduleQueue::new();
        queue.schedule(Action::ReportWinner, 0, 3, 0);
        assert_eq!(queue.drain_due(3, 0).len(), 1);
        assert!(queue.drain_due(4, 0).is_empty());
    }

    #[test]
    fn test_stale_generation_discarded() {
        let mut queue = ScheduleQueue::new();
        queue.schedule(Action::RespawnHeal, 0, 5, 0);
        // Generation bumped before the action came due
        assert!(queue.drain_due(5, 1).is_empty());
        assert!(queue.is_empty(), "stale entry must be removed, not kept");
    }

    #[test]
    fn test_multiple_due_in_schedule_order() {
        let mut queue = ScheduleQueue::new();
        queue.schedule(Action::RespawnHeal, 0, 2, 0);
        queue.schedule(Action::ReportWinner, 0, 1, 0);
        let due = queue.drain_due(2, 0);
        assert_eq!(due, vec![Action::RespawnHeal, Action::ReportWinner]);
    }

    #[test]
    fn test_clear() {
        let mut queue = ScheduleQueue::new();
        queue.schedule(Action::RespawnHeal, 0, 5, 0);
        queue.schedule(Action::ReportWinner, 0, 5, 0);
        assert_eq!(queue.len(), 2);
        queue.clear();
        assert!(queue.is_empty());
    }
}
