use std::time::{Duration, Instant};

use tracing::debug;

/// A delayed action stamped with the epoch it was scheduled in.
#[derive(Clone, Debug)]
struct Scheduled<T> {
    due: Instant,
    epoch: u64,
    action: T,
}

/// Pending delayed transitions.
///
/// `invalidate` starts a new epoch; tasks from older epochs are discarded
/// when they come due instead of firing.
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    epoch: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            epoch: 0,
            pending: Vec::new(),
        }
    }
}

impl<T: std::fmt::Debug> Scheduler<T> {
    pub fn schedule(&mut self, action: T, now: Instant, delay: Duration) {
        self.pending.push(Scheduled {
            due: now + delay,
            epoch: self.epoch,
            action,
        });
    }

    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.iter().any(|task| task.epoch == self.epoch)
    }

    /// Remove everything due at `now`, returning the still-valid actions in
    /// due order.
    pub fn take_due(&mut self, now: Instant) -> Vec<T> {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|task| task.due <= now);
        self.pending = waiting;
        due.sort_by_key(|task| task.due);

        let epoch = self.epoch;
        due.into_iter()
            .filter_map(|task| {
                if task.epoch == epoch {
                    Some(task.action)
                } else {
                    debug!(action = ?task.action, "dropping stale transition");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_only_when_due() {
        let start = Instant::now();
        let mut scheduler = Scheduler::default();
        scheduler.schedule("next", start, Duration::from_millis(2000));
        assert!(scheduler.take_due(start + Duration::from_millis(1999)).is_empty());
        assert_eq!(scheduler.take_due(start + Duration::from_millis(2000)), vec!["next"]);
        assert!(scheduler.take_due(start + Duration::from_secs(10)).is_empty());
    }

    #[test]
    fn test_due_order() {
        let start = Instant::now();
        let mut scheduler = Scheduler::default();
        scheduler.schedule("late", start, Duration::from_millis(500));
        scheduler.schedule("early", start, Duration::from_millis(100));
        assert_eq!(
            scheduler.take_due(start + Duration::from_secs(1)),
            vec!["early", "late"]
        );
    }

    #[test]
    fn test_invalidated_tasks_become_no_ops() {
        let start = Instant::now();
        let mut scheduler = Scheduler::default();
        scheduler.schedule("stale", start, Duration::from_millis(100));
        assert!(scheduler.has_pending());
        scheduler.invalidate();
        assert!(!scheduler.has_pending());
        scheduler.schedule("fresh", start, Duration::from_millis(200));
        assert_eq!(scheduler.take_due(start + Duration::from_secs(1)), vec!["fresh"]);
        assert!(!scheduler.has_pending());
    }
}
