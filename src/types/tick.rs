use std::time::{Duration, Instant};

/// A cancellable fixed-interval tick source.
///
/// Arming one (`new`) starts the interval; dropping it cancels. The host
/// polls `due_ticks` once per frame and delivers that many ticks to the
/// playback state, so a frame that ran long catches up instead of losing
/// time. Exactly one of these exists while the state is in its playing
/// phase and none otherwise.
#[derive(Debug)]
pub struct TickSchedule {
    interval: Duration,
    next_due: Instant,
}

impl TickSchedule {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How many whole intervals have elapsed since the last poll.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while now >= self.next_due {
            self.next_due += self.interval;
            due += 1;
        }
        due
    }

    /// Time until the next tick comes due; zero if it is already overdue.
    pub fn time_to_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn test_no_ticks_due_before_first_interval() {
        let start = Instant::now();
        let mut schedule = TickSchedule::starting_at(INTERVAL, start);
        assert_eq!(schedule.due_ticks(start), 0);
        assert_eq!(schedule.due_ticks(start + Duration::from_millis(99)), 0);
    }

    #[test]
    fn test_one_tick_per_interval() {
        let start = Instant::now();
        let mut schedule = TickSchedule::starting_at(INTERVAL, start);
        assert_eq!(schedule.due_ticks(start + INTERVAL), 1);
        assert_eq!(schedule.due_ticks(start + INTERVAL), 0);
        assert_eq!(schedule.due_ticks(start + 2 * INTERVAL), 1);
    }

    #[test]
    fn test_slow_frame_catches_up_with_multiple_ticks() {
        let start = Instant::now();
        let mut schedule = TickSchedule::starting_at(INTERVAL, start);
        assert_eq!(schedule.due_ticks(start + 5 * INTERVAL), 5);
        assert_eq!(schedule.due_ticks(start + 5 * INTERVAL), 0);
    }

    #[test]
    fn test_rearming_starts_a_fresh_interval() {
        let start = Instant::now();
        let mut schedule = TickSchedule::starting_at(INTERVAL, start);
        assert_eq!(schedule.due_ticks(start + 3 * INTERVAL), 3);

        // Cancel and re-arm later, as the play/pause toggle does.
        drop(schedule);
        let rearmed_at = start + Duration::from_secs(10);
        let mut schedule = TickSchedule::starting_at(INTERVAL, rearmed_at);
        assert_eq!(schedule.due_ticks(rearmed_at), 0);
        assert_eq!(schedule.due_ticks(rearmed_at + INTERVAL), 1);
    }

    #[test]
    fn test_time_to_next_feeds_the_repaint_deadline() {
        let start = Instant::now();
        let mut schedule = TickSchedule::starting_at(INTERVAL, start);
        assert_eq!(
            schedule.time_to_next(start + Duration::from_millis(40)),
            Duration::from_millis(60)
        );
        schedule.due_ticks(start + INTERVAL);
        assert_eq!(schedule.time_to_next(start + INTERVAL), INTERVAL);
        // Overdue clamps to zero rather than underflowing.
        assert_eq!(
            schedule.time_to_next(start + 3 * INTERVAL),
            Duration::ZERO
        );
    }
}
