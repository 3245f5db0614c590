pub mod drag;
pub mod time;

pub use drag::{DragSession, FaceGeometry};
pub use self::time::{ClockTime, TimeError};

use tracing::debug;

use self::time::{MINUTES_PER_CYCLE, MINUTES_PER_HOUR};

const CYCLE: f64 = MINUTES_PER_CYCLE as f64;
const HOUR: f64 = MINUTES_PER_HOUR as f64;

/// The analog clock model.
///
/// `total_minutes` is the source of truth while a drag is in progress; hours
/// and minutes are derived from it after every update so the hands never
/// jump when the minute hand passes 12.
#[derive(Clone, Debug)]
pub struct Clock {
    hours: u8,
    minutes: f64,
    total_minutes: f64,
    drag: Option<DragSession>,
}

impl Clock {
    pub fn new(start: ClockTime) -> Self {
        let mut clock = Self {
            hours: 12,
            minutes: 0.0,
            total_minutes: 0.0,
            drag: None,
        };
        clock.set_time(start);
        clock
    }

    pub fn set_time(&mut self, time: ClockTime) {
        self.hours = time.hour;
        self.minutes = f64::from(time.minute);
        self.total_minutes = f64::from(time.total_minutes());
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Minutes past the hour. Fractional while dragging.
    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    pub fn total_minutes(&self) -> f64 {
        self.total_minutes
    }

    /// The time as shown on the digital readout.
    pub fn time(&self) -> ClockTime {
        ClockTime {
            hour: self.hours,
            minute: self.minutes.floor() as u8,
        }
    }

    pub fn minute_hand_angle(&self) -> f64 {
        self.minutes * 6.0
    }

    pub fn hour_hand_angle(&self) -> f64 {
        f64::from(self.hours % 12) * 30.0 + self.minutes * 0.5
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Start tracking a drag. The first sample only anchors the session.
    pub fn begin_drag(&mut self, angle: f64) {
        self.drag = Some(DragSession::start(angle));
        debug!(angle, time = %self.time(), "drag started");
    }

    /// Feed the next pointer angle. Returns false when no drag is active.
    pub fn drag_to(&mut self, angle: f64) -> bool {
        let Some(session) = self.drag.as_mut() else {
            return false;
        };
        let delta = session.advance(angle);
        self.apply_total(self.total_minutes + delta);
        true
    }

    /// Finish the drag and snap to the nearest whole minute.
    pub fn end_drag(&mut self) {
        if self.drag.take().is_none() {
            return;
        }
        self.apply_total(self.total_minutes.round());
        debug!(time = %self.time(), "drag ended");
    }

    /// Move the hands by whole minutes, wrapping through 12 either way.
    pub fn nudge(&mut self, minutes: i32) {
        let snapped = self.total_minutes.round();
        self.apply_total(snapped + f64::from(minutes));
    }

    fn apply_total(&mut self, total: f64) {
        let mut wrapped = total.rem_euclid(CYCLE);
        if wrapped >= CYCLE {
            wrapped = 0.0;
        }
        self.total_minutes = wrapped;
        let hour = (wrapped / HOUR).floor() as u8;
        self.hours = if hour == 0 { 12 } else { hour };
        self.minutes = wrapped % HOUR;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(ClockTime::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u8, minute: u8) -> Clock {
        Clock::new(ClockTime::new(hour, minute).unwrap())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// Sweep the pointer clockwise in 30° steps through one full turn.
    fn sweep_clockwise(clock: &mut Clock, from: f64) {
        clock.begin_drag(from);
        for step in 1..=12 {
            let angle = (from + step as f64 * 30.0) % 360.0;
            assert!(clock.drag_to(angle));
        }
        clock.end_drag();
    }

    #[test]
    fn test_starts_at_nine() {
        let clock = Clock::default();
        assert_eq!(clock.time(), ClockTime { hour: 9, minute: 0 });
        assert_eq!(clock.total_minutes(), 540.0);
    }

    #[test]
    fn test_minute_hand_angle_for_every_minute() {
        for m in 0..60 {
            let clock = at(4, m);
            assert_eq!(clock.minute_hand_angle(), f64::from(m) * 6.0);
        }
    }

    #[test]
    fn test_hour_hand_angle_for_every_time() {
        for h in 1..=12u8 {
            for m in 0..60u8 {
                let clock = at(h, m);
                let expected = f64::from(h % 12) * 30.0 + f64::from(m) * 0.5;
                assert_eq!(clock.hour_hand_angle(), expected);
            }
        }
    }

    #[test]
    fn test_set_time_accumulator() {
        assert_eq!(at(12, 30).total_minutes(), 30.0);
        assert_eq!(at(1, 0).total_minutes(), 60.0);
    }

    #[test]
    fn test_full_revolution_advances_one_hour() {
        let mut clock = at(3, 0);
        sweep_clockwise(&mut clock, 0.0);
        assert_eq!(clock.total_minutes(), 240.0);
        assert_eq!(clock.time(), ClockTime { hour: 4, minute: 0 });
    }

    #[test]
    fn test_revolution_from_eleven_lands_on_twelve() {
        let mut clock = at(11, 20);
        sweep_clockwise(&mut clock, 120.0);
        assert_eq!(clock.total_minutes(), 20.0);
        assert_eq!(clock.time(), ClockTime { hour: 12, minute: 20 });
    }

    #[test]
    fn test_revolution_from_twelve_lands_on_one() {
        let mut clock = at(12, 0);
        sweep_clockwise(&mut clock, 0.0);
        assert_eq!(clock.time(), ClockTime { hour: 1, minute: 0 });
    }

    #[test]
    fn test_counterclockwise_past_twelve_wraps_back() {
        let mut clock = at(12, 5);
        clock.begin_drag(30.0);
        // 30° -> 0° -> 330°: back ten minutes across the seam.
        clock.drag_to(0.0);
        clock.drag_to(330.0);
        clock.end_drag();
        assert_eq!(clock.time(), ClockTime { hour: 11, minute: 55 });
        assert_eq!(clock.total_minutes(), 715.0);
    }

    #[test]
    fn test_crossing_seam_forward_is_small_step() {
        let mut clock = at(2, 58);
        clock.begin_drag(348.0);
        clock.drag_to(12.0);
        assert!(approx(clock.total_minutes(), 182.0));
        assert_eq!(clock.hours(), 3);
        assert!(approx(clock.minutes(), 2.0));
    }

    #[test]
    fn test_first_sample_does_not_move_hands() {
        let mut clock = at(6, 30);
        clock.begin_drag(90.0);
        assert!(clock.is_dragging());
        clock.drag_to(90.0);
        assert_eq!(clock.time(), ClockTime { hour: 6, minute: 30 });
    }

    #[test]
    fn test_minutes_float_during_drag_and_snap_on_release() {
        let mut clock = at(5, 10);
        clock.begin_drag(60.0);
        clock.drag_to(64.0);
        assert!(approx(clock.minutes(), 10.0 + 4.0 / 6.0));
        assert_eq!(clock.time().minute, 10);
        clock.end_drag();
        assert!(!clock.is_dragging());
        assert_eq!(clock.minutes(), 11.0);
        assert_eq!(clock.total_minutes(), 311.0);
    }

    #[test]
    fn test_release_rounding_can_roll_the_hour() {
        let mut clock = at(11, 59);
        clock.begin_drag(354.0);
        clock.drag_to(357.6);
        assert_eq!(clock.hours(), 11);
        clock.end_drag();
        assert_eq!(clock.time(), ClockTime { hour: 12, minute: 0 });
        assert_eq!(clock.total_minutes(), 0.0);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut clock = at(7, 15);
        assert!(!clock.drag_to(200.0));
        clock.end_drag();
        assert_eq!(clock.time(), ClockTime { hour: 7, minute: 15 });
    }

    #[test]
    fn test_state_stays_consistent_during_drag() {
        let mut clock = at(1, 0);
        clock.begin_drag(0.0);
        let mut angle = 0.0;
        for _ in 0..500 {
            angle = (angle + 347.0) % 360.0;
            clock.drag_to(angle);
            let total = clock.total_minutes();
            assert!((0.0..720.0).contains(&total));
            let hour = if (total / 60.0).floor() as u8 == 0 { 12 } else { (total / 60.0).floor() as u8 };
            assert_eq!(clock.hours(), hour);
            assert!(approx(clock.minutes(), total % 60.0));
        }
    }

    #[test]
    fn test_nudge_wraps_both_ways() {
        let mut clock = at(12, 0);
        clock.nudge(-1);
        assert_eq!(clock.time(), ClockTime { hour: 11, minute: 59 });
        clock.nudge(5);
        assert_eq!(clock.time(), ClockTime { hour: 12, minute: 4 });
    }
}
