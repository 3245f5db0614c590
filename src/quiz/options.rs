use rand::Rng;
use rand::seq::SliceRandom;

use crate::clock::ClockTime;

pub const OPTION_COUNT: usize = 4;

/// A random time on the five-minute grid.
pub fn random_grid_time<R: Rng + ?Sized>(rng: &mut R) -> ClockTime {
    ClockTime {
        hour: rng.gen_range(1..=12),
        minute: rng.gen_range(0..12) * 5,
    }
}

/// The correct answer plus distinct decoys, shuffled.
///
/// Decoys are drawn until enough distinct ones turn up; with 144 grid times
/// and three slots to fill this terminates quickly.
pub fn build_options<R: Rng + ?Sized>(correct: ClockTime, rng: &mut R) -> Vec<ClockTime> {
    let mut options = Vec::with_capacity(OPTION_COUNT);
    options.push(correct);
    while options.len() < OPTION_COUNT {
        let candidate = random_grid_time(rng);
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }
    options.shuffle(rng);
    options
}
