use std::time::{Duration, Instant};
use log::debug;

/// Times `sort` over `trials` fresh copies of `data`.
///
/// Samples are returned in trial order. `data` itself is never touched, every
/// trial sorts its own clone which is dropped afterwards.
pub fn time_sort(sort: fn(&mut [i64]), data: &[i64], trials: usize) -> Vec<Duration> {
    assert!(trials >= 1, "trial count must be at least one");

    let mut measurements: Vec<Duration> = Vec::with_capacity(trials);
    for trial in 0..trials {
        let mut copy = data.to_vec();
        let start = Instant::now();
        sort(&mut copy);
        let duration = start.elapsed();
        debug!("Trial {}: {:?}", trial, duration);
        measurements.push(duration);
    }
    measurements
}
