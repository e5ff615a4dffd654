//! Timing harness for `PriorityQueue`.
//!
//! Measures how long it takes to fill a queue with `N` randomly prioritized
//! entries and how long it takes to drain it again, for a sweep of sizes `N`.
//! Every size is measured several times and reduced to a trimmed mean which
//! discards the slowest fifth of the trials.
//!
//! Timings depend on the machine and on the random priorities, so nothing in
//! here is part of the queue's correctness guarantees.

use std::convert::TryFrom;
use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use itertools::Itertools;
use rand::Rng;

use crate::PriorityQueue;

/// Describes the sizes to measure and how often each size is measured.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Trials {
    /// The first queue size.
    pub start: u32,
    /// The last queue size, inclusive.
    pub end: u32,
    /// Distance between two consecutive sizes.
    pub step: u32,
    /// Number of timed trials per size.
    pub repeats: u32,
}

impl Default for Trials {
    fn default() -> Self {
        Trials {
            start: 1_000,
            end: 10_000,
            step: 1_000,
            repeats: 7,
        }
    }
}

impl Trials {
    /// Iterate over all queue sizes of this sweep in ascending order.
    pub fn sizes(&self) -> impl Iterator<Item = u32> {
        (self.start..=self.end).step_by(self.step.max(1) as usize)
    }
}

/// Fills a fresh queue with `n` entries of random priority in `0..n`.
fn fill<R: Rng + ?Sized>(queue: &mut PriorityQueue<u32, u32>, n: u32, rng: &mut R) {
    for i in 0..n {
        queue.enqueue(rng.gen_range(0..n), i);
    }
}

/// Times `n` enqueues into an empty queue.
pub fn time_enqueue<R: Rng + ?Sized>(n: u32, rng: &mut R) -> Duration {
    let mut queue = PriorityQueue::new();
    let start = Instant::now();
    fill(&mut queue, n, rng);
    let elapsed = start.elapsed();
    black_box(&queue);
    elapsed
}

/// Times draining a queue that holds `n` entries. Filling it is not timed.
pub fn time_dequeue<R: Rng + ?Sized>(n: u32, rng: &mut R) -> Duration {
    let mut queue = PriorityQueue::new();
    fill(&mut queue, n, rng);
    let start = Instant::now();
    while let Ok(data) = queue.dequeue() {
        black_box(data);
    }
    start.elapsed()
}

/// Averages the fastest `q - q / 5` of the given `q` samples.
///
/// Returns `None` if there are no samples or if more than `u32::MAX` samples would be kept.
pub fn trimmed_mean(samples: &[Duration]) -> Option<Duration> {
    if samples.is_empty() {
        return None;
    }
    let keep = samples.len() - samples.len() / 5;
    let divisor = u32::try_from(keep).ok()?;
    let total = samples
        .iter()
        .sorted()
        .take(keep)
        .sum::<Duration>();
    Some(total / divisor)
}

/// The trimmed mean for a single queue size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Row {
    /// Number of entries.
    pub n: u32,
    /// Trimmed mean over all trials for `n`.
    pub mean: Duration,
}

/// Results of a sweep for a single operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Name of the measured operation.
    pub operation: &'static str,
    /// One row per queue size, in ascending order of size.
    pub rows: Vec<Row>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "==== {} ====", self.operation)?;
        writeln!(f, "N\tTime (s)")?;
        for row in &self.rows {
            writeln!(f, "{}\t{:.6} s", row.n, row.mean.as_secs_f64())?;
        }
        Ok(())
    }
}

/// Runs `measure` `trials.repeats` times for every size and collects the trimmed means.
fn sweep<R, F>(operation: &'static str, trials: &Trials, rng: &mut R, mut measure: F) -> Report
where
    R: Rng + ?Sized,
    F: FnMut(u32, &mut R) -> Duration,
{
    let rows = trials
        .sizes()
        .map(|n| {
            let samples = (0..trials.repeats)
                .map(|_| measure(n, &mut *rng))
                .collect::<Vec<_>>();
            Row {
                n,
                mean: trimmed_mean(&samples).unwrap_or_default(),
            }
        })
        .collect();
    Report { operation, rows }
}

/// Measures enqueue and then dequeue over the whole sweep.
pub fn run<R: Rng + ?Sized>(trials: &Trials, rng: &mut R) -> (Report, Report) {
    let enqueue = sweep("Enqueue", trials, rng, time_enqueue);
    let dequeue = sweep("Dequeue", trials, rng, time_dequeue);
    (enqueue, dequeue)
}
