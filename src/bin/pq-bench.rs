//! Console benchmark for `PriorityQueue`.
//!
//! Prints a table of trimmed-mean enqueue times followed by a table of
//! trimmed-mean dequeue times, one row per queue size.

use binary_priority_queue::measure::{self, Trials};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

#[derive(Parser, Debug)]
#[command(name = "pq-bench", version, about, long_about = None)]
struct Args {
    /// Smallest number of entries to measure.
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    start: u32,

    /// Largest number of entries to measure, inclusive.
    #[arg(long, default_value_t = 10000, value_parser = clap::value_parser!(u32).range(1..))]
    end: u32,

    /// Increment between two measured sizes.
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..))]
    step: u32,

    /// Timed trials per size. The slowest fifth is discarded.
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..))]
    repeats: u32,

    /// Seed for reproducible priorities.
    ///
    /// If unset, priorities come from the thread-local generator.
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    /// Builds the sweep, rejecting a range whose start lies past its end.
    fn trials(&self) -> Result<Trials, clap::Error> {
        if self.start > self.end {
            return Err(Args::command().error(
                ErrorKind::ArgumentConflict,
                format!("--start ({}) must not exceed --end ({})", self.start, self.end),
            ));
        }
        Ok(Trials {
            start: self.start,
            end: self.end,
            step: self.step,
            repeats: self.repeats,
        })
    }
}

fn main() {
    let args = Args::parse();
    let trials = args.trials().unwrap_or_else(|err| err.exit());

    let mut rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let (enqueue, dequeue) = measure::run(&trials, &mut *rng);
    println!("{}", enqueue);
    print!("{}", dequeue);
}
