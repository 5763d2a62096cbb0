pub mod config;
pub mod input;
pub mod report;
pub mod sort;
pub mod stats;
pub mod timing;
pub mod verify;

use std::io::{self, Write};
use log::{info, warn};

pub use config::{PREVIEW_LIMIT, TRIALS};
pub use input::{parse_input_list, ParseError};
pub use report::{format_list_preview, Report};
pub use sort::{bubble_sort, insertion_sort, Algorithm, ALGORITHMS};
pub use stats::Summary;
pub use timing::time_sort;
pub use verify::verify_sorted;

pub const PROMPT: &str = "Enter integers separated by spaces or commas: ";
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid input. Please enter only integers separated by spaces or commas.";
pub const NO_DATA_MESSAGE: &str = "No numbers provided. Exiting.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Reported,
    NoData,
    InvalidInput,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Reported | Outcome::NoData => 0,
            Outcome::InvalidInput => 1,
        }
    }
}

/// Parses `raw`, times and verifies every algorithm in [`ALGORITHMS`] over
/// `trials` runs, and writes the report to `out`.
///
/// Panics if an algorithm disagrees with the reference sort.
pub fn run<W: Write>(raw: &str, trials: usize, out: &mut W) -> io::Result<Outcome> {
    let data = match parse_input_list(raw) {
        Ok(data) => data,
        Err(e) => {
            warn!("{}", e);
            writeln!(out, "{}", INVALID_INPUT_MESSAGE)?;
            return Ok(Outcome::InvalidInput);
        }
    };

    if data.is_empty() {
        writeln!(out, "{}", NO_DATA_MESSAGE)?;
        return Ok(Outcome::NoData);
    }

    let mut reference = data.clone();
    reference.sort();

    let mut results = Vec::with_capacity(ALGORITHMS.len());
    for algorithm in ALGORITHMS {
        let samples = time_sort(algorithm.sort, &data, trials);
        let summary = Summary::from_durations(&samples);
        info!("{}: {:?}", algorithm.name, summary);
        results.push((algorithm.name, summary));
    }

    for algorithm in ALGORITHMS {
        let mut sorted = data.clone();
        (algorithm.sort)(&mut sorted);
        verify_sorted(&sorted, &reference);
    }

    let report = Report {
        original: &data,
        reference: &reference,
        results,
        trials,
        preview_limit: PREVIEW_LIMIT,
    };
    report.write_to(out)?;
    Ok(Outcome::Reported)
}
