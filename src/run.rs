//! Run driver: input file → pairs → classifier → emitter.

use crate::classify::{PairClass, PairClassifier, RunCounters};
use crate::config::Config;
use crate::emit::{create_writer, RecordEmitter};
use crate::error::Result;
use crate::fastq::read_pairs;
use log::{debug, info};
use std::io::Write;

pub const PROGRESS_INTERVAL: u64 = 1000;

/// Processes the whole input, writing kept pairs to `out`.
pub fn run<W: Write>(config: &Config, out: W) -> Result<RunCounters> {
    info!(
        "Trimming {} (site {})",
        config.input.display(),
        config.site
    );
    let pairs = read_pairs(&config.input)?;
    let dimers = match &config.dimer_file {
        Some(path) => Some(create_writer(path)?),
        None => None,
    };
    let mut emitter = RecordEmitter::new(out, dimers);
    let mut classifier = PairClassifier::new(&config.site);
    let mut counters = RunCounters::default();

    for pair in pairs {
        let mut pair = pair?;
        let class = classifier.classify(&mut pair);
        match class {
            PairClass::Dimer => emitter.divert_dimer(&pair)?,
            PairClass::Passthrough | PairClass::ReadthroughTrimmed => emitter.emit(&pair)?,
        }
        counters.record(class);

        if counters.pairs_processed % PROGRESS_INTERVAL == 0 {
            debug!(
                "Processed {}K read pairs",
                counters.pairs_processed / PROGRESS_INTERVAL
            );
        }
    }

    emitter.finish()?;
    Ok(counters)
}
