// lib.rs - GBS 读段修剪库
//
// Interleaved paired-end GBS reads are checked for adaptor readthrough
// after the restriction site; readthrough pairs are trimmed and adaptor
// dimers are diverted.

pub mod align;
pub mod classify;
pub mod config;
pub mod dimer;
pub mod emit;
pub mod error;
pub mod fastq;
pub mod run;
pub mod site;

pub use align::{AlignmentResult, LocalAligner, PairwiseAligner};
pub use classify::{PairClass, PairClassifier, RunCounters};
pub use config::{Config, RestrictionSite};
pub use error::{AlignmentError, GbsTrimError, Result};
pub use fastq::{FastqReader, ReadPair, ReadPairs, ReadRecord};
pub use run::run;
