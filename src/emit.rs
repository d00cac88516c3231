// emit.rs - FASTQ 输出

use crate::error::{GbsTrimError, Result};
use crate::fastq::{has_gz_suffix, ReadPair};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Creates an output file, gzip-compressed under the same name rule as the input.
pub fn create_writer(path: &Path) -> Result<Box<dyn Write>> {
    let file = File::create(path).map_err(|source| GbsTrimError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if has_gz_suffix(path) {
        // level 1: 速度优先
        let encoder = GzEncoder::new(file, Compression::new(1));
        Ok(Box::new(BufWriter::with_capacity(1 << 20, encoder)))
    } else {
        Ok(Box::new(BufWriter::with_capacity(1 << 20, file)))
    }
}

/// Writes accepted pairs to the main sink and dimers to the optional one.
pub struct RecordEmitter<W: Write> {
    out: W,
    dimers: Option<Box<dyn Write>>,
    buffer: Vec<u8>,
}

impl<W: Write> RecordEmitter<W> {
    pub fn new(out: W, dimers: Option<Box<dyn Write>>) -> Self {
        RecordEmitter {
            out,
            dimers,
            buffer: Vec::with_capacity(1024),
        }
    }

    fn fill(&mut self, pair: &ReadPair) {
        self.buffer.clear();
        pair.mate1.write_to_bytes(&mut self.buffer);
        pair.mate2.write_to_bytes(&mut self.buffer);
    }

    pub fn emit(&mut self, pair: &ReadPair) -> Result<()> {
        self.fill(pair);
        self.out.write_all(&self.buffer)?;
        Ok(())
    }

    /// No-op when no dimer file was configured.
    pub fn divert_dimer(&mut self, pair: &ReadPair) -> Result<()> {
        if self.dimers.is_none() {
            return Ok(());
        }
        self.fill(pair);
        if let Some(sink) = self.dimers.as_mut() {
            sink.write_all(&self.buffer)?;
        }
        Ok(())
    }

    /// Flushes both sinks and hands back the main one.
    pub fn finish(mut self) -> Result<W> {
        if let Some(mut sink) = self.dimers.take() {
            sink.flush()?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
