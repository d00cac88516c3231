// fastq.rs - FASTQ 读取与配对

use crate::error::{GbsTrimError, Result};
use bio::io::fastq;
use flate2::read::MultiGzDecoder;
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One sequencing read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRecord {
    pub name: String,
    pub annotation: String,
    pub sequence: String,
    pub quality: String,
}

impl ReadRecord {
    pub fn new(name: &str, annotation: &str, sequence: &str, quality: &str) -> Self {
        ReadRecord {
            name: name.to_string(),
            annotation: annotation.to_string(),
            sequence: sequence.to_string(),
            quality: quality.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Keep only the first `len` bases and their qualities.
    pub fn truncate(&mut self, len: usize) {
        self.sequence.truncate(len);
        self.quality.truncate(len);
    }

    // 写出完整的 4 行记录：@名字 注释 / 序列 / + / 质量
    pub fn write_to_bytes(&self, buffer: &mut Vec<u8>) {
        buffer.push(b'@');
        buffer.extend_from_slice(self.name.as_bytes());
        if !self.annotation.is_empty() {
            buffer.push(b' ');
            buffer.extend_from_slice(self.annotation.as_bytes());
        }
        buffer.push(b'\n');
        buffer.extend_from_slice(self.sequence.as_bytes());
        buffer.extend_from_slice(b"\n+\n");
        buffer.extend_from_slice(self.quality.as_bytes());
        buffer.push(b'\n');
    }
}

/// Mate 1 and mate 2 taken from consecutive records of an interleaved file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadPair {
    pub mate1: ReadRecord,
    pub mate2: ReadRecord,
}

/// Lazy reader yielding one [`ReadRecord`] per FASTQ record.
///
/// Any structural problem is reported as [`GbsTrimError::MalformedRecord`];
/// skipping a bad record would shift the pairing of everything after it.
pub struct FastqReader<B: BufRead> {
    records: fastq::Records<B>,
    record_no: usize,
}

impl<B: BufRead> FastqReader<B> {
    pub fn new(reader: B) -> Self {
        FastqReader {
            records: fastq::Reader::from_bufread(reader).records(),
            record_no: 0,
        }
    }

    fn malformed(&self, msg: impl Into<String>) -> GbsTrimError {
        GbsTrimError::MalformedRecord {
            record: self.record_no,
            msg: msg.into(),
        }
    }

    fn convert(&self, record: fastq::Record) -> Result<ReadRecord> {
        record.check().map_err(|msg| self.malformed(msg))?;
        // check() guarantees ASCII
        Ok(ReadRecord {
            name: record.id().to_string(),
            annotation: record.desc().unwrap_or_default().to_string(),
            sequence: String::from_utf8_lossy(record.seq()).into_owned(),
            quality: String::from_utf8_lossy(record.qual()).into_owned(),
        })
    }
}

impl<B: BufRead> Iterator for FastqReader<B> {
    type Item = Result<ReadRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.records.next()?;
        self.record_no += 1;
        Some(match next {
            Ok(record) => self.convert(record),
            Err(fastq::Error::ReadError(e)) => Err(GbsTrimError::Io(e)),
            Err(e) => Err(self.malformed(e.to_string())),
        })
    }
}

/// Groups records two at a time: even index is mate 1, odd index is mate 2.
///
/// A trailing unpaired record is dropped without error.
pub struct ReadPairs<I> {
    records: I,
}

impl<I> ReadPairs<I>
where
    I: Iterator<Item = Result<ReadRecord>>,
{
    pub fn new(records: I) -> Self {
        ReadPairs { records }
    }
}

impl<I> Iterator for ReadPairs<I>
where
    I: Iterator<Item = Result<ReadRecord>>,
{
    type Item = Result<ReadPair>;

    fn next(&mut self) -> Option<Self::Item> {
        let mate1 = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e)),
        };
        match self.records.next() {
            Some(Ok(mate2)) => Some(Ok(ReadPair { mate1, mate2 })),
            Some(Err(e)) => Some(Err(e)),
            None => {
                debug!("Dropping unpaired trailing record {}", mate1.name);
                None
            }
        }
    }
}

/// Gzip is decided by the file name alone (`reads.fq.gz`, `reads.fqgz`).
pub fn has_gz_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map_or(false, |name| name.ends_with("gz"))
}

/// Opens a FASTQ file, decompressing when the file name ends with `gz`.
pub fn open_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|source| GbsTrimError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    if has_gz_suffix(path) {
        let decoder = MultiGzDecoder::new(file);
        // 2MB 缓冲区
        Ok(Box::new(BufReader::with_capacity(2 << 20, decoder)))
    } else {
        Ok(Box::new(BufReader::with_capacity(2 << 20, file)))
    }
}

/// Lazy pair stream over an interleaved FASTQ file.
pub fn read_pairs(path: &Path) -> Result<ReadPairs<FastqReader<Box<dyn BufRead>>>> {
    Ok(ReadPairs::new(FastqReader::new(open_reader(path)?)))
}
