//! Adaptor-dimer detection.

use crate::align::{LocalAligner, PairwiseAligner};

pub const ADAPTOR: &[u8] = b"AGATCGGAAGAG";
pub const ADAPTOR_LEN: usize = ADAPTOR.len();
pub const LONGEST_BARCODE: usize = 8;
/// Fraction of the adaptor that must be covered by the alignment.
pub const MIN_ADAPTOR_COVERAGE: f64 = 0.9;

pub struct DimerDetector<A = LocalAligner> {
    re_len: usize,
    aligner: A,
}

impl DimerDetector<LocalAligner> {
    pub fn new(re_len: usize) -> Self {
        Self::with_aligner(re_len, LocalAligner::new())
    }
}

impl<A: PairwiseAligner> DimerDetector<A> {
    pub fn with_aligner(re_len: usize, aligner: A) -> Self {
        DimerDetector { re_len, aligner }
    }

    /// End (exclusive) of the window searched for the adaptor.
    pub fn align_until(&self) -> usize {
        self.re_len + ADAPTOR_LEN + LONGEST_BARCODE
    }

    /// Read offset of an adaptor hit inside `sequence[re_len..align_until]`,
    /// if one covers enough of the adaptor.
    pub fn locate(&mut self, sequence: &[u8]) -> Option<usize> {
        let end = self.align_until().min(sequence.len());
        if end <= self.re_len {
            return None;
        }
        let hit = self.aligner.align(ADAPTOR, &sequence[self.re_len..end])?;
        if (hit.aligned_length as f64) / (ADAPTOR_LEN as f64) < MIN_ADAPTOR_COVERAGE {
            return None;
        }
        Some(self.re_len + hit.target_begin)
    }

    /// Both mates carry the adaptor inside the window.
    pub fn is_dimer(&mut self, mate1: &[u8], mate2: &[u8]) -> bool {
        let align_until = self.align_until();
        match (self.locate(mate1), self.locate(mate2)) {
            (Some(r1pos), Some(r2pos)) => r1pos < align_until && r2pos < align_until,
            _ => false,
        }
    }
}
