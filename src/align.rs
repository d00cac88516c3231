//! Pairwise local alignment used by the site and adaptor searches.

use bio::alignment::pairwise::{Aligner, MatchParams};

/// Scoring equivalent to the Striped Smith-Waterman defaults
/// (match 2, mismatch -3, gap open 5, gap extend 2).
pub const MATCH_SCORE: i32 = 2;
pub const MISMATCH_SCORE: i32 = -3;
// rust-bio charges open + extend for the first gap base
pub const GAP_OPEN: i32 = -3;
pub const GAP_EXTEND: i32 = -2;

/// Best local alignment of a pattern (query) against a target sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentResult {
    /// First aligned pattern base, 0-based.
    pub query_begin: usize,
    /// One past the last aligned pattern base.
    pub query_end: usize,
    /// Offset into the target where the alignment starts.
    pub target_begin: usize,
    /// Number of pattern bases covered by the alignment.
    pub aligned_length: usize,
}

pub trait PairwiseAligner {
    /// Returns `None` when no positively scoring alignment exists.
    fn align(&mut self, pattern: &[u8], target: &[u8]) -> Option<AlignmentResult>;
}

/// Local aligner backed by `bio::alignment::pairwise`.
pub struct LocalAligner {
    inner: Aligner<MatchParams>,
}

impl LocalAligner {
    pub fn new() -> Self {
        LocalAligner {
            inner: Aligner::new(
                GAP_OPEN,
                GAP_EXTEND,
                MatchParams::new(MATCH_SCORE, MISMATCH_SCORE),
            ),
        }
    }
}

impl Default for LocalAligner {
    fn default() -> Self {
        Self::new()
    }
}

impl PairwiseAligner for LocalAligner {
    fn align(&mut self, pattern: &[u8], target: &[u8]) -> Option<AlignmentResult> {
        if pattern.is_empty() || target.is_empty() {
            return None;
        }
        let aln = self.inner.local(pattern, target);
        if aln.score <= 0 || aln.xend <= aln.xstart {
            return None;
        }
        Some(AlignmentResult {
            query_begin: aln.xstart,
            query_end: aln.xend,
            target_begin: aln.ystart,
            aligned_length: aln.xend - aln.xstart,
        })
    }
}
