//! Restriction-site search after the leading site bases.

use crate::align::{AlignmentResult, LocalAligner, PairwiseAligner};
use crate::config::RestrictionSite;
use crate::error::AlignmentError;

/// Length of the conserved overhang; a readthrough hit aligns exactly
/// the first `OVERHANG_LEN` bases of the site.
pub const OVERHANG_LEN: usize = 4;

pub struct SiteAligner<A = LocalAligner> {
    site: Vec<u8>,
    aligner: A,
}

impl SiteAligner<LocalAligner> {
    pub fn new(site: &RestrictionSite) -> Self {
        Self::with_aligner(site, LocalAligner::new())
    }
}

impl<A: PairwiseAligner> SiteAligner<A> {
    pub fn with_aligner(site: &RestrictionSite, aligner: A) -> Self {
        SiteAligner {
            site: site.as_bytes().to_vec(),
            aligner,
        }
    }

    /// Length of the site prefix skipped on every read.
    pub fn re_len(&self) -> usize {
        self.site.len()
    }

    /// Aligns the site against `sequence[re_len..]`.
    ///
    /// `target_begin` of the result is an offset into that slice.
    pub fn align(&mut self, sequence: &[u8]) -> Result<AlignmentResult, AlignmentError> {
        let re_len = self.re_len();
        if sequence.len() < re_len {
            return Err(AlignmentError::TooShort {
                len: sequence.len(),
                needed: re_len,
            });
        }
        self.aligner
            .align(&self.site, &sequence[re_len..])
            .ok_or(AlignmentError::NoHit)
    }
}

/// Readthrough signature: the alignment starts at the first site base and
/// stops right after the overhang.
pub fn is_readthrough(hit: &AlignmentResult) -> bool {
    hit.query_begin == 0 && hit.query_end == OVERHANG_LEN
}
