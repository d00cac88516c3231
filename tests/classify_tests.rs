use gbstrim::{
    AlignmentResult, PairClass, PairClassifier, PairwiseAligner, ReadPair, ReadRecord,
    RestrictionSite, RunCounters,
};

// 位点 CTGCAG + 8bp 插入 + CTGC 重复 + 接头
const READTHROUGH_R1: &str = "CTGCAGTTACGGTACTGCTTAGATCGGAAGAGCACACGTC";
const READTHROUGH_R2: &str = "CTGCAGGATTCCATCTGCTTAGATCGGAAGAGGTTGTACG";
// 位点后直接接头
const DIMER_R1: &str = "CTGCAGAGATCGGAAGAGCACACGTCTGAACTCCAGTCAC";
const DIMER_R2: &str = "CTGCAGAGATCGGAAGAGCGTGTAGATCTCGGTGGTCGCC";
// 普通基因组序列
const GENOMIC_R1: &str = "CTGCAGTTACTGTTATTACCTTATATTCCA";
const GENOMIC_R2: &str = "CTGCAGATTTCCTGATTTACATTATCCATT";

fn record(name: &str, seq: &str) -> ReadRecord {
    let qual: String = (0..seq.len())
        .map(|i| (b'5' + (i % 10) as u8) as char)
        .collect();
    ReadRecord::new(name, "", seq, &qual)
}

fn pair(r1: &str, r2: &str) -> ReadPair {
    ReadPair {
        mate1: record("p/1", r1),
        mate2: record("p/2", r2),
    }
}

fn pst1() -> RestrictionSite {
    "CTGCAG".parse().unwrap()
}

#[test]
fn test_readthrough_is_trimmed() {
    let mut classifier = PairClassifier::new(&pst1());
    let mut p = pair(READTHROUGH_R1, READTHROUGH_R2);
    let original = p.clone();

    assert_eq!(classifier.classify(&mut p), PairClass::ReadthroughTrimmed);
    // 位点后偏移 8，直接用于整条 read
    assert_eq!(p.mate1.sequence, "CTGCAGTT");
    assert_eq!(p.mate1.quality, &original.mate1.quality[..8]);
    assert_eq!(p.mate2.sequence, "N");
    assert_eq!(p.mate2.quality, "#");
    assert_eq!(p.mate1.sequence.len(), p.mate1.quality.len());
    assert_eq!(p.mate2.sequence.len(), p.mate2.quality.len());
    // 名字和注释不变
    assert_eq!(p.mate1.name, original.mate1.name);
    assert_eq!(p.mate2.name, original.mate2.name);
}

#[test]
fn test_trimmed_pair_is_stable_when_reclassified() {
    let mut classifier = PairClassifier::new(&pst1());
    let mut p = pair(READTHROUGH_R1, READTHROUGH_R2);
    classifier.classify(&mut p);
    let trimmed = p.clone();

    assert_eq!(classifier.classify(&mut p), PairClass::Passthrough);
    assert_eq!(p, trimmed);
}

#[test]
fn test_dimer_is_flagged() {
    let mut classifier = PairClassifier::new(&pst1());
    let mut p = pair(DIMER_R1, DIMER_R2);
    let original = p.clone();

    assert_eq!(classifier.classify(&mut p), PairClass::Dimer);
    // 二聚体不修改
    assert_eq!(p, original);
}

#[test]
fn test_genomic_pair_passes_through() {
    let mut classifier = PairClassifier::new(&pst1());
    let mut p = pair(GENOMIC_R1, GENOMIC_R2);
    let original = p.clone();

    assert_eq!(classifier.classify(&mut p), PairClass::Passthrough);
    assert_eq!(p, original);
}

#[test]
fn test_adaptor_on_one_mate_is_not_dimer() {
    let mut classifier = PairClassifier::new(&pst1());
    let mut p = pair(DIMER_R1, GENOMIC_R2);
    let original = p.clone();

    assert_eq!(classifier.classify(&mut p), PairClass::Passthrough);
    assert_eq!(p, original);
}

#[test]
fn test_short_mate_passes_through() {
    let mut classifier = PairClassifier::new(&pst1());
    let mut p = pair("CTG", GENOMIC_R2);
    let original = p.clone();

    assert_eq!(classifier.classify(&mut p), PairClass::Passthrough);
    assert_eq!(p, original);
}

/// Returns the same answer for every call.
struct FixedAligner(Option<AlignmentResult>);

impl PairwiseAligner for FixedAligner {
    fn align(&mut self, _pattern: &[u8], _target: &[u8]) -> Option<AlignmentResult> {
        self.0
    }
}

fn hit(query_begin: usize, query_end: usize, target_begin: usize) -> AlignmentResult {
    AlignmentResult {
        query_begin,
        query_end,
        target_begin,
        aligned_length: query_end - query_begin,
    }
}

#[test]
fn test_readthrough_skips_dimer_check() {
    // 接头比对总是完整命中；但两端都有 readthrough 特征时不判为二聚体
    let mut classifier = PairClassifier::with_aligners(
        &pst1(),
        FixedAligner(Some(hit(0, 4, 2))),
        FixedAligner(Some(hit(0, 12, 0))),
    );
    let mut p = pair(GENOMIC_R1, GENOMIC_R2);

    assert_eq!(classifier.classify(&mut p), PairClass::ReadthroughTrimmed);
    assert_eq!(p.mate1.sequence, &GENOMIC_R1[..2]);
    assert_eq!(p.mate2.sequence, "N");
}

#[test]
fn test_dimer_takes_precedence_over_matching_offsets() {
    let mut classifier = PairClassifier::with_aligners(
        &pst1(),
        FixedAligner(Some(hit(0, 6, 3))),
        FixedAligner(Some(hit(0, 12, 0))),
    );
    let mut p = pair(GENOMIC_R1, GENOMIC_R2);
    let original = p.clone();

    assert_eq!(classifier.classify(&mut p), PairClass::Dimer);
    assert_eq!(p, original);
}

#[test]
fn test_low_adaptor_coverage_is_not_dimer() {
    // 10/12 < 90%
    let mut classifier = PairClassifier::with_aligners(
        &pst1(),
        FixedAligner(Some(hit(0, 6, 3))),
        FixedAligner(Some(hit(0, 10, 0))),
    );
    let mut p = pair(GENOMIC_R1, GENOMIC_R2);

    // offsets agree, so the pair is trimmed instead
    assert_eq!(classifier.classify(&mut p), PairClass::ReadthroughTrimmed);
    assert_eq!(p.mate1.sequence, &GENOMIC_R1[..3]);
}

#[test]
fn test_no_site_hit_passes_through() {
    let mut classifier =
        PairClassifier::with_aligners(&pst1(), FixedAligner(None), FixedAligner(None));
    let mut p = pair(GENOMIC_R1, GENOMIC_R2);
    let original = p.clone();

    assert_eq!(classifier.classify(&mut p), PairClass::Passthrough);
    assert_eq!(p, original);
}

#[test]
fn test_counters_count_each_pair_once() {
    let mut counters = RunCounters::default();
    counters.record(PairClass::Passthrough);
    counters.record(PairClass::Dimer);
    counters.record(PairClass::ReadthroughTrimmed);
    counters.record(PairClass::ReadthroughTrimmed);

    assert_eq!(
        counters,
        RunCounters {
            pairs_processed: 4,
            pairs_trimmed: 2,
            pairs_with_adaptor: 1,
        }
    );
    assert_eq!(
        counters.to_string(),
        "Processed 4 read pairs\nTrimmed 2\nAdaptor in 1"
    );
}
