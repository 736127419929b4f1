//! Full round-trip run over every expression factory function.

use expr_roundtrip::testing::init_test_logging;
use expr_roundtrip::{creator, Harness, HarnessConfig, Outcome, ProtoCodec, Synthesizer};

const SEEDS: [u64; 5] = [0, 1, 7, 42, 0xDEAD_BEEF];

#[test]
fn every_factory_operation_round_trips() {
    init_test_logging();
    let harness = Harness::new(creator::registry(), ProtoCodec);
    let discovered = harness.registry().discover().len();

    for seed in SEEDS {
        let report = harness.run_with(&mut Synthesizer::seeded(seed));
        assert_eq!(report.cases.len(), discovered, "seed {seed}");
        assert!(report.is_success(), "seed {seed}:\n{report}");
    }
}

#[test]
fn only_container_operations_are_skipped() {
    init_test_logging();
    let harness = Harness::with_config(
        creator::registry(),
        ProtoCodec,
        HarnessConfig::default().with_seed(11),
    );
    let report = harness.run();

    let mut skipped: Vec<&str> = report
        .cases
        .iter()
        .filter(|case| case.outcome.is_skipped())
        .map(|case| case.operation.split('(').next().unwrap_or_default())
        .collect();
    skipped.sort_unstable();
    assert_eq!(skipped, vec!["list", "map", "struct_"]);

    let summary = report.summary();
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.passed + summary.skipped, report.cases.len());
}

#[test]
fn overloads_are_separate_cases() {
    let harness = Harness::with_config(
        creator::registry(),
        ProtoCodec,
        HarnessConfig::default().with_seed(3).only("timestamp"),
    );
    let report = harness.run();
    let operations: Vec<&str> = report.cases.iter().map(|c| c.operation.as_str()).collect();
    assert_eq!(
        operations,
        vec![
            "timestamp(bool, i32, i32, i32, i32, i32, i32, i32)",
            "timestamp(bool, i64)",
            "timestamp(bool, NaiveDateTime)",
            "timestamp_tz(bool, i64)",
            "timestamp_tz(bool, DateTime<Utc>)",
        ]
    );
    assert!(report.cases.iter().all(|c| c.outcome == Outcome::Pass), "{report}");
}

#[test]
fn report_serializes_to_json() {
    let harness = Harness::with_config(
        creator::registry(),
        ProtoCodec,
        HarnessConfig::default().with_seed(5).only("list"),
    );
    let json: serde_json::Value = serde_json::from_str(&harness.run().to_json().unwrap()).unwrap();
    assert_eq!(json["cases"][0]["operation"], "list(bool, Vec<Expression>)");
    assert_eq!(json["cases"][0]["outcome"]["status"], "skipped");
}
