//! End-to-end scenarios against small hand-built factories.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand_core::RngCore;

use expr_roundtrip::expression::creator;
use expr_roundtrip::harness::executor::Failure;
use expr_roundtrip::testing::{clear_literal_type, clear_var_char_length, init_test_logging, TamperingCodec};
use expr_roundtrip::{
    Expression, Harness, InvocationError, OperationRegistry, Outcome, Param, ParamType, ProtoCodec,
    Synthesizer,
};

/// Stands in for a model type the synthesizer has no generator for.
struct SomeUnmappedType;

impl Param for SomeUnmappedType {
    fn param_type() -> ParamType {
        ParamType::Named("SomeUnmappedType")
    }

    fn from_arg(index: usize, arg: &expr_roundtrip::ArgValue) -> Result<Self, InvocationError> {
        Err(expr_roundtrip::value::type_mismatch::<Self>(index, arg))
    }
}

/// A caller-defined argument type, supported by registering a generator for it.
#[derive(Debug, Clone, PartialEq)]
struct Label(String);

impl Param for Label {
    fn param_type() -> ParamType {
        ParamType::Named("Label")
    }

    fn from_arg(index: usize, arg: &expr_roundtrip::ArgValue) -> Result<Self, InvocationError> {
        expr_roundtrip::value::from_custom(index, arg)
    }
}

fn gen_label(rng: &mut dyn RngCore) -> expr_roundtrip::ArgValue {
    expr_roundtrip::ArgValue::custom(Label::param_type(), Label(format!("label-{}", rng.next_u32())))
}

fn make_label(label: Label) -> Expression {
    creator::string(false, label.0)
}

static CUSTOM_CALLS: AtomicUsize = AtomicUsize::new(0);

fn make_flag(flag: bool) -> Expression {
    creator::boolean(false, flag)
}

fn make_date(year: i32, month: i32, day: i32) -> Result<Expression, InvocationError> {
    creator::date_ymd(true, year, month, day)
}

fn make_custom(_value: SomeUnmappedType) -> Expression {
    CUSTOM_CALLS.fetch_add(1, Ordering::SeqCst);
    panic!("make_custom must never be invoked")
}

fn make_var_char(value: String) -> Result<Expression, InvocationError> {
    creator::var_char(true, value, 16)
}

fn factory() -> OperationRegistry<Expression> {
    let mut registry = OperationRegistry::new();
    registry
        .register(expr_roundtrip::operation!("make_flag", make_flag, (bool)))
        .register(expr_roundtrip::operation!(fallible "make_date", make_date, (i32, i32, i32)))
        .register(expr_roundtrip::operation!("make_custom", make_custom, (SomeUnmappedType)));
    registry
}

#[test]
fn scalar_factories_pass_and_unmapped_types_skip() {
    init_test_logging();
    let report = Harness::new(factory(), ProtoCodec).run_with(&mut Synthesizer::seeded(99));

    assert_eq!(report.cases.len(), 3);
    assert_eq!(report.get("make_flag(bool)").map(|c| &c.outcome), Some(&Outcome::Pass));
    assert_eq!(report.get("make_date(i32, i32, i32)").map(|c| &c.outcome), Some(&Outcome::Pass));

    let custom = report.get("make_custom(SomeUnmappedType)").unwrap();
    assert_eq!(
        custom.outcome,
        Outcome::Skipped("no argument generator for parameter type `SomeUnmappedType`".into())
    );
    assert_eq!(CUSTOM_CALLS.load(Ordering::SeqCst), 0);
    assert!(report.is_success());
}

#[test]
fn dropped_var_char_length_is_a_mismatch() {
    init_test_logging();
    let mut registry = OperationRegistry::new();
    registry.register(expr_roundtrip::operation!(fallible "make_var_char", make_var_char, (String)));

    let harness = Harness::new(registry, TamperingCodec::new(clear_var_char_length));
    let report = harness.run_with(&mut Synthesizer::seeded(4));

    let Outcome::Fail(Failure::Mismatch { differences, .. }) = &report.cases[0].outcome else {
        panic!("expected a mismatch:\n{report}");
    };
    let paths: Vec<&str> = differences.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, vec!["$.VarChar.length"]);
    assert_eq!(differences[0].to_string(), "$.VarChar.length: 16 != 0");
}

#[test]
fn undecodable_wire_is_a_decode_failure() {
    let mut registry = OperationRegistry::new();
    registry.register(expr_roundtrip::operation!("make_flag", make_flag, (bool)));

    let harness = Harness::new(registry, TamperingCodec::new(clear_literal_type));
    let report = harness.run_with(&mut Synthesizer::seeded(4));

    assert!(matches!(report.cases[0].outcome, Outcome::Fail(Failure::Decode(_))));
    assert_eq!(report.summary().failed, 1);
}

#[test]
fn untampered_codec_passes_the_same_factory() {
    let mut registry = OperationRegistry::new();
    registry.register(expr_roundtrip::operation!(fallible "make_var_char", make_var_char, (String)));
    let report = Harness::new(registry, ProtoCodec).run_with(&mut Synthesizer::seeded(4));
    assert!(report.cases.iter().all(|c| c.outcome.is_pass()), "{report}");
}

#[test]
fn bad_calendar_fields_are_invocation_failures() {
    let mut registry = OperationRegistry::new();
    registry.register(expr_roundtrip::operation!(fallible "make_date", make_date, (i32, i32, i32)));

    let mut synth = Synthesizer::seeded(0);
    synth.register(ParamType::I32, |_| expr_roundtrip::ArgValue::I32(13));
    let report = Harness::new(registry, ProtoCodec).run_with(&mut synth);

    assert!(matches!(
        report.cases[0].outcome,
        Outcome::Fail(Failure::Invocation(InvocationError::Rejected(_)))
    ));
}

#[test]
fn registered_generator_supports_a_new_type() {
    init_test_logging();
    let mut registry = OperationRegistry::new();
    registry.register(expr_roundtrip::operation!("make_label", make_label, (Label)));
    let harness = Harness::new(registry, ProtoCodec);

    let report = harness.run_with(&mut Synthesizer::seeded(12));
    assert!(report.cases[0].outcome.is_skipped(), "{report}");

    let mut synth = Synthesizer::seeded(12);
    synth.register(Label::param_type(), gen_label);
    let report = harness.run_with(&mut synth);
    assert_eq!(report.get("make_label(Label)").map(|c| &c.outcome), Some(&Outcome::Pass));
}
