#![no_main]

// Factory operations fed arbitrary scalar arguments either reject them or
// produce a value that survives the protobuf round trip.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use expr_roundtrip::harness::{Outcome, RoundTripExecutor, Synthesis, TestCase};
use expr_roundtrip::harness::executor::Failure;
use expr_roundtrip::{creator, ArgValue, Decimal, ParamType, ProtoCodec};

#[derive(Arbitrary, Debug)]
struct Input {
    operation: u8,
    bools: Vec<bool>,
    ints: Vec<i32>,
    longs: Vec<i64>,
    text: String,
    bytes: Vec<u8>,
    decimal: (i64, u8),
}

fn argument(input: &Input, ty: &ParamType, index: usize) -> Option<ArgValue> {
    let pick = |len: usize| if len == 0 { None } else { Some(index % len) };
    Some(match ty {
        ParamType::Bool => ArgValue::Bool(input.bools.get(pick(input.bools.len())?).copied()?),
        ParamType::I32 => ArgValue::I32(input.ints.get(pick(input.ints.len())?).copied()?),
        ParamType::I64 => ArgValue::I64(input.longs.get(pick(input.longs.len())?).copied()?),
        ParamType::String => ArgValue::String(input.text.clone()),
        ParamType::Bytes => ArgValue::Bytes(input.bytes.clone().into()),
        ParamType::Decimal => {
            ArgValue::Decimal(Decimal::new(i128::from(input.decimal.0), u32::from(input.decimal.1 % 20)))
        }
        _ => return None,
    })
}

fuzz_target!(|input: Input| {
    let registry = creator::registry();
    let operations = registry.discover();
    let operation = operations[usize::from(input.operation) % operations.len()];

    let Some(args) = operation
        .params()
        .iter()
        .enumerate()
        .map(|(i, ty)| argument(&input, ty, i))
        .collect::<Option<Vec<_>>>()
    else {
        return;
    };

    let case = TestCase { operation, synthesis: Synthesis::Arguments(args) };
    match RoundTripExecutor::new(ProtoCodec).execute(&case) {
        Outcome::Pass | Outcome::Fail(Failure::Invocation(_)) => {}
        other => panic!("{}: {other:?}", operation.signature()),
    }
});
