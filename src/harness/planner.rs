//! Case planner: one test case per discovered operation.

use rand_core::RngCore;

use crate::error::UnsupportedType;
use crate::harness::registry::Operation;
use crate::harness::synth::Synthesizer;
use crate::value::ArgValue;

/// Either a full argument list or the first unsupported parameter type. Never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Synthesis {
    Arguments(Vec<ArgValue>),
    Unsupported(UnsupportedType),
}

#[derive(Debug)]
pub struct TestCase<'a, V> {
    pub operation: &'a Operation<V>,
    pub synthesis: Synthesis,
}

/// Synthesizes each parameter in declared order, stopping at the first
/// unsupported type. Arguments synthesized before it are discarded.
pub fn plan_case<'a, V, R: RngCore>(
    operation: &'a Operation<V>,
    synthesizer: &mut Synthesizer<R>,
) -> TestCase<'a, V> {
    let synthesis = match operation
        .params()
        .iter()
        .map(|ty| synthesizer.synthesize(ty))
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(args) => Synthesis::Arguments(args),
        Err(unsupported) => {
            tracing::debug!(
                operation = %operation.signature(),
                param_type = %unsupported.type_name,
                "parameter type has no generator"
            );
            Synthesis::Unsupported(unsupported)
        }
    };
    TestCase { operation, synthesis }
}

/// Plans every operation; the result has exactly one case per input, in input order.
pub fn plan<'a, V, R: RngCore>(
    operations: &[&'a Operation<V>],
    synthesizer: &mut Synthesizer<R>,
) -> Vec<TestCase<'a, V>> {
    operations.iter().map(|op| plan_case(*op, synthesizer)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvocationError;
    use crate::types::ParamType;

    fn unreachable_invoker(_: &[ArgValue]) -> Result<(), InvocationError> {
        Err(InvocationError::Rejected("not invoked in planner tests".into()))
    }

    #[test]
    fn supported_params_yield_ordered_arguments() {
        let op = Operation::new(
            "mixed",
            vec![ParamType::Bool, ParamType::I32, ParamType::String],
            unreachable_invoker,
        );
        let case = plan_case(&op, &mut Synthesizer::seeded(9));
        let Synthesis::Arguments(args) = case.synthesis else {
            panic!("expected arguments");
        };
        let types: Vec<ParamType> = args.iter().map(ArgValue::param_type).collect();
        assert_eq!(types, op.params());
        assert_eq!(args[1], ArgValue::I32(1));
    }

    #[test]
    fn first_unsupported_param_wins() {
        let op = Operation::new(
            "custom",
            vec![
                ParamType::I64,
                ParamType::Named("First"),
                ParamType::Named("Second"),
            ],
            unreachable_invoker,
        );
        let case = plan_case(&op, &mut Synthesizer::seeded(9));
        assert_eq!(
            case.synthesis,
            Synthesis::Unsupported(UnsupportedType { type_name: "First".into() })
        );
    }

    #[test]
    fn zero_params_is_an_empty_argument_list() {
        let op = Operation::new("nullary", Vec::new(), unreachable_invoker);
        let cases = plan(&[&op, &op], &mut Synthesizer::seeded(0));
        assert_eq!(cases.len(), 2);
        assert!(cases
            .iter()
            .all(|case| case.synthesis == Synthesis::Arguments(Vec::new())));
    }
}
