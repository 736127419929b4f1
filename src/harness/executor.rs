//! Round-trip executor.
//!
//! Per case: `Planned → Skipped` when synthesis reported an unsupported type,
//! otherwise `Planned → Executing → Pass | Fail`. Every failure, including a
//! panic inside the operation or the codec, is captured as that case's outcome.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;

use crate::codec::Codec;
use crate::error::InvocationError;
use crate::harness::diff::{structural_diff, Difference};
use crate::harness::planner::{Synthesis, TestCase};
use crate::harness::registry::Operation;
use crate::value::ArgValue;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail(Failure),
    /// Carries the unsupported-type message.
    Skipped(String),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }

    /// Human-readable detail for Fail and Skipped.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(failure) => Some(failure.to_string()),
            Outcome::Skipped(reason) => Some(reason.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Failure {
    Invocation(InvocationError),
    Encode(String),
    Decode(String),
    /// Decoded value differs from the original.
    Mismatch {
        original: String,
        recovered: String,
        differences: Vec<Difference>,
    },
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Invocation(e) => write!(f, "invocation failed: {e}"),
            Failure::Encode(e) => write!(f, "encoding failed: {e}"),
            Failure::Decode(e) => write!(f, "decoding failed: {e}"),
            Failure::Mismatch { original, recovered, differences } => {
                write!(f, "round trip changed the value\n  original:  {original}\n  recovered: {recovered}")?;
                for d in differences {
                    write!(f, "\n  {d}")?;
                }
                Ok(())
            }
        }
    }
}

/// Drives test cases through invoke → encode → decode → compare with codec `C`.
#[derive(Debug, Clone, Default)]
pub struct RoundTripExecutor<C> {
    codec: C,
}

impl<C> RoundTripExecutor<C> {
    pub fn new(codec: C) -> Self {
        RoundTripExecutor { codec }
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn execute<V>(&self, case: &TestCase<'_, V>) -> Outcome
    where
        C: Codec<V>,
        V: PartialEq + fmt::Debug + Serialize,
    {
        let signature = case.operation.signature();
        let args = match &case.synthesis {
            Synthesis::Unsupported(report) => {
                tracing::info!(operation = %signature, reason = %report, "skipped");
                return Outcome::Skipped(report.to_string());
            }
            Synthesis::Arguments(args) => args,
        };

        tracing::debug!(operation = %signature, ?args, "executing round trip");
        match self.round_trip(case.operation, args) {
            Ok(()) => {
                tracing::debug!(operation = %signature, "passed");
                Outcome::Pass
            }
            Err(failure) => {
                tracing::warn!(operation = %signature, %failure, "failed");
                Outcome::Fail(failure)
            }
        }
    }

    fn round_trip<V>(&self, operation: &Operation<V>, args: &[ArgValue]) -> Result<(), Failure>
    where
        C: Codec<V>,
        V: PartialEq + fmt::Debug + Serialize,
    {
        let original = isolate(|| operation.invoke(args))
            .unwrap_or_else(|msg| Err(InvocationError::Panicked(msg)))
            .map_err(Failure::Invocation)?;

        let wire = isolate(|| self.codec.encode(&original).map_err(|e| e.to_string()))
            .unwrap_or_else(|msg| Err(format!("panicked: {msg}")))
            .map_err(Failure::Encode)?;

        let recovered = isolate(|| self.codec.decode(&wire).map_err(|e| e.to_string()))
            .unwrap_or_else(|msg| Err(format!("panicked: {msg}")))
            .map_err(Failure::Decode)?;

        if original == recovered {
            Ok(())
        } else {
            Err(Failure::Mismatch {
                differences: structural_diff(&original, &recovered),
                original: format!("{original:?}"),
                recovered: format!("{recovered:?}"),
            })
        }
    }
}

/// Runs `f`, turning a panic into `Err` with the panic message.
fn isolate<T>(f: impl FnOnce() -> T) -> Result<T, String> {
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_messages_are_recovered() {
        assert_eq!(isolate(|| 3), Ok(3));
        assert_eq!(isolate(|| -> i32 { panic!("boom") }), Err("boom".to_string()));
        let n = 5;
        assert_eq!(
            isolate(|| -> i32 { panic!("boom {n}") }),
            Err("boom 5".to_string())
        );
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(Outcome::Pass.message(), None);
        assert_eq!(Outcome::Skipped("no generator".into()).message().as_deref(), Some("no generator"));
        let fail = Outcome::Fail(Failure::Encode("bad".into()));
        assert!(fail.is_fail());
        assert_eq!(fail.message().as_deref(), Some("encoding failed: bad"));
    }

    #[test]
    fn outcomes_serialize_with_status_tag() {
        let json = serde_json::to_value(Outcome::Skipped("x".into())).unwrap();
        assert_eq!(json, serde_json::json!({"status": "skipped", "detail": "x"}));
        let json = serde_json::to_value(Outcome::Pass).unwrap();
        assert_eq!(json, serde_json::json!({"status": "pass"}));
    }
}
