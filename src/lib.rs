#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Round-trip verification for a protobuf-encoded expression model.
//!
//! The harness discovers the public factory operations of an API, synthesizes
//! an argument list for each from a closed type → generator table, invokes the
//! operation, and checks that `decode(encode(value)) == value`. Every case ends
//! as pass, fail (with a structural diff on mismatch) or skipped (when a
//! parameter type has no generator).
//!
//! ```ignore
//! use expr_roundtrip::{creator, Harness, HarnessConfig, ProtoCodec};
//!
//! let harness = Harness::with_config(creator::registry(), ProtoCodec, HarnessConfig::default().with_seed(7));
//! let report = harness.run();
//! assert!(report.is_success(), "{report}");
//! ```

// Declared parameter types.
pub mod types;

// Argument values and the `Param` binding trait.
pub mod value;

pub mod error;

// Encode/decode seam and the protobuf codec.
pub mod codec;

pub mod config;

// Expression model, wire messages and factory functions.
pub mod expression;

// Discovery, synthesis, planning, execution and reporting.
pub mod harness;

#[cfg(feature = "test-utils")]
pub mod testing;

pub use codec::{Codec, ProtoCodec};
pub use config::HarnessConfig;
pub use error::{CodecError, ConversionError, InvocationError, UnsupportedType};
pub use expression::{creator, Expression};
pub use harness::{
    CaseReport, Failure, Harness, Operation, OperationRegistry, Outcome, RunReport, Synthesis,
    Synthesizer,
};
pub use types::ParamType;
pub use value::{ArgValue, CustomArg, Decimal, Param};
