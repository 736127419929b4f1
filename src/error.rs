//!
//! Defines error types for the round-trip harness and the expression codec.

use crate::types::ParamType;

/// A declared parameter type has no entry in the synthesizer's generator table.
///
/// This is not a defect of the operation under test: the executor turns it into
/// a skipped case so that coverage gaps stay visible in the report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize, serde::Deserialize)]
#[error("no argument generator for parameter type `{type_name}`")]
pub struct UnsupportedType {
    pub type_name: String,
}

impl UnsupportedType {
    pub fn new(param: &ParamType) -> Self {
        UnsupportedType { type_name: param.name() }
    }
}

/// Errors raised while invoking an operation with a synthesized argument list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationError {
    /// The argument list length does not match the operation's declared arity.
    #[error("expected {expected} arguments, got {found}")]
    Arity { expected: usize, found: usize },
    /// An argument value does not have the declared parameter type.
    #[error("argument {index}: expected `{expected}`, got `{found}`")]
    ArgumentType {
        index: usize,
        expected: String,
        found: String,
    },
    /// The operation rejected otherwise well-typed arguments (an internal precondition).
    #[error("operation rejected its arguments: {0}")]
    Rejected(String),
    /// The operation panicked; the payload message is kept when it is a string.
    #[error("operation panicked: {0}")]
    Panicked(String),
}

/// Errors converting a protobuf message back into the expression model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("expression has no rex_type set")]
    MissingRexType,
    #[error("literal has no literal_type set")]
    MissingLiteralType,
    #[error("map entry is missing its {0}")]
    MissingMapEntryPart(&'static str),
    #[error("value {value} does not fit in {target}")]
    OutOfRange { value: i64, target: &'static str },
    #[error("{what} must be {expected} bytes, got {found}")]
    ByteLength {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

/// Errors produced by a [`crate::codec::Codec`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("wire decoding failed: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("wire encoding failed: {0}")]
    Encode(String),
    #[error("conversion failed: {0}")]
    Conversion(#[from] ConversionError),
}
