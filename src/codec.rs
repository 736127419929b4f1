//! Defines the encode/decode seam the round-trip executor drives.

use prost::Message;

use crate::error::CodecError;
use crate::expression::convert::{from_proto, to_proto};
use crate::expression::{proto, Expression};

/// Encoder/decoder pair for a value model `V`.
///
/// `decode` is expected to be the exact inverse of `encode` on any wire bytes that
/// `encode` produced. The executor trusts neither: both errors and mismatches
/// are reported per case.
pub trait Codec<V> {
    /// The error type that can occur during encoding or decoding.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Encodes a value into its wire representation.
    fn encode(&self, value: &V) -> Result<Vec<u8>, Self::Error>;

    /// Decodes a value from its wire representation.
    fn decode(&self, wire: &[u8]) -> Result<V, Self::Error>;
}

/// Protobuf codec for [`Expression`]: model → `proto::Expression` → bytes and back.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoCodec;

impl Codec<Expression> for ProtoCodec {
    type Error = CodecError;

    fn encode(&self, value: &Expression) -> Result<Vec<u8>, Self::Error> {
        Ok(to_proto(value).encode_to_vec())
    }

    fn decode(&self, wire: &[u8]) -> Result<Expression, Self::Error> {
        let message = proto::Expression::decode(wire)?;
        Ok(from_proto(&message)?)
    }
}
