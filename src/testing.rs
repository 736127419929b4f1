//! Test support: log capture and codecs that corrupt the wire on purpose.
//!
//! Only compiled with the `test-utils` feature.

use std::sync::Once;

use prost::Message;

use crate::codec::{Codec, ProtoCodec};
use crate::error::CodecError;
use crate::expression::convert::to_proto;
use crate::expression::proto::expression::literal::LiteralType;
use crate::expression::proto::expression::RexType;
use crate::expression::{proto, Expression};

static INIT_LOGGING: Once = Once::new();

/// Routes `tracing` output through the test harness's captured stdout.
/// Safe to call from every test.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// [`ProtoCodec`] that applies `tamper` to the message before writing it.
/// Decoding is untouched.
#[derive(Debug, Clone)]
pub struct TamperingCodec<F> {
    tamper: F,
}

impl<F: Fn(&mut proto::Expression)> TamperingCodec<F> {
    pub fn new(tamper: F) -> Self {
        TamperingCodec { tamper }
    }
}

impl<F: Fn(&mut proto::Expression)> Codec<Expression> for TamperingCodec<F> {
    type Error = CodecError;

    fn encode(&self, value: &Expression) -> Result<Vec<u8>, Self::Error> {
        let mut message = to_proto(value);
        (self.tamper)(&mut message);
        Ok(message.encode_to_vec())
    }

    fn decode(&self, wire: &[u8]) -> Result<Expression, Self::Error> {
        ProtoCodec.decode(wire)
    }
}

/// Zeroes the declared length of a top-level varchar literal.
pub fn clear_var_char_length(message: &mut proto::Expression) {
    if let Some(RexType::Literal(literal)) = message.rex_type.as_mut() {
        if let Some(LiteralType::VarChar(var_char)) = literal.literal_type.as_mut() {
            var_char.length = 0;
        }
    }
}

/// Drops the literal payload entirely, so decoding fails.
pub fn clear_literal_type(message: &mut proto::Expression) {
    if let Some(RexType::Literal(literal)) = message.rex_type.as_mut() {
        literal.literal_type = None;
    }
}
