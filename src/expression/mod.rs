//!
//! Literal expression model probed by the round-trip harness.
//!
//! Every node carries a `nullable` flag alongside its payload. Equality is the
//! derived deep structural equality, which the executor treats as ground truth.
//! Temporal literals are stored in the wire units (days, microseconds) so that a
//! value built from a calendar date-time compares equal to its decoded form.

pub mod convert;
pub mod creator;
pub mod proto;

use crate::error::InvocationError;
use crate::types::ParamType;
use crate::value::{type_mismatch, ArgValue, Param};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Expression {
    Bool { nullable: bool, value: bool },
    I8 { nullable: bool, value: i8 },
    I16 { nullable: bool, value: i16 },
    I32 { nullable: bool, value: i32 },
    I64 { nullable: bool, value: i64 },
    Fp32 { nullable: bool, value: f32 },
    Fp64 { nullable: bool, value: f64 },
    String { nullable: bool, value: String },
    Binary {
        nullable: bool,
        #[serde(with = "serde_bytes")]
        value: Vec<u8>,
    },
    /// Days since 1970-01-01.
    Date { nullable: bool, days: i32 },
    /// Microseconds since midnight.
    Time { nullable: bool, micros: i64 },
    /// Microseconds since the epoch, no time zone.
    Timestamp { nullable: bool, micros: i64 },
    /// Microseconds since the epoch, UTC.
    TimestampTz { nullable: bool, micros: i64 },
    IntervalYear { nullable: bool, years: i32, months: i32 },
    IntervalDay { nullable: bool, days: i32, seconds: i32 },
    Uuid { nullable: bool, value: uuid::Uuid },
    FixedChar { nullable: bool, value: String },
    VarChar { nullable: bool, value: String, length: u32 },
    FixedBinary {
        nullable: bool,
        #[serde(with = "serde_bytes")]
        value: Vec<u8>,
    },
    /// Unscaled value as 16-byte little-endian two's complement.
    Decimal { nullable: bool, value: [u8; 16], precision: i32, scale: i32 },
    List { nullable: bool, values: Vec<Expression> },
    Struct { nullable: bool, fields: Vec<Expression> },
    Map { nullable: bool, entries: Vec<(Expression, Expression)> },
}

impl Expression {
    pub fn nullable(&self) -> bool {
        match self {
            Expression::Bool { nullable, .. }
            | Expression::I8 { nullable, .. }
            | Expression::I16 { nullable, .. }
            | Expression::I32 { nullable, .. }
            | Expression::I64 { nullable, .. }
            | Expression::Fp32 { nullable, .. }
            | Expression::Fp64 { nullable, .. }
            | Expression::String { nullable, .. }
            | Expression::Binary { nullable, .. }
            | Expression::Date { nullable, .. }
            | Expression::Time { nullable, .. }
            | Expression::Timestamp { nullable, .. }
            | Expression::TimestampTz { nullable, .. }
            | Expression::IntervalYear { nullable, .. }
            | Expression::IntervalDay { nullable, .. }
            | Expression::Uuid { nullable, .. }
            | Expression::FixedChar { nullable, .. }
            | Expression::VarChar { nullable, .. }
            | Expression::FixedBinary { nullable, .. }
            | Expression::Decimal { nullable, .. }
            | Expression::List { nullable, .. }
            | Expression::Struct { nullable, .. }
            | Expression::Map { nullable, .. } => *nullable,
        }
    }

    /// Unscaled decimal value, if this is a decimal literal.
    pub fn decimal_unscaled(&self) -> Option<i128> {
        match self {
            Expression::Decimal { value, .. } => Some(i128::from_le_bytes(*value)),
            _ => None,
        }
    }
}

// Expressions can be declared as operands but are never synthesized.
impl Param for Expression {
    fn param_type() -> ParamType {
        ParamType::Named("Expression")
    }

    fn from_arg(index: usize, arg: &ArgValue) -> Result<Self, InvocationError> {
        Err(type_mismatch::<Self>(index, arg))
    }
}
