//! Conversion between [`Expression`] and its protobuf form.

use super::proto;
use super::proto::expression::literal::{self, LiteralType};
use super::proto::expression::{Literal, RexType};
use super::Expression;
use crate::error::ConversionError;

pub fn to_proto(expr: &Expression) -> proto::Expression {
    proto::Expression { rex_type: Some(RexType::Literal(to_literal(expr))) }
}

pub fn from_proto(expr: &proto::Expression) -> Result<Expression, ConversionError> {
    match &expr.rex_type {
        Some(RexType::Literal(lit)) => from_literal(lit),
        None => Err(ConversionError::MissingRexType),
    }
}

fn to_literal(expr: &Expression) -> Literal {
    let literal_type = match expr {
        Expression::Bool { value, .. } => LiteralType::Boolean(*value),
        Expression::I8 { value, .. } => LiteralType::I8(i32::from(*value)),
        Expression::I16 { value, .. } => LiteralType::I16(i32::from(*value)),
        Expression::I32 { value, .. } => LiteralType::I32(*value),
        Expression::I64 { value, .. } => LiteralType::I64(*value),
        Expression::Fp32 { value, .. } => LiteralType::Fp32(*value),
        Expression::Fp64 { value, .. } => LiteralType::Fp64(*value),
        Expression::String { value, .. } => LiteralType::String(value.clone()),
        Expression::Binary { value, .. } => LiteralType::Binary(value.clone()),
        Expression::Date { days, .. } => LiteralType::Date(*days),
        Expression::Time { micros, .. } => LiteralType::Time(*micros),
        Expression::Timestamp { micros, .. } => LiteralType::Timestamp(*micros),
        Expression::TimestampTz { micros, .. } => LiteralType::TimestampTz(*micros),
        Expression::IntervalYear { years, months, .. } => {
            LiteralType::IntervalYearToMonth(literal::IntervalYearToMonth {
                years: *years,
                months: *months,
            })
        }
        Expression::IntervalDay { days, seconds, .. } => {
            LiteralType::IntervalDayToSecond(literal::IntervalDayToSecond {
                days: *days,
                seconds: *seconds,
            })
        }
        Expression::Uuid { value, .. } => LiteralType::Uuid(value.as_bytes().to_vec()),
        Expression::FixedChar { value, .. } => LiteralType::FixedChar(value.clone()),
        Expression::VarChar { value, length, .. } => LiteralType::VarChar(literal::VarChar {
            value: value.clone(),
            length: *length,
        }),
        Expression::FixedBinary { value, .. } => LiteralType::FixedBinary(value.clone()),
        Expression::Decimal { value, precision, scale, .. } => {
            LiteralType::Decimal(literal::Decimal {
                value: value.to_vec(),
                precision: *precision,
                scale: *scale,
            })
        }
        Expression::List { values, .. } => LiteralType::List(literal::List {
            values: values.iter().map(to_literal).collect(),
        }),
        Expression::Struct { fields, .. } => LiteralType::Struct(literal::Struct {
            fields: fields.iter().map(to_literal).collect(),
        }),
        Expression::Map { entries, .. } => LiteralType::Map(literal::Map {
            key_values: entries
                .iter()
                .map(|(k, v)| literal::map::KeyValue {
                    key: Some(to_literal(k)),
                    value: Some(to_literal(v)),
                })
                .collect(),
        }),
    };
    Literal {
        nullable: expr.nullable(),
        type_variation_reference: 0,
        literal_type: Some(literal_type),
    }
}

fn from_literal(lit: &Literal) -> Result<Expression, ConversionError> {
    let nullable = lit.nullable;
    let literal_type = lit.literal_type.as_ref().ok_or(ConversionError::MissingLiteralType)?;
    let expr = match literal_type {
        LiteralType::Boolean(value) => Expression::Bool { nullable, value: *value },
        LiteralType::I8(value) => Expression::I8 {
            nullable,
            value: i8::try_from(*value).map_err(|_| out_of_range(i64::from(*value), "i8"))?,
        },
        LiteralType::I16(value) => Expression::I16 {
            nullable,
            value: i16::try_from(*value).map_err(|_| out_of_range(i64::from(*value), "i16"))?,
        },
        LiteralType::I32(value) => Expression::I32 { nullable, value: *value },
        LiteralType::I64(value) => Expression::I64 { nullable, value: *value },
        LiteralType::Fp32(value) => Expression::Fp32 { nullable, value: *value },
        LiteralType::Fp64(value) => Expression::Fp64 { nullable, value: *value },
        LiteralType::String(value) => Expression::String { nullable, value: value.clone() },
        LiteralType::Binary(value) => Expression::Binary { nullable, value: value.clone() },
        LiteralType::Timestamp(micros) => Expression::Timestamp { nullable, micros: *micros },
        LiteralType::Date(days) => Expression::Date { nullable, days: *days },
        LiteralType::Time(micros) => Expression::Time { nullable, micros: *micros },
        LiteralType::IntervalYearToMonth(iv) => Expression::IntervalYear {
            nullable,
            years: iv.years,
            months: iv.months,
        },
        LiteralType::IntervalDayToSecond(iv) => Expression::IntervalDay {
            nullable,
            days: iv.days,
            seconds: iv.seconds,
        },
        LiteralType::FixedChar(value) => Expression::FixedChar { nullable, value: value.clone() },
        LiteralType::VarChar(vc) => Expression::VarChar {
            nullable,
            value: vc.value.clone(),
            length: vc.length,
        },
        LiteralType::FixedBinary(value) => {
            Expression::FixedBinary { nullable, value: value.clone() }
        }
        LiteralType::Decimal(dec) => Expression::Decimal {
            nullable,
            value: fixed_bytes::<16>("decimal value", &dec.value)?,
            precision: dec.precision,
            scale: dec.scale,
        },
        LiteralType::Struct(st) => Expression::Struct {
            nullable,
            fields: st.fields.iter().map(from_literal).collect::<Result<_, _>>()?,
        },
        LiteralType::Map(map) => Expression::Map {
            nullable,
            entries: map.key_values.iter().map(from_key_value).collect::<Result<_, _>>()?,
        },
        LiteralType::TimestampTz(micros) => Expression::TimestampTz { nullable, micros: *micros },
        LiteralType::Uuid(bytes) => Expression::Uuid {
            nullable,
            value: uuid::Uuid::from_bytes(fixed_bytes::<16>("uuid", bytes)?),
        },
        LiteralType::List(list) => Expression::List {
            nullable,
            values: list.values.iter().map(from_literal).collect::<Result<_, _>>()?,
        },
    };
    Ok(expr)
}

fn from_key_value(kv: &literal::map::KeyValue) -> Result<(Expression, Expression), ConversionError> {
    let key = kv.key.as_ref().ok_or(ConversionError::MissingMapEntryPart("key"))?;
    let value = kv.value.as_ref().ok_or(ConversionError::MissingMapEntryPart("value"))?;
    Ok((from_literal(key)?, from_literal(value)?))
}

fn fixed_bytes<const N: usize>(what: &'static str, bytes: &[u8]) -> Result<[u8; N], ConversionError> {
    bytes.try_into().map_err(|_| ConversionError::ByteLength {
        what,
        expected: N,
        found: bytes.len(),
    })
}

fn out_of_range(value: i64, target: &'static str) -> ConversionError {
    ConversionError::OutOfRange { value, target }
}
