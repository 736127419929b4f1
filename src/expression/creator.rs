//! Factory functions for literal expressions.
//!
//! This is the API surface the round-trip harness probes. Every function takes
//! the `nullable` flag first. Functions that validate their inputs return
//! [`InvocationError::Rejected`] instead of panicking.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use prost::bytes::Bytes;
use uuid::Uuid;

use super::Expression;
use crate::error::InvocationError;
use crate::harness::registry::OperationRegistry;
use crate::value::Decimal;

/// Days from 0001-01-01 (day 1 of the common era) to 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

const MAX_DECIMAL_PRECISION: i32 = 38;

fn rejected(msg: impl Into<String>) -> InvocationError {
    InvocationError::Rejected(msg.into())
}

fn non_negative(what: &str, value: i32) -> Result<u32, InvocationError> {
    u32::try_from(value).map_err(|_| rejected(format!("{what} must not be negative, got {value}")))
}

pub fn boolean(nullable: bool, value: bool) -> Expression {
    Expression::Bool { nullable, value }
}

pub fn int8(nullable: bool, value: i32) -> Result<Expression, InvocationError> {
    let value = i8::try_from(value).map_err(|_| rejected(format!("{value} does not fit in i8")))?;
    Ok(Expression::I8 { nullable, value })
}

pub fn int16(nullable: bool, value: i32) -> Result<Expression, InvocationError> {
    let value = i16::try_from(value).map_err(|_| rejected(format!("{value} does not fit in i16")))?;
    Ok(Expression::I16 { nullable, value })
}

pub fn int32(nullable: bool, value: i32) -> Expression {
    Expression::I32 { nullable, value }
}

pub fn int64(nullable: bool, value: i64) -> Expression {
    Expression::I64 { nullable, value }
}

pub fn fp32(nullable: bool, value: f32) -> Expression {
    Expression::Fp32 { nullable, value }
}

pub fn fp64(nullable: bool, value: f64) -> Expression {
    Expression::Fp64 { nullable, value }
}

pub fn string(nullable: bool, value: String) -> Expression {
    Expression::String { nullable, value }
}

pub fn binary(nullable: bool, value: Bytes) -> Expression {
    Expression::Binary { nullable, value: value.to_vec() }
}

pub fn date(nullable: bool, days: i32) -> Expression {
    Expression::Date { nullable, days }
}

/// Date from calendar fields; rejects dates chrono cannot represent.
pub fn date_ymd(nullable: bool, year: i32, month: i32, day: i32) -> Result<Expression, InvocationError> {
    let date = naive_date(year, month, day)?;
    Ok(Expression::Date { nullable, days: date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE })
}

fn naive_date(year: i32, month: i32, day: i32) -> Result<NaiveDate, InvocationError> {
    NaiveDate::from_ymd_opt(year, non_negative("month", month)?, non_negative("day", day)?)
        .ok_or_else(|| rejected(format!("invalid date {year}-{month}-{day}")))
}

pub fn time(nullable: bool, micros: i64) -> Expression {
    Expression::Time { nullable, micros }
}

pub fn timestamp(nullable: bool, micros: i64) -> Expression {
    Expression::Timestamp { nullable, micros }
}

/// Wall-clock date-time, read as if it were UTC.
pub fn timestamp_from_local(nullable: bool, value: NaiveDateTime) -> Expression {
    Expression::Timestamp { nullable, micros: value.and_utc().timestamp_micros() }
}

#[allow(clippy::too_many_arguments)]
pub fn timestamp_from_parts(
    nullable: bool,
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    second: i32,
    micros: i32,
) -> Result<Expression, InvocationError> {
    let date = naive_date(year, month, day)?;
    let value = date
        .and_hms_micro_opt(
            non_negative("hour", hour)?,
            non_negative("minute", minute)?,
            non_negative("second", second)?,
            non_negative("micros", micros)?,
        )
        .ok_or_else(|| rejected(format!("invalid time {hour}:{minute}:{second}.{micros:06}")))?;
    Ok(timestamp_from_local(nullable, value))
}

pub fn timestamp_tz(nullable: bool, micros: i64) -> Expression {
    Expression::TimestampTz { nullable, micros }
}

pub fn timestamp_tz_from_instant(nullable: bool, value: DateTime<Utc>) -> Expression {
    Expression::TimestampTz { nullable, micros: value.timestamp_micros() }
}

pub fn interval_year(nullable: bool, years: i32, months: i32) -> Expression {
    Expression::IntervalYear { nullable, years, months }
}

pub fn interval_day(nullable: bool, days: i32, seconds: i32) -> Expression {
    Expression::IntervalDay { nullable, days, seconds }
}

pub fn uuid(nullable: bool, value: Uuid) -> Expression {
    Expression::Uuid { nullable, value }
}

/// UUID from the first 16 bytes of `bytes`; trailing bytes are ignored.
pub fn uuid_from_bytes(nullable: bool, bytes: Bytes) -> Result<Expression, InvocationError> {
    let head: [u8; 16] = bytes
        .get(..16)
        .and_then(|head| head.try_into().ok())
        .ok_or_else(|| rejected(format!("uuid needs 16 bytes, got {}", bytes.len())))?;
    Ok(Expression::Uuid { nullable, value: Uuid::from_bytes(head) })
}

pub fn fixed_char(nullable: bool, value: String) -> Expression {
    Expression::FixedChar { nullable, value }
}

/// The declared length is not checked against the value.
pub fn var_char(nullable: bool, value: String, length: i32) -> Result<Expression, InvocationError> {
    let length = non_negative("varchar length", length)?;
    Ok(Expression::VarChar { nullable, value, length })
}

pub fn fixed_binary(nullable: bool, value: Bytes) -> Expression {
    Expression::FixedBinary { nullable, value: value.to_vec() }
}

/// Decimal literal rescaled to `scale`.
///
/// Rejects a precision outside `1..=38`, a scale outside `0..=precision`, and a
/// value that would lose digits at `scale`. The digit count is not checked
/// against the precision.
pub fn decimal(
    nullable: bool,
    value: Decimal,
    precision: i32,
    scale: i32,
) -> Result<Expression, InvocationError> {
    if !(1..=MAX_DECIMAL_PRECISION).contains(&precision) {
        return Err(rejected(format!("precision {precision} outside 1..={MAX_DECIMAL_PRECISION}")));
    }
    if !(0..=precision).contains(&scale) {
        return Err(rejected(format!("scale {scale} outside 0..={precision}")));
    }
    let unscaled = value
        .unscaled_at(non_negative("scale", scale)?)
        .ok_or_else(|| rejected(format!("{value:?} is not representable at scale {scale}")))?;
    Ok(Expression::Decimal { nullable, value: unscaled.to_le_bytes(), precision, scale })
}

pub fn list(nullable: bool, values: Vec<Expression>) -> Expression {
    Expression::List { nullable, values }
}

pub fn struct_(nullable: bool, fields: Vec<Expression>) -> Expression {
    Expression::Struct { nullable, fields }
}

pub fn map(nullable: bool, entries: Vec<(Expression, Expression)>) -> Expression {
    Expression::Map { nullable, entries }
}

/// Every factory function in this module.
pub fn registry() -> OperationRegistry<Expression> {
    let mut registry = OperationRegistry::new();
    registry
        .register(crate::operation!("boolean", boolean, (bool, bool)))
        .register(crate::operation!(fallible "int8", int8, (bool, i32)))
        .register(crate::operation!(fallible "int16", int16, (bool, i32)))
        .register(crate::operation!("int32", int32, (bool, i32)))
        .register(crate::operation!("int64", int64, (bool, i64)))
        .register(crate::operation!("fp32", fp32, (bool, f32)))
        .register(crate::operation!("fp64", fp64, (bool, f64)))
        .register(crate::operation!("string", string, (bool, String)))
        .register(crate::operation!("binary", binary, (bool, Bytes)))
        .register(crate::operation!("date", date, (bool, i32)))
        .register(crate::operation!(fallible "date", date_ymd, (bool, i32, i32, i32)))
        .register(crate::operation!("time", time, (bool, i64)))
        .register(crate::operation!("timestamp", timestamp, (bool, i64)))
        .register(crate::operation!("timestamp", timestamp_from_local, (bool, NaiveDateTime)))
        .register(crate::operation!(
            fallible "timestamp",
            timestamp_from_parts,
            (bool, i32, i32, i32, i32, i32, i32, i32)
        ))
        .register(crate::operation!("timestamp_tz", timestamp_tz, (bool, i64)))
        .register(crate::operation!("timestamp_tz", timestamp_tz_from_instant, (bool, DateTime<Utc>)))
        .register(crate::operation!("interval_year", interval_year, (bool, i32, i32)))
        .register(crate::operation!("interval_day", interval_day, (bool, i32, i32)))
        .register(crate::operation!("uuid", uuid, (bool, Uuid)))
        .register(crate::operation!(fallible "uuid", uuid_from_bytes, (bool, Bytes)))
        .register(crate::operation!("fixed_char", fixed_char, (bool, String)))
        .register(crate::operation!(fallible "var_char", var_char, (bool, String, i32)))
        .register(crate::operation!("fixed_binary", fixed_binary, (bool, Bytes)))
        .register(crate::operation!(fallible "decimal", decimal, (bool, Decimal, i32, i32)))
        .register(crate::operation!("list", list, (bool, Vec<Expression>)))
        .register(crate::operation!("struct_", struct_, (bool, Vec<Expression>)))
        .register(crate::operation!("map", map, (bool, Vec<(Expression, Expression)>)));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParamType;
    use crate::value::ArgValue;

    #[test]
    fn narrow_integers_reject_overflow() {
        assert_eq!(int8(false, -128), Ok(Expression::I8 { nullable: false, value: -128 }));
        assert!(matches!(int8(false, 128), Err(InvocationError::Rejected(_))));
        assert!(int16(true, 40_000).is_err());
    }

    #[test]
    fn calendar_dates_count_days_from_epoch() {
        assert_eq!(date_ymd(false, 1970, 1, 1), Ok(date(false, 0)));
        assert_eq!(date_ymd(false, 1970, 1, 2), Ok(date(false, 1)));
        assert_eq!(date_ymd(false, 1, 1, 1), Ok(date(false, -UNIX_EPOCH_DAYS_FROM_CE + 1)));
        assert!(date_ymd(false, 2023, 2, 29).is_err());
        assert!(date_ymd(false, 2023, -1, 1).is_err());
    }

    #[test]
    fn timestamps_from_parts_and_local() {
        let ts = timestamp_from_parts(true, 1970, 1, 1, 0, 0, 1, 5).unwrap();
        assert_eq!(ts, timestamp(true, 1_000_005));
        assert!(timestamp_from_parts(true, 1970, 1, 1, 24, 0, 0, 0).is_err());

        let local = NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(timestamp_from_local(false, local), timestamp(false, 946_684_800_000_000));
        assert_eq!(
            timestamp_tz_from_instant(false, local.and_utc()),
            timestamp_tz(false, 946_684_800_000_000)
        );
    }

    #[test]
    fn uuid_from_bytes_takes_the_first_sixteen() {
        let id = Uuid::from_u128(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef);
        let mut bytes = id.as_bytes().to_vec();
        bytes.extend_from_slice(b"tail");
        assert_eq!(uuid_from_bytes(false, Bytes::from(bytes)), Ok(uuid(false, id)));
        assert!(uuid_from_bytes(false, Bytes::from_static(b"short")).is_err());
    }

    #[test]
    fn var_char_rejects_negative_length() {
        assert_eq!(
            var_char(true, "abc".into(), 1),
            Ok(Expression::VarChar { nullable: true, value: "abc".into(), length: 1 })
        );
        assert!(var_char(true, "abc".into(), -1).is_err());
    }

    #[test]
    fn decimal_is_rescaled() {
        let expr = decimal(false, Decimal::new(125, 1), 10, 3).unwrap();
        assert_eq!(expr.decimal_unscaled(), Some(12_500));
        assert!(decimal(false, Decimal::new(125, 2), 10, 1).is_err());
        assert!(decimal(false, Decimal::from_i64(1), 0, 0).is_err());
        assert!(decimal(false, Decimal::from_i64(1), 5, 6).is_err());
    }

    #[test]
    fn registry_declares_container_params() {
        let registry = registry();
        let map = registry.iter().find(|op| op.name() == "map").unwrap();
        assert_eq!(map.signature(), "map(bool, Vec<(Expression, Expression)>)");
        let list = registry.iter().find(|op| op.name() == "list").unwrap();
        assert_eq!(
            list.params()[1],
            ParamType::List(Box::new(ParamType::Named("Expression")))
        );
    }

    #[test]
    fn overloads_have_distinct_signatures() {
        let registry = registry();
        let mut signatures: Vec<String> = registry.iter().map(|op| op.signature()).collect();
        let total = signatures.len();
        signatures.sort();
        signatures.dedup();
        assert_eq!(signatures.len(), total);
    }

    #[test]
    fn registered_operations_invoke_the_factory() {
        let registry = registry();
        let var_char = registry.iter().find(|op| op.name() == "var_char").unwrap();
        let args = [ArgValue::Bool(false), ArgValue::String("x".into()), ArgValue::I32(4)];
        assert_eq!(
            var_char.invoke(&args),
            Ok(Expression::VarChar { nullable: false, value: "x".into(), length: 4 })
        );
    }
}
