//! Declared parameter types of the operations under test.
//!
//! A `ParamType` is the key of the synthesizer's generator table. The first eleven
//! variants are the scalar types the standard table knows how to build; the
//! remaining ones describe everything else an operation may declare, so that a
//! table miss can still name the offending type.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamType {
    Bool,
    I32,
    I64,
    F32,
    F64,
    String,
    Uuid,
    /// Arbitrary-precision decimal, see [`crate::value::Decimal`].
    Decimal,
    /// Date-time without a time zone (`chrono::NaiveDateTime`).
    LocalDateTime,
    /// Absolute UTC instant (`chrono::DateTime<Utc>`).
    Instant,
    /// Raw byte sequence (`prost::bytes::Bytes`).
    Bytes,
    /// Any other named type, e.g. a value of the model under test.
    Named(&'static str),
    /// Homogeneous sequence, `Vec<T>`.
    List(Box<ParamType>),
    /// Fixed-arity product, `(A, B, ..)`.
    Tuple(Vec<ParamType>),
}

impl ParamType {
    /// Rust-style rendering used in reports and unsupported-type messages.
    pub fn name(&self) -> String {
        match self {
            ParamType::Bool => "bool".into(),
            ParamType::I32 => "i32".into(),
            ParamType::I64 => "i64".into(),
            ParamType::F32 => "f32".into(),
            ParamType::F64 => "f64".into(),
            ParamType::String => "String".into(),
            ParamType::Uuid => "Uuid".into(),
            ParamType::Decimal => "Decimal".into(),
            ParamType::LocalDateTime => "NaiveDateTime".into(),
            ParamType::Instant => "DateTime<Utc>".into(),
            ParamType::Bytes => "Bytes".into(),
            ParamType::Named(name) => (*name).into(),
            ParamType::List(inner) => format!("Vec<{}>", inner.name()),
            ParamType::Tuple(items) => {
                let inner: Vec<String> = items.iter().map(ParamType::name).collect();
                format!("({})", inner.join(", "))
            }
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_names_render_like_rust_types() {
        let entries = ParamType::List(Box::new(ParamType::Tuple(vec![
            ParamType::Named("Expression"),
            ParamType::Named("Expression"),
        ])));
        assert_eq!(entries.name(), "Vec<(Expression, Expression)>");
        assert_eq!(ParamType::Instant.to_string(), "DateTime<Utc>");
    }
}
