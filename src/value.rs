//! Concrete argument values and the `Param` trait that binds Rust parameter
//! types to their [`ParamType`] tags.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDateTime, Utc};
use prost::bytes::Bytes;
use uuid::Uuid;

use crate::error::InvocationError;
use crate::types::ParamType;

/// Arbitrary-precision decimal: `unscaled * 10^-scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
    unscaled: i128,
    scale: u32,
}

impl Decimal {
    pub fn new(unscaled: i128, scale: u32) -> Self {
        Decimal { unscaled, scale }
    }

    /// Integral decimal with scale 0.
    pub fn from_i64(value: i64) -> Self {
        Decimal { unscaled: i128::from(value), scale: 0 }
    }

    pub fn unscaled(&self) -> i128 {
        self.unscaled
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Unscaled value at `scale`, or `None` if that would drop digits or overflow.
    pub fn unscaled_at(&self, scale: u32) -> Option<i128> {
        if scale >= self.scale {
            let factor = 10i128.checked_pow(scale - self.scale)?;
            self.unscaled.checked_mul(factor)
        } else {
            let divisor = 10i128.checked_pow(self.scale - scale)?;
            (self.unscaled % divisor == 0).then(|| self.unscaled / divisor)
        }
    }
}

/// A value of a type outside the standard table, tagged with its declared type.
///
/// Registered generators produce these for their own [`ParamType`]s, and the
/// type's [`Param`] impl recovers the value with [`from_custom`].
#[derive(Clone)]
pub struct CustomArg {
    ty: ParamType,
    value: Arc<dyn Any + Send + Sync>,
}

impl CustomArg {
    pub fn param_type(&self) -> &ParamType {
        &self.ty
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.value).downcast_ref::<T>()
    }
}

impl fmt::Debug for CustomArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomArg").field("ty", &self.ty).finish_non_exhaustive()
    }
}

// Payloads are opaque, so two custom arguments are equal only when they share one.
impl PartialEq for CustomArg {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty && Arc::ptr_eq(&self.value, &other.value)
    }
}

/// One synthesized argument. Each scalar variant matches one standard
/// [`ParamType`]; `Custom` carries any other declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Bool(bool),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(String),
    Uuid(Uuid),
    Decimal(Decimal),
    LocalDateTime(NaiveDateTime),
    Instant(DateTime<Utc>),
    Bytes(Bytes),
    Custom(CustomArg),
}

impl ArgValue {
    /// Wraps `value` as an argument of declared type `ty`.
    pub fn custom<T: Any + Send + Sync>(ty: ParamType, value: T) -> Self {
        ArgValue::Custom(CustomArg { ty, value: Arc::new(value) })
    }

    pub fn param_type(&self) -> ParamType {
        match self {
            ArgValue::Bool(_) => ParamType::Bool,
            ArgValue::I32(_) => ParamType::I32,
            ArgValue::I64(_) => ParamType::I64,
            ArgValue::F32(_) => ParamType::F32,
            ArgValue::F64(_) => ParamType::F64,
            ArgValue::String(_) => ParamType::String,
            ArgValue::Uuid(_) => ParamType::Uuid,
            ArgValue::Decimal(_) => ParamType::Decimal,
            ArgValue::LocalDateTime(_) => ParamType::LocalDateTime,
            ArgValue::Instant(_) => ParamType::Instant,
            ArgValue::Bytes(_) => ParamType::Bytes,
            ArgValue::Custom(custom) => custom.ty.clone(),
        }
    }
}

/// A Rust type that can appear in an operation's parameter list.
///
/// `param_type` is what the synthesizer sees; `from_arg` recovers the typed value
/// when the operation is invoked. Types with no `ArgValue` variant (model values,
/// containers) still implement the trait so they can be declared, but extraction
/// always fails for them.
pub trait Param: Sized {
    fn param_type() -> ParamType;

    fn from_arg(index: usize, arg: &ArgValue) -> Result<Self, InvocationError>;
}

/// Standard mismatch error for argument `index` that should have been a `P`.
pub fn type_mismatch<P: Param>(index: usize, arg: &ArgValue) -> InvocationError {
    InvocationError::ArgumentType {
        index,
        expected: P::param_type().name(),
        found: arg.param_type().name(),
    }
}

/// Extraction for a `Param` type carried as [`ArgValue::Custom`].
///
/// Succeeds only if the argument is tagged with `P::param_type()` and its
/// payload is a `P`.
pub fn from_custom<P: Param + Any + Clone>(index: usize, arg: &ArgValue) -> Result<P, InvocationError> {
    match arg {
        ArgValue::Custom(custom) if custom.ty == P::param_type() => custom
            .downcast_ref::<P>()
            .cloned()
            .ok_or_else(|| type_mismatch::<P>(index, arg)),
        other => Err(type_mismatch::<P>(index, other)),
    }
}

macro_rules! impl_scalar_param {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Param for $ty {
                fn param_type() -> ParamType {
                    ParamType::$variant
                }

                fn from_arg(index: usize, arg: &ArgValue) -> Result<Self, InvocationError> {
                    match arg {
                        ArgValue::$variant(v) => Ok(Clone::clone(v)),
                        other => Err(type_mismatch::<Self>(index, other)),
                    }
                }
            }
        )*
    };
}

impl_scalar_param! {
    bool => Bool,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String,
    Uuid => Uuid,
    Decimal => Decimal,
    NaiveDateTime => LocalDateTime,
    DateTime<Utc> => Instant,
    Bytes => Bytes,
}

impl<T: Param> Param for Vec<T> {
    fn param_type() -> ParamType {
        ParamType::List(Box::new(T::param_type()))
    }

    fn from_arg(index: usize, arg: &ArgValue) -> Result<Self, InvocationError> {
        Err(type_mismatch::<Self>(index, arg))
    }
}

impl<A: Param, B: Param> Param for (A, B) {
    fn param_type() -> ParamType {
        ParamType::Tuple(vec![A::param_type(), B::param_type()])
    }

    fn from_arg(index: usize, arg: &ArgValue) -> Result<Self, InvocationError> {
        Err(type_mismatch::<Self>(index, arg))
    }
}
