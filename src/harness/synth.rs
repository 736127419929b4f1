//! Argument synthesizer: a closed table from declared parameter type to generator.
//!
//! A type with no table entry is reported as [`UnsupportedType`]; there is no
//! fallback guess. New types are supported by registering one more entry.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Local, Utc};
use prost::bytes::Bytes;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

use crate::error::UnsupportedType;
use crate::types::ParamType;
use crate::value::{ArgValue, Decimal};

/// Produces one argument value from the shared random source.
pub type Generator = fn(&mut dyn RngCore) -> ArgValue;

fn random_uuid(rng: &mut dyn RngCore) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}

fn gen_bool(rng: &mut dyn RngCore) -> ArgValue {
    ArgValue::Bool(rng.gen())
}

// Integer parameters frequently end up as calendar fields (year, month, day,
// hour, ..). 1 is valid for all of them; a random value would make the
// operation reject its arguments before serialization is ever exercised.
fn gen_i32(_rng: &mut dyn RngCore) -> ArgValue {
    ArgValue::I32(1)
}

fn gen_i64(rng: &mut dyn RngCore) -> ArgValue {
    ArgValue::I64(rng.gen())
}

fn gen_f32(rng: &mut dyn RngCore) -> ArgValue {
    ArgValue::F32(rng.gen())
}

fn gen_f64(rng: &mut dyn RngCore) -> ArgValue {
    ArgValue::F64(rng.gen())
}

fn gen_string(rng: &mut dyn RngCore) -> ArgValue {
    ArgValue::String(random_uuid(rng).to_string())
}

fn gen_uuid(rng: &mut dyn RngCore) -> ArgValue {
    ArgValue::Uuid(random_uuid(rng))
}

fn gen_decimal(rng: &mut dyn RngCore) -> ArgValue {
    ArgValue::Decimal(Decimal::from_i64(rng.gen()))
}

fn gen_local_date_time(_rng: &mut dyn RngCore) -> ArgValue {
    ArgValue::LocalDateTime(Local::now().naive_local())
}

fn gen_instant(_rng: &mut dyn RngCore) -> ArgValue {
    ArgValue::Instant(Utc::now())
}

fn gen_bytes(rng: &mut dyn RngCore) -> ArgValue {
    ArgValue::Bytes(Bytes::from(random_uuid(rng).to_string().into_bytes()))
}

/// The standard generator table.
pub fn standard_generators() -> BTreeMap<ParamType, Generator> {
    let entries: [(ParamType, Generator); 11] = [
        (ParamType::Bool, gen_bool),
        (ParamType::I32, gen_i32),
        (ParamType::I64, gen_i64),
        (ParamType::F32, gen_f32),
        (ParamType::F64, gen_f64),
        (ParamType::String, gen_string),
        (ParamType::Uuid, gen_uuid),
        (ParamType::Decimal, gen_decimal),
        (ParamType::LocalDateTime, gen_local_date_time),
        (ParamType::Instant, gen_instant),
        (ParamType::Bytes, gen_bytes),
    ];
    entries.into_iter().collect()
}

/// Owns the random source and the type → generator table.
///
/// Synthesis takes `&mut self`, which keeps the random source confined to one
/// thread at a time.
pub struct Synthesizer<R = StdRng> {
    rng: R,
    generators: BTreeMap<ParamType, Generator>,
}

impl Synthesizer<StdRng> {
    /// Reproducible synthesizer. Time-based generators still read the clock.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::seeded(OsRng.next_u64())
    }
}

impl<R: RngCore> Synthesizer<R> {
    /// Standard table over the given random source.
    pub fn with_rng(rng: R) -> Self {
        Synthesizer { rng, generators: standard_generators() }
    }

    /// No generators at all; every type is unsupported until registered.
    pub fn empty(rng: R) -> Self {
        Synthesizer { rng, generators: BTreeMap::new() }
    }

    /// Adds or replaces the generator for `ty`, returning the previous one.
    pub fn register(&mut self, ty: ParamType, generator: Generator) -> Option<Generator> {
        tracing::debug!(param_type = %ty, "registering argument generator");
        self.generators.insert(ty, generator)
    }

    pub fn supports(&self, ty: &ParamType) -> bool {
        self.generators.contains_key(ty)
    }

    pub fn supported_types(&self) -> impl Iterator<Item = &ParamType> {
        self.generators.keys()
    }

    /// One value of type `ty`, or the unsupported-type report naming it.
    pub fn synthesize(&mut self, ty: &ParamType) -> Result<ArgValue, UnsupportedType> {
        match self.generators.get(ty) {
            Some(generator) => Ok(generator(&mut self.rng)),
            None => Err(UnsupportedType::new(ty)),
        }
    }
}

impl<R> fmt::Debug for Synthesizer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Synthesizer")
            .field("supported", &self.generators.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}
