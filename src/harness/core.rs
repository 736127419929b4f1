//!
//! Harness driver: discover → plan → execute → report.
//!
//! The harness is generic over the value model `V` and its codec `C`; the
//! expression factory and [`ProtoCodec`](crate::codec::ProtoCodec) are one
//! instantiation. Cases run sequentially against a single synthesizer so a
//! seeded run is reproducible.

use std::fmt;

use rand_core::RngCore;
use serde::Serialize;

use crate::codec::Codec;
use crate::config::HarnessConfig;
use crate::harness::executor::RoundTripExecutor;
use crate::harness::planner::plan;
use crate::harness::registry::{Operation, OperationRegistry};
use crate::harness::report::{CaseReport, RunReport};
use crate::harness::synth::Synthesizer;

/// Round-trip harness over the operations of one registry.
#[derive(Debug)]
pub struct Harness<V, C> {
    registry: OperationRegistry<V>,
    executor: RoundTripExecutor<C>,
    config: HarnessConfig,
}

impl<V, C> Harness<V, C>
where
    C: Codec<V>,
    V: PartialEq + fmt::Debug + Serialize,
{
    pub fn new(registry: OperationRegistry<V>, codec: C) -> Self {
        Self::with_config(registry, codec, HarnessConfig::default())
    }

    pub fn with_config(registry: OperationRegistry<V>, codec: C, config: HarnessConfig) -> Self {
        Harness { registry, executor: RoundTripExecutor::new(codec), config }
    }

    pub fn registry(&self) -> &OperationRegistry<V> {
        &self.registry
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Standard synthesizer, seeded from the config when a seed is set.
    pub fn synthesizer(&self) -> Synthesizer {
        match self.config.seed {
            Some(seed) => Synthesizer::seeded(seed),
            None => Synthesizer::from_entropy(),
        }
    }

    /// Discovered operations that pass the config's name filter, in discovery order.
    pub fn selected(&self) -> Vec<&Operation<V>> {
        self.registry
            .discover()
            .into_iter()
            .filter(|op| self.config.selects(op.name()))
            .collect()
    }

    pub fn run(&self) -> RunReport {
        let mut synthesizer = self.synthesizer();
        self.run_with(&mut synthesizer)
    }

    /// Runs every selected operation with arguments from `synthesizer`.
    ///
    /// One case fails or skips without affecting the others; the report holds
    /// exactly one entry per selected operation.
    pub fn run_with<R: RngCore>(&self, synthesizer: &mut Synthesizer<R>) -> RunReport {
        let operations = self.selected();
        tracing::info!(operations = operations.len(), seed = ?self.config.seed, "starting round-trip run");

        let cases = plan(&operations, synthesizer);
        let report = RunReport::new(
            cases
                .iter()
                .map(|case| CaseReport {
                    operation: case.operation.signature(),
                    outcome: self.executor.execute(case),
                })
                .collect(),
        );

        let summary = report.summary();
        tracing::info!(
            passed = summary.passed,
            failed = summary.failed,
            skipped = summary.skipped,
            "round-trip run finished"
        );
        report
    }
}
