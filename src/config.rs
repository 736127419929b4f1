//! Run configuration for the harness.

/// Knobs for one harness run. The default is an unseeded run over every
/// discovered operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Seeds the synthesizer's random source; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Only run operations whose name contains this substring.
    pub only: Option<String>,
}

impl HarnessConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn only(mut self, filter: impl Into<String>) -> Self {
        self.only = Some(filter.into());
        self
    }

    pub fn selects(&self, operation_name: &str) -> bool {
        match self.only.as_deref() {
            Some(filter) => operation_name.contains(filter),
            None => true,
        }
    }
}
