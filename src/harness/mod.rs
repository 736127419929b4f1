pub mod core;
pub mod diff;
pub mod executor;
pub mod planner;
pub mod registry;
pub mod report;
pub mod synth;


pub use self::core::Harness;
pub use executor::{Failure, Outcome, RoundTripExecutor};
pub use planner::{plan, plan_case, Synthesis, TestCase};
pub use registry::{Operation, OperationRegistry, Receiver, Visibility};
pub use report::{CaseReport, RunReport, Summary};
pub use synth::{Generator, Synthesizer};
