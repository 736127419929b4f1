#![no_main]

// A full factory run never fails, whatever the synthesizer seed.

use libfuzzer_sys::fuzz_target;
use expr_roundtrip::{creator, Harness, ProtoCodec, Synthesizer};

fuzz_target!(|seed: u64| {
    let harness = Harness::new(creator::registry(), ProtoCodec);
    let report = harness.run_with(&mut Synthesizer::seeded(seed));
    assert!(report.is_success(), "seed {seed}:\n{report}");
});
