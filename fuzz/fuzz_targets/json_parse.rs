//! Fuzz target for entity JSON parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the JSON decoder for
//! image sets, and diffs any set that decodes against itself.

#![no_main]

use boxdiff::model::io_json::from_json_slice;
use boxdiff::model::ImageSet;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(set) = from_json_slice::<ImageSet>(data) {
        let _ = set.delta(&set);
    }
});
