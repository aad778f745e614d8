//! Fuzz target: soft-button descriptor array parsing + bar rebuild
//!
//! Parses arbitrary bytes as a descriptor array and rebuilds a view's
//! button bar from whatever comes out, asserting the element-count
//! invariant holds for every accepted input.
//!
//! cargo fuzz run fuzz_soft_buttons

#![no_main]

use applink_hmi::config::HmiConfig;
use applink_hmi::media::{MediaView, SoftButtonDescriptor};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(descriptors) = serde_json::from_str::<Vec<SoftButtonDescriptor>>(raw) else {
        return;
    };

    let mut view = MediaView::new(&HmiConfig::default(), 1, "fuzz", false);
    view.set_soft_buttons(Some(&descriptors));
    assert_eq!(view.bar().visible_count(), descriptors.len() + 1);
});
