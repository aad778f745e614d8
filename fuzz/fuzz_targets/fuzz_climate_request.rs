//! Fuzz target: `SetClimateRequest::from_json`
//!
//! Drives arbitrary bytes through the request parser and asserts that it
//! never panics and that a successfully parsed request answers every
//! accessor without panicking (each returns either the field or a shape
//! error).
//!
//! cargo fuzz run fuzz_climate_request

#![no_main]

use applink_hmi::climate::SetClimateRequest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(request) = SetClimateRequest::from_json(raw) {
        let _ = request.fan_speed();
        let _ = request.desired_temp();
        let _ = request.ac_enable();
        let _ = request.recirculate_air_enable();
        let _ = request.auto_mode_enable();
        let _ = request.defrost_zone();
        let _ = request.dual_mode_enable();
    }
});
