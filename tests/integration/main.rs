//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises one HMI component
//! against the recording remote-link mock. All tests run without a head
//! unit attached.

mod media_view_tests;
