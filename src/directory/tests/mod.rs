//! Unit tests for the user directory module.
#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod domain_tests;
mod service_tests;
