//! Unit tests for the group membership and invitation module.
#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

mod domain_tests;
mod invitation_service_tests;
