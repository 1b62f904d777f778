//! Domain-focused tests for user records.

use crate::directory::domain::{EmailAddress, User};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
fn user_new_captures_email_and_full_name(clock: DefaultClock) {
    let user = User::new(
        EmailAddress::new("lead@x.com"),
        Some("Crew Lead".to_owned()),
        &clock,
    );

    assert_eq!(user.email().as_str(), "lead@x.com");
    assert_eq!(user.full_name(), Some("Crew Lead"));
}

#[rstest]
fn user_display_name_prefers_full_name(clock: DefaultClock) {
    let user = User::new(
        EmailAddress::new("lead@x.com"),
        Some("Crew Lead".to_owned()),
        &clock,
    );
    assert_eq!(user.display_name(), "Crew Lead");
}

#[rstest]
fn user_display_name_falls_back_to_email(clock: DefaultClock) {
    let user = User::new(EmailAddress::new("lead@x.com"), None, &clock);
    assert_eq!(user.display_name(), "lead@x.com");
}

#[rstest]
fn email_address_preserves_caller_value() {
    let email = EmailAddress::new("Mixed.Case@X.com");
    assert_eq!(email.as_str(), "Mixed.Case@X.com");
    assert_eq!(email.to_string(), "Mixed.Case@X.com");
}
