//! Service orchestration tests for get-or-create user resolution.

use std::sync::Arc;

use crate::directory::{
    adapters::memory::InMemoryUserRepository,
    domain::{EmailAddress, User},
    ports::{UserRepository, UserRepositoryError},
    services::UserDirectoryService,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = UserDirectoryService<InMemoryUserRepository, DefaultClock>;

#[fixture]
fn repository() -> Arc<InMemoryUserRepository> {
    Arc::new(InMemoryUserRepository::new())
}

fn service(repository: &Arc<InMemoryUserRepository>) -> TestService {
    UserDirectoryService::new(Arc::clone(repository), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_or_create_returns_same_identity_on_repeat_call(
    repository: Arc<InMemoryUserRepository>,
) {
    let directory = service(&repository);
    let email = EmailAddress::new("new@x.com");

    let first = directory
        .get_or_create(&email, Some("New Member"))
        .await
        .expect("first resolution should succeed");
    let second = directory
        .get_or_create(&email, None)
        .await
        .expect("second resolution should succeed");

    assert_eq!(second.id(), first.id());
    assert_eq!(second, first);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_or_create_never_updates_full_name(repository: Arc<InMemoryUserRepository>) {
    let directory = service(&repository);
    let email = EmailAddress::new("lead@x.com");

    directory
        .get_or_create(&email, Some("Original Name"))
        .await
        .expect("first resolution should succeed");
    let repeat = directory
        .get_or_create(&email, Some("Replacement Name"))
        .await
        .expect("repeat resolution should succeed");

    assert_eq!(repeat.full_name(), Some("Original Name"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_or_create_creates_single_record(repository: Arc<InMemoryUserRepository>) {
    let directory = service(&repository);
    let email = EmailAddress::new("solo@x.com");

    directory
        .get_or_create(&email, None)
        .await
        .expect("resolution should succeed");
    directory
        .get_or_create(&email, None)
        .await
        .expect("repeat resolution should succeed");

    let stored = repository
        .find_by_email(&email)
        .await
        .expect("lookup should succeed");
    assert!(stored.is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_email_insert_surfaces_constraint_error(
    repository: Arc<InMemoryUserRepository>,
) {
    let clock = DefaultClock;
    let email = EmailAddress::new("taken@x.com");
    let first = User::new(email.clone(), None, &clock);
    let second = User::new(email.clone(), None, &clock);

    repository
        .store(&first)
        .await
        .expect("first insert should succeed");
    let result = repository.store(&second).await;

    assert!(matches!(
        result,
        Err(UserRepositoryError::DuplicateEmail(conflicting)) if conflicting == email
    ));
}
