//! Service orchestration tests for task creation and assignment.

use std::sync::Arc;

use crate::directory::{
    adapters::memory::InMemoryUserRepository, domain::EmailAddress, services::UserDirectoryService,
};
use crate::group::{
    adapters::memory::InMemoryGroupRepository,
    domain::{Group, GroupId},
    ports::{GroupRepository, GroupRepositoryError},
};
use crate::notify::{
    ports::{MockNotificationGateway, NotificationGateway},
    services::MailRenderer,
};
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{CreateTaskRequest, TaskService, TaskServiceError},
};
use mockable::DefaultClock;
use rstest::rstest;

type TestService = TaskService<
    InMemoryTaskRepository,
    InMemoryGroupRepository,
    InMemoryUserRepository,
    DefaultClock,
>;

struct Harness {
    users: Arc<InMemoryUserRepository>,
    groups: Arc<InMemoryGroupRepository>,
    service: TestService,
}

fn harness(gateway: Arc<dyn NotificationGateway>) -> Harness {
    let users = Arc::new(InMemoryUserRepository::new());
    let groups = Arc::new(InMemoryGroupRepository::new());
    let clock = Arc::new(DefaultClock);
    let directory = UserDirectoryService::new(Arc::clone(&users), Arc::clone(&clock));
    let renderer = MailRenderer::new().expect("templates should parse");

    let service = TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::clone(&groups),
        directory,
        gateway,
        renderer,
        clock,
    );

    Harness {
        users,
        groups,
        service,
    }
}

async fn seeded_group(harness: &Harness) -> Group {
    let clock = DefaultClock;
    let directory = UserDirectoryService::new(Arc::clone(&harness.users), Arc::new(DefaultClock));
    let creator = directory
        .get_or_create(&EmailAddress::new("lead@x.com"), None)
        .await
        .expect("creator resolution should succeed");
    let group = Group::new(
        "Pit Crew",
        Some("Race day coordination".to_owned()),
        &creator,
        &clock,
    );
    harness
        .groups
        .store(&group)
        .await
        .expect("group store should succeed");
    group
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_with_assignee_notifies_exactly_once() {
    let mut gateway = MockNotificationGateway::new();
    gateway
        .expect_send()
        .withf(|message| {
            message.to().as_str() == "a@x.com"
                && message.subject().contains("Pit Crew")
                && message.subject().contains("Fix brakes")
        })
        .times(1)
        .returning(|_| true);
    let harness = harness(Arc::new(gateway));
    let group = seeded_group(&harness).await;

    let task = harness
        .service
        .create_task(
            group.id(),
            CreateTaskRequest::new("Fix brakes")
                .with_description("Front left caliper")
                .with_assignee(EmailAddress::new("a@x.com")),
        )
        .await
        .expect("task creation should succeed");

    assert_eq!(
        task.assignee_email().map(EmailAddress::as_str),
        Some("a@x.com")
    );

    let directory = UserDirectoryService::new(Arc::clone(&harness.users), Arc::new(DefaultClock));
    let assignee = directory
        .find_by_email(&EmailAddress::new("a@x.com"))
        .await
        .expect("lookup should succeed");
    assert!(assignee.is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_without_assignee_notifies_nobody() {
    let mut gateway = MockNotificationGateway::new();
    gateway.expect_send().times(0);
    let harness = harness(Arc::new(gateway));
    let group = seeded_group(&harness).await;

    let task = harness
        .service
        .create_task(group.id(), CreateTaskRequest::new("Sweep garage"))
        .await
        .expect("task creation should succeed");

    assert!(task.assignee_email().is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_accepts_non_member_assignee() {
    let mut gateway = MockNotificationGateway::new();
    gateway.expect_send().times(1).returning(|_| true);
    let harness = harness(Arc::new(gateway));
    let group = seeded_group(&harness).await;

    // "outsider@x.com" is not in the group's membership; assignment still
    // succeeds and the outsider is notified.
    let task = harness
        .service
        .create_task(
            group.id(),
            CreateTaskRequest::new("Order tyres")
                .with_assignee(EmailAddress::new("outsider@x.com")),
        )
        .await
        .expect("task creation should succeed");

    assert!(!group.is_member(&EmailAddress::new("outsider@x.com")));
    assert_eq!(
        task.assignee_email().map(EmailAddress::as_str),
        Some("outsider@x.com")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_unknown_group_fails_without_storing() {
    let mut gateway = MockNotificationGateway::new();
    gateway.expect_send().times(0);
    let harness = harness(Arc::new(gateway));
    let missing = GroupId::new();

    let result = harness
        .service
        .create_task(missing, CreateTaskRequest::new("Fix brakes"))
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Group(GroupRepositoryError::NotFound(_)))
    ));
    let tasks = harness
        .service
        .list_for_group(missing)
        .await
        .expect("listing should succeed");
    assert!(tasks.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_succeeds_when_delivery_fails() {
    let mut gateway = MockNotificationGateway::new();
    gateway.expect_send().times(1).returning(|_| false);
    let harness = harness(Arc::new(gateway));
    let group = seeded_group(&harness).await;

    let task = harness
        .service
        .create_task(
            group.id(),
            CreateTaskRequest::new("Check oil").with_assignee(EmailAddress::new("new@x.com")),
        )
        .await
        .expect("task creation should succeed despite failed delivery");

    let listed = harness
        .service
        .list_for_group(group.id())
        .await
        .expect("listing should succeed");
    assert_eq!(listed.len(), 1);
    assert_eq!(
        listed.first().map(crate::task::domain::Task::id),
        Some(task.id())
    );
}
