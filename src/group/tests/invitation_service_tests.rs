//! Service orchestration tests for the invitation workflow.

use std::sync::Arc;

use crate::directory::{
    adapters::memory::InMemoryUserRepository, domain::EmailAddress, services::UserDirectoryService,
};
use crate::group::{
    adapters::memory::{InMemoryGroupRepository, InMemoryInvitationRepository},
    domain::{Group, InvitationStatus, InviteToken, MemberRole},
    ports::{GroupRepositoryError, InvitationRepository},
    services::{
        GroupService, InvitationService, InvitationServiceConfig, InvitationServiceError,
        RepeatAcceptance,
    },
};
use crate::notify::{adapters::RecordingGateway, domain::EmailMessage, services::MailRenderer};
use mockable::DefaultClock;
use rstest::rstest;

const ACCEPT_LINK_BASE: &str = "https://paddock.example";

type TestGroupService =
    GroupService<InMemoryGroupRepository, InMemoryUserRepository, DefaultClock>;
type TestInvitationService = InvitationService<
    InMemoryGroupRepository,
    InMemoryInvitationRepository,
    InMemoryUserRepository,
    DefaultClock,
>;

struct Harness {
    users: Arc<InMemoryUserRepository>,
    invitations: Arc<InMemoryInvitationRepository>,
    gateway: RecordingGateway,
    groups_service: TestGroupService,
    service: TestInvitationService,
}

fn harness_with(gateway: RecordingGateway, repeat_acceptance: RepeatAcceptance) -> Harness {
    let users = Arc::new(InMemoryUserRepository::new());
    let groups = Arc::new(InMemoryGroupRepository::new());
    let invitations = Arc::new(InMemoryInvitationRepository::new());
    let clock = Arc::new(DefaultClock);
    let directory = UserDirectoryService::new(Arc::clone(&users), Arc::clone(&clock));
    let renderer = MailRenderer::new().expect("templates should parse");
    let config =
        InvitationServiceConfig::new(ACCEPT_LINK_BASE).with_repeat_acceptance(repeat_acceptance);

    let groups_service =
        GroupService::new(Arc::clone(&groups), directory.clone(), Arc::clone(&clock));
    let service = InvitationService::new(
        groups,
        Arc::clone(&invitations),
        directory,
        Arc::new(gateway.clone()),
        renderer,
        config,
        clock,
    );

    Harness {
        users,
        invitations,
        gateway,
        groups_service,
        service,
    }
}

fn harness() -> Harness {
    harness_with(RecordingGateway::new(), RepeatAcceptance::default())
}

async fn seeded_group(harness: &Harness) -> Group {
    harness
        .groups_service
        .create_group(
            "Pit Crew",
            Some("Race day coordination".to_owned()),
            &EmailAddress::new("lead@x.com"),
        )
        .await
        .expect("group creation should succeed")
}

fn messages_to<'a>(
    messages: &'a [EmailMessage],
    recipient: &str,
) -> Vec<&'a EmailMessage> {
    messages
        .iter()
        .filter(|message| message.to().as_str() == recipient)
        .collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invite_persists_pending_invitation_and_emails_accept_link() {
    let harness = harness();
    let group = seeded_group(&harness).await;

    let invitation = harness
        .service
        .invite(group.id(), &EmailAddress::new("new@x.com"))
        .await
        .expect("invite should succeed");

    assert_eq!(invitation.status(), InvitationStatus::Pending);
    assert_eq!(invitation.email().as_str(), "new@x.com");

    let sent = harness.gateway.sent();
    assert_eq!(sent.len(), 1);
    let message = sent.first().expect("one message should be recorded");
    assert_eq!(message.to().as_str(), "new@x.com");
    assert_eq!(
        message.subject(),
        "You're invited to join group 'Pit Crew'"
    );
    let expected_link = format!(
        "{ACCEPT_LINK_BASE}/invites/accept/{}",
        invitation.token().as_str()
    );
    assert!(message.html_body().contains(&expected_link));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invite_unknown_group_fails_without_side_effects() {
    let harness = harness();
    let group = seeded_group(&harness).await;
    let missing = crate::group::domain::GroupId::new();

    let result = harness
        .service
        .invite(missing, &EmailAddress::new("new@x.com"))
        .await;

    assert!(matches!(
        result,
        Err(InvitationServiceError::Group(
            GroupRepositoryError::NotFound(_)
        ))
    ));
    assert!(harness.gateway.sent().is_empty());
    let invitations = harness
        .service
        .list_for_group(group.id())
        .await
        .expect("listing should succeed");
    assert!(invitations.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accept_without_explicit_email_admits_invitee_once() {
    let harness = harness();
    let group = seeded_group(&harness).await;
    let invitation = harness
        .service
        .invite(group.id(), &EmailAddress::new("new@x.com"))
        .await
        .expect("invite should succeed");

    let accepted = harness
        .service
        .accept(invitation.token(), None)
        .await
        .expect("accept should succeed");

    assert_eq!(accepted.member_email.as_str(), "new@x.com");
    assert_eq!(accepted.group.members().len(), 2);
    assert!(accepted.group.is_member(&EmailAddress::new("new@x.com")));
    let joined = accepted
        .group
        .members()
        .iter()
        .find(|member| member.email().as_str() == "new@x.com")
        .expect("invitee should be a member");
    assert_eq!(joined.role(), MemberRole::Member);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accept_notifies_owner_with_invitee_and_group() {
    let harness = harness();
    let directory = UserDirectoryService::new(Arc::clone(&harness.users), Arc::new(DefaultClock));
    directory
        .get_or_create(&EmailAddress::new("lead@x.com"), Some("Crew Lead"))
        .await
        .expect("owner pre-creation should succeed");
    let group = seeded_group(&harness).await;
    let invitation = harness
        .service
        .invite(group.id(), &EmailAddress::new("new@x.com"))
        .await
        .expect("invite should succeed");

    harness
        .service
        .accept(invitation.token(), None)
        .await
        .expect("accept should succeed");

    let sent = harness.gateway.sent();
    let owner_messages = messages_to(&sent, "lead@x.com");
    assert_eq!(owner_messages.len(), 1);
    let notice = owner_messages
        .first()
        .expect("owner should receive a notice");
    assert_eq!(
        notice.subject(),
        "new@x.com accepted your invitation to 'Pit Crew'"
    );
    assert!(notice.html_body().contains("Hello Crew Lead,"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accept_unknown_token_mutates_nothing() {
    let harness = harness();
    let group = seeded_group(&harness).await;

    let result = harness
        .service
        .accept(&InviteToken::from_string("no-such-token"), None)
        .await;

    assert!(matches!(result, Err(InvitationServiceError::UnknownToken)));
    assert!(harness.gateway.sent().is_empty());
    let reloaded = harness
        .groups_service
        .find_by_id(group.id())
        .await
        .expect("lookup should succeed")
        .expect("group should exist");
    assert_eq!(reloaded.members().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeat_accept_is_ignored_by_default() {
    let harness = harness();
    let group = seeded_group(&harness).await;
    let invitation = harness
        .service
        .invite(group.id(), &EmailAddress::new("new@x.com"))
        .await
        .expect("invite should succeed");

    let first = harness
        .service
        .accept(invitation.token(), None)
        .await
        .expect("first accept should succeed");
    let second = harness
        .service
        .accept(invitation.token(), None)
        .await
        .expect("repeat accept should succeed");

    assert_eq!(first.group.members().len(), 2);
    assert_eq!(second.group.members().len(), 2);

    let sent = harness.gateway.sent();
    assert_eq!(messages_to(&sent, "lead@x.com").len(), 1);

    let stored = harness
        .invitations
        .find_by_token(invitation.token())
        .await
        .expect("lookup should succeed")
        .expect("invitation should exist");
    assert!(stored.is_accepted());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeat_accept_renotifies_when_configured() {
    let harness = harness_with(RecordingGateway::new(), RepeatAcceptance::Renotify);
    let group = seeded_group(&harness).await;
    let invitation = harness
        .service
        .invite(group.id(), &EmailAddress::new("new@x.com"))
        .await
        .expect("invite should succeed");

    harness
        .service
        .accept(invitation.token(), None)
        .await
        .expect("first accept should succeed");
    let second = harness
        .service
        .accept(invitation.token(), None)
        .await
        .expect("repeat accept should succeed");

    assert_eq!(second.group.members().len(), 2);
    let sent = harness.gateway.sent();
    assert_eq!(messages_to(&sent, "lead@x.com").len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accept_with_explicit_email_overrides_stored_invitee() {
    let harness = harness();
    let group = seeded_group(&harness).await;
    let invitation = harness
        .service
        .invite(group.id(), &EmailAddress::new("new@x.com"))
        .await
        .expect("invite should succeed");

    let accepted = harness
        .service
        .accept(
            invitation.token(),
            Some(&EmailAddress::new("delegate@x.com")),
        )
        .await
        .expect("accept should succeed");

    assert_eq!(accepted.member_email.as_str(), "delegate@x.com");
    assert!(accepted.group.is_member(&EmailAddress::new("delegate@x.com")));
    assert!(!accepted.group.is_member(&EmailAddress::new("new@x.com")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_invitations_for_same_invitee_each_redeem() {
    let harness = harness();
    let group = seeded_group(&harness).await;
    let invitee = EmailAddress::new("new@x.com");

    let first = harness
        .service
        .invite(group.id(), &invitee)
        .await
        .expect("first invite should succeed");
    let second = harness
        .service
        .invite(group.id(), &invitee)
        .await
        .expect("second invite should succeed");
    assert_ne!(first.token(), second.token());

    harness
        .service
        .accept(first.token(), None)
        .await
        .expect("first accept should succeed");
    let outcome = harness
        .service
        .accept(second.token(), None)
        .await
        .expect("second accept should succeed");

    // The second token is its own pending invitation, so it redeems fully,
    // but the membership append stays idempotent.
    assert_eq!(outcome.group.members().len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accept_succeeds_when_delivery_fails() {
    let harness = harness_with(RecordingGateway::rejecting(), RepeatAcceptance::default());
    let group = seeded_group(&harness).await;
    let invitation = harness
        .service
        .invite(group.id(), &EmailAddress::new("new@x.com"))
        .await
        .expect("invite should succeed despite failed delivery");

    let accepted = harness
        .service
        .accept(invitation.token(), None)
        .await
        .expect("accept should succeed despite failed delivery");

    assert_eq!(accepted.group.members().len(), 2);
}
