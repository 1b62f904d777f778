//! Domain-focused tests for groups, membership, and invitations.

use crate::directory::domain::{EmailAddress, User};
use crate::group::domain::{
    Group, GroupId, GroupMember, Invitation, InvitationStatus, InviteToken, MemberRole,
    ParseInvitationStatusError, ParseMemberRoleError, PersistedGroupData,
};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn user(email: &str, clock: &DefaultClock) -> User {
    User::new(EmailAddress::new(email), None, clock)
}

#[rstest]
fn group_new_installs_creator_as_owner(clock: DefaultClock) {
    let creator = user("lead@x.com", &clock);
    let group = Group::new("Pit Crew", Some("Race day".to_owned()), &creator, &clock);

    assert_eq!(group.members().len(), 1);
    let owner = group.owner().expect("group should have an owner");
    assert_eq!(owner.email().as_str(), "lead@x.com");
    assert_eq!(owner.role(), MemberRole::Owner);
    assert_eq!(
        group.members().first().map(GroupMember::email),
        Some(owner.email())
    );
}

#[rstest]
fn group_add_member_appends_once(clock: DefaultClock) {
    let creator = user("lead@x.com", &clock);
    let joiner = user("new@x.com", &clock);
    let mut group = Group::new("Pit Crew", None, &creator, &clock);

    let entry = GroupMember::new(&joiner, MemberRole::Member, &clock);
    assert!(group.add_member(entry.clone()));
    assert!(!group.add_member(entry));
    assert_eq!(group.members().len(), 2);
}

#[rstest]
fn group_owner_is_found_by_role_not_position(clock: DefaultClock) {
    let creator = user("lead@x.com", &clock);
    let joiner = user("new@x.com", &clock);
    let member_entry = GroupMember::new(&joiner, MemberRole::Member, &clock);
    let owner_entry = GroupMember::new(&creator, MemberRole::Owner, &clock);

    let group = Group::from_persisted(PersistedGroupData {
        id: GroupId::new(),
        name: "Pit Crew".to_owned(),
        description: None,
        members: vec![member_entry, owner_entry],
        created_at: clock.utc(),
    });

    let owner = group.owner().expect("owner should be found");
    assert_eq!(owner.email().as_str(), "lead@x.com");
}

#[rstest]
fn invitation_new_is_pending_with_fresh_token(clock: DefaultClock) {
    let invitation = Invitation::new(GroupId::new(), EmailAddress::new("new@x.com"), &clock);

    assert_eq!(invitation.status(), InvitationStatus::Pending);
    assert!(!invitation.is_accepted());
    assert!(invitation.accepted_at().is_none());
    assert_eq!(invitation.token().as_str().len(), 32);
}

#[rstest]
fn invitation_mark_accepted_is_monotonic(clock: DefaultClock) {
    let mut invitation = Invitation::new(GroupId::new(), EmailAddress::new("new@x.com"), &clock);

    invitation.mark_accepted(&clock);
    let first_accepted_at = invitation.accepted_at();
    assert!(invitation.is_accepted());
    assert!(first_accepted_at.is_some());

    invitation.mark_accepted(&clock);
    assert_eq!(invitation.accepted_at(), first_accepted_at);
}

#[rstest]
fn invite_tokens_are_url_safe_and_distinct() {
    let first = InviteToken::generate();
    let second = InviteToken::generate();

    assert_eq!(first.as_str().len(), 32);
    assert!(first.as_str().chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(first, second);
}

#[rstest]
fn member_role_round_trips_and_rejects_unknown_values() {
    assert_eq!(MemberRole::try_from("owner"), Ok(MemberRole::Owner));
    assert_eq!(MemberRole::try_from(" Member "), Ok(MemberRole::Member));
    assert_eq!(
        MemberRole::try_from("admin"),
        Err(ParseMemberRoleError("admin".to_owned()))
    );
}

#[rstest]
fn invitation_status_round_trips_and_rejects_unknown_values() {
    assert_eq!(
        InvitationStatus::try_from("pending"),
        Ok(InvitationStatus::Pending)
    );
    assert_eq!(
        InvitationStatus::try_from("ACCEPTED"),
        Ok(InvitationStatus::Accepted)
    );
    assert_eq!(
        InvitationStatus::try_from("rejected"),
        Err(ParseInvitationStatusError("rejected".to_owned()))
    );
}
