use directory_server::clients::{GroupClient, UserClient};
use directory_server::group_actor::{self, GroupError};
use directory_server::model::{Group, GroupCreate, GroupUpdate, Member, ResourceId, User};
use resource_framework::mock::MockClient;
use resource_framework::ActorClient;

fn user(id: ResourceId, user_name: &str) -> User {
    User {
        id,
        user_name: user_name.to_string(),
        display_name: None,
        emails: vec![],
        active: true,
    }
}

fn member(id: ResourceId) -> Member {
    Member {
        value: id,
        display: None,
    }
}

/// Real Group actor with a mocked User dependency.
///
/// Member validation in `Group::on_create` / `on_update` talks only to the mock, so the
/// test controls exactly which users exist.
#[tokio::test]
async fn test_group_actor_validates_members_against_users() {
    let alice = ResourceId::generate();
    let ghost = ResourceId::generate();

    let mut user_mock = MockClient::<User>::new();
    user_mock.expect_get(alice).return_ok(Some(user(alice, "alice")));
    user_mock.expect_get(ghost).return_ok(None);

    let (group_actor, group_client) = group_actor::new(8);
    let actor_handle = tokio::spawn(group_actor.run(UserClient::new(user_mock.client())));

    let group_id = group_client
        .create_group(GroupCreate {
            display_name: "Admins".to_string(),
            members: vec![member(alice)],
        })
        .await
        .expect("Failed to create group");

    let result = group_client
        .create_group(GroupCreate {
            display_name: "Ghosts".to_string(),
            members: vec![member(ghost)],
        })
        .await;
    assert_eq!(result, Err(GroupError::UnknownMember(ghost)));

    let group = group_client.get(group_id).await.unwrap().unwrap();
    assert_eq!(group.members, vec![member(alice)]);

    user_mock.verify();

    drop(group_client);
    actor_handle.await.unwrap();
}

/// A rejected update leaves the stored group untouched.
#[tokio::test]
async fn test_failed_member_update_keeps_previous_state() {
    let alice = ResourceId::generate();
    let ghost = ResourceId::generate();

    let mut user_mock = MockClient::<User>::new();
    user_mock.expect_get(alice).return_ok(Some(user(alice, "alice")));
    user_mock.expect_get(ghost).return_ok(None);

    let (group_actor, group_client) = group_actor::new(8);
    let actor_handle = tokio::spawn(group_actor.run(UserClient::new(user_mock.client())));

    let group_id = group_client
        .create_group(GroupCreate {
            display_name: "Admins".to_string(),
            members: vec![member(alice)],
        })
        .await
        .unwrap();

    // displayName is applied before members are checked
    let result = group_client
        .update_group(
            group_id,
            GroupUpdate {
                display_name: Some("Renamed".to_string()),
                members: Some(vec![member(ghost)]),
            },
        )
        .await;
    assert_eq!(result, Err(GroupError::UnknownMember(ghost)));

    let group: Group = group_client.get(group_id).await.unwrap().unwrap();
    assert_eq!(group.display_name, "Admins");
    assert_eq!(group.members, vec![member(alice)]);

    user_mock.verify();

    drop(group_client);
    actor_handle.await.unwrap();
}

/// Lookup failures in the user actor surface as `MemberLookupFailed`, not as unknown members.
#[tokio::test]
async fn test_user_actor_failure_is_reported_as_lookup_failure() {
    let alice = ResourceId::generate();

    let mut user_mock = MockClient::<User>::new();
    user_mock
        .expect_get(alice)
        .return_err(resource_framework::FrameworkError::ActorClosed);

    let (group_actor, group_client) = group_actor::new(8);
    let actor_handle = tokio::spawn(group_actor.run(UserClient::new(user_mock.client())));

    let result = GroupClient::create_group(
        &group_client,
        GroupCreate {
            display_name: "Admins".to_string(),
            members: vec![member(alice)],
        },
    )
    .await;
    assert!(matches!(result, Err(GroupError::MemberLookupFailed(_))));

    user_mock.verify();

    drop(group_client);
    actor_handle.await.unwrap();
}
