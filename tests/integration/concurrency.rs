//! Shared clients driven from concurrent tasks.
//!
//! The stores themselves are single-writer; these tests check that the
//! client's lock keeps every call atomic when clones are used from many tasks.

use crate::common::{create_group, ctx, init_logging};
use futures::future::join_all;
use idp_directory_mock::resource::{Group, RoleType};
use idp_directory_mock::{ErrorKind, MockClient};
use std::collections::HashSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_user_creation_assigns_unique_ids() {
    init_logging();
    let client = MockClient::new();

    let handles = (0..50).map(|i| {
        let client = client.clone();
        tokio::spawn(async move {
            client
                .create_user(&ctx("concurrent_users"), &format!("user{}@test.com", i))
                .await
        })
    });
    let users: Vec<_> = join_all(handles)
        .await
        .into_iter()
        .map(|joined| joined.expect("task panicked").expect("create failed"))
        .collect();

    let ids: HashSet<&str> = users.iter().map(|user| user.id.as_str()).collect();
    assert_eq!(ids.len(), 50);
    assert_eq!(client.stats().await.user_count, 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_duplicate_group_names() {
    let client = MockClient::new();

    let attempts = (0..20).map(|_| {
        let client = client.clone();
        async move {
            client
                .create_group(&ctx("racing_groups"), Group::from_name("Contested"))
                .await
        }
    });
    let results = join_all(attempts).await;

    let created = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(created, 1);
    assert!(
        results
            .iter()
            .filter_map(|result| result.as_ref().err())
            .all(|err| err.kind() == ErrorKind::DuplicateName)
    );
}

#[tokio::test]
async fn test_racing_role_assignments() {
    let client = MockClient::new();
    let group = create_group(&client, "Admins").await;

    let attempts = (0..10).map(|_| {
        let client = client.clone();
        let group_id = group.id.clone();
        async move {
            client
                .assign_role_to_group(
                    &ctx("racing_roles"),
                    &group_id,
                    RoleType::OrgAdmin.into(),
                    None,
                )
                .await
        }
    });
    let results = join_all(attempts).await;

    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert_eq!(client.stats().await.role_assignment_count, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_membership_adds() {
    let client = MockClient::new();
    let group = create_group(&client, "Everyone").await;

    let handles = (0..25).map(|i| {
        let client = client.clone();
        let group_id = group.id.clone();
        tokio::spawn(async move {
            let ctx = ctx("concurrent_members");
            let user = client
                .create_user(&ctx, &format!("member{}@test.com", i))
                .await?;
            client.add_user_to_group(&ctx, &group_id, &user.id).await
        })
    });
    for joined in join_all(handles).await {
        joined.expect("task panicked").expect("membership add failed");
    }

    let members = client
        .list_group_users(&ctx("concurrent_members"), &group.id, None)
        .await
        .unwrap();
    assert_eq!(members.len(), 25);
}
