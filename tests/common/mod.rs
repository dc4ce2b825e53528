//! Common test utilities for directory testing.
//!
//! Shared helpers for building clients, seeding records and asserting on
//! error kinds across the integration suites.

use idp_directory_mock::resource::{Group, RequestContext, User};
use idp_directory_mock::MockClient;


/// Assert that a result failed with the given [`ErrorKind`](idp_directory_mock::ErrorKind).
#[macro_export]
macro_rules! assert_error_kind {
    ($result:expr, $kind:expr) => {
        match $result {
            Ok(value) => panic!("expected {:?} error, got Ok({:?})", $kind, value),
            Err(err) => assert_eq!(err.kind(), $kind, "unexpected error: {}", err),
        }
    };
}

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A request context tagged with the test name for log correlation.
pub fn ctx(test_name: &str) -> RequestContext {
    RequestContext::new(format!("test-{}", test_name))
}

/// Create a group on the client, panicking on failure.
pub async fn create_group(client: &MockClient, name: &str) -> Group {
    client
        .create_group(&ctx("setup"), Group::from_name(name))
        .await
        .expect("Failed to create group")
}

/// Create users on the client, panicking on failure.
pub async fn create_users(client: &MockClient, emails: &[&str]) -> Vec<User> {
    let mut users = Vec::with_capacity(emails.len());
    for email in emails {
        let user = client
            .create_user(&ctx("setup"), email)
            .await
            .expect("Failed to create user");
        users.push(user);
    }
    users
}

/// Add every user to the group, panicking on failure.
pub async fn add_members(client: &MockClient, group: &Group, users: &[User]) {
    for user in users {
        client
            .add_user_to_group(&ctx("setup"), &group.id, &user.id)
            .await
            .expect("Failed to add user to group");
    }
}

/// Emails of the given users, sorted for order-insensitive comparison.
pub fn sorted_emails(users: &[User]) -> Vec<String> {
    let mut emails: Vec<String> = users.iter().map(|user| user.email().to_string()).collect();
    emails.sort();
    emails
}
