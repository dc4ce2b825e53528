//! Property-based tests for directory invariants.
//!
//! Uses proptest to generate group names around the length limit, role type
//! strings inside and outside the vocabulary, and membership sequences.

use idp_directory_mock::resource::{AssignRoleRequest, Group, RoleType};
use idp_directory_mock::storage::{GroupStore, UserStore};
use idp_directory_mock::ErrorKind;
use proptest::prelude::*;
use std::collections::HashSet;

/// Strategy for role type strings that are in the vocabulary
fn valid_role_strategy() -> impl Strategy<Value = RoleType> {
    prop::sample::select(RoleType::ALL.to_vec())
}

/// Strategy for role type strings outside the vocabulary
fn invalid_role_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_]{0,30}".prop_filter("must not be a known role", |candidate| {
        candidate.parse::<RoleType>().is_err()
    })
}

proptest! {
    #[test]
    fn prop_valid_names_are_created_and_retrievable(name in "[a-zA-Z0-9 _-]{1,255}") {
        let mut store = GroupStore::new();
        let group = store.create_group(Group::from_name(name.clone())).unwrap();

        prop_assert_eq!(store.get_group_by_id(&group.id).unwrap(), &group);
        prop_assert_eq!(store.get_group_by_name(&name).unwrap(), &group);
    }

    #[test]
    fn prop_overlong_names_are_rejected(extra in 1usize..200) {
        let mut store = GroupStore::new();
        let name = "n".repeat(255 + extra);

        let err = store.create_group(Group::from_name(name)).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidName);
        prop_assert!(store.is_empty());
    }

    #[test]
    fn prop_invalid_roles_rejected_whether_or_not_group_exists(
        role in invalid_role_strategy(),
        create_group in any::<bool>(),
    ) {
        let mut store = GroupStore::new();
        let group_id = if create_group {
            store.create_group(Group::from_name("G")).unwrap().id
        } else {
            "1".to_string()
        };

        let err = store
            .assign_role_to_group(&group_id, &AssignRoleRequest::new(role))
            .unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidRole);
    }

    #[test]
    fn prop_each_role_type_assigned_once(
        roles in prop::collection::vec(valid_role_strategy(), 1..30),
    ) {
        let mut store = GroupStore::new();
        let group = store.create_group(Group::from_name("G")).unwrap();

        let mut seen = HashSet::new();
        for role_type in &roles {
            let result = store.assign_role_to_group(&group.id, &(*role_type).into());
            if seen.insert(*role_type) {
                prop_assert!(result.is_ok());
            } else {
                prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::DuplicateRole);
            }
        }

        let assigned = store.list_group_assigned_roles(&group.id).unwrap();
        prop_assert_eq!(assigned.len(), seen.len());
    }

    #[test]
    fn prop_removal_only_touches_target_user(
        adds in prop::collection::vec(0usize..5, 1..40),
        target in 0usize..5,
    ) {
        let mut users = UserStore::new();
        let created: Vec<_> = (0..5)
            .map(|i| users.create_user(&format!("user{}@test.com", i)).unwrap())
            .collect();
        let mut groups = GroupStore::new();
        let group = groups.create_group(Group::from_name("G")).unwrap();

        for &i in &adds {
            groups.add_user_to_group(&users, &group.id, &created[i].id).unwrap();
        }
        groups.remove_user_from_group(&users, &group.id, &created[target].id).unwrap();

        let expected = adds.iter().filter(|&&i| i != target).count();
        let members = groups.list_group_users(&users, &group.id).unwrap();
        prop_assert_eq!(members.len(), expected);
        prop_assert!(!groups.group_contains_user(&group, created[target].email()));
        prop_assert!(members.iter().all(|user| user.id != created[target].id));
    }

    #[test]
    fn prop_group_ids_unique_across_deletes(ops in prop::collection::vec(any::<bool>(), 1..60)) {
        let mut store = GroupStore::new();
        let mut issued = HashSet::new();

        for (n, create) in ops.into_iter().enumerate() {
            if create || store.is_empty() {
                let group = store.create_group(Group::from_name(format!("g{}", n))).unwrap();
                prop_assert!(issued.insert(group.id));
            } else {
                let victim = store.list_groups()[0].id.clone();
                store.delete_group(&victim).unwrap();
                prop_assert!(store.get_group_by_id(&victim).is_err());
            }
        }
    }
}
