//! Group store: groups, group membership and group role assignments.
//!
//! Groups live in a list that is compacted with swap-remove, so the order of
//! [`GroupStore::list_groups`] is only insertion order until the first delete.
//! Membership and role assignments are keyed by group id. Membership stores
//! user emails as back-references; the [`UserStore`] passed to membership
//! operations stays the owner of user records.

use crate::config::DirectoryConfig;
use crate::error::{DirectoryError, DirectoryResult};
use crate::resource::{AssignRoleRequest, Group, Role, RoleType, User};
use crate::storage::{IdSequence, UserStore};
use chrono::Utc;
use log::{debug, info, trace};
use std::collections::HashMap;

/// Owns every group together with its members and assigned roles.
#[derive(Debug, Clone)]
pub struct GroupStore {
    groups: Vec<Group>,
    // group id -> member emails, insertion order until a removal
    members: HashMap<String, Vec<String>>,
    // group id -> assigned roles
    roles: HashMap<String, Vec<Role>>,
    group_ids: IdSequence,
    role_ids: IdSequence,
    max_name_length: usize,
    idempotent_membership: bool,
}

impl Default for GroupStore {
    fn default() -> Self {
        Self::with_config(&DirectoryConfig::default())
    }
}

impl GroupStore {
    /// Create an empty group store with the service's default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty group store using the given configuration.
    pub fn with_config(config: &DirectoryConfig) -> Self {
        Self {
            groups: Vec::new(),
            members: HashMap::new(),
            roles: HashMap::new(),
            group_ids: IdSequence::new(),
            role_ids: IdSequence::new(),
            max_name_length: config.max_group_name_length,
            idempotent_membership: config.idempotent_membership,
        }
    }

    /// Create a group from a bare group value.
    ///
    /// The duplicate-name check runs before the length check. The returned
    /// group carries the assigned id and creation timestamps; any id present on
    /// the input is replaced.
    pub fn create_group(&mut self, mut group: Group) -> DirectoryResult<Group> {
        let name = group.name();

        if self.groups.iter().any(|existing| existing.name() == name) {
            debug!("Rejecting group '{}': name already taken", name);
            return Err(DirectoryError::DuplicateName {
                name: name.to_string(),
            });
        }

        let length = name.chars().count();
        if length == 0 || length > self.max_name_length {
            debug!("Rejecting group name of length {}", length);
            return Err(DirectoryError::InvalidName {
                name: name.to_string(),
                length,
                max: self.max_name_length,
            });
        }

        let now = Utc::now();
        group.id = self.group_ids.next_id();
        group.created = Some(now);
        group.last_membership_updated = Some(now);

        info!("Created group '{}' with id '{}'", group.name(), group.id);
        self.groups.push(group.clone());
        Ok(group)
    }

    /// Delete a group together with its memberships and role assignments.
    ///
    /// The last group takes the deleted group's place in the list.
    pub fn delete_group(&mut self, group_id: &str) -> DirectoryResult<()> {
        let index = self.position(group_id)?;
        let removed = self.groups.swap_remove(index);
        self.members.remove(group_id);
        self.roles.remove(group_id);

        info!("Deleted group '{}' with id '{}'", removed.name(), group_id);
        Ok(())
    }

    /// Current groups. Order is insertion order until the first delete.
    pub fn list_groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn get_group_by_id(&self, group_id: &str) -> DirectoryResult<&Group> {
        self.groups
            .iter()
            .find(|group| group.id == group_id)
            .ok_or_else(|| DirectoryError::not_found("Group", group_id))
    }

    pub fn get_group_by_name(&self, name: &str) -> DirectoryResult<&Group> {
        self.groups
            .iter()
            .find(|group| group.name() == name)
            .ok_or_else(|| DirectoryError::not_found("Group", name))
    }

    /// Add a user to a group.
    ///
    /// Adding a user twice records two entries unless the store was configured
    /// with idempotent membership.
    pub fn add_user_to_group(
        &mut self,
        users: &UserStore,
        group_id: &str,
        user_id: &str,
    ) -> DirectoryResult<()> {
        let index = self.position(group_id)?;
        let email = users.get_user_by_id(user_id)?.email().to_string();

        let members = self.members.entry(group_id.to_string()).or_default();
        if self.idempotent_membership && members.contains(&email) {
            trace!("User '{}' already in group '{}'", email, group_id);
            return Ok(());
        }
        members.push(email);

        if let Some(group) = self.groups.get_mut(index) {
            group.last_membership_updated = Some(Utc::now());
        }
        info!("Added user '{}' to group '{}'", user_id, group_id);
        Ok(())
    }

    /// Remove every membership entry of a user from a group.
    ///
    /// Entries are swap-removed, so the order of the remaining members is not
    /// preserved. Removing a user who is not a member succeeds.
    pub fn remove_user_from_group(
        &mut self,
        users: &UserStore,
        group_id: &str,
        user_id: &str,
    ) -> DirectoryResult<()> {
        let index = self.position(group_id)?;
        let email = users.get_user_by_id(user_id)?.email();

        let mut removed = 0;
        if let Some(members) = self.members.get_mut(group_id) {
            let mut i = 0;
            while i < members.len() {
                if members[i] == email {
                    members.swap_remove(i);
                    removed += 1;
                } else {
                    i += 1;
                }
            }
        }

        if removed == 0 {
            debug!("User '{}' is not a member of group '{}'", user_id, group_id);
            return Ok(());
        }

        if let Some(group) = self.groups.get_mut(index) {
            group.last_membership_updated = Some(Utc::now());
        }
        info!(
            "Removed user '{}' from group '{}' ({} entries)",
            user_id, group_id, removed
        );
        Ok(())
    }

    /// Resolve a group's members to user records.
    ///
    /// Fails with [`DirectoryError::NotFound`] if any stored email no longer
    /// resolves to a user.
    pub fn list_group_users(
        &self,
        users: &UserStore,
        group_id: &str,
    ) -> DirectoryResult<Vec<User>> {
        self.get_group_by_id(group_id)?;

        self.member_emails(group_id)
            .iter()
            .map(|email| users.get_user_by_email(email).cloned())
            .collect()
    }

    /// Groups whose membership contains the given user, in group-list order.
    pub fn list_user_groups(
        &self,
        users: &UserStore,
        user_id: &str,
    ) -> DirectoryResult<Vec<Group>> {
        let email = users.get_user_by_id(user_id)?.email();

        Ok(self
            .groups
            .iter()
            .filter(|group| self.group_contains_user(group, email))
            .cloned()
            .collect())
    }

    /// Assign an administrative role to a group.
    ///
    /// The role type is validated before the group is looked up, so an
    /// unknown type fails with [`DirectoryError::InvalidRole`] whether or not
    /// the group exists.
    pub fn assign_role_to_group(
        &mut self,
        group_id: &str,
        request: &AssignRoleRequest,
    ) -> DirectoryResult<Role> {
        let role_type: RoleType = request.role_type.parse()?;
        let group = self.get_group_by_id(group_id)?;

        if self.group_contains_role(group, role_type.as_str()) {
            debug!(
                "Rejecting role '{}' for group '{}': already assigned",
                role_type, group_id
            );
            return Err(DirectoryError::DuplicateRole {
                group_id: group_id.to_string(),
                role_type: role_type.to_string(),
            });
        }

        let role = Role::assigned_to_group(self.role_ids.next_id(), role_type);
        self.roles
            .entry(group_id.to_string())
            .or_default()
            .push(role.clone());

        info!(
            "Assigned role '{}' to group '{}' with id '{}'",
            role_type, group_id, role.id
        );
        Ok(role)
    }

    /// Remove a role assignment from a group by role id.
    ///
    /// The last assignment of the group takes the removed one's place.
    pub fn remove_role_from_group(&mut self, group_id: &str, role_id: &str) -> DirectoryResult<()> {
        self.get_group_by_id(group_id)?;

        let roles = self
            .roles
            .get_mut(group_id)
            .ok_or_else(|| DirectoryError::not_found("Role", role_id))?;
        let index = roles
            .iter()
            .position(|role| role.id == role_id)
            .ok_or_else(|| DirectoryError::not_found("Role", role_id))?;
        let removed = roles.swap_remove(index);

        info!(
            "Removed role '{}' ({}) from group '{}'",
            removed.role_type, role_id, group_id
        );
        Ok(())
    }

    /// Roles assigned to a group; empty when none are assigned.
    pub fn list_group_assigned_roles(&self, group_id: &str) -> DirectoryResult<&[Role]> {
        self.get_group_by_id(group_id)?;
        Ok(self.roles.get(group_id).map(Vec::as_slice).unwrap_or_default())
    }

    /// Whether a role of the given type is assigned to the group.
    ///
    /// The group is resolved by name, so a bare value from
    /// [`Group::from_name`] works. An unknown name yields `false`.
    pub fn group_contains_role(&self, group: &Group, role_type: &str) -> bool {
        self.stored_id(group).is_some_and(|group_id| {
            self.roles.get(group_id).is_some_and(|roles| {
                roles
                    .iter()
                    .any(|role| role.role_type.as_str() == role_type)
            })
        })
    }

    /// Whether the given email is a member of the group, resolved by name.
    pub fn group_contains_user(&self, group: &Group, email: &str) -> bool {
        self.stored_id(group).is_some_and(|group_id| {
            self.member_emails(group_id)
                .iter()
                .any(|member| member == email)
        })
    }

    /// Raw membership entries of a group, duplicates included.
    pub fn member_emails(&self, group_id: &str) -> &[String] {
        self.members
            .get(group_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total membership entries across all groups.
    pub fn membership_count(&self) -> usize {
        self.members.values().map(Vec::len).sum()
    }

    /// Total role assignments across all groups.
    pub fn role_assignment_count(&self) -> usize {
        self.roles.values().map(Vec::len).sum()
    }

    fn stored_id(&self, group: &Group) -> Option<&str> {
        self.groups
            .iter()
            .find(|stored| stored.name() == group.name())
            .map(|stored| stored.id.as_str())
    }

    fn position(&self, group_id: &str) -> DirectoryResult<usize> {
        self.groups
            .iter()
            .position(|group| group.id == group_id)
            .ok_or_else(|| DirectoryError::not_found("Group", group_id))
    }
}
