//! Directory operations exposed under the real client's method names.
//!
//! Every method forwards to the owning store unchanged. The request context is
//! only used to tag log lines; query parameters are accepted and ignored.

use super::core::MockClient;
use crate::error::DirectoryResult;
use crate::resource::{AssignRoleRequest, Group, QueryParams, RequestContext, Role, User};
use log::{debug, trace};

impl MockClient {
    // Groups

    pub async fn create_group(&self, ctx: &RequestContext, group: Group) -> DirectoryResult<Group> {
        debug!(
            "create_group '{}' (request: '{}')",
            group.name(),
            ctx.request_id
        );
        self.state.write().await.groups.create_group(group)
    }

    pub async fn delete_group(&self, ctx: &RequestContext, group_id: &str) -> DirectoryResult<()> {
        debug!("delete_group '{}' (request: '{}')", group_id, ctx.request_id);
        self.state.write().await.groups.delete_group(group_id)
    }

    pub async fn get_group(&self, ctx: &RequestContext, group_id: &str) -> DirectoryResult<Group> {
        trace!("get_group '{}' (request: '{}')", group_id, ctx.request_id);
        self.state
            .read()
            .await
            .groups
            .get_group_by_id(group_id)
            .cloned()
    }

    pub async fn get_group_by_name(
        &self,
        ctx: &RequestContext,
        name: &str,
    ) -> DirectoryResult<Group> {
        trace!("get_group_by_name '{}' (request: '{}')", name, ctx.request_id);
        self.state
            .read()
            .await
            .groups
            .get_group_by_name(name)
            .cloned()
    }

    pub async fn list_groups(
        &self,
        ctx: &RequestContext,
        _qp: Option<&QueryParams>,
    ) -> DirectoryResult<Vec<Group>> {
        trace!("list_groups (request: '{}')", ctx.request_id);
        Ok(self.state.read().await.groups.list_groups().to_vec())
    }

    // Membership

    pub async fn add_user_to_group(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        user_id: &str,
    ) -> DirectoryResult<()> {
        debug!(
            "add_user_to_group '{}' <- '{}' (request: '{}')",
            group_id, user_id, ctx.request_id
        );
        let mut directory = self.state.write().await;
        let directory = &mut *directory;
        directory
            .groups
            .add_user_to_group(&directory.users, group_id, user_id)
    }

    pub async fn remove_user_from_group(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        user_id: &str,
    ) -> DirectoryResult<()> {
        debug!(
            "remove_user_from_group '{}' -> '{}' (request: '{}')",
            group_id, user_id, ctx.request_id
        );
        let mut directory = self.state.write().await;
        let directory = &mut *directory;
        directory
            .groups
            .remove_user_from_group(&directory.users, group_id, user_id)
    }

    pub async fn list_group_users(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        _qp: Option<&QueryParams>,
    ) -> DirectoryResult<Vec<User>> {
        trace!("list_group_users '{}' (request: '{}')", group_id, ctx.request_id);
        let directory = self.state.read().await;
        directory.groups.list_group_users(&directory.users, group_id)
    }

    pub async fn list_user_groups(
        &self,
        ctx: &RequestContext,
        user_id: &str,
    ) -> DirectoryResult<Vec<Group>> {
        trace!("list_user_groups '{}' (request: '{}')", user_id, ctx.request_id);
        let directory = self.state.read().await;
        directory.groups.list_user_groups(&directory.users, user_id)
    }

    pub async fn group_contains_user(&self, group: &Group, email: &str) -> bool {
        self.state.read().await.groups.group_contains_user(group, email)
    }

    // Roles

    pub async fn assign_role_to_group(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        request: AssignRoleRequest,
        _qp: Option<&QueryParams>,
    ) -> DirectoryResult<Role> {
        debug!(
            "assign_role_to_group '{}' role '{}' (request: '{}')",
            group_id, request.role_type, ctx.request_id
        );
        self.state
            .write()
            .await
            .groups
            .assign_role_to_group(group_id, &request)
    }

    pub async fn remove_role_from_group(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        role_id: &str,
    ) -> DirectoryResult<()> {
        debug!(
            "remove_role_from_group '{}' role '{}' (request: '{}')",
            group_id, role_id, ctx.request_id
        );
        self.state
            .write()
            .await
            .groups
            .remove_role_from_group(group_id, role_id)
    }

    pub async fn list_group_assigned_roles(
        &self,
        ctx: &RequestContext,
        group_id: &str,
        _qp: Option<&QueryParams>,
    ) -> DirectoryResult<Vec<Role>> {
        trace!(
            "list_group_assigned_roles '{}' (request: '{}')",
            group_id, ctx.request_id
        );
        self.state
            .read()
            .await
            .groups
            .list_group_assigned_roles(group_id)
            .map(<[Role]>::to_vec)
    }

    pub async fn group_contains_role(&self, group: &Group, role_type: &str) -> bool {
        self.state.read().await.groups.group_contains_role(group, role_type)
    }

    // Users

    pub async fn create_user(&self, ctx: &RequestContext, email: &str) -> DirectoryResult<User> {
        debug!("create_user '{}' (request: '{}')", email, ctx.request_id);
        self.state.write().await.users.create_user(email)
    }

    pub async fn get_user(&self, ctx: &RequestContext, user_id: &str) -> DirectoryResult<User> {
        trace!("get_user '{}' (request: '{}')", user_id, ctx.request_id);
        self.state.read().await.users.get_user_by_id(user_id).cloned()
    }

    pub async fn get_user_by_email(
        &self,
        ctx: &RequestContext,
        email: &str,
    ) -> DirectoryResult<User> {
        trace!("get_user_by_email '{}' (request: '{}')", email, ctx.request_id);
        self.state.read().await.users.get_user_by_email(email).cloned()
    }

    pub async fn list_users(
        &self,
        ctx: &RequestContext,
        _qp: Option<&QueryParams>,
    ) -> DirectoryResult<Vec<User>> {
        trace!("list_users (request: '{}')", ctx.request_id);
        Ok(self.state.read().await.users.list_users().to_vec())
    }
}
