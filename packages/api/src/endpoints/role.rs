//! Roles and their permissions under `/roles`.

use serde::{Deserialize, Serialize};

use super::crud::{self, crud_endpoints, Resource};
use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::models::{Id, Permission, Role};
use crate::transport::Transport;

pub struct Roles;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl Resource for Roles {
    const BASE: &'static str = "/roles";
    type Record = Role;
    type Filter = RoleFilter;
}

crud_endpoints!(Roles, Role, RoleFilter);

pub async fn active<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Role>, ApiError> {
    crud::list_at::<Roles, T>(client, "/active").await
}

pub async fn permissions<T: Transport>(client: &ApiClient<T>, id: Id) -> Result<Vec<Permission>, ApiError> {
    client
        .fetch(ApiRequest::get(format!("{}/permissions", crud::item_path::<Roles>(id))))
        .await
}

/// Replace the role's permission set.
pub async fn assign_permissions<T: Transport>(
    client: &ApiClient<T>,
    id: Id,
    permission_ids: &[Id],
) -> Result<(), ApiError> {
    client
        .execute(ApiRequest::post(format!("{}/permissions", crud::item_path::<Roles>(id))).json(permission_ids)?)
        .await
}
