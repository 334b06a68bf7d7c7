//! Login accounts under `/users`.

use serde::{Deserialize, Serialize};

use super::crud::{crud_endpoints, Resource};
use crate::models::UserAccount;

pub struct Users;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl Resource for Users {
    const BASE: &'static str = "/users";
    type Record = UserAccount;
    type Filter = UserFilter;
}

crud_endpoints!(Users, UserAccount, UserFilter);
