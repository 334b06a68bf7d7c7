use serde::{Deserialize, Serialize};

use super::codes::{Gender, RecordStatus};
use super::{Audit, Id};

/// A login account as managed on the user administration page.
///
/// The password is write-only: it is sent when creating an account and never
/// decoded from responses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserAccount {
    #[serde(flatten)]
    pub audit: Audit,
    pub username: String,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub real_name: String,
    pub gender: Option<Gender>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub status: RecordStatus,
    pub last_login_time: Option<String>,
    pub last_login_ip: Option<String>,
    pub roles: Vec<Role>,
}

impl UserAccount {
    pub fn display_name(&self) -> &str {
        if self.real_name.is_empty() {
            &self.username
        } else {
            &self.real_name
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Role {
    #[serde(flatten)]
    pub audit: Audit,
    pub role_code: String,
    pub role_name: String,
    pub description: Option<String>,
    pub sort_order: i32,
    pub status: RecordStatus,
}

/// Menu or button permission node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Permission {
    #[serde(flatten)]
    pub audit: Audit,
    pub permission_code: String,
    pub permission_name: String,
    pub permission_type: Option<i32>,
    pub parent_id: Option<Id>,
    pub permission_path: Option<String>,
    pub icon: Option<String>,
    pub sort_order: i32,
    pub status: RecordStatus,
    pub children: Vec<Permission>,
}

impl Permission {
    /// Codes of this node and all descendants, depth first.
    pub fn codes(&self) -> Vec<&str> {
        let mut out = vec![self.permission_code.as_str()];
        for child in &self.children {
            out.extend(child.codes());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_never_decoded() {
        let user: UserAccount = serde_json::from_str(
            r#"{"id":1,"username":"admin","password":"$2a$hash","realName":"","status":1,
                "roles":[{"id":1,"roleCode":"admin","roleName":"Administrator","status":1}]}"#,
        )
        .unwrap();
        assert!(user.password.is_none());
        assert_eq!(user.display_name(), "admin");
        assert_eq!(user.roles[0].role_code, "admin");

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_permission_tree_codes() {
        let tree: Permission = serde_json::from_str(
            r#"{"permissionCode":"system","children":[
                {"permissionCode":"system:user","children":[{"permissionCode":"system:user:add"}]},
                {"permissionCode":"system:role"}]}"#,
        )
        .unwrap();
        assert_eq!(tree.codes(), vec!["system", "system:user", "system:user:add", "system:role"]);
    }
}
