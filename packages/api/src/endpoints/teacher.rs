//! Teachers under `/teachers`.

use serde::{Deserialize, Serialize};

use super::crud::{self, crud_endpoints, Resource};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Teacher;
use crate::transport::Transport;

pub struct Teachers;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl Resource for Teachers {
    const BASE: &'static str = "/teachers";
    type Record = Teacher;
    type Filter = TeacherFilter;
}

crud_endpoints!(Teachers, Teacher, TeacherFilter);

pub async fn active<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Teacher>, ApiError> {
    crud::list_at::<Teachers, T>(client, "/active").await
}

/// Teachers eligible to head a class.
pub async fn head_teachers<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Teacher>, ApiError> {
    crud::list_at::<Teachers, T>(client, "/head-teachers").await
}
