//! Students under `/students`.

use serde::{Deserialize, Serialize};

use super::crud::{self, crud_endpoints, Resource};
use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::models::{Id, Student};
use crate::transport::Transport;

pub struct Students;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl Resource for Students {
    const BASE: &'static str = "/students";
    type Record = Student;
    type Filter = StudentFilter;
}

crud_endpoints!(Students, Student, StudentFilter);

pub async fn by_class<T: Transport>(client: &ApiClient<T>, class_id: Id) -> Result<Vec<Student>, ApiError> {
    crud::list_at::<Students, T>(client, &format!("/class/{class_id}")).await
}

pub async fn by_code<T: Transport>(client: &ApiClient<T>, student_code: &str) -> Result<Student, ApiError> {
    client
        .fetch(ApiRequest::get(format!("{}/code/{}", Students::BASE, student_code)))
        .await
}
