//! Classes under `/basic/class`.

use serde::{Deserialize, Serialize};

use super::crud::{self, crud_endpoints, Resource};
use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::models::{Id, SchoolClass};
use crate::transport::Transport;

pub struct Classes;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_id: Option<Id>,
}

impl Resource for Classes {
    const BASE: &'static str = "/basic/class";
    type Record = SchoolClass;
    type Filter = ClassFilter;
}

crud_endpoints!(Classes, SchoolClass, ClassFilter);

pub async fn all_active<T: Transport>(client: &ApiClient<T>) -> Result<Vec<SchoolClass>, ApiError> {
    crud::list_at::<Classes, T>(client, "/all").await
}

pub async fn by_grade<T: Transport>(client: &ApiClient<T>, grade_id: Id) -> Result<Vec<SchoolClass>, ApiError> {
    crud::list_at::<Classes, T>(client, &format!("/grade/{grade_id}")).await
}

/// Ask the server to recount the class's enrolled students.
pub async fn update_student_count<T: Transport>(client: &ApiClient<T>, id: Id) -> Result<(), ApiError> {
    client
        .execute(ApiRequest::put(format!("{}/student-count", crud::item_path::<Classes>(id))))
        .await
}
