//! Courses under `/courses`.

use serde::{Deserialize, Serialize};

use super::crud::{self, crud_endpoints, Resource};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Course, Stage};
use crate::transport::Transport;

pub struct Courses;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl Resource for Courses {
    const BASE: &'static str = "/courses";
    type Record = Course;
    type Filter = CourseFilter;
}

crud_endpoints!(Courses, Course, CourseFilter);

pub async fn active<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Course>, ApiError> {
    crud::list_at::<Courses, T>(client, "/active").await
}

pub async fn by_stage<T: Transport>(client: &ApiClient<T>, stage: Stage) -> Result<Vec<Course>, ApiError> {
    crud::list_at::<Courses, T>(client, &format!("/stage/{}", stage.code())).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{harness, ok};
    use crate::envelope::PageQuery;
    use serde_json::json;

    #[tokio::test]
    async fn test_stage_filter_is_numeric() {
        let h = harness();
        h.transport.reply(200, ok(json!({"records": [], "total": 0, "current": 1, "size": 10, "pages": 0})));
        h.transport.reply(200, ok(json!([])));

        let filter = CourseFilter {
            stage: Some(Stage::Senior),
            ..CourseFilter::default()
        };
        list(&h.client, &PageQuery::default(), &filter).await.unwrap();
        assert!(h.transport.last().query.contains(&("stage".into(), "3".into())));

        by_stage(&h.client, Stage::Primary).await.unwrap();
        assert_eq!(h.transport.last().url, "/api/courses/stage/1");
    }
}
