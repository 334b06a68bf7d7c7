//! Year groups under `/basic/grade`.

use serde::{Deserialize, Serialize};

use super::crud::{self, crud_endpoints, Resource};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Grade;
use crate::transport::Transport;

pub struct Grades;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_year: Option<String>,
}

impl Resource for Grades {
    const BASE: &'static str = "/basic/grade";
    type Record = Grade;
    type Filter = GradeFilter;
}

crud_endpoints!(Grades, Grade, GradeFilter);

/// Every enabled grade, for drop-downs.
pub async fn all_active<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Grade>, ApiError> {
    crud::list_at::<Grades, T>(client, "/all").await
}

pub async fn by_school_year<T: Transport>(client: &ApiClient<T>, school_year: &str) -> Result<Vec<Grade>, ApiError> {
    crud::list_at::<Grades, T>(client, &format!("/school-year/{school_year}")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{harness, ok};
    use crate::envelope::PageQuery;
    use crate::models::RecordStatus;
    use crate::transport::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_sends_page_and_filter() {
        let h = harness();
        h.transport.reply(
            200,
            ok(json!({"content": [{"id": 1, "gradeName": "Grade 7", "status": 1}],
                      "totalElements": 1, "number": 1, "size": 10, "totalPages": 1})),
        );

        let filter = GradeFilter {
            school_year: Some("2024-2025".into()),
            ..GradeFilter::default()
        };
        let page = list(&h.client, &PageQuery::new(1, 500), &filter).await.unwrap();

        assert_eq!(page.records[0].grade_name, "Grade 7");
        let sent = h.transport.last();
        assert_eq!(sent.url, "/api/basic/grade/list");
        assert!(sent.query.contains(&("size".into(), "100".into())));
        assert!(sent.query.contains(&("schoolYear".into(), "2024-2025".into())));
        assert!(!sent.query.iter().any(|(k, _)| k == "gradeName"));
    }

    #[tokio::test]
    async fn test_paths_and_methods() {
        let h = harness();
        for _ in 0..5 {
            h.transport.reply(200, ok(json!([])));
        }

        all_active(&h.client).await.unwrap();
        assert_eq!(h.transport.last().url, "/api/basic/grade/all");

        by_school_year(&h.client, "2024-2025").await.unwrap();
        assert_eq!(h.transport.last().url, "/api/basic/grade/school-year/2024-2025");

        update_status(&h.client, 4, RecordStatus::Disabled).await.unwrap();
        let sent = h.transport.last();
        assert_eq!((sent.method, sent.url.as_str()), (Method::Put, "/api/basic/grade/4/status"));
        assert_eq!(sent.query, vec![("status".to_string(), "0".to_string())]);

        batch_delete(&h.client, &[1, 2]).await.unwrap();
        let sent = h.transport.last();
        assert_eq!((sent.method, sent.url.as_str()), (Method::Delete, "/api/basic/grade/batch"));
        assert_eq!(sent.body, Some(json!([1, 2])));

        delete(&h.client, 9).await.unwrap();
        assert_eq!(h.transport.last().url, "/api/basic/grade/9");
    }

    #[tokio::test]
    async fn test_batch_delete_requires_ids() {
        let h = harness();
        assert!(batch_delete(&h.client, &[]).await.is_err());
        assert!(h.transport.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_create_posts_record() {
        let h = harness();
        h.transport.reply(200, ok(json!({"id": 5, "gradeName": "Grade 8"})));

        let grade = Grade {
            grade_name: "Grade 8".into(),
            ..Grade::default()
        };
        let created = create(&h.client, &grade).await.unwrap();

        assert_eq!(created.audit.id, Some(5));
        let sent = h.transport.last();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.body.as_ref().and_then(|b| b.get("gradeName")), Some(&json!("Grade 8")));
    }
}
