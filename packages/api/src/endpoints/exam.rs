//! Exams under `/exams`.
//!
//! Status changes go through the dedicated `start` / `finish` / `publish`
//! calls; [`advance`] picks the right one for an exam's current status and
//! refuses to move a published exam.

use serde::{Deserialize, Serialize};

use super::crud::{self, crud_endpoints, Resource};
use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::models::{Exam, ExamStatus, ExamType, Id};
use crate::transport::Transport;

pub struct Exams;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_type: Option<ExamType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExamStatus>,
}

impl Resource for Exams {
    const BASE: &'static str = "/exams";
    type Record = Exam;
    type Filter = ExamFilter;
}

crud_endpoints!(Exams, Exam, ExamFilter, ExamStatus);

/// Exams that have started and are not yet published.
pub async fn current<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Exam>, ApiError> {
    crud::list_at::<Exams, T>(client, "/current").await
}

pub async fn by_term<T: Transport>(client: &ApiClient<T>, school_year: &str, semester: u8) -> Result<Vec<Exam>, ApiError> {
    crud::list_at::<Exams, T>(client, &format!("/school-year/{school_year}/semester/{semester}")).await
}

async fn transition<T: Transport>(client: &ApiClient<T>, id: Id, action: &str) -> Result<(), ApiError> {
    client
        .execute(ApiRequest::put(format!("{}/{}", crud::item_path::<Exams>(id), action)))
        .await
}

pub async fn start<T: Transport>(client: &ApiClient<T>, id: Id) -> Result<(), ApiError> {
    transition(client, id, "start").await
}

pub async fn finish<T: Transport>(client: &ApiClient<T>, id: Id) -> Result<(), ApiError> {
    transition(client, id, "finish").await
}

pub async fn publish<T: Transport>(client: &ApiClient<T>, id: Id) -> Result<(), ApiError> {
    transition(client, id, "publish").await
}

/// Move `exam` one step along its lifecycle and return the new status.
pub async fn advance<T: Transport>(client: &ApiClient<T>, exam: &Exam) -> Result<ExamStatus, ApiError> {
    let id = exam
        .audit
        .id
        .ok_or_else(|| ApiError::InvalidRequest("exam has not been saved".into()))?;
    match exam.status {
        ExamStatus::NotStarted => start(client, id).await?,
        ExamStatus::InProgress => finish(client, id).await?,
        ExamStatus::Finished => publish(client, id).await?,
        ExamStatus::Published => {
            return Err(ApiError::InvalidRequest("exam is already published".into()));
        }
    }
    Ok(exam.status.next().unwrap_or(exam.status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{harness, ok};
    use crate::models::Audit;
    use crate::transport::Method;
    use serde_json::json;

    fn exam(id: Id, status: ExamStatus) -> Exam {
        Exam {
            audit: Audit {
                id: Some(id),
                ..Audit::default()
            },
            status,
            ..Exam::default()
        }
    }

    #[tokio::test]
    async fn test_advance_walks_lifecycle() {
        let h = harness();
        for _ in 0..3 {
            h.transport.reply(200, ok(json!(null)));
        }

        assert_eq!(advance(&h.client, &exam(4, ExamStatus::NotStarted)).await.unwrap(), ExamStatus::InProgress);
        assert_eq!(h.transport.last().url, "/api/exams/4/start");
        assert_eq!(h.transport.last().method, Method::Put);

        assert_eq!(advance(&h.client, &exam(4, ExamStatus::InProgress)).await.unwrap(), ExamStatus::Finished);
        assert_eq!(h.transport.last().url, "/api/exams/4/finish");

        assert_eq!(advance(&h.client, &exam(4, ExamStatus::Finished)).await.unwrap(), ExamStatus::Published);
        assert_eq!(h.transport.last().url, "/api/exams/4/publish");
    }

    #[tokio::test]
    async fn test_published_and_unsaved_exams_do_not_advance() {
        let h = harness();
        assert!(matches!(
            advance(&h.client, &exam(4, ExamStatus::Published)).await,
            Err(ApiError::InvalidRequest(_))
        ));
        assert!(advance(&h.client, &Exam::default()).await.is_err());
        assert!(h.transport.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_status_and_term_paths() {
        let h = harness();
        h.transport.reply(200, ok(json!(null)));
        h.transport.reply(200, ok(json!([])));

        update_status(&h.client, 2, ExamStatus::Finished).await.unwrap();
        assert_eq!(h.transport.last().query, vec![("status".to_string(), "2".to_string())]);

        by_term(&h.client, "2024-2025", 1).await.unwrap();
        assert_eq!(h.transport.last().url, "/api/exams/school-year/2024-2025/semester/1");
    }
}
