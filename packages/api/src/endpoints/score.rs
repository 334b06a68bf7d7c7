//! Score entry and reporting under `/grade/score`.

use crate::client::{ApiClient, ApiRequest};
use crate::error::ApiError;
use crate::models::{
    Id, RankingQuery, Score, ScoreEntry, ScoreStatistics, ScoreTemplateQuery, StatisticsQuery,
    StudentDetailQuery, StudentScoreDetail,
};
use crate::transport::Transport;

const BASE: &str = "/grade/score";

/// Roster for one exam/course, with any marks already saved.
pub async fn entry_template<T: Transport>(
    client: &ApiClient<T>,
    query: &ScoreTemplateQuery,
) -> Result<Vec<ScoreEntry>, ApiError> {
    client
        .fetch(ApiRequest::get(format!("{BASE}/template")).query(query)?)
        .await
}

/// Save a batch of marks. Returns the server's confirmation message.
pub async fn batch_create<T: Transport>(client: &ApiClient<T>, scores: &[Score]) -> Result<Option<String>, ApiError> {
    if scores.is_empty() {
        return Err(ApiError::InvalidRequest("no scores to save".into()));
    }
    let envelope = client
        .envelope::<serde_json::Value>(ApiRequest::post(format!("{BASE}/batch")).json(scores)?)
        .await?;
    Ok(envelope.message)
}

pub async fn update<T: Transport>(client: &ApiClient<T>, id: Id, score: &Score) -> Result<(), ApiError> {
    client
        .execute(ApiRequest::put(format!("{BASE}/{id}")).json(score)?)
        .await
}

pub async fn delete<T: Transport>(client: &ApiClient<T>, id: Id) -> Result<(), ApiError> {
    client.execute(ApiRequest::delete(format!("{BASE}/{id}"))).await
}

/// Recompute class and grade ranks. Parameters travel in the query string.
pub async fn calculate_rankings<T: Transport>(client: &ApiClient<T>, query: &RankingQuery) -> Result<(), ApiError> {
    client
        .execute(ApiRequest::post(format!("{BASE}/calculate-rankings")).query(query)?)
        .await
}

pub async fn statistics<T: Transport>(
    client: &ApiClient<T>,
    query: &StatisticsQuery,
) -> Result<ScoreStatistics, ApiError> {
    client
        .fetch(ApiRequest::get(format!("{BASE}/statistics")).query(query)?)
        .await
}

pub async fn student_detail<T: Transport>(
    client: &ApiClient<T>,
    query: &StudentDetailQuery,
) -> Result<StudentScoreDetail, ApiError> {
    client
        .fetch(ApiRequest::get(format!("{BASE}/student-detail")).query(query)?)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::{harness, ok};
    use crate::transport::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_template_query() {
        let h = harness();
        h.transport.reply(
            200,
            ok(json!([{"studentId": 1, "studentCode": "S1", "studentName": "Li", "score": 90}])),
        );

        let rows = entry_template(
            &h.client,
            &ScoreTemplateQuery {
                exam_id: 3,
                course_id: 4,
                class_id: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(rows[0].score, Some(90.0));
        let sent = h.transport.last();
        assert_eq!(sent.url, "/api/grade/score/template");
        assert_eq!(sent.query.len(), 2);
        assert!(sent.query.contains(&("examId".into(), "3".into())));
        assert!(sent.query.contains(&("courseId".into(), "4".into())));
    }

    #[tokio::test]
    async fn test_batch_create_returns_message() {
        let h = harness();
        h.transport.reply(200, json!({"code": 200, "message": "Saved 2 scores", "data": null}));

        let scores = vec![Score::default(), Score::default()];
        let message = batch_create(&h.client, &scores).await.unwrap();

        assert_eq!(message.as_deref(), Some("Saved 2 scores"));
        let sent = h.transport.last();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.body.as_ref().and_then(|b| b.as_array()).map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_rankings_use_query_params() {
        let h = harness();
        h.transport.reply(200, ok(json!(null)));

        calculate_rankings(
            &h.client,
            &RankingQuery {
                exam_id: 1,
                course_id: Some(2),
                grade_id: None,
            },
        )
        .await
        .unwrap();

        let sent = h.transport.last();
        assert_eq!(sent.method, Method::Post);
        assert!(sent.body.is_none());
        assert!(sent.query.contains(&("courseId".into(), "2".into())));
    }

    #[tokio::test]
    async fn test_statistics_and_detail() {
        let h = harness();
        h.transport.reply(200, ok(json!({"totalCount": 30, "validCount": 29, "absentCount": 1, "avgScore": 81.5})));
        h.transport.reply(200, ok(json!({"studentId": 8, "scores": [{"courseId": 2, "score": 77}], "totalScore": 77})));

        let stats = statistics(
            &h.client,
            &StatisticsQuery {
                exam_id: 1,
                course_id: 2,
                ..StatisticsQuery::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(stats.avg_score, Some(81.5));

        let detail = student_detail(
            &h.client,
            &StudentDetailQuery {
                student_id: 8,
                exam_id: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(detail.scores.len(), 1);
        assert_eq!(h.transport.last().url, "/api/grade/score/student-detail");
    }
}
