//! Scores and the query/summary types around them.

use serde::{Deserialize, Serialize};

use super::basic::Course;
use super::{Audit, Id};

/// One student's mark for one course in one exam.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Score {
    #[serde(flatten)]
    pub audit: Audit,
    pub exam_id: Option<Id>,
    pub student_id: Option<Id>,
    pub course_id: Option<Id>,
    pub score: Option<f64>,
    pub grade_level: Option<String>,
    pub class_rank: Option<i32>,
    pub grade_rank: Option<i32>,
    /// 1 when the student missed the exam.
    pub absent: i32,
    pub teacher_id: Option<Id>,
}

impl Score {
    pub fn is_absent(&self) -> bool {
        self.absent == 1
    }

    /// The mark, if it counts towards statistics.
    pub fn valid_score(&self) -> Option<f64> {
        if self.is_absent() {
            None
        } else {
            self.score
        }
    }
}

/// Selects the roster for score entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTemplateQuery {
    pub exam_id: Id,
    pub course_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<Id>,
}

/// One row of the score-entry template: a student plus any mark already
/// recorded.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreEntry {
    pub score_id: Option<Id>,
    pub student_id: Id,
    pub student_code: String,
    pub student_name: String,
    pub class_id: Option<Id>,
    pub score: Option<f64>,
    pub absent: bool,
    pub remark: Option<String>,
}

impl ScoreEntry {
    /// Build the payload row for `/grade/score/batch`. Absent students are
    /// saved without a mark.
    pub fn to_score(&self, exam_id: Id, course_id: Id, teacher_id: Option<Id>) -> Score {
        Score {
            audit: Audit {
                id: self.score_id,
                remark: self.remark.clone(),
                ..Audit::default()
            },
            exam_id: Some(exam_id),
            student_id: Some(self.student_id),
            course_id: Some(course_id),
            score: if self.absent { None } else { self.score },
            absent: i32::from(self.absent),
            teacher_id,
            ..Score::default()
        }
    }

    /// Rows with neither a mark nor an absence are not worth sending.
    pub fn is_filled(&self) -> bool {
        self.absent || self.score.is_some()
    }
}

/// Scope for ranking recalculation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingQuery {
    pub exam_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_id: Option<Id>,
}

/// Scope for a statistics report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsQuery {
    pub exam_id: Id,
    pub course_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<Id>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_id: Option<Id>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetailQuery {
    pub student_id: Id,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_id: Option<Id>,
}

/// Summary of a set of scores. Score and rate fields are absent when no
/// valid score exists or the course has no matching threshold.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreStatistics {
    pub total_count: u32,
    pub valid_count: u32,
    pub absent_count: u32,
    pub max_score: Option<f64>,
    pub min_score: Option<f64>,
    pub avg_score: Option<f64>,
    pub pass_count: Option<u32>,
    pub pass_rate: Option<f64>,
    pub good_count: Option<u32>,
    pub good_rate: Option<f64>,
    pub excellent_count: Option<u32>,
    pub excellent_rate: Option<f64>,
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

impl ScoreStatistics {
    /// Summarise `scores` against `course`'s thresholds. Averages are rounded
    /// to two places and rates are percentages with two decimals.
    pub fn compute(scores: &[Score], course: &Course) -> Self {
        let valid: Vec<f64> = scores.iter().filter_map(Score::valid_score).collect();
        let mut stats = ScoreStatistics {
            total_count: scores.len() as u32,
            valid_count: valid.len() as u32,
            absent_count: scores.iter().filter(|s| s.is_absent()).count() as u32,
            ..ScoreStatistics::default()
        };
        if valid.is_empty() {
            return stats;
        }

        let n = valid.len() as f64;
        stats.max_score = valid.iter().copied().reduce(f64::max);
        stats.min_score = valid.iter().copied().reduce(f64::min);
        stats.avg_score = Some(round_to(valid.iter().sum::<f64>() / n, 2));

        let band = |threshold: Option<f64>| {
            threshold.map(|t| {
                let count = valid.iter().filter(|&&s| s >= t).count();
                (count as u32, round_to(count as f64 / n * 100.0, 2))
            })
        };
        if let Some((count, rate)) = band(course.pass_score) {
            stats.pass_count = Some(count);
            stats.pass_rate = Some(rate);
        }
        if let Some((count, rate)) = band(course.good_score) {
            stats.good_count = Some(count);
            stats.good_rate = Some(rate);
        }
        if let Some((count, rate)) = band(course.excellent_score) {
            stats.excellent_count = Some(count);
            stats.excellent_rate = Some(rate);
        }
        stats
    }
}

/// One student's results for an exam.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudentScoreDetail {
    pub student_id: Option<Id>,
    pub student_name: Option<String>,
    pub exam_id: Option<Id>,
    pub scores: Vec<Score>,
    pub total_score: Option<f64>,
    pub class_rank: Option<i32>,
    pub grade_rank: Option<i32>,
}
