//! Basic school data: grades, classes, students, teachers and courses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::codes::{CourseType, Gender, RecordStatus, ScoreType, Stage};
use super::{Audit, Id};

/// A year group, e.g. "Grade 7" in the 2024-2025 school year.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Grade {
    #[serde(flatten)]
    pub audit: Audit,
    pub grade_name: String,
    pub grade_code: String,
    pub stage: Option<Stage>,
    pub grade_level: Option<i32>,
    pub school_year: String,
    pub sort_order: i32,
    pub status: RecordStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchoolClass {
    #[serde(flatten)]
    pub audit: Audit,
    pub class_name: String,
    pub class_code: String,
    pub grade_id: Option<Id>,
    pub head_teacher_id: Option<Id>,
    pub student_count: i32,
    pub sort_order: i32,
    pub status: RecordStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Student {
    #[serde(flatten)]
    pub audit: Audit,
    pub student_code: String,
    pub student_name: String,
    pub gender: Option<Gender>,
    pub id_card: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub enrollment_date: Option<NaiveDate>,
    pub class_id: Option<Id>,
    pub guardian_name: Option<String>,
    pub guardian_relation: Option<String>,
    pub guardian_phone: Option<String>,
    pub address: Option<String>,
    pub user_id: Option<Id>,
    pub status: RecordStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Teacher {
    #[serde(flatten)]
    pub audit: Audit,
    pub teacher_code: String,
    pub teacher_name: String,
    pub gender: Option<Gender>,
    pub id_card: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub hire_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub education: Option<String>,
    pub major: Option<String>,
    pub user_id: Option<Id>,
    pub status: RecordStatus,
}

/// A subject with its marking thresholds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Course {
    #[serde(flatten)]
    pub audit: Audit,
    pub course_code: String,
    pub course_name: String,
    pub stage: Option<Stage>,
    pub course_type: Option<CourseType>,
    pub full_score: Option<f64>,
    pub pass_score: Option<f64>,
    pub good_score: Option<f64>,
    pub excellent_score: Option<f64>,
    pub score_type: Option<ScoreType>,
    pub sort_order: i32,
    pub status: RecordStatus,
}

/// Band a mark falls into for a given course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreLevel {
    Fail,
    Pass,
    Good,
    Excellent,
}

impl ScoreLevel {
    pub fn label(self) -> &'static str {
        match self {
            ScoreLevel::Fail => "Fail",
            ScoreLevel::Pass => "Pass",
            ScoreLevel::Good => "Good",
            ScoreLevel::Excellent => "Excellent",
        }
    }
}

impl Course {
    /// Highest band whose threshold `score` reaches. Thresholds that are not
    /// configured are skipped.
    pub fn score_level(&self, score: f64) -> ScoreLevel {
        let reaches = |threshold: Option<f64>| threshold.is_some_and(|t| score >= t);
        if reaches(self.excellent_score) {
            ScoreLevel::Excellent
        } else if reaches(self.good_score) {
            ScoreLevel::Good
        } else if reaches(self.pass_score) {
            ScoreLevel::Pass
        } else {
            ScoreLevel::Fail
        }
    }

    /// Whether `score` lies within `0..=full_score`.
    pub fn accepts(&self, score: f64) -> bool {
        score >= 0.0 && self.full_score.map_or(true, |full| score <= full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_decodes_backend_row() {
        let grade: Grade = serde_json::from_str(
            r#"{"id":3,"gradeName":"Grade 7","gradeCode":"G7","stage":2,"gradeLevel":7,
                "schoolYear":"2024-2025","sortOrder":1,"status":1,
                "createTime":"2024-09-01 08:00:00","deleted":0}"#,
        )
        .unwrap();
        assert_eq!(grade.audit.id, Some(3));
        assert_eq!(grade.stage, Some(Stage::Junior));
        assert_eq!(grade.status, RecordStatus::Enabled);
        assert_eq!(grade.audit.create_time.as_deref(), Some("2024-09-01 08:00:00"));
    }

    #[test]
    fn test_student_dates() {
        let student: Student = serde_json::from_str(
            r#"{"studentCode":"S1","studentName":"Li","gender":0,"birthDate":"2012-05-01","status":0}"#,
        )
        .unwrap();
        assert_eq!(student.gender, Some(Gender::Female));
        assert_eq!(student.birth_date, NaiveDate::from_ymd_opt(2012, 5, 1));
        assert_eq!(student.status, RecordStatus::Disabled);
    }

    #[test]
    fn test_course_score_levels() {
        let course = Course {
            full_score: Some(100.0),
            pass_score: Some(60.0),
            good_score: Some(80.0),
            excellent_score: Some(90.0),
            ..Course::default()
        };
        assert_eq!(course.score_level(59.5), ScoreLevel::Fail);
        assert_eq!(course.score_level(60.0), ScoreLevel::Pass);
        assert_eq!(course.score_level(85.0), ScoreLevel::Good);
        assert_eq!(course.score_level(90.0), ScoreLevel::Excellent);
        assert!(course.accepts(100.0));
        assert!(!course.accepts(100.5));
        assert!(!course.accepts(-1.0));
    }

    #[test]
    fn test_course_without_thresholds() {
        let course = Course {
            pass_score: Some(72.0),
            ..Course::default()
        };
        assert_eq!(course.score_level(119.0), ScoreLevel::Pass);
        assert!(course.accepts(500.0));
    }
}
