use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::codes::{ExamStatus, ExamType};
use super::{Audit, Id};

/// An exam sitting across one or more grades and courses.
///
/// The backend keeps `gradeIds` / `courseIds` as comma-separated strings;
/// [`Exam::grade_id_list`] and [`Exam::course_id_list`] parse them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Exam {
    #[serde(flatten)]
    pub audit: Audit,
    pub exam_code: String,
    pub exam_name: String,
    pub exam_type: Option<ExamType>,
    pub school_year: String,
    pub semester: Option<u8>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub grade_ids: Option<String>,
    pub course_ids: Option<String>,
    pub description: Option<String>,
    pub status: ExamStatus,
}

fn parse_ids(raw: Option<&str>) -> Vec<Id> {
    raw.unwrap_or_default()
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect()
}

fn join_ids(ids: &[Id]) -> Option<String> {
    if ids.is_empty() {
        None
    } else {
        Some(ids.iter().map(Id::to_string).collect::<Vec<_>>().join(","))
    }
}

impl Exam {
    pub fn grade_id_list(&self) -> Vec<Id> {
        parse_ids(self.grade_ids.as_deref())
    }

    pub fn course_id_list(&self) -> Vec<Id> {
        parse_ids(self.course_ids.as_deref())
    }

    pub fn set_grade_ids(&mut self, ids: &[Id]) {
        self.grade_ids = join_ids(ids);
    }

    pub fn set_course_ids(&mut self, ids: &[Id]) {
        self.course_ids = join_ids(ids);
    }

    pub fn covers(&self, grade_id: Id, course_id: Id) -> bool {
        self.grade_id_list().contains(&grade_id) && self.course_id_list().contains(&course_id)
    }

    /// Whether the exam's date range includes `day`. Open ends are unbounded.
    pub fn is_running_on(&self, day: NaiveDate) -> bool {
        self.start_date.map_or(true, |start| start <= day) && self.end_date.map_or(true, |end| day <= end)
    }
}
