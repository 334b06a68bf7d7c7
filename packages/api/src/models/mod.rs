//! # Domain records exchanged with the backend
//!
//! Every record mirrors one backend entity, using camelCase wire names.
//! Fields common to all of them (`id`, audit timestamps, soft-delete flag) live
//! in [`Audit`] and are flattened into each record.
//!
//! | Module | Records |
//! |--------|---------|
//! | `basic` | [`Grade`], [`SchoolClass`], [`Student`], [`Teacher`], [`Course`] |
//! | `exam` | [`Exam`] |
//! | `score` | [`Score`], [`ScoreEntry`], [`ScoreStatistics`], [`StudentScoreDetail`] and the query types |
//! | `system` | [`UserAccount`], [`Role`], [`Permission`] |
//! | `codes` | numeric enumerations such as [`RecordStatus`] and [`ExamStatus`] |
//!
//! Timestamps are kept as the strings the server sends; use
//! [`crate::dates::parse_datetime`] to interpret them. Calendar dates decode
//! into [`chrono::NaiveDate`].

mod basic;
mod codes;
mod exam;
mod score;
mod system;

use serde::{Deserialize, Serialize};

pub use basic::{Course, Grade, SchoolClass, ScoreLevel, Student, Teacher};
pub use codes::{CourseType, ExamStatus, ExamType, Gender, RecordStatus, ScoreType, Stage};
pub use exam::Exam;
pub use score::{
    RankingQuery, Score, ScoreEntry, ScoreStatistics, ScoreTemplateQuery, StatisticsQuery,
    StudentDetailQuery, StudentScoreDetail,
};
pub use system::{Permission, Role, UserAccount};

/// Primary key type used by every backend table.
pub type Id = i64;

/// Columns shared by every backend entity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Audit {
    pub id: Option<Id>,
    pub create_time: Option<String>,
    pub create_by: Option<Id>,
    pub update_time: Option<String>,
    pub update_by: Option<Id>,
    pub deleted: Option<i32>,
    pub remark: Option<String>,
}

/// Anything with a server-assigned id.
pub trait Record {
    fn id(&self) -> Option<Id>;
}

macro_rules! impl_record {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Record for $ty {
                fn id(&self) -> Option<Id> {
                    self.audit.id
                }
            }
        )+
    };
}

impl_record!(Grade, SchoolClass, Student, Teacher, Course, Exam, Score, UserAccount, Role, Permission);
