mod common;
pub use common::{confirm, LoadFailed, Pager, SearchBar, StatusTag};

mod selection;
pub use selection::IdSelect;

mod login;
pub use login::LoginView;

mod dashboard;
pub use dashboard::DashboardView;

mod grade;
pub use grade::GradeManageView;

mod exam;
pub use exam::ExamManageView;

mod score_entry;
pub use score_entry::ScoreEntryView;

mod statistics;
pub use statistics::ScoreStatisticsView;

mod records;
pub use records::{RecordKind, RecordTableView};
