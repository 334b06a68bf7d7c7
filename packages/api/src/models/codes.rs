//! Small integer codes the backend uses for enumerations.
//!
//! Each enum serializes as its numeric code and carries an English label for
//! display.

use serde::{Deserialize, Serialize};

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $code:literal => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(self) -> i32 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value.code()
            }
        }

        impl TryFrom<i32> for $name {
            type Error = String;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok($name::$variant),)+
                    other => Err(format!("unknown {} code {}", stringify!($name), other)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

code_enum! {
    /// Enabled/disabled flag shared by every basic-data record.
    RecordStatus {
        Disabled = 0 => "Disabled",
        Enabled = 1 => "Enabled",
    }
}

impl Default for RecordStatus {
    fn default() -> Self {
        RecordStatus::Enabled
    }
}

impl RecordStatus {
    pub fn is_enabled(self) -> bool {
        self == RecordStatus::Enabled
    }

    pub fn toggled(self) -> Self {
        match self {
            RecordStatus::Enabled => RecordStatus::Disabled,
            RecordStatus::Disabled => RecordStatus::Enabled,
        }
    }
}

code_enum! {
    /// School stage a grade or course belongs to.
    Stage {
        Primary = 1 => "Primary",
        Junior = 2 => "Junior high",
        Senior = 3 => "Senior high",
    }
}

code_enum! {
    Gender {
        Female = 0 => "Female",
        Male = 1 => "Male",
    }
}

code_enum! {
    CourseType {
        Main = 1 => "Main subject",
        Minor = 2 => "Minor subject",
    }
}

code_enum! {
    /// How a course is marked.
    ScoreType {
        Percentage = 1 => "Out of 100",
        Graded = 2 => "Letter grade",
        OutOf120 = 3 => "Out of 120",
    }
}

code_enum! {
    ExamType {
        Monthly = 1 => "Monthly",
        Midterm = 2 => "Midterm",
        Final = 3 => "Final",
        Mock = 4 => "Mock",
        Other = 5 => "Other",
    }
}

code_enum! {
    /// Exam lifecycle. Transitions only move one step forward.
    ExamStatus {
        NotStarted = 0 => "Not started",
        InProgress = 1 => "In progress",
        Finished = 2 => "Finished",
        Published = 3 => "Published",
    }
}

impl Default for ExamStatus {
    fn default() -> Self {
        ExamStatus::NotStarted
    }
}

impl ExamStatus {
    /// The only status this one may move to, if any.
    pub fn next(self) -> Option<ExamStatus> {
        match self {
            ExamStatus::NotStarted => Some(ExamStatus::InProgress),
            ExamStatus::InProgress => Some(ExamStatus::Finished),
            ExamStatus::Finished => Some(ExamStatus::Published),
            ExamStatus::Published => None,
        }
    }

    pub fn can_transition_to(self, target: ExamStatus) -> bool {
        self.next() == Some(target)
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Scores may only be entered while the exam is running or just finished.
    pub fn accepts_scores(self) -> bool {
        matches!(self, ExamStatus::InProgress | ExamStatus::Finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_json() {
        assert_eq!(serde_json::to_string(&Stage::Junior).unwrap(), "2");
        let stage: Stage = serde_json::from_str("3").unwrap();
        assert_eq!(stage, Stage::Senior);
        assert!(serde_json::from_str::<Stage>("7").is_err());
    }

    #[test]
    fn test_labels_and_all() {
        assert_eq!(ExamType::ALL.len(), 5);
        assert_eq!(ExamType::Final.to_string(), "Final");
        assert_eq!(Gender::try_from(0), Ok(Gender::Female));
    }

    #[test]
    fn test_record_status_toggle() {
        assert_eq!(RecordStatus::default(), RecordStatus::Enabled);
        assert_eq!(RecordStatus::Enabled.toggled(), RecordStatus::Disabled);
        assert!(!RecordStatus::Disabled.is_enabled());
    }

    #[test]
    fn test_exam_status_moves_one_step_forward() {
        assert!(ExamStatus::NotStarted.can_transition_to(ExamStatus::InProgress));
        assert!(!ExamStatus::NotStarted.can_transition_to(ExamStatus::Finished));
        assert!(!ExamStatus::Finished.can_transition_to(ExamStatus::InProgress));
        assert!(ExamStatus::Finished.can_transition_to(ExamStatus::Published));
        assert!(ExamStatus::Published.is_terminal());
        assert!(ExamStatus::InProgress.accepts_scores());
        assert!(!ExamStatus::Published.accepts_scores());
    }
}
