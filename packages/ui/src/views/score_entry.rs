//! Score entry: pick an exam and course, load the roster, type marks, save
//! them in one batch and recompute rankings.

use api::endpoints::{class, course, exam, score};
use api::models::{Course, Exam, Id, RankingQuery, Score, ScoreEntry, ScoreTemplateQuery};
use api::Notice;
use dioxus::prelude::*;

use super::selection::IdSelect;
use crate::{use_client, use_notices};

/// Rows ready to send, or the first student whose mark is out of range.
fn collect_scores(
    entries: &[ScoreEntry],
    course: Option<&Course>,
    exam_id: Id,
    course_id: Id,
) -> Result<Vec<Score>, String> {
    let mut scores = Vec::new();
    for entry in entries.iter().filter(|e| e.is_filled()) {
        if let (Some(course), Some(mark), false) = (course, entry.score, entry.absent) {
            if !course.accepts(mark) {
                return Err(format!("Score for {} is out of range", entry.student_name));
            }
        }
        scores.push(entry.to_score(exam_id, course_id, None));
    }
    Ok(scores)
}

fn mark_text(score: Option<f64>) -> String {
    score.map(|s| s.to_string()).unwrap_or_default()
}

#[component]
pub fn ScoreEntryView() -> Element {
    let client = use_client();
    let mut notices = use_notices();

    let mut exam_id = use_signal(|| None::<Id>);
    let mut course_id = use_signal(|| None::<Id>);
    let mut class_id = use_signal(|| None::<Id>);
    let mut entries = use_signal(Vec::<ScoreEntry>::new);
    let mut busy = use_signal(|| false);

    let c = client.clone();
    let exams = use_resource(move || {
        let client = c.clone();
        async move { exam::current(&client).await.unwrap_or_default() }
    });
    let c = client.clone();
    let courses = use_resource(move || {
        let client = c.clone();
        async move { course::active(&client).await.unwrap_or_default() }
    });
    let c = client.clone();
    let classes = use_resource(move || {
        let client = c.clone();
        async move { class::all_active(&client).await.unwrap_or_default() }
    });

    let selected_exam: Option<Exam> = exams()
        .unwrap_or_default()
        .into_iter()
        .find(|e| e.audit.id.is_some() && e.audit.id == exam_id());
    let exam_courses: Vec<Course> = courses()
        .unwrap_or_default()
        .into_iter()
        .filter(|c| match (&selected_exam, c.audit.id) {
            (Some(e), Some(id)) => e.course_id_list().is_empty() || e.course_id_list().contains(&id),
            _ => true,
        })
        .collect();
    let selected_course: Option<Course> = exam_courses
        .iter()
        .find(|c| c.audit.id.is_some() && c.audit.id == course_id())
        .cloned();
    let editable = selected_exam
        .as_ref()
        .is_some_and(|e| e.status.accepts_scores());

    let load_client = client.clone();
    let on_load = move |_| {
        let client = load_client.clone();
        async move {
            let (Some(exam_id), Some(course_id)) = (exam_id(), course_id()) else {
                notices.write().push(Notice::warning("Choose an exam and a course first"));
                return;
            };
            busy.set(true);
            let query = ScoreTemplateQuery {
                exam_id,
                course_id,
                class_id: class_id(),
            };
            if let Ok(rows) = score::entry_template(&client, &query).await {
                tracing::debug!("loaded {} score rows", rows.len());
                entries.set(rows);
            }
            busy.set(false);
        }
    };

    let save_client = client.clone();
    let save_course = selected_course.clone();
    let on_save = move |_| {
        let client = save_client.clone();
        let course = save_course.clone();
        async move {
            let (Some(exam_id), Some(course_id)) = (exam_id(), course_id()) else {
                return;
            };
            let scores = match collect_scores(&entries(), course.as_ref(), exam_id, course_id) {
                Ok(scores) => scores,
                Err(problem) => {
                    notices.write().push(Notice::warning(problem));
                    return;
                }
            };
            busy.set(true);
            if let Ok(message) = score::batch_create(&client, &scores).await {
                let message = message.unwrap_or_else(|| format!("Saved {} scores", scores.len()));
                notices.write().push(Notice::success(message));
            }
            busy.set(false);
        }
    };

    let on_rank = move |_| {
        let client = client.clone();
        async move {
            let Some(exam_id) = exam_id() else { return };
            let query = RankingQuery {
                exam_id,
                course_id: course_id(),
                grade_id: None,
            };
            if score::calculate_rankings(&client, &query).await.is_ok() {
                notices.write().push(Notice::success("Rankings updated"));
            }
        }
    };

    let exam_options: Vec<(Id, String)> = exams()
        .unwrap_or_default()
        .iter()
        .filter_map(|e| Some((e.audit.id?, format!("{} ({})", e.exam_name, e.status))))
        .collect();
    let course_options: Vec<(Id, String)> = exam_courses
        .iter()
        .filter_map(|c| Some((c.audit.id?, c.course_name.clone())))
        .collect();
    let class_options: Vec<(Id, String)> = classes()
        .unwrap_or_default()
        .iter()
        .filter_map(|c| Some((c.audit.id?, c.class_name.clone())))
        .collect();
    let full_score = selected_course
        .as_ref()
        .and_then(|c| c.full_score)
        .map(|f| f.to_string())
        .unwrap_or_default();
    let rows = entries();

    rsx! {
        div {
            class: "record-page",
            div {
                class: "toolbar",
                IdSelect {
                    placeholder: "Exam",
                    options: exam_options,
                    selected: exam_id(),
                    on_select: move |id| {
                        exam_id.set(id);
                        course_id.set(None);
                        entries.write().clear();
                    },
                }
                IdSelect {
                    placeholder: "Course",
                    options: course_options,
                    selected: course_id(),
                    on_select: move |id| {
                        course_id.set(id);
                        entries.write().clear();
                    },
                }
                IdSelect {
                    placeholder: "All classes",
                    options: class_options,
                    selected: class_id(),
                    on_select: move |id| class_id.set(id),
                }
                button { disabled: busy(), onclick: on_load, "Load roster" }
            }
            if selected_exam.is_some() && !editable {
                p { class: "muted", "Scores can only be entered while an exam is in progress or finished." }
            }
            if !rows.is_empty() {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Student code" }
                            th { "Name" }
                            th { "Score (max {full_score})" }
                            th { "Absent" }
                        }
                    }
                    tbody {
                        for (i, row) in rows.into_iter().enumerate() {
                            tr {
                                key: "{row.student_id}",
                                td { "{row.student_code}" }
                                td { "{row.student_name}" }
                                td {
                                    input {
                                        r#type: "number",
                                        step: "0.5",
                                        min: "0",
                                        disabled: !editable || row.absent,
                                        value: "{mark_text(row.score)}",
                                        oninput: move |e| {
                                            entries.write()[i].score = e.value().trim().parse().ok();
                                        },
                                    }
                                }
                                td {
                                    input {
                                        r#type: "checkbox",
                                        disabled: !editable,
                                        checked: row.absent,
                                        onchange: move |e| {
                                            entries.write()[i].absent = e.checked();
                                        },
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    class: "toolbar",
                    button { class: "primary", disabled: busy() || !editable, onclick: on_save, "Save scores" }
                    button { disabled: busy(), onclick: on_rank, "Recalculate rankings" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(student_id: Id, score: Option<f64>, absent: bool) -> ScoreEntry {
        ScoreEntry {
            student_id,
            student_name: format!("S{student_id}"),
            score,
            absent,
            ..ScoreEntry::default()
        }
    }

    #[test]
    fn test_collect_skips_blank_rows() {
        let rows = vec![entry(1, Some(90.0), false), entry(2, None, false), entry(3, None, true)];
        let scores = collect_scores(&rows, None, 7, 8).unwrap();
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].exam_id, Some(7));
        assert_eq!(scores[0].course_id, Some(8));
        assert!(scores[1].is_absent());
    }

    #[test]
    fn test_collect_rejects_out_of_range() {
        let course = Course {
            full_score: Some(100.0),
            ..Course::default()
        };
        let rows = vec![entry(1, Some(101.0), false)];
        assert_eq!(
            collect_scores(&rows, Some(&course), 1, 1).unwrap_err(),
            "Score for S1 is out of range"
        );
        // An absent student's stale mark is ignored.
        let rows = vec![entry(1, Some(101.0), true)];
        assert!(collect_scores(&rows, Some(&course), 1, 1).is_ok());
    }
}
