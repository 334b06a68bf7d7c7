//! Score statistics for one exam and course, plus a per-student lookup.

use api::endpoints::{class, course, exam, score, student};
use api::models::{Id, ScoreStatistics, StatisticsQuery, StudentDetailQuery, StudentScoreDetail};
use api::{dates, Notice};
use dioxus::prelude::*;

use super::selection::IdSelect;
use crate::{use_client, use_notices};

fn number(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

fn rate(count: Option<u32>, rate: Option<f64>) -> String {
    match (count, rate) {
        (Some(count), Some(rate)) => format!("{count} ({rate:.2}%)"),
        _ => "-".to_string(),
    }
}

/// Label/value pairs for the summary cards.
fn summary_cards(stats: &ScoreStatistics) -> Vec<(&'static str, String)> {
    vec![
        ("Students", stats.total_count.to_string()),
        ("Sat", stats.valid_count.to_string()),
        ("Absent", stats.absent_count.to_string()),
        ("Average", number(stats.avg_score)),
        ("Highest", number(stats.max_score)),
        ("Lowest", number(stats.min_score)),
        ("Pass", rate(stats.pass_count, stats.pass_rate)),
        ("Good", rate(stats.good_count, stats.good_rate)),
        ("Excellent", rate(stats.excellent_count, stats.excellent_rate)),
    ]
}

#[component]
pub fn ScoreStatisticsView() -> Element {
    let client = use_client();
    let mut notices = use_notices();

    let mut exam_id = use_signal(|| None::<Id>);
    let mut course_id = use_signal(|| None::<Id>);
    let mut class_id = use_signal(|| None::<Id>);
    let mut stats = use_signal(|| None::<ScoreStatistics>);
    let mut student_code = use_signal(String::new);
    let mut detail = use_signal(|| None::<StudentScoreDetail>);

    let c = client.clone();
    let exams = use_resource(move || {
        let client = c.clone();
        async move {
            exam::by_term(&client, &dates::current_school_year(), dates::current_semester())
                .await
                .unwrap_or_default()
        }
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

    let stats_client = client.clone();
    let on_query = move |_| {
        let client = stats_client.clone();
        async move {
            let (Some(exam_id), Some(course_id)) = (exam_id(), course_id()) else {
                notices.write().push(Notice::warning("Choose an exam and a course first"));
                return;
            };
            let query = StatisticsQuery {
                exam_id,
                course_id,
                class_id: class_id(),
                grade_id: None,
            };
            stats.set(score::statistics(&client, &query).await.ok());
        }
    };

    let on_lookup = move |_| {
        let client = client.clone();
        async move {
            let code = student_code().trim().to_string();
            if code.is_empty() {
                return;
            }
            let Ok(found) = student::by_code(&client, &code).await else {
                detail.set(None);
                return;
            };
            let Some(student_id) = found.audit.id else { return };
            let query = StudentDetailQuery {
                student_id,
                exam_id: exam_id(),
            };
            detail.set(score::student_detail(&client, &query).await.ok());
        }
    };

    let exam_options: Vec<(Id, String)> = exams()
        .unwrap_or_default()
        .iter()
        .filter_map(|e| Some((e.audit.id?, e.exam_name.clone())))
        .collect();
    let all_courses = courses().unwrap_or_default();
    let course_options: Vec<(Id, String)> = all_courses
        .iter()
        .filter_map(|c| Some((c.audit.id?, c.course_name.clone())))
        .collect();
    let class_options: Vec<(Id, String)> = classes()
        .unwrap_or_default()
        .iter()
        .filter_map(|c| Some((c.audit.id?, c.class_name.clone())))
        .collect();
    let course_name = |id: Option<Id>| {
        all_courses
            .iter()
            .find(|c| c.audit.id.is_some() && c.audit.id == id)
            .map(|c| c.course_name.clone())
            .unwrap_or_else(|| id.map(|i| i.to_string()).unwrap_or_default())
    };
    let cards = stats().as_ref().map(summary_cards).unwrap_or_default();
    let detail_rows: Vec<(String, String, String)> = detail()
        .map(|d| {
            d.scores
                .iter()
                .map(|s| {
                    let mark = if s.is_absent() { "Absent".to_string() } else { number(s.score) };
                    let rank = s.class_rank.map(|r| r.to_string()).unwrap_or_default();
                    (course_name(s.course_id), mark, rank)
                })
                .collect()
        })
        .unwrap_or_default();
    let detail_total = detail().map(|d| number(d.total_score)).unwrap_or_default();

    rsx! {
        div {
            class: "record-page",
            div {
                class: "toolbar",
                IdSelect {
                    placeholder: "Exam",
                    options: exam_options,
                    selected: exam_id(),
                    on_select: move |id| exam_id.set(id),
                }
                IdSelect {
                    placeholder: "Course",
                    options: course_options,
                    selected: course_id(),
                    on_select: move |id| course_id.set(id),
                }
                IdSelect {
                    placeholder: "All classes",
                    options: class_options,
                    selected: class_id(),
                    on_select: move |id| class_id.set(id),
                }
                button { class: "primary", onclick: on_query, "Show statistics" }
            }
            if !cards.is_empty() {
                div {
                    class: "stat-cards",
                    for (label, value) in cards {
                        div {
                            key: "{label}",
                            class: "stat-card",
                            div { class: "stat-value", "{value}" }
                            div { class: "stat-label", "{label}" }
                        }
                    }
                }
            }
            section {
                h3 { "Student results" }
                div {
                    class: "toolbar",
                    input {
                        placeholder: "Student code",
                        value: "{student_code}",
                        oninput: move |e| student_code.set(e.value()),
                    }
                    button { onclick: on_lookup, "Look up" }
                }
                if !detail_rows.is_empty() {
                    table {
                        class: "data-table",
                        thead {
                            tr {
                                th { "Course" }
                                th { "Score" }
                                th { "Class rank" }
                            }
                        }
                        tbody {
                            for (i, (course, mark, rank)) in detail_rows.into_iter().enumerate() {
                                tr {
                                    key: "{i}",
                                    td { "{course}" }
                                    td { "{mark}" }
                                    td { "{rank}" }
                                }
                            }
                        }
                    }
                    p { "Total: {detail_total}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_cards_format_missing_values() {
        let stats = ScoreStatistics {
            total_count: 3,
            valid_count: 2,
            absent_count: 1,
            avg_score: Some(72.5),
            pass_count: Some(1),
            pass_rate: Some(50.0),
            ..ScoreStatistics::default()
        };
        let cards = summary_cards(&stats);
        let value = |label: &str| cards.iter().find(|(l, _)| *l == label).map(|(_, v)| v.clone());
        assert_eq!(value("Average").as_deref(), Some("72.50"));
        assert_eq!(value("Pass").as_deref(), Some("1 (50.00%)"));
        assert_eq!(value("Good").as_deref(), Some("-"));
        assert_eq!(value("Highest").as_deref(), Some("-"));
    }
}
