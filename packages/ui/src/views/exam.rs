//! Exam list with lifecycle controls.

use api::endpoints::exam::{self, ExamFilter};
use api::models::{Exam, ExamStatus, Id};
use api::{dates, Notice, PageQuery};
use dioxus::prelude::*;

use super::common::{confirm, LoadFailed, Pager};
use crate::{use_client, use_notices};

/// Button label for moving an exam to its next status.
fn advance_label(status: ExamStatus) -> Option<&'static str> {
    match status.next()? {
        ExamStatus::InProgress => Some("Start"),
        ExamStatus::Finished => Some("Finish"),
        ExamStatus::Published => Some("Publish"),
        ExamStatus::NotStarted => None,
    }
}

fn type_label(exam: &Exam) -> &'static str {
    exam.exam_type.map(|t| t.label()).unwrap_or_default()
}

fn date_range(exam: &Exam) -> String {
    match (exam.start_date, exam.end_date) {
        (Some(start), Some(end)) => format!("{start} ~ {end}"),
        (Some(start), None) => format!("from {start}"),
        (None, Some(end)) => format!("until {end}"),
        (None, None) => String::new(),
    }
}

#[component]
pub fn ExamManageView() -> Element {
    let client = use_client();
    let mut notices = use_notices();
    let mut query = use_signal(PageQuery::default);
    let mut filter = use_signal(|| ExamFilter {
        school_year: Some(dates::current_school_year()),
        semester: Some(dates::current_semester()),
        ..ExamFilter::default()
    });

    let list_client = client.clone();
    let mut page = use_resource(move || {
        let client = list_client.clone();
        let query = query();
        let filter = filter();
        async move { exam::list(&client, &query, &filter).await }
    });

    let advance_client = client.clone();
    let on_advance = use_callback(move |record: Exam| {
        let client = advance_client.clone();
        spawn(async move {
            if let Ok(status) = exam::advance(&client, &record).await {
                tracing::info!("exam {} is now {}", record.exam_name, status);
                notices.write().push(Notice::success(format!("{}: {}", record.exam_name, status)));
                page.restart();
            }
        });
    });

    let on_delete = use_callback(move |id: Id| {
        if !confirm("Delete this exam?") {
            return;
        }
        let client = client.clone();
        spawn(async move {
            if exam::delete(&client, id).await.is_ok() {
                page.restart();
            }
        });
    });

    let body = match &*page.read() {
        None => rsx! { p { class: "empty", "Loading..." } },
        Some(Err(_)) => rsx! { LoadFailed {} },
        Some(Ok(result)) => {
            let rows = result.records.clone();
            let (current, pages, total) = (result.current, result.pages, result.total);
            rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Code" }
                            th { "Name" }
                            th { "Type" }
                            th { "Term" }
                            th { "Dates" }
                            th { "Status" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for e in rows {
                            tr {
                                key: "{e.audit.id.unwrap_or_default()}",
                                td { "{e.exam_code}" }
                                td { "{e.exam_name}" }
                                td { "{type_label(&e)}" }
                                td { "{e.school_year} / {e.semester.unwrap_or_default()}" }
                                td { "{date_range(&e)}" }
                                td { span { class: "tag", "{e.status}" } }
                                td {
                                    if let Some(label) = advance_label(e.status) {
                                        button {
                                            class: "link-button",
                                            onclick: {
                                                let e = e.clone();
                                                move |_| on_advance.call(e.clone())
                                            },
                                            "{label}"
                                        }
                                    }
                                    if let (Some(id), ExamStatus::NotStarted) = (e.audit.id, e.status) {
                                        button {
                                            class: "link-button danger",
                                            onclick: move |_| on_delete.call(id),
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Pager {
                    current,
                    pages,
                    total,
                    on_change: move |p| query.write().page = p,
                }
            }
        }
    };

    let year_text = filter().school_year.unwrap_or_default();
    let semester_text = filter().semester.map(|s| s.to_string()).unwrap_or_default();

    rsx! {
        div {
            class: "record-page",
            div {
                class: "toolbar",
                input {
                    placeholder: "School year, e.g. 2024-2025",
                    value: "{year_text}",
                    onchange: move |e| {
                        filter.write().school_year = Some(e.value()).filter(|v| !v.trim().is_empty());
                        query.write().page = 1;
                    },
                }
                select {
                    value: "{semester_text}",
                    onchange: move |e| {
                        filter.write().semester = e.value().parse().ok();
                        query.write().page = 1;
                    },
                    option { value: "", "Both semesters" }
                    option { value: "1", "Semester 1" }
                    option { value: "2", "Semester 2" }
                }
            }
            {body}
        }
    }
}
