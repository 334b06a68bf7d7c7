//! Paged tables for the basic-data and system collections that need no more
//! than search, status toggle and delete.

use api::endpoints::crud::{self, Resource};
use api::endpoints::{class, course, role, student, teacher, user};
use api::models::{Id, Record, RecordStatus};
use api::{dates, PageQuery};
use dioxus::prelude::*;

use super::common::{confirm, LoadFailed, Pager, SearchBar, StatusTag};
use crate::use_client;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Classes,
    Students,
    Teachers,
    Courses,
    Users,
    Roles,
}

/// Columns and per-row accessors for one collection.
struct TableLayout<R: 'static> {
    columns: &'static [&'static str],
    cells: fn(&R) -> Vec<String>,
    status: fn(&R) -> RecordStatus,
}

fn opt<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(T::to_string).unwrap_or_default()
}

#[component]
pub fn RecordTableView(kind: RecordKind) -> Element {
    match kind {
        RecordKind::Classes => record_table::<class::Classes>(TableLayout {
            columns: &["Code", "Name", "Grade", "Students"],
            cells: |c| {
                vec![
                    c.class_code.clone(),
                    c.class_name.clone(),
                    opt(&c.grade_id),
                    c.student_count.to_string(),
                ]
            },
            status: |c| c.status,
        }),
        RecordKind::Students => record_table::<student::Students>(TableLayout {
            columns: &["Code", "Name", "Gender", "Age", "Class", "Guardian phone"],
            cells: |s| {
                vec![
                    s.student_code.clone(),
                    s.student_name.clone(),
                    opt(&s.gender),
                    s.birth_date
                        .map(|b| dates::calculate_age(b, dates::today()).to_string())
                        .unwrap_or_default(),
                    opt(&s.class_id),
                    opt(&s.guardian_phone),
                ]
            },
            status: |s| s.status,
        }),
        RecordKind::Teachers => record_table::<teacher::Teachers>(TableLayout {
            columns: &["Code", "Name", "Gender", "Phone", "Position", "Hired"],
            cells: |t| {
                vec![
                    t.teacher_code.clone(),
                    t.teacher_name.clone(),
                    opt(&t.gender),
                    opt(&t.phone),
                    opt(&t.position),
                    opt(&t.hire_date),
                ]
            },
            status: |t| t.status,
        }),
        RecordKind::Courses => record_table::<course::Courses>(TableLayout {
            columns: &["Code", "Name", "Stage", "Type", "Full", "Pass"],
            cells: |c| {
                vec![
                    c.course_code.clone(),
                    c.course_name.clone(),
                    opt(&c.stage),
                    opt(&c.course_type),
                    opt(&c.full_score),
                    opt(&c.pass_score),
                ]
            },
            status: |c| c.status,
        }),
        RecordKind::Users => record_table::<user::Users>(TableLayout {
            columns: &["Username", "Name", "Phone", "Roles", "Last login"],
            cells: |u| {
                vec![
                    u.username.clone(),
                    u.display_name().to_string(),
                    opt(&u.phone),
                    u.roles
                        .iter()
                        .map(|r| r.role_name.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                    u.last_login_time
                        .as_deref()
                        .map(dates::relative_time_str)
                        .unwrap_or_default(),
                ]
            },
            status: |u| u.status,
        }),
        RecordKind::Roles => record_table::<role::Roles>(TableLayout {
            columns: &["Code", "Name", "Description"],
            cells: |r| vec![r.role_code.clone(), r.role_name.clone(), opt(&r.description)],
            status: |r| r.status,
        }),
    }
}

fn record_table<R>(layout: TableLayout<R::Record>) -> Element
where
    R: Resource + 'static,
    R::Record: Record + Clone + 'static,
    R::Filter: 'static,
{
    let client = use_client();
    let mut query = use_signal(PageQuery::default);

    let list_client = client.clone();
    let mut page = use_resource(move || {
        let client = list_client.clone();
        let query = query();
        async move { crud::list::<R, _>(&client, &query, &R::Filter::default()).await }
    });

    let toggle_client = client.clone();
    let on_toggle = use_callback(move |(id, status): (Id, RecordStatus)| {
        let client = toggle_client.clone();
        spawn(async move {
            let target = status.toggled();
            if crud::update_status::<R, _>(&client, id, i32::from(target)).await.is_ok() {
                tracing::info!("{} {} set to {}", R::BASE, id, target);
                page.restart();
            }
        });
    });

    let on_delete = use_callback(move |id: Id| {
        if !confirm("Delete this record?") {
            return;
        }
        let client = client.clone();
        spawn(async move {
            if crud::delete::<R, _>(&client, id).await.is_ok() {
                page.restart();
            }
        });
    });

    let body = match &*page.read() {
        None => rsx! { p { class: "empty", "Loading..." } },
        Some(Err(_)) => rsx! { LoadFailed {} },
        Some(Ok(result)) => {
            let rows: Vec<(Option<Id>, Vec<String>, RecordStatus)> = result
                .records
                .iter()
                .map(|r| (r.id(), (layout.cells)(r), (layout.status)(r)))
                .collect();
            let (current, pages, total) = (result.current, result.pages, result.total);
            let span = layout.columns.len() + 2;
            rsx! {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            for column in layout.columns.iter() {
                                th { "{column}" }
                            }
                            th { "Status" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr { td { colspan: "{span}", class: "empty", "No records" } }
                        }
                        for (i, (id, cells, status)) in rows.into_iter().enumerate() {
                            tr {
                                key: "{i}",
                                for cell in cells {
                                    td { "{cell}" }
                                }
                                td { StatusTag { status } }
                                td {
                                    if let Some(id) = id {
                                        button {
                                            class: "link-button",
                                            onclick: move |_| on_toggle.call((id, status)),
                                            if status.is_enabled() { "Disable" } else { "Enable" }
                                        }
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

    rsx! {
        div {
            class: "record-page",
            SearchBar {
                placeholder: "Keyword",
                on_search: move |keyword: String| {
                    let mut q = query.write();
                    q.keyword = Some(keyword);
                    q.page = 1;
                },
            }
            {body}
        }
    }
}
