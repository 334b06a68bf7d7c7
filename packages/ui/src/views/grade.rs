//! Grade management: paged list filtered by school year, with create,
//! status toggle and delete.

use api::endpoints::grade::{self, GradeFilter};
use api::models::{Grade, Id, Stage};
use api::{dates, Notice, PageQuery};
use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

use super::common::{confirm, LoadFailed, Pager, StatusTag};
use crate::{use_client, use_notices};

/// The current school year and the two before it, newest first.
fn recent_school_years() -> Vec<String> {
    school_years_before(dates::today(), 3)
}

/// `count` school years ending with the one containing `day`.
fn school_years_before(day: NaiveDate, count: i32) -> Vec<String> {
    (0..count)
        .filter_map(|back| NaiveDate::from_ymd_opt(day.year() - back, day.month(), 1))
        .map(dates::school_year)
        .collect()
}

fn stage_label(stage: Option<Stage>) -> &'static str {
    stage.map(Stage::label).unwrap_or_default()
}

#[component]
pub fn GradeManageView() -> Element {
    let client = use_client();
    let mut notices = use_notices();
    let mut query = use_signal(PageQuery::default);
    let mut school_year = use_signal(dates::current_school_year);
    let mut draft = use_signal(|| Grade {
        school_year: dates::current_school_year(),
        ..Grade::default()
    });

    let list_client = client.clone();
    let mut page = use_resource(move || {
        let client = list_client.clone();
        let query = query();
        let filter = GradeFilter {
            school_year: Some(school_year()).filter(|y| !y.is_empty()),
            ..GradeFilter::default()
        };
        async move { grade::list(&client, &query, &filter).await }
    });

    let toggle_client = client.clone();
    let on_toggle = use_callback(move |g: Grade| {
        let client = toggle_client.clone();
        spawn(async move {
            let Some(id) = g.audit.id else { return };
            if grade::update_status(&client, id, g.status.toggled()).await.is_ok() {
                page.restart();
            }
        });
    });

    let delete_client = client.clone();
    let on_delete = use_callback(move |id: Id| {
        if !confirm("Delete this grade?") {
            return;
        }
        let client = delete_client.clone();
        spawn(async move {
            if grade::delete(&client, id).await.is_ok() {
                notices.write().push(Notice::success("Grade deleted"));
                page.restart();
            }
        });
    });

    let on_create = move |_| {
        let client = client.clone();
        async move {
            let record = draft();
            if record.grade_name.trim().is_empty() || record.grade_code.trim().is_empty() {
                notices.write().push(Notice::warning("Grade name and code are required"));
                return;
            }
            if let Ok(created) = grade::create(&client, &record).await {
                tracing::info!("created grade {}", created.grade_name);
                notices.write().push(Notice::success("Grade created"));
                draft.set(Grade {
                    school_year: record.school_year,
                    ..Grade::default()
                });
                page.restart();
            }
        }
    };

    let years = recent_school_years();
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
                            th { "Stage" }
                            th { "School year" }
                            th { "Status" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for g in rows {
                            tr {
                                key: "{g.audit.id.unwrap_or_default()}",
                                td { "{g.grade_code}" }
                                td { "{g.grade_name}" }
                                td { "{stage_label(g.stage)}" }
                                td { "{g.school_year}" }
                                td { StatusTag { status: g.status } }
                                td {
                                    if let Some(id) = g.audit.id {
                                        button {
                                            class: "link-button",
                                            onclick: {
                                                let g = g.clone();
                                                move |_| on_toggle.call(g.clone())
                                            },
                                            if g.status.is_enabled() { "Disable" } else { "Enable" }
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
            div {
                class: "toolbar",
                label {
                    "School year "
                    select {
                        value: "{school_year}",
                        onchange: move |e| {
                            school_year.set(e.value());
                            query.write().page = 1;
                        },
                        option { value: "", "All" }
                        for year in years.iter() {
                            option { key: "{year}", value: "{year}", "{year}" }
                        }
                    }
                }
            }
            form {
                class: "inline-form",
                onsubmit: move |e: FormEvent| e.prevent_default(),
                input {
                    placeholder: "Code",
                    value: "{draft().grade_code}",
                    oninput: move |e| draft.write().grade_code = e.value(),
                }
                input {
                    placeholder: "Name",
                    value: "{draft().grade_name}",
                    oninput: move |e| draft.write().grade_name = e.value(),
                }
                select {
                    onchange: move |e| {
                        draft.write().stage = e.value().parse::<i32>().ok().and_then(|c| Stage::try_from(c).ok());
                    },
                    option { value: "", "Stage" }
                    for stage in Stage::ALL.iter() {
                        option { key: "{stage.code()}", value: "{stage.code()}", "{stage}" }
                    }
                }
                select {
                    value: "{draft().school_year}",
                    onchange: move |e| draft.write().school_year = e.value(),
                    for year in years.iter() {
                        option { key: "{year}", value: "{year}", "{year}" }
                    }
                }
                button { r#type: "button", class: "primary", onclick: on_create, "Add grade" }
            }
            {body}
        }
    }
}
