use api::endpoints::{class, exam, grade, student, teacher};
use api::{dates, PageQuery};
use dioxus::prelude::*;

use crate::{use_client, use_session, Client};

/// Record counts shown on the dashboard cards. `None` when a request failed.
#[derive(Clone, Debug, Default, PartialEq)]
struct Counts {
    grades: Option<u64>,
    classes: Option<u64>,
    students: Option<u64>,
    teachers: Option<u64>,
}

async fn load_counts(client: &Client) -> Counts {
    // A one-row page is enough to read the total.
    let probe = PageQuery::new(1, 1);
    Counts {
        grades: grade::list(client, &probe, &Default::default()).await.ok().map(|p| p.total),
        classes: class::list(client, &probe, &Default::default()).await.ok().map(|p| p.total),
        students: student::list(client, &probe, &Default::default()).await.ok().map(|p| p.total),
        teachers: teacher::list(client, &probe, &Default::default()).await.ok().map(|p| p.total),
    }
}

#[component]
pub fn DashboardView() -> Element {
    let client = use_client();
    let session = use_session();

    let counts_client = client.clone();
    let counts = use_resource(move || {
        let client = counts_client.clone();
        async move { load_counts(&client).await }
    });
    let exams = use_resource(move || {
        let client = client.clone();
        async move { exam::current(&client).await.unwrap_or_default() }
    });

    let name = session().display_name().to_string();
    let today = dates::current_date("YYYY-MM-DD");
    let school_year = dates::current_school_year();
    let semester = dates::current_semester();
    let counts = counts().unwrap_or_default();
    let show = |n: Option<u64>| n.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string());
    let cards = [
        ("Grades", show(counts.grades)),
        ("Classes", show(counts.classes)),
        ("Students", show(counts.students)),
        ("Teachers", show(counts.teachers)),
    ];

    rsx! {
        div {
            class: "dashboard",
            section {
                class: "welcome",
                h3 { "Welcome, {name}" }
                p { "{today} · School year {school_year}, semester {semester}" }
            }
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
            section {
                h3 { "Current exams" }
                match exams() {
                    None => rsx! { p { class: "empty", "Loading..." } },
                    Some(list) if list.is_empty() => rsx! { p { class: "empty", "No exams in progress" } },
                    Some(list) => rsx! {
                        ul {
                            class: "exam-list",
                            for exam in list {
                                li {
                                    key: "{exam.audit.id.unwrap_or_default()}",
                                    span { "{exam.exam_name}" }
                                    span { class: "tag", "{exam.status}" }
                                    if let Some(end) = exam.end_date {
                                        span { class: "muted", "ends {end}" }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
