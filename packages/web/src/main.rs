use api::guard::{self, Navigation};
use api::Notice;
use dioxus::prelude::*;
use store::ClientConfig;

use ui::views::{
    DashboardView, ExamManageView, GradeManageView, LoginView, RecordKind, RecordTableView,
    ScoreEntryView, ScoreStatisticsView,
};
use ui::{
    use_app_config, use_notices, use_pending_redirect, use_session, AdminShell, BASE_CSS,
    PendingRedirect, SessionProvider, ToastStack,
};

/// Embedded client configuration. `GRADEBOOK_API_URL` at build time
/// overrides the API base.
const CONFIG_TOML: &str = include_str!("../gradebook.toml");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guard)]
        #[route("/login")]
        Login {},
        #[layout(AdminLayout)]
            #[route("/")]
            Root {},
            #[route("/dashboard")]
            Dashboard {},
            #[route("/basic/grade")]
            GradeManage {},
            #[route("/basic/class")]
            ClassManage {},
            #[route("/basic/teacher")]
            TeacherManage {},
            #[route("/basic/student")]
            StudentManage {},
            #[route("/basic/course")]
            CourseManage {},
            #[route("/grade/exam")]
            ExamManage {},
            #[route("/grade/score")]
            ScoreEntry {},
            #[route("/grade/statistics")]
            ScoreStatistics {},
            #[route("/system/user")]
            UserManage {},
            #[route("/system/role")]
            RoleManage {},
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    let config = match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("invalid {}: {}, using defaults", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    };
    match option_env!("GRADEBOOK_API_URL") {
        Some(url) if !url.is_empty() => config.with_base_url(url),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        document::Stylesheet { href: BASE_CSS }
        SessionProvider {
            config,
            ToastStack {}
            Router::<Route> {}
        }
    }
}

/// Runs every navigation through the route guard, keeps the document title
/// in sync and follows redirects requested by the API client.
#[component]
fn Guard() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();
    let session = use_session();
    let config = use_app_config();
    let mut notices = use_notices();
    let PendingRedirect(mut pending) = use_pending_redirect();

    let path = route.to_string();
    let logged_in = session().is_logged_in();
    let decision = guard::guard_path(&path, logged_in);
    let title = guard::document_title(guard::find_route(&path), &config.app.title);

    use_effect(move || {
        if let Some(to) = pending() {
            pending.set(None);
            tracing::debug!("client redirect to {}", to);
            nav.replace(to);
        }
    });

    // Last (path, logged_in) the guard acted on; read with `peek` so it never
    // triggers a render.
    let mut seen = use_signal(|| None::<(String, bool)>);

    use_effect(use_reactive!(|(path, logged_in)| {
        let previous = seen.peek().clone();
        seen.set(Some((path.clone(), logged_in)));
        let previous = previous.as_ref().map(|(p, l)| (p.as_str(), *l));
        if let Navigation::Redirect { to, warning } = guard::guard_transition(previous, &path, logged_in) {
            tracing::debug!("guard: {} -> {}", path, to);
            if let Some(warning) = warning {
                notices.write().push(Notice::warning(warning));
            }
            nav.replace(to);
        }
    }));

    match decision {
        Navigation::Proceed => rsx! {
            document::Title { "{title}" }
            Outlet::<Route> {}
        },
        Navigation::Redirect { .. } => rsx! {},
    }
}

#[component]
fn AdminLayout() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        AdminShell {
            active_path: route.to_string(),
            on_navigate: move |path: String| {
                nav.push(path);
            },
            Outlet::<Route> {}
        }
    }
}

/// Redirect `/` to the dashboard
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}

/// Unknown paths go home; the guard takes it from there.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("no route for /{}", segments.join("/"));
    nav.replace(Route::Root {});
    rsx! {}
}

#[component]
fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_success: move |_| {
                nav.replace(Route::Root {});
            },
        }
    }
}

#[component]
fn Dashboard() -> Element {
    rsx! { DashboardView {} }
}

#[component]
fn GradeManage() -> Element {
    rsx! { GradeManageView {} }
}

#[component]
fn ClassManage() -> Element {
    rsx! { RecordTableView { kind: RecordKind::Classes } }
}

#[component]
fn TeacherManage() -> Element {
    rsx! { RecordTableView { kind: RecordKind::Teachers } }
}

#[component]
fn StudentManage() -> Element {
    rsx! { RecordTableView { kind: RecordKind::Students } }
}

#[component]
fn CourseManage() -> Element {
    rsx! { RecordTableView { kind: RecordKind::Courses } }
}

#[component]
fn ExamManage() -> Element {
    rsx! { ExamManageView {} }
}

#[component]
fn ScoreEntry() -> Element {
    rsx! { ScoreEntryView {} }
}

#[component]
fn ScoreStatistics() -> Element {
    rsx! { ScoreStatisticsView {} }
}

#[component]
fn UserManage() -> Element {
    rsx! { RecordTableView { kind: RecordKind::Users } }
}

#[component]
fn RoleManage() -> Element {
    rsx! { RecordTableView { kind: RecordKind::Roles } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_every_route_table_entry_is_routable() {
        for meta in guard::ROUTES {
            let route = Route::from_str(meta.path)
                .unwrap_or_else(|_| panic!("{} does not parse", meta.path));
            assert!(
                !matches!(route, Route::NotFound { .. }),
                "{} fell through to the catch-all",
                meta.path
            );
            assert_eq!(route.to_string(), meta.path);
        }
    }

    #[test]
    fn test_unknown_paths_hit_catch_all() {
        let route = Route::from_str("/nowhere/at/all").unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }

    #[test]
    fn test_embedded_config_parses() {
        let config = ClientConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.app.title, guard::APP_TITLE);
        assert!(!load_config().api.base_url.is_empty());
    }
}
