//! # Route table and navigation guard
//!
//! [`ROUTES`] is the single source of page metadata: the router in the web
//! crate matches its `Route` enum against these paths, the sidebar is built
//! from [`menu`], and every navigation passes through [`guard`].
//!
//! The guard decides in this order:
//!
//! 1. a logged-in user heading to `/login` is sent to `/`;
//! 2. a route that does not require auth is entered;
//! 3. a logged-out user is sent to `/login` with a warning;
//! 4. otherwise the route is entered.
//!
//! Paths missing from the table are treated as public; the router's
//! catch-all takes care of them.

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const APP_TITLE: &str = "Student Grade Management System";
pub const LOGIN_REQUIRED: &str = "Please log in first";

/// Static metadata for one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub path: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    /// Icon key; the UI maps it to a glyph.
    pub icon: Option<&'static str>,
    /// Sidebar group, `None` for top-level entries.
    pub section: Option<&'static str>,
    pub requires_auth: bool,
    pub redirect: Option<&'static str>,
}

impl RouteMeta {
    const fn page(
        path: &'static str,
        name: &'static str,
        title: &'static str,
        icon: &'static str,
        section: Option<&'static str>,
    ) -> Self {
        Self {
            path,
            name,
            title,
            icon: Some(icon),
            section,
            requires_auth: true,
            redirect: None,
        }
    }

    pub fn in_menu(&self) -> bool {
        self.requires_auth && self.redirect.is_none()
    }
}

pub const SECTION_BASIC: &str = "Basic data";
pub const SECTION_SCORES: &str = "Scores";
pub const SECTION_SYSTEM: &str = "System";

pub static ROUTES: &[RouteMeta] = &[
    RouteMeta {
        path: LOGIN_PATH,
        name: "Login",
        title: "Login",
        icon: None,
        section: None,
        requires_auth: false,
        redirect: None,
    },
    RouteMeta {
        path: HOME_PATH,
        name: "Root",
        title: "",
        icon: None,
        section: None,
        requires_auth: true,
        redirect: Some(DASHBOARD_PATH),
    },
    RouteMeta::page(DASHBOARD_PATH, "Dashboard", "Home", "house", None),
    RouteMeta::page("/basic/grade", "GradeManage", "Grades", "school", Some(SECTION_BASIC)),
    RouteMeta::page("/basic/class", "ClassManage", "Classes", "house", Some(SECTION_BASIC)),
    RouteMeta::page("/basic/teacher", "TeacherManage", "Teachers", "avatar", Some(SECTION_BASIC)),
    RouteMeta::page("/basic/student", "StudentManage", "Students", "user-filled", Some(SECTION_BASIC)),
    RouteMeta::page("/basic/course", "CourseManage", "Courses", "reading", Some(SECTION_BASIC)),
    RouteMeta::page("/grade/exam", "ExamManage", "Exams", "document", Some(SECTION_SCORES)),
    RouteMeta::page("/grade/score", "ScoreEntry", "Score entry", "edit", Some(SECTION_SCORES)),
    RouteMeta::page("/grade/statistics", "ScoreStatistics", "Score statistics", "pie-chart", Some(SECTION_SCORES)),
    RouteMeta::page("/system/user", "UserManage", "Users", "user", Some(SECTION_SYSTEM)),
    RouteMeta::page("/system/role", "RoleManage", "Roles", "user-filled", Some(SECTION_SYSTEM)),
];

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    match path.trim_end_matches('/') {
        "" => HOME_PATH,
        trimmed => trimmed,
    }
}

pub fn find_route(path: &str) -> Option<&'static RouteMeta> {
    let path = normalize(path);
    ROUTES.iter().find(|r| r.path == path)
}

pub fn find_by_name(name: &str) -> Option<&'static RouteMeta> {
    ROUTES.iter().find(|r| r.name == name)
}

/// Outcome of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect {
        to: &'static str,
        warning: Option<&'static str>,
    },
}

/// Decide whether the user may enter `meta`.
pub fn guard(meta: &RouteMeta, logged_in: bool) -> Navigation {
    if logged_in && meta.path == LOGIN_PATH {
        return Navigation::Redirect {
            to: HOME_PATH,
            warning: None,
        };
    }
    if !meta.requires_auth {
        return Navigation::Proceed;
    }
    if !logged_in {
        return Navigation::Redirect {
            to: LOGIN_PATH,
            warning: Some(LOGIN_REQUIRED),
        };
    }
    Navigation::Proceed
}

/// [`guard`] for a raw path.
pub fn guard_path(path: &str, logged_in: bool) -> Navigation {
    match find_route(path) {
        Some(meta) => guard(meta, logged_in),
        None => Navigation::Proceed,
    }
}

/// [`guard_path`] for a navigation that follows `previous` (the last path
/// and login state the guard saw). When the session ends while the user
/// stays on the same page, through logout or an expired token, the redirect
/// to the login page carries no warning: the user did not navigate anywhere.
pub fn guard_transition(previous: Option<(&str, bool)>, path: &str, logged_in: bool) -> Navigation {
    match guard_path(path, logged_in) {
        Navigation::Redirect { to, .. }
            if matches!(previous, Some((prev, true)) if normalize(prev) == normalize(path)) =>
        {
            Navigation::Redirect { to, warning: None }
        }
        decision => decision,
    }
}

/// Browser title for a page: `"{title} - {app}"`, or just `app` when the page
/// has no title.
pub fn document_title(meta: Option<&RouteMeta>, app_title: &str) -> String {
    match meta.map(|m| m.title).filter(|t| !t.is_empty()) {
        Some(title) => format!("{title} - {app_title}"),
        None => app_title.to_string(),
    }
}

/// One sidebar group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSection {
    pub title: Option<&'static str>,
    pub items: Vec<&'static RouteMeta>,
}

/// Protected pages grouped by section, in table order.
pub fn menu() -> Vec<MenuSection> {
    let mut sections: Vec<MenuSection> = Vec::new();
    for route in ROUTES.iter().filter(|r| r.in_menu()) {
        match sections.iter_mut().find(|s| s.title == route.section) {
            Some(section) => section.items.push(route),
            None => sections.push(MenuSection {
                title: route.section,
                items: vec![route],
            }),
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_in_user_leaves_login_page() {
        assert_eq!(
            guard_path("/login", true),
            Navigation::Redirect {
                to: "/",
                warning: None
            }
        );
        assert_eq!(guard_path("/login", false), Navigation::Proceed);
    }

    #[test]
    fn test_public_routes_never_redirect_to_login() {
        for route in ROUTES.iter().filter(|r| !r.requires_auth) {
            for logged_in in [false, true] {
                let nav = guard(route, logged_in);
                assert!(
                    !matches!(nav, Navigation::Redirect { to: LOGIN_PATH, .. }),
                    "{} redirected to login",
                    route.path
                );
            }
        }
        assert_eq!(guard_path("/no/such/page", false), Navigation::Proceed);
    }

    #[test]
    fn test_protected_routes_require_login() {
        for route in ROUTES.iter().filter(|r| r.requires_auth) {
            assert_eq!(
                guard(route, false),
                Navigation::Redirect {
                    to: LOGIN_PATH,
                    warning: Some(LOGIN_REQUIRED)
                }
            );
            assert_eq!(guard(route, true), Navigation::Proceed);
        }
    }

    #[test]
    fn test_session_ending_in_place_redirects_silently() {
        assert_eq!(
            guard_transition(Some(("/dashboard", true)), "/dashboard", false),
            Navigation::Redirect {
                to: LOGIN_PATH,
                warning: None
            }
        );
        assert_eq!(
            guard_transition(Some(("/basic/grade", true)), "/basic/grade/", false),
            Navigation::Redirect {
                to: LOGIN_PATH,
                warning: None
            }
        );
    }

    #[test]
    fn test_navigating_without_session_still_warns() {
        let warned = Navigation::Redirect {
            to: LOGIN_PATH,
            warning: Some(LOGIN_REQUIRED),
        };
        assert_eq!(guard_transition(None, "/dashboard", false), warned);
        assert_eq!(guard_transition(Some(("/login", false)), "/dashboard", false), warned);
        assert_eq!(guard_transition(Some(("/dashboard", true)), "/basic/grade", false), warned);
        assert_eq!(guard_transition(Some(("/dashboard", false)), "/dashboard", false), warned);
        assert_eq!(guard_transition(Some(("/dashboard", true)), "/dashboard", true), Navigation::Proceed);
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(find_route("/basic/grade/").map(|r| r.name), Some("GradeManage"));
        assert_eq!(find_route("/grade/score?examId=1").map(|r| r.name), Some("ScoreEntry"));
        assert_eq!(find_route("").map(|r| r.name), Some("Root"));
        assert_eq!(find_by_name("RoleManage").map(|r| r.path), Some("/system/role"));
    }

    #[test]
    fn test_document_title() {
        assert_eq!(
            document_title(find_route("/basic/grade"), APP_TITLE),
            "Grades - Student Grade Management System"
        );
        assert_eq!(document_title(find_route("/"), APP_TITLE), APP_TITLE);
        assert_eq!(document_title(None, "Gradebook"), "Gradebook");
    }

    #[test]
    fn test_menu_groups_in_table_order() {
        let sections = menu();
        let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec![None, Some(SECTION_BASIC), Some(SECTION_SCORES), Some(SECTION_SYSTEM)]
        );
        assert_eq!(sections[0].items[0].path, DASHBOARD_PATH);
        assert_eq!(sections[1].items.len(), 5);
        assert!(sections.iter().flat_map(|s| &s.items).all(|r| r.path != LOGIN_PATH && r.path != HOME_PATH));
    }
}
