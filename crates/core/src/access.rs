//! Route guard rules: which paths need a session cookie and which are only
//! for signed-out visitors.

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/dashboard";

const PROTECTED_PREFIXES: &[&str] = &["/dashboard", "/assessment"];
const PUBLIC_ONLY: &[&str] = &["/login", "/signup"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    Redirect(&'static str),
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Decide whether `path` may be shown given the presence of a session cookie.
#[must_use]
pub fn route_access(path: &str, has_session_cookie: bool) -> RouteAccess {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let path = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    if !has_session_cookie
        && PROTECTED_PREFIXES
            .iter()
            .any(|prefix| matches_prefix(path, prefix))
    {
        return RouteAccess::Redirect(LOGIN_PATH);
    }
    if has_session_cookie && PUBLIC_ONLY.iter().any(|public| matches_prefix(path, public)) {
        return RouteAccess::Redirect(HOME_PATH);
    }
    RouteAccess::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_out_visitors_are_sent_to_login() {
        assert_eq!(
            route_access("/assessment/language", false),
            RouteAccess::Redirect(LOGIN_PATH)
        );
        assert_eq!(route_access("/dashboard/", false), RouteAccess::Redirect(LOGIN_PATH));
        assert_eq!(route_access("/login", false), RouteAccess::Allow);
    }

    #[test]
    fn signed_in_visitors_skip_public_pages() {
        assert_eq!(route_access("/login", true), RouteAccess::Redirect(HOME_PATH));
        assert_eq!(route_access("/signup?ref=x", true), RouteAccess::Redirect(HOME_PATH));
        assert_eq!(route_access("/assessment/personality", true), RouteAccess::Allow);
    }

    #[test]
    fn prefixes_match_whole_segments() {
        assert_eq!(route_access("/dashboards", false), RouteAccess::Allow);
        assert_eq!(route_access("/", false), RouteAccess::Allow);
    }
}
