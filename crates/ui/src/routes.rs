use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};
use prep_core::access::{LOGIN_PATH, RouteAccess, route_access};

use crate::context::AppContext;
use crate::views::{
    DashboardView, HomeView, LanguageAssessmentView, LoginView, PersonalityAssessmentView,
};

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/login", LoginView)] Login {},
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/assessment/language", LanguageAssessmentView)] LanguageAssessment {},
        #[route("/assessment/personality", PersonalityAssessmentView)] PersonalityAssessment {},
}

fn redirect_target(path: &str) -> Route {
    if path == LOGIN_PATH {
        Route::Login {}
    } else {
        Route::Dashboard {}
    }
}

/// Where the guard sends `route`, if anywhere.
fn guard_redirect(route: &Route, signed_in: bool) -> Option<Route> {
    match route_access(&route.to_string(), signed_in) {
        RouteAccess::Allow => None,
        RouteAccess::Redirect(target) => Some(redirect_target(target)),
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let signed_in = ctx.has_session_cookie();
    let redirect = guard_redirect(&route, signed_in);

    use_effect(use_reactive(&redirect, move |redirect| {
        if let Some(target) = redirect {
            tracing::debug!(to = %target, "route guard redirect");
            let _ = navigator.replace(target);
        }
    }));

    if redirect.is_some() {
        return rsx! {};
    }

    rsx! {
        div { class: "app",
            Sidebar { signed_in }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar(signed_in: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    rsx! {
        nav { class: "sidebar",
            h1 { "JobPrep" }
            if signed_in {
                ul {
                    li { Link { to: Route::Dashboard {}, "Dashboard" } }
                    li { Link { to: Route::LanguageAssessment {}, "Language assessment" } }
                    li { Link { to: Route::PersonalityAssessment {}, "Personality assessment" } }
                }
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| {
                        ctx.sign_out();
                        let _ = navigator.replace(Route::Login {});
                    },
                    "Sign out"
                }
            } else {
                ul {
                    li { Link { to: Route::Login {}, "Sign in" } }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_out_visitors_are_sent_to_login() {
        for route in [
            Route::Dashboard {},
            Route::LanguageAssessment {},
            Route::PersonalityAssessment {},
        ] {
            assert_eq!(guard_redirect(&route, false), Some(Route::Login {}));
            assert_eq!(guard_redirect(&route, true), None);
        }
    }

    #[test]
    fn signed_in_visitors_skip_the_login_page() {
        assert_eq!(guard_redirect(&Route::Login {}, true), Some(Route::Dashboard {}));
        assert_eq!(guard_redirect(&Route::Login {}, false), None);
    }

    #[test]
    fn home_is_open_to_everyone() {
        assert_eq!(guard_redirect(&Route::Home {}, false), None);
        assert_eq!(guard_redirect(&Route::Home {}, true), None);
    }
}
