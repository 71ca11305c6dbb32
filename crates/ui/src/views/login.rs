use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let can_submit = !email.read().trim().is_empty();

    rsx! {
        div { class: "page login",
            h2 { "Sign in" }
            p { class: "muted", "Practice interviews and assessments in one place." }
            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    if email.read().trim().is_empty() {
                        return;
                    }
                    ctx.sign_in();
                    tracing::info!("signed in");
                    let _ = navigator.replace(Route::Dashboard {});
                },
                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: !can_submit,
                    "Continue"
                }
            }
        }
    }
}
