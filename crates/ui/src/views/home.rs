use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();
    use_hook(move || {
        let _ = navigator.replace(Route::Dashboard {});
    });

    rsx! {}
}
