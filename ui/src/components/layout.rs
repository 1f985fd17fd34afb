use dioxus::prelude::*;

use crate::router::Route;

use super::{Footer, Header};

/// Shared chrome around every routed page.
#[component]
pub fn SiteLayout() -> Element {
    let route = use_route::<Route>();

    use_effect(use_reactive((&route,), |(route,)| {
        if route.page().resets_scroll() {
            let _ = document::eval("window.scrollTo(0, 0);");
        }
    }));

    rsx! {
        div { class: "site",
            Header {}
            main { class: "site__main",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
