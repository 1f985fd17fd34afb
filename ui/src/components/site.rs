use std::rc::Rc;

use dioxus::prelude::*;
use tracing::info;

use crate::core::platform::Platform;
use crate::core::storage::{open_default_store, PreferenceStore};
use crate::i18n::use_i18n_provider;
use crate::router::Route;

/// Durable preferences shared with components that need more than the
/// language (the hero's first-visit flag).
#[derive(Clone)]
pub struct Preferences(pub Rc<dyn PreferenceStore>);

/// Root of the site: opens storage, installs the localization context and
/// mounts the router beneath it so every page can translate.
#[component]
pub fn Site() -> Element {
    let store = use_hook(|| {
        let platform = Platform::current();
        info!(%platform, storage = platform.storage_description(), "starting site");
        open_default_store()
    });
    use_context_provider(|| Preferences(store.clone()));
    use_i18n_provider(store);

    rsx! {
        Router::<Route> {}
    }
}
