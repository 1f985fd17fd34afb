//! Navigation through a mounted site keeps process-wide state intact.

use std::rc::Rc;

use dioxus::prelude::*;
use ui::components::Preferences;
use ui::core::storage::{MemoryStore, PreferenceStore};
use ui::i18n::{use_i18n_provider, I18n, Language};
use ui::router::{navigate, Page, Route};

/// `Site` without the platform store, so tests never touch the real config dir.
fn app() -> Element {
    let store: Rc<dyn PreferenceStore> = use_hook(|| Rc::new(MemoryStore::default()));
    use_context_provider(|| Preferences(store.clone()));
    use_i18n_provider(store);

    rsx! {
        Router::<Route> {}
    }
}

fn mount() -> VirtualDom {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dom
}

fn at_root<T>(dom: &VirtualDom, f: impl FnOnce() -> T) -> T {
    dom.in_runtime(|| ScopeId::APP.in_runtime(f))
}

fn language(dom: &VirtualDom) -> Language {
    at_root(dom, || consume_context::<I18n>().language())
}

fn current_page(dom: &VirtualDom) -> Page {
    at_root(dom, || root_router().map(|router| router.current::<Route>().page()))
        .expect("router is mounted")
}

fn go(dom: &mut VirtualDom, path: &str) {
    at_root(dom, || navigate(path));
    let _ = dom.render_immediate_to_vec();
}

#[test]
fn site_starts_on_home_in_default_language() {
    let dom = mount();
    assert_eq!(current_page(&dom), Page::Home);
    assert_eq!(language(&dom), Language::En);
}

#[test]
fn language_survives_navigation() {
    let mut dom = mount();
    at_root(&dom, || consume_context::<I18n>().set_language(Language::Uk));
    let _ = dom.render_immediate_to_vec();

    go(&mut dom, "/about");
    assert_eq!(current_page(&dom), Page::About);
    assert_eq!(language(&dom), Language::Uk);

    go(&mut dom, "/nope");
    assert_eq!(current_page(&dom), Page::NotFound);
    assert_eq!(language(&dom), Language::Uk);
    assert_eq!(at_root(&dom, || consume_context::<I18n>().t("home")), "Головна");
}

#[test]
fn navigation_normalizes_paths() {
    let mut dom = mount();
    go(&mut dom, "/contact/?ref=footer");
    assert_eq!(current_page(&dom), Page::Contact);

    go(&mut dom, "/contact/extra");
    assert_eq!(current_page(&dom), Page::NotFound);
}
