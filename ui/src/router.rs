//! Route table and path resolution.
//!
//! [`Route`] is what the Dioxus router renders; [`Page`] is the flat handle
//! the rest of the crate reasons about (nav labels, active-link highlight).
//! Both describe the same table: five top-level paths plus a catch-all.

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::components::SiteLayout;
use crate::views::{About, Conditions, Contact, Home, NotFound, Services};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/conditions")]
    Conditions {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Conditions,
    Contact,
    NotFound,
}

impl Page {
    /// Pages listed in the header, in display order.
    pub const NAV: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Conditions,
        Page::Contact,
    ];

    /// Exact match after normalization (query/fragment dropped, one trailing
    /// slash ignored). Anything else, including paths that don't start with
    /// `/`, is `NotFound`.
    pub fn resolve(path: &str) -> Page {
        match normalize(path) {
            Some("/") => Page::Home,
            Some("/about") => Page::About,
            Some("/services") => Page::Services,
            Some("/conditions") => Page::Conditions,
            Some("/contact") => Page::Contact,
            _ => Page::NotFound,
        }
    }

    /// Canonical path. `NotFound` has no entry in the table, so its path is
    /// one that resolves back to it.
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Conditions => "/conditions",
            Page::Contact => "/contact",
            Page::NotFound => "/404",
        }
    }

    /// Translation key for the page's navigation label.
    pub fn nav_key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Conditions => "conditions",
            Page::Contact => "contact",
            Page::NotFound => "page_not_found",
        }
    }

    /// Content pages open scrolled to the top; the not-found page keeps
    /// whatever offset the visitor had.
    pub fn resets_scroll(self) -> bool {
        self != Page::NotFound
    }

    pub fn route(self) -> Route {
        match self {
            Page::Home => Route::Home {},
            Page::About => Route::About {},
            Page::Services => Route::Services {},
            Page::Conditions => Route::Conditions {},
            Page::Contact => Route::Contact {},
            Page::NotFound => Route::NotFound {
                segments: Vec::new(),
            },
        }
    }
}

impl Route {
    pub fn page(&self) -> Page {
        match self {
            Route::Home {} => Page::Home,
            Route::About {} => Page::About,
            Route::Services {} => Page::Services,
            Route::Conditions {} => Page::Conditions,
            Route::Contact {} => Page::Contact,
            Route::NotFound { .. } => Page::NotFound,
        }
    }

    /// The route [`Page::resolve`] picks for `path`; unmatched paths keep
    /// their segments so the not-found view can report them.
    pub fn from_path(path: &str) -> Route {
        match Page::resolve(path) {
            Page::NotFound => Route::NotFound {
                segments: segments(path),
            },
            page => page.route(),
        }
    }
}

/// Resolve a path to its page handle.
pub fn resolve(path: &str) -> Page {
    Page::resolve(path)
}

/// Switch the rendered page without reloading; process-wide state such as
/// the active language is untouched. Callable from inside the router or from
/// anywhere above it once the site is mounted.
pub fn navigate(path: &str) {
    let route = Route::from_path(path);
    let Some(router) = try_router().or_else(root_router) else {
        warn!(path, "no router mounted, navigation dropped");
        return;
    };
    debug!(path, page = ?route.page(), "navigate");
    router.push(route);
}

fn normalize(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if !path.starts_with('/') {
        return None;
    }
    match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() && !rest.ends_with('/') => Some(rest),
        _ => Some(path),
    }
}

fn segments(path: &str) -> Vec<String> {
    path.split(['?', '#'])
        .next()
        .unwrap_or_default()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Page::Home)]
    #[case("/about", Page::About)]
    #[case("/services", Page::Services)]
    #[case("/conditions", Page::Conditions)]
    #[case("/contact", Page::Contact)]
    fn top_level_paths_resolve_to_their_page(#[case] path: &str, #[case] page: Page) {
        assert_eq!(resolve(path), page);
    }

    #[test]
    fn top_level_pages_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for page in Page::NAV {
            assert!(seen.insert(resolve(page.path())));
        }
        assert!(!seen.contains(&Page::NotFound));
    }

    #[test]
    fn unknown_path_is_not_found_every_time() {
        assert_eq!(resolve("/does-not-exist"), Page::NotFound);
        assert_eq!(resolve("/does-not-exist"), resolve("/does-not-exist"));
    }

    #[test]
    fn nested_path_under_a_route_is_not_found() {
        assert_eq!(resolve("/contact"), Page::Contact);
        assert_eq!(resolve("/contact/extra"), Page::NotFound);
    }

    #[rstest]
    #[case("/about/", Page::About)]
    #[case("/contact?ref=footer", Page::Contact)]
    #[case("/services#process", Page::Services)]
    #[case("/?lang=uk", Page::Home)]
    fn query_fragment_and_trailing_slash_are_ignored(#[case] path: &str, #[case] page: Page) {
        assert_eq!(resolve(path), page);
    }

    #[rstest]
    #[case("")]
    #[case("about")]
    #[case("//")]
    #[case("/about//")]
    #[case("/About")]
    #[case("http://example.com/about")]
    fn malformed_paths_degrade_to_not_found(#[case] path: &str) {
        assert_eq!(resolve(path), Page::NotFound);
    }

    #[test]
    fn not_found_path_resolves_back_to_not_found() {
        assert_eq!(resolve(Page::NotFound.path()), Page::NotFound);
    }

    #[test]
    fn routes_and_pages_agree() {
        for page in Page::NAV {
            assert_eq!(page.route().page(), page);
            assert_eq!(Route::from_path(page.path()), page.route());
        }
    }

    #[test]
    fn only_content_pages_reset_scroll() {
        for page in Page::NAV {
            assert!(page.resets_scroll(), "{page:?}");
        }
        assert!(!Page::NotFound.resets_scroll());
    }

    #[test]
    fn unmatched_route_keeps_segments() {
        assert_eq!(
            Route::from_path("/contact/extra?x=1"),
            Route::NotFound {
                segments: vec!["contact".into(), "extra".into()]
            }
        );
    }

    #[test]
    fn router_parses_the_same_table() {
        for page in Page::NAV {
            let parsed = page.path().parse::<Route>().ok().map(|route| route.page());
            assert_eq!(parsed, Some(page));
        }
        let parsed = "/contact/extra".parse::<Route>().ok().map(|route| route.page());
        assert_eq!(parsed, Some(Page::NotFound));
    }
}
