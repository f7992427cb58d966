//! Static route table shared by links, redirects, and the router.
//!
//! DESIGN
//! ======
//! `leptos_router` owns the actual component mounting, but every href and
//! programmatic redirect in the app is built through `path_for`, and the
//! nav bar classifies the current location through `resolve`, so the two
//! views of the table cannot drift apart silently. Exact segments win over
//! parameterized ones: `/movies` is the list page, never a detail page with
//! an empty id.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A routed page of the application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Movies,
    MovieDetail { id: String },
    MyPage,
    Login,
    Register,
}

/// Resolve a URL path to its page.
///
/// Query string and fragment are ignored. Returns `None` for unmatched
/// paths — a reportable not-found condition, not a fatal error.
pub fn resolve(path: &str) -> Option<Page> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => Some(Page::Home),
        ["movies"] => Some(Page::Movies),
        ["movies", id] => Some(Page::MovieDetail { id: (*id).to_owned() }),
        ["mypage"] => Some(Page::MyPage),
        ["login"] => Some(Page::Login),
        ["register"] => Some(Page::Register),
        _ => None,
    }
}

/// Build the canonical path for a page, for hrefs and redirects.
pub fn path_for(page: &Page) -> String {
    match page {
        Page::Home => "/".to_owned(),
        Page::Movies => "/movies".to_owned(),
        Page::MovieDetail { id } => format!("/movies/{id}"),
        Page::MyPage => "/mypage".to_owned(),
        Page::Login => "/login".to_owned(),
        Page::Register => "/register".to_owned(),
    }
}
