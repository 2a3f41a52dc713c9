// src/controller/route.rs
// DOCUMENTATION: Page identity
// PURPOSE: Map the current path to exactly one page flow, once per page load

/// Page flows, one per HTML page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Listing,
    Detail,
    AddReview,
    Other,
}

/// Listing page, also the redirect target of the review flow
pub const LISTING_PAGE: &str = "index.html";

/// Final path segment -> route. An empty segment is the site root.
const ROUTE_TABLE: &[(&str, Route)] = &[
    ("login.html", Route::Login),
    (LISTING_PAGE, Route::Listing),
    ("", Route::Listing),
    ("place.html", Route::Detail),
    ("add_review.html", Route::AddReview),
];

impl Route {
    /// Resolve `location.pathname` against the route table
    pub fn resolve(path: &str) -> Route {
        let file = path.rsplit('/').next().unwrap_or_default();
        ROUTE_TABLE
            .iter()
            .find(|(name, _)| *name == file)
            .map(|(_, route)| *route)
            .unwrap_or(Route::Other)
    }
}
