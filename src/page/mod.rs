// src/page/mod.rs
// DOCUMENTATION: Page abstraction
// PURPOSE: The DOM/window seam between page flows and the browser (or a headless stand-in)

#[cfg(target_arch = "wasm32")]
pub mod browser;
pub mod headless;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserPage;
pub use headless::HeadlessPage;

use crate::views::Fragment;

/// Element identifiers the page flows bind to
pub mod ids {
    pub const LOGIN_FORM: &str = "login-form";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const LOGIN_LINK: &str = "login-link";
    pub const PLACES_LIST: &str = "places-list";
    pub const PRICE_FILTER: &str = "price-filter";
    pub const ADD_REVIEW: &str = "add-review";
    pub const PLACE_DETAILS: &str = "place-details";
    pub const REVIEWS: &str = "reviews";
    pub const REVIEW_FORM: &str = "review-form";
    pub const REVIEW: &str = "review";
    pub const RATING: &str = "rating";
}

/// Everything a page flow may do to the document and window
/// DOCUMENTATION: Methods take `&self`; implementations live on the single
/// UI thread and use interior mutability. Operations on a missing element
/// are no-ops that report `false` where a result is returned
pub trait Page {
    /// `location.pathname`
    fn path(&self) -> String;

    /// `location.search`, with its leading `?` when present
    fn query(&self) -> String;

    /// `document.cookie`
    fn cookies(&self) -> String;

    /// Assign `document.cookie` (e.g. "token=abc; path=/")
    fn set_cookie(&self, cookie: &str);

    /// Blocking user alert
    fn alert(&self, message: &str);

    /// Navigate the window to `href`
    fn navigate(&self, href: &str);

    fn has_element(&self, id: &str) -> bool;

    /// Current value of an input, textarea or select
    fn value(&self, id: &str) -> Option<String>;

    /// Replace the element's children with the given fragments
    fn replace_children(&self, id: &str, fragments: &[Fragment]) -> bool;

    /// Toggle `display` between `block` and `none`
    fn set_visible(&self, id: &str, visible: bool) -> bool;

    fn reset_form(&self, id: &str) -> bool;

    /// Attribute value of every element carrying `class`, in document order
    fn attribute_values(&self, class: &str, attribute: &str) -> Vec<Option<String>>;

    /// Toggle `display` of the `index`-th element carrying `class`
    fn set_class_member_visible(&self, class: &str, index: usize, visible: bool);
}

/// First value of a query-string parameter (`?id=42&x=1`, "id" -> "42")
pub fn query_param(query: &str, name: &str) -> Option<String> {
    url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
