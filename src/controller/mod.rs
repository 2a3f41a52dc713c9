// src/controller/mod.rs
// DOCUMENTATION: Page controller
// PURPOSE: Resolve the route once per page load, run its flow, and handle bound events

mod add_review;
mod detail;
mod listing;
mod login;
pub mod route;

pub use route::{Route, LISTING_PAGE};

use crate::errors::ClientError;
use crate::page::Page;
use crate::services::HbnbApiClient;
use crate::session::AuthContext;

/// Alert texts shown to the user
pub mod messages {
    pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";
    pub const REVIEW_GENERIC_FAILURE: &str = "Something went wrong. Try again later.";
    pub const PLACES_FAILED: &str = "Failed to fetch places";
    pub const PLACE_DETAILS_FAILED: &str = "Failed to fetch place details";
    pub const REVIEW_SUBMITTED: &str = "Review submitted successfully!";
    pub const LOGIN_FAILED_PREFIX: &str = "Login failed: ";
    pub const REVIEW_FAILED_PREFIX: &str = "Failed to submit review: ";
}

/// DOM event a binding listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomEvent {
    /// Form submission; the platform layer prevents default navigation
    Submit,
    Change,
}

impl DomEvent {
    pub fn name(&self) -> &'static str {
        match self {
            DomEvent::Submit => "submit",
            DomEvent::Change => "change",
        }
    }
}

/// Work triggered by a bound event
#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    Login,
    FilterPrices,
    SubmitReview {
        auth: AuthContext,
        place_id: Option<String>,
    },
}

/// Listener a flow asks the platform layer to attach
#[derive(Debug, Clone, PartialEq)]
pub struct EventBinding {
    pub element_id: &'static str,
    pub event: DomEvent,
    pub action: PageAction,
}

impl EventBinding {
    pub fn submit(element_id: &'static str, action: PageAction) -> Self {
        EventBinding {
            element_id,
            event: DomEvent::Submit,
            action,
        }
    }

    pub fn change(element_id: &'static str, action: PageAction) -> Self {
        EventBinding {
            element_id,
            event: DomEvent::Change,
            action,
        }
    }
}

/// Per-page orchestrator
/// DOCUMENTATION: Composes the API client (data) and the view renderers
/// (presentation) over a `Page`. Holds no state between calls: the
/// authentication context is resolved from the cookie by each flow and
/// carried inside bound actions
pub struct PageController<P: Page> {
    page: P,
    api: HbnbApiClient,
}

impl<P: Page> PageController<P> {
    pub fn new(page: P, api: HbnbApiClient) -> Self {
        Self { page, api }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn route(&self) -> Route {
        Route::resolve(&self.page.path())
    }

    /// Run the flow for the current page
    ///
    /// # Returns
    /// Event listeners the platform layer must attach
    pub async fn boot(&self) -> Vec<EventBinding> {
        let route = self.route();
        log::info!("Page loaded: {} -> {:?}", self.page.path(), route);

        match route {
            Route::Login => self.setup_login(),
            Route::Listing => self.show_listing().await,
            Route::Detail => {
                self.show_place_detail().await;
                Vec::new()
            }
            Route::AddReview => self.setup_review_form(),
            Route::Other => Vec::new(),
        }
    }

    /// Run the action of a fired binding
    pub async fn handle(&self, action: PageAction) {
        log::debug!("Handling {:?}", action);

        match action {
            PageAction::Login => self.submit_login().await,
            PageAction::FilterPrices => self.filter_prices(),
            PageAction::SubmitReview { auth, place_id } => {
                self.submit_review(&auth, place_id.as_deref()).await
            }
        }
    }

    /// Token from the `token` cookie, resolved once per flow
    fn auth_from_cookie(&self) -> AuthContext {
        AuthContext::from_cookies(&self.page.cookies())
    }

    /// Alert for a failed fetch: the flow's own text for HTTP failures,
    /// the generic text for transport and parse failures
    fn report_fetch_failure(&self, err: &ClientError, http_failure_alert: &str) {
        if err.is_transport() {
            log::error!("Request failed: {}", err);
            self.page.alert(messages::GENERIC_FAILURE);
        } else {
            log::warn!("{}: {}", http_failure_alert, err);
            self.page.alert(http_failure_alert);
        }
    }
}
