// src/controller/add_review.rs
// DOCUMENTATION: Add-review page flow
// PURPOSE: Require a token, then forward the review form to the API

use super::{messages, EventBinding, PageAction, PageController, LISTING_PAGE};
use crate::errors::ClientError;
use crate::models::NewReview;
use crate::page::{ids, query_param, Page};
use crate::session::AuthContext;

impl<P: Page> PageController<P> {
    /// The form handler is bound even after redirecting an anonymous visitor;
    /// the redirect keeps it unreachable
    pub(super) fn setup_review_form(&self) -> Vec<EventBinding> {
        let auth = self.auth_from_cookie();
        if !auth.is_authenticated() {
            log::info!("No session token, redirecting to {}", LISTING_PAGE);
            self.page.navigate(LISTING_PAGE);
        }

        let place_id = query_param(&self.page.query(), "id");

        if !self.page.has_element(ids::REVIEW_FORM) {
            log::debug!("No #{} on this page", ids::REVIEW_FORM);
            return Vec::new();
        }
        vec![EventBinding::submit(
            ids::REVIEW_FORM,
            PageAction::SubmitReview { auth, place_id },
        )]
    }

    pub(super) async fn submit_review(&self, auth: &AuthContext, place_id: Option<&str>) {
        let Some(token) = auth.token() else {
            self.page.navigate(LISTING_PAGE);
            return;
        };

        let Some(place_id) = place_id else {
            log::warn!("Review form submitted without a place id");
            self.page.alert(&format!(
                "{}{}",
                messages::REVIEW_FAILED_PREFIX,
                ClientError::MissingPlaceId
            ));
            return;
        };

        let review = NewReview::from_form(
            place_id,
            &self.page.value(ids::REVIEW).unwrap_or_default(),
            &self.page.value(ids::RATING).unwrap_or_default(),
        );

        match self.api.submit_review(token, &review).await {
            Ok(()) => {
                self.page.alert(messages::REVIEW_SUBMITTED);
                self.page.reset_form(ids::REVIEW_FORM);
            }
            Err(err) => match err.api_message() {
                Some(message) => self
                    .page
                    .alert(&format!("{}{}", messages::REVIEW_FAILED_PREFIX, message)),
                None => {
                    log::error!("Review submission failed: {}", err);
                    self.page.alert(messages::REVIEW_GENERIC_FAILURE);
                }
            },
        }
    }
}
