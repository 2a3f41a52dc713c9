// src/controller/login.rs
// DOCUMENTATION: Login page flow
// PURPOSE: Exchange credentials for a token, store it in the cookie, go to the listing

use super::{messages, EventBinding, PageAction, PageController, LISTING_PAGE};
use crate::page::{ids, Page};
use crate::session::{token_cookie, AuthContext};

impl<P: Page> PageController<P> {
    pub(super) fn setup_login(&self) -> Vec<EventBinding> {
        if !self.page.has_element(ids::LOGIN_FORM) {
            log::debug!("No #{} on this page", ids::LOGIN_FORM);
            return Vec::new();
        }
        vec![EventBinding::submit(ids::LOGIN_FORM, PageAction::Login)]
    }

    pub(super) async fn submit_login(&self) {
        let email = self.page.value(ids::EMAIL).unwrap_or_default();
        let password = self.page.value(ids::PASSWORD).unwrap_or_default();

        match self.api.login(&email, &password).await {
            Ok(response) => {
                let auth = AuthContext::with_token(response.access_token);
                if let Some(token) = auth.token() {
                    self.page.set_cookie(&token_cookie(token));
                }
                log::info!("Logged in as {}", email);
                self.page.navigate(LISTING_PAGE);
            }
            Err(err) => match err.api_message() {
                Some(message) => {
                    log::warn!("Login rejected for {}: {}", email, message);
                    self.page
                        .alert(&format!("{}{}", messages::LOGIN_FAILED_PREFIX, message));
                }
                None => {
                    log::error!("Login request failed: {}", err);
                    self.page.alert(messages::GENERIC_FAILURE);
                }
            },
        }
    }
}
