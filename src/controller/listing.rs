// src/controller/listing.rs
// DOCUMENTATION: Listing page flow
// PURPOSE: Fetch places, render the cards, and wire the price filter

use super::{messages, EventBinding, PageAction, PageController};
use crate::page::{ids, Page};
use crate::views::{apply_price_filter, price_filter_options, render_place_list, ALL_PRICES};

impl<P: Page> PageController<P> {
    pub(super) async fn show_listing(&self) -> Vec<EventBinding> {
        let auth = self.auth_from_cookie();
        self.page
            .set_visible(ids::LOGIN_LINK, !auth.is_authenticated());

        let places = match self.api.list_places(&auth).await {
            Ok(places) => places,
            Err(err) => {
                self.report_fetch_failure(&err, messages::PLACES_FAILED);
                return Vec::new();
            }
        };

        if !self
            .page
            .replace_children(ids::PLACES_LIST, &render_place_list(&places))
        {
            log::debug!("No #{} on this page", ids::PLACES_LIST);
        }

        // Filter attaches only after the cards exist
        if self
            .page
            .replace_children(ids::PRICE_FILTER, &price_filter_options())
        {
            vec![EventBinding::change(ids::PRICE_FILTER, PageAction::FilterPrices)]
        } else {
            Vec::new()
        }
    }

    pub(super) fn filter_prices(&self) {
        let selection = self
            .page
            .value(ids::PRICE_FILTER)
            .unwrap_or_else(|| ALL_PRICES.to_string());
        apply_price_filter(&self.page, &selection);
    }
}
