// src/views/place_list.rs
// DOCUMENTATION: Listing page renderer
// PURPOSE: Turn place summaries into place cards for the `places-list` container

use super::fragment::{escape_html, Fragment};
use crate::models::{format_price, PlaceSummary};

/// Class shared by every rendered place card
pub const PLACE_CARD_CLASS: &str = "place-card";

/// Attribute carrying the card's price for the price filter
pub const PRICE_ATTRIBUTE: &str = "data-price";

/// Render one card per place, preserving the backend's order
pub fn render_place_list(places: &[PlaceSummary]) -> Vec<Fragment> {
    places.iter().map(render_place_card).collect()
}

fn render_place_card(place: &PlaceSummary) -> Fragment {
    let price = format_price(place.price);

    Fragment::new("div")
        .class(PLACE_CARD_CLASS)
        .attr(PRICE_ATTRIBUTE, price.clone())
        .html(format!(
            "<h3>{}</h3><p>${}/night</p><a class=\"details-button\" href=\"{}\">View Details</a>",
            escape_html(&place.name),
            price,
            escape_html(&detail_href(&place.id)),
        ))
}

/// Link to the detail page for a place
pub fn detail_href(place_id: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("id", place_id)
        .finish();
    format!("place.html?{}", query)
}
