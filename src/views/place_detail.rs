// src/views/place_detail.rs
// DOCUMENTATION: Detail page renderer
// PURPOSE: Build the place info panel and the reviews panel for one place

use super::fragment::{escape_html, Fragment};
use crate::models::{format_price, PlaceDetail, Review};

/// Glyph repeated once per rating point
pub const RATING_GLYPH: &str = "⭐";

/// Most glyphs a single review shows; the backend accepts ratings 1 to 5
pub const MAX_RATING_GLYPHS: i64 = 5;

/// Rendered detail page: one info panel and the reviews panel contents
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDetailView {
    /// Children of `place-details`
    pub info: Vec<Fragment>,
    /// Children of `reviews`: a heading followed by one card per review
    pub reviews: Vec<Fragment>,
}

pub fn render_place_detail(place: &PlaceDetail) -> PlaceDetailView {
    let info = Fragment::new("div").class("place-info").html(format!(
        "<h2>{}</h2>\
         <p><strong>Host:</strong> {}</p>\
         <p><strong>Price:</strong> ${}/night</p>\
         <p><strong>Description:</strong> {}</p>\
         <p><strong>Amenities:</strong> {}</p>",
        escape_html(&place.name),
        escape_html(&place.host),
        format_price(place.price),
        escape_html(&place.description),
        escape_html(&place.amenity_list()),
    ));

    let mut reviews = vec![Fragment::new("h3").text("Reviews")];
    reviews.extend(place.reviews.iter().map(render_review));

    PlaceDetailView {
        info: vec![info],
        reviews,
    }
}

fn render_review(review: &Review) -> Fragment {
    Fragment::new("div").class("review-card").html(format!(
        "<p><strong>{}:</strong> {}</p><p>Rating: {}</p>",
        escape_html(&review.user),
        escape_html(&review.comment),
        rating_glyphs(review.rating),
    ))
}

/// One glyph per point, at most `MAX_RATING_GLYPHS`; zero, negative and
/// missing ratings render nothing
pub fn rating_glyphs(rating: Option<i64>) -> String {
    let count = rating.unwrap_or(0).clamp(0, MAX_RATING_GLYPHS) as usize;
    RATING_GLYPH.repeat(count)
}
