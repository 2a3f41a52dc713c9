// src/views/mod.rs
// DOCUMENTATION: View renderers
// PURPOSE: Pure data-to-fragment rendering plus the price filter

pub mod fragment;
pub mod place_detail;
pub mod place_list;
pub mod price_filter;

pub use fragment::{escape_html, Fragment};
pub use place_detail::{rating_glyphs, render_place_detail, PlaceDetailView};
pub use place_list::{detail_href, render_place_list, PLACE_CARD_CLASS, PRICE_ATTRIBUTE};
pub use price_filter::{apply_price_filter, price_filter_options, PriceThreshold, ALL_PRICES};
