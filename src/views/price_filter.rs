// src/views/price_filter.rs
// DOCUMENTATION: Client-side price filter
// PURPOSE: Fixed price buckets and visibility toggling over rendered place cards

use super::fragment::Fragment;
use super::place_list::{PLACE_CARD_CLASS, PRICE_ATTRIBUTE};
use crate::page::Page;

/// Selection value meaning "no limit"
pub const ALL_PRICES: &str = "All";

/// Filter buckets as (option value, label); fixed, not derived from data
pub const PRICE_BUCKETS: [(&str, &str); 4] = [
    (ALL_PRICES, "All"),
    ("10", "Under $10"),
    ("50", "Under $50"),
    ("100", "Under $100"),
];

/// Options for the `price-filter` select
pub fn price_filter_options() -> Vec<Fragment> {
    PRICE_BUCKETS
        .iter()
        .map(|(value, label)| Fragment::new("option").attr("value", *value).text(label))
        .collect()
}

/// Parsed filter selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceThreshold {
    All,
    AtMost(f64),
    /// Not a number: no price compares at or below it
    Unparseable,
}

impl PriceThreshold {
    pub fn parse(selection: &str) -> Self {
        if selection == ALL_PRICES {
            return PriceThreshold::All;
        }
        match selection.trim().parse::<f64>() {
            Ok(max) if !max.is_nan() => PriceThreshold::AtMost(max),
            _ => PriceThreshold::Unparseable,
        }
    }

    /// Whether a card tagged with `price` stays visible
    pub fn shows(&self, price: Option<&str>) -> bool {
        match self {
            PriceThreshold::All => true,
            PriceThreshold::AtMost(max) => price
                .and_then(|p| p.trim().parse::<f64>().ok())
                .map_or(false, |p| p <= *max),
            PriceThreshold::Unparseable => false,
        }
    }
}

/// Show or hide every rendered place card for the selected bucket
/// DOCUMENTATION: One synchronous pass over the current cards; applying the
/// same selection again leaves the visible set unchanged
///
/// # Returns
/// Number of cards left visible
pub fn apply_price_filter<P: Page + ?Sized>(page: &P, selection: &str) -> usize {
    let threshold = PriceThreshold::parse(selection);
    let prices = page.attribute_values(PLACE_CARD_CLASS, PRICE_ATTRIBUTE);

    let mut visible = 0;
    for (index, price) in prices.iter().enumerate() {
        let shown = threshold.shows(price.as_deref());
        page.set_class_member_visible(PLACE_CARD_CLASS, index, shown);
        if shown {
            visible += 1;
        }
    }

    log::debug!(
        "Price filter {:?}: {} of {} cards visible",
        threshold,
        visible,
        prices.len()
    );
    visible
}
