// src/models/review.rs

use serde::{Deserialize, Serialize};

use super::place::null_as_default;

/// Review embedded in a place detail response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user: String,
    #[serde(default, alias = "text", deserialize_with = "null_as_default")]
    pub comment: String,
    /// Star count; absent when the backend omits it
    #[serde(default)]
    pub rating: Option<i64>,
}

/// Request body for POST /reviews
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub place_id: String,
    pub comment: String,
    /// Serialized as `null` when the form value is not an integer
    pub rating: Option<i64>,
}

impl NewReview {
    /// Build a review from raw form values
    /// DOCUMENTATION: The rating is the only field interpreted client-side
    pub fn from_form(place_id: &str, comment: &str, rating: &str) -> Self {
        NewReview {
            place_id: place_id.to_string(),
            comment: comment.to_string(),
            rating: parse_rating(rating),
        }
    }
}

/// Integer prefix of a form value: "4" -> 4, " 3 stars" -> 3, "4.5" -> 4, "x" -> None
pub fn parse_rating(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i64>().ok().map(|value| sign * value)
}
