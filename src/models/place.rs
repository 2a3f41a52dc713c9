// src/models/place.rs
// DOCUMENTATION: Place data structures returned by the REST backend
// PURPOSE: Deserialization models for the listing and detail endpoints

use serde::{Deserialize, Deserializer, Serialize};

use super::Review;

/// One entry of GET /places
/// DOCUMENTATION: Only the fields the listing page renders are kept;
/// everything else in the payload is ignored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceSummary {
    /// Place identifier, carried into the detail link
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    /// Display name (the backend calls it `title`)
    #[serde(default, alias = "title", deserialize_with = "null_as_default")]
    pub name: String,

    /// Price per night, also tagged on the card for filtering
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
}

/// Response of GET /places/{id}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetail {
    #[serde(default, alias = "title", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub host: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Amenities in the order the backend lists them
    #[serde(default)]
    pub amenities: Vec<Amenity>,

    /// Reviews in the order received
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Amenity entry
/// DOCUMENTATION: Accepts both plain names and `{ id, name }` objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amenity {
    Name(String),
    Object {
        #[serde(default)]
        id: Option<String>,
        name: String,
    },
}

impl Amenity {
    pub fn name(&self) -> &str {
        match self {
            Amenity::Name(name) => name,
            Amenity::Object { name, .. } => name,
        }
    }
}

impl PlaceDetail {
    /// Amenity names joined for display
    pub fn amenity_list(&self) -> String {
        self.amenities
            .iter()
            .map(Amenity::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Format a price the way it is shown and tagged (100.0 -> "100", 99.5 -> "99.5")
pub fn format_price(price: f64) -> String {
    format!("{}", price)
}

/// Missing and `null` fields both take the type's default
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}
