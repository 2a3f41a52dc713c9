// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod auth;
pub mod place;
pub mod review;

pub use auth::*;
pub use place::*;
pub use review::*;
