// src/lib.rs
// DOCUMENTATION: HBnB web client library
// PURPOSE: Browser-side controller for the HBnB listing pages: token cookie,
// REST calls, rendering, price filter, per-page flows

pub mod config;
pub mod controller;
pub mod errors;
pub mod models;
pub mod page;
pub mod services;
pub mod session;
pub mod views;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use config::ClientConfig;
pub use controller::{EventBinding, PageAction, PageController, Route};
pub use errors::ClientError;
pub use page::{HeadlessPage, Page};
pub use services::HbnbApiClient;
pub use session::AuthContext;
