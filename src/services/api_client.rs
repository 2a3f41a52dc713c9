// src/services/api_client.rs
// DOCUMENTATION: HBnB REST API client
// PURPOSE: Login, place listing, place details and review submission over HTTP

use crate::config::ClientConfig;
use crate::errors::ClientError;
use crate::models::{ApiErrorBody, LoginRequest, NewReview, PlaceDetail, PlaceSummary, TokenResponse};
use crate::session::AuthContext;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use url::Url;

/// HBnB REST API client
/// DOCUMENTATION: One attempt per call, no retries and no timeouts.
/// Every operation has a `*_request` builder so the exact request (method,
/// URL, headers, body) can be inspected without touching the network
#[derive(Debug, Clone)]
pub struct HbnbApiClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL, e.g. http://localhost:5000/api/v1
    base_url: String,
}

impl HbnbApiClient {
    /// Create new API client
    /// DOCUMENTATION: Uses the configured base URL verbatim
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    /// Create client around an existing reqwest client (proxy or TLS settings)
    pub fn with_client(config: &ClientConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.api_base_url.clone(),
        }
    }

    /// Build the request for POST /login
    pub fn login_request(&self, email: &str, password: &str) -> Result<Request, ClientError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        Ok(self.client.post(self.endpoint(&["login"])?).json(&body).build()?)
    }

    /// Build the request for GET /places
    /// DOCUMENTATION: Authorization is attached only when a token is present
    pub fn list_places_request(&self, auth: &AuthContext) -> Result<Request, ClientError> {
        let builder = self.client.get(self.endpoint(&["places"])?);
        Ok(with_optional_auth(builder, auth).build()?)
    }

    /// Build the request for GET /places/{id}
    pub fn place_detail_request(
        &self,
        auth: &AuthContext,
        place_id: &str,
    ) -> Result<Request, ClientError> {
        let builder = self.client.get(self.endpoint(&["places", place_id])?);
        Ok(with_optional_auth(builder, auth).build()?)
    }

    /// Build the request for POST /reviews
    /// DOCUMENTATION: Bearer auth is mandatory for this endpoint
    pub fn submit_review_request(
        &self,
        token: &str,
        review: &NewReview,
    ) -> Result<Request, ClientError> {
        Ok(self
            .client
            .post(self.endpoint(&["reviews"])?)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .json(review)
            .build()?)
    }

    /// Log in with email and password
    ///
    /// # Returns
    /// The issued token, or `ClientError::Api` carrying the server's message
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ClientError> {
        log::debug!("Logging in as {}", email);
        let response = self.execute(self.login_request(email, password)?).await?;
        decode_json(response).await
    }

    /// Fetch all places, in the order the backend returns them
    pub async fn list_places(&self, auth: &AuthContext) -> Result<Vec<PlaceSummary>, ClientError> {
        log::debug!(
            "Fetching places (authenticated: {})",
            auth.is_authenticated()
        );
        let response = self.execute(self.list_places_request(auth)?).await?;
        let places: Vec<PlaceSummary> = decode_json(response).await?;
        log::info!("Fetched {} places", places.len());
        Ok(places)
    }

    /// Fetch one place with its amenities and reviews
    pub async fn fetch_place_detail(
        &self,
        auth: &AuthContext,
        place_id: &str,
    ) -> Result<PlaceDetail, ClientError> {
        log::debug!("Fetching place details: place_id={}", place_id);
        let response = self
            .execute(self.place_detail_request(auth, place_id)?)
            .await?;
        decode_json(response).await
    }

    /// Submit a review; any 2xx counts as success and the body is ignored
    pub async fn submit_review(&self, token: &str, review: &NewReview) -> Result<(), ClientError> {
        log::debug!("Submitting review for place_id={}", review.place_id);
        self.execute(self.submit_review_request(token, review)?)
            .await?;
        log::info!("Review submitted for place_id={}", review.place_id);
        Ok(())
    }

    /// Send a request and turn non-2xx responses into `ClientError::Api`,
    /// or `ClientError::Decode` when the error body is not JSON
    async fn execute(&self, request: Request) -> Result<Response, ClientError> {
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.client.execute(request).await.map_err(|e| {
            log::error!("{} {} failed: {}", method, url, e);
            ClientError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // A non-JSON error body (HTML page, empty) is a parse failure, not an API message
        let body = response.text().await.map_err(|e| {
            log::error!("{} {} returned {}; body unreadable: {}", method, url, status, e);
            ClientError::from(e)
        })?;
        let error_body: ApiErrorBody = serde_json::from_str(&body).map_err(|e| {
            log::error!("{} {} returned {} with a non-JSON body: {}", method, url, status, e);
            ClientError::Decode(e.to_string())
        })?;
        let message = error_body.into_message().unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_u16().to_string())
        });

        log::error!("{} {} returned {}: {}", method, url, status, message);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Base URL extended with percent-encoded path segments
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| ClientError::Request(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn with_optional_auth(builder: RequestBuilder, auth: &AuthContext) -> RequestBuilder {
    match auth.bearer() {
        Some(bearer) => builder.header(AUTHORIZATION, bearer),
        None => builder,
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    response.json::<T>().await.map_err(|e| {
        log::error!("Failed to parse API response: {}", e);
        ClientError::Decode(e.to_string())
    })
}
