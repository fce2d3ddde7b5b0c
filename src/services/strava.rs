// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for token refresh and activity listing.
//!
//! Handles:
//! - Exchanging the refresh token for an access token
//! - Paging through the athlete activities list
//!
//! Failures are logged and turned into empty or partial results. There is
//! no retry and no token caching: every render asks for a fresh token.

use crate::config::{Config, PageFailurePolicy, StravaCredentials};
use crate::error::{AppError, Result};
use crate::models::ActivityRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Activities requested per page.
pub const PAGE_SIZE: u32 = 200;

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    token_url: String,
    activities_url: String,
}

impl StravaClient {
    /// Create a new client against the given endpoints.
    pub fn new(token_url: String, activities_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            token_url,
            activities_url,
        }
    }

    /// Exchange a refresh token for a short-lived access token.
    pub async fn refresh_access_token(
        &self,
        credentials: &StravaCredentials,
    ) -> Result<TokenRefreshResponse> {
        let body = TokenRefreshRequest {
            client_id: &credentials.client_id,
            client_secret: &credentials.client_secret,
            refresh_token: &credentials.refresh_token,
            grant_type: "refresh_token",
        };

        let response = self.http.post(&self.token_url).json(&body).send().await?;

        let token: TokenRefreshResponse = self.check_response_json(response).await?;
        if token.access_token.is_empty() {
            return Err(AppError::TokenAcquisition(
                "response carried an empty access_token".to_string(),
            ));
        }
        Ok(token)
    }

    /// List one page of activities started after `after` (Unix timestamp).
    pub async fn list_activities(
        &self,
        access_token: &str,
        after: i64,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<ActivityRecord>> {
        let response = self
            .http
            .get(&self.activities_url)
            .bearer_auth(access_token)
            .query(&[
                ("after", after.to_string()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();

            if status == 429 {
                tracing::warn!("Strava rate limit hit (429)");
            }

            return Err(AppError::HttpStatus { status, body });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| AppError::MalformedResponse(e.to_string()))
    }
}

/// JSON body for the refresh-token grant.
#[derive(Serialize)]
struct TokenRefreshRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
    grant_type: &'static str,
}

/// Token refresh response from Strava. Only the access token is used.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRefreshResponse {
    pub access_token: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// TokenRefresher / ActivityFetcher
// ─────────────────────────────────────────────────────────────────────────────

/// Obtains a fresh access token on every call.
#[derive(Clone)]
pub struct TokenRefresher {
    client: StravaClient,
    credentials: StravaCredentials,
}

impl TokenRefresher {
    pub fn new(client: StravaClient, credentials: StravaCredentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Request an access token, or `None` if anything goes wrong.
    pub async fn get_access_token(&self) -> Option<String> {
        match self.client.refresh_access_token(&self.credentials).await {
            Ok(response) => Some(response.access_token),
            Err(e) => {
                tracing::error!(error = %e, "Error refreshing token");
                None
            }
        }
    }
}

/// Pages through the athlete's activities from a window start.
#[derive(Clone)]
pub struct ActivityFetcher {
    client: StravaClient,
    tokens: TokenRefresher,
    page_failure: PageFailurePolicy,
    per_page: u32,
}

impl ActivityFetcher {
    pub fn new(
        client: StravaClient,
        tokens: TokenRefresher,
        page_failure: PageFailurePolicy,
    ) -> Self {
        Self {
            client,
            tokens,
            page_failure,
            per_page: PAGE_SIZE,
        }
    }

    /// Build the client, refresher and fetcher from configuration.
    pub fn from_config(config: &Config) -> Self {
        let client = StravaClient::new(
            config.token_endpoint.clone(),
            config.activities_endpoint.clone(),
        );
        let tokens = TokenRefresher::new(client.clone(), config.credentials.clone());
        Self::new(client, tokens, config.page_failure)
    }

    /// Override the page size (tests use small pages).
    pub fn with_page_size(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Fetch every activity started after `window_start`, in API order.
    ///
    /// Returns an empty vector when no token can be obtained, which looks the
    /// same as an athlete with no activities.
    pub async fn fetch_activities(&self, window_start: DateTime<Utc>) -> Vec<ActivityRecord> {
        let Some(access_token) = self.tokens.get_access_token().await else {
            return Vec::new();
        };

        let after = window_start.timestamp();
        let mut activities = Vec::new();
        let mut page = 1;

        loop {
            let batch = match self
                .client
                .list_activities(&access_token, after, page, self.per_page)
                .await
            {
                Ok(batch) => batch,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        page,
                        fetched = activities.len(),
                        policy = ?self.page_failure,
                        "Strava fetch failed"
                    );
                    return match self.page_failure {
                        PageFailurePolicy::KeepPartial => activities,
                        PageFailurePolicy::DiscardAll => Vec::new(),
                    };
                }
            };

            let batch_len = batch.len();
            tracing::debug!(page, count = batch_len, "Fetched activity page");
            activities.extend(batch);

            if batch_len < self.per_page as usize {
                break;
            }
            page += 1;
        }

        activities
    }
}
