// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for Strava calls.
//!
//! The grid path never returns these to a page: failures are logged where
//! they happen and turned into empty or partial results.

/// Failure talking to Strava.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Token acquisition failed: {0}")]
    TokenAcquisition(String),

    #[error("Strava request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Strava returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed Strava response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for Strava calls
pub type Result<T> = std::result::Result<T, AppError>;
