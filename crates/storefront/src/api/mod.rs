//! Sweet shop REST API client.
//!
//! # Architecture
//!
//! - JSON over HTTP with `reqwest`
//! - The API is the source of truth - nothing is cached, every page view
//!   fetches a fresh listing
//! - Product calls carry the bearer token issued at login
//!
//! # Endpoints
//!
//! ```text
//! POST /api/auth/login             {username, password} -> {token, user}
//! POST /api/auth/register          {username, password}
//! GET  /api/sweets                 -> [Sweet]
//! GET  /api/sweets/search?...      -> [Sweet]
//! POST /api/sweets/{id}/purchase   {quantity}
//! ```
//!
//! Failed calls answer with a JSON body like `{"error": "Insufficient stock"}`.
//! The message is optional and is carried in [`ApiError::Rejected`].

mod client;

pub use client::SweetShopClient;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the sweet shop API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API rejected request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    /// Human-readable message supplied by the server, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// Message to show the user: the server's own words when it sent some,
    /// otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}
