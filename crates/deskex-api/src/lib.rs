//! Helpdesk API client with retrying fetch and response validation.
//!
//! # Architecture
//!
//! - [`model`] - Wire models for the two endpoints
//! - [`data`] - Fixed retry policy (attempt ceiling, per-endpoint cooldowns)
//! - [`http`] - Transport trait with a feature-gated reqwest implementation
//! - [`client`] - The attempt loop and JSON validation
//!
//! The transport sits behind [`HttpClient`] so the retry behavior is testable
//! with scripted responses; `reqwest` is the default production
//! implementation.

pub mod client;
pub mod data;
pub mod error;
pub mod http;
pub mod model;

pub use client::{CustomerApi, DEFAULT_BASE_URL};
pub use data::{Cooldowns, MAX_ATTEMPTS};
pub use error::{ApiError, Result};
pub use http::{HttpClient, HttpResponse};
pub use model::{CustomerDetail, CustomerSummary, DetailEnvelope, EmailEntry, PhoneEntry};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
