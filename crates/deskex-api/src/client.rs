//! The retrying API client.
//!
//! Each operation wraps one endpoint call in the fixed attempt loop: classify
//! the outcome, cool down, try again. Transient failures never escape this
//! module; callers only ever see a decoded value, a definitive absence, or
//! [`ApiError::RetriesExhausted`].

use tokio::time::sleep;
use tracing::{debug, warn};

use crate::data::{Cooldowns, MAX_ATTEMPTS};
use crate::error::{ApiError, Result};
use crate::http::HttpClient;
use crate::model::{CustomerDetail, CustomerSummary, DetailEnvelope};

/// Base URL of the helpdesk API.
pub const DEFAULT_BASE_URL: &str = "https://api.usedesk.ru";

/// Failure of a single attempt, classified for backoff.
enum AttemptFailure {
    Transport(String),
    RateLimited,
    Http(u16),
    InvalidJson { snippet: String },
    Decode(String),
}

pub struct CustomerApi<C: HttpClient> {
    http: C,
    base_url: String,
}

impl<C: HttpClient> CustomerApi<C> {
    pub fn new(http: C) -> Self {
        Self::with_base_url(http, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default base URL. Trailing slashes are
    /// stripped so endpoint paths join cleanly.
    pub fn with_base_url(http: C, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { http, base_url }
    }

    /// Fetch one page of the customer list.
    ///
    /// Retries transient failures up to [`MAX_ATTEMPTS`] times. Exhaustion is
    /// the caller's signal to stop paginating.
    pub async fn list_page(
        &self,
        token: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<CustomerSummary>> {
        let url = format!(
            "{}/clients?api_token={}&limit={}&offset={}",
            self.base_url, token, limit, offset
        );
        let cooldowns = Cooldowns::list();
        let mut last = None;

        for attempt in 1..=MAX_ATTEMPTS {
            debug!(offset, attempt, max = MAX_ATTEMPTS, "requesting customer list page");

            let failure = match self.attempt(&url).await {
                Ok(value) => match serde_json::from_value::<Vec<CustomerSummary>>(value) {
                    Ok(page) => {
                        debug!(count = page.len(), offset, "received customer list page");
                        return Ok(page);
                    }
                    Err(e) => AttemptFailure::Decode(e.to_string()),
                },
                Err(failure) => failure,
            };
            last = Some(back_off(failure, &cooldowns, attempt).await);
        }

        warn!(offset, "customer list page failed after {MAX_ATTEMPTS} attempts");
        Err(ApiError::RetriesExhausted {
            attempts: MAX_ATTEMPTS,
            source: last.map(Box::new),
        })
    }

    /// Fetch the detail record for one customer.
    ///
    /// `Ok(None)` means the API answered definitively that the customer has
    /// no detail record; that outcome is never retried.
    pub async fn get_detail(
        &self,
        token: &str,
        customer_id: i64,
    ) -> Result<Option<CustomerDetail>> {
        let url = format!(
            "{}/client?api_token={}&client_id={}",
            self.base_url, token, customer_id
        );
        let cooldowns = Cooldowns::detail();
        let mut last = None;

        for attempt in 1..=MAX_ATTEMPTS {
            debug!(customer_id, attempt, max = MAX_ATTEMPTS, "requesting customer detail");

            let failure = match self.attempt(&url).await {
                // A literal `null` body is the API's other way of saying the
                // customer has no detail record; definitive, not transient.
                Ok(serde_json::Value::Null) => {
                    debug!(customer_id, "customer has no detail record");
                    return Ok(None);
                }
                Ok(value) => match serde_json::from_value::<Vec<DetailEnvelope>>(value) {
                    Ok(mut envelopes) => {
                        if envelopes.is_empty() {
                            debug!(customer_id, "customer has no detail record");
                            return Ok(None);
                        }
                        // Only the first envelope is meaningful.
                        return Ok(Some(envelopes.swap_remove(0).client));
                    }
                    Err(e) => AttemptFailure::Decode(e.to_string()),
                },
                Err(failure) => failure,
            };
            last = Some(back_off(failure, &cooldowns, attempt).await);
        }

        warn!(customer_id, "customer detail failed after {MAX_ATTEMPTS} attempts");
        Err(ApiError::RetriesExhausted {
            attempts: MAX_ATTEMPTS,
            source: last.map(Box::new),
        })
    }

    /// One request attempt: transport, status classification, and the
    /// syntactic JSON check. Shape decoding is endpoint-specific and stays
    /// with the caller.
    async fn attempt(&self, url: &str) -> std::result::Result<serde_json::Value, AttemptFailure> {
        let response = self
            .http
            .get(url)
            .await
            .map_err(|e| AttemptFailure::Transport(e.to_string()))?;

        if response.status == 429 {
            return Err(AttemptFailure::RateLimited);
        }
        if !response.is_success() {
            return Err(AttemptFailure::Http(response.status));
        }

        serde_json::from_str(response.body.trim()).map_err(|_| AttemptFailure::InvalidJson {
            snippet: snippet(&response.body).to_string(),
        })
    }
}

/// Log the failure, sleep the matching cooldown, and hand back the error the
/// attempt reduces to. Transport errors skip the sleep on the final attempt;
/// there is nothing left to wait for.
async fn back_off(failure: AttemptFailure, cooldowns: &Cooldowns, attempt: u32) -> ApiError {
    match failure {
        AttemptFailure::RateLimited => {
            warn!(
                "rate limited (HTTP 429), cooling down for {}s",
                cooldowns.rate_limited.as_secs()
            );
            sleep(cooldowns.rate_limited).await;
            ApiError::Status { status: 429 }
        }
        AttemptFailure::Http(status) => {
            warn!(
                status,
                "HTTP error, cooling down for {}s",
                cooldowns.http_error.as_secs()
            );
            sleep(cooldowns.http_error).await;
            ApiError::Status { status }
        }
        AttemptFailure::InvalidJson { snippet } => {
            warn!(%snippet, "response body is not JSON");
            sleep(cooldowns.bad_body).await;
            ApiError::InvalidJson
        }
        AttemptFailure::Decode(message) => {
            warn!(%message, "response failed shape decode");
            sleep(cooldowns.bad_body).await;
            ApiError::Decode(message)
        }
        AttemptFailure::Transport(message) => {
            warn!(%message, "transport error");
            if attempt < MAX_ATTEMPTS {
                sleep(cooldowns.transport).await;
            }
            ApiError::Transport(message)
        }
    }
}

/// First 200 characters of a body, for log lines about non-JSON responses.
fn snippet(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((i, _)) => &body[..i],
        None => body,
    }
}
