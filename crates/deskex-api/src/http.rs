//! Asynchronous HTTP transport abstraction.
//!
//! The API client only ever needs a buffered GET: status code plus body text.
//! Keeping the transport behind a trait lets tests script responses without a
//! network.
//!
//! # Implementations
//!
//! - [`ReqwestClient`]: production implementation using `reqwest`
//! - Mock implementations in test code

use std::future::Future;

/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("deskex/", env!("CARGO_PKG_VERSION"));

/// A fully buffered HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP client interface for the API endpoints.
pub trait HttpClient: Send + Sync {
    /// Transport-level error type (DNS failure, timeout, connection reset).
    type Error: std::error::Error + Send + 'static;

    /// Issue a GET and buffer the whole response body.
    ///
    /// A non-2xx status is not an error at this layer; it comes back as a
    /// normal [`HttpResponse`] for the caller to classify.
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<HttpResponse, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

    /// Production HTTP client implementation using reqwest.
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        /// Build a client with the static default headers the API expects.
        pub fn new() -> Result<Self, reqwest::Error> {
            let mut headers = HeaderMap::new();
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

            let client = reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .default_headers(headers)
                .build()?;

            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(&self, url: &str) -> Result<HttpResponse, Self::Error> {
            let response = self.client.get(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;

            Ok(HttpResponse { status, body })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
