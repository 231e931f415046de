use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

#[derive(Clone)]
pub struct OrdersClient {
    http_client: Client,
    base_url: String,
}

/// Status and decoded body of one `GET /orders` call. The element schema
/// of the order records is deliberately left opaque.
#[derive(Debug)]
pub struct OrdersResponse {
    pub status: StatusCode,
    pub payload: Value,
}

impl OrdersClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let http_client = Client::builder().timeout(timeout).build().unwrap();

        Self {
            http_client,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the full order list. Any non-JSON body is a [`FetchError::Decode`],
    /// regardless of the status code.
    pub async fn get_orders(&self) -> Result<OrdersResponse, FetchError> {
        let url = format!("{}/orders", &self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let status = response.status();
        let payload = response
            .json::<Value>()
            .await
            .map_err(FetchError::from_reqwest)?;

        Ok(OrdersResponse { status, payload })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request to the orders endpoint timed out")]
    Timeout(#[source] reqwest::Error),
    #[error("Failed to connect to the orders endpoint")]
    Connection(#[source] reqwest::Error),
    #[error("Failed to decode the response body as JSON")]
    Decode(#[source] reqwest::Error),
    #[error("Transport error while calling the orders endpoint")]
    Transport(#[source] reqwest::Error),
}

impl FetchError {
    fn from_reqwest(e: reqwest::Error) -> Self {
        // reqwest reports a timed-out body read as both timeout and decode,
        // so the timeout check has to come first.
        if e.is_timeout() {
            Self::Timeout(e)
        } else if e.is_connect() {
            Self::Connection(e)
        } else if e.is_decode() {
            Self::Decode(e)
        } else {
            Self::Transport(e)
        }
    }
}
