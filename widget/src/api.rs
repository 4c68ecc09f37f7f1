//! HTTP client for the viewer count endpoint.
//!
//! No timeouts, no retries, no cancellation: each call is a single
//! request/response and the caller decides what a failure means.

use anyhow::Error;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct ViewerCountResponse {
    #[serde(rename = "viewerCount")]
    viewer_count: i64,
}

#[derive(Serialize)]
struct MutateRequest {
    action: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub enum Action {
    Increment,
    Decrement,
}

impl Action {
    fn as_str(self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }
}

#[derive(Clone)]
pub struct CounterApi {
    http: reqwest::Client,
    endpoint: String,
}

impl CounterApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{base_url}/api/viewerCount"),
        }
    }

    pub async fn fetch(&self) -> Result<i64, Error> {
        let response: ViewerCountResponse =
            self.http.get(&self.endpoint).send().await?.json().await?;

        Ok(response.viewer_count)
    }

    pub async fn mutate(&self, action: Action) -> Result<i64, Error> {
        let response: ViewerCountResponse = self
            .http
            .post(&self.endpoint)
            .json(&MutateRequest {
                action: action.as_str(),
            })
            .send()
            .await?
            .json()
            .await?;

        Ok(response.viewer_count)
    }
}
