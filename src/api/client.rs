//! HTTP client for the dashboard backend
//!
//! Provides JSON requests against the three backend routes with:
//! - One shared reqwest connection pool
//! - Configurable base URL and `/api` prefix
//! - Bounded request time

use crate::api::backend::AdvisorBackend;
use crate::api::endpoints::{ApiProfile, Endpoints};
use crate::errors::{DashboardError, Result};
use crate::types::{AdviserStudentResponse, AskRequest, AskResponse, DashboardResponse, StudentId};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Request timeout (30 seconds)
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Dashboard backend client
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    endpoints: Endpoints,
}

impl ApiClient {
    /// Create client for the legacy backend address
    pub fn new() -> Result<Self> {
        Self::with_config(Endpoints::for_profile(ApiProfile::Legacy), REQUEST_TIMEOUT)
    }

    /// Create client with custom endpoints and timeout
    pub fn with_config(endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(DashboardError::HttpError)?;

        Ok(Self { client, endpoints })
    }

    /// Get resolved endpoints
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode(url, response).await
    }

    async fn decode<T: DeserializeOwned>(url: String, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered HTTP {}", url, status);
            return Err(DashboardError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            log::warn!("Undecodable body from {}: {}", url, e);
            DashboardError::SerializationError(e)
        })
    }
}

#[async_trait]
impl AdvisorBackend for ApiClient {
    async fn fetch_dashboard(&self, id: StudentId) -> Result<DashboardResponse> {
        self.get_json(self.endpoints.dashboard(id)).await
    }

    async fn fetch_adviser_student(&self, id: StudentId) -> Result<AdviserStudentResponse> {
        self.get_json(self.endpoints.adviser_student(id)).await
    }

    async fn ask(&self, id: StudentId, question: &str) -> Result<String> {
        let url = self.endpoints.ask(id);
        log::debug!("POST {}", url);

        let request = AskRequest {
            question: question.to_string(),
        };
        let response = self.client.post(&url).json(&request).send().await?;
        let reply: AskResponse = Self::decode(url, response).await?;
        Ok(reply.response)
    }
}
