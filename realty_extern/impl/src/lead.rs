use std::sync::Arc;

use anyhow::{anyhow, Context};
use realty_extern_contracts::lead::{LeadApiError, LeadApiResponse, LeadApiService};
use realty_models::lead::LeadSubmission;
use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use crate::http::HttpClient;

/// The spreadsheet script cannot answer CORS preflight requests, so only a
/// "simple" content type may be used.
const CONTENT_TYPE: &str = "text/plain;charset=utf-8";

const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Clone)]
pub struct LeadApiServiceImpl {
    config: LeadApiServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct LeadApiServiceConfig {
    endpoint: Option<Arc<Url>>,
}

impl LeadApiServiceConfig {
    pub fn new(endpoint: Option<Url>) -> Self {
        Self {
            endpoint: endpoint.map(Arc::new),
        }
    }
}

impl LeadApiServiceImpl {
    pub fn new(config: LeadApiServiceConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            http: HttpClient::new()?,
        })
    }
}

impl LeadApiService for LeadApiServiceImpl {
    #[instrument(skip_all)]
    async fn submit_lead(
        &self,
        submission: LeadSubmission,
    ) -> Result<LeadApiResponse, LeadApiError> {
        let endpoint = self
            .config
            .endpoint
            .as_deref()
            .cloned()
            .ok_or_else(|| anyhow!("Lead endpoint is not configured"))?;

        let body = serde_json::to_string(&LeadRequest::from(&submission))
            .context("Failed to serialize lead")?;

        let response = self
            .http
            .post(endpoint)
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .context("Failed to send lead request")?;

        let status = response.status();
        debug!(%status, "Lead endpoint responded");
        if !status.is_success() {
            return Err(LeadApiError::Status(status.as_u16()));
        }

        response
            .json::<LeadResponse>()
            .await
            .map(Into::into)
            .context("Failed to deserialize lead response")
            .map_err(Into::into)
    }
}

#[derive(Serialize)]
struct LeadRequest<'a> {
    name: &'a str,
    whatsapp: &'a str,
    mobile: &'a str,
    email: &'a str,
    message: &'a str,
}

impl<'a> From<&'a LeadSubmission> for LeadRequest<'a> {
    fn from(value: &'a LeadSubmission) -> Self {
        Self {
            name: &value.name,
            whatsapp: value.whatsapp.as_deref().map_or("", |x| x.as_str()),
            mobile: &value.mobile,
            email: &value.email,
            message: &value.message,
        }
    }
}

#[derive(Deserialize)]
struct LeadResponse {
    status: String,
    message: Option<String>,
}

impl From<LeadResponse> for LeadApiResponse {
    fn from(value: LeadResponse) -> Self {
        Self {
            success: value.status == SUCCESS_STATUS,
            message: value.message,
        }
    }
}
