use std::future::Future;

use realty_models::lead::LeadSubmission;
use thiserror::Error;

/// The external lead endpoint which appends leads to the spreadsheet and
/// sends the notification emails.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LeadApiService: Send + Sync + 'static {
    /// Post a lead to the endpoint. Exactly one request is sent per call.
    fn submit_lead(
        &self,
        submission: LeadSubmission,
    ) -> impl Future<Output = Result<LeadApiResponse, LeadApiError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadApiResponse {
    /// Whether the endpoint reported `"status": "success"`.
    pub success: bool,
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum LeadApiError {
    #[error("Lead endpoint responded with status {0}")]
    Status(u16),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockLeadApiService {
    pub fn with_submit_lead(
        mut self,
        submission: LeadSubmission,
        result: Result<LeadApiResponse, LeadApiError>,
    ) -> Self {
        self.expect_submit_lead()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
