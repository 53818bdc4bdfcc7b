use std::future::Future;

use realty_models::lead::{LeadForm, LeadSubmission};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LeadService: Send + Sync + 'static {
    /// Run the submission checks on the current form contents.
    ///
    /// The checks run in a fixed order and the first failing one is
    /// returned.
    fn validate(&self, form: &LeadForm) -> Result<LeadSubmission, LeadValidationError>;

    /// Send a validated lead to the lead endpoint. Failed attempts are not
    /// retried.
    fn submit(
        &self,
        submission: LeadSubmission,
    ) -> impl Future<Output = Result<(), LeadSubmitError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LeadValidationError {
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please fill in all required fields.")]
    MissingRequiredFields,
    #[error("Please keep your message within 500 characters.")]
    MessageTooLong,
    #[error("Please enter a valid mobile number for the selected country.")]
    InvalidMobile,
    #[error("Please enter a valid WhatsApp number.")]
    InvalidWhatsapp,
}

#[derive(Debug, Error)]
pub enum LeadSubmitError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("Server responded with {0}")]
    Status(u16),
    /// The endpoint answered, but did not report success.
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockLeadService {
    pub fn with_validate(
        mut self,
        form: LeadForm,
        result: Result<LeadSubmission, LeadValidationError>,
    ) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(form))
            .return_once(move |_| result);
        self
    }

    pub fn with_submit(
        mut self,
        submission: LeadSubmission,
        result: Result<(), LeadSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
