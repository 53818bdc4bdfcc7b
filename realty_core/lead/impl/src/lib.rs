use std::time::Duration;

use realty_core_lead_contracts::{LeadService, LeadSubmitError, LeadValidationError};
use realty_core_phone_contracts::PhoneService;
use realty_extern_contracts::lead::{LeadApiError, LeadApiService};
use realty_models::lead::{
    LeadEmail, LeadForm, LeadMessage, LeadName, LeadPhoneNumber, LeadSubmission,
    LEAD_MESSAGE_MAX_CHARS,
};
use tracing::{info, instrument, warn};

#[cfg(test)]
mod tests;

pub const SERVER_ERROR_FALLBACK: &str = "Something went wrong on the server.";

#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Default))]
pub struct LeadServiceImpl<Phone, LeadApi> {
    pub phone: Phone,
    pub lead_api: LeadApi,
    pub config: LeadServiceConfig,
}

#[derive(Debug, Clone, Default)]
pub struct LeadServiceConfig {
    pub endpoint: LeadEndpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadEndpoint {
    /// Leads are posted to the configured lead endpoint.
    #[default]
    Remote,
    /// Development fallback: no request is made, success is reported after
    /// `delay`.
    Simulated { delay: Duration },
}

impl<Phone, LeadApi> LeadService for LeadServiceImpl<Phone, LeadApi>
where
    Phone: PhoneService,
    LeadApi: LeadApiService,
{
    fn validate(&self, form: &LeadForm) -> Result<LeadSubmission, LeadValidationError> {
        let email = LeadEmail::try_new(form.email.clone())
            .map_err(|_| LeadValidationError::InvalidEmail)?;

        if form.name.is_empty() || form.mobile.is_empty() || form.message.is_empty() {
            return Err(LeadValidationError::MissingRequiredFields);
        }

        let name =
            LeadName::try_new(form.name.clone()).map_err(|_| LeadValidationError::MissingRequiredFields)?;

        if !self.phone.is_valid(&form.mobile) {
            return Err(LeadValidationError::InvalidMobile);
        }
        let mobile = LeadPhoneNumber::try_new(form.mobile.international())
            .map_err(|_| LeadValidationError::InvalidMobile)?;

        let whatsapp = if form.whatsapp.is_empty() {
            None
        } else {
            if !self.phone.is_valid(&form.whatsapp) {
                return Err(LeadValidationError::InvalidWhatsapp);
            }
            LeadPhoneNumber::try_new(form.whatsapp.international())
                .map(Some)
                .map_err(|_| LeadValidationError::InvalidWhatsapp)?
        };

        // only reachable for forms filled in without the input filter
        if form.message.chars().count() > LEAD_MESSAGE_MAX_CHARS {
            return Err(LeadValidationError::MessageTooLong);
        }
        let message = LeadMessage::try_new(form.message.clone())
            .map_err(|_| LeadValidationError::MissingRequiredFields)?;

        Ok(LeadSubmission {
            name,
            mobile,
            whatsapp,
            email,
            message,
        })
    }

    #[instrument(skip_all)]
    async fn submit(&self, submission: LeadSubmission) -> Result<(), LeadSubmitError> {
        if let LeadEndpoint::Simulated { delay } = self.config.endpoint {
            warn!("Lead endpoint is simulated, the lead is not sent anywhere");
            tokio::time::sleep(delay).await;
            return Ok(());
        }

        let response = self
            .lead_api
            .submit_lead(submission)
            .await
            .map_err(|err| match err {
                LeadApiError::Status(status) => LeadSubmitError::Status(status),
                LeadApiError::Other(err) => LeadSubmitError::Other(err),
            })?;

        if !response.success {
            let message = response
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| SERVER_ERROR_FALLBACK.into());
            return Err(LeadSubmitError::Rejected(message));
        }

        info!("Lead submitted");
        Ok(())
    }
}
