use std::sync::{Arc, LazyLock};

use realty_core_lead_contracts::{LeadService, LeadSubmitError, LeadValidationError};
use realty_core_phone_contracts::{PhoneInput, PhoneService};
use realty_models::{
    country::Country,
    lead::{LeadForm, LeadPhoneField, LeadSubmission, LEAD_MESSAGE_MAX_CHARS},
};
use regex::Regex;
use tracing::{debug, error, info, instrument};

pub use crate::{
    country_select::CountrySelect,
    status::{SubmissionStatus, GENERIC_ERROR_MESSAGE, SENDING_MESSAGE, SUCCESS_MESSAGE},
};

mod country_select;
mod status;

#[cfg(test)]
mod tests;

static EMAIL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Owns the contact form of one page and drives its submissions.
///
/// Keystrokes are filtered as they arrive (input pass), while the checks
/// that decide whether a lead may be sent only run on submit (gating pass).
#[derive(Debug)]
pub struct LeadFormController<Lead, Phone> {
    lead: Arc<Lead>,
    phone: Phone,
    form: LeadForm,
    status: SubmissionStatus,
    email_error: Option<LeadValidationError>,
    /// Set from `begin_submit` until `complete`, independent of the overlay.
    in_flight: bool,
    mobile_select: CountrySelect,
    whatsapp_select: CountrySelect,
}

impl<Lead, Phone> LeadFormController<Lead, Phone>
where
    Lead: LeadService,
    Phone: PhoneService,
{
    pub fn new(lead: Arc<Lead>, phone: Phone, default_country: Country) -> Self {
        Self {
            lead,
            phone,
            form: LeadForm::new(default_country),
            status: SubmissionStatus::Idle,
            email_error: None,
            in_flight: false,
            mobile_select: CountrySelect::default(),
            whatsapp_select: CountrySelect::default(),
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Error shown below the email input.
    pub fn email_error(&self) -> Option<LeadValidationError> {
        self.email_error
    }

    pub fn country_select(&self, field: LeadPhoneField) -> &CountrySelect {
        match field {
            LeadPhoneField::Mobile => &self.mobile_select,
            LeadPhoneField::Whatsapp => &self.whatsapp_select,
        }
    }

    pub fn country_select_mut(&mut self, field: LeadPhoneField) -> &mut CountrySelect {
        match field {
            LeadPhoneField::Mobile => &mut self.mobile_select,
            LeadPhoneField::Whatsapp => &mut self.whatsapp_select,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
        self.email_error = None;
    }

    /// Input beyond the message limit is cut off.
    pub fn set_message(&mut self, message: &str) {
        self.form.message = message.chars().take(LEAD_MESSAGE_MAX_CHARS).collect();
    }

    pub fn message_counter(&self) -> String {
        format!(
            "{}/{LEAD_MESSAGE_MAX_CHARS}",
            self.form.message.chars().count()
        )
    }

    /// Apply a raw input event to a phone field.
    ///
    /// Returns `false` if the input was rejected, in which case the field
    /// keeps its previous value.
    pub fn input_phone(&mut self, field: LeadPhoneField, raw: &str) -> bool {
        let country = self.form.phone(field).country;
        match self.phone.normalize(raw, country) {
            PhoneInput::Accepted(value) => {
                self.form.phone_mut(field).value = value;
                true
            }
            PhoneInput::Rejected => {
                debug!(?field, %country, "Phone input rejected");
                false
            }
        }
    }

    /// Check the email format when the input loses focus. The result is only
    /// shown inline and never blocks a submission.
    pub fn blur_email(&mut self) {
        let email = &self.form.email;
        self.email_error = (!email.is_empty() && !EMAIL_FORMAT.is_match(email))
            .then_some(LeadValidationError::InvalidEmail);
    }

    /// Swap the active country of a phone field. Entered digits are kept as
    /// they are.
    pub fn select_country(&mut self, field: LeadPhoneField, country: Country) {
        let country = self.country_select_mut(field).select(country);
        self.form.phone_mut(field).country = country;
    }

    /// Enter [`SubmissionStatus::Sending`] and run the submission checks.
    ///
    /// Returns `None` if a submission is already in flight or the form did
    /// not pass the checks. In the latter case the status has been set to
    /// the error.
    #[instrument(skip_all)]
    pub fn begin_submit(&mut self) -> Option<PendingSubmission<Lead>> {
        if self.in_flight {
            debug!("Submission already in flight");
            return None;
        }

        self.status = SubmissionStatus::Sending;

        match self.lead.validate(&self.form) {
            Ok(submission) => {
                self.email_error = None;
                self.in_flight = true;
                Some(PendingSubmission {
                    lead: Arc::clone(&self.lead),
                    submission,
                })
            }
            Err(err) => {
                info!(%err, "Lead form incomplete");
                self.email_error = (err == LeadValidationError::InvalidEmail).then_some(err);
                self.status = SubmissionStatus::Error(err.to_string());
                None
            }
        }
    }

    /// Apply the outcome of a submission.
    ///
    /// The outcome is applied even if the overlay has been dismissed in the
    /// meantime.
    pub fn complete(&mut self, outcome: Result<(), LeadSubmitError>) {
        self.in_flight = false;
        self.status = match outcome {
            Ok(()) => {
                self.form.clear();
                SubmissionStatus::Success(SUCCESS_MESSAGE.into())
            }
            Err(err) => {
                error!("Failed to submit lead: {err:#}");
                SubmissionStatus::Error(overlay_message(err))
            }
        };
    }

    pub async fn submit(&mut self) {
        if let Some(pending) = self.begin_submit() {
            let outcome = pending.send().await;
            self.complete(outcome);
        }
    }

    /// Whether a submission has been started and not completed yet. The
    /// submit control stays disabled meanwhile, even if the overlay has been
    /// dismissed.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// Close the overlay. The form is left as it is and a submission in
    /// flight keeps running.
    pub fn dismiss(&mut self) {
        self.status = SubmissionStatus::Idle;
    }
}

fn overlay_message(err: LeadSubmitError) -> String {
    match err {
        err @ LeadSubmitError::Status(_) => err.to_string(),
        LeadSubmitError::Rejected(message) => message,
        LeadSubmitError::Other(_) => GENERIC_ERROR_MESSAGE.into(),
    }
}

/// A lead that passed the submission checks and still has to be sent.
#[derive(Debug)]
#[must_use]
pub struct PendingSubmission<Lead> {
    lead: Arc<Lead>,
    submission: LeadSubmission,
}

impl<Lead: LeadService> PendingSubmission<Lead> {
    pub fn submission(&self) -> &LeadSubmission {
        &self.submission
    }

    pub async fn send(self) -> Result<(), LeadSubmitError> {
        self.lead.submit(self.submission).await
    }
}
