use anyhow::bail;
use clap::Args;
use realty_config::Config;
use realty_form::SubmissionStatus;
use realty_models::{country::Country, lead::LeadPhoneField};

use crate::environment;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Full name of the visitor
    #[arg(long)]
    name: String,
    /// Mobile number without the calling code
    #[arg(long)]
    mobile: String,
    /// ISO code of the mobile number's country [default: lead.default_country]
    #[arg(long)]
    mobile_country: Option<Country>,
    /// WhatsApp number without the calling code
    #[arg(long)]
    whatsapp: Option<String>,
    /// ISO code of the WhatsApp number's country [default: lead.default_country]
    #[arg(long)]
    whatsapp_country: Option<Country>,
    #[arg(long)]
    email: String,
    #[arg(long)]
    message: String,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let mut form = environment::lead_form(&config)?;

        if let Some(country) = self.mobile_country {
            form.select_country(LeadPhoneField::Mobile, country);
        }
        if let Some(country) = self.whatsapp_country {
            form.select_country(LeadPhoneField::Whatsapp, country);
        }

        form.set_name(self.name);
        form.set_email(self.email);
        form.blur_email();
        if let Some(err) = form.email_error() {
            eprintln!("Email: {err}");
        }

        form.set_message(&self.message);
        if form.form().message.len() < self.message.len() {
            eprintln!("Message truncated to {}", form.message_counter());
        }

        for (field, raw) in [
            (LeadPhoneField::Mobile, Some(self.mobile)),
            (LeadPhoneField::Whatsapp, self.whatsapp),
        ] {
            let Some(raw) = raw else { continue };
            if !form.input_phone(field, &raw) {
                let country = form.form().phone(field).country;
                bail!("Too many digits for a {field:?} number in {country}");
            }
        }

        let Some(pending) = form.begin_submit() else {
            return report(form.status());
        };
        println!("{}", form.status().message().unwrap_or_default());

        let outcome = pending.send().await;
        form.complete(outcome);
        report(form.status())
    }
}

fn report(status: &SubmissionStatus) -> anyhow::Result<()> {
    match status {
        SubmissionStatus::Success(message) => {
            println!("{message}");
            Ok(())
        }
        SubmissionStatus::Error(message) => bail!("{message}"),
        SubmissionStatus::Idle | SubmissionStatus::Sending => Ok(()),
    }
}
