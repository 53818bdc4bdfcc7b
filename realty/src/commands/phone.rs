use anyhow::bail;
use clap::Args;
use realty_config::Config;
use realty_core_phone_contracts::{PhoneInput, PhoneService};
use realty_models::{country::Country, phone::PhoneField};

use crate::environment::Phone;

#[derive(Debug, Args)]
pub struct PhoneCommand {
    /// The number as typed into the phone input
    number: String,
    /// ISO code of the selected country [default: lead.default_country]
    #[arg(short, long)]
    country: Option<Country>,
}

impl PhoneCommand {
    pub fn invoke(self, config: &Config) -> anyhow::Result<()> {
        let phone = Phone::default();
        let country = self.country.unwrap_or(config.lead.default_country);

        let PhoneInput::Accepted(value) = phone.normalize(&self.number, country) else {
            bail!(
                "Rejected: {country} numbers have at most {} digits",
                country.max_digits()
            );
        };

        let field = PhoneField::with_value(country, value);
        println!("display:       {}", field.value);
        println!("international: {}", field.international());
        println!("valid:         {}", phone.is_valid(&field));

        Ok(())
    }
}
