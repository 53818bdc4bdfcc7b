use std::sync::Arc;

use realty_config::Config;
use realty_core_lead_impl::{LeadEndpoint, LeadServiceConfig, LeadServiceImpl};
use realty_core_phone_impl::PhoneServiceImpl;
use realty_extern_impl::lead::{LeadApiServiceConfig, LeadApiServiceImpl};
use realty_form::LeadFormController;
use tracing::warn;

pub type Phone = PhoneServiceImpl;
pub type LeadApi = LeadApiServiceImpl;
pub type Lead = LeadServiceImpl<Phone, LeadApi>;
pub type LeadForm = LeadFormController<Lead, Phone>;

pub fn lead_service(config: &Config) -> anyhow::Result<Lead> {
    let endpoint = if config.lead.simulate {
        if config.lead.endpoint.is_some() {
            warn!("lead.simulate is enabled, the configured lead endpoint is ignored");
        }
        LeadEndpoint::Simulated {
            delay: config.lead.simulate_delay.into(),
        }
    } else {
        LeadEndpoint::Remote
    };

    let lead_api =
        LeadApiServiceImpl::new(LeadApiServiceConfig::new(config.lead.endpoint.clone()))?;

    Ok(LeadServiceImpl {
        phone: PhoneServiceImpl,
        lead_api,
        config: LeadServiceConfig { endpoint },
    })
}

pub fn lead_form(config: &Config) -> anyhow::Result<LeadForm> {
    Ok(LeadFormController::new(
        Arc::new(lead_service(config)?),
        PhoneServiceImpl,
        config.lead.default_country,
    ))
}

#[cfg(test)]
mod tests {
    use std::{path::Path, time::Duration};

    use realty_config::DEFAULT_CONFIG_PATH;

    use super::*;

    #[test]
    fn simulated_by_default() {
        let config = realty_config::load_paths(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();

        let lead = lead_service(&config).unwrap();

        assert_eq!(
            lead.config.endpoint,
            LeadEndpoint::Simulated {
                delay: Duration::from_secs(2)
            }
        );
    }

    #[test]
    fn remote_endpoint() {
        let config = realty_config::load_with_override(
            &[Path::new(DEFAULT_CONFIG_PATH)],
            &[
                "lead.simulate = false",
                r#"lead.endpoint = "http://127.0.0.1:8001/exec""#,
            ],
        )
        .unwrap();

        let lead = lead_service(&config).unwrap();

        assert_eq!(lead.config.endpoint, LeadEndpoint::Remote);
    }
}
