use std::sync::Arc;

use realty_core_lead_contracts::MockLeadService;
use realty_core_phone_contracts::MockPhoneService;
use realty_models::{country::Country, lead::LeadForm};

use crate::LeadFormController;


type Sut = LeadFormController<MockLeadService, MockPhoneService>;

fn sut(lead: MockLeadService, form: LeadForm) -> Sut {
    let mut sut = LeadFormController::new(Arc::new(lead), MockPhoneService::new(), Country::India);
    sut.form = form;
    sut
}
