use realty_core_phone_contracts::MockPhoneService;
use realty_extern_contracts::lead::MockLeadApiService;

use crate::LeadServiceImpl;

mod validate;

type Sut = LeadServiceImpl<MockPhoneService, MockLeadApiService>;
