use std::sync::LazyLock;

use realty_models::{
    country::Country,
    lead::{LeadForm, LeadSubmission},
    phone::PhoneField,
};

pub static ALL_FORMS: LazyLock<Vec<&LeadForm>> = LazyLock::new(|| vec![&FOO_FORM, &BAR_FORM]);

/// A complete lead from India without a WhatsApp number.
pub static FOO_FORM: LazyLock<LeadForm> = LazyLock::new(|| LeadForm {
    name: "Foo Kumar".into(),
    mobile: PhoneField::with_value(Country::India, "98765 43210"),
    whatsapp: PhoneField::new(Country::India),
    email: "foo@example.com".into(),
    message: "Looking for CMDA approved plots in Avadi.".into(),
});

pub static FOO_SUBMISSION: LazyLock<LeadSubmission> = LazyLock::new(|| LeadSubmission {
    name: "Foo Kumar".try_into().unwrap(),
    mobile: "+919876543210".try_into().unwrap(),
    whatsapp: None,
    email: "foo@example.com".try_into().unwrap(),
    message: "Looking for CMDA approved plots in Avadi."
        .try_into()
        .unwrap(),
});

/// A complete lead from the UAE with a separate WhatsApp number in India.
pub static BAR_FORM: LazyLock<LeadForm> = LazyLock::new(|| LeadForm {
    name: "Bar Rahman".into(),
    mobile: PhoneField::with_value(Country::UnitedArabEmirates, "501234567"),
    whatsapp: PhoneField::with_value(Country::India, "98400 13421"),
    email: "bar@example.ae".into(),
    message: "Please call me about villas in Porur.".into(),
});

pub static BAR_SUBMISSION: LazyLock<LeadSubmission> = LazyLock::new(|| LeadSubmission {
    name: "Bar Rahman".try_into().unwrap(),
    mobile: "+971501234567".try_into().unwrap(),
    whatsapp: Some("+919840013421".try_into().unwrap()),
    email: "bar@example.ae".try_into().unwrap(),
    message: "Please call me about villas in Porur.".try_into().unwrap(),
});
