use crate::{country::Country, macros::nutype_string, phone::PhoneField};

pub const LEAD_MESSAGE_MAX_CHARS: usize = 500;

/// The contact form as the visitor is filling it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub mobile: PhoneField,
    pub whatsapp: PhoneField,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadPhoneField {
    Mobile,
    Whatsapp,
}

impl LeadForm {
    pub fn new(default_country: Country) -> Self {
        Self {
            name: String::new(),
            mobile: PhoneField::new(default_country),
            whatsapp: PhoneField::new(default_country),
            email: String::new(),
            message: String::new(),
        }
    }

    pub fn phone(&self, field: LeadPhoneField) -> &PhoneField {
        match field {
            LeadPhoneField::Mobile => &self.mobile,
            LeadPhoneField::Whatsapp => &self.whatsapp,
        }
    }

    pub fn phone_mut(&mut self, field: LeadPhoneField) -> &mut PhoneField {
        match field {
            LeadPhoneField::Mobile => &mut self.mobile,
            LeadPhoneField::Whatsapp => &mut self.whatsapp,
        }
    }

    /// Resets every value to an empty string. The selected countries are
    /// kept.
    pub fn clear(&mut self) {
        self.name.clear();
        self.mobile.clear();
        self.whatsapp.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// A validated lead, ready to be sent to the lead endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: LeadName,
    pub mobile: LeadPhoneNumber,
    pub whatsapp: Option<LeadPhoneNumber>,
    pub email: LeadEmail,
    pub message: LeadMessage,
}

nutype_string!(LeadName(validate(not_empty)));

nutype_string!(LeadEmail(validate(predicate = |s: &str| s.contains('@'))));

nutype_string!(LeadMessage(validate(not_empty, len_char_max = 500)));

nutype_string!(LeadPhoneNumber(validate(predicate = |s: &str| {
    s.strip_prefix('+')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
})));
