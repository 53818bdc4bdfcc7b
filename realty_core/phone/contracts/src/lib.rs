use realty_models::{country::Country, phone::PhoneField};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PhoneService: Send + Sync + 'static {
    /// Filter a raw input event for the given country.
    ///
    /// Non-digit characters are dropped silently. Input exceeding the digit
    /// limit of the country is rejected as a whole, in which case the caller
    /// keeps its previous value.
    fn normalize(&self, input: &str, country: Country) -> PhoneInput;

    /// Check whether the stored value resolves to a dialable number in the
    /// numbering plan of the selected country.
    fn is_valid(&self, field: &PhoneField) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneInput {
    /// The new display value of the field.
    Accepted(String),
    Rejected,
}

#[cfg(feature = "mock")]
impl MockPhoneService {
    pub fn with_is_valid(mut self, field: PhoneField, result: bool) -> Self {
        self.expect_is_valid()
            .once()
            .with(mockall::predicate::eq(field))
            .return_const(result);
        self
    }

    pub fn with_normalize(mut self, input: String, country: Country, result: PhoneInput) -> Self {
        self.expect_normalize()
            .once()
            .with(
                mockall::predicate::eq(input),
                mockall::predicate::eq(country),
            )
            .return_const(result);
        self
    }
}
