use crate::country::Country;

/// The state of a single phone input: the selected country and the string
/// currently displayed in the text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhoneField {
    pub country: Country,
    pub value: String,
}

impl PhoneField {
    pub fn new(country: Country) -> Self {
        Self {
            country,
            value: String::new(),
        }
    }

    pub fn with_value(country: Country, value: impl Into<String>) -> Self {
        Self {
            country,
            value: value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.chars().all(|c| !c.is_ascii_digit())
    }

    /// The stored value without any display formatting.
    pub fn digits(&self) -> String {
        self.value.chars().filter(char::is_ascii_digit).collect()
    }

    /// The full international form `+<calling code><digits>`, or an empty
    /// string if no digits have been entered.
    pub fn international(&self) -> String {
        let digits = self.digits();
        if digits.is_empty() {
            return digits;
        }
        format!("+{}{digits}", self.country.calling_code())
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
