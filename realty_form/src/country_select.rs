use realty_models::country::Country;

/// State of the searchable country dropdown next to a phone input.
///
/// The selected country itself lives in the phone field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySelect {
    open: bool,
    query: String,
}

impl CountrySelect {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
    }

    /// Closing the dropdown also resets the search query.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn options(&self) -> Vec<Country> {
        Country::search(&self.query).collect()
    }

    pub fn select(&mut self, country: Country) -> Country {
        self.close();
        country
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggle_and_close_reset_query() {
        let mut sut = CountrySelect::default();

        sut.toggle();
        sut.set_query("ara");
        assert!(sut.is_open());
        assert_eq!(
            sut.options(),
            [Country::UnitedArabEmirates, Country::SaudiArabia]
        );

        sut.toggle();
        assert!(!sut.is_open());
        assert_eq!(sut.query(), "");
        assert_eq!(sut.options().len(), Country::ALL.len());
    }

    #[test]
    fn select_closes() {
        let mut sut = CountrySelect::default();
        sut.toggle();
        sut.set_query("SG");

        let country = sut.select(Country::Singapore);

        assert_eq!(country, Country::Singapore);
        assert_eq!(sut, CountrySelect::default());
    }
}
