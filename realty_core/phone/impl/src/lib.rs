use phonenumber::country::Id;
use realty_core_phone_contracts::{PhoneInput, PhoneService};
use realty_models::{country::Country, phone::PhoneField};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneServiceImpl;

impl PhoneService for PhoneServiceImpl {
    fn normalize(&self, input: &str, country: Country) -> PhoneInput {
        let digits = input
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>();

        if digits.len() > country.max_digits() {
            return PhoneInput::Rejected;
        }

        let value = match country.group_after() {
            Some(n) if digits.len() > n => format!("{} {}", &digits[..n], &digits[n..]),
            _ => digits,
        };

        PhoneInput::Accepted(value)
    }

    #[instrument(skip_all, fields(country = field.country.iso_code()))]
    fn is_valid(&self, field: &PhoneField) -> bool {
        let digits = field.digits();
        if digits.is_empty() {
            return false;
        }

        let international = field.international();
        let valid = match phonenumber::parse(Some(region(field.country)), &international) {
            Ok(number) => phonenumber::is_valid(&number),
            Err(err) => {
                debug!("Failed to parse phone number: {err}");
                false
            }
        };

        // The numbering plan rejects some legitimate Indian numbers, so any
        // ten digit Indian number is accepted.
        if !valid && field.country == Country::India && digits.len() == 10 {
            debug!("Accepting ten digit Indian number rejected by the numbering plan");
            return true;
        }

        valid
    }
}

fn region(country: Country) -> Id {
    match country {
        Country::India => Id::IN,
        Country::UnitedArabEmirates => Id::AE,
        Country::Australia => Id::AU,
        Country::Bangladesh => Id::BD,
        Country::Bahrain => Id::BH,
        Country::Canada => Id::CA,
        Country::Germany => Id::DE,
        Country::France => Id::FR,
        Country::UnitedKingdom => Id::GB,
        Country::Japan => Id::JP,
        Country::Kuwait => Id::KW,
        Country::SriLanka => Id::LK,
        Country::Malaysia => Id::MY,
        Country::Nepal => Id::NP,
        Country::NewZealand => Id::NZ,
        Country::Oman => Id::OM,
        Country::Qatar => Id::QA,
        Country::SaudiArabia => Id::SA,
        Country::Singapore => Id::SG,
        Country::UnitedStates => Id::US,
        Country::SouthAfrica => Id::ZA,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use realty_models::country::E164_MAX_DIGITS;

    use super::*;

    fn accepted(value: &str) -> PhoneInput {
        PhoneInput::Accepted(value.into())
    }

    #[test]
    fn india_groups_after_five_digits() {
        let sut = PhoneServiceImpl;
        let digits = "9876543210";

        for n in 0..=digits.len() {
            let expected = if n <= 5 {
                digits[..n].to_owned()
            } else {
                format!("{} {}", &digits[..5], &digits[5..n])
            };
            assert_eq!(
                sut.normalize(&digits[..n], Country::India),
                PhoneInput::Accepted(expected)
            );
        }
    }

    #[test]
    fn india_rejects_eleventh_digit() {
        let sut = PhoneServiceImpl;
        assert_eq!(
            sut.normalize("98765 432101", Country::India),
            PhoneInput::Rejected
        );
        assert_eq!(
            sut.normalize("98765432109876", Country::India),
            PhoneInput::Rejected
        );
    }

    #[test]
    fn india_reformats_previous_display_value() {
        let sut = PhoneServiceImpl;
        // the text field hands back the space from the previous render
        assert_eq!(
            sut.normalize("98765 4", Country::India),
            accepted("98765 4")
        );
        assert_eq!(sut.normalize("98765 ", Country::India), accepted("98765"));
    }

    #[test]
    fn drops_non_digits() {
        let sut = PhoneServiceImpl;
        assert_eq!(
            sut.normalize("+1 (650) 253-0000", Country::UnitedStates),
            accepted("16502530000")
        );
        assert_eq!(sut.normalize("abc", Country::India), accepted(""));
    }

    #[test]
    fn other_countries_allow_fifteen_digits() {
        let sut = PhoneServiceImpl;
        let digits = "123456789012345";
        assert_eq!(digits.len(), E164_MAX_DIGITS);

        for &country in Country::ALL.iter().filter(|&&c| c != Country::India) {
            assert_eq!(sut.normalize(digits, country), accepted(digits));
            assert_eq!(
                sut.normalize(&format!("{digits}6"), country),
                PhoneInput::Rejected
            );
        }
    }

    #[test]
    fn clearing_is_accepted() {
        let sut = PhoneServiceImpl;
        assert_eq!(sut.normalize("", Country::India), accepted(""));
        assert_eq!(sut.normalize("", Country::Germany), accepted(""));
    }

    #[test]
    fn valid_numbers() {
        let sut = PhoneServiceImpl;
        for (country, value) in [
            (Country::UnitedKingdom, "7911123456"),
            (Country::UnitedStates, "6502530000"),
            (Country::India, "98765 43210"),
        ] {
            assert!(
                sut.is_valid(&PhoneField::with_value(country, value)),
                "{country} {value}"
            );
        }
    }

    #[test]
    fn invalid_numbers() {
        let sut = PhoneServiceImpl;
        for (country, value) in [
            (Country::UnitedKingdom, "12"),
            (Country::UnitedStates, "123"),
            (Country::UnitedStates, "1234567890"),
            (Country::India, "98765"),
            (Country::India, ""),
        ] {
            assert!(
                !sut.is_valid(&PhoneField::with_value(country, value)),
                "{country} {value}"
            );
        }
    }

    #[test]
    fn india_ten_digits_always_accepted() {
        let sut = PhoneServiceImpl;
        assert!(sut.is_valid(&PhoneField::with_value(Country::India, "12345 67890")));
        assert!(sut.is_valid(&PhoneField::with_value(Country::India, "00000 00000")));
    }
}
