use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::macros::countries;

/// Number of digits a national number may have when a country has no
/// tighter limit (E.164 ceiling).
pub const E164_MAX_DIGITS: usize = 15;

countries! {
    India => "IN", "India", 91;
    UnitedArabEmirates => "AE", "United Arab Emirates", 971;
    Australia => "AU", "Australia", 61;
    Bangladesh => "BD", "Bangladesh", 880;
    Bahrain => "BH", "Bahrain", 973;
    Canada => "CA", "Canada", 1;
    Germany => "DE", "Germany", 49;
    France => "FR", "France", 33;
    UnitedKingdom => "GB", "United Kingdom", 44;
    Japan => "JP", "Japan", 81;
    Kuwait => "KW", "Kuwait", 965;
    SriLanka => "LK", "Sri Lanka", 94;
    Malaysia => "MY", "Malaysia", 60;
    Nepal => "NP", "Nepal", 977;
    NewZealand => "NZ", "New Zealand", 64;
    Oman => "OM", "Oman", 968;
    Qatar => "QA", "Qatar", 974;
    SaudiArabia => "SA", "Saudi Arabia", 966;
    Singapore => "SG", "Singapore", 65;
    UnitedStates => "US", "United States", 1;
    SouthAfrica => "ZA", "South Africa", 27;
}

impl Country {
    /// Maximum number of national digits accepted by the phone input.
    pub fn max_digits(self) -> usize {
        match self {
            Country::India => 10,
            _ => E164_MAX_DIGITS,
        }
    }

    /// Position after which the display string of a number is split by a
    /// single space, if the country uses grouping at all.
    pub fn group_after(self) -> Option<usize> {
        match self {
            Country::India => Some(5),
            _ => None,
        }
    }

    /// Case-insensitive substring search over the country name and the ISO
    /// code. An empty query matches every country.
    pub fn search(query: &str) -> impl Iterator<Item = Country> {
        let query = query.to_lowercase();
        Self::ALL.iter().copied().filter(move |country| {
            country.name().to_lowercase().contains(&query)
                || country.iso_code().to_lowercase().contains(&query)
        })
    }
}

impl Default for Country {
    fn default() -> Self {
        Country::India
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown or unsupported country code: {0:?}")]
pub struct UnknownCountryError(pub String);

impl FromStr for Country {
    type Err = UnknownCountryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|country| country.iso_code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCountryError(s.into()))
    }
}

impl Serialize for Country {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.iso_code())
    }
}

impl<'de> Deserialize<'de> for Country {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
