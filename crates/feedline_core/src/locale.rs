//! Display locales supported by feed rendering.
//!
//! # Responsibility
//! - Name the locales accepted by configuration files.
//! - Own locale-specific static strings (month names, validation copy).
//!
//! # Invariants
//! - `pt-BR` is the default; the feed was written for Portuguese readers.
//! - Deserialization goes through `FromStr`, so TOML accepts every spelling
//!   `str::parse` does.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const EN_US_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Locale used for dates and inline validation copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    /// Brazilian Portuguese.
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// American English.
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    /// BCP 47 tag for this locale.
    pub fn tag(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
        }
    }

    /// Month name for a 1-based month number; `None` outside `1..=12`.
    pub fn month_name(self, month: u32) -> Option<&'static str> {
        let index = usize::try_from(month.checked_sub(1)?).ok()?;
        match self {
            Self::PtBr => PT_BR_MONTHS.get(index).copied(),
            Self::EnUs => EN_US_MONTHS.get(index).copied(),
        }
    }

    /// Inline message shown when a blank comment is submitted.
    pub fn required_field_message(self) -> &'static str {
        match self {
            Self::PtBr => "Esse campo é obrigatório!",
            Self::EnUs => "This field is required!",
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Returned when a locale tag is not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl Display for UnknownLocale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported locale `{}`; expected pt-BR|en-US", self.0)
    }
}

impl Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en-us" | "en" => Ok(Self::EnUs),
            _ => Err(UnknownLocale(value.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = UnknownLocale;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
