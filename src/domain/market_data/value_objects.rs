use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

use crate::domain::errors::ValidationError;

/// Value Object - market symbol identifier, normalized to upper case
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: &str) -> Result<Self, ValidationError> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankSymbol);
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Index identifiers follow the `^GSPC` convention
    pub fn is_index(&self) -> bool {
        self.0.starts_with('^')
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

/// Value Object - milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Deref, Constructor, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const DAY_MS: u64 = 24 * 60 * 60 * 1000;

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn from_millis(value: u64) -> Self {
        Self(value)
    }
}

/// Value Object - requested analysis window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, AsRefStr, Serialize, Deserialize)]
pub enum Period {
    #[strum(serialize = "24h")]
    #[serde(rename = "24h")]
    Day,

    #[strum(serialize = "3d")]
    #[serde(rename = "3d")]
    ThreeDays,

    #[strum(serialize = "1w")]
    #[serde(rename = "1w")]
    Week,

    #[strum(serialize = "2w")]
    #[serde(rename = "2w")]
    TwoWeeks,

    #[default]
    #[strum(serialize = "1M")]
    #[serde(rename = "1M")]
    Month,

    #[strum(serialize = "3M")]
    #[serde(rename = "3M")]
    ThreeMonths,

    #[strum(serialize = "6M")]
    #[serde(rename = "6M")]
    SixMonths,

    #[strum(serialize = "1Y")]
    #[serde(rename = "1Y")]
    Year,

    #[strum(serialize = "2Y")]
    #[serde(rename = "2Y")]
    TwoYears,
}

impl Period {
    pub fn token(&self) -> &str {
        self.as_ref()
    }

    pub fn days(&self) -> u32 {
        match self {
            Self::Day => 1,
            Self::ThreeDays => 3,
            Self::Week => 7,
            Self::TwoWeeks => 14,
            Self::Month => 30,
            Self::ThreeMonths => 90,
            Self::SixMonths => 180,
            Self::Year => 365,
            Self::TwoYears => 730,
        }
    }

    /// Day count for a raw token; unknown tokens mean a single day
    pub fn days_for_token(token: &str) -> u32 {
        token.parse::<Period>().map(|p| p.days()).unwrap_or(1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Day => "24 hours",
            Self::ThreeDays => "3 days",
            Self::Week => "1 week",
            Self::TwoWeeks => "2 weeks",
            Self::Month => "1 month",
            Self::ThreeMonths => "3 months",
            Self::SixMonths => "6 months",
            Self::Year => "1 year",
            Self::TwoYears => "2 years",
        }
    }

    pub fn all() -> impl Iterator<Item = Period> {
        Period::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_trimmed_and_uppercased() {
        assert_eq!(Symbol::new("  aapl ").unwrap().value(), "AAPL");
        assert_eq!(Symbol::new("   "), Err(ValidationError::BlankSymbol));
        assert!(Symbol::from("^gspc").is_index());
        assert!(!Symbol::from("MSFT").is_index());
    }

    #[test]
    fn period_tokens_map_to_day_counts() {
        let expected = [
            ("24h", 1),
            ("3d", 3),
            ("1w", 7),
            ("2w", 14),
            ("1M", 30),
            ("3M", 90),
            ("6M", 180),
            ("1Y", 365),
            ("2Y", 730),
        ];
        for (token, days) in expected {
            assert_eq!(Period::days_for_token(token), days, "token {token}");
        }
        assert_eq!(Period::days_for_token("5Y"), 1);
        assert_eq!(Period::days_for_token(""), 1);
    }

    #[test]
    fn period_tokens_are_case_sensitive() {
        assert_eq!("1m".parse::<Period>().ok(), None);
        assert_eq!("1M".parse::<Period>().ok(), Some(Period::Month));
        assert_eq!(Period::default().token(), "1M");
    }
}
