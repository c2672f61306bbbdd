//! Nationalities and their currencies

use super::normalize_key;
use crate::error::LifeSimError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nationality {
    #[default]
    #[serde(alias = "AMERICAN")]
    American,
    #[serde(alias = "BRITISH")]
    British,
    #[serde(alias = "CHINESE")]
    Chinese,
    #[serde(alias = "INDIAN")]
    Indian,
    #[serde(alias = "BRAZILIAN")]
    Brazilian,
    #[serde(alias = "NIGERIAN")]
    Nigerian,
    #[serde(alias = "JAPANESE")]
    Japanese,
    #[serde(alias = "GERMAN")]
    German,
}

impl Nationality {
    pub const ALL: [Nationality; 8] = [
        Nationality::American,
        Nationality::British,
        Nationality::Chinese,
        Nationality::Indian,
        Nationality::Brazilian,
        Nationality::Nigerian,
        Nationality::Japanese,
        Nationality::German,
    ];

    /// `(code, symbol)` of the local currency
    pub fn currency(self) -> (&'static str, &'static str) {
        match self {
            Nationality::American => ("USD", "$"),
            Nationality::British => ("GBP", "£"),
            Nationality::Chinese => ("CNY", "¥"),
            Nationality::Indian => ("INR", "₹"),
            Nationality::Brazilian => ("BRL", "R$"),
            Nationality::Nigerian => ("NGN", "₦"),
            Nationality::Japanese => ("JPY", "¥"),
            Nationality::German => ("EUR", "€"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Nationality::American => "American",
            Nationality::British => "British",
            Nationality::Chinese => "Chinese",
            Nationality::Indian => "Indian",
            Nationality::Brazilian => "Brazilian",
            Nationality::Nigerian => "Nigerian",
            Nationality::Japanese => "Japanese",
            Nationality::German => "German",
        }
    }
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nationality {
    type Err = LifeSimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Nationality::ALL
            .into_iter()
            .find(|n| n.name().to_ascii_uppercase() == key)
            .ok_or_else(|| LifeSimError::InvalidNationality(s.to_string()))
    }
}
