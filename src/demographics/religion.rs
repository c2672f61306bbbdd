//! Religions

use super::normalize_key;
use crate::error::LifeSimError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Religion {
    #[serde(alias = "CHRISTIANITY")]
    Christianity,
    #[serde(alias = "ISLAM")]
    Islam,
    #[serde(alias = "HINDUISM")]
    Hinduism,
    #[serde(alias = "BUDDHISM")]
    Buddhism,
    #[serde(alias = "JUDAISM")]
    Judaism,
    #[serde(alias = "SIKHISM")]
    Sikhism,
    /// No religious affiliation
    #[default]
    #[serde(alias = "NONE")]
    None,
}

impl Religion {
    pub const ALL: [Religion; 7] = [
        Religion::Christianity,
        Religion::Islam,
        Religion::Hinduism,
        Religion::Buddhism,
        Religion::Judaism,
        Religion::Sikhism,
        Religion::None,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Religion::Christianity => "Christianity",
            Religion::Islam => "Islam",
            Religion::Hinduism => "Hinduism",
            Religion::Buddhism => "Buddhism",
            Religion::Judaism => "Judaism",
            Religion::Sikhism => "Sikhism",
            Religion::None => "None",
        }
    }
}

impl fmt::Display for Religion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Religion {
    type Err = LifeSimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Religion::ALL
            .into_iter()
            .find(|r| r.name().to_ascii_uppercase() == key)
            .ok_or_else(|| LifeSimError::InvalidReligion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("NONE".parse::<Religion>().unwrap(), Religion::None);
        assert_eq!("Buddhism".parse::<Religion>().unwrap(), Religion::Buddhism);
        assert!("PASTAFARIANISM".parse::<Religion>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Religion::None).unwrap();
        assert_eq!(json, "\"None\"");
        let r: Religion = serde_json::from_str("\"SIKHISM\"").unwrap();
        assert_eq!(r, Religion::Sikhism);
    }
}
