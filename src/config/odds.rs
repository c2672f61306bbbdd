//! Yearly event probabilities

use crate::error::{LifeSimError, Result};
use serde::{Deserialize, Serialize};

/// Chance per eligible year that each random event rule fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventOdds {
    pub relationship: f64,
    pub marriage: f64,
    pub family: f64,
    pub job: f64,
    pub adoption: f64,
    pub gender_reassignment: f64,
    pub immigration: f64,
    pub conversion: f64,
    pub career: f64,
}

impl Default for EventOdds {
    fn default() -> Self {
        Self {
            relationship: 0.10,
            marriage: 0.10,
            family: 0.05,
            job: 0.10,
            adoption: 0.05,
            gender_reassignment: 0.03,
            immigration: 0.04,
            conversion: 0.04,
            career: 0.06,
        }
    }
}

impl EventOdds {
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("relationship", self.relationship),
            ("marriage", self.marriage),
            ("family", self.family),
            ("job", self.job),
            ("adoption", self.adoption),
            ("gender_reassignment", self.gender_reassignment),
            ("immigration", self.immigration),
            ("conversion", self.conversion),
            ("career", self.career),
        ];
        for (name, p) in fields {
            if !(0.0..=1.0).contains(&p) {
                return Err(LifeSimError::InvalidConfig(format!(
                    "odds.{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }
        Ok(())
    }
}
