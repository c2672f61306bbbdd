//! Education levels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Education level. Ordered None < HighSchool < College < Graduate.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationLevel {
    #[default]
    None,
    HighSchool,
    College,
    Graduate,
}

impl EducationLevel {
    pub fn key(self) -> &'static str {
        match self {
            EducationLevel::None => "NONE",
            EducationLevel::HighSchool => "HIGH_SCHOOL",
            EducationLevel::College => "COLLEGE",
            EducationLevel::Graduate => "GRADUATE",
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
