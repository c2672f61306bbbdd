//! Socioeconomic class, derived from family wealth

use super::{normalize_key, EducationLevel};
use crate::error::LifeSimError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Family wealth below this is Poor
pub const MIDDLE_CLASS_THRESHOLD: f64 = 20_000.0;
/// Family wealth at or above this is Wealthy
pub const WEALTHY_CLASS_THRESHOLD: f64 = 100_000.0;

/// Socioeconomic class. Ordered Poor < Middle < Wealthy.
///
/// Never stored on a person; always recomputed from family wealth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SocioClass {
    Poor,
    #[default]
    Middle,
    Wealthy,
}

impl SocioClass {
    pub const ALL: [SocioClass; 3] = [SocioClass::Poor, SocioClass::Middle, SocioClass::Wealthy];

    /// Derive the class for a given family wealth
    #[inline]
    pub fn from_family_wealth(family_wealth: f64) -> Self {
        if family_wealth < MIDDLE_CLASS_THRESHOLD {
            SocioClass::Poor
        } else if family_wealth < WEALTHY_CLASS_THRESHOLD {
            SocioClass::Middle
        } else {
            SocioClass::Wealthy
        }
    }

    /// Yearly health drift modifier
    pub fn health_modifier(self) -> f64 {
        match self {
            SocioClass::Poor => -0.5,
            SocioClass::Middle => 0.0,
            SocioClass::Wealthy => 0.5,
        }
    }

    /// Multiplier applied to monthly income credited each year
    pub fn wealth_modifier(self) -> f64 {
        match self {
            SocioClass::Poor => 0.8,
            SocioClass::Middle => 1.0,
            SocioClass::Wealthy => 1.2,
        }
    }

    /// Multiplier applied to the low-health death chance
    pub fn mortality_modifier(self) -> f64 {
        match self {
            SocioClass::Poor => 1.2,
            SocioClass::Middle => 1.0,
            SocioClass::Wealthy => 0.8,
        }
    }

    /// Inclusive range family wealth is drawn from at character creation
    pub fn starting_wealth_range(self) -> (u32, u32) {
        match self {
            SocioClass::Poor => (0, 20_000),
            SocioClass::Middle => (30_000, 80_000),
            SocioClass::Wealthy => (100_000, 500_000),
        }
    }

    pub fn roll_family_wealth<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        let (low, high) = self.starting_wealth_range();
        f64::from(rng.gen_range(low..=high))
    }

    pub fn roll_family_education<R: Rng + ?Sized>(self, rng: &mut R) -> EducationLevel {
        match self {
            SocioClass::Poor => EducationLevel::None,
            SocioClass::Middle => EducationLevel::HighSchool,
            SocioClass::Wealthy => {
                if rng.gen_bool(0.5) {
                    EducationLevel::HighSchool
                } else {
                    EducationLevel::College
                }
            }
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SocioClass::Poor => "A struggling family with limited resources",
            SocioClass::Middle => "A stable middle-class family",
            SocioClass::Wealthy => "An affluent family with many opportunities",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            SocioClass::Poor => "POOR",
            SocioClass::Middle => "MIDDLE",
            SocioClass::Wealthy => "WEALTHY",
        }
    }
}

impl fmt::Display for SocioClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SocioClass {
    type Err = LifeSimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_key(s).as_str() {
            "POOR" => Ok(SocioClass::Poor),
            "MIDDLE" => Ok(SocioClass::Middle),
            "WEALTHY" => Ok(SocioClass::Wealthy),
            _ => Err(LifeSimError::InvalidSocioClass(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_class_boundaries() {
        assert_eq!(SocioClass::from_family_wealth(0.0), SocioClass::Poor);
        assert_eq!(SocioClass::from_family_wealth(19_999.99), SocioClass::Poor);
        assert_eq!(SocioClass::from_family_wealth(20_000.0), SocioClass::Middle);
        assert_eq!(SocioClass::from_family_wealth(99_999.0), SocioClass::Middle);
        assert_eq!(SocioClass::from_family_wealth(100_000.0), SocioClass::Wealthy);
    }

    #[test]
    fn test_ordering() {
        assert!(SocioClass::Poor < SocioClass::Middle);
        assert!(SocioClass::Middle < SocioClass::Wealthy);
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("POOR".parse::<SocioClass>().unwrap(), SocioClass::Poor);
        assert_eq!("wealthy".parse::<SocioClass>().unwrap(), SocioClass::Wealthy);
        assert!("ROYAL".parse::<SocioClass>().is_err());
    }

    #[test]
    fn test_starting_wealth_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for class in SocioClass::ALL {
            let (low, high) = class.starting_wealth_range();
            for _ in 0..100 {
                let wealth = class.roll_family_wealth(&mut rng);
                assert!(wealth >= f64::from(low) && wealth <= f64::from(high));
            }
        }
    }

    #[test]
    fn test_family_education_rule() {
        let mut rng = StdRng::seed_from_u64(11);
        assert_eq!(SocioClass::Poor.roll_family_education(&mut rng), EducationLevel::None);
        assert_eq!(
            SocioClass::Middle.roll_family_education(&mut rng),
            EducationLevel::HighSchool
        );
        for _ in 0..20 {
            let level = SocioClass::Wealthy.roll_family_education(&mut rng);
            assert!(matches!(level, EducationLevel::HighSchool | EducationLevel::College));
        }
    }
}
