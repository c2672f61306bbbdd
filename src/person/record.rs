//! Person record: identity, vitals, wealth, career and family

use crate::demographics::{EducationLevel, Job, Nationality, Religion, SocioClass};
use serde::{Deserialize, Deserializer, Serialize};

/// Upper bound for every vital stat
pub const STAT_MAX: f64 = 100.0;

/// Family context a person is born into
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub family_wealth: f64,
    pub family_education: EducationLevel,
    pub nationality: Nationality,
    pub religion: Religion,
    pub health: f64,
    pub intelligence: f64,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            family_wealth: default_family_wealth(),
            family_education: EducationLevel::HighSchool,
            nationality: Nationality::American,
            religion: Religion::None,
            health: default_health(),
            intelligence: default_intelligence(),
        }
    }
}

/// A simulated person.
///
/// The spouse is an owned copy, not a back-reference: the spouse's own
/// `spouse` field is not maintained. Fields shared by both partners
/// (`is_married`, surname) are synced through [`Person::marry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birth_year: i32,
    #[serde(default)]
    pub age: i32,
    #[serde(default = "default_true")]
    pub is_alive: bool,

    #[serde(default = "default_health")]
    pub health: f64,
    #[serde(default = "default_mood")]
    pub happiness: f64,
    #[serde(default = "default_intelligence")]
    pub intelligence: f64,
    #[serde(default = "default_mood")]
    pub charisma: f64,

    #[serde(default)]
    pub wealth: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: EducationLevel,
    #[serde(default)]
    pub job: Option<Job>,
    #[serde(default)]
    pub salary: u32,

    #[serde(default)]
    pub is_married: bool,
    #[serde(default)]
    pub spouse: Option<Box<Person>>,
    #[serde(default)]
    pub children: Vec<Person>,

    #[serde(default = "default_family_wealth")]
    pub family_wealth: f64,
    #[serde(default = "default_family_education", deserialize_with = "null_as_family_education")]
    pub family_education: EducationLevel,
    #[serde(default)]
    pub nationality: Nationality,
    #[serde(default)]
    pub religion: Religion,
}

/// How surnames changed at marriage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurnameChange {
    /// The person took their spouse's surname
    TookSpouseName,
    /// The spouse took the person's surname
    GaveName,
    Unchanged,
}

impl Person {
    /// A newborn: age 0, alive, with 20% of the family wealth as a start.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        gender: impl Into<String>,
        birth_year: i32,
        background: Background,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: gender.into(),
            birth_year,
            age: 0,
            is_alive: true,
            health: background.health,
            happiness: default_mood(),
            intelligence: background.intelligence,
            charisma: default_mood(),
            wealth: background.family_wealth * 0.2,
            education: EducationLevel::None,
            job: None,
            salary: 0,
            is_married: false,
            spouse: None,
            children: Vec::new(),
            family_wealth: background.family_wealth,
            family_education: background.family_education,
            nationality: background.nationality,
            religion: background.religion,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Socioeconomic class derived from family wealth
    #[inline]
    pub fn socio_class(&self) -> SocioClass {
        SocioClass::from_family_wealth(self.family_wealth)
    }

    #[inline]
    pub fn is_employed(&self) -> bool {
        self.job.is_some()
    }

    /// Clear job and salary
    pub fn leave_job(&mut self) {
        self.job = None;
        self.salary = 0;
    }

    /// Marry the current spouse, syncing both copies.
    ///
    /// Surname transfer only happens for Female/Male pairings: the Female
    /// partner takes the Male partner's surname. Returns `None` without
    /// mutating anything when there is no spouse.
    pub fn marry(&mut self) -> Option<SurnameChange> {
        let spouse = self.spouse.as_mut()?;
        self.is_married = true;
        spouse.is_married = true;

        let change = match (self.gender.as_str(), spouse.gender.as_str()) {
            ("Female", "Male") => {
                self.last_name = spouse.last_name.clone();
                SurnameChange::TookSpouseName
            }
            ("Male", "Female") => {
                spouse.last_name = self.last_name.clone();
                SurnameChange::GaveName
            }
            _ => SurnameChange::Unchanged,
        };
        Some(change)
    }
}

/// Add `amount` to a stat, kept within `0..=STAT_MAX`.
///
/// `amount` may be negative (a poor child's health drift).
#[inline]
pub fn raise_stat(stat: &mut f64, amount: f64) {
    *stat = (*stat + amount).clamp(0.0, STAT_MAX);
}

/// Subtract `amount` from a stat, kept within `0..=STAT_MAX`
#[inline]
pub fn lower_stat(stat: &mut f64, amount: f64) {
    *stat = (*stat - amount).clamp(0.0, STAT_MAX);
}

fn default_true() -> bool {
    true
}

fn default_health() -> f64 {
    80.0
}

fn default_intelligence() -> f64 {
    60.0
}

fn default_mood() -> f64 {
    50.0
}

fn default_family_wealth() -> f64 {
    50_000.0
}

fn default_family_education() -> EducationLevel {
    EducationLevel::HighSchool
}

/// Treat an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_family_education<'de, D>(deserializer: D) -> Result<EducationLevel, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<EducationLevel>::deserialize(deserializer)?.unwrap_or_else(default_family_education))
}
