//! Random person generation for partners, newborns and adoptees

use super::{Background, Person};
use crate::config::NamePools;
use crate::demographics::{EducationLevel, Nationality, Religion};
use rand::seq::SliceRandom;
use rand::Rng;

/// Household a generated person joins
#[derive(Debug, Clone, Copy)]
pub struct Household<'a> {
    pub current_year: i32,
    pub family_assets: f64,
    /// The active person, if any
    pub head: Option<&'a Person>,
}

/// Why a person is being generated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Dating candidate of the given age, from the head's community
    Partner { age: i32 },
    /// Born to the head this year; carries the head's surname
    Newborn,
    /// Child aged 0-10 from anywhere in the world
    Adoptee,
}

/// Generate a person with independent random name, gender and vitals.
///
/// Family wealth is half the household's assets; family education follows
/// the head of household.
pub fn generate_person<R: Rng + ?Sized>(
    pools: &NamePools,
    household: &Household<'_>,
    origin: Origin,
    rng: &mut R,
) -> Person {
    let gender = pools.gender(rng);
    let first_name = pools.first_name(rng);
    let last_name = match (origin, household.head) {
        (Origin::Newborn, Some(head)) => head.last_name.clone(),
        _ => pools.last_name(rng),
    };

    let age = match origin {
        Origin::Partner { age } => age.max(0),
        Origin::Newborn => 0,
        Origin::Adoptee => rng.gen_range(0..=10),
    };

    let (nationality, religion) = match (origin, household.head) {
        (Origin::Adoptee, _) | (_, None) => (
            *Nationality::ALL.choose(rng).unwrap_or(&Nationality::American),
            *Religion::ALL.choose(rng).unwrap_or(&Religion::None),
        ),
        (_, Some(head)) => (head.nationality, head.religion),
    };

    let background = Background {
        family_wealth: household.family_assets * 0.5,
        family_education: household
            .head
            .map(|h| h.family_education)
            .unwrap_or(EducationLevel::HighSchool),
        nationality,
        religion,
        health: f64::from(rng.gen_range(50..=90)),
        intelligence: f64::from(rng.gen_range(40..=80)),
    };

    let mut person = Person::new(
        first_name,
        last_name,
        gender,
        household.current_year - age,
        background,
    );
    person.age = age;
    person
}
