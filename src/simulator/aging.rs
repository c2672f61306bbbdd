//! Yearly stat drift, income, retirement and mortality

use crate::demographics::Job;
use crate::person::{lower_stat, raise_stat, Person};
use rand::Rng;

/// Age at which death is certain
pub const MAX_AGE: i32 = 100;
/// Age at which employed people are retired
pub const RETIREMENT_AGE: i32 = 60;
/// Health below which random death becomes possible
pub const FRAIL_HEALTH: f64 = 20.0;

/// Side effects of one year of aging that live outside the person
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgingReport {
    /// Job the person was retired from this year
    pub retired_from: Option<Job>,
    /// Pension credited at retirement
    pub pension: f64,
    /// Share of income paid into the family assets pool
    pub family_income: f64,
}

/// Apply one year of stat drift, retirement and income to `person`.
///
/// Expects `person.age` to already be incremented for the year.
pub fn update_stats(person: &mut Person) -> AgingReport {
    let class = person.socio_class();
    let health_mod = class.health_modifier();
    let mut report = AgingReport::default();

    if person.age < 20 {
        raise_stat(&mut person.intelligence, 0.5);
        raise_stat(&mut person.health, 0.2 + health_mod);
        raise_stat(&mut person.charisma, 0.3);
    } else if person.age > 40 {
        lower_stat(&mut person.health, 0.5 + health_mod);
        if person.age > 60 {
            lower_stat(&mut person.health, 1.0 + health_mod);
        }
    }

    if person.age >= RETIREMENT_AGE {
        if let Some(job) = person.job {
            person.leave_job();
            report.retired_from = Some(job);
            if person.wealth > 0.0 {
                report.pension = (person.wealth * 0.02).min(1000.0);
                person.wealth += report.pension;
            }
        }
    }

    if let Some(job) = person.job {
        let monthly = f64::from(person.salary) / 12.0;
        person.wealth += monthly * class.wealth_modifier();
        report.family_income = monthly * 0.1;

        let (health, intelligence, charisma) = job.stat_bonus();
        if health > 0.0 {
            raise_stat(&mut person.health, health);
        }
        if intelligence > 0.0 {
            raise_stat(&mut person.intelligence, intelligence);
        }
        if charisma > 0.0 {
            raise_stat(&mut person.charisma, charisma);
        }
    }

    report
}

/// Chance of dying this year from frailty, or `None` if no roll applies.
pub fn frailty_death_chance(person: &Person) -> Option<f64> {
    if person.age < 20 || person.health >= FRAIL_HEALTH {
        return None;
    }
    let base = (FRAIL_HEALTH - person.health) * 0.01 + f64::from(person.age - 20) * 0.005;
    Some(base * person.socio_class().mortality_modifier())
}

/// Decide whether `person` dies this year.
///
/// Certain at [`MAX_AGE`]; otherwise a single draw only for frail adults.
pub fn check_mortality<R: Rng + ?Sized>(person: &Person, rng: &mut R) -> bool {
    if person.age >= MAX_AGE {
        return true;
    }
    match frailty_death_chance(person) {
        Some(chance) => rng.gen::<f64>() < chance,
        None => false,
    }
}
