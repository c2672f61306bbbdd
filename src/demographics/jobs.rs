//! Job titles and class-derived job catalogs

use super::SocioClass;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Job {
    // Entry-level, offered at coming of age
    Waiter,
    Gardener,
    Maid,
    Cashier,
    // Poor catalog
    Cleaner,
    Laborer,
    // Middle catalog
    Teacher,
    Nurse,
    Salesperson,
    // Wealthy catalog
    Lawyer,
    Doctor,
    Entrepreneur,
    // Conditional unlocks
    Actor,
    Politician,
    Athlete,
}

/// A job opening: title plus monthly salary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobOffer {
    pub job: Job,
    pub salary: u32,
}

impl JobOffer {
    const fn new(job: Job, salary: u32) -> Self {
        Self { job, salary }
    }
}

/// Entry-level openings offered to every 18 year old
pub const ENTRY_LEVEL_JOBS: [JobOffer; 4] = [
    JobOffer::new(Job::Waiter, 500),
    JobOffer::new(Job::Gardener, 600),
    JobOffer::new(Job::Maid, 550),
    JobOffer::new(Job::Cashier, 700),
];

impl Job {
    pub fn title(self) -> &'static str {
        match self {
            Job::Waiter => "Waiter",
            Job::Gardener => "Gardener",
            Job::Maid => "Maid",
            Job::Cashier => "Cashier",
            Job::Cleaner => "Cleaner",
            Job::Laborer => "Laborer",
            Job::Teacher => "Teacher",
            Job::Nurse => "Nurse",
            Job::Salesperson => "Salesperson",
            Job::Lawyer => "Lawyer",
            Job::Doctor => "Doctor",
            Job::Entrepreneur => "Entrepreneur",
            Job::Actor => "Actor",
            Job::Politician => "Politician",
            Job::Athlete => "Athlete",
        }
    }

    /// Yearly `(health, intelligence, charisma)` bonus for holding this job
    pub fn stat_bonus(self) -> (f64, f64, f64) {
        match self {
            Job::Athlete => (0.5, 0.0, 0.0),
            Job::Actor => (0.0, 0.0, 0.3),
            Job::Politician => (0.0, 0.2, 0.2),
            Job::Waiter
            | Job::Gardener
            | Job::Maid
            | Job::Cashier
            | Job::Cleaner
            | Job::Laborer
            | Job::Teacher
            | Job::Nurse
            | Job::Salesperson
            | Job::Lawyer
            | Job::Doctor
            | Job::Entrepreneur => (0.0, 0.0, 0.0),
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Openings for a person of the given class and stats.
///
/// Base jobs come first, then unlocks in a fixed order: Actor, Politician,
/// Athlete.
pub fn available_jobs(
    class: SocioClass,
    health: f64,
    intelligence: f64,
    charisma: f64,
) -> Vec<JobOffer> {
    let mut jobs = match class {
        SocioClass::Poor => vec![
            JobOffer::new(Job::Cleaner, 800),
            JobOffer::new(Job::Laborer, 1000),
            JobOffer::new(Job::Cashier, 1200),
        ],
        SocioClass::Middle => vec![
            JobOffer::new(Job::Teacher, 2000),
            JobOffer::new(Job::Nurse, 2500),
            JobOffer::new(Job::Salesperson, 3000),
        ],
        SocioClass::Wealthy => vec![
            JobOffer::new(Job::Lawyer, 5000),
            JobOffer::new(Job::Doctor, 6000),
            JobOffer::new(Job::Entrepreneur, 8000),
        ],
    };

    if charisma >= 70.0 && class != SocioClass::Poor {
        jobs.push(JobOffer::new(Job::Actor, 10_000));
    }
    if intelligence >= 80.0 && class == SocioClass::Wealthy {
        jobs.push(JobOffer::new(Job::Politician, 12_000));
    }
    if health >= 70.0 && charisma >= 60.0 {
        jobs.push(JobOffer::new(Job::Athlete, 9000));
    }

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(offers: &[JobOffer]) -> Vec<&'static str> {
        offers.iter().map(|o| o.job.title()).collect()
    }

    #[test]
    fn test_base_catalogs() {
        assert_eq!(
            titles(&available_jobs(SocioClass::Poor, 50.0, 50.0, 50.0)),
            vec!["Cleaner", "Laborer", "Cashier"]
        );
        assert_eq!(
            titles(&available_jobs(SocioClass::Middle, 50.0, 50.0, 50.0)),
            vec!["Teacher", "Nurse", "Salesperson"]
        );
        assert_eq!(
            titles(&available_jobs(SocioClass::Wealthy, 50.0, 50.0, 50.0)),
            vec!["Lawyer", "Doctor", "Entrepreneur"]
        );
    }

    #[test]
    fn test_unlock_order() {
        let jobs = available_jobs(SocioClass::Wealthy, 90.0, 90.0, 90.0);
        assert_eq!(
            titles(&jobs),
            vec!["Lawyer", "Doctor", "Entrepreneur", "Actor", "Politician", "Athlete"]
        );
        assert_eq!(jobs[3].salary, 10_000);
        assert_eq!(jobs[4].salary, 12_000);
        assert_eq!(jobs[5].salary, 9000);
    }

    #[test]
    fn test_poor_cannot_act_but_can_play_sports() {
        let jobs = available_jobs(SocioClass::Poor, 80.0, 95.0, 95.0);
        assert_eq!(titles(&jobs), vec!["Cleaner", "Laborer", "Cashier", "Athlete"]);
    }

    #[test]
    fn test_politician_requires_wealth() {
        let jobs = available_jobs(SocioClass::Middle, 10.0, 99.0, 10.0);
        assert!(!jobs.iter().any(|o| o.job == Job::Politician));
    }

    #[test]
    fn test_stat_bonus() {
        assert_eq!(Job::Athlete.stat_bonus(), (0.5, 0.0, 0.0));
        assert_eq!(Job::Politician.stat_bonus(), (0.0, 0.2, 0.2));
        assert_eq!(Job::Doctor.stat_bonus(), (0.0, 0.0, 0.0));
    }
}
