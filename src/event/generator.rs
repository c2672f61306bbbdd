//! Yearly event generation
//!
//! Rules are evaluated in a fixed order and the first rule whose whole
//! condition holds wins. A rule's roll is drawn only once its age gate
//! passes, and its state condition is checked after the roll; a failed roll
//! or condition falls through to the next rule. Ages 1, 5 and 18 match
//! exactly and end the chain.

use super::{Action, Event};
use crate::config::GameConfig;
use crate::demographics::{
    available_jobs, format_amount, Nationality, Religion, SocioClass, ENTRY_LEVEL_JOBS,
};
use crate::person::{generate_person, Household, Origin, Person};
use rand::seq::SliceRandom;
use rand::Rng;

/// Cost of a college degree
pub const COLLEGE_COST: f64 = 20_000.0;
/// Cost of a trip around the world
pub const TRAVEL_COST: f64 = 10_000.0;
/// Cost of having a baby
pub const CHILD_COST: f64 = 5_000.0;
/// Cost of adopting a child
pub const ADOPTION_COST: f64 = 15_000.0;
/// Cost of gender reassignment
pub const REASSIGNMENT_COST: f64 = 10_000.0;
/// Cost of immigrating
pub const IMMIGRATION_COST: f64 = 25_000.0;

/// What a year produced
#[derive(Debug, Clone, PartialEq)]
pub enum YearEvent {
    /// Nothing happened
    Quiet,
    /// A notification-only milestone
    Milestone(String),
    /// A decision the player must resolve
    Decision(Event),
}

#[inline]
fn roll<R: Rng + ?Sized>(rng: &mut R, chance: f64) -> bool {
    rng.gen::<f64>() < chance
}

/// Select and build this year's event for the household head.
pub fn generate_year_event<R: Rng + ?Sized>(
    config: &GameConfig,
    household: &Household<'_>,
    rng: &mut R,
) -> YearEvent {
    let Some(person) = household.head else {
        return YearEvent::Quiet;
    };
    let odds = &config.odds;
    let age = person.age;

    match age {
        1 => return YearEvent::Milestone(format!("{} takes first steps!", person.first_name)),
        5 => {
            return YearEvent::Milestone(format!("{} starts kindergarten!", person.first_name))
        }
        18 => return YearEvent::Decision(coming_of_age_event(person)),
        _ => {}
    }

    if (20..=50).contains(&age) && roll(rng, odds.relationship) && person.spouse.is_none() {
        return YearEvent::Decision(relationship_event(config, household, person, rng));
    }
    if (20..=50).contains(&age)
        && roll(rng, odds.marriage)
        && person.spouse.is_some()
        && !person.is_married
    {
        return YearEvent::Decision(marriage_event(person));
    }
    if (22..=45).contains(&age) && roll(rng, odds.family) && person.is_married {
        return YearEvent::Decision(family_event(person));
    }
    if (20..60).contains(&age) && roll(rng, odds.job) && !person.is_employed() {
        return YearEvent::Decision(job_event(person));
    }
    if (25..60).contains(&age) && roll(rng, odds.adoption) {
        return YearEvent::Decision(adoption_event(person));
    }
    if age >= 18 && roll(rng, odds.gender_reassignment) {
        return YearEvent::Decision(gender_reassignment_event(person, rng));
    }
    if age >= 25 && roll(rng, odds.immigration) {
        return YearEvent::Decision(nationality_change_event(person, rng));
    }
    if age >= 20 && roll(rng, odds.conversion) {
        return YearEvent::Decision(religion_change_event(person, rng));
    }
    if (30..60).contains(&age) && roll(rng, odds.career) && person.is_employed() {
        return YearEvent::Decision(career_change_event(person));
    }

    YearEvent::Quiet
}

/// Whether the coming-of-age event offers college
pub fn can_offer_college(person: &Person) -> bool {
    (person.intelligence >= 60.0 || person.wealth >= COLLEGE_COST)
        && person.socio_class() != SocioClass::Poor
        && person.wealth >= COLLEGE_COST
}

/// Whether the coming-of-age event offers world travel
pub fn can_offer_travel(person: &Person) -> bool {
    person.wealth >= TRAVEL_COST && person.socio_class() == SocioClass::Wealthy
}

pub fn coming_of_age_event(person: &Person) -> Event {
    let (_, symbol) = person.nationality.currency();
    let mut event = Event::new(
        "Coming of Age",
        format!(
            "{} is now 18. What path will they choose?",
            person.first_name
        ),
    );

    for offer in ENTRY_LEVEL_JOBS {
        event = event.with_choice(
            format!("Work as {} ({}{}/month)", offer.job, symbol, offer.salary),
            Action::TakeJob {
                job: offer.job,
                salary: offer.salary,
            },
        );
    }
    if can_offer_college(person) {
        event = event.with_choice(
            format!("Go to College (-{}{})", symbol, format_amount(COLLEGE_COST)),
            Action::College,
        );
    }
    if can_offer_travel(person) {
        event = event.with_choice(
            format!("Travel the World (-{}{})", symbol, format_amount(TRAVEL_COST)),
            Action::Travel,
        );
    }
    event
}

fn relationship_event<R: Rng + ?Sized>(
    config: &GameConfig,
    household: &Household<'_>,
    person: &Person,
    rng: &mut R,
) -> Event {
    let partner_age = person.age + rng.gen_range(-5..=5);
    let partner = generate_person(
        &config.pools,
        household,
        Origin::Partner { age: partner_age },
        rng,
    );
    let compatibility: u32 = rng.gen_range(30..=90);
    let place = config.pools.meeting_place(rng);
    let interest = config.pools.shared_interest(rng);

    Event::new(
        "Relationship Opportunity",
        format!(
            "{} meets {} at a {}.\nShared interests: {}\nInitial attraction: {}%",
            person.first_name,
            partner.full_name(),
            place,
            interest,
            compatibility
        ),
    )
    .with_choice(
        format!("Date {} ({}% match)", partner.first_name, compatibility),
        Action::Date {
            partner: Box::new(partner),
        },
    )
    .with_choice("Remain single", Action::Decline)
}

fn marriage_event(person: &Person) -> Event {
    let spouse_name = person
        .spouse
        .as_ref()
        .map(|s| s.full_name())
        .unwrap_or_default();
    Event::new(
        "Marriage Proposal",
        format!(
            "{} and {} are considering marriage.",
            person.first_name, spouse_name
        ),
    )
    .with_choice("Get married", Action::Marry)
    .with_choice("Stay unmarried", Action::Decline)
}

/// Pregnancy framing for a Female player with a Male spouse, family
/// planning for every other pairing.
fn family_event(person: &Person) -> Event {
    let (_, symbol) = person.nationality.currency();
    let cost = format_amount(CHILD_COST);
    let spouse = person.spouse.as_deref();
    let spouse_first = spouse.map(|s| s.first_name.as_str()).unwrap_or("their partner");

    let pregnancy = person.gender == "Female" && spouse.is_some_and(|s| s.gender == "Male");
    if pregnancy {
        Event::new(
            "Pregnancy Decision",
            format!(
                "{} is considering starting a family with {}.",
                person.first_name, spouse_first
            ),
        )
        .with_choice(format!("Try for a baby (-{}{})", symbol, cost), Action::HaveChild)
        .with_choice("Wait for now", Action::Decline)
    } else {
        Event::new(
            "Family Planning",
            format!(
                "{} and {} consider having a child.",
                person.first_name, spouse_first
            ),
        )
        .with_choice(format!("Have a baby (-{}{})", symbol, cost), Action::HaveChild)
        .with_choice("Wait for now", Action::Decline)
    }
}

fn job_event(person: &Person) -> Event {
    let (_, symbol) = person.nationality.currency();
    let offers = available_jobs(
        person.socio_class(),
        person.health,
        person.intelligence,
        person.charisma,
    );

    offers.into_iter().fold(
        Event::new(
            "Job Opportunity",
            format!("{} has a chance to start working.", person.first_name),
        ),
        |event, offer| {
            event.with_choice(
                format!("Work as {} ({}{}/month)", offer.job, symbol, offer.salary),
                Action::TakeJob {
                    job: offer.job,
                    salary: offer.salary,
                },
            )
        },
    )
}

fn adoption_event(person: &Person) -> Event {
    let (_, symbol) = person.nationality.currency();
    Event::new(
        "Adoption Opportunity",
        format!("{} considers adopting a child.", person.first_name),
    )
    .with_choice(
        format!("Adopt a child (-{}{})", symbol, format_amount(ADOPTION_COST)),
        Action::Adopt,
    )
    .with_choice("Not now", Action::Decline)
}

fn gender_reassignment_event<R: Rng + ?Sized>(person: &Person, rng: &mut R) -> Event {
    let opposite = if person.gender == "Male" { "Female" } else { "Male" };
    let candidates: Vec<&str> = [opposite, "Non-Binary"]
        .into_iter()
        .filter(|g| *g != person.gender)
        .collect();
    let new_gender = candidates.choose(rng).copied().unwrap_or(opposite);
    let (_, symbol) = person.nationality.currency();

    Event::new(
        "Gender Reassignment",
        format!(
            "{} is considering identifying as {}.",
            person.first_name, new_gender
        ),
    )
    .with_choice(
        format!(
            "Proceed with reassignment (-{}{})",
            symbol,
            format_amount(REASSIGNMENT_COST)
        ),
        Action::Reassign {
            gender: new_gender.to_string(),
        },
    )
    .with_choice("Stay as is", Action::Decline)
}

fn nationality_change_event<R: Rng + ?Sized>(person: &Person, rng: &mut R) -> Event {
    let options: Vec<Nationality> = Nationality::ALL
        .into_iter()
        .filter(|n| *n != person.nationality)
        .collect();
    let target = options.choose(rng).copied().unwrap_or(Nationality::American);
    let (_, symbol) = person.nationality.currency();

    Event::new(
        "Immigration Opportunity",
        format!(
            "{} has a chance to move and adopt {} nationality.",
            person.first_name, target
        ),
    )
    .with_choice(
        format!(
            "Immigrate to become {} (-{}{})",
            target,
            symbol,
            format_amount(IMMIGRATION_COST)
        ),
        Action::Immigrate {
            nationality: target,
        },
    )
    .with_choice("Stay in current country", Action::Decline)
}

fn religion_change_event<R: Rng + ?Sized>(person: &Person, rng: &mut R) -> Event {
    let options: Vec<Religion> = Religion::ALL
        .into_iter()
        .filter(|r| *r != person.religion)
        .collect();
    let target = options.choose(rng).copied().unwrap_or(Religion::None);

    Event::new(
        "Spiritual Journey",
        format!(
            "{} is exploring {} and considering conversion.",
            person.first_name, target
        ),
    )
    .with_choice(
        format!("Convert to {}", target),
        Action::Convert { religion: target },
    )
    .with_choice("Keep current beliefs", Action::Decline)
}

fn career_change_event(person: &Person) -> Event {
    let (_, symbol) = person.nationality.currency();
    let job = person.job.map(|j| j.title()).unwrap_or("their job");
    let promotion_salary = promoted_salary(person.salary);

    Event::new(
        "Career Decision",
        format!(
            "{} faces a pivotal moment at work as {}.",
            person.first_name, job
        ),
    )
    .with_choice(
        format!(
            "Take on extra responsibility (Chance of promotion to {}{}/month)",
            symbol, promotion_salary
        ),
        Action::PromotionRisk,
    )
    .with_choice(
        "Disagree with the boss (Risk of being fired)",
        Action::FiringRisk,
    )
    .with_choice("Maintain current role", Action::Decline)
}

/// Salary after a successful promotion (x1.5, truncated)
#[inline]
pub fn promoted_salary(salary: u32) -> u32 {
    (f64::from(salary) * 1.5) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demographics::Job;
    use crate::person::Background;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Every `gen::<f64>()` is 0.0, so every roll succeeds
    fn always() -> StepRng {
        StepRng::new(0, 0)
    }

    fn adult(age: i32, family_wealth: f64) -> Person {
        let mut p = Person::new(
            "Robin",
            "Diaz",
            "Female",
            2000 - age,
            Background {
                family_wealth,
                ..Default::default()
            },
        );
        p.age = age;
        p
    }

    fn generate(person: &Person, rng: &mut StepRng) -> YearEvent {
        let household = Household {
            current_year: 2000,
            family_assets: 50_000.0,
            head: Some(person),
        };
        generate_year_event(&GameConfig::default(), &household, rng)
    }

    /// Replays a fixed list of raw draws and counts how many were taken
    struct ScriptedRng {
        draws: Vec<u64>,
        used: usize,
    }

    impl ScriptedRng {
        fn new(draws: &[u64]) -> Self {
            Self {
                draws: draws.to_vec(),
                used: 0,
            }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            self.next_u64() as u32
        }

        fn next_u64(&mut self) -> u64 {
            let draw = self.draws[self.used];
            self.used += 1;
            draw
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(8) {
                let bytes = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    fn decision(outcome: YearEvent) -> Event {
        match outcome {
            YearEvent::Decision(event) => event,
            other => panic!("expected decision, got {:?}", other),
        }
    }

    #[test]
    fn test_milestones() {
        let mut rng = always();
        assert_eq!(
            generate(&adult(1, 50_000.0), &mut rng),
            YearEvent::Milestone("Robin takes first steps!".to_string())
        );
        assert_eq!(
            generate(&adult(5, 50_000.0), &mut rng),
            YearEvent::Milestone("Robin starts kindergarten!".to_string())
        );
    }

    #[test]
    fn test_children_between_milestones_are_quiet() {
        let mut rng = always();
        for age in [2, 3, 4, 6, 10, 17] {
            assert_eq!(generate(&adult(age, 50_000.0), &mut rng), YearEvent::Quiet);
        }
    }

    #[test]
    fn test_coming_of_age_entry_jobs() {
        let event = decision(generate(&adult(18, 50_000.0), &mut always()));
        assert_eq!(event.title, "Coming of Age");
        let jobs: Vec<_> = event
            .choices
            .iter()
            .filter_map(|c| match c.action {
                Action::TakeJob { job, salary } => Some((job, salary)),
                _ => None,
            })
            .collect();
        assert_eq!(
            jobs,
            vec![
                (Job::Waiter, 500),
                (Job::Gardener, 600),
                (Job::Maid, 550),
                (Job::Cashier, 700)
            ]
        );
    }

    #[test]
    fn test_travel_requires_wealthy_class() {
        let mut rich = adult(18, 200_000.0);
        rich.wealth = 40_000.0;
        let event = decision(generate(&rich, &mut always()));
        assert!(event.offers(|a| *a == Action::Travel));
        assert!(event.offers(|a| *a == Action::College));

        let mut middle = adult(18, 60_000.0);
        middle.wealth = 40_000.0;
        let event = decision(generate(&middle, &mut always()));
        assert!(!event.offers(|a| *a == Action::Travel));
        assert!(event.offers(|a| *a == Action::College));
    }

    #[test]
    fn test_relationship_first_when_single() {
        let event = decision(generate(&adult(25, 50_000.0), &mut always()));
        assert_eq!(event.title, "Relationship Opportunity");
        match &event.choices[0].action {
            Action::Date { partner } => {
                assert!((20..=30).contains(&partner.age));
                assert!(event.choices[0].text.starts_with(&format!("Date {}", partner.first_name)));
            }
            other => panic!("expected date, got {:?}", other),
        }
        assert_eq!(event.choices[1].action, Action::Decline);
    }

    #[test]
    fn test_marriage_when_dating() {
        let mut p = adult(25, 50_000.0);
        p.spouse = Some(Box::new(adult(26, 50_000.0)));
        let event = decision(generate(&p, &mut always()));
        assert_eq!(event.title, "Marriage Proposal");
    }

    #[test]
    fn test_pregnancy_vs_family_planning() {
        let mut p = adult(30, 50_000.0);
        let mut spouse = adult(30, 50_000.0);
        spouse.gender = "Male".to_string();
        p.spouse = Some(Box::new(spouse));
        p.is_married = true;
        let event = decision(generate(&p, &mut always()));
        assert_eq!(event.title, "Pregnancy Decision");
        assert_eq!(event.choices[0].action, Action::HaveChild);

        p.gender = "Male".to_string();
        let event = decision(generate(&p, &mut always()));
        assert_eq!(event.title, "Family Planning");
    }

    #[test]
    fn test_failed_roll_falls_through_before_condition() {
        // u64::MAX maps to a roll just under 1.0, zero to 0.0
        let p = adult(25, 50_000.0);
        let household = Household {
            current_year: 2000,
            family_assets: 50_000.0,
            head: Some(&p),
        };
        let mut rng = ScriptedRng::new(&[u64::MAX, 0, 0, 0]);
        let event = decision(generate_year_event(&GameConfig::default(), &household, &mut rng));

        // Relationship roll fails; marriage and family rolls pass but their
        // conditions do not, so each still consumes its draw
        assert_eq!(event.title, "Job Opportunity");
        assert_eq!(rng.used, 4);
    }

    #[test]
    fn test_roll_drawn_only_after_age_gate() {
        let p = adult(19, 50_000.0);
        let household = Household {
            current_year: 2000,
            family_assets: 50_000.0,
            head: Some(&p),
        };
        let mut rng = ScriptedRng::new(&[u64::MAX]);
        assert_eq!(
            generate_year_event(&GameConfig::default(), &household, &mut rng),
            YearEvent::Quiet
        );
        // Only the reassignment rule admits a 19-year-old
        assert_eq!(rng.used, 1);
    }

    #[test]
    fn test_job_event_lists_catalog() {
        let mut p = adult(48, 50_000.0);
        let mut spouse = adult(48, 50_000.0);
        spouse.gender = "Male".to_string();
        p.spouse = Some(Box::new(spouse));
        p.is_married = true;
        // Too old for the family rule, so the job rule is next
        let event = decision(generate(&p, &mut always()));
        assert_eq!(event.title, "Job Opportunity");
        assert_eq!(event.choices.len(), 3);
        assert_eq!(event.choices[0].text, "Work as Teacher ($2000/month)");
    }

    #[test]
    fn test_fall_through_to_adoption_when_employed() {
        let mut p = adult(52, 50_000.0);
        p.job = Some(Job::Nurse);
        p.salary = 2500;
        let event = decision(generate(&p, &mut always()));
        assert_eq!(event.title, "Adoption Opportunity");
    }

    #[test]
    fn test_retirees_get_reassignment_offer() {
        let p = adult(70, 50_000.0);
        let event = decision(generate(&p, &mut always()));
        assert_eq!(event.title, "Gender Reassignment");
        match &event.choices[0].action {
            Action::Reassign { gender } => assert_ne!(gender, "Female"),
            other => panic!("expected reassign, got {:?}", other),
        }
    }

    #[test]
    fn test_immigration_and_conversion_targets_differ() {
        let p = adult(40, 50_000.0);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let event = nationality_change_event(&p, &mut rng);
            match event.choices[0].action {
                Action::Immigrate { nationality } => assert_ne!(nationality, p.nationality),
                ref other => panic!("expected immigrate, got {:?}", other),
            }
            let event = religion_change_event(&p, &mut rng);
            match event.choices[0].action {
                Action::Convert { religion } => assert_ne!(religion, p.religion),
                ref other => panic!("expected convert, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_career_event_preview() {
        let mut p = adult(35, 50_000.0);
        p.job = Some(Job::Teacher);
        p.salary = 2000;
        let event = career_change_event(&p);
        assert_eq!(event.choices.len(), 3);
        assert!(event.choices[0].text.contains("$3000/month"));
        assert_eq!(event.choices[1].action, Action::FiringRisk);
    }

    #[test]
    fn test_no_head_is_quiet() {
        let household = Household {
            current_year: 2000,
            family_assets: 0.0,
            head: None,
        };
        assert_eq!(
            generate_year_event(&GameConfig::default(), &household, &mut always()),
            YearEvent::Quiet
        );
    }

    #[test]
    fn test_zero_odds_never_fire() {
        let mut config = GameConfig::default();
        config.odds.relationship = 0.0;
        config.odds.marriage = 0.0;
        config.odds.family = 0.0;
        config.odds.job = 0.0;
        config.odds.adoption = 0.0;
        config.odds.gender_reassignment = 0.0;
        config.odds.immigration = 0.0;
        config.odds.conversion = 0.0;
        config.odds.career = 0.0;

        let p = adult(30, 50_000.0);
        let household = Household {
            current_year: 2000,
            family_assets: 0.0,
            head: Some(&p),
        };
        assert_eq!(
            generate_year_event(&config, &household, &mut always()),
            YearEvent::Quiet
        );
    }
}
