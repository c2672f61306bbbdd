//! Main simulation engine

use super::aging::{check_mortality, update_stats};
use super::lineage;
use super::state::SimulatorState;
use crate::config::{self, GameConfig};
use crate::demographics::{format_amount, Nationality, Religion, SocioClass};
use crate::event::{generate_year_event, Action, Event, YearEvent};
use crate::person::{Background, Person};
use rand::Rng;
use std::str::FromStr;
use tracing::{debug, warn};

/// Character creation form, as submitted by a front end.
///
/// Class, nationality and religion are keys; unknown keys fall back per
/// field to Middle, American and no religion.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRequest {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub socio_class: String,
    pub nationality: String,
    pub religion: String,
}

impl Default for CharacterRequest {
    fn default() -> Self {
        Self {
            first_name: "Alex".to_string(),
            last_name: "Smith".to_string(),
            gender: "Non-Binary".to_string(),
            socio_class: SocioClass::Middle.key().to_string(),
            nationality: Nationality::American.name().to_string(),
            religion: Religion::None.name().to_string(),
        }
    }
}

impl CharacterRequest {
    /// Parse the enum keys, substituting defaults for unknown ones
    pub fn resolve(&self) -> (SocioClass, Nationality, Religion) {
        (
            parse_or_default(&self.socio_class, "socio_class"),
            parse_or_default(&self.nationality, "nationality"),
            parse_or_default(&self.religion, "religion"),
        )
    }
}

fn parse_or_default<T>(key: &str, field: &'static str) -> T
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    match key.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!(field, key, error = %e, "unknown key, using default");
            T::default()
        }
    }
}

/// Turn-based life simulation engine
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    config: GameConfig,
}

impl SimulationEngine {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Engine over the globally installed config (or defaults)
    pub fn from_global() -> Self {
        Self::new(config::global().as_ref().clone())
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Create a fresh session holding a newborn built from `request`.
    ///
    /// The session starts paused with the "New Life Begins" event pending.
    pub fn create_character<R: Rng + ?Sized>(
        &self,
        request: &CharacterRequest,
        rng: &mut R,
    ) -> SimulatorState {
        let mut state = SimulatorState::fresh(rng);
        let (class, nationality, religion) = request.resolve();
        self.start_character(
            &mut state,
            Identity {
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                gender: request.gender.clone(),
            },
            class,
            nationality,
            religion,
            rng,
        );
        state
    }

    /// Seed family wealth and a newborn player into `state`
    pub(crate) fn start_character<R: Rng + ?Sized>(
        &self,
        state: &mut SimulatorState,
        identity: Identity,
        class: SocioClass,
        nationality: Nationality,
        religion: Religion,
        rng: &mut R,
    ) {
        state.family_assets = class.roll_family_wealth(rng);
        let family_education = class.roll_family_education(rng);
        let background = Background {
            family_wealth: state.family_assets,
            family_education,
            nationality,
            religion,
            health: f64::from(rng.gen_range(50..=90)),
            intelligence: f64::from(rng.gen_range(40..=80)),
        };
        let player = Person::new(
            identity.first_name,
            identity.last_name,
            identity.gender,
            state.current_year,
            background,
        );

        state.notify(format!("A new baby named {} is born!", player.full_name()));
        let event = Event::new("New Life Begins", birth_description(&player, state))
            .with_choice("Begin Life Journey", Action::StartLife);
        debug!(name = %player.full_name(), class = %class, "character created");
        state.player = Some(player);
        state.pending_event = Some(event);
    }

    /// Advance one year. Returns whether the year was simulated.
    ///
    /// No-op while paused, inactive, without a living player, or while an
    /// event is pending.
    pub fn advance_year<R: Rng + ?Sized>(&self, state: &mut SimulatorState, rng: &mut R) -> bool {
        if !state.game_active || state.paused || state.pending_event.is_some() {
            return false;
        }
        let Some(player) = state.player.as_mut() else {
            return false;
        };
        if !player.is_alive {
            return false;
        }

        state.current_year += 1;
        player.age += 1;
        let report = update_stats(player);
        state.family_assets += report.family_income;
        if let Some(job) = report.retired_from {
            state
                .notifications
                .push(format!("{} has retired from {}.", player.first_name, job));
        }

        if check_mortality(player, rng) {
            lineage::handle_death(state);
            return true;
        }

        let outcome = generate_year_event(&self.config, &state.household(), rng);
        debug!(year = state.current_year, outcome = outcome_kind(&outcome), "year advanced");
        match outcome {
            YearEvent::Quiet => {}
            YearEvent::Milestone(message) => state.notify(message),
            YearEvent::Decision(event) => state.pending_event = Some(event),
        }
        true
    }

    /// Advance up to `game_speed` years, stopping at the first pending event
    /// or pause. Returns the number of years simulated.
    pub fn advance_years<R: Rng + ?Sized>(&self, state: &mut SimulatorState, rng: &mut R) -> u32 {
        let mut advanced = 0;
        while advanced < state.game_speed.max(1) && self.advance_year(state, rng) {
            advanced += 1;
        }
        advanced
    }
}

/// Name and gender for a new player
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Identity {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
}

fn outcome_kind(outcome: &YearEvent) -> &'static str {
    match outcome {
        YearEvent::Quiet => "quiet",
        YearEvent::Milestone(_) => "milestone",
        YearEvent::Decision(_) => "decision",
    }
}

fn birth_description(player: &Person, state: &SimulatorState) -> String {
    let (_, symbol) = player.nationality.currency();
    format!(
        "{} was born into the {} family in {}.\n\
         Nationality: {}\n\
         Religion: {}\n\
         {}\n\
         Family wealth: {}{}",
        player.first_name,
        player.last_name,
        player.birth_year,
        player.nationality,
        player.religion,
        player.socio_class().description(),
        symbol,
        format_amount(state.family_assets)
    )
}
