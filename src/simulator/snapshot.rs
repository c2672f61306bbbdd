//! JSON snapshots of the simulator state

use super::state::SimulatorState;
use crate::error::{LifeSimError, Result};
use rand::Rng;
use tracing::warn;

/// Parse a snapshot, surfacing any failure
pub fn try_load_state(snapshot: &str) -> Result<SimulatorState> {
    serde_json::from_str(snapshot).map_err(|e| LifeSimError::DeserializationError(e.to_string()))
}

/// Parse a snapshot; any failure yields a fresh state
pub fn load_state(snapshot: &str) -> SimulatorState {
    load_state_with(snapshot, &mut rand::thread_rng())
}

/// [`load_state`] with an explicit RNG for the fresh-state fallback
pub fn load_state_with<R: Rng + ?Sized>(snapshot: &str, rng: &mut R) -> SimulatorState {
    match try_load_state(snapshot) {
        Ok(state) => state,
        Err(e) => {
            warn!(error = %e, "failed to load snapshot, starting fresh");
            SimulatorState::fresh(rng)
        }
    }
}

pub fn serialize_state(state: &SimulatorState) -> Result<String> {
    serde_json::to_string(state).map_err(|e| LifeSimError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demographics::{EducationLevel, Job, Nationality, Religion};
    use crate::event::{Action, Event};
    use crate::person::{Background, Person};
    use chrono::Datelike;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_garbage_yields_fresh_state() {
        let mut rng = StdRng::seed_from_u64(1);
        let state = load_state_with("{not json", &mut rng);
        assert!(state.player.is_none());
        assert!(state.paused);
        assert_eq!(state.generation, 1);

        assert!(matches!(
            try_load_state("[1, 2]"),
            Err(LifeSimError::DeserializationError(_))
        ));
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let state = load_state("{}");
        assert_eq!(state.current_year, chrono::Utc::now().year() - 20);
        assert!(state.paused);
        assert!(state.game_active);
        assert_eq!(state.game_speed, 1);
        assert_eq!(state.generation, 1);
        assert_eq!(state.family_assets, 0.0);
        assert!(state.notifications.is_empty());
        assert!(state.achievements.is_empty());
        assert!(state.pending_event.is_none());
    }

    #[test]
    fn test_minimal_person_snapshot() {
        let json = r#"{
            "current_year": 2024,
            "player": {
                "first_name": "Ana",
                "last_name": "Silva",
                "gender": "Female",
                "birth_year": 2000,
                "age": 24,
                "education": null,
                "nationality": "BRAZILIAN",
                "religion": "Christianity"
            },
            "current_event": {
                "title": "Spiritual Journey",
                "description": "",
                "choices": [{"text": "Convert", "action": {"kind": "convert", "religion": "Islam"}}]
            }
        }"#;
        let state = try_load_state(json).unwrap();
        let player = state.player.as_ref().unwrap();
        assert_eq!(player.education, EducationLevel::None);
        assert_eq!(player.family_education, EducationLevel::HighSchool);
        assert_eq!(player.nationality, Nationality::Brazilian);
        assert_eq!(player.family_wealth, 50_000.0);
        assert_eq!(player.health, 80.0);
        assert!(player.is_alive);
        let event = state.pending_event.as_ref().unwrap();
        assert_eq!(
            event.choices[0].action,
            Action::Convert {
                religion: Religion::Islam
            }
        );
    }

    #[test]
    fn test_round_trip_with_family() {
        let mut player = Person::new("Arjun", "Mehta", "Male", 1990, Background::default());
        player.age = 40;
        player.wealth = 12_345.678;
        player.job = Some(Job::Doctor);
        player.salary = 6000;
        let mut spouse = Person::new("Priya", "Rao", "Female", 1991, Background::default());
        spouse.age = 39;
        player.spouse = Some(Box::new(spouse));
        player.marry();
        player
            .children
            .push(Person::new("Dev", "Mehta", "Male", 2025, Background::default()));

        let mut state = SimulatorState::new(2030);
        state.player = Some(player);
        state.family_assets = 77_777.77;
        state.notify("Arjun married Priya Rao, who took the surname Mehta!");
        state.achievements.push(serde_json::json!({"id": 3, "name": "Doctor"}));
        state.pending_event = Some(Event::new("Marriage Proposal", "x").with_choice("Go", Action::Marry));
        state.next_gen_name = Some("Ravi".to_string());

        let json = serialize_state(&state).unwrap();
        assert_eq!(try_load_state(&json).unwrap(), state);
    }
}
