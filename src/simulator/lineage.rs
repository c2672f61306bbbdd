//! Death and generational hand-off

use super::state::SimulatorState;
use crate::demographics::format_amount;
use crate::event::{Action, Event};
use rand::Rng;
use tracing::info;

/// Mark the player dead, pause, and queue the "Life Complete" event.
pub(crate) fn handle_death(state: &mut SimulatorState) {
    let Some(player) = state.player.as_mut() else {
        return;
    };
    player.is_alive = false;
    info!(
        name = %player.full_name(),
        age = player.age,
        year = state.current_year,
        generation = state.generation,
        "player died"
    );
    state.pending_event = Some(death_event(state));
    state.paused = true;
}

/// Summary of the finished life with the continuation options.
///
/// "Continue as a Child" is listed first and only when children exist.
pub fn death_event(state: &SimulatorState) -> Event {
    let Some(player) = state.player.as_ref() else {
        return Event::new("Life Complete", "")
            .with_choice("Start New Life (New Family)", Action::NewLife);
    };
    let (_, symbol) = state.currency();

    let mut summary = format!(
        "{} has passed away at age {}.\n\
         Born: {}\n\
         Died: {}\n\
         Nationality: {}\n\
         Religion: {}\n\
         Family Assets: {}{}",
        player.full_name(),
        player.age,
        player.birth_year,
        state.current_year,
        player.nationality,
        player.religion,
        symbol,
        format_amount(state.family_assets)
    );
    if let Some(spouse) = &player.spouse {
        summary.push_str(&format!("\nSpouse: {}", spouse.full_name()));
    }
    if !player.children.is_empty() {
        summary.push_str(&format!("\nChildren: {}", player.children.len()));
    }
    if let Some(job) = player.job {
        summary.push_str(&format!("\nCareer: {}", job));
    }

    let mut event = Event::new("Life Complete", summary);
    if !player.children.is_empty() {
        event = event.with_choice("Continue as a Child (Choose Name)", Action::NextGenPrompt);
    }
    event
        .with_choice("Start New Life (New Family)", Action::NewLife)
        .with_choice("Restart with New Character (Same Family)", Action::Restart)
}

pub fn name_prompt_event() -> Event {
    Event::new(
        "Name Your Child",
        "Choose a name for your next generation character.",
    )
    .with_choice("Enter name", Action::NextGenName)
}

/// Promote a random child to player.
///
/// Returns `false` without touching the state when there is no player or
/// no child to continue as.
pub(crate) fn continue_with_child<R: Rng + ?Sized>(state: &mut SimulatorState, rng: &mut R) -> bool {
    let Some(parent) = state.player.as_mut() else {
        return false;
    };
    if parent.children.is_empty() {
        return false;
    }
    let index = rng.gen_range(0..parent.children.len());
    let mut child = parent.children.remove(index);

    state.generation += 1;
    child.age = state.current_year - child.birth_year;
    child.is_alive = true;
    if let Some(name) = state.next_gen_name.take() {
        let name = name.trim();
        if !name.is_empty() {
            child.first_name = name.to_string();
        }
    }
    child.wealth = state.family_assets * 0.5;
    state.family_assets *= 0.5;

    info!(
        name = %child.full_name(),
        generation = state.generation,
        "continuing as child"
    );
    state.notify(format!(
        "Now playing as {} (Generation {})",
        child.full_name(),
        state.generation
    ));
    state.player = Some(child);
    state.paused = false;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demographics::Job;
    use crate::person::{Background, Person};
    use rand::rngs::mock::StepRng;

    fn state_with_player(children: usize) -> SimulatorState {
        let mut state = SimulatorState::new(2080);
        let mut player = Person::new("Lena", "Berg", "Female", 2000, Background::default());
        player.age = 80;
        for i in 0..children {
            let mut child = Person::new(
                format!("Kid{}", i),
                "Berg",
                "Male",
                2030 + i as i32,
                Background::default(),
            );
            child.age = 0;
            player.children.push(child);
        }
        state.player = Some(player);
        state.family_assets = 100_000.0;
        state
    }

    #[test]
    fn test_death_event_without_children() {
        let mut state = state_with_player(0);
        handle_death(&mut state);

        assert!(state.paused);
        assert!(!state.player.as_ref().unwrap().is_alive);
        let event = state.pending_event.as_ref().unwrap();
        assert_eq!(event.title, "Life Complete");
        let actions: Vec<_> = event.choices.iter().map(|c| c.action.clone()).collect();
        assert_eq!(actions, vec![Action::NewLife, Action::Restart]);
        assert!(event.description.contains("Lena Berg has passed away at age 80."));
        assert!(event.description.contains("Family Assets: $100,000"));
        assert!(!event.description.contains("Children"));
    }

    #[test]
    fn test_death_event_with_children_lists_continue_first() {
        let mut state = state_with_player(2);
        if let Some(p) = state.player.as_mut() {
            p.job = Some(Job::Teacher);
        }
        let event = death_event(&state);
        assert_eq!(event.choices[0].action, Action::NextGenPrompt);
        assert_eq!(event.choices.len(), 3);
        assert!(event.description.contains("Children: 2"));
        assert!(event.description.contains("Career: Teacher"));
    }

    #[test]
    fn test_continue_with_child() {
        let mut state = state_with_player(2);
        state.next_gen_name = Some("  Mira ".to_string());
        assert!(continue_with_child(&mut state, &mut StepRng::new(0, 0)));

        let player = state.player.as_ref().unwrap();
        assert_eq!(player.first_name, "Mira");
        assert_eq!(player.age, 50);
        assert_eq!(player.wealth, 50_000.0);
        assert!(player.is_alive);
        assert_eq!(state.family_assets, 50_000.0);
        assert_eq!(state.generation, 2);
        assert!(state.next_gen_name.is_none());
        assert!(!state.paused);
        assert_eq!(
            state.notifications.latest(),
            Some("Now playing as Mira Berg (Generation 2)")
        );
    }

    #[test]
    fn test_blank_name_keeps_child_name() {
        let mut state = state_with_player(1);
        state.next_gen_name = Some("   ".to_string());
        assert!(continue_with_child(&mut state, &mut StepRng::new(0, 0)));
        assert_eq!(state.player.as_ref().unwrap().first_name, "Kid0");
        assert!(state.next_gen_name.is_none());
    }

    #[test]
    fn test_no_children_is_noop() {
        let mut state = state_with_player(0);
        let before = state.clone();
        assert!(!continue_with_child(&mut state, &mut StepRng::new(0, 0)));
        assert_eq!(state, before);
    }
}
