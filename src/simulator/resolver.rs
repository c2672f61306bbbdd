//! Choice resolution: applies the effect of the picked action

use super::engine::{Identity, SimulationEngine};
use super::lineage;
use super::state::SimulatorState;
use crate::demographics::EducationLevel;
use crate::event::{
    promoted_salary, Action, ADOPTION_COST, CHILD_COST, COLLEGE_COST, IMMIGRATION_COST,
    REASSIGNMENT_COST, TRAVEL_COST,
};
use crate::person::{generate_person, raise_stat, Household, Origin, Person, SurnameChange};
use rand::Rng;
use tracing::debug;

/// Deduct `cost` from both the person and the family pool if affordable
fn try_spend(person: &mut Person, family_assets: &mut f64, cost: f64) -> bool {
    if person.wealth < cost {
        return false;
    }
    person.wealth -= cost;
    *family_assets -= cost;
    true
}

impl SimulationEngine {
    /// Resolve choice `index` of the pending event.
    ///
    /// Returns `false` and leaves the state untouched when the index is out of
    /// range, nothing is pending, or the action has nothing to act on.
    pub fn resolve_choice<R: Rng + ?Sized>(
        &self,
        state: &mut SimulatorState,
        index: usize,
        rng: &mut R,
    ) -> bool {
        let Some(action) = state
            .pending_event
            .as_ref()
            .and_then(|event| event.choices.get(index))
            .map(|choice| choice.action.clone())
        else {
            return false;
        };
        debug!(index, action = action.tag(), "resolving choice");

        match action {
            Action::StartLife => state.paused = false,
            Action::NewLife => {
                *state = SimulatorState::fresh(rng);
                state.notify("Starting a new life...");
                return true;
            }
            Action::Restart => {
                if !self.restart_family(state, rng) {
                    return false;
                }
                // The new character's birth event is superseded by the restart
            }
            Action::NextGenPrompt => {
                state.pending_event = Some(lineage::name_prompt_event());
                return true;
            }
            Action::NextGenName => {
                if !lineage::continue_with_child(state, rng) {
                    return false;
                }
            }
            action => {
                let Some(mut player) = state.player.take() else {
                    return false;
                };
                let applied = self.apply_to_player(state, &mut player, action, rng);
                state.player = Some(player);
                if !applied {
                    return false;
                }
            }
        }
        state.pending_event = None;
        true
    }

    /// Stage a name for the next generation and resolve the name prompt.
    ///
    /// No-op unless the name prompt is pending.
    pub fn submit_next_generation_name<R: Rng + ?Sized>(
        &self,
        state: &mut SimulatorState,
        name: impl Into<String>,
        rng: &mut R,
    ) -> bool {
        let prompt_pending = state
            .pending_event
            .as_ref()
            .and_then(|event| event.choices.first())
            .is_some_and(|choice| choice.action == Action::NextGenName);
        if !prompt_pending {
            return false;
        }
        state.next_gen_name = Some(name.into());
        self.resolve_choice(state, 0, rng)
    }

    /// New random character in the same family line, generation reset to 1
    fn restart_family<R: Rng + ?Sized>(&self, state: &mut SimulatorState, rng: &mut R) -> bool {
        let Some(previous) = state.player.as_ref() else {
            return false;
        };
        let class = previous.socio_class();
        let nationality = previous.nationality;
        let religion = previous.religion;
        let identity = Identity {
            first_name: self.config().pools.first_name(rng),
            last_name: previous.last_name.clone(),
            gender: self.config().pools.gender(rng),
        };

        self.start_character(state, identity, class, nationality, religion, rng);
        state.generation = 1;
        state.paused = false;
        true
    }

    /// Effects that act on the player. `state.player` is detached while this
    /// runs; the person is passed separately.
    fn apply_to_player<R: Rng + ?Sized>(
        &self,
        state: &mut SimulatorState,
        player: &mut Person,
        action: Action,
        rng: &mut R,
    ) -> bool {
        let first = player.first_name.clone();
        let (_, symbol) = player.nationality.currency();

        match action {
            Action::College => {
                if try_spend(player, &mut state.family_assets, COLLEGE_COST) {
                    player.education = EducationLevel::College;
                    state.notify(format!("{} enrolled in college!", first));
                } else {
                    state.notify(format!("{} cannot afford college.", first));
                }
            }
            Action::Travel => {
                if try_spend(player, &mut state.family_assets, TRAVEL_COST) {
                    raise_stat(&mut player.happiness, 10.0);
                    state.notify(format!("{} traveled the world!", first));
                } else {
                    state.notify(format!("{} cannot afford to travel.", first));
                }
            }
            Action::TakeJob { job, salary } => {
                player.job = Some(job);
                player.salary = salary;
                state.notify(format!(
                    "{} started working as {} ({}{}/month)!",
                    first, job, symbol, salary
                ));
            }
            Action::HaveChild => {
                if player.wealth < CHILD_COST {
                    state.notify(format!("{} cannot afford to have a child.", first));
                    return true;
                }
                let child = self.new_child(state, player, Origin::Newborn, rng);
                let message = match &player.spouse {
                    Some(spouse) => format!(
                        "{} and {} had a baby named {}!",
                        first, spouse.first_name, child.first_name
                    ),
                    None => format!("{} had a baby named {}!", first, child.first_name),
                };
                player.children.push(child);
                try_spend(player, &mut state.family_assets, CHILD_COST);
                state.notify(message);
            }
            Action::Adopt => {
                if player.wealth < ADOPTION_COST {
                    state.notify(format!("{} cannot afford to adopt.", first));
                    return true;
                }
                let child = self.new_child(state, player, Origin::Adoptee, rng);
                let message = format!("{} adopted {}!", first, child.full_name());
                player.children.push(child);
                try_spend(player, &mut state.family_assets, ADOPTION_COST);
                state.notify(message);
            }
            Action::Reassign { gender } => {
                if try_spend(player, &mut state.family_assets, REASSIGNMENT_COST) {
                    state.notify(format!("{} now identifies as {}!", first, gender));
                    player.gender = gender;
                } else {
                    state.notify(format!("{} cannot afford gender reassignment.", first));
                }
            }
            Action::Immigrate { nationality } => {
                if try_spend(player, &mut state.family_assets, IMMIGRATION_COST) {
                    player.nationality = nationality;
                    state.notify(format!("{} immigrated and is now {}!", first, nationality));
                } else {
                    state.notify(format!("{} cannot afford to immigrate.", first));
                }
            }
            Action::Convert { religion } => {
                player.religion = religion;
                state.notify(format!("{} converted to {}!", first, religion));
            }
            Action::Date { partner } => {
                state.notify(format!("{} started dating {}!", first, partner.full_name()));
                player.spouse = Some(partner);
            }
            Action::Marry => {
                let Some(change) = player.marry() else {
                    return false;
                };
                let spouse_name = player
                    .spouse
                    .as_ref()
                    .map(|s| s.full_name())
                    .unwrap_or_default();
                let message = match change {
                    SurnameChange::TookSpouseName => format!(
                        "{} married {} and took the name {}!",
                        first,
                        spouse_name,
                        player.full_name()
                    ),
                    SurnameChange::GaveName => format!(
                        "{} married {}, who took the surname {}!",
                        player.full_name(),
                        spouse_name,
                        player.last_name
                    ),
                    SurnameChange::Unchanged => {
                        format!("{} married {}!", player.full_name(), spouse_name)
                    }
                };
                state.notify(message);
            }
            Action::PromotionRisk => {
                let chance = (player.intelligence + player.charisma) / 200.0;
                if rng.gen::<f64>() < chance {
                    player.salary = promoted_salary(player.salary);
                    state.notify(format!(
                        "{} got promoted! New salary: {}{}/month",
                        first, symbol, player.salary
                    ));
                } else {
                    state.notify(format!("{}'s extra effort went unnoticed.", first));
                }
            }
            Action::FiringRisk => {
                let chance = (100.0 - player.charisma) / 100.0;
                if rng.gen::<f64>() < chance {
                    let job = player.job.map(|j| j.title()).unwrap_or("their job");
                    player.leave_job();
                    state.notify(format!("{} was fired from {}!", first, job));
                } else {
                    state.notify(format!("{} stood their ground and kept the job.", first));
                }
            }
            Action::Decline => {}
            Action::StartLife
            | Action::NewLife
            | Action::Restart
            | Action::NextGenPrompt
            | Action::NextGenName => return false,
        }
        true
    }

    fn new_child<R: Rng + ?Sized>(
        &self,
        state: &SimulatorState,
        parent: &Person,
        origin: Origin,
        rng: &mut R,
    ) -> Person {
        let household = Household {
            current_year: state.current_year,
            family_assets: state.family_assets,
            head: Some(parent),
        };
        generate_person(&self.config().pools, &household, origin, rng)
    }
}
