//! Event, choice and action structures

use crate::demographics::{Job, Nationality, Religion};
use crate::person::Person;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Effect applied when a choice is picked.
///
/// Each variant carries exactly the payload its effect needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    StartLife,
    College,
    Travel,
    TakeJob { job: Job, salary: u32 },
    HaveChild,
    Adopt,
    Reassign { gender: String },
    Immigrate { nationality: Nationality },
    Convert { religion: Religion },
    Date { partner: Box<Person> },
    Marry,
    PromotionRisk,
    FiringRisk,
    Decline,
    NewLife,
    Restart,
    NextGenPrompt,
    NextGenName,
}

impl Action {
    /// Stable symbolic name, as used in snapshots
    pub fn tag(&self) -> &'static str {
        match self {
            Action::StartLife => "start_life",
            Action::College => "college",
            Action::Travel => "travel",
            Action::TakeJob { .. } => "take_job",
            Action::HaveChild => "have_child",
            Action::Adopt => "adopt",
            Action::Reassign { .. } => "reassign",
            Action::Immigrate { .. } => "immigrate",
            Action::Convert { .. } => "convert",
            Action::Date { .. } => "date",
            Action::Marry => "marry",
            Action::PromotionRisk => "promotion_risk",
            Action::FiringRisk => "firing_risk",
            Action::Decline => "decline",
            Action::NewLife => "new_life",
            Action::Restart => "restart",
            Action::NextGenPrompt => "next_gen_prompt",
            Action::NextGenName => "next_gen_name",
        }
    }
}

/// One option of an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    pub action: Action,
}

/// A pending decision shown to the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: String,
    pub choices: SmallVec<[Choice; 4]>,
}

impl Event {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            choices: SmallVec::new(),
        }
    }

    pub fn with_choice(mut self, text: impl Into<String>, action: Action) -> Self {
        self.choices.push(Choice {
            text: text.into(),
            action,
        });
        self
    }

    /// Whether any choice carries an action matching `predicate`
    pub fn offers(&self, predicate: impl Fn(&Action) -> bool) -> bool {
        self.choices.iter().any(|c| predicate(&c.action))
    }
}
