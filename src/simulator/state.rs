//! Simulator state: the one mutable record a session carries between turns

use crate::event::Event;
use crate::person::{Household, Person};
use chrono::Datelike;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of notifications kept
pub const NOTIFICATION_LIMIT: usize = 10;

/// Bounded notification log; the oldest entries are evicted first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct NotificationLog {
    entries: VecDeque<String>,
}

impl NotificationLog {
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push_back(message.into());
        while self.entries.len() > NOTIFICATION_LIMIT {
            self.entries.pop_front();
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }
}

impl From<Vec<String>> for NotificationLog {
    fn from(entries: Vec<String>) -> Self {
        let skip = entries.len().saturating_sub(NOTIFICATION_LIMIT);
        Self {
            entries: entries.into_iter().skip(skip).collect(),
        }
    }
}

impl From<NotificationLog> for Vec<String> {
    fn from(log: NotificationLog) -> Self {
        log.entries.into()
    }
}

/// Full state of one simulation session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatorState {
    #[serde(default = "default_current_year")]
    pub current_year: i32,
    /// The active person; `None` before character creation
    #[serde(default)]
    pub player: Option<Person>,
    #[serde(default = "default_generation")]
    pub generation: u32,
    #[serde(default = "default_true")]
    pub game_active: bool,
    #[serde(default = "default_true")]
    pub paused: bool,
    #[serde(default = "default_speed")]
    pub game_speed: u32,
    #[serde(default, alias = "current_event")]
    pub pending_event: Option<Event>,
    #[serde(default)]
    pub notifications: NotificationLog,
    /// Opaque, carried through unchanged
    #[serde(default)]
    pub achievements: Vec<serde_json::Value>,
    /// Lineage wealth pool, separate from the player's own wealth
    #[serde(default)]
    pub family_assets: f64,
    /// Name staged for the next generation during the hand-off prompt
    #[serde(default)]
    pub next_gen_name: Option<String>,
}

impl SimulatorState {
    /// A fresh session with no character, starting in the given year
    pub fn new(current_year: i32) -> Self {
        Self {
            current_year,
            player: None,
            generation: default_generation(),
            game_active: true,
            paused: true,
            game_speed: default_speed(),
            pending_event: None,
            notifications: NotificationLog::default(),
            achievements: Vec::new(),
            family_assets: 0.0,
            next_gen_name: None,
        }
    }

    /// A fresh session starting 0-30 years before the current calendar year
    pub fn fresh<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(calendar_year() - rng.gen_range(0..=30))
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notifications.push(message);
    }

    /// `(code, symbol)` for the active person's nationality; USD without one
    pub fn currency(&self) -> (&'static str, &'static str) {
        self.player
            .as_ref()
            .map(|p| p.nationality.currency())
            .unwrap_or(("USD", "$"))
    }

    pub fn household(&self) -> Household<'_> {
        Household {
            current_year: self.current_year,
            family_assets: self.family_assets,
            head: self.player.as_ref(),
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Years advanced per [`advance_years`](crate::simulator::SimulationEngine::advance_years) call
    pub fn set_game_speed(&mut self, speed: u32) {
        self.game_speed = speed.max(1);
    }
}

fn calendar_year() -> i32 {
    chrono::Utc::now().year()
}

fn default_current_year() -> i32 {
    calendar_year() - 20
}

fn default_generation() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_speed() -> u32 {
    1
}
