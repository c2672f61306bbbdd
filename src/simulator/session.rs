//! GameSession - Stateful session for the Python-Rust boundary
//!
//! The simulator state stays in Rust heap memory between turns; Python
//! drives it one step at a time and reads views on demand.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::{serialize_state, SimulationEngine, SimulatorState};
use crate::person::Person;

// ============================================================================
// GameSession PyClass
// ============================================================================

/// One running life simulation.
///
/// Each session owns its engine (a copy of the config current at creation)
/// and its state.
#[pyclass]
pub struct GameSession {
    engine: SimulationEngine,
    state: SimulatorState,
}

impl GameSession {
    pub fn new(engine: SimulationEngine, state: SimulatorState) -> Self {
        Self { engine, state }
    }
}

// ============================================================================
// PyMethods Implementation
// ============================================================================

#[pymethods]
impl GameSession {
    // ------------------------------------------------------------------------
    // Getter Properties
    // ------------------------------------------------------------------------

    #[getter]
    fn year(&self) -> i32 {
        self.state.current_year
    }

    #[getter]
    fn generation(&self) -> u32 {
        self.state.generation
    }

    #[getter]
    fn paused(&self) -> bool {
        self.state.paused
    }

    /// Notification log, oldest first
    #[getter]
    fn notifications(&self) -> Vec<String> {
        self.state.notifications.iter().map(str::to_string).collect()
    }

    /// `(code, symbol)` of the player's currency
    #[getter]
    fn currency(&self) -> (&'static str, &'static str) {
        self.state.currency()
    }

    // ------------------------------------------------------------------------
    // Turn Controls
    // ------------------------------------------------------------------------

    /// Advance one year; returns whether it was simulated
    fn advance(&mut self) -> bool {
        self.engine
            .advance_year(&mut self.state, &mut rand::thread_rng())
    }

    /// Advance up to the game speed; returns the years simulated
    fn advance_many(&mut self) -> u32 {
        self.engine
            .advance_years(&mut self.state, &mut rand::thread_rng())
    }

    /// Resolve a choice of the pending event by index
    fn choose(&mut self, index: usize) -> bool {
        self.engine
            .resolve_choice(&mut self.state, index, &mut rand::thread_rng())
    }

    /// Name the next-generation character and continue as them
    fn submit_name(&mut self, name: String) -> bool {
        self.engine
            .submit_next_generation_name(&mut self.state, name, &mut rand::thread_rng())
    }

    fn toggle_pause(&mut self) {
        self.state.toggle_pause();
    }

    fn set_speed(&mut self, speed: u32) {
        self.state.set_game_speed(speed);
    }

    /// JSON snapshot of the full state
    fn snapshot(&self) -> PyResult<String> {
        Ok(serialize_state(&self.state)?)
    }

    // ------------------------------------------------------------------------
    // Lazy Views
    // ------------------------------------------------------------------------

    /// Pending event as `{title, description, choices: [text, ...]}`, or None
    fn pending_event(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let Some(event) = &self.state.pending_event else {
            return Ok(py.None());
        };
        let dict = PyDict::new(py);
        dict.set_item("title", &event.title)?;
        dict.set_item("description", &event.description)?;

        let choices = PyList::empty(py);
        for choice in &event.choices {
            choices.append(&choice.text)?;
        }
        dict.set_item("choices", choices)?;
        Ok(dict.into())
    }

    /// Player summary dict, or None before character creation
    fn player(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        match &self.state.player {
            Some(person) => Ok(person_to_dict(py, person)?.into()),
            None => Ok(py.None()),
        }
    }

    fn __repr__(&self) -> String {
        match &self.state.player {
            Some(p) => format!(
                "GameSession(player='{}', age={}, year={}, generation={})",
                p.full_name(),
                p.age,
                self.state.current_year,
                self.state.generation
            ),
            None => format!("GameSession(year={})", self.state.current_year),
        }
    }
}

fn person_to_dict<'py>(py: Python<'py>, person: &Person) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("name", person.full_name())?;
    dict.set_item("gender", &person.gender)?;
    dict.set_item("age", person.age)?;
    dict.set_item("birth_year", person.birth_year)?;
    dict.set_item("is_alive", person.is_alive)?;
    dict.set_item("health", person.health)?;
    dict.set_item("happiness", person.happiness)?;
    dict.set_item("intelligence", person.intelligence)?;
    dict.set_item("charisma", person.charisma)?;
    dict.set_item("wealth", person.wealth)?;
    dict.set_item("education", person.education.key())?;
    dict.set_item("job", person.job.map(|j| j.title()))?;
    dict.set_item("salary", person.salary)?;
    dict.set_item("socio_class", person.socio_class().key())?;
    dict.set_item("nationality", person.nationality.name())?;
    dict.set_item("religion", person.religion.name())?;
    dict.set_item("is_married", person.is_married)?;
    dict.set_item("spouse", person.spouse.as_ref().map(|s| s.full_name()))?;

    let children = PyList::empty(py);
    for child in &person.children {
        children.append(child.full_name())?;
    }
    dict.set_item("children", children)?;
    Ok(dict)
}
