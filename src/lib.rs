//! Life Sim Core - Turn-based generational life simulator engine
//!
//! One step per call: advance a year, resolve a pending decision, or hand
//! play over to the next generation. State round-trips through JSON
//! snapshots. Python bindings via PyO3 are behind the `python` feature.

pub mod config;
pub mod demographics;
pub mod error;
pub mod event;
pub mod person;
pub mod simulator;

pub use crate::error::{LifeSimError, Result};
pub use crate::simulator::{
    load_state, serialize_state, try_load_state, CharacterRequest, SimulationEngine,
    SimulatorState,
};

#[cfg(feature = "python")]
mod python {
    use crate::config::{self, GameConfig};
    use crate::simulator::{
        load_state, serialize_state, CharacterRequest, GameSession, SimulationEngine,
    };
    use pyo3::prelude::*;

    // ========================================================================
    // Python Functions
    // ========================================================================

    /// Install the game configuration (call once at startup)
    ///
    /// # Arguments
    /// * `json` - Optional JSON config; missing sections use the defaults
    ///
    /// # Raises
    /// ValueError if the config is malformed or fails validation
    #[pyfunction]
    #[pyo3(signature = (json=None))]
    fn init_config(json: Option<&str>) -> PyResult<()> {
        let config = match json {
            Some(json) => GameConfig::from_json(json)?,
            None => GameConfig::default(),
        };
        config::install_global(config)?;
        Ok(())
    }

    /// Check if config is initialized
    #[pyfunction]
    fn is_config_initialized() -> bool {
        config::is_global_installed()
    }

    /// Create a new character and return its session
    ///
    /// Unknown class, nationality or religion keys fall back to Middle,
    /// American and no religion.
    #[pyfunction]
    #[pyo3(signature = (first_name, last_name, gender, socio_class="MIDDLE", nationality="American", religion="None"))]
    fn create_character(
        first_name: String,
        last_name: String,
        gender: String,
        socio_class: &str,
        nationality: &str,
        religion: &str,
    ) -> GameSession {
        let engine = SimulationEngine::from_global();
        let request = CharacterRequest {
            first_name,
            last_name,
            gender,
            socio_class: socio_class.to_string(),
            nationality: nationality.to_string(),
            religion: religion.to_string(),
        };
        let state = engine.create_character(&request, &mut rand::thread_rng());
        GameSession::new(engine, state)
    }

    /// Resume a session from a JSON snapshot (a fresh state if unreadable)
    #[pyfunction]
    fn load_session(snapshot: &str) -> GameSession {
        GameSession::new(SimulationEngine::from_global(), load_state(snapshot))
    }

    /// Advance a snapshot by up to `years` years asynchronously
    ///
    /// Runs in a background thread using Tokio's spawn_blocking so the
    /// asyncio event loop stays responsive. Stops early at a pending event,
    /// a pause or death.
    ///
    /// # Returns
    /// A Python awaitable that resolves to the new JSON snapshot
    ///
    /// # Example (Python)
    /// ```python
    /// snapshot = await advance_async(snapshot, 10)
    /// ```
    #[pyfunction]
    fn advance_async(py: Python<'_>, snapshot: String, years: u32) -> PyResult<Bound<'_, PyAny>> {
        pyo3_async_runtimes::tokio::future_into_py(py, async move {
            let snapshot = tokio::task::spawn_blocking(move || {
                let engine = SimulationEngine::from_global();
                let mut state = load_state(&snapshot);
                let mut rng = rand::thread_rng();
                for _ in 0..years {
                    if !engine.advance_year(&mut state, &mut rng) {
                        break;
                    }
                }
                serialize_state(&state).map_err(PyErr::from)
            })
            .await
            .map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                    "Simulation task panicked: {}",
                    e
                ))
            })??;

            Ok(snapshot)
        })
    }

    // ========================================================================
    // Python Module Definition
    // ========================================================================

    #[pymodule]
    fn life_sim_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(init_config, m)?)?;
        m.add_function(wrap_pyfunction!(is_config_initialized, m)?)?;
        m.add_function(wrap_pyfunction!(create_character, m)?)?;
        m.add_function(wrap_pyfunction!(load_session, m)?)?;
        m.add_function(wrap_pyfunction!(advance_async, m)?)?;
        m.add_class::<GameSession>()?;
        Ok(())
    }
}
