//! Simulation engine module

mod aging;
mod engine;
mod lineage;
mod resolver;
#[cfg(feature = "python")]
mod session;
mod snapshot;
mod state;


pub use aging::*;
pub use engine::*;
pub use lineage::{death_event, name_prompt_event};
#[cfg(feature = "python")]
pub use session::*;
pub use snapshot::*;
pub use state::*;
