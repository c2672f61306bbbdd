//! Event module: pending decisions and the yearly event generator

pub mod generator;
mod model;


pub use generator::*;
pub use model::*;
