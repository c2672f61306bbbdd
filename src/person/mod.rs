//! Person records and random person generation

mod generator;
mod record;


pub use generator::*;
pub use record::*;
