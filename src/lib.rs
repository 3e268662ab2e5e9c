pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod nhl;
pub mod schedule;
pub mod status;

pub use error::{PumpjackError, Result};
