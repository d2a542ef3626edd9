//! Configuration: environment-driven settings plus shared defaults.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
