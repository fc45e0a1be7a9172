pub mod config;
pub mod constants;
pub mod error;
pub mod params;
pub mod types;

pub use config::ViewConfig;
pub use constants::*;
pub use error::ParameterError;
pub use params::{ParameterStore, SimulationParameters};
pub use types::*;
