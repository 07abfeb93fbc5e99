// src/lib.rs
pub mod drivers;
pub mod engine;
pub mod types;

pub use drivers::{SimulationConfig, WidgetError};
pub use engine::{Controller, SimulatorState};
pub use types::{RunState, WidgetCommand};
