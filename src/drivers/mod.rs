// src/drivers/mod.rs
pub mod bitmap;
pub mod buffer;
pub mod config;
pub mod error;
pub mod render;
pub mod scheduler;
pub mod source;
pub mod surface;
pub use bitmap::render_chart_png;
pub use buffer::{HistoryBuffer, Sample};
pub use config::{SimulationConfig, MAX_CANVAS_SIDE};
pub use error::WidgetError;
pub use render::{render, LineColor, LineSegment, LINE_THICKNESS, MARKER_SAMPLE_INDEX};
pub use scheduler::TickScheduler;
pub use source::{PressureSource, ScriptedSource, SignalSimulator};
pub use surface::{DrawingSurface, DrawnLine, Notification, ReadoutPanel, Readouts, RetainedSurface};
