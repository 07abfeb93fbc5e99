use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::drivers::WidgetError;
/// Largest canvas side, in pixels, the widget and its PNG snapshots accept.
pub const MAX_CANVAS_SIDE: u32 = 8192;
/// Per-session simulation and canvas settings.
///
/// Partial JSON documents are accepted; missing fields keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub min_value: f64,
    pub max_value: f64,
    /// Largest change between two consecutive samples.
    pub step_range: f64,
    pub tick_interval_ms: u64,
    /// Canvas width in pixels; also the number of samples kept in history.
    pub canvas_width: u32,
    pub canvas_height: u32,
}
impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_value: 700.0,
            max_value: 800.0,
            step_range: 30.0,
            tick_interval_ms: 1000,
            canvas_width: 500,
            canvas_height: 300,
        }
    }
}
impl SimulationConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, WidgetError> {
        let config: SimulationConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
    pub fn validate(&self) -> Result<(), WidgetError> {
        if !self.min_value.is_finite()
            || !self.max_value.is_finite()
            || self.min_value >= self.max_value
        {
            return Err(WidgetError::InvalidRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if !self.step_range.is_finite() || self.step_range < 0.0 {
            return Err(WidgetError::InvalidStep(self.step_range));
        }
        let side_ok = |side: u32| (1..=MAX_CANVAS_SIDE).contains(&side);
        if !side_ok(self.canvas_width) || !side_ok(self.canvas_height) {
            return Err(WidgetError::InvalidCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(WidgetError::InvalidInterval);
        }
        Ok(())
    }
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
    pub fn history_capacity(&self) -> usize {
        self.canvas_width as usize
    }
    pub fn value_span(&self) -> f64 {
        self.max_value - self.min_value
    }
}
