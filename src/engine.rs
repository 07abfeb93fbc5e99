// src/engine.rs
use crate::drivers::{
    render, DrawingSurface, HistoryBuffer, Notification, PressureSource, Readouts, Sample,
    SimulationConfig, WidgetError, LINE_THICKNESS,
};
use crate::types::{RunState, WidgetCommand};

/// Mutable state the controller carries between ticks.
#[derive(Clone, Debug)]
pub struct SimulatorState {
    pub run_state: RunState,
    pub history: HistoryBuffer,
}

impl SimulatorState {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            run_state: RunState::default(),
            history: HistoryBuffer::with_capacity(config.history_capacity()),
        }
    }

    /// Average over every buffered sample except the newest one.
    pub fn average_excluding_latest(&self) -> f64 {
        self.history.average_excluding_latest()
    }

    /// Average over the whole buffer, newest sample included.
    pub fn average_including_latest(&self) -> f64 {
        self.history.average()
    }

    /// Appends a reading stamped with the average of the samples buffered
    /// before it. Once the new sample is in, that stamp equals
    /// `average_excluding_latest()`, except on a full buffer where the prior
    /// average also counts the sample the append evicted.
    pub fn record(&mut self, current: f64) -> Sample {
        let sample = Sample::new(current, self.history.average());
        self.history.append(sample);
        sample
    }
}

/// Drives one widget: reacts to ticks and user actions, and pushes geometry
/// and text to whatever surface and readouts it was built with.
pub struct Controller<S, D, T>
where
    S: PressureSource,
    D: DrawingSurface,
    T: Readouts,
{
    config: SimulationConfig,
    state: SimulatorState,
    source: S,
    surface: D,
    readouts: T,
}

impl<S, D, T> Controller<S, D, T>
where
    S: PressureSource,
    D: DrawingSurface,
    T: Readouts,
{
    pub fn new(
        config: SimulationConfig,
        source: S,
        mut surface: D,
        mut readouts: T,
    ) -> Result<Self, WidgetError> {
        config.validate()?;
        let state = SimulatorState::new(&config);
        // Blank chart and labels until the first tick arrives.
        surface.clear();
        for segment in render(&[], &config) {
            surface.add_line(&segment, LINE_THICKNESS);
        }
        readouts.set_run_label(state.run_state.button_label());
        readouts.set_live_text(String::new());
        readouts.set_average_text(String::new());
        log::info!(
            "pressure widget ready: range {}..{}, step {}, tick {} ms, canvas {}x{}",
            config.min_value,
            config.max_value,
            config.step_range,
            config.tick_interval_ms,
            config.canvas_width,
            config.canvas_height
        );
        Ok(Self {
            config,
            state,
            source,
            surface,
            readouts,
        })
    }

    pub fn dispatch(&mut self, command: WidgetCommand) {
        match command {
            WidgetCommand::Tick => self.on_tick(),
            WidgetCommand::ToggleRun => self.on_toggle_run(),
            WidgetCommand::ShowAverage => {
                self.on_show_average();
            }
        }
    }

    pub fn on_tick(&mut self) {
        if !self.state.run_state.is_running() {
            return;
        }
        let previous = self
            .state
            .history
            .last()
            .map(|s| s.current_value)
            .unwrap_or(self.config.min_value);
        let current = self.source.next(previous);
        let sample = self.state.record(current);
        log::debug!(
            "tick: {current:.2} (running average {:.2})",
            sample.average_value
        );

        self.redraw();
        self.update_readouts();
    }

    pub fn on_toggle_run(&mut self) {
        self.state.run_state = self.state.run_state.toggled();
        log::info!("run state -> {:?}", self.state.run_state);
        self.readouts
            .set_run_label(self.state.run_state.button_label());
        self.update_readouts();
    }

    /// Reports the full-buffer average through the readouts and returns it.
    pub fn on_show_average(&mut self) -> f64 {
        let average = self.calculate_average();
        log::info!(
            "average over {} samples: {average:.2}",
            self.state.history.len()
        );
        self.readouts.notify(Notification {
            title: "Average value".to_owned(),
            message: format!("Average pressure, mmHg: {average:.2}"),
            value: average,
        });
        average
    }

    pub fn calculate_average(&self) -> f64 {
        self.state.average_including_latest()
    }

    pub fn run_state(&self) -> RunState {
        self.state.run_state
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.state.history
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn readouts(&self) -> &T {
        &self.readouts
    }

    pub fn readouts_mut(&mut self) -> &mut T {
        &mut self.readouts
    }

    fn redraw(&mut self) {
        let segments = render(&self.state.history.snapshot(), &self.config);
        self.surface.clear();
        for segment in &segments {
            self.surface.add_line(segment, LINE_THICKNESS);
        }
    }

    fn update_readouts(&mut self) {
        let Some(last) = self.state.history.last().copied() else {
            return;
        };
        self.readouts
            .set_live_text(format!("{:.2}", last.current_value));
        let average_text = if self.state.run_state.is_running() {
            String::new()
        } else {
            format!("{:.2}", last.average_value)
        };
        self.readouts.set_average_text(average_text);
    }
}
