use std::collections::VecDeque;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::drivers::SimulationConfig;
/// Something that can produce the next pressure reading from the previous one.
pub trait PressureSource {
    fn next(&mut self, previous: f64) -> f64;
}
/// Bounded random walk: each step moves by at most `step_range` in either
/// direction and is clamped to `[min_value, max_value]`.
pub struct SignalSimulator<R: Rng = StdRng> {
    rng: R,
    min_value: f64,
    max_value: f64,
    step_range: f64,
}
impl SignalSimulator<StdRng> {
    pub fn from_entropy(config: &SimulationConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }
    pub fn seeded(config: &SimulationConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}
impl<R: Rng> SignalSimulator<R> {
    pub fn with_rng(config: &SimulationConfig, rng: R) -> Self {
        Self {
            rng,
            min_value: config.min_value,
            max_value: config.max_value,
            step_range: config.step_range,
        }
    }
}
impl<R: Rng> PressureSource for SignalSimulator<R> {
    fn next(&mut self, previous: f64) -> f64 {
        // gen::<f64>() is in [0, 1), so the step is in [-step_range, step_range).
        let delta = (self.rng.gen::<f64>() * 2.0 - 1.0) * self.step_range;
        (previous + delta).clamp(self.min_value, self.max_value)
    }
}
/// In-memory source useful for tests and deterministic playback.
///
/// Values are clamped like simulated ones; once the queue runs dry the
/// previous value is repeated.
pub struct ScriptedSource {
    queue: VecDeque<f64>,
    min_value: f64,
    max_value: f64,
}
impl ScriptedSource {
    pub fn new(config: &SimulationConfig, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            queue: values.into_iter().collect(),
            min_value: config.min_value,
            max_value: config.max_value,
        }
    }
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}
impl PressureSource for ScriptedSource {
    fn next(&mut self, previous: f64) -> f64 {
        self.queue
            .pop_front()
            .unwrap_or(previous)
            .clamp(self.min_value, self.max_value)
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn random_walk_stays_in_bounds() {
        let config = SimulationConfig::default();
        let mut sim = SignalSimulator::seeded(&config, 7);
        let mut value = config.min_value;
        for _ in 0..10_000 {
            value = sim.next(value);
            assert!(value >= config.min_value && value <= config.max_value);
        }
    }
    #[test]
    fn every_in_range_start_maps_in_range() {
        let config = SimulationConfig::default();
        let mut sim = SignalSimulator::seeded(&config, 42);
        for step in 0..=100 {
            let previous = config.min_value + step as f64;
            let value = sim.next(previous);
            assert!(value >= config.min_value && value <= config.max_value);
            assert!((value - previous).abs() <= config.step_range);
        }
    }
    #[test]
    fn same_seed_same_walk() {
        let config = SimulationConfig::default();
        let mut a = SignalSimulator::seeded(&config, 2024);
        let mut b = SignalSimulator::seeded(&config, 2024);
        let (mut va, mut vb) = (740.0, 740.0);
        for _ in 0..50 {
            va = a.next(va);
            vb = b.next(vb);
            assert_eq!(va, vb);
        }
    }
    #[test]
    fn zero_step_holds_value() {
        let config = SimulationConfig {
            step_range: 0.0,
            ..SimulationConfig::default()
        };
        let mut sim = SignalSimulator::seeded(&config, 1);
        assert_eq!(sim.next(755.5), 755.5);
    }
    #[test]
    fn scripted_source_replays_then_holds() {
        let config = SimulationConfig::default();
        let mut source = ScriptedSource::new(&config, [740.0, 900.0]);
        assert_eq!(source.next(700.0), 740.0);
        assert_eq!(source.next(740.0), 800.0);
        assert_eq!(source.remaining(), 0);
        assert_eq!(source.next(765.0), 765.0);
    }
}
