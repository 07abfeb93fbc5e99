use std::collections::VecDeque;
use serde::{Deserialize, Serialize};
/// One tick's reading together with the running average at the time it was taken.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub current_value: f64,
    pub average_value: f64,
}
impl Sample {
    pub fn new(current_value: f64, average_value: f64) -> Self {
        Self {
            current_value,
            average_value,
        }
    }
}
/// Rolling buffer that keeps the most recent `capacity` samples.
#[derive(Clone, Debug)]
pub struct HistoryBuffer {
    samples: VecDeque<Sample>,
    capacity: usize,
}
impl HistoryBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn last(&self) -> Option<&Sample> {
        self.samples.back()
    }
    /// Appends at the end, dropping the single oldest sample on overflow.
    pub fn append(&mut self, sample: Sample) {
        self.samples.push_back(sample);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }
    /// Oldest-to-newest view of the buffer.
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.iter().copied().collect()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }
    /// Mean of `current_value` over the buffer, `0.0` when empty.
    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.samples.iter().map(|s| s.current_value).sum();
        sum / self.samples.len() as f64
    }
    /// Mean of `current_value` over every sample but the newest, `0.0` when
    /// fewer than two samples are buffered.
    pub fn average_excluding_latest(&self) -> f64 {
        let older = self.samples.len().saturating_sub(1);
        if older == 0 {
            return 0.0;
        }
        let sum: f64 = self.samples.iter().take(older).map(|s| s.current_value).sum();
        sum / older as f64
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    fn filled(capacity: usize, values: &[f64]) -> HistoryBuffer {
        let mut buffer = HistoryBuffer::with_capacity(capacity);
        for &v in values {
            buffer.append(Sample::new(v, 0.0));
        }
        buffer
    }
    #[test]
    fn empty_average_is_zero() {
        let buffer = HistoryBuffer::with_capacity(10);
        assert_eq!(buffer.average(), 0.0);
        assert!(buffer.is_empty());
        assert!(buffer.last().is_none());
    }
    #[test]
    fn average_is_mean_of_current_values() {
        let buffer = filled(10, &[740.0, 750.0, 730.0]);
        assert!((buffer.average() - 740.0).abs() < 1e-9);
        let buffer = filled(10, &[701.5, 799.0]);
        assert!((buffer.average() - 750.25).abs() < 1e-9);
    }
    #[test]
    fn excluding_latest_drops_newest_sample() {
        let buffer = filled(10, &[740.0, 750.0, 730.0]);
        assert!((buffer.average_excluding_latest() - 745.0).abs() < 1e-9);
        assert_eq!(filled(10, &[740.0]).average_excluding_latest(), 0.0);
        assert_eq!(filled(10, &[]).average_excluding_latest(), 0.0);
    }
    #[test]
    fn sample_serializes_by_field_name() {
        let json = serde_json::to_string(&Sample::new(740.0, 745.5)).unwrap();
        assert_eq!(json, r#"{"current_value":740.0,"average_value":745.5}"#);
        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Sample::new(740.0, 745.5));
    }
    #[test]
    fn overflow_keeps_most_recent() {
        let values: Vec<f64> = (0..25).map(|i| 700.0 + i as f64).collect();
        let buffer = filled(10, &values);
        assert_eq!(buffer.len(), 10);
        let kept: Vec<f64> = buffer.snapshot().iter().map(|s| s.current_value).collect();
        assert_eq!(kept, values[15..].to_vec());
        assert_eq!(buffer.last().unwrap().current_value, 724.0);
    }
    #[test]
    fn never_exceeds_capacity() {
        let mut buffer = HistoryBuffer::with_capacity(3);
        for i in 0..100 {
            buffer.append(Sample::new(i as f64, 0.0));
            assert!(buffer.len() <= 3);
        }
    }
}
