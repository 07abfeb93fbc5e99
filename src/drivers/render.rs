use crate::drivers::{Sample, SimulationConfig};
/// Stroke width, in pixels, every chart segment is drawn with.
pub const LINE_THICKNESS: f32 = 2.0;
/// Samples between the Y axis and the measurement marker.
pub const MARKER_SAMPLE_INDEX: f64 = 100.0;
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineColor(pub u8, pub u8, pub u8);
impl LineColor {
    pub const AXIS: LineColor = LineColor(0, 0, 0);
    pub const DATA: LineColor = LineColor(0, 0, 255);
}
/// Screen-space segment; origin is the top-left corner of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: LineColor,
}
impl LineSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, color: LineColor) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            color,
        }
    }
}
/// Maps a history snapshot onto the fixed canvas.
///
/// The first three segments are always the Y axis, the X axis and the
/// measurement marker, followed by one data segment per adjacent sample pair.
/// `config` must pass [`SimulationConfig::validate`]; an empty value range
/// would make every data segment non-finite.
pub fn render(history: &[Sample], config: &SimulationConfig) -> Vec<LineSegment> {
    debug_assert!(config.value_span() > 0.0, "empty value range");
    let width = config.canvas_width as f64;
    let height = config.canvas_height as f64;
    // An empty history still places the marker as if one sample were shown.
    let scale_x = width / history.len().max(1) as f64;
    let scale_y = height / config.value_span();
    let to_y = |value: f64| height - (value - config.min_value) * scale_y;
    let marker_x = MARKER_SAMPLE_INDEX * scale_x;
    let mut segments = Vec::with_capacity(history.len() + 2);
    segments.push(LineSegment::new(0.0, 0.0, 0.0, height, LineColor::AXIS));
    segments.push(LineSegment::new(0.0, height, width, height, LineColor::AXIS));
    segments.push(LineSegment::new(marker_x, 0.0, marker_x, height, LineColor::AXIS));
    for (i, pair) in history.windows(2).enumerate() {
        segments.push(LineSegment::new(
            i as f64 * scale_x,
            to_y(pair[0].current_value),
            (i + 1) as f64 * scale_x,
            to_y(pair[1].current_value),
            LineColor::DATA,
        ));
    }
    segments
}
#[cfg(test)]
mod tests {
    use super::*;
    fn history(values: &[f64]) -> Vec<Sample> {
        values.iter().map(|&v| Sample::new(v, 0.0)).collect()
    }
    fn data_segments(segments: &[LineSegment]) -> Vec<LineSegment> {
        segments
            .iter()
            .copied()
            .filter(|s| s.color == LineColor::DATA)
            .collect()
    }
    #[test]
    fn empty_history_draws_axes_only() {
        let config = SimulationConfig::default();
        let segments = render(&[], &config);
        assert_eq!(segments.len(), 3);
        assert!(data_segments(&segments).is_empty());
        assert_eq!(segments[0], LineSegment::new(0.0, 0.0, 0.0, 300.0, LineColor::AXIS));
        assert_eq!(segments[1], LineSegment::new(0.0, 300.0, 500.0, 300.0, LineColor::AXIS));
        assert!(segments.iter().all(|s| s.x1.is_finite() && s.x2.is_finite()));
    }
    #[test]
    fn single_sample_has_no_polyline() {
        let config = SimulationConfig::default();
        let segments = render(&history(&[750.0]), &config);
        assert_eq!(segments.len(), 3);
    }
    #[test]
    fn n_samples_give_n_minus_one_data_segments() {
        let config = SimulationConfig::default();
        let values = [700.0, 725.0, 800.0, 750.0, 760.0];
        let segments = render(&history(&values), &config);
        let data = data_segments(&segments);
        assert_eq!(segments.len(), 3 + values.len() - 1);
        assert_eq!(data.len(), values.len() - 1);
        let scale_y = 300.0 / 100.0;
        for (i, seg) in data.iter().enumerate() {
            assert!((seg.y1 - (300.0 - (values[i] - 700.0) * scale_y)).abs() < 1e-9);
            assert!((seg.y2 - (300.0 - (values[i + 1] - 700.0) * scale_y)).abs() < 1e-9);
            assert!((seg.x1 - i as f64 * 100.0).abs() < 1e-9);
            assert!((seg.x2 - (i + 1) as f64 * 100.0).abs() < 1e-9);
        }
    }
    #[test]
    fn higher_values_are_drawn_higher() {
        let config = SimulationConfig::default();
        let segments = render(&history(&[700.0, 800.0]), &config);
        let data = data_segments(&segments);
        assert_eq!(data[0].y1, 300.0);
        assert_eq!(data[0].y2, 0.0);
        assert_ne!(LineColor::DATA, LineColor::AXIS);
    }
    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "empty value range")]
    fn empty_value_range_is_rejected_in_debug() {
        let config = SimulationConfig {
            max_value: 700.0,
            ..SimulationConfig::default()
        };
        render(&history(&[700.0, 700.0]), &config);
    }
    #[test]
    fn marker_tracks_sample_count() {
        let config = SimulationConfig::default();
        let full: Vec<f64> = (0..500).map(|i| 700.0 + (i % 100) as f64).collect();
        let segments = render(&history(&full), &config);
        assert_eq!(segments[2].x1, 100.0);
        assert_eq!(segments[2].x2, 100.0);
        let segments = render(&history(&full[..250]), &config);
        assert_eq!(segments[2].x1, 200.0);
    }
}
