use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;
use crate::drivers::{LineSegment, SimulationConfig, WidgetError, LINE_THICKNESS};
/// Rasterizes a chart display list onto a white canvas and returns PNG bytes.
///
/// Segments that lie entirely to the right of the canvas (the measurement
/// marker while fewer than 100 samples are shown) are skipped.
pub fn render_chart_png(
    segments: &[LineSegment],
    config: &SimulationConfig,
) -> Result<Vec<u8>, WidgetError> {
    config.validate()?;
    let (width, height) = (config.canvas_width, config.canvas_height);
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or(WidgetError::InvalidCanvas { width, height })?;
    let mut buffer = vec![0u8; len];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE)?;
        for segment in segments.iter().filter(|s| is_visible(s, width)) {
            let color = RGBColor(segment.color.0, segment.color.1, segment.color.2);
            root.draw(&PathElement::new(
                vec![
                    (segment.x1.round() as i32, segment.y1.round() as i32),
                    (segment.x2.round() as i32, segment.y2.round() as i32),
                ],
                color.stroke_width(LINE_THICKNESS as u32),
            ))?;
        }
        root.present()?;
    }
    encode_png(&buffer, width, height)
}
fn is_visible(segment: &LineSegment, width: u32) -> bool {
    let coords = [segment.x1, segment.y1, segment.x2, segment.y2];
    coords.iter().all(|c| c.is_finite()) && segment.x1.min(segment.x2) <= width as f64
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, WidgetError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| WidgetError::Render("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
