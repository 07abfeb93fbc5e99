use thiserror::Error;
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("value range is empty or not finite: min {min}, max {max}")]
    InvalidRange { min: f64, max: f64 },
    #[error("step range must be finite and non-negative, got {0}")]
    InvalidStep(f64),
    #[error("canvas sides must be between 1 and 8192 pixels, got {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
    #[error("tick interval must be greater than zero")]
    InvalidInterval,
    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("failed to render chart snapshot: {0}")]
    Render(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for WidgetError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        WidgetError::Render(format!("{value:?}"))
    }
}
impl From<image::ImageError> for WidgetError {
    fn from(value: image::ImageError) -> Self {
        WidgetError::Render(value.to_string())
    }
}
