use thiserror::Error;
#[derive(Debug, Error)]
pub enum MapperError {
    #[error("grid size must be between 1 and {max}, got {actual}")]
    InvalidGridSize { actual: usize, max: usize },
    #[error("signal strength must be finite, got {0}")]
    NonFiniteStrength(f32),
    #[error("unsupported survey file version: expected {expected}, got {actual}")]
    UnsupportedVersion { expected: u32, actual: u32 },
    #[error("grid not built yet; pump at least one batch first")]
    GridUninitialized,
    #[error("malformed survey file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("survey file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render heatmap: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for MapperError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        MapperError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for MapperError {
    fn from(value: image::ImageError) -> Self {
        MapperError::Plot(value.to_string())
    }
}
