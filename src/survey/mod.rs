// src/survey/mod.rs
pub mod error;
pub mod export;
pub mod grid;
pub mod interpolate;
pub mod pipeline;
pub mod plot;
pub mod quality;
pub mod sample;
pub mod source;
pub mod store;
pub mod synthetic;
pub use error::MapperError;
pub use export::{SurveyFile, SURVEY_VERSION};
pub use grid::{GridSize, GridStats, SignalGrid};
pub use interpolate::{build_grid, interpolate, NO_SIGNAL_DBM};
pub use pipeline::HeatmapPipeline;
pub use plot::{render_heatmap_png, signal_color, HeatmapStyle, SignalScale};
pub use quality::SignalQuality;
pub use sample::{Reading, Sample, SampleId};
pub use source::{ManualSource, ReadingBatch, SampleSource};
pub use store::SampleStore;
pub use synthetic::{SyntheticConfig, SyntheticSurvey};
