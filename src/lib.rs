//! WiFi signal survey model: sample store, inverse-square distance
//! interpolation onto a square grid, survey files and heatmap export.
pub mod config;
pub mod survey;
pub use config::MapperConfig;
pub use survey::*;
