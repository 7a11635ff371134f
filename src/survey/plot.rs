use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::*;
use serde::Deserialize;
use crate::survey::error::MapperError;
use crate::survey::grid::SignalGrid;
use crate::survey::Sample;
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub enum SignalScale {
    /// Colour ramp spans the grid's own min and max.
    Auto,
    /// Colour ramp spans a fixed dBm range.
    Fixed { min_dbm: f32, max_dbm: f32 },
}
impl SignalScale {
    fn bounds(self, grid: &SignalGrid) -> (f32, f32) {
        match self {
            SignalScale::Auto => {
                let stats = grid.stats();
                if (stats.max - stats.min).abs() < f32::EPSILON {
                    // Avoid a zero-width ramp.
                    (stats.min - 1.0, stats.max + 1.0)
                } else {
                    (stats.min, stats.max)
                }
            }
            SignalScale::Fixed { min_dbm, max_dbm } => (min_dbm, max_dbm),
        }
    }
}
impl Default for SignalScale {
    fn default() -> Self {
        SignalScale::Fixed {
            min_dbm: -100.0,
            max_dbm: 0.0,
        }
    }
}
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct HeatmapStyle {
    /// Pixels per grid cell.
    pub cell_px: u32,
    pub margin_px: u32,
    pub scale: SignalScale,
    pub mark_samples: bool,
    #[serde(skip)]
    pub background: RGBColor,
    #[serde(skip)]
    pub marker: RGBColor,
}
impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            cell_px: 40,
            margin_px: 10,
            scale: SignalScale::default(),
            mark_samples: true,
            background: RGBColor(10, 10, 10),
            marker: WHITE,
        }
    }
}
/// Red (weak) through yellow to green (strong).
pub fn signal_color(dbm: f32, min_dbm: f32, max_dbm: f32) -> RGBColor {
    let span = max_dbm - min_dbm;
    let t = if span.abs() < f32::EPSILON || !dbm.is_finite() {
        0.0
    } else {
        ((dbm - min_dbm) / span).clamp(0.0, 1.0)
    };
    let (r, g) = if t < 0.5 {
        (255.0, 255.0 * t * 2.0)
    } else {
        (255.0 * (1.0 - t) * 2.0, 255.0)
    };
    RGBColor(r.round() as u8, g.round() as u8, 0)
}
pub fn render_heatmap_png(
    grid: &SignalGrid,
    samples: &[Sample],
    style: HeatmapStyle,
) -> Result<Vec<u8>, MapperError> {
    let n = grid.size();
    if n == 0 {
        return Err(MapperError::Plot("grid has no cells".into()));
    }
    let side = image_side(n, &style)?;
    let mut buffer = vec![0u8; side as usize * side as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (side, side)).into_drawing_area();
        root.fill(&style.background)?;
        let extent = n as f64;
        let mut chart = ChartBuilder::on(&root)
            .margin(style.margin_px)
            .build_cartesian_2d(0f64..extent, 0f64..extent)?;
        let (min_dbm, max_dbm) = style.scale.bounds(grid);
        // Row 0 sits at the top of the image.
        chart.draw_series(grid.iter_cells().map(|(x, y, value)| {
            let top = extent - y as f64;
            Rectangle::new(
                [(x as f64, top), (x as f64 + 1.0, top - 1.0)],
                signal_color(value, min_dbm, max_dbm).filled(),
            )
        }))?;
        if style.mark_samples {
            let radius = (style.cell_px / 6).max(2);
            let marker = style.marker;
            chart.draw_series(
                samples
                    .iter()
                    .filter(|s| s.x >= 0 && s.y >= 0 && (s.x as usize) < n && (s.y as usize) < n)
                    .map(|s| {
                        let centre = (s.x as f64 + 0.5, extent - s.y as f64 - 0.5);
                        Circle::new(centre, radius, marker.stroke_width(2))
                    }),
            )?;
        }
        root.present()?;
    }
    encode_png(&buffer, side, side)
}
/// Largest image edge the renderer will allocate.
pub const MAX_IMAGE_SIDE: u32 = 8192;
fn image_side(cells: usize, style: &HeatmapStyle) -> Result<u32, MapperError> {
    let too_large = || MapperError::Plot("heatmap too large".into());
    let cells = u32::try_from(cells).map_err(|_| too_large())?;
    let side = cells
        .checked_mul(style.cell_px.max(1))
        .and_then(|px| style.margin_px.checked_mul(2)?.checked_add(px))
        .ok_or_else(too_large)?;
    if side > MAX_IMAGE_SIDE {
        return Err(too_large());
    }
    Ok(side)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, MapperError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| MapperError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
