use ndarray::Array2;
use serde::{Deserialize, Serialize};
use crate::survey::quality::SignalQuality;
use crate::survey::MapperError;
/// Side length of the square survey grid, in `1..=GridSize::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);
impl GridSize {
    /// Lower bound of the size slider.
    pub const MIN_SLIDER: usize = 5;
    /// Upper bound of the size slider.
    pub const MAX_SLIDER: usize = 20;
    /// Largest side accepted from files and config.
    pub const MAX: usize = 256;
    pub fn new(size: usize) -> Result<Self, MapperError> {
        if size == 0 || size > Self::MAX {
            return Err(MapperError::InvalidGridSize {
                actual: size,
                max: Self::MAX,
            });
        }
        Ok(Self(size))
    }
    /// Clamp an untrusted slider value into `[MIN_SLIDER, MAX_SLIDER]`.
    pub fn from_slider(value: i64) -> Self {
        let clamped = value.clamp(Self::MIN_SLIDER as i64, Self::MAX_SLIDER as i64);
        Self(clamped as usize)
    }
    pub fn get(self) -> usize {
        self.0
    }
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
    pub fn contains(self, x: i32, y: i32) -> bool {
        let n = self.0 as i64;
        (0..n).contains(&i64::from(x)) && (0..n).contains(&i64::from(y))
    }
}
impl Default for GridSize {
    fn default() -> Self {
        // The mapper opens on a 10 x 10 floor plan.
        GridSize(10)
    }
}
impl TryFrom<usize> for GridSize {
    type Error = MapperError;
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        GridSize::new(value)
    }
}
impl From<GridSize> for usize {
    fn from(value: GridSize) -> Self {
        value.0
    }
}
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}
/// Dense interpolated estimate, indexed `[y, x]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SignalGrid {
    cells: Array2<f32>,
}
impl SignalGrid {
    pub(crate) fn from_fn(size: GridSize, mut f: impl FnMut(i32, i32) -> f32) -> Self {
        let n = size.get();
        let cells = Array2::from_shape_fn((n, n), |(row, col)| f(col as i32, row as i32));
        Self { cells }
    }
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        self.cells.get((y, x)).copied()
    }
    pub fn cells(&self) -> &Array2<f32> {
        &self.cells
    }
    /// Row-major nested copy, the shape a renderer consumes.
    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }
    /// `(x, y, value)` for every cell in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), value)| (col, row, *value))
    }
    pub fn stats(&self) -> GridStats {
        let min = self.cells.iter().copied().fold(f32::INFINITY, f32::min);
        let max = self.cells.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let mean = self.cells.mean().unwrap_or(0.0);
        GridStats { min, max, mean }
    }
    /// Fraction of cells at or above `threshold_dbm`.
    pub fn coverage(&self, threshold_dbm: f32) -> f32 {
        let covered = self.cells.iter().filter(|v| **v >= threshold_dbm).count();
        covered as f32 / self.cells.len() as f32
    }
    /// Cell counts per band, ordered Excellent, Good, Fair, Poor.
    pub fn quality_histogram(&self) -> [(SignalQuality, usize); 4] {
        let mut histogram = SignalQuality::ALL.map(|q| (q, 0usize));
        for value in self.cells.iter() {
            let quality = SignalQuality::from_dbm(*value);
            if let Some(slot) = histogram.iter_mut().find(|(q, _)| *q == quality) {
                slot.1 += 1;
            }
        }
        histogram
    }
}
