use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Deserialize;
use crate::survey::grid::GridSize;
use crate::survey::interpolate::NO_SIGNAL_DBM;
use crate::survey::source::{ReadingBatch, SampleSource};
use crate::survey::{MapperError, Reading};
/// Parameters for generated surveys.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    pub sample_count: usize,
    pub batch_size: usize,
    pub seed: u64,
    /// Received power one cell away from the access point.
    pub tx_power_dbm: f32,
    pub path_loss_exponent: f32,
    /// Uniform noise half-width.
    pub noise_db: f32,
    /// Random cell when unset.
    pub access_point: Option<(i32, i32)>,
}
impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            sample_count: 20,
            batch_size: 5,
            seed: 42,
            tx_power_dbm: -30.0,
            // Indoor office with walls.
            path_loss_exponent: 3.0,
            noise_db: 4.0,
            access_point: None,
        }
    }
}
/// Seeded generator that walks the grid and "measures" a single access point
/// using a log-distance path loss model.
pub struct SyntheticSurvey {
    config: SyntheticConfig,
    grid_size: GridSize,
    access_point: (i32, i32),
    remaining: usize,
    rng: StdRng,
}
impl SyntheticSurvey {
    pub fn new(config: SyntheticConfig, grid_size: GridSize) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let n = grid_size.get() as i32;
        let access_point = config
            .access_point
            .unwrap_or_else(|| (rng.gen_range(0..n), rng.gen_range(0..n)));
        Self {
            remaining: config.sample_count,
            config,
            grid_size,
            access_point,
            rng,
        }
    }
    pub fn access_point(&self) -> (i32, i32) {
        self.access_point
    }
    /// Noise-free expected strength at `(x, y)`, clamped to [-100, 0].
    pub fn expected_dbm(&self, x: i32, y: i32) -> f32 {
        let dx = (x - self.access_point.0) as f32;
        let dy = (y - self.access_point.1) as f32;
        let distance = (dx * dx + dy * dy).sqrt().max(1.0);
        let loss = 10.0 * self.config.path_loss_exponent * distance.log10();
        (self.config.tx_power_dbm - loss).clamp(NO_SIGNAL_DBM, 0.0)
    }
    fn measure(&mut self) -> Reading {
        let n = self.grid_size.get() as i32;
        let x = self.rng.gen_range(0..n);
        let y = self.rng.gen_range(0..n);
        let noise = if self.config.noise_db > 0.0 {
            self.rng
                .gen_range(-self.config.noise_db..self.config.noise_db)
        } else {
            0.0
        };
        let strength = (self.expected_dbm(x, y) + noise).clamp(NO_SIGNAL_DBM, 0.0);
        // Whole dBm, the way a survey app reports RSSI.
        Reading::new(x, y, strength.round())
    }
    /// Generate every remaining reading at once.
    pub fn take_all(&mut self) -> Vec<Reading> {
        let count = std::mem::take(&mut self.remaining);
        (0..count).map(|_| self.measure()).collect()
    }
}
impl SampleSource for SyntheticSurvey {
    fn next_batch(&mut self) -> Result<Option<ReadingBatch>, MapperError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        let take = self.config.batch_size.max(1).min(self.remaining);
        self.remaining -= take;
        let readings = (0..take).map(|_| self.measure()).collect();
        Ok(Some(ReadingBatch::new(readings)))
    }
}
