use crate::survey::grid::{GridSize, SignalGrid};
use crate::survey::Sample;
/// Estimate reported when no samples exist.
pub const NO_SIGNAL_DBM: f32 = -100.0;
/// Inverse-square distance weighted estimate at `(x, y)`.
///
/// A sample sitting exactly on `(x, y)` is returned as-is, without blending.
/// When several samples share that coordinate the earliest one wins.
pub fn interpolate(x: i32, y: i32, samples: &[Sample]) -> f32 {
    if samples.is_empty() {
        return NO_SIGNAL_DBM;
    }
    if let Some(exact) = samples.iter().find(|s| s.at(x, y)) {
        return exact.signal_strength;
    }
    let mut weighted_sum = 0.0f64;
    let mut weight_total = 0.0f64;
    for sample in samples {
        // weight = 1 / distance^2
        let weight = 1.0 / sample.distance_sq(x, y);
        weighted_sum += f64::from(sample.signal_strength) * weight;
        weight_total += weight;
    }
    (weighted_sum / weight_total) as f32
}
/// Interpolate every cell of a `size x size` grid.
pub fn build_grid(size: GridSize, samples: &[Sample]) -> SignalGrid {
    SignalGrid::from_fn(size, |x, y| interpolate(x, y, samples))
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::SampleId;
    fn sample(id: u64, x: i32, y: i32, signal_strength: f32) -> Sample {
        Sample {
            id: SampleId(id),
            x,
            y,
            signal_strength,
            timestamp: 0,
        }
    }
    #[test]
    fn empty_samples_report_no_signal() {
        for (x, y) in [(0, 0), (4, 9), (-3, 2)] {
            assert_eq!(interpolate(x, y, &[]), NO_SIGNAL_DBM);
        }
    }
    #[test]
    fn exact_coordinate_returns_sample_value() {
        let samples = vec![
            sample(0, 1, 1, -42.5),
            sample(1, 2, 1, -90.0),
            sample(2, 0, 0, -30.0),
        ];
        for s in &samples {
            assert_eq!(interpolate(s.x, s.y, &samples), s.signal_strength);
        }
    }
    #[test]
    fn duplicate_coordinates_prefer_earliest_sample() {
        let samples = vec![sample(0, 2, 2, -55.0), sample(1, 2, 2, -75.0)];
        assert_eq!(interpolate(2, 2, &samples), -55.0);
        // Elsewhere both duplicates take part in the average.
        assert!((interpolate(0, 2, &samples) - -65.0).abs() < 1e-4);
    }
    #[test]
    fn single_sample_dominates_every_cell() {
        let samples = vec![sample(0, 0, 0, -40.0)];
        let grid = build_grid(GridSize::new(3).unwrap(), &samples);
        for (_, _, value) in grid.iter_cells() {
            assert_eq!(value, -40.0);
        }
        assert_eq!(interpolate(17, -4, &samples), -40.0);
    }
    #[test]
    fn equidistant_samples_average() {
        let samples = vec![sample(0, 0, 0, -40.0), sample(1, 2, 0, -80.0)];
        assert!((interpolate(1, 0, &samples) - -60.0).abs() < 1e-4);
    }
    #[test]
    fn equal_strength_equidistant_samples_reproduce_strength() {
        let samples = vec![
            sample(0, 0, 0, -67.0),
            sample(1, 4, 0, -67.0),
            sample(2, 2, 2, -67.0),
            sample(3, 2, -2, -67.0),
        ];
        assert!((interpolate(2, 0, &samples) - -67.0).abs() < 1e-4);
    }
    #[test]
    fn nearer_samples_dominate() {
        let samples = vec![sample(0, 0, 0, -30.0), sample(1, 9, 0, -90.0)];
        let near_strong = interpolate(1, 0, &samples);
        let near_weak = interpolate(8, 0, &samples);
        assert!(near_strong > -40.0);
        assert!(near_weak < -80.0);
        // Moving towards the strong sample never lowers the estimate.
        let mut previous = f32::NEG_INFINITY;
        for x in (1..9).rev() {
            let value = interpolate(x, 0, &samples);
            assert!(value >= previous);
            previous = value;
        }
    }
    #[test]
    fn grid_has_requested_shape_and_range() {
        let samples = vec![
            sample(0, 0, 0, -35.0),
            sample(1, 7, 3, -88.0),
            sample(2, 4, 6, -61.0),
        ];
        let size = GridSize::new(8).unwrap();
        let grid = build_grid(size, &samples);
        assert_eq!(grid.cells().dim(), (8, 8));
        for (_, _, value) in grid.iter_cells() {
            assert!((-100.0..=0.0).contains(&value));
        }
        assert_eq!(grid.get(7, 3), Some(-88.0));
        assert_eq!(build_grid(size, &samples), grid);
    }
}
