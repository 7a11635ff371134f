use log::{debug, warn};
use crate::survey::grid::{GridSize, SignalGrid};
use crate::survey::interpolate::build_grid;
use crate::survey::sample::now_millis;
use crate::survey::{MapperError, Reading, Sample, SampleId};
/// Owns the survey samples and the grid size used to interpolate them.
#[derive(Clone, Debug, Default)]
pub struct SampleStore {
    samples: Vec<Sample>,
    grid_size: GridSize,
    next_id: u64,
}
impl SampleStore {
    pub fn new(grid_size: GridSize) -> Self {
        Self {
            samples: Vec::new(),
            grid_size,
            next_id: 0,
        }
    }
    /// Appends a sample. Coordinates are not checked against the grid,
    /// but the strength must be finite so the store can always be exported.
    pub fn add_sample(
        &mut self,
        x: i32,
        y: i32,
        signal_strength: f32,
    ) -> Result<SampleId, MapperError> {
        check_finite(signal_strength)?;
        Ok(self.push(x, y, signal_strength, now_millis()))
    }
    /// All-or-nothing: one non-finite strength rejects the whole set.
    pub fn add_readings(
        &mut self,
        readings: impl IntoIterator<Item = Reading>,
    ) -> Result<Vec<SampleId>, MapperError> {
        let readings: Vec<Reading> = readings.into_iter().collect();
        for reading in &readings {
            check_finite(reading.signal_strength)?;
        }
        let timestamp = now_millis();
        let ids: Vec<SampleId> = readings
            .into_iter()
            .map(|r| self.push(r.x, r.y, r.signal_strength, timestamp))
            .collect();
        debug!("added {} readings, store holds {}", ids.len(), self.samples.len());
        Ok(ids)
    }
    /// Removes by identity; `None` if no such sample.
    pub fn remove_sample(&mut self, id: SampleId) -> Option<Sample> {
        let index = self.samples.iter().position(|s| s.id == id)?;
        let removed = self.samples.remove(index);
        debug!("removed sample {id}");
        Some(removed)
    }
    /// Drops every sample. Ids keep counting up.
    pub fn clear(&mut self) {
        debug!("cleared {} samples", self.samples.len());
        self.samples.clear();
    }
    /// Samples outside the new bounds are kept and still feed interpolation.
    pub fn set_grid_size(&mut self, grid_size: GridSize) {
        self.grid_size = grid_size;
        let outside = self.out_of_bounds().count();
        if outside > 0 {
            warn!(
                "{outside} samples lie outside the {n}x{n} grid and still influence it",
                n = grid_size.get()
            );
        }
    }
    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
    pub fn get(&self, id: SampleId) -> Option<&Sample> {
        self.samples.iter().find(|s| s.id == id)
    }
    pub fn samples_at(&self, x: i32, y: i32) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter().filter(move |s| s.at(x, y))
    }
    pub fn out_of_bounds(&self) -> impl Iterator<Item = &Sample> + '_ {
        let size = self.grid_size;
        self.samples.iter().filter(move |s| !size.contains(s.x, s.y))
    }
    pub fn len(&self) -> usize {
        self.samples.len()
    }
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
    pub fn build_grid(&self) -> SignalGrid {
        debug!(
            "interpolating {} samples over {n}x{n} grid",
            self.samples.len(),
            n = self.grid_size.get()
        );
        build_grid(self.grid_size, &self.samples)
    }
    /// Swap in a whole survey at once. Callers validate beforehand.
    pub(crate) fn replace(
        &mut self,
        grid_size: GridSize,
        samples: impl IntoIterator<Item = (Reading, u64)>,
    ) {
        self.samples.clear();
        self.grid_size = grid_size;
        for (reading, timestamp) in samples {
            self.push(reading.x, reading.y, reading.signal_strength, timestamp);
        }
    }
    fn push(&mut self, x: i32, y: i32, signal_strength: f32, timestamp: u64) -> SampleId {
        let id = SampleId(self.next_id);
        self.next_id += 1;
        self.samples.push(Sample {
            id,
            x,
            y,
            signal_strength,
            timestamp,
        });
        id
    }
}
fn check_finite(signal_strength: f32) -> Result<(), MapperError> {
    if signal_strength.is_finite() {
        Ok(())
    } else {
        Err(MapperError::NonFiniteStrength(signal_strength))
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::interpolate::NO_SIGNAL_DBM;
    #[test]
    fn add_assigns_increasing_ids() {
        let mut store = SampleStore::default();
        let a = store.add_sample(0, 0, -40.0).unwrap();
        let b = store.add_sample(0, 0, -45.0).unwrap();
        assert!(b > a);
        assert_eq!(store.len(), 2);
        assert_eq!(store.samples_at(0, 0).count(), 2);
        assert_eq!(store.get(b).map(|s| s.signal_strength), Some(-45.0));
    }
    #[test]
    fn remove_missing_sample_is_noop() {
        let mut store = SampleStore::default();
        let id = store.add_sample(1, 2, -70.0).unwrap();
        assert!(store.remove_sample(SampleId(999)).is_none());
        assert_eq!(store.len(), 1);
        let removed = store.remove_sample(id).unwrap();
        assert_eq!((removed.x, removed.y), (1, 2));
        assert!(store.is_empty());
        assert!(store.remove_sample(id).is_none());
    }
    #[test]
    fn clear_keeps_grid_size_and_never_reuses_ids() {
        let mut store = SampleStore::new(GridSize::new(6).unwrap());
        let first = store.add_sample(0, 0, -40.0).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.grid_size().get(), 6);
        let second = store.add_sample(0, 0, -40.0).unwrap();
        assert_ne!(first, second);
        let grid = SampleStore::new(GridSize::new(6).unwrap()).build_grid();
        assert!(grid.iter_cells().all(|(_, _, v)| v == NO_SIGNAL_DBM));
    }
    #[test]
    fn bulk_readings_share_a_timestamp() {
        let mut store = SampleStore::default();
        let ids = store.add_readings(vec![
            Reading::new(0, 0, -40.0),
            Reading::new(3, 3, -80.0),
        ])
        .unwrap();
        assert_eq!(ids.len(), 2);
        let stamps: Vec<u64> = store.samples().iter().map(|s| s.timestamp).collect();
        assert_eq!(stamps[0], stamps[1]);
    }
    #[test]
    fn shrinking_grid_keeps_outside_samples() {
        let mut store = SampleStore::new(GridSize::new(10).unwrap());
        store.add_sample(0, 0, -40.0).unwrap();
        store.add_sample(8, 0, -90.0).unwrap();
        store.set_grid_size(GridSize::new(5).unwrap());
        assert_eq!(store.len(), 2);
        assert_eq!(store.out_of_bounds().count(), 1);
        let grid = store.build_grid();
        assert_eq!(grid.size(), 5);
        // (4, 0) is 4 away from the strong sample and 4 away from the weak one.
        assert!((grid.get(4, 0).unwrap() - -65.0).abs() < 1e-4);
    }
    #[test]
    fn negative_coordinates_are_accepted() {
        let mut store = SampleStore::new(GridSize::new(3).unwrap());
        store.add_sample(-1, -1, -50.0).unwrap();
        assert_eq!(store.out_of_bounds().count(), 1);
        let grid = store.build_grid();
        assert!(grid.iter_cells().all(|(_, _, v)| v == -50.0));
    }
    #[test]
    fn non_finite_strengths_are_rejected() {
        let mut store = SampleStore::default();
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(matches!(
                store.add_sample(0, 0, bad),
                Err(MapperError::NonFiniteStrength(_))
            ));
        }
        assert!(store
            .add_readings(vec![Reading::new(0, 0, -40.0), Reading::new(1, 1, f32::NAN)])
            .is_err());
        assert!(store.is_empty());
        // Whatever the store accepts, its own export can be imported again.
        store.add_sample(2, 2, -120.0).unwrap();
        let json = store.export().to_json_pretty().unwrap();
        let mut restored = SampleStore::default();
        restored.import_json(&json).unwrap();
        assert_eq!(restored.samples()[0].signal_strength, -120.0);
    }
}
