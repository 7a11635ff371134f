use log::debug;
use crate::survey::grid::SignalGrid;
use crate::survey::source::{ReadingBatch, SampleSource};
use crate::survey::store::SampleStore;
use crate::survey::MapperError;
/// Pulls readings from a source into a store and keeps the heatmap current.
pub struct HeatmapPipeline<S: SampleSource> {
    source: S,
    store: SampleStore,
    grid: Option<SignalGrid>,
}
impl<S: SampleSource> HeatmapPipeline<S> {
    pub fn new(source: S, store: SampleStore) -> Self {
        Self {
            source,
            store,
            grid: None,
        }
    }
    pub fn pump_once(&mut self) -> Result<Option<&SignalGrid>, MapperError> {
        let Some(batch) = self.source.next_batch()? else {
            return Ok(None);
        };
        let grid = self.push_and_rebuild(batch)?;
        Ok(Some(grid))
    }
    /// Drain the source. Returns the number of batches consumed.
    pub fn pump_all(&mut self) -> Result<usize, MapperError> {
        let mut batches = 0;
        while self.pump_once()?.is_some() {
            batches += 1;
        }
        debug!("pipeline drained after {batches} batches");
        Ok(batches)
    }
    pub fn push_and_rebuild(&mut self, batch: ReadingBatch) -> Result<&SignalGrid, MapperError> {
        batch.validate()?;
        self.store.add_readings(batch.readings)?;
        Ok(self.refresh())
    }
    /// Rebuild from the current store contents.
    pub fn refresh(&mut self) -> &SignalGrid {
        self.grid.insert(self.store.build_grid())
    }
    pub fn latest_grid(&self) -> Result<&SignalGrid, MapperError> {
        self.grid.as_ref().ok_or(MapperError::GridUninitialized)
    }
    pub fn store(&self) -> &SampleStore {
        &self.store
    }
    /// Mutating the store drops the cached grid until the next refresh.
    pub fn store_mut(&mut self) -> &mut SampleStore {
        self.grid = None;
        &mut self.store
    }
    pub fn into_store(self) -> SampleStore {
        self.store
    }
}
