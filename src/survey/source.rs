use std::collections::VecDeque;
use std::time::SystemTime;
use crate::survey::{MapperError, Reading};
/// Readings collected together, e.g. one walk through the floor plan.
#[derive(Clone, Debug)]
pub struct ReadingBatch {
    pub collected_at: SystemTime,
    pub readings: Vec<Reading>,
}
impl ReadingBatch {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self {
            collected_at: SystemTime::now(),
            readings,
        }
    }
    /// Range is not checked, only that every strength is a real number.
    pub fn validate(&self) -> Result<(), MapperError> {
        match self
            .readings
            .iter()
            .find(|r| !r.signal_strength.is_finite())
        {
            Some(bad) => Err(MapperError::NonFiniteStrength(bad.signal_strength)),
            None => Ok(()),
        }
    }
    pub fn len(&self) -> usize {
        self.readings.len()
    }
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}
/// Something that can yield reading batches on demand.
pub trait SampleSource {
    fn next_batch(&mut self) -> Result<Option<ReadingBatch>, MapperError>;
}
/// In-memory source useful for tests and deterministic playback.
pub struct ManualSource {
    queue: VecDeque<ReadingBatch>,
}
impl ManualSource {
    pub fn new(batches: impl IntoIterator<Item = ReadingBatch>) -> Self {
        Self {
            queue: batches.into_iter().collect(),
        }
    }
    pub fn push(&mut self, batch: ReadingBatch) {
        self.queue.push_back(batch);
    }
}
impl SampleSource for ManualSource {
    fn next_batch(&mut self) -> Result<Option<ReadingBatch>, MapperError> {
        Ok(self.queue.pop_front())
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn manual_source_is_fifo() {
        let mut source = ManualSource::new(vec![
            ReadingBatch::new(vec![Reading::new(0, 0, -40.0)]),
            ReadingBatch::new(vec![Reading::new(1, 1, -50.0), Reading::new(2, 2, -60.0)]),
        ]);
        assert_eq!(source.next_batch().unwrap().unwrap().len(), 1);
        assert_eq!(source.next_batch().unwrap().unwrap().len(), 2);
        assert!(source.next_batch().unwrap().is_none());
    }
    #[test]
    fn validate_rejects_non_finite_strengths() {
        let ok = ReadingBatch::new(vec![Reading::new(0, 0, -140.0)]);
        assert!(ok.validate().is_ok());
        let bad = ReadingBatch::new(vec![Reading::new(0, 0, -40.0), Reading::new(1, 0, f32::NAN)]);
        assert!(matches!(
            bad.validate(),
            Err(MapperError::NonFiniteStrength(_))
        ));
    }
}
