use std::io::{Read, Write};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use crate::survey::grid::GridSize;
use crate::survey::sample::now_millis;
use crate::survey::store::SampleStore;
use crate::survey::{MapperError, Sample};
/// Version number written into survey files (increment when the format changes).
pub const SURVEY_VERSION: u32 = 1;
/// On-disk survey: `{ timestamp, gridSize, mapPoints, version }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyFile {
    /// Export time, milliseconds since the Unix epoch.
    pub timestamp: u64,
    pub grid_size: GridSize,
    pub map_points: Vec<Sample>,
    pub version: u32,
}
impl SurveyFile {
    pub fn from_store(store: &SampleStore) -> Self {
        Self {
            timestamp: now_millis(),
            grid_size: store.grid_size(),
            map_points: store.samples().to_vec(),
            version: SURVEY_VERSION,
        }
    }
    pub fn to_json_pretty(&self) -> Result<String, MapperError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), MapperError> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
    pub fn from_json(json: &str) -> Result<Self, MapperError> {
        let file: SurveyFile = serde_json::from_str(json)?;
        file.validate()?;
        Ok(file)
    }
    pub fn read_from<R: Read>(reader: R) -> Result<Self, MapperError> {
        let file: SurveyFile = serde_json::from_reader(reader)?;
        file.validate()?;
        Ok(file)
    }
    fn validate(&self) -> Result<(), MapperError> {
        if self.version != SURVEY_VERSION {
            return Err(MapperError::UnsupportedVersion {
                expected: SURVEY_VERSION,
                actual: self.version,
            });
        }
        if let Some(bad) = self
            .map_points
            .iter()
            .find(|p| !p.signal_strength.is_finite())
        {
            return Err(MapperError::NonFiniteStrength(bad.signal_strength));
        }
        Ok(())
    }
}
impl SampleStore {
    pub fn export(&self) -> SurveyFile {
        let file = SurveyFile::from_store(self);
        info!(
            "exported {} samples on a {n}x{n} grid",
            file.map_points.len(),
            n = file.grid_size.get()
        );
        file
    }
    /// Replace samples and grid size with the survey's. Ids are reissued.
    /// The file is validated first; on error the store is untouched.
    pub fn import(&mut self, file: &SurveyFile) -> Result<(), MapperError> {
        file.validate()?;
        self.replace(
            file.grid_size,
            file.map_points.iter().map(|p| (p.reading(), p.timestamp)),
        );
        info!(
            "imported {} samples on a {n}x{n} grid",
            self.len(),
            n = self.grid_size().get()
        );
        Ok(())
    }
    /// Parse then import. On any error the store is left untouched.
    pub fn import_json(&mut self, json: &str) -> Result<(), MapperError> {
        let file = SurveyFile::from_json(json).map_err(|err| {
            warn!("rejected survey import: {err}");
            err
        })?;
        self.import(&file)
    }
}
