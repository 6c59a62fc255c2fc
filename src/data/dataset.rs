use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use crate::config::FieldConvention;
use crate::data::normalize::{Observation, RawRow, normalize_row};
use crate::foundation::error::{PopsceneError, PopsceneResult};

/// Row accounting for a single load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LoadReport {
    /// Data rows read, excluding the header.
    pub rows: usize,
    /// Rows dropped because their `Year` was not an integer.
    pub skipped: usize,
    /// Kept rows whose selected population cell was the invalid marker.
    pub invalid_population: usize,
}

/// The normalized source table, loaded once and shared by every scene build.
///
/// Cloning shares the underlying observations.
#[derive(Clone, Debug)]
pub struct Dataset {
    observations: Arc<[Observation]>,
    report: LoadReport,
}

impl Dataset {
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        let invalid_population = observations
            .iter()
            .filter(|o| !o.population.is_valid())
            .count();
        let report = LoadReport {
            rows: observations.len(),
            skipped: 0,
            invalid_population,
        };
        Self {
            observations: observations.into(),
            report,
        }
    }

    /// Read and normalize a CSV table with a header row.
    #[tracing::instrument(skip(r))]
    pub fn from_reader<R: std::io::Read>(r: R, fields: &FieldConvention) -> PopsceneResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(r);
        let headers = rdr
            .headers()
            .map_err(|e| PopsceneError::load(format!("read CSV header: {e}")))?
            .clone();
        let columns = ColumnIndex::resolve(&headers, fields)?;

        let mut observations = Vec::new();
        let mut report = LoadReport::default();
        for (i, record) in rdr.records().enumerate() {
            let record =
                record.map_err(|e| PopsceneError::load(format!("read CSV row {}: {e}", i + 1)))?;
            report.rows += 1;

            let raw = columns.view(&record);
            match normalize_row(&raw) {
                Ok(obs) => {
                    if !obs.population.is_valid() {
                        report.invalid_population += 1;
                    }
                    observations.push(obs);
                }
                Err(e) => {
                    tracing::warn!(row = i + 1, entity = raw.entity, "skipping row: {e}");
                    report.skipped += 1;
                }
            }
        }

        if observations.is_empty() {
            tracing::warn!("source table produced no observations");
        }
        tracing::info!(
            rows = report.rows,
            skipped = report.skipped,
            invalid_population = report.invalid_population,
            "loaded population table"
        );

        Ok(Self {
            observations: observations.into(),
            report,
        })
    }

    pub fn from_path(path: impl AsRef<Path>, fields: &FieldConvention) -> PopsceneResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PopsceneError::load(format!("open population table '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f), fields)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// True when both handles point at the same loaded table.
    pub fn shares_storage_with(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.observations, &other.observations)
    }
}

struct ColumnIndex {
    entity: usize,
    year: usize,
    estimates: usize,
    medium: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord, fields: &FieldConvention) -> PopsceneResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| PopsceneError::load(format!("CSV header has no '{name}' column")))
        };
        Ok(Self {
            entity: find(&fields.entity)?,
            year: find(&fields.year)?,
            estimates: find(&fields.estimates)?,
            medium: find(&fields.medium)?,
        })
    }

    fn view<'r>(&self, record: &'r csv::StringRecord) -> RawRow<'r> {
        RawRow {
            entity: record.get(self.entity).unwrap_or(""),
            year: record.get(self.year).unwrap_or(""),
            estimates: record.get(self.estimates).unwrap_or(""),
            medium: record.get(self.medium).unwrap_or(""),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/dataset.rs"]
mod tests;
