use std::collections::HashMap;
use std::sync::Arc;

use crate::config::FieldConvention;
use crate::foundation::core::{LAST_ESTIMATE_YEAR, Population};
use crate::foundation::error::{PopsceneError, PopsceneResult};

/// One normalized `(entity, year, population)` tuple. Immutable once built.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Observation {
    pub entity: Arc<str>,
    pub year: i32,
    pub population: Population,
}

impl Observation {
    pub fn new(entity: impl Into<Arc<str>>, year: i32, population: impl Into<Population>) -> Self {
        Self {
            entity: entity.into(),
            year,
            population: population.into(),
        }
    }

    /// Population value, if the observation is valid.
    pub fn value(&self) -> Option<f64> {
        self.population.value()
    }
}

/// Borrowed view of the four source cells a row contributes.
#[derive(Clone, Copy, Debug)]
pub struct RawRow<'a> {
    pub entity: &'a str,
    pub year: &'a str,
    pub estimates: &'a str,
    pub medium: &'a str,
}

impl<'a> RawRow<'a> {
    /// View a header-keyed mapping through `fields`. Absent variant cells read as empty.
    pub fn from_map(
        map: &'a HashMap<String, String>,
        fields: &FieldConvention,
    ) -> PopsceneResult<Self> {
        Ok(Self {
            entity: required_cell(map, &fields.entity)?,
            year: required_cell(map, &fields.year)?,
            estimates: map.get(&fields.estimates).map_or("", String::as_str),
            medium: map.get(&fields.medium).map_or("", String::as_str),
        })
    }
}

fn required_cell<'a>(map: &'a HashMap<String, String>, col: &str) -> PopsceneResult<&'a str> {
    map.get(col)
        .map(String::as_str)
        .ok_or_else(|| PopsceneError::validation(format!("row has no '{col}' column")))
}

/// Which population variant serves a given year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Estimates,
    Medium,
}

impl Variant {
    pub fn for_year(year: i32) -> Self {
        if year <= LAST_ESTIMATE_YEAR {
            Self::Estimates
        } else {
            Self::Medium
        }
    }
}

/// Normalize a single row.
///
/// The population cell is picked by [`Variant::for_year`]. A bad population cell becomes
/// [`Population::INVALID`]; only an unparseable `Year` is an error.
pub fn normalize_row(row: &RawRow<'_>) -> PopsceneResult<Observation> {
    let year = parse_year(row.year)?;
    let cell = match Variant::for_year(year) {
        Variant::Estimates => row.estimates,
        Variant::Medium => row.medium,
    };
    Ok(Observation {
        entity: Arc::from(row.entity.trim()),
        year,
        population: Population::parse(cell),
    })
}

fn parse_year(raw: &str) -> PopsceneResult<i32> {
    let raw = raw.trim();
    if let Ok(y) = raw.parse::<i32>() {
        return Ok(y);
    }
    // Some exports write years as "2020.0".
    match raw.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= f64::from(i32::MIN) && f <= f64::from(i32::MAX) => {
            Ok(f as i32)
        }
        _ => Err(PopsceneError::validation(format!(
            "year '{raw}' is not an integer"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/normalize.rs"]
mod tests;
