use crate::foundation::error::{PopsceneError, PopsceneResult};

/// Last year served by the "estimates" variant; later years use the medium projection.
pub const LAST_ESTIMATE_YEAR: i32 = 2023;

/// First year of the analysis window and growth-rate start point.
pub const WINDOW_START_YEAR: i32 = 2020;

/// Last year of the analysis window and growth-rate end point.
pub const WINDOW_END_YEAR: i32 = 2100;

/// Inclusive `[min, max]` year range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct YearWindow {
    pub min: i32,
    pub max: i32,
}

impl YearWindow {
    pub fn new(min: i32, max: i32) -> PopsceneResult<Self> {
        if min > max {
            return Err(PopsceneError::validation(format!(
                "year window min ({min}) must be <= max ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn contains(self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    pub fn span(self) -> (i32, i32) {
        (self.min, self.max)
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self {
            min: WINDOW_START_YEAR,
            max: WINDOW_END_YEAR,
        }
    }
}

/// A population count, or the invalid marker when the source cell was missing or non-numeric.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Population(Option<f64>);

impl Population {
    pub const INVALID: Self = Self(None);

    /// Non-finite input collapses to [`Population::INVALID`].
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(Some(value))
        } else {
            Self::INVALID
        }
    }

    /// Parse a raw table cell. Empty or non-numeric text is invalid, never an error.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::INVALID;
        }
        raw.parse::<f64>().map(Self::new).unwrap_or(Self::INVALID)
    }

    pub fn value(self) -> Option<f64> {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_some()
    }
}

impl From<f64> for Population {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
