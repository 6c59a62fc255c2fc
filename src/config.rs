use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::{WINDOW_END_YEAR, WINDOW_START_YEAR, YearWindow};
use crate::foundation::error::{PopsceneError, PopsceneResult};

/// Default number of countries shown in each ranked scene.
pub const DEFAULT_TOP_N: usize = 5;

/// Column names of the source table.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FieldConvention {
    pub entity: String,
    pub year: String,
    /// Historical estimates column, used for years up to 2023.
    pub estimates: String,
    /// Medium-variant projection column, used after 2023.
    pub medium: String,
}

impl Default for FieldConvention {
    fn default() -> Self {
        Self {
            entity: "Entity".to_string(),
            year: "Year".to_string(),
            estimates: "population__sex_all__age_all__variant_estimates".to_string(),
            medium: "population__sex_all__age_all__variant_medium".to_string(),
        }
    }
}

/// Options for opening a [`crate::Story`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoryOpts {
    pub data_path: PathBuf,
    pub fields: FieldConvention,
    pub window: YearWindow,
    pub top_n: usize,
}

impl Default for StoryOpts {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/population-with-un-projections.csv"),
            fields: FieldConvention::default(),
            window: YearWindow::default(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl StoryOpts {
    /// Parse options from a JSON reader. Missing keys take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> PopsceneResult<Self> {
        let opts: Self = serde_json::from_reader(r)
            .map_err(|e| PopsceneError::serde(format!("parse story options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PopsceneResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PopsceneError::validation(format!("open story options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> PopsceneResult<()> {
        let columns = [
            ("entity", &self.fields.entity),
            ("year", &self.fields.year),
            ("estimates", &self.fields.estimates),
            ("medium", &self.fields.medium),
        ];
        for (key, name) in columns {
            if name.trim().is_empty() {
                return Err(PopsceneError::validation(format!(
                    "fields.{key} must be a non-empty column name"
                )));
            }
        }
        let window = YearWindow::new(self.window.min, self.window.max)?;
        // Growth rates are measured between these two years.
        for year in [WINDOW_START_YEAR, WINDOW_END_YEAR] {
            if !window.contains(year) {
                return Err(PopsceneError::validation(format!(
                    "window {}-{} must include {year}",
                    window.min, window.max
                )));
            }
        }
        if self.top_n == 0 {
            return Err(PopsceneError::validation("top_n must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
