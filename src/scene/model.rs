use std::sync::Arc;

use kurbo::Vec2;

use crate::data::normalize::Observation;

/// Which layout a scene index resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    World,
    Regions,
    Slowest,
    Fastest,
    /// Any index past the last concrete scene.
    Placeholder,
}

impl SceneKind {
    /// Index of the last scene with a chart.
    pub const LAST_CHART_INDEX: usize = 3;

    pub fn for_index(index: usize) -> Self {
        match index {
            0 => Self::World,
            1 => Self::Regions,
            2 => Self::Slowest,
            3 => Self::Fastest,
            _ => Self::Placeholder,
        }
    }
}

/// A named line, ordered by year.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Series {
    pub name: Arc<str>,
    pub values: Vec<Observation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth_rate: Option<f64>,
}

impl Series {
    /// Stable-sorts `values` by year.
    pub fn new(name: impl Into<Arc<str>>, mut values: Vec<Observation>) -> Self {
        values.sort_by_key(|o| o.year);
        Self {
            name: name.into(),
            values,
            growth_rate: None,
        }
    }

    pub fn with_growth_rate(mut self, rate: f64) -> Self {
        self.growth_rate = Some(rate);
        self
    }

    pub fn last(&self) -> Option<&Observation> {
        self.values.last()
    }

    pub fn value_at(&self, year: i32) -> Option<f64> {
        self.values
            .iter()
            .find(|o| o.year == year)
            .and_then(Observation::value)
    }
}

/// Narrative callout pinned to a point on one series.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Annotation {
    pub anchor_year: i32,
    pub anchor_series: Arc<str>,
    /// Population of `anchor_series` at `anchor_year`, when that point exists.
    pub anchor_population: Option<f64>,
    pub title: String,
    pub label: String,
    /// Callout offset from the anchor, in chart pixels.
    pub offset: Vec2,
}

/// Display unit of the population axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PopulationUnit {
    Billions,
    Millions,
}

impl PopulationUnit {
    pub fn divisor(self) -> f64 {
        match self {
            Self::Billions => 1e9,
            Self::Millions => 1e6,
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            Self::Billions => "Population (Billions)",
            Self::Millions => "Population (Millions)",
        }
    }

    /// `7.84 billion` / `43.9M`.
    pub fn format(self, population: f64) -> String {
        let v = population / self.divisor();
        match self {
            Self::Billions => format!("{v:.2} billion"),
            Self::Millions => format!("{v:.1}M"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Axes {
    pub x_domain: (i32, i32),
    pub y_domain: (f64, f64),
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub y_unit: PopulationUnit,
}

/// A hoverable point with its tooltip text.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Marker {
    pub series: Arc<str>,
    pub year: i32,
    pub population: f64,
    pub tooltip: Vec<String>,
}

/// End-of-line text label for a series.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SeriesLabel {
    pub series: Arc<str>,
    pub year: i32,
    pub population: f64,
    pub offset: Vec2,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Legend {
    pub heading: &'static str,
    pub accent: &'static str,
    pub entries: Vec<Arc<str>>,
}

/// Everything the chart renderer needs for one scene.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ChartPayload {
    pub kind: SceneKind,
    pub title: String,
    pub axes: Axes,
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
    pub markers: Vec<Marker>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<SeriesLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

impl ChartPayload {
    pub fn series_named(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| &*s.name == name)
    }
}

/// Output of a scene build.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenePayload {
    Chart(ChartPayload),
    /// No chart data; shown for indices past the last concrete scene.
    Placeholder { index: usize, message: String },
}

impl ScenePayload {
    pub fn kind(&self) -> SceneKind {
        match self {
            Self::Chart(chart) => chart.kind,
            Self::Placeholder { .. } => SceneKind::Placeholder,
        }
    }

    pub fn as_chart(&self) -> Option<&ChartPayload> {
        match self {
            Self::Chart(chart) => Some(chart),
            Self::Placeholder { .. } => None,
        }
    }
}
