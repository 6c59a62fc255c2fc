use crate::data::dataset::Dataset;
use crate::data::entity::{REGIONS, WORLD};
use crate::data::filter::{by_entity, entity_series, filter_valid, filter_window};
use crate::data::normalize::Observation;
use crate::foundation::core::{LAST_ESTIMATE_YEAR, YearWindow};
use crate::rank::growth::{GrowthTable, RankOrder, country_observations};
use crate::scene::annotation::{
    COUNTRY_ANNOTATIONS, REGION_ANNOTATIONS, WORLD_ANNOTATIONS, resolve_all,
};
use crate::scene::label::end_labels;
use crate::scene::model::{
    Axes, ChartPayload, Legend, Marker, PopulationUnit, SceneKind, ScenePayload, Series,
};

const X_LABEL: &str = "Year";
const WORLD_MARKER_STRIDE: usize = 10;
const COUNTRY_MARKER_STRIDE: usize = 20;
const SLOWEST_ACCENT: &str = "#2166ac";
const FASTEST_ACCENT: &str = "#4daf4a";

/// Builds scene payloads from a loaded [`Dataset`].
///
/// Every call rebuilds from the shared observations; nothing is cached between scenes.
#[derive(Clone, Copy, Debug)]
pub struct SceneBuilder<'a> {
    dataset: &'a Dataset,
    window: YearWindow,
    top_n: usize,
}

impl<'a> SceneBuilder<'a> {
    pub fn new(dataset: &'a Dataset, window: YearWindow, top_n: usize) -> Self {
        Self {
            dataset,
            window,
            top_n,
        }
    }

    /// Dispatch on the scene index. Indices past the last chart yield a placeholder.
    #[tracing::instrument(skip(self))]
    pub fn build(&self, index: usize) -> ScenePayload {
        match SceneKind::for_index(index) {
            SceneKind::World => ScenePayload::Chart(self.world()),
            SceneKind::Regions => ScenePayload::Chart(self.regions()),
            SceneKind::Slowest => ScenePayload::Chart(self.ranked(RankOrder::Slowest)),
            SceneKind::Fastest => ScenePayload::Chart(self.ranked(RankOrder::Fastest)),
            SceneKind::Placeholder => placeholder(index),
        }
    }

    pub fn world(&self) -> ChartPayload {
        let world = Series::new(
            WORLD,
            entity_series(self.dataset.observations(), self.window, WORLD),
        );
        let series = vec![world];
        let unit = PopulationUnit::Billions;

        ChartPayload {
            kind: SceneKind::World,
            title: format!("World Population Over Time ({})", self.span_text()),
            axes: Axes {
                x_domain: self.window.span(),
                y_domain: min_max(&series),
                x_label: X_LABEL,
                y_label: unit.axis_label(),
                y_unit: unit,
            },
            annotations: resolve_all(&WORLD_ANNOTATIONS, &series),
            markers: markers(&series, WORLD_MARKER_STRIDE, |_, o| {
                vec![
                    format!("Year: {}", o.year),
                    format!("Population: {}", unit.format(value_or_zero(o))),
                    data_origin(o.year).to_string(),
                ]
            }),
            series,
            labels: Vec::new(),
            legend: None,
        }
    }

    pub fn regions(&self) -> ChartPayload {
        let windowed = filter_window(self.dataset.observations(), self.window);
        let series: Vec<Series> = REGIONS
            .iter()
            .map(|region| Series::new(*region, filter_valid(&by_entity(&windowed, region))))
            .collect();
        let unit = PopulationUnit::Billions;
        let x_domain = year_extent(&series).unwrap_or_else(|| self.window.span());

        ChartPayload {
            kind: SceneKind::Regions,
            title: format!("Population Trends by Region ({})", self.span_text()),
            axes: Axes {
                x_domain,
                y_domain: min_max(&series),
                x_label: X_LABEL,
                y_label: unit.axis_label(),
                y_unit: unit,
            },
            annotations: resolve_all(&REGION_ANNOTATIONS, &series),
            markers: markers(&series, WORLD_MARKER_STRIDE, |s, o| {
                vec![
                    format!("Region: {}", s.name),
                    format!("Year: {}", o.year),
                    format!("Population: {}", unit.format(value_or_zero(o))),
                ]
            }),
            labels: end_labels(&series),
            series,
            legend: None,
        }
    }

    pub fn ranked(&self, order: RankOrder) -> ChartPayload {
        let countries = country_observations(self.dataset.observations(), self.window);
        let table = GrowthTable::build(&countries);
        let series: Vec<Series> = table
            .ranked(order, self.top_n)
            .into_iter()
            .map(|c| Series::new(c.entity, c.series).with_growth_rate(c.growth_rate))
            .collect();
        let unit = PopulationUnit::Millions;

        let (kind, word, accent) = match order {
            RankOrder::Slowest => (SceneKind::Slowest, "Slowest", SLOWEST_ACCENT),
            RankOrder::Fastest => (SceneKind::Fastest, "Fastest", FASTEST_ACCENT),
        };
        let max = min_max(&series).1;

        ChartPayload {
            kind,
            title: format!(
                "Top {} {word} Growing Countries ({})",
                self.top_n,
                self.span_text()
            ),
            axes: Axes {
                x_domain: self.window.span(),
                y_domain: (0.0, max),
                x_label: X_LABEL,
                y_label: unit.axis_label(),
                y_unit: unit,
            },
            annotations: resolve_all(&COUNTRY_ANNOTATIONS, &series),
            markers: markers(&series, COUNTRY_MARKER_STRIDE, |s, o| {
                vec![
                    format!("Country: {}", s.name),
                    format!("Year: {}", o.year),
                    format!("Population: {}", unit.format(value_or_zero(o))),
                    format!("Growth Rate: {:.1}%", s.growth_rate.unwrap_or(0.0) * 100.0),
                ]
            }),
            legend: Some(Legend {
                heading: "Countries",
                accent,
                entries: series.iter().map(|s| s.name.clone()).collect(),
            }),
            series,
            labels: Vec::new(),
        }
    }

    fn span_text(&self) -> String {
        let (min, max) = self.window.span();
        format!("{min}-{max}")
    }
}

pub fn placeholder(index: usize) -> ScenePayload {
    ScenePayload::Placeholder {
        index,
        message: format!("Scene {index} coming soon..."),
    }
}

fn data_origin(year: i32) -> &'static str {
    if year <= LAST_ESTIMATE_YEAR {
        "Historical Data"
    } else {
        "Projected Data"
    }
}

fn value_or_zero(o: &Observation) -> f64 {
    o.value().unwrap_or(0.0)
}

fn markers<F>(series: &[Series], stride: usize, tooltip: F) -> Vec<Marker>
where
    F: Fn(&Series, &Observation) -> Vec<String>,
{
    series
        .iter()
        .flat_map(|s| {
            s.values
                .iter()
                .step_by(stride)
                .filter_map(|o| {
                    Some(Marker {
                        series: s.name.clone(),
                        year: o.year,
                        population: o.value()?,
                        tooltip: tooltip(s, o),
                    })
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn min_max(series: &[Series]) -> (f64, f64) {
    let mut values = series
        .iter()
        .flat_map(|s| s.values.iter().filter_map(Observation::value));
    let Some(first) = values.next() else {
        return (0.0, 0.0);
    };
    values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

fn year_extent(series: &[Series]) -> Option<(i32, i32)> {
    let years = series.iter().flat_map(|s| s.values.iter().map(|o| o.year));
    years.fold(None, |acc, y| match acc {
        None => Some((y, y)),
        Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
