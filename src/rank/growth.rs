//! Endpoint-to-endpoint growth ranking of countries.

use std::collections::HashMap;
use std::sync::Arc;

use crate::data::entity::is_country;
use crate::data::filter::{filter_valid, filter_window};
use crate::data::normalize::Observation;
use crate::foundation::core::{WINDOW_END_YEAR, WINDOW_START_YEAR, YearWindow};

/// Ranking direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankOrder {
    /// Ascending growth rate (most declining first).
    Slowest,
    /// Descending growth rate.
    Fastest,
}

/// A ranked country and the full series its line is drawn from.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RankedCountry {
    pub entity: Arc<str>,
    pub growth_rate: f64,
    pub series: Vec<Observation>,
}

impl RankedCountry {
    /// Populations at the 2020 and 2100 endpoints the growth rate was computed from.
    pub fn endpoints(&self) -> (Option<f64>, Option<f64>) {
        (
            endpoint(&self.series, WINDOW_START_YEAR),
            endpoint(&self.series, WINDOW_END_YEAR),
        )
    }
}

/// `(end - start) / start`, defined only for a positive start population.
pub fn growth_rate(start: f64, end: f64) -> Option<f64> {
    (start > 0.0).then(|| (end - start) / start)
}

/// Window-filtered, valid observations of countries only.
pub fn country_observations(observations: &[Observation], window: YearWindow) -> Vec<Observation> {
    let windowed = filter_window(observations, window);
    let countries: Vec<Observation> = windowed
        .into_iter()
        .filter(|o| is_country(&o.entity))
        .collect();
    filter_valid(&countries)
}

/// Growth rates for every country that has both endpoints, in first-appearance order.
#[derive(Clone, Debug, Default)]
pub struct GrowthTable {
    entries: Vec<RankedCountry>,
    excluded: Vec<Arc<str>>,
}

impl GrowthTable {
    /// Build from window-filtered, valid country observations.
    ///
    /// Countries without an exact 2020 and 2100 observation, or with a non-positive 2020
    /// population, are left out and listed in [`GrowthTable::excluded`].
    #[tracing::instrument(skip(country_obs), fields(rows = country_obs.len()))]
    pub fn build(country_obs: &[Observation]) -> Self {
        let mut order: Vec<Arc<str>> = Vec::new();
        let mut groups: HashMap<Arc<str>, Vec<Observation>> = HashMap::new();
        for obs in country_obs {
            groups
                .entry(obs.entity.clone())
                .or_insert_with(|| {
                    order.push(obs.entity.clone());
                    Vec::new()
                })
                .push(obs.clone());
        }

        let mut table = Self::default();
        for entity in order {
            let Some(mut series) = groups.remove(&entity) else {
                continue;
            };
            let start = endpoint(&series, WINDOW_START_YEAR);
            let end = endpoint(&series, WINDOW_END_YEAR);
            let rate = match (start, end) {
                (Some(s), Some(e)) => growth_rate(s, e),
                _ => None,
            };
            match rate {
                Some(growth_rate) => {
                    series.sort_by_key(|o| o.year);
                    table.entries.push(RankedCountry {
                        entity,
                        growth_rate,
                        series,
                    });
                }
                None => table.excluded.push(entity),
            }
        }

        tracing::debug!(
            ranked = table.entries.len(),
            excluded = table.excluded.len(),
            "growth table built"
        );
        table
    }

    /// The first `limit` countries in `order`. Ties keep first-appearance order.
    pub fn ranked(&self, order: RankOrder, limit: usize) -> Vec<RankedCountry> {
        let mut sorted: Vec<&RankedCountry> = self.entries.iter().collect();
        match order {
            RankOrder::Slowest => sorted.sort_by(|a, b| a.growth_rate.total_cmp(&b.growth_rate)),
            RankOrder::Fastest => sorted.sort_by(|a, b| b.growth_rate.total_cmp(&a.growth_rate)),
        }
        sorted.into_iter().take(limit).cloned().collect()
    }

    pub fn entries(&self) -> &[RankedCountry] {
        &self.entries
    }

    pub fn excluded(&self) -> &[Arc<str>] {
        &self.excluded
    }

    pub fn get(&self, entity: &str) -> Option<&RankedCountry> {
        self.entries.iter().find(|c| &*c.entity == entity)
    }
}

fn endpoint(series: &[Observation], year: i32) -> Option<f64> {
    series.iter().find(|o| o.year == year).and_then(Observation::value)
}

#[cfg(test)]
#[path = "../../tests/unit/rank/growth.rs"]
mod tests;
