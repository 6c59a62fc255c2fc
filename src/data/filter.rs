//! Series filters. All of them preserve input order.
//!
//! Scene builds compose them as window, then entity match, then validity.

use crate::data::normalize::Observation;
use crate::foundation::core::YearWindow;

/// Keep observations with `window.min <= year <= window.max`.
pub fn filter_window(observations: &[Observation], window: YearWindow) -> Vec<Observation> {
    observations
        .iter()
        .filter(|o| window.contains(o.year))
        .cloned()
        .collect()
}

/// Drop observations carrying the invalid population marker.
pub fn filter_valid(observations: &[Observation]) -> Vec<Observation> {
    observations
        .iter()
        .filter(|o| o.population.is_valid())
        .cloned()
        .collect()
}

/// Exact-match filter on entity name.
pub fn by_entity(observations: &[Observation], name: &str) -> Vec<Observation> {
    observations
        .iter()
        .filter(|o| &*o.entity == name)
        .cloned()
        .collect()
}

/// The standard per-entity chain: window, entity, validity.
pub fn entity_series(
    observations: &[Observation],
    window: YearWindow,
    name: &str,
) -> Vec<Observation> {
    let windowed = filter_window(observations, window);
    filter_valid(&by_entity(&windowed, name))
}

#[cfg(test)]
#[path = "../../tests/unit/data/filter.rs"]
mod tests;
