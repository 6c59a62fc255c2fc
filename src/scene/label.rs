//! End-of-line label placement for the regional scene.
//!
//! This is a fixed two-entry fixup for the labels that collide with the 2020-2100 data, not a
//! collision-avoidance algorithm.

use kurbo::Vec2;

use crate::scene::model::{Series, SeriesLabel};

/// Horizontal gap between a line's last point and its label.
pub const LABEL_GAP_X: f64 = 5.0;

/// Vertical pixel overrides keyed by region name. Negative moves up.
pub const LABEL_Y_OVERRIDES: [(&str, f64); 2] = [("Latin America", -12.0), ("Northern America", 6.0)];

pub fn label_dy(series_name: &str) -> f64 {
    LABEL_Y_OVERRIDES
        .iter()
        .find(|(name, _)| *name == series_name)
        .map_or(0.0, |(_, dy)| *dy)
}

/// Label at the last valid point of each series. Empty series get no label.
pub fn end_labels(series: &[Series]) -> Vec<SeriesLabel> {
    series
        .iter()
        .filter_map(|s| {
            let last = s.last()?;
            Some(SeriesLabel {
                series: s.name.clone(),
                year: last.year,
                population: last.value()?,
                offset: Vec2::new(LABEL_GAP_X, label_dy(&s.name)),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/label.rs"]
mod tests;
