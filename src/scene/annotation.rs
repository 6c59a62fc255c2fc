//! Declarative narrative annotations.
//!
//! Specs are evaluated against the series a scene actually produced. A fixed spec is always
//! emitted; a ranked spec is dropped when its country is not in the current ranking.

use std::sync::Arc;

use kurbo::Vec2;

use crate::data::entity::WORLD;
use crate::scene::model::{Annotation, Series};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// Part of the scene regardless of data.
    Fixed,
    /// Only when the target series is present.
    IfRanked,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnotationSpec {
    pub target: &'static str,
    pub year: i32,
    pub title: &'static str,
    pub label: &'static str,
    pub dx: f64,
    pub dy: f64,
    pub presence: Presence,
}

pub const WORLD_ANNOTATIONS: [AnnotationSpec; 1] = [AnnotationSpec {
    target: WORLD,
    year: 2080,
    title: "Peak Population",
    label: "World population is projected to peak in the 2080s at around 10.3 billion people before it begins to slowly decline.",
    dx: -140.0,
    dy: 60.0,
    presence: Presence::Fixed,
}];

pub const REGION_ANNOTATIONS: [AnnotationSpec; 3] = [
    AnnotationSpec {
        target: "Asia",
        year: 2050,
        title: "Asia Peaks",
        label: "Asia's population reaches its high point around mid-century and shrinks afterwards.",
        dx: -60.0,
        dy: -40.0,
        presence: Presence::Fixed,
    },
    AnnotationSpec {
        target: "Africa",
        year: 2100,
        title: "Africa Keeps Growing",
        label: "Africa is the only region still growing quickly at the end of the century.",
        dx: -160.0,
        dy: 20.0,
        presence: Presence::Fixed,
    },
    AnnotationSpec {
        target: "Europe",
        year: 2100,
        title: "Europe Declines",
        label: "Europe's population slowly contracts throughout the projection period.",
        dx: -140.0,
        dy: -50.0,
        presence: Presence::Fixed,
    },
];

/// Shared by both ranked-country scenes.
pub const COUNTRY_ANNOTATIONS: [AnnotationSpec; 2] = [
    AnnotationSpec {
        target: "Ukraine",
        year: 2026,
        title: "Sharp Drop",
        label: "Ukraine's population falls steeply in the mid-2020s as war drives emigration.",
        dx: 40.0,
        dy: -30.0,
        presence: Presence::IfRanked,
    },
    AnnotationSpec {
        target: "Democratic Republic of Congo",
        year: 2060,
        title: "Rapid Growth",
        label: "The Democratic Republic of Congo keeps adding people at one of the fastest rates in the world.",
        dx: -150.0,
        dy: -40.0,
        presence: Presence::IfRanked,
    },
];

impl AnnotationSpec {
    pub fn resolve(&self, series: &[Series]) -> Option<Annotation> {
        let target = series.iter().find(|s| &*s.name == self.target);
        if target.is_none() && self.presence == Presence::IfRanked {
            return None;
        }
        Some(Annotation {
            anchor_year: self.year,
            anchor_series: target.map_or_else(|| Arc::from(self.target), |s| s.name.clone()),
            anchor_population: target.and_then(|s| s.value_at(self.year)),
            title: self.title.to_string(),
            label: self.label.to_string(),
            offset: Vec2::new(self.dx, self.dy),
        })
    }
}

pub fn resolve_all(specs: &[AnnotationSpec], series: &[Series]) -> Vec<Annotation> {
    specs.iter().filter_map(|spec| spec.resolve(series)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/annotation.rs"]
mod tests;
