//! popscene turns a world-population table into the payloads of a four-scene narrative chart.
//!
//! # Pipeline overview
//!
//! 1. **Load**: CSV -> [`Dataset`] (one [`Observation`] per row, population variant picked by year)
//! 2. **Filter**: window, entity match, validity (see [`filter_window`], [`by_entity`], [`filter_valid`])
//! 3. **Rank**: endpoint growth rates per country ([`GrowthTable`])
//! 4. **Build**: scene index -> [`ScenePayload`] ([`SceneBuilder`])
//! 5. **Navigate**: [`NavEvent`] -> [`SceneState`] -> [`Frame`] ([`Story`])
//!
//! Drawing is left to whatever consumes the payloads; nothing here touches a canvas.
#![forbid(unsafe_code)]

mod config;
mod data;
mod foundation;
mod rank;
mod scene;
mod session;

pub use config::{DEFAULT_TOP_N, FieldConvention, StoryOpts};
pub use data::dataset::{Dataset, LoadReport};
pub use data::entity::{EntityKind, REGIONS, WORLD, is_country};
pub use data::filter::{by_entity, entity_series, filter_valid, filter_window};
pub use data::normalize::{Observation, RawRow, Variant, normalize_row};
pub use foundation::core::{
    LAST_ESTIMATE_YEAR, Population, WINDOW_END_YEAR, WINDOW_START_YEAR, YearWindow,
};
pub use foundation::error::{PopsceneError, PopsceneResult};
pub use kurbo::Vec2;
pub use rank::growth::{GrowthTable, RankOrder, RankedCountry, country_observations, growth_rate};
pub use scene::annotation::{
    AnnotationSpec, COUNTRY_ANNOTATIONS, Presence, REGION_ANNOTATIONS, WORLD_ANNOTATIONS,
    resolve_all,
};
pub use scene::builder::{SceneBuilder, placeholder};
pub use scene::label::{LABEL_GAP_X, LABEL_Y_OVERRIDES, end_labels, label_dy};
pub use scene::model::{
    Annotation, Axes, ChartPayload, Legend, Marker, PopulationUnit, SceneKind, ScenePayload,
    Series, SeriesLabel,
};
pub use session::navigator::{Affordances, NavEvent, SceneState, Transition, apply};
pub use session::story::{Frame, Story, StoryView};
