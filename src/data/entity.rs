/// Name of the global aggregate row.
pub const WORLD: &str = "World";

/// Region aggregates, in the order the regional scene draws them.
pub const REGIONS: [&str; 6] = [
    "Africa",
    "Asia",
    "Europe",
    "Latin America",
    "Northern America",
    "Oceania",
];

/// What a row's `Entity` column refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    World,
    Region,
    Country,
}

impl EntityKind {
    /// Membership test against `REGIONS ∪ {World}`; everything else is a country.
    pub fn classify(name: &str) -> Self {
        if name == WORLD {
            Self::World
        } else if REGIONS.contains(&name) {
            Self::Region
        } else {
            Self::Country
        }
    }
}

pub fn is_country(name: &str) -> bool {
    EntityKind::classify(name) == EntityKind::Country
}
