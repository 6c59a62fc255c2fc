//! Scene navigation state machine.
//!
//! State is a plain [`SceneState`] value passed into and returned from the transition
//! functions; there is no ambient current scene.

use crate::scene::model::SceneKind;

/// Current scene index. Always `>= 0` by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct SceneState(usize);

impl SceneState {
    pub const INITIAL: Self = Self(0);

    /// Direct placement, the only way past the last chart scene.
    pub fn at(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Unbounded increment.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Decrement, clamped at 0.
    pub fn previous(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    pub fn kind(self) -> SceneKind {
        SceneKind::for_index(self.0)
    }
}

/// Navigation input from the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavEvent {
    Next,
    Previous,
}

impl std::str::FromStr for NavEvent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Self::Next),
            "previous" | "prev" | "p" => Ok(Self::Previous),
            other => Err(format!("unknown navigation event '{other}'")),
        }
    }
}

/// Which navigation buttons the UI should enable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Affordances {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl Affordances {
    /// "previous" is off at the first scene; "next" is off exactly at the last chart scene.
    pub fn for_state(state: SceneState) -> Self {
        Self {
            previous_enabled: state.index() != 0,
            next_enabled: state.index() != SceneKind::LAST_CHART_INDEX,
        }
    }
}

/// Result of applying one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Transition {
    pub from: SceneState,
    pub to: SceneState,
    pub scene: SceneKind,
    pub affordances: Affordances,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Apply `event` to `state`.
///
/// `Next` is applied even when the "next" affordance is disabled, so callers that bypass the
/// UI can still reach the placeholder scene.
pub fn apply(state: SceneState, event: NavEvent) -> Transition {
    let to = match event {
        NavEvent::Next => state.next(),
        NavEvent::Previous => state.previous(),
    };
    let transition = Transition {
        from: state,
        to,
        scene: to.kind(),
        affordances: Affordances::for_state(to),
    };
    tracing::debug!(
        ?event,
        from = state.index(),
        to = to.index(),
        scene = ?transition.scene,
        "scene transition"
    );
    transition
}

#[cfg(test)]
#[path = "../../tests/unit/session/navigator.rs"]
mod tests;
