use crate::config::StoryOpts;
use crate::data::dataset::Dataset;
use crate::foundation::core::YearWindow;
use crate::foundation::error::{PopsceneError, PopsceneResult};
use crate::scene::builder::SceneBuilder;
use crate::scene::model::{SceneKind, ScenePayload};
use crate::session::navigator::{Affordances, NavEvent, SceneState, apply};

/// What the UI shows after a trigger: scene index, button state, and the chart payload.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Frame {
    pub index: usize,
    pub scene: SceneKind,
    pub affordances: Affordances,
    pub payload: ScenePayload,
}

/// Top-level view state, including the single load-failure state.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StoryView {
    Ready(Frame),
    LoadFailed { message: String },
}

impl StoryView {
    pub fn load_failed(err: &PopsceneError) -> Self {
        Self::LoadFailed {
            message: format!("Could not load population data: {err}"),
        }
    }

    pub fn frame(&self) -> Option<&Frame> {
        match self {
            Self::Ready(frame) => Some(frame),
            Self::LoadFailed { .. } => None,
        }
    }
}

/// One viewing session: the loaded dataset plus the current scene.
///
/// The dataset is loaded once; each trigger rebuilds the current scene from it in full.
#[derive(Clone, Debug)]
pub struct Story {
    dataset: Dataset,
    state: SceneState,
    window: YearWindow,
    top_n: usize,
}

impl Story {
    pub fn new(dataset: Dataset, opts: &StoryOpts) -> Self {
        Self {
            dataset,
            state: SceneState::INITIAL,
            window: opts.window,
            top_n: opts.top_n,
        }
    }

    /// Validate `opts` and load the table it points at.
    pub fn open(opts: &StoryOpts) -> PopsceneResult<Self> {
        opts.validate()?;
        let dataset = Dataset::from_path(&opts.data_path, &opts.fields)?;
        Ok(Self::new(dataset, opts))
    }

    /// [`Story::open`] plus the initial view. A load failure yields no story and a
    /// [`StoryView::LoadFailed`] view.
    pub fn launch(opts: &StoryOpts) -> (Option<Self>, StoryView) {
        match Self::open(opts) {
            Ok(story) => {
                let view = StoryView::Ready(story.current());
                (Some(story), view)
            }
            Err(err) => {
                tracing::error!("population data failed to load: {err}");
                (None, StoryView::load_failed(&err))
            }
        }
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn builder(&self) -> SceneBuilder<'_> {
        SceneBuilder::new(&self.dataset, self.window, self.top_n)
    }

    /// Rebuild the current scene.
    pub fn current(&self) -> Frame {
        Frame {
            index: self.state.index(),
            scene: self.state.kind(),
            affordances: Affordances::for_state(self.state),
            payload: self.builder().build(self.state.index()),
        }
    }

    pub fn handle(&mut self, event: NavEvent) -> Frame {
        self.state = apply(self.state, event).to;
        self.current()
    }

    /// Place the story at `index` directly, bypassing the UI affordances.
    pub fn jump(&mut self, index: usize) -> Frame {
        self.state = SceneState::at(index);
        tracing::debug!(index, "scene jump");
        self.current()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/story.rs"]
mod tests;
