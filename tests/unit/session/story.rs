use super::*;
use crate::data::normalize::Observation;

fn story() -> Story {
    let obs = vec![
        Observation::new("World", 2020, 7.8e9),
        Observation::new("World", 2100, 10.2e9),
        Observation::new("A", 2020, 100.0),
        Observation::new("A", 2100, 50.0),
    ];
    Story::new(Dataset::from_observations(obs), &StoryOpts::default())
}

#[test]
fn starts_on_world_with_previous_disabled() {
    let frame = story().current();
    assert_eq!(frame.index, 0);
    assert_eq!(frame.scene, SceneKind::World);
    assert!(!frame.affordances.previous_enabled);
    assert!(frame.affordances.next_enabled);
}

#[test]
fn handle_advances_and_rebuilds() {
    let mut s = story();
    let frame = s.handle(NavEvent::Next);
    assert_eq!(frame.payload.kind(), SceneKind::Regions);
    s.handle(NavEvent::Next);
    let frame = s.handle(NavEvent::Next);
    assert_eq!(frame.scene, SceneKind::Fastest);
    assert!(!frame.affordances.next_enabled);

    // Next stays applicable past the disabled affordance.
    let frame = s.handle(NavEvent::Next);
    assert_eq!(frame.index, 4);
    assert!(matches!(frame.payload, ScenePayload::Placeholder { index: 4, .. }));
}

#[test]
fn jump_reaches_placeholder_directly() {
    let mut s = story();
    let frame = s.jump(7);
    assert_eq!(s.state().index(), 7);
    assert_eq!(frame.scene, SceneKind::Placeholder);
    let frame = s.handle(NavEvent::Previous);
    assert_eq!(frame.index, 6);
}

#[test]
fn open_surfaces_missing_file_as_load_failure() {
    let opts = StoryOpts {
        data_path: "target/no/such/population.csv".into(),
        ..StoryOpts::default()
    };
    let (story, view) = Story::launch(&opts);
    assert!(story.is_none());
    match view {
        StoryView::LoadFailed { message } => assert!(message.contains("load error:")),
        StoryView::Ready(_) => panic!("expected load failure"),
    }
}

#[test]
fn launch_rejects_invalid_opts_before_reading() {
    let opts = StoryOpts {
        top_n: 0,
        ..StoryOpts::default()
    };
    let (story, view) = Story::launch(&opts);
    assert!(story.is_none());
    assert!(view.frame().is_none());
}

#[test]
fn view_serializes_with_status_tag() {
    let view = StoryView::Ready(story().current());
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["status"], "ready");
    assert_eq!(json["payload"]["type"], "chart");
    assert_eq!(json["payload"]["kind"], "world");

    let failed = StoryView::load_failed(&PopsceneError::load("x"));
    let json = serde_json::to_value(&failed).unwrap();
    assert_eq!(json["status"], "load_failed");
}
