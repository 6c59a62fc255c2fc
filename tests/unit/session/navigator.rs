use super::*;

#[test]
fn initial_state_is_world() {
    assert_eq!(SceneState::default(), SceneState::INITIAL);
    assert_eq!(SceneState::INITIAL.index(), 0);
    assert_eq!(SceneState::INITIAL.kind(), SceneKind::World);
}

#[test]
fn previous_at_zero_is_a_noop() {
    let t = apply(SceneState::INITIAL, NavEvent::Previous);
    assert_eq!(t.to, SceneState::INITIAL);
    assert!(!t.changed());
    assert!(!t.affordances.previous_enabled);
}

#[test]
fn next_has_no_upper_clamp() {
    let t = apply(SceneState::at(3), NavEvent::Next);
    assert_eq!(t.to.index(), 4);
    assert_eq!(t.scene, SceneKind::Placeholder);
}

#[test]
fn walk_through_all_scenes() {
    let mut state = SceneState::INITIAL;
    let mut kinds = vec![state.kind()];
    for _ in 0..3 {
        state = apply(state, NavEvent::Next).to;
        kinds.push(state.kind());
    }
    assert_eq!(
        kinds,
        vec![
            SceneKind::World,
            SceneKind::Regions,
            SceneKind::Slowest,
            SceneKind::Fastest
        ]
    );
    state = apply(state, NavEvent::Previous).to;
    assert_eq!(state.index(), 2);
}

#[test]
fn affordances_per_index() {
    let cases = [
        (0, false, true),
        (1, true, true),
        (2, true, true),
        (3, true, false),
        (4, true, true),
    ];
    for (index, prev, next) in cases {
        let a = Affordances::for_state(SceneState::at(index));
        assert_eq!(a.previous_enabled, prev, "previous at {index}");
        assert_eq!(a.next_enabled, next, "next at {index}");
    }
}

#[test]
fn events_parse_from_cli_words() {
    assert_eq!("next".parse::<NavEvent>().unwrap(), NavEvent::Next);
    assert_eq!(" Prev ".parse::<NavEvent>().unwrap(), NavEvent::Previous);
    assert_eq!("p".parse::<NavEvent>().unwrap(), NavEvent::Previous);
    assert!("jump".parse::<NavEvent>().is_err());
}
