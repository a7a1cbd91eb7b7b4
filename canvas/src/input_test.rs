use super::*;

// =============================================================
// PointerKind
// =============================================================

#[test]
fn pointer_kind_is_touch() {
    assert!(!PointerKind::<u32>::Mouse.is_touch());
    assert!(PointerKind::Touch { target: Some(1_u32) }.is_touch());
    assert!(PointerKind::<u32>::Touch { target: None }.is_touch());
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    let state = InputState::<u32>::default();
    assert!(matches!(state, InputState::Idle));
    assert!(!state.is_drawing());
}

#[test]
fn drawing_state_reports_drawing() {
    let state = InputState::<u32>::Drawing { last: Point::new(1.0, 2.0), touch_anchor: None };
    assert!(state.is_drawing());
}

#[test]
fn mouse_drag_never_slides_off() {
    let state = InputState::<u32>::Drawing { last: Point::new(0.0, 0.0), touch_anchor: None };
    assert!(!state.slid_off(Some(&7)));
    assert!(!state.slid_off(None));
}

#[test]
fn idle_never_slides_off() {
    let state = InputState::<u32>::Idle;
    assert!(!state.slid_off(Some(&7)));
}

#[test]
fn touch_drag_slides_off_when_target_changes() {
    let state = InputState::Drawing { last: Point::new(0.0, 0.0), touch_anchor: Some(3_u32) };
    assert!(!state.slid_off(Some(&3)));
    assert!(state.slid_off(Some(&4)));
}

#[test]
fn touch_drag_slides_off_when_target_is_unresolved() {
    let state = InputState::Drawing { last: Point::new(0.0, 0.0), touch_anchor: Some(3_u32) };
    assert!(state.slid_off(None));
}

#[test]
fn drag_end_reasons_are_distinct() {
    let reasons = [DragEnd::Release, DragEnd::Leave, DragEnd::Cancel, DragEnd::SlideOff];
    for (i, a) in reasons.iter().enumerate() {
        for (j, b) in reasons.iter().enumerate() {
            assert_eq!(i == j, a == b);
        }
    }
}
