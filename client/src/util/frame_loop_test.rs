use super::*;

#[test]
fn new_handle_is_idle() {
    let handle = FrameLoopHandle::new();
    assert!(!handle.is_running());
    assert!(!handle.is_cancelled());
}

#[test]
fn mark_running_then_cancel() {
    let handle = FrameLoopHandle::new();
    assert!(handle.mark_running());
    assert!(handle.is_running());

    handle.cancel();
    assert!(!handle.is_running());
    assert!(handle.is_cancelled());
}

#[test]
fn cancel_is_visible_through_clones() {
    let handle = FrameLoopHandle::new();
    let in_callback = handle.clone();
    assert!(handle.mark_running());

    handle.cancel();
    assert!(in_callback.is_cancelled());
    assert!(!in_callback.is_running());
}

#[test]
fn cancelled_handle_cannot_restart() {
    let handle = FrameLoopHandle::new();
    handle.cancel();
    assert!(!handle.mark_running());
    assert!(!handle.is_running());
}

#[test]
fn cancel_is_idempotent() {
    let handle = FrameLoopHandle::new();
    assert!(handle.mark_running());
    handle.cancel();
    handle.cancel();
    assert!(handle.is_cancelled());
}

#[test]
fn handle_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FrameLoopHandle>();
}
