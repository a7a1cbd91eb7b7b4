//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns rotation, stroke capture and drawing. This host maps
//! mouse and touch events into engine calls, forwards clear requests from the
//! panel, and drives one engine tick per animation frame. The tick reads the
//! controls signal untracked, so panel edits apply on the next frame without
//! re-running any effect.
//!
//! The pointer is mapped against a non-rotating bounds `div` laid over the
//! canvas. The canvas's own bounding box grows while it is rotated and would
//! skew local coordinates.

use canvas::consts::SURFACE_SIZE_PX;
use canvas::controls::Controls;
use leptos::prelude::*;

use crate::components::control_panel::ControlPanel;
use crate::state::cursor_preview::CursorPreview;
use crate::util::device;
use crate::util::frame_loop::FrameLoopHandle;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "csr")]
use canvas::input::{DragEnd, PointerKind};
#[cfg(feature = "csr")]
use crate::state::panel::PanelState;
#[cfg(feature = "csr")]
use crate::util::frame_loop;
#[cfg(feature = "csr")]
use crate::util::pointer_input::{bounds_origin, element_at, first_touch_point, mouse_point};

/// Refresh the engine's surface origin from the bounds element.
///
/// Called on every pointer event so page scrolls and resizes never leave a
/// stale origin behind.
#[cfg(feature = "csr")]
fn sync_origin(engine: &mut Engine, bounds_ref: NodeRef<leptos::html::Div>) {
    if let Some(bounds) = bounds_ref.get_untracked() {
        engine.set_surface_origin(bounds_origin(&bounds));
    }
}

#[cfg(feature = "csr")]
fn apply_actions(preview: RwSignal<CursorPreview>, actions: Vec<Action>) {
    if actions.is_empty() {
        return;
    }
    preview.update(|p| p.apply_all(actions));
}

/// The rotating drawing surface, its cursor preview, and the control panel.
#[component]
pub fn Zoetrope() -> impl IntoView {
    let controls = expect_context::<RwSignal<Controls>>();
    #[cfg(feature = "csr")]
    let panel = expect_context::<RwSignal<PanelState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let bounds_ref = NodeRef::<leptos::html::Div>::new();
    let preview = RwSignal::new(CursorPreview::default());
    let frame_loop_handle = FrameLoopHandle::new();
    #[cfg(feature = "csr")]
    let engine = Rc::new(RefCell::new(None::<Engine>));

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let frame_loop_handle = frame_loop_handle.clone();
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = match Engine::new(canvas) {
                Ok(instance) => instance,
                Err(err) => {
                    log::error!("zoetrope mount failed: {err}");
                    return;
                }
            };
            instance.set_touch_only(device::is_touch_only());
            sync_origin(&mut instance, bounds_ref);
            *engine.borrow_mut() = Some(instance);
            device::lock_page_scroll(true);

            let engine_for_frame = Rc::clone(&engine);
            let engine_for_stop = Rc::clone(&engine);
            let mut render_failed = false;
            let started = frame_loop::start(
                &frame_loop_handle,
                move || {
                    let Some(controls) = controls.try_get_untracked() else {
                        return;
                    };
                    let Some(result) = engine_for_frame.borrow_mut().as_mut().map(|e| e.render(&controls)) else {
                        return;
                    };
                    match result {
                        Ok(()) => render_failed = false,
                        Err(err) if !render_failed => {
                            log::warn!("zoetrope render failed: {err}");
                            render_failed = true;
                        }
                        Err(_) => {}
                    }
                },
                move || {
                    if let Some(engine) = engine_for_stop.borrow_mut().as_mut() {
                        engine.unmount();
                    }
                },
            );
            if !started {
                log::warn!("zoetrope frame loop did not start");
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move |prev: Option<u64>| {
            let seq = panel.with(|p| p.clear_seq);
            if prev.is_some_and(|prev| prev != seq) {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.request_clear();
                }
            }
            seq
        });
    }

    {
        let frame_loop_handle = frame_loop_handle.clone();
        on_cleanup(move || {
            frame_loop_handle.cancel();
            device::lock_page_scroll(false);
        });
    }

    let on_mouse_enter = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::MouseEvent| {
                let actions = engine
                    .borrow_mut()
                    .as_mut()
                    .map(Engine::on_pointer_enter)
                    .unwrap_or_default();
                apply_actions(preview, actions);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::MouseEvent| {
                if ev.button() != 0 {
                    return;
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    sync_origin(engine, bounds_ref);
                    engine.on_pointer_down(mouse_point(&ev), PointerKind::Mouse);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::MouseEvent| {
                let actions = engine
                    .borrow_mut()
                    .as_mut()
                    .map(|engine| {
                        sync_origin(engine, bounds_ref);
                        controls.with_untracked(|c| engine.on_pointer_move(mouse_point(&ev), PointerKind::Mouse, c))
                    })
                    .unwrap_or_default();
                apply_actions(preview, actions);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::MouseEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.on_pointer_up();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_mouse_leave = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::MouseEvent| {
                let actions = engine
                    .borrow_mut()
                    .as_mut()
                    .map(Engine::on_pointer_leave)
                    .unwrap_or_default();
                apply_actions(preview, actions);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };

    let on_touch_start = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::TouchEvent| {
                let Some(point) = first_touch_point(&ev) else {
                    return;
                };
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    sync_origin(engine, bounds_ref);
                    engine.on_pointer_down(point, PointerKind::Touch { target: element_at(point) });
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::TouchEvent| {
                let Some(point) = first_touch_point(&ev) else {
                    return;
                };
                let actions = engine
                    .borrow_mut()
                    .as_mut()
                    .map(|engine| {
                        sync_origin(engine, bounds_ref);
                        let kind = PointerKind::Touch { target: element_at(point) };
                        controls.with_untracked(|c| engine.on_pointer_move(point, kind, c))
                    })
                    .unwrap_or_default();
                apply_actions(preview, actions);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_end = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::TouchEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.on_pointer_up();
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let on_touch_cancel = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::TouchEvent| {
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    engine.end_drag(DragEnd::Cancel);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let surface_size = format!("width: {SURFACE_SIZE_PX}px; height: {SURFACE_SIZE_PX}px;");

    view! {
        <div class="zoetrope">
            <ControlPanel/>
            <div class="zoetrope__stage">
                <div node_ref=bounds_ref class="zoetrope__bounds" style=surface_size.clone()></div>
                <canvas
                    node_ref=canvas_ref
                    class="zoetrope__surface"
                    width=SURFACE_SIZE_PX.to_string()
                    height=SURFACE_SIZE_PX.to_string()
                    style=surface_size
                    on:mouseenter=on_mouse_enter
                    on:mousedown=on_mouse_down
                    on:mousemove=on_mouse_move
                    on:mouseup=on_mouse_up
                    on:mouseleave=on_mouse_leave
                    on:touchstart=on_touch_start
                    on:touchmove=on_touch_move
                    on:touchend=on_touch_end
                    on:touchcancel=on_touch_cancel
                ></canvas>
                <div class="zoetrope__cursor" style=move || preview.get().style(&controls.get())></div>
            </div>
        </div>
    }
}
