use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::controls::Controls;
use crate::error::EngineError;
use crate::input::{DragEnd, InputState, PointerKind};
use crate::paint::{FramePlan, Ink, Mark};
use crate::render;
use crate::surface::{Point, Surface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Show the cursor preview (pointer entered the surface).
    ShowCursorPreview,
    /// Hide the cursor preview (pointer left the surface).
    HideCursorPreview,
    /// Place the cursor preview's top-left corner at these client coordinates.
    MoveCursorPreview { left: f64, top: f64 },
}

/// One drawn line between two consecutive pointer samples, in local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. `A` is the host's touch target type (see
/// [`PointerKind`]).
#[derive(Debug)]
pub struct EngineCore<A> {
    surface: Option<Surface>,
    rotation: f64,
    input: InputState<A>,
    current_point: Option<Point>,
    pending: Vec<Segment>,
    pending_clear: bool,
    touch_only: bool,
}

impl<A> Default for EngineCore<A> {
    fn default() -> Self {
        Self {
            surface: None,
            rotation: 0.0,
            input: InputState::Idle,
            current_point: None,
            pending: Vec::new(),
            pending_clear: false,
            touch_only: false,
        }
    }
}

impl<A: PartialEq> EngineCore<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Lifecycle ---

    /// Bind the core to a drawing buffer of the given size.
    pub fn mount(&mut self, width: f64, height: f64) {
        log::debug!("zoetrope surface mounted ({width}x{height})");
        self.surface = Some(Surface::new(width, height));
    }

    /// Detach from the surface and drop all drag state. Later events are no-ops.
    pub fn unmount(&mut self) {
        log::debug!("zoetrope surface unmounted");
        let touch_only = self.touch_only;
        *self = Self::default();
        self.touch_only = touch_only;
    }

    /// Update the client-space origin of the surface's bounding box.
    pub fn set_surface_origin(&mut self, origin: Point) {
        if let Some(surface) = self.surface.as_mut() {
            surface.origin = origin;
        }
    }

    /// Suppress cursor preview actions on devices without a hovering pointer.
    pub fn set_touch_only(&mut self, touch_only: bool) {
        self.touch_only = touch_only;
    }

    // --- Input events ---

    /// Start a stroke at `client`.
    pub fn on_pointer_down(&mut self, client: Point, kind: PointerKind<A>) {
        let Some(surface) = self.surface else {
            return;
        };
        let local = surface.client_to_local(client);
        let touch_anchor = match kind {
            PointerKind::Mouse => None,
            PointerKind::Touch { target } => target,
        };
        self.current_point = Some(local);
        self.input = InputState::Drawing { last: local, touch_anchor };
    }

    /// Track the pointer; while drawing, queue a segment from the previous sample.
    pub fn on_pointer_move(&mut self, client: Point, kind: PointerKind<A>, controls: &Controls) -> Vec<Action> {
        let Some(surface) = self.surface else {
            return Vec::new();
        };

        let mut actions = Vec::new();
        if !self.touch_only {
            let half = controls.width * 0.5;
            actions.push(Action::MoveCursorPreview { left: client.x - half, top: client.y - half });
        }

        let InputState::Drawing { last, .. } = &mut self.input else {
            return actions;
        };
        let end = surface.client_to_local(client);
        self.pending.push(Segment { start: *last, end });
        *last = end;
        self.current_point = Some(end);

        if let PointerKind::Touch { target } = kind {
            if self.input.slid_off(target.as_ref()) {
                self.end_drag(DragEnd::SlideOff);
            }
        }
        actions
    }

    /// Finish the stroke (mouse-up / touch-end).
    pub fn on_pointer_up(&mut self) {
        self.end_drag(DragEnd::Release);
    }

    /// The pointer entered the surface.
    pub fn on_pointer_enter(&mut self) -> Vec<Action> {
        if self.surface.is_none() || self.touch_only {
            return Vec::new();
        }
        vec![Action::ShowCursorPreview]
    }

    /// The pointer left the surface; ends any stroke in progress.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if self.surface.is_none() {
            return Vec::new();
        }
        self.end_drag(DragEnd::Leave);
        if self.touch_only {
            return Vec::new();
        }
        vec![Action::HideCursorPreview]
    }

    /// Reset all drag state. Every drag-terminating trigger funnels through here.
    pub fn end_drag(&mut self, reason: DragEnd) {
        if self.input.is_drawing() {
            log::debug!("stroke ended: {reason:?} ({} segments dropped)", self.pending.len());
        }
        self.current_point = None;
        self.pending.clear();
        self.input = InputState::Idle;
    }

    // --- Controls ---

    /// Ask for the buffer to be wiped on the next tick.
    pub fn request_clear(&mut self) {
        log::debug!("clear requested");
        self.pending_clear = true;
    }

    // --- Tick ---

    /// Advance one animation frame and return what to draw.
    ///
    /// Points are de-rotated with the rotation *after* this tick's advance,
    /// which is the angle the surface is displayed at while the frame is
    /// visible. Returns `None` when not mounted.
    pub fn tick(&mut self, controls: &Controls) -> Option<FramePlan> {
        let surface = self.surface?;

        let next = (self.rotation + controls.speed).rem_euclid(TAU);
        if next.is_finite() {
            self.rotation = next;
        }

        let clear = std::mem::take(&mut self.pending_clear);

        let mut marks = Vec::with_capacity(self.pending.len().max(1));
        if let Some(point) = self.current_point {
            if self.pending.is_empty() {
                marks.push(Mark::Dot { center: surface.derotate(point, self.rotation) });
            }
        }
        for segment in self.pending.drain(..) {
            marks.push(Mark::Line {
                from: surface.derotate(segment.start, self.rotation),
                to: surface.derotate(segment.end, self.rotation),
            });
        }

        Some(FramePlan { rotation: self.rotation, clear, ink: Ink::from_controls(controls), marks })
    }

    // --- Queries ---

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    #[must_use]
    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    /// Current rotation in radians within `[0, 2π)`.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_drawing()
    }

    /// Last pointer sample of the active stroke, in local coordinates.
    #[must_use]
    pub fn current_point(&self) -> Option<Point> {
        self.current_point
    }

    /// Segments queued since the last tick, oldest first.
    #[must_use]
    pub fn pending_segments(&self) -> &[Segment] {
        &self.pending
    }

    #[must_use]
    pub fn clear_pending(&self) -> bool {
        self.pending_clear
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore<Element>,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ContextUnavailable`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(EngineError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::ContextUnavailable)?;
        let mut core = EngineCore::new();
        core.mount(f64::from(canvas.width()), f64::from(canvas.height()));
        Ok(Self { canvas, ctx, core })
    }

    pub fn unmount(&mut self) {
        self.core.unmount();
    }

    // --- Delegated input ---

    pub fn set_surface_origin(&mut self, origin: Point) {
        self.core.set_surface_origin(origin);
    }

    pub fn set_touch_only(&mut self, touch_only: bool) {
        self.core.set_touch_only(touch_only);
    }

    pub fn on_pointer_down(&mut self, client: Point, kind: PointerKind<Element>) {
        self.core.on_pointer_down(client, kind);
    }

    pub fn on_pointer_move(&mut self, client: Point, kind: PointerKind<Element>, controls: &Controls) -> Vec<Action> {
        self.core.on_pointer_move(client, kind, controls)
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_pointer_up();
    }

    pub fn on_pointer_enter(&mut self) -> Vec<Action> {
        self.core.on_pointer_enter()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn end_drag(&mut self, reason: DragEnd) {
        self.core.end_drag(reason);
    }

    pub fn request_clear(&mut self) {
        self.core.request_clear();
    }

    // --- Render ---

    /// Run one tick: spin the canvas element and draw the queued marks.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Js`] if a style or `Canvas2D` call fails.
    pub fn render(&mut self, controls: &Controls) -> Result<(), EngineError> {
        let Some(plan) = self.core.tick(controls) else {
            return Ok(());
        };
        self.canvas
            .style()
            .set_property("transform", &plan.css_transform())?;
        render::draw(
            &self.ctx,
            &plan,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )?;
        Ok(())
    }

    #[must_use]
    pub fn rotation(&self) -> f64 {
        self.core.rotation()
    }
}
