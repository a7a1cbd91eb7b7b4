//! Rendering: draws a frame plan to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only [`FramePlan`] and produces pixels; it does not
//! mutate any engine state. Marks accumulate in the buffer across frames;
//! only a plan with `clear` set wipes it.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::paint::{FramePlan, Ink, Mark};
use crate::surface::Point;

/// Draw one frame.
///
/// `width` and `height` are the buffer dimensions in pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, plan: &FramePlan, width: f64, height: f64) -> Result<(), JsValue> {
    if plan.clear {
        ctx.clear_rect(0.0, 0.0, width, height);
    }
    if plan.marks.is_empty() {
        return Ok(());
    }

    ctx.save();
    ctx.set_global_alpha(plan.ink.alpha);
    for mark in &plan.marks {
        match *mark {
            Mark::Dot { center } => draw_dot(ctx, center, &plan.ink)?,
            Mark::Line { from, to } => draw_line(ctx, from, to, &plan.ink),
        }
    }
    ctx.restore();
    Ok(())
}

fn draw_dot(ctx: &CanvasRenderingContext2d, center: Point, ink: &Ink) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, ink.width * 0.5, 0.0, TAU)?;
    ctx.set_fill_style_str(&ink.color);
    ctx.fill();
    Ok(())
}

fn draw_line(ctx: &CanvasRenderingContext2d, from: Point, to: Point, ink: &Ink) {
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.set_stroke_style_str(&ink.color);
    ctx.set_line_width(ink.width);
    ctx.set_line_cap("round");
    ctx.stroke();
}
