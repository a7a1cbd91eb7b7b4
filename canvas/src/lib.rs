//! Rotating drawing surface engine for the zoetrope page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! drawing state of a continuously spinning canvas: translating pointer input
//! into stroke segments, advancing the rotation every animation frame, and
//! mapping captured points back into the canvas buffer's unrotated frame so
//! marks stay attached to the surface. The host UI layer is responsible only
//! for wiring DOM events, driving the frame loop, and owning the live
//! [`controls::Controls`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`surface`] | Points, the surface bounding box, and de-rotation |
//! | [`controls`] | Live control values, speed presets, and control changes |
//! | [`input`] | Pointer kinds and the drag state machine |
//! | [`paint`] | Per-tick frame plan (ink + marks) produced by the core |
//! | [`render`] | Draws a frame plan to a 2D context |
//! | [`color`] | Hex color parsing and normalization |
//! | [`error`] | Engine error type |
//! | [`consts`] | Shared numeric constants (surface size, control ranges, etc.) |

pub mod color;
pub mod consts;
pub mod controls;
pub mod engine;
pub mod error;
pub mod input;
pub mod paint;
pub mod render;
pub mod surface;
