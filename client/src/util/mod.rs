//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (animation frames, media queries,
//! DOM geometry, page attributes) from component logic so the components stay
//! small and the pure parts stay testable without a browser.

pub mod config;
pub mod device;
pub mod frame_loop;
pub mod pointer_input;
pub mod slider;
