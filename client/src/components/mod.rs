//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the drawing surface and its control panel, reading and
//! writing the shared `Controls` and `PanelState` signals from context.

pub mod control_panel;
pub mod zoetrope;
