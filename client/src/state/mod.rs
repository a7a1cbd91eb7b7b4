//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The live drawing parameters are `canvas::controls::Controls`, provided as
//! an `RwSignal` by the app root. The types here cover what only the page
//! cares about: the panel chrome and the cursor preview.

pub mod cursor_preview;
pub mod panel;
