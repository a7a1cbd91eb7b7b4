//! Initial control values from the page.
//!
//! The host page may seed the panel by putting a JSON object in a
//! `data-zoetrope-controls` attribute on `<body>`. Every field is optional;
//! malformed JSON is logged and the defaults are used.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use canvas::controls::Controls;

/// Body attribute holding the initial controls as JSON.
pub const CONTROLS_ATTRIBUTE: &str = "data-zoetrope-controls";

/// Resolve controls from the raw attribute value, if any.
#[must_use]
pub fn controls_from_attribute(raw: Option<&str>) -> Controls {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Controls::default();
    };
    match Controls::from_json(raw) {
        Ok(controls) => controls,
        Err(err) => {
            log::warn!("ignoring {CONTROLS_ATTRIBUTE}: {err}");
            Controls::default()
        }
    }
}

/// Controls to start the page with.
pub fn initial_controls() -> Controls {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|body| body.get_attribute(CONTROLS_ATTRIBUTE));
        controls_from_attribute(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        Controls::default()
    }
}
