//! Device capability detection and page-level style toggles.
//!
//! Browser-only; without the `csr` feature every function is a no-op that
//! reports a desktop-like device.

/// Media query matching devices with no hovering pointer (phones, tablets).
pub const TOUCH_ONLY_QUERY: &str = "(hover: none) and (pointer: coarse)";

/// Whether the primary input cannot hover, so a cursor preview makes no sense.
pub fn is_touch_only() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(TOUCH_ONLY_QUERY).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Hide (or restore) page scrolling so touch drags draw instead of scroll.
pub fn lock_page_scroll(locked: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(err) = result {
            log::warn!("page scroll lock failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}
