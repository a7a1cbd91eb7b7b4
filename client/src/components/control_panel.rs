//! Floating panel for the live drawing controls.
//!
//! Every edit goes through `Controls::apply`, so clamping and color
//! normalization happen in one place and the frame loop sees the new value on
//! its next tick.

use canvas::consts::{OPACITY_STEP, SPEED_MAX, SPEED_STEP, WIDTH_MAX};
use canvas::controls::{ControlChange, Controls, SpeedPreset};
use leptos::prelude::*;

use crate::state::panel::{PANEL_NOTE, PanelState, RELATED_LINK_URL};
use crate::util::slider::{format_opacity, format_speed, format_width, parse_slider_value};

/// Tolerance when matching the current speed against a preset.
const PRESET_MATCH_EPSILON: f64 = 1e-9;

/// Control panel with speed presets, sliders, color, erase and clear.
#[component]
pub fn ControlPanel() -> impl IntoView {
    let controls = expect_context::<RwSignal<Controls>>();
    let panel = expect_context::<RwSignal<PanelState>>();

    let change = move |change: ControlChange| controls.update(|c| c.apply(change));
    let on_slider = move |raw: String, make: fn(f64) -> ControlChange| {
        if let Some(value) = parse_slider_value(&raw) {
            change(make(value));
        }
    };

    view! {
        <aside class="zoetrope-panel" class:zoetrope-panel--collapsed=move || panel.get().collapsed>
            <header class="zoetrope-panel__title-bar">
                <span class="zoetrope-panel__title">"Controls"</span>
                <button
                    class="btn zoetrope-panel__toggle"
                    title="Toggle panel"
                    on:click=move |_| panel.update(PanelState::toggle_collapsed)
                >
                    {move || if panel.get().collapsed { "+" } else { "−" }}
                </button>
            </header>

            <Show when=move || !panel.get().collapsed>
                <div class="zoetrope-panel__body">
                    <div class="zoetrope-panel__row">
                        <span class="zoetrope-panel__label">"speed preset"</span>
                        <div class="zoetrope-panel__presets">{preset_buttons(controls)}</div>
                    </div>

                    <label class="zoetrope-panel__row">
                        <span class="zoetrope-panel__label">"speed"</span>
                        <input
                            type="range"
                            min="0"
                            max=SPEED_MAX.to_string()
                            step=SPEED_STEP.to_string()
                            prop:value=move || controls.get().speed.to_string()
                            on:input=move |ev| on_slider(event_target_value(&ev), ControlChange::Speed)
                        />
                        <span class="zoetrope-panel__value">{move || format_speed(controls.get().speed)}</span>
                    </label>

                    <label class="zoetrope-panel__row">
                        <span class="zoetrope-panel__label">"color"</span>
                        <input
                            type="color"
                            prop:value=move || controls.get().color
                            on:input=move |ev| change(ControlChange::Color(event_target_value(&ev)))
                        />
                        <span class="zoetrope-panel__value">{move || controls.get().color}</span>
                    </label>

                    <label class="zoetrope-panel__row">
                        <span class="zoetrope-panel__label">"opacity"</span>
                        <input
                            type="range"
                            min="0"
                            max="1"
                            step=OPACITY_STEP.to_string()
                            prop:value=move || controls.get().opacity.to_string()
                            on:input=move |ev| on_slider(event_target_value(&ev), ControlChange::Opacity)
                        />
                        <span class="zoetrope-panel__value">{move || format_opacity(controls.get().opacity)}</span>
                    </label>

                    <label class="zoetrope-panel__row">
                        <span class="zoetrope-panel__label">"width"</span>
                        <input
                            type="range"
                            min="0"
                            max=WIDTH_MAX.to_string()
                            step="1"
                            prop:value=move || controls.get().width.to_string()
                            on:input=move |ev| on_slider(event_target_value(&ev), ControlChange::Width)
                        />
                        <span class="zoetrope-panel__value">{move || format_width(controls.get().width)}</span>
                    </label>

                    <label class="zoetrope-panel__row">
                        <span class="zoetrope-panel__label">"erase"</span>
                        <input
                            type="checkbox"
                            prop:checked=move || controls.get().erase
                            on:change=move |ev| change(ControlChange::Erase(event_target_checked(&ev)))
                        />
                    </label>

                    <button class="btn zoetrope-panel__clear" on:click=move |_| panel.update(PanelState::request_clear)>
                        "clear"
                    </button>

                    <p class="zoetrope-panel__note">{PANEL_NOTE}</p>
                    <a class="btn zoetrope-panel__link" href=RELATED_LINK_URL>
                        "Related link"
                    </a>
                </div>
            </Show>
        </aside>
    }
}

/// One button per speed preset; the one matching the current speed is marked active.
fn preset_buttons(controls: RwSignal<Controls>) -> impl IntoView {
    SpeedPreset::all()
        .into_iter()
        .map(|preset| {
            let active = move || (controls.get().speed - preset.speed()).abs() < PRESET_MATCH_EPSILON;
            view! {
                <button
                    class="btn zoetrope-panel__preset"
                    class:zoetrope-panel__preset--active=active
                    title=format!("One turn every {} frames", preset.divisor())
                    on:click=move |_| controls.update(|c| c.apply(ControlChange::Preset(preset)))
                >
                    {preset.label()}
                </button>
            }
        })
        .collect_view()
}
