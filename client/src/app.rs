//! Root application component and context providers.

use canvas::controls::Controls;
use leptos::prelude::*;
use leptos_meta::{Style, Title, provide_meta_context};

use crate::components::zoetrope::Zoetrope;
use crate::state::panel::PanelState;
use crate::util::{config, device};

/// Root application component.
///
/// Provides the live [`Controls`] and the panel state as contexts so the
/// control panel writes and the frame loop reads the same signal.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let controls: RwSignal<Controls> = RwSignal::new(config::initial_controls());
    let panel = RwSignal::new(PanelState::new(device::is_touch_only()));

    provide_context(controls);
    provide_context(panel);

    view! {
        <Style id="zoetrope">{include_str!("../style/zoetrope.css")}</Style>
        <Title text="Zoetrope"/>
        <Zoetrope/>
    }
}
