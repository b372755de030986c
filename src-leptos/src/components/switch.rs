//! Toggle switch bound to a boolean owned by the caller

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Checkbox that fired the event, if it was one.
fn event_target_input(ev: &web_sys::Event) -> Option<web_sys::HtmlInputElement> {
    ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
}

/// Relay a reported value to the owner. Returns the value the input has to be
/// reset to when the owner did not take the change.
fn relay_change(
    reported: Option<bool>,
    checked: Signal<bool>,
    on_change: Callback<bool>,
) -> Option<bool> {
    let reported = reported?;
    on_change.run(reported);
    let owner_value = checked.get_untracked();
    (owner_value != reported).then_some(owner_value)
}

pub(crate) fn track_class(checked: bool) -> &'static str {
    if checked {
        "switch-track switch-track--on"
    } else {
        "switch-track switch-track--off"
    }
}

pub(crate) fn knob_class(checked: bool) -> &'static str {
    if checked {
        "switch-knob switch-knob--on"
    } else {
        "switch-knob switch-knob--off"
    }
}

/// Holds no state: `on_change` receives whatever the input reports, and the
/// owner decides whether `checked` follows.
#[component]
pub fn Switch(
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
    #[prop(optional, into)] label: Option<String>,
) -> impl IntoView {
    view! {
        <label class="switch">
            <span class="switch-control">
                <input
                    type="checkbox"
                    class="sr-only"
                    prop:checked=move || checked.get()
                    on:change=move |ev| {
                        let input = event_target_input(&ev);
                        let reported = input.as_ref().map(web_sys::HtmlInputElement::checked);
                        if let (Some(input), Some(value)) =
                            (input, relay_change(reported, checked, on_change))
                        {
                            input.set_checked(value);
                        }
                    }
                />
                <span class=move || track_class(checked.get())></span>
                <span class=move || knob_class(checked.get())></span>
            </span>
            {label.map(|label| view! { <span class="switch-label">{label}</span> })}
        </label>
    }
}
