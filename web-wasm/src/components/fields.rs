//! Labelled input fields

use leptos::prelude::*;

/// Free-text input; every keystroke is forwarded
#[component]
pub fn TextField<V, F>(
    label: &'static str,
    placeholder: &'static str,
    value: V,
    on_input: F,
) -> impl IntoView
where
    V: Fn() -> String + Send + Sync + 'static,
    F: Fn(String) + Send + Sync + 'static,
{
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="text"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_input(event_target_value(&ev))
            />
        </div>
    }
}

/// Numeric coordinate input.
///
/// Committed on change rather than per keystroke so that partial text such
/// as `"47."` is not normalized away while the user is still typing.
#[component]
pub fn CoordinateField<V, F>(label: &'static str, value: V, on_change: F) -> impl IntoView
where
    V: Fn() -> String + Send + Sync + 'static,
    F: Fn(String) + Send + Sync + 'static,
{
    view! {
        <div class="form-group coordinate">
            <label>{label}</label>
            <input
                type="text"
                inputmode="decimal"
                placeholder="not set"
                prop:value=value
                on:change=move |ev| on_change(event_target_value(&ev))
            />
        </div>
    }
}
