//! Map token input

use crate::app::AppState;
use leptos::prelude::*;

#[component]
pub fn TokenPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let token = state.token;

    view! {
        <div class="settings-panel">
            <div class="form-group">
                <label>"Mapbox access token"</label>
                <input
                    type="text"
                    placeholder="pk.***"
                    prop:value=move || token.with(|t| t.get().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        token.update(|t| {
                            // the in-memory value still changes
                            if let Err(e) = t.set(value) {
                                gloo::console::warn!(format!("token not persisted: {}", e));
                            }
                        });
                    }
                />
            </div>
            <Show when=move || !state.has_token()>
                <p class="hint">"Enter a token to choose coordinates on the map."</p>
            </Show>
        </div>
    }
}
