//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Patrol Designer"</h1>
            <p class="text-muted">"Plan patrol positions and their points, then export them as JSON."</p>
        </header>
    }
}
