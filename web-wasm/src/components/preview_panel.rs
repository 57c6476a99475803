//! Live preview of the plan and its JSON export

use crate::app::AppState;
use leptos::prelude::*;
use patrol_designer_common::preview::{summarize, PositionSummary};

fn summary_card(summary: PositionSummary) -> impl IntoView {
    let coordinates = summary.coordinate_label();
    let badge = format!("{} point(s)", summary.point_count());
    let points = summary
        .points
        .into_iter()
        .map(|point| {
            let coordinates = point.coordinate_label();
            view! {
                <li>
                    <strong>{point.title}</strong>
                    <span class="text-muted">{point.description}</span>
                    <span class="coordinates">{coordinates}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="preview-card">
            <div class="card-header">
                <h4>{format!("{}. {}", summary.number, summary.title)}</h4>
                <span class="badge">{badge}</span>
            </div>
            <p class="text-muted">{summary.description}</p>
            <p class="coordinates">{coordinates}</p>
            <ul>{points}</ul>
        </div>
    }
}

#[component]
pub fn PreviewPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let store = state.store;

    let total_points = move || store.with(|s| s.point_count());
    let cards = move || {
        let summaries = store.with(|s| summarize(s.positions()));
        summaries.into_iter().map(summary_card).collect_view()
    };
    let json = move || {
        let options = state.options();
        store.with(|s| options.render(s.positions()))
            .unwrap_or_else(|e| format!("// {}", e))
    };

    view! {
        <div class="preview-panel">
            <div class="card-header">
                <h2>"Preview"</h2>
                <span class="badge">{move || format!("{} point(s) total", total_points())}</span>
            </div>
            {cards}
            <h3>"JSON"</h3>
            <pre class="json-preview">{json}</pre>
        </div>
    }
}
