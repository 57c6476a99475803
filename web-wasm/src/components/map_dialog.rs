//! Coordinate picker dialog

use crate::app::AppState;
use crate::bridge;
use leptos::prelude::*;
use patrol_designer_common::{Notice, PickTarget};
use std::time::Duration;

/// Element the map is mounted into; always present so the map can attach
pub const MAP_CONTAINER_ID: &str = "map-picker";

fn target_label(target: PickTarget) -> String {
    match target {
        PickTarget::Position(i) => format!("Position #{}", i + 1),
        PickTarget::Point { position, index } => {
            format!("Position #{} / Point #{}", position + 1, index + 1)
        }
    }
}

#[component]
pub fn MapDialog() -> impl IntoView {
    let state = expect_context::<AppState>();
    let store = state.store;
    let picker = state.picker;

    Effect::new(move |_| match picker.get() {
        Some(session) => {
            let request = store.with_untracked(|s| session.request(s));
            let token = state.token.with_untracked(|t| t.get().to_string());
            // wait for the container to become visible
            set_timeout(
                move || {
                    let on_pick = move |pair| {
                        store.update(|s| {
                            session.apply(s, pair);
                        });
                    };
                    if let Err(e) = bridge::show_map(MAP_CONTAINER_ID, &token, &request, on_pick) {
                        gloo::console::error!(format!("map picker failed: {}", e));
                        state.notice.set(Some(Notice {
                            ok: false,
                            message: format!("Map failed: {}", e),
                        }));
                    }
                },
                Duration::ZERO,
            );
        }
        None => bridge::close_map(),
    });

    let is_open = move || picker.with(Option::is_some);
    let title = move || {
        picker
            .with(|p| p.as_ref().map(|s| target_label(s.target())))
            .unwrap_or_default()
    };
    let current = move || {
        let target = picker.with(|p| p.as_ref().map(|s| s.target()));
        target
            .and_then(|t| store.with(|s| t.current(s)))
            .map(|c| c.to_string())
            .unwrap_or_else(|| "Click the map to choose a location.".to_string())
    };

    view! {
        <div
            class="dialog-backdrop"
            style:display=move || if is_open() { "flex" } else { "none" }
        >
            <div class="dialog">
                <div class="card-header">
                    <h2>"Select coordinates"</h2>
                    <span class="text-muted">{title}</span>
                </div>
                <div id=MAP_CONTAINER_ID class="map-container"></div>
                <p class="coordinates">{current}</p>
                <div class="dialog-footer">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| picker.update(|p| {
                            if let Some(session) = p.as_mut() {
                                session.close();
                            }
                            *p = None;
                        })
                    >
                        "Done"
                    </button>
                </div>
            </div>
        </div>
    }
}
