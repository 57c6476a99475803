//! Export and plan-level actions

use crate::app::AppState;
use crate::bridge;
use leptos::prelude::*;
use leptos::task::spawn_local;
use patrol_designer_common::{DeliveryMode, Notice, EXPORT_FILE_NAME};
use std::time::Duration;

const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[component]
pub fn ExportButtons() -> impl IntoView {
    let state = expect_context::<AppState>();
    let store = state.store;
    let notice = state.notice;

    let show_notice = move |value: Notice| {
        notice.set(Some(value.clone()));
        set_timeout(
            move || {
                // a newer notice stays up
                if notice.get_untracked().as_ref() == Some(&value) {
                    notice.set(None);
                }
            },
            NOTICE_DURATION,
        );
    };

    let export_json = move || {
        let options = state.options();
        store.with_untracked(|s| options.render(s.positions()))
    };

    let on_copy = move |_: leptos::ev::MouseEvent| match export_json() {
        Ok(text) => spawn_local(async move {
            let result = bridge::copy_text(&text).await;
            show_notice(Notice::from_result(DeliveryMode::Clipboard, &result));
        }),
        Err(e) => show_notice(Notice::from_result(DeliveryMode::Clipboard, &Err(e))),
    };

    let on_download = move |_: leptos::ev::MouseEvent| {
        let result = export_json().and_then(|text| bridge::download_text(&text, EXPORT_FILE_NAME));
        show_notice(Notice::from_result(DeliveryMode::File, &result));
    };

    view! {
        <div class="export-buttons">
            <button
                class="btn btn-secondary"
                on:click=move |_| store.update(|s| {
                    s.add_position();
                })
            >
                "Add position"
            </button>

            <button
                class="btn btn-secondary"
                on:click=move |_| {
                    state.picker.set(None);
                    store.update(|s| s.reset());
                }
            >
                "Reset"
            </button>

            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || state.include_media.get()
                    on:change=move |ev| state.include_media.set(event_target_checked(&ev))
                />
                "Include user and picture fields"
            </label>

            <button class="btn btn-primary" on:click=on_copy>
                "Copy JSON"
            </button>

            <button class="btn btn-primary" on:click=on_download>
                "Download JSON"
            </button>

            {move || notice.get().map(|n| {
                let class = if n.ok { "notice notice-ok" } else { "notice notice-error" };
                view! { <p class=class>{n.message}</p> }
            })}
        </div>
    }
}
