//! Main application component

use crate::browser_storage::BrowserStorage;
use crate::components::{
    export_buttons::ExportButtons, header::Header, map_dialog::MapDialog,
    position_card::PositionCard, preview_panel::PreviewPanel, token_panel::TokenPanel,
};
use leptos::prelude::*;
use patrol_designer_common::picker::can_open;
use patrol_designer_common::{AccessToken, ExportOptions, Notice, PickerSession, PlanStore};

/// Application state shared through context
#[derive(Clone, Copy)]
pub struct AppState {
    pub store: RwSignal<PlanStore>,
    pub token: RwSignal<AccessToken<BrowserStorage>>,
    pub include_media: RwSignal<bool>,
    pub picker: RwSignal<Option<PickerSession>>,
    pub notice: RwSignal<Option<Notice>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: RwSignal::new(PlanStore::new()),
            // read once at startup
            token: RwSignal::new(AccessToken::load(BrowserStorage)),
            include_media: RwSignal::new(false),
            picker: RwSignal::new(None),
            notice: RwSignal::new(None),
        }
    }

    pub fn options(&self) -> ExportOptions {
        ExportOptions {
            include_media_fields: self.include_media.get(),
            ..ExportOptions::default()
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.with(|t| can_open(t.get()))
    }
}

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();
    provide_context(state);

    let position_count = move || state.store.with(|s| s.len());

    view! {
        <div class="container">
            <Header />

            <TokenPanel />

            <div class="editor-grid">
                <section class="editor">
                    <Show
                        when=move || { position_count() > 0 }
                        fallback=|| view! { <p class="text-muted">"No positions. Press \"Add position\"."</p> }
                    >
                        {move || {
                            (0..position_count())
                                .map(|index| view! { <PositionCard index=index /> })
                                .collect_view()
                        }}
                    </Show>

                    <ExportButtons />
                </section>

                <aside class="preview">
                    <PreviewPanel />
                </aside>
            </div>

            <MapDialog />
        </div>
    }
}
