//! Position and point editing cards

use super::fields::{CoordinateField, TextField};
use crate::app::AppState;
use leptos::prelude::*;
use patrol_designer_common::coordinate::format_coordinate;
use patrol_designer_common::{
    PickTarget, PickerSession, PlanStore, Point, PointEdit, PointField, Position, PositionEdit,
    PositionField,
};

fn position_text(
    store: RwSignal<PlanStore>,
    index: usize,
    read: fn(&Position) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || store.with(|s| s.position(index).map(read).unwrap_or_default())
}

fn position_edit(
    store: RwSignal<PlanStore>,
    index: usize,
    make: fn(String) -> PositionEdit,
) -> impl Fn(String) + Copy + Send + Sync + 'static {
    move |value| {
        store.update(|s| {
            s.update_position_field(index, make(value));
        })
    }
}

fn point_text(
    store: RwSignal<PlanStore>,
    position: usize,
    index: usize,
    read: fn(&Point) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || store.with(|s| s.point(position, index).map(read).unwrap_or_default())
}

fn point_edit(
    store: RwSignal<PlanStore>,
    position: usize,
    index: usize,
    make: fn(String) -> PointEdit,
) -> impl Fn(String) + Copy + Send + Sync + 'static {
    move |value| {
        store.update(|s| {
            s.update_point_field(position, index, make(value));
        })
    }
}

fn coordinate_status(pair: Option<patrol_designer_common::LatLng>) -> String {
    pair.map(|c| c.to_string())
        .unwrap_or_else(|| "Not selected".to_string())
}

#[component]
pub fn PositionCard(index: usize) -> impl IntoView {
    let state = expect_context::<AppState>();
    let store = state.store;

    let point_count = move || store.with(|s| s.position(index).map_or(0, |p| p.points.len()));
    let has_any = move || store.with(|s| s.position(index).is_some_and(|p| p.has_any_coordinate()));
    let status = move || store.with(|s| coordinate_status(s.position(index).and_then(|p| p.coordinates())));

    view! {
        <div class="card position-card">
            <div class="card-header">
                <h3>{format!("Position #{}", index + 1)}</h3>
                <span class="badge">{move || format!("{} point(s)", point_count())}</span>
                <button
                    class="btn btn-danger btn-small"
                    on:click=move |_| store.update(|s| {
                        s.remove_position(index);
                    })
                >
                    "Remove position"
                </button>
            </div>

            <TextField
                label="Name"
                placeholder="e.g. North gate"
                value=position_text(store, index, |p| p.name.clone())
                on_input=position_edit(store, index, PositionEdit::Name)
            />
            <TextField
                label="Description"
                placeholder="Route notes, access hours"
                value=position_text(store, index, |p| p.description.clone())
                on_input=position_edit(store, index, PositionEdit::Description)
            />

            <div class="coordinates">
                <CoordinateField
                    label="Latitude"
                    value=position_text(store, index, |p| format_coordinate(p.latitude))
                    on_change=move |text: String| store.update(|s| {
                        s.update_position_field(index, PositionField::Latitude.edit_from_text(&text));
                    })
                />
                <CoordinateField
                    label="Longitude"
                    value=position_text(store, index, |p| format_coordinate(p.longitude))
                    on_change=move |text: String| store.update(|s| {
                        s.update_position_field(index, PositionField::Longitude.edit_from_text(&text));
                    })
                />
                <span class="coordinate-status">{status}</span>
                <button
                    class="btn btn-secondary btn-small"
                    disabled=move || !state.has_token()
                    on:click=move |_| state.picker.set(Some(PickerSession::open(PickTarget::Position(index))))
                >
                    "Pick on map"
                </button>
                <Show when=has_any>
                    <button
                        class="btn btn-secondary btn-small"
                        on:click=move |_| store.update(|s| {
                            s.clear_position_coordinates(index);
                        })
                    >
                        "Clear"
                    </button>
                </Show>
            </div>

            <div class="points">
                <Show
                    when=move || { point_count() > 0 }
                    fallback=|| view! { <p class="text-muted">"No points yet."</p> }
                >
                    {move || {
                        (0..point_count())
                            .map(|i| view! { <PointCard position=index index=i /> })
                            .collect_view()
                    }}
                </Show>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| store.update(|s| {
                        s.add_point(index);
                    })
                >
                    "Add point"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn PointCard(position: usize, index: usize) -> impl IntoView {
    let state = expect_context::<AppState>();
    let store = state.store;

    let has_any = move || {
        store.with(|s| s.point(position, index).is_some_and(|p| p.has_any_coordinate()))
    };
    let status = move || {
        store.with(|s| coordinate_status(s.point(position, index).and_then(|p| p.coordinates())))
    };

    view! {
        <div class="card point-card">
            <div class="card-header">
                <h4>{format!("Point #{}", index + 1)}</h4>
                <button
                    class="btn btn-danger btn-small"
                    on:click=move |_| store.update(|s| {
                        s.remove_point(position, index);
                    })
                >
                    "Remove"
                </button>
            </div>

            <TextField
                label="Name"
                placeholder="e.g. Camera-01"
                value=point_text(store, position, index, |p| p.name.clone())
                on_input=point_edit(store, position, index, PointEdit::Name)
            />
            <TextField
                label="Description"
                placeholder="What to check here"
                value=point_text(store, position, index, |p| p.description.clone())
                on_input=point_edit(store, position, index, PointEdit::Description)
            />

            <Show when=move || state.include_media.get()>
                <TextField
                    label="User ID"
                    placeholder="Assigned guard"
                    value=point_text(store, position, index, |p| p.user_id.clone())
                    on_input=point_edit(store, position, index, PointEdit::UserId)
                />
                <TextField
                    label="Picture description"
                    placeholder="What the photo should show"
                    value=point_text(store, position, index, |p| p.picture_description.clone())
                    on_input=point_edit(store, position, index, PointEdit::PictureDescription)
                />
                <TextField
                    label="Picture URL"
                    placeholder="https://"
                    value=point_text(store, position, index, |p| p.picture_url.clone())
                    on_input=point_edit(store, position, index, PointEdit::PictureUrl)
                />
            </Show>

            <div class="coordinates">
                <CoordinateField
                    label="Latitude"
                    value=point_text(store, position, index, |p| format_coordinate(p.latitude))
                    on_change=move |text: String| store.update(|s| {
                        s.update_point_field(position, index, PointField::Latitude.edit_from_text(&text));
                    })
                />
                <CoordinateField
                    label="Longitude"
                    value=point_text(store, position, index, |p| format_coordinate(p.longitude))
                    on_change=move |text: String| store.update(|s| {
                        s.update_point_field(position, index, PointField::Longitude.edit_from_text(&text));
                    })
                />
                <span class="coordinate-status">{status}</span>
                <button
                    class="btn btn-secondary btn-small"
                    disabled=move || !state.has_token()
                    on:click=move |_| {
                        let target = PickTarget::Point { position, index };
                        state.picker.set(Some(PickerSession::open(target)));
                    }
                >
                    "Pick on map"
                </button>
                <Show when=has_any>
                    <button
                        class="btn btn-secondary btn-small"
                        on:click=move |_| store.update(|s| {
                            s.clear_point_coordinates(position, index);
                        })
                    >
                        "Clear"
                    </button>
                </Show>
            </div>
        </div>
    }
}
