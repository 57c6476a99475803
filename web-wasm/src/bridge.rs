//! JavaScript bridge bindings
//!
//! Clipboard, file download and the Mapbox picker live in `/js/bridge.js`.
//! Only one map is mounted at a time.

use patrol_designer_common::{Error, LatLng, PickRequest};
use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

// ============================================
// extern declarations
// ============================================

#[wasm_bindgen(module = "/js/bridge.js")]
extern "C" {
    #[wasm_bindgen(js_name = "copyText", catch)]
    async fn copy_text_js(text: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "downloadText", catch)]
    fn download_text_js(text: &str, file_name: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_name = "mountMapPicker", catch)]
    fn mount_map_picker_js(
        container_id: &str,
        token: &str,
        options: JsValue,
        on_pick: &Closure<dyn FnMut(f64, f64)>,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "unmountMapPicker")]
    fn unmount_map_picker_js(handle: &JsValue);
}

fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

// ============================================
// Clipboard / download
// ============================================

pub async fn copy_text(text: &str) -> patrol_designer_common::Result<()> {
    copy_text_js(text)
        .await
        .map(|_| ())
        .map_err(|e| Error::Delivery(js_message(&e)))
}

pub fn download_text(text: &str, file_name: &str) -> patrol_designer_common::Result<()> {
    download_text_js(text, file_name).map_err(|e| Error::Delivery(js_message(&e)))
}

// ============================================
// Map picker
// ============================================

/// Options object handed to `mountMapPicker`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    initial: Option<LatLng>,
    center: LatLng,
    zoom: f64,
    style: &'static str,
}

impl From<&PickRequest> for MapOptions {
    fn from(request: &PickRequest) -> Self {
        Self {
            initial: request.initial,
            center: request.center,
            zoom: request.zoom,
            style: "light",
        }
    }
}

struct MountedMap {
    handle: JsValue,
    // keeps the click callback alive while the map exists
    _on_pick: Closure<dyn FnMut(f64, f64)>,
}

thread_local! {
    static ACTIVE_MAP: RefCell<Option<MountedMap>> = const { RefCell::new(None) };
}

/// Mounts the picker into `container_id`, replacing any map already shown.
///
/// `on_pick` runs once per click with the selected location.
pub fn show_map<F>(
    container_id: &str,
    token: &str,
    request: &PickRequest,
    mut on_pick: F,
) -> Result<(), String>
where
    F: FnMut(LatLng) + 'static,
{
    close_map();

    let options = serde_wasm_bindgen::to_value(&MapOptions::from(request))
        .map_err(|e| format!("map options: {}", e))?;
    let callback = Closure::<dyn FnMut(f64, f64)>::new(move |lat: f64, lng: f64| {
        on_pick(LatLng::new(lat, lng));
    });

    let handle = mount_map_picker_js(container_id, token, options, &callback)
        .map_err(|e| js_message(&e))?;

    ACTIVE_MAP.with(|slot| {
        *slot.borrow_mut() = Some(MountedMap {
            handle,
            _on_pick: callback,
        });
    });
    Ok(())
}

pub fn close_map() {
    ACTIVE_MAP.with(|slot| {
        if let Some(map) = slot.borrow_mut().take() {
            unmount_map_picker_js(&map.handle);
        }
    });
}
