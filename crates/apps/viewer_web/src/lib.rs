//! Wasm viewer app.
//!
//! Fetches the geonote document, hands the map init/markers/route to the
//! host map shim, builds the sidecar DOM, and wires one
//! `IntersectionObserver` into the playback controller. A malformed or
//! empty document is terminal: the error goes to the console and nothing
//! is rendered.

use std::cell::RefCell;

use console_error_panic_hook::set_once;
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use foundation::NoteId;
use notes::{CoordinateIndex, NoteSequence};
use playback::{PlaybackController, ReportLog};
use stage::{
    IntroSpin, MapInit, buildings_layer_json, markers_for_sequence, route_layer_json,
    route_line_geojson, sections_for_sequence, sky_layer_json, terrain_json, terrain_source_json,
};

mod dom;
mod map_ffi;
mod observer;

use dom::DomStage;

struct App {
    controller: PlaybackController,
    stage: DomStage,
    log: ReportLog,
    // Kept alive for the page session.
    _observer: web_sys::IntersectionObserver,
    _observer_callback: Closure<dyn FnMut(js_sys::Array)>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    set_once();
}

/// Fetch the geonote document at `url` and bring up the viewer.
#[wasm_bindgen]
pub fn run(url: String) {
    spawn_local(async move {
        if let Err(err) = run_inner(&url).await {
            web_sys::console::error_1(&err);
        }
    });
}

async fn run_inner(url: &str) -> Result<(), JsValue> {
    let text = fetch_document(url).await?;
    let sequence =
        NoteSequence::parse_json(&text).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    map_ffi::init_map(&MapInit::for_sequence(&sequence).init_json().to_string());
    for marker in markers_for_sequence(&sequence) {
        map_ffi::add_marker(&marker.init_json().to_string());
    }
    map_ffi::add_route_line(
        &route_line_geojson(&sequence).to_string(),
        &route_layer_json().to_string(),
    );
    map_ffi::set_terrain(
        &terrain_source_json().to_string(),
        &terrain_json().to_string(),
    );
    map_ffi::add_layer(&sky_layer_json().to_string());
    map_ffi::add_layer(&buildings_layer_json().to_string());

    dom::build_sidecar(&document, &sections_for_sequence(&sequence))?;

    let controller =
        PlaybackController::new(CoordinateIndex::from_sequence(&sequence), NoteId::new(0));

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
        let changes = observer::changes_from_entries(&entries);
        APP.with(|app| {
            if let Some(app) = app.borrow_mut().as_mut() {
                app.controller.process(&changes, &mut app.stage, &mut app.log);
                for report in app.log.drain() {
                    web_sys::console::error_1(&JsValue::from_str(&report.to_string()));
                }
            }
        });
    });
    let observer = observer::observe_sections(&document, callback.as_ref().unchecked_ref())?;

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            controller,
            stage: DomStage::new(document),
            log: ReportLog::new(),
            _observer: observer,
            _observer_callback: callback,
        });
    });

    Ok(())
}

/// Entry point for the host map shim's `load` event.
///
/// Deferring to the load event keeps the intro sweep from sampling the
/// camera before the map exists.
#[wasm_bindgen]
pub fn map_loaded() {
    if let Err(err) = schedule_intro_spin() {
        web_sys::console::error_1(&err);
    }
}

/// Play the one-shot intro camera sweep after its fixed delay.
fn schedule_intro_spin() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let spin = IntroSpin::default();
    let cb = Closure::once_into_js(move || {
        let ease = spin.ease_json(map_ffi::get_bearing(), map_ffi::get_zoom());
        map_ffi::ease_to(&ease.to_string());
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        spin.delay_ms as i32,
    )?;
    Ok(())
}

async fn fetch_document(url: &str) -> Result<String, JsValue> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "fetching geonote document failed: HTTP {}",
            resp.status()
        )));
    }
    resp.text()
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
