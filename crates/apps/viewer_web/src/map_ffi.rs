//! FFI surface of the host map shim.
//!
//! Thin wrappers over the page's map engine glue. No state, no logic: all
//! payloads are JSON strings built by the `stage` crate.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initMap)]
    pub fn init_map(init_json: &str);

    #[wasm_bindgen(js_name = addMarker)]
    pub fn add_marker(marker_json: &str);

    #[wasm_bindgen(js_name = addRouteLine)]
    pub fn add_route_line(geojson: &str, layer_json: &str);

    #[wasm_bindgen(js_name = addLayer)]
    pub fn add_layer(layer_json: &str);

    /// Register the raster-DEM source and apply it as terrain.
    #[wasm_bindgen(js_name = setTerrain)]
    pub fn set_terrain(source_json: &str, terrain_json: &str);

    /// Fire-and-forget camera fly; a later call supersedes an in-flight one.
    #[wasm_bindgen(js_name = flyTo)]
    pub fn fly_to(lon: f64, lat: f64, duration_ms: f64, essential: bool);

    #[wasm_bindgen(js_name = easeTo)]
    pub fn ease_to(ease_json: &str);

    #[wasm_bindgen(js_name = getBearing)]
    pub fn get_bearing() -> f64;

    #[wasm_bindgen(js_name = getZoom)]
    pub fn get_zoom() -> f64;
}
