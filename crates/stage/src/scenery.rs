use serde_json::json;

/// Source id of the raster DEM that drives 3D terrain.
pub const TERRAIN_SOURCE_ID: &str = "mapbox-dem";

/// Terrain height exaggeration.
pub const TERRAIN_EXAGGERATION: f64 = 1.5;

/// Layer id of the sky/atmosphere backdrop.
pub const SKY_LAYER_ID: &str = "sky";

/// Layer id of the extruded-buildings layer.
pub const BUILDINGS_LAYER_ID: &str = "add-3d-buildings";

/// Raster-DEM source definition for the terrain.
pub fn terrain_source_json() -> serde_json::Value {
    json!({
        "type": "raster-dem",
        "url": "mapbox://mapbox.mapbox-terrain-dem-v1",
        "tileSize": 512,
        "maxzoom": 14,
    })
}

/// Terrain binding the host applies via `setTerrain`.
pub fn terrain_json() -> serde_json::Value {
    json!({
        "source": TERRAIN_SOURCE_ID,
        "exaggeration": TERRAIN_EXAGGERATION,
    })
}

/// Sky layer providing the backdrop and lighting for the terrain.
pub fn sky_layer_json() -> serde_json::Value {
    json!({
        "id": SKY_LAYER_ID,
        "type": "sky",
        "paint": {
            "sky-type": "atmosphere",
            "sky-atmosphere-sun": [0.0, 0.0],
            "sky-atmosphere-sun-intensity": 15,
        },
    })
}

/// Fill-extrusion layer over the basemap's building footprints.
///
/// Heights interpolate in over a narrow zoom band so buildings rise
/// smoothly as the camera closes in.
pub fn buildings_layer_json() -> serde_json::Value {
    json!({
        "id": BUILDINGS_LAYER_ID,
        "source": "composite",
        "source-layer": "building",
        "filter": ["==", "extrude", "true"],
        "type": "fill-extrusion",
        "minzoom": 15,
        "paint": {
            "fill-extrusion-color": "#aaa",
            "fill-extrusion-height": [
                "interpolate",
                ["linear"],
                ["zoom"],
                15,
                0,
                15.05,
                ["get", "height"],
            ],
            "fill-extrusion-base": [
                "interpolate",
                ["linear"],
                ["zoom"],
                15,
                0,
                15.05,
                ["get", "min_height"],
            ],
            "fill-extrusion-opacity": 0.6,
        },
    })
}
