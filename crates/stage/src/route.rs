use notes::NoteSequence;
use serde_json::json;

/// Source and layer id for the route polyline.
pub const ROUTE_SOURCE_ID: &str = "route";

/// Route line paint.
pub const ROUTE_LINE_COLOR: &str = "#009";
pub const ROUTE_LINE_WIDTH: f64 = 8.0;

/// GeoJSON `LineString` Feature over every note coordinate in sequence
/// order.
pub fn route_line_geojson(sequence: &NoteSequence) -> serde_json::Value {
    json!({
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "LineString",
            "coordinates": sequence.coordinates(),
        },
    })
}

/// Layer definition the host adds over the route source.
pub fn route_layer_json() -> serde_json::Value {
    json!({
        "id": ROUTE_SOURCE_ID,
        "type": "line",
        "source": ROUTE_SOURCE_ID,
        "layout": {
            "line-join": "round",
            "line-cap": "round",
        },
        "paint": {
            "line-color": ROUTE_LINE_COLOR,
            "line-width": ROUTE_LINE_WIDTH,
        },
    })
}
