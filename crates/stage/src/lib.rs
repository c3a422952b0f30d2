//! Engine-agnostic stage content.
//!
//! Everything the host map engine and the sidecar panel display is decided
//! here: marker specs and popup HTML, sidecar section blocks, the route
//! polyline, the 3D scenery (terrain, sky, extruded buildings), and the
//! camera init/intro parameters. The viewer app only serializes these and
//! hands them across the FFI boundary.

pub mod camera;
pub mod marker;
pub mod popup;
pub mod route;
pub mod scenery;
pub mod sidecar;

pub use camera::{IntroSpin, MapInit};
pub use marker::{MarkerSpec, marker_element_id, markers_for_sequence};
pub use popup::PopupContent;
pub use route::{ROUTE_SOURCE_ID, route_layer_json, route_line_geojson};
pub use scenery::{
    TERRAIN_SOURCE_ID, buildings_layer_json, sky_layer_json, terrain_json, terrain_source_json,
};
pub use sidecar::{
    MARKER_HIGHLIGHT_CLASS, NAV_BAR_HIDDEN_CLASS, NAV_BAR_ID, SECTION_OBSERVED_CLASS,
    SECTION_VISIBLE_CLASS, SIDECAR_ID, SidecarBlock, SidecarSection, section_element_id,
    sections_for_sequence,
};
