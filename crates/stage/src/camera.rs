use foundation::LngLat;
use notes::NoteSequence;
use serde_json::json;

/// Initial zoom level.
const INIT_ZOOM: f64 = 15.5;

/// Initial camera pitch in degrees.
const INIT_PITCH_DEG: f64 = 45.0;

/// Initial camera bearing in degrees.
const INIT_BEARING_DEG: f64 = -17.6;

/// Basemap style the host loads.
const INIT_STYLE: &str = "mapbox://styles/mapbox/light-v11";

/// Initial map view, centered on the first note.
#[derive(Debug, Clone, PartialEq)]
pub struct MapInit {
    pub center: LngLat,
    pub zoom: f64,
    pub pitch_deg: f64,
    pub bearing_deg: f64,
    pub antialias: bool,
    pub style: String,
}

impl MapInit {
    pub fn for_sequence(sequence: &NoteSequence) -> Self {
        Self {
            center: sequence.first().coord,
            zoom: INIT_ZOOM,
            pitch_deg: INIT_PITCH_DEG,
            bearing_deg: INIT_BEARING_DEG,
            antialias: true,
            style: INIT_STYLE.to_string(),
        }
    }

    /// JSON payload the host map shim consumes to create the map.
    pub fn init_json(&self) -> serde_json::Value {
        json!({
            "center": self.center.to_array(),
            "zoom": self.zoom,
            "pitch": self.pitch_deg,
            "bearing": self.bearing_deg,
            "antialias": self.antialias,
            "style": self.style,
        })
    }
}

/// The delayed camera sweep played once after load: rotate the bearing,
/// raise the pitch and nudge the zoom over one long ease.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroSpin {
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub bearing_delta_deg: f64,
    pub pitch_deg: f64,
    pub zoom_factor: f64,
}

impl Default for IntroSpin {
    fn default() -> Self {
        Self {
            delay_ms: 300,
            duration_ms: 9000,
            bearing_delta_deg: 180.0,
            pitch_deg: 70.0,
            zoom_factor: 1.1,
        }
    }
}

impl IntroSpin {
    /// Ease payload given the camera state at the moment the spin starts.
    pub fn ease_json(&self, current_bearing_deg: f64, current_zoom: f64) -> serde_json::Value {
        json!({
            "bearing": current_bearing_deg + self.bearing_delta_deg,
            "pitch": self.pitch_deg,
            "zoom": current_zoom * self.zoom_factor,
            "duration": self.duration_ms,
        })
    }
}
