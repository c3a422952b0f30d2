/// Geographic position in WGS84 degrees.
///
/// Convention:
/// - Longitude first, matching the GeoJSON `[lon, lat]` pair order used
///   throughout the wire formats.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LngLat {
    pub lon: f64,
    pub lat: f64,
}

impl LngLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// `[lon, lat]` pair for GeoJSON-style payloads.
    pub fn to_array(self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}
