use foundation::{LngLat, NoteId};
use notes::NoteSequence;
use serde_json::json;

use crate::popup::{POPUP_MAX_WIDTH_PX, POPUP_OFFSET_PX, PopupContent};

/// DOM element id of the marker bound to a note ordinal.
///
/// Naming convention: `"marker-" + ordinal`, shared with the stylesheet and
/// the host map shim.
pub fn marker_element_id(id: NoteId) -> String {
    format!("marker-{id}")
}

/// One map marker, bound 1:1 to a note's coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: NoteId,
    pub coord: LngLat,
    /// Route-points and payload-less notes carry no popup.
    pub popup: Option<PopupContent>,
}

impl MarkerSpec {
    /// JSON payload the host map shim consumes to create this marker.
    pub fn init_json(&self) -> serde_json::Value {
        json!({
            "elementId": marker_element_id(self.id),
            "lngLat": self.coord.to_array(),
            "popupHtml": self.popup.as_ref().map(PopupContent::to_html),
            "popupOffset": POPUP_OFFSET_PX,
            "popupMaxWidth": format!("{POPUP_MAX_WIDTH_PX}px"),
        })
    }
}

/// Markers for every note, in sequence order.
pub fn markers_for_sequence(sequence: &NoteSequence) -> Vec<MarkerSpec> {
    sequence
        .iter()
        .map(|note| MarkerSpec {
            id: note.id,
            coord: note.coord,
            popup: PopupContent::for_payload(&note.payload),
        })
        .collect()
}
