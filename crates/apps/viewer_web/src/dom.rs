use foundation::{LngLat, NoteId};
use playback::Stage;
use stage::{
    MARKER_HIGHLIGHT_CLASS, NAV_BAR_HIDDEN_CLASS, NAV_BAR_ID, SECTION_OBSERVED_CLASS,
    SECTION_VISIBLE_CLASS, SIDECAR_ID, SidecarSection, marker_element_id, section_element_id,
};
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::map_ffi;

/// Build one observed section per note under the sidecar panel.
pub fn build_sidecar(document: &Document, sections: &[SidecarSection]) -> Result<(), JsValue> {
    let panel = document
        .get_element_by_id(SIDECAR_ID)
        .ok_or_else(|| JsValue::from_str("sidecar element not found"))?;

    for section in sections {
        let el = document.create_element("section")?;
        el.set_id(&section_element_id(section.id));
        el.set_class_name(SECTION_OBSERVED_CLASS);
        el.set_inner_html(&section.block.to_html());
        panel.append_child(&el)?;
    }
    Ok(())
}

/// DOM-backed stage: presentation classes on sections and markers, the nav
/// bar by id, camera moves through the map FFI.
pub struct DomStage {
    document: Document,
}

impl DomStage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn toggle_class(&self, element_id: &str, class: &str, on: bool) {
        if let Some(el) = self.document.get_element_by_id(element_id) {
            let _ = el.class_list().toggle_with_force(class, on);
        }
    }
}

impl Stage for DomStage {
    fn has_marker(&self, note: NoteId) -> bool {
        self.document
            .get_element_by_id(&marker_element_id(note))
            .is_some()
    }

    fn set_section_visible(&mut self, note: NoteId, visible: bool) {
        self.toggle_class(&section_element_id(note), SECTION_VISIBLE_CLASS, visible);
    }

    fn set_marker_highlighted(&mut self, note: NoteId, highlighted: bool) {
        self.toggle_class(&marker_element_id(note), MARKER_HIGHLIGHT_CLASS, highlighted);
    }

    fn set_nav_bar_visible(&mut self, visible: bool) {
        self.toggle_class(NAV_BAR_ID, NAV_BAR_HIDDEN_CLASS, !visible);
    }

    fn fly_to(&mut self, target: LngLat, duration_ms: u64, essential: bool) {
        map_ffi::fly_to(target.lon, target.lat, duration_ms as f64, essential);
    }
}
