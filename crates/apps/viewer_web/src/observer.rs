use foundation::NoteId;
use playback::{INTERSECTION_THRESHOLD, VisibilityChange};
use stage::SECTION_OBSERVED_CLASS;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Convert observer entries into typed visibility changes, preserving the
/// reported order.
///
/// Entries whose target id is not a note ordinal are warned about and
/// skipped; they are not sections we created.
pub fn changes_from_entries(entries: &js_sys::Array) -> Vec<VisibilityChange> {
    let mut changes = Vec::with_capacity(entries.length() as usize);
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        let id = entry.target().id();
        let Ok(note) = id.parse::<NoteId>() else {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "observed element id is not a note ordinal: {id:?}"
            )));
            continue;
        };
        changes.push(VisibilityChange {
            note,
            is_intersecting: entry.is_intersecting(),
            ratio: entry.intersection_ratio(),
        });
    }
    changes
}

/// Register every sidecar section for visibility observation at the fixed
/// threshold.
pub fn observe_sections(
    document: &Document,
    callback: &js_sys::Function,
) -> Result<IntersectionObserver, JsValue> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(INTERSECTION_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback, &options)?;

    let sections = document.get_elements_by_class_name(SECTION_OBSERVED_CLASS);
    for i in 0..sections.length() {
        if let Some(el) = sections.item(i) {
            observer.observe(&el);
        }
    }
    Ok(observer)
}
