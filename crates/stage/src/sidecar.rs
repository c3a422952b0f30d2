use foundation::NoteId;
use notes::{NotePayload, NoteSequence};

use crate::popup::{escape_attr, escape_text};

/// Width of images rendered in the sidecar panel.
pub const SIDECAR_IMAGE_WIDTH_PX: u32 = 300;

/// Class that marks an element as an observed section.
pub const SECTION_OBSERVED_CLASS: &str = "hidden";

/// Class applied to a section while it is in view.
pub const SECTION_VISIBLE_CLASS: &str = "visible";

/// Class applied to a marker while its section is in view.
pub const MARKER_HIGHLIGHT_CLASS: &str = "highlighted";

/// Element id of the scrollable sidecar panel.
pub const SIDECAR_ID: &str = "sidecar";

/// Element id of the navigation bar.
pub const NAV_BAR_ID: &str = "navbar";

/// Class that hides the navigation bar.
pub const NAV_BAR_HIDDEN_CLASS: &str = "navbar-hidden";

/// DOM element id of a note's sidecar section: the bare decimal ordinal.
pub fn section_element_id(id: NoteId) -> String {
    id.to_string()
}

/// Rendered content of one sidecar section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidecarBlock {
    Image { src: String },
    Paragraph { body: String },
    Audio { src: String },
    /// Route-points and payload-less notes scroll as empty sections.
    Empty,
}

impl SidecarBlock {
    pub fn for_payload(payload: &NotePayload) -> Self {
        match payload {
            NotePayload::Photo { img_path: Some(src) } => Self::Image { src: src.clone() },
            NotePayload::Text { text: Some(body) } => Self::Paragraph { body: body.clone() },
            NotePayload::Audio {
                audio_path: Some(src),
            } => Self::Audio { src: src.clone() },
            _ => Self::Empty,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Self::Image { src } => format!(
                r#"<img src="{}" alt="Note Image" width="{}"/>"#,
                escape_attr(src),
                SIDECAR_IMAGE_WIDTH_PX
            ),
            Self::Paragraph { body } => format!("<p>{}</p>", escape_text(body)),
            Self::Audio { src } => format!(
                r#"<audio controls src="{}" type="audio/mp3"></audio>"#,
                escape_attr(src)
            ),
            Self::Empty => String::new(),
        }
    }
}

/// One observed section of the scrollable sidecar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidecarSection {
    pub id: NoteId,
    pub block: SidecarBlock,
}

/// Sections for every note, in sequence order.
///
/// Sections are created once at load time and live for the page session;
/// each is seeded with `SECTION_OBSERVED_CLASS` so the observer picks it up.
pub fn sections_for_sequence(sequence: &NoteSequence) -> Vec<SidecarSection> {
    sequence
        .iter()
        .map(|note| SidecarSection {
            id: note.id,
            block: SidecarBlock::for_payload(&note.payload),
        })
        .collect()
}
