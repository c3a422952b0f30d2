use notes::NotePayload;

/// Popup anchor offset in pixels.
pub const POPUP_OFFSET_PX: u32 = 25;

/// Popup max width in pixels.
pub const POPUP_MAX_WIDTH_PX: u32 = 350;

/// Width of the image shown inside a photo popup.
pub const POPUP_IMAGE_WIDTH_PX: u32 = 150;

/// Content of a marker popup, one variant per media-bearing note kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupContent {
    Image { src: String },
    Text { body: String },
    Audio { src: String },
}

impl PopupContent {
    /// Popup for a note payload.
    ///
    /// Route-points and notes whose media/text field is absent get no popup.
    pub fn for_payload(payload: &NotePayload) -> Option<Self> {
        match payload {
            NotePayload::Photo { img_path: Some(src) } => Some(Self::Image { src: src.clone() }),
            NotePayload::Text { text: Some(body) } => Some(Self::Text { body: body.clone() }),
            NotePayload::Audio {
                audio_path: Some(src),
            } => Some(Self::Audio { src: src.clone() }),
            _ => None,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            Self::Image { src } => format!(
                r#"<img src="{}" alt="Note Image" width="{}"/>"#,
                escape_attr(src),
                POPUP_IMAGE_WIDTH_PX
            ),
            Self::Text { body } => format!("<p>{}</p>", escape_text(body)),
            Self::Audio { src } => format!(
                r#"<audio controls src="{}" type="audio/mp3"></audio>"#,
                escape_attr(src)
            ),
        }
    }
}

/// Escape for HTML text content.
pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape for a double-quoted HTML attribute value.
pub(crate) fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::PopupContent;
    use notes::NotePayload;
    use pretty_assertions::assert_eq;

    #[test]
    fn photo_popup_html() {
        let popup = PopupContent::for_payload(&NotePayload::Photo {
            img_path: Some("img/1.jpg".to_string()),
        })
        .unwrap();
        assert_eq!(
            popup.to_html(),
            r#"<img src="img/1.jpg" alt="Note Image" width="150"/>"#
        );
    }

    #[test]
    fn text_popup_escapes_markup() {
        let popup = PopupContent::for_payload(&NotePayload::Text {
            text: Some("a <b> & note".to_string()),
        })
        .unwrap();
        assert_eq!(popup.to_html(), "<p>a &lt;b&gt; &amp; note</p>");
    }

    #[test]
    fn audio_popup_escapes_attribute() {
        let popup = PopupContent::for_payload(&NotePayload::Audio {
            audio_path: Some(r#"a"b.mp3"#.to_string()),
        })
        .unwrap();
        assert_eq!(
            popup.to_html(),
            r#"<audio controls src="a&quot;b.mp3" type="audio/mp3"></audio>"#
        );
    }

    #[test]
    fn route_points_and_empty_payloads_have_no_popup() {
        assert_eq!(PopupContent::for_payload(&NotePayload::RoutePoint), None);
        assert_eq!(
            PopupContent::for_payload(&NotePayload::Photo { img_path: None }),
            None
        );
        assert_eq!(
            PopupContent::for_payload(&NotePayload::Text { text: None }),
            None
        );
    }
}
