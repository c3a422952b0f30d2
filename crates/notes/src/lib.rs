//! Geonote document model.
//!
//! This crate owns the wire format of the static geonote JSON document and
//! the validated, ordinal-indexed form the rest of the viewer works with:
//! - `GeoNoteDocument` / `GeoNoteRecord`: serde mapping of the document.
//! - `NoteSequence`: validated, ordered notes with assigned `NoteId`s.
//! - `CoordinateIndex`: read-only `NoteId -> LngLat` lookup.

use std::collections::BTreeMap;

use foundation::{LngLat, NoteId};
use serde::{Deserialize, Serialize};

/// Kind-specific note payload, tagged by the document's `note_type` field.
///
/// Media and text fields are optional on the wire; a note missing its
/// payload still exists in the sequence, it just carries no popup or
/// sidecar content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "note_type")]
pub enum NotePayload {
    #[serde(rename = "photo")]
    Photo {
        #[serde(rename = "imgPath", default, skip_serializing_if = "Option::is_none")]
        img_path: Option<String>,
    },
    #[serde(rename = "text")]
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },
    #[serde(rename = "audio")]
    Audio {
        #[serde(rename = "audioPath", default, skip_serializing_if = "Option::is_none")]
        audio_path: Option<String>,
    },
    #[serde(rename = "routepoint")]
    RoutePoint,
}

/// One record of the document's note list, exactly as serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoNoteRecord {
    pub lon: f64,
    pub lat: f64,
    #[serde(flatten)]
    pub payload: NotePayload,
}

/// Top-level geonote document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoNoteDocument {
    #[serde(rename = "geoNotesList")]
    pub geo_notes_list: Vec<GeoNoteRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesError {
    /// The document is not valid JSON or not the expected shape.
    Parse(String),
    /// The document parsed but its note list is empty. Terminal for map
    /// initialization: nothing is rendered.
    EmptyDocument,
}

impl std::fmt::Display for NotesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotesError::Parse(msg) => write!(f, "geonote document malformed: {msg}"),
            NotesError::EmptyDocument => write!(f, "geonote list is empty or missing"),
        }
    }
}

impl std::error::Error for NotesError {}

/// One validated note with its assigned ordinal.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: NoteId,
    pub coord: LngLat,
    pub payload: NotePayload,
}

/// Ordered, validated note sequence.
///
/// Immutable once built; `NoteId`s are the 0-based positions in document
/// order and stay stable for the page session.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteSequence {
    notes: Vec<Note>,
}

impl NoteSequence {
    pub fn parse_json(text: &str) -> Result<Self, NotesError> {
        let doc: GeoNoteDocument =
            serde_json::from_str(text).map_err(|e| NotesError::Parse(e.to_string()))?;
        Self::from_document(doc)
    }

    pub fn from_document(doc: GeoNoteDocument) -> Result<Self, NotesError> {
        if doc.geo_notes_list.is_empty() {
            return Err(NotesError::EmptyDocument);
        }
        let notes = doc
            .geo_notes_list
            .into_iter()
            .enumerate()
            .map(|(i, record)| Note {
                id: NoteId::new(i as u32),
                coord: LngLat::new(record.lon, record.lat),
                payload: record.payload,
            })
            .collect();
        Ok(Self { notes })
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// First note in document order. The sequence is validated non-empty.
    pub fn first(&self) -> &Note {
        &self.notes[0]
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.get(id.index() as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    /// `[lon, lat]` pairs of every note in sequence order (the route line).
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.notes.iter().map(|n| n.coord.to_array()).collect()
    }
}

/// Read-only lookup from note ordinal to its coordinate.
///
/// Built once at load time. A missing entry is a recoverable miss: `get`
/// returns `None` and the caller reports and skips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateIndex {
    coords: BTreeMap<NoteId, LngLat>,
}

impl CoordinateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sequence(sequence: &NoteSequence) -> Self {
        let mut index = Self::new();
        for note in sequence.iter() {
            index.insert(note.id, note.coord);
        }
        index
    }

    pub fn insert(&mut self, id: NoteId, coord: LngLat) {
        self.coords.insert(id, coord);
    }

    pub fn get(&self, id: NoteId) -> Option<LngLat> {
        self.coords.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }
}
