use std::fmt;

use foundation::NoteId;

/// Recoverable playback misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// A section crossed the threshold but no marker is bound to its ordinal.
    MissingMarker,
    /// A section became visible but the coordinate index has no entry for it.
    MissingCoordinate,
}

/// One recoverable miss, recorded instead of raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: ReportKind,
    pub note: NoteId,
    pub message: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            ReportKind::MissingMarker => "missing-marker-for-section",
            ReportKind::MissingCoordinate => "missing-coordinate-for-section",
        };
        write!(f, "{} (section {}): {}", kind, self.note, self.message)
    }
}

/// Drainable in-memory log of playback reports.
///
/// A miss never aborts processing of the remaining sections; it lands here
/// and the host decides where to surface it (the wasm viewer forwards
/// drained reports to the browser console).
#[derive(Debug, Default)]
pub struct ReportLog {
    reports: Vec<Report>,
}

impl ReportLog {
    pub fn new() -> Self {
        Self {
            reports: Vec::new(),
        }
    }

    pub fn emit(&mut self, kind: ReportKind, note: NoteId, message: impl Into<String>) {
        self.reports.push(Report {
            kind,
            note,
            message: message.into(),
        });
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn drain(&mut self) -> Vec<Report> {
        std::mem::take(&mut self.reports)
    }
}
