//! Scroll-synchronized note playback.
//!
//! The controller keeps the map camera and marker highlighting consistent
//! with whichever note the user is currently reading. It is independent of
//! any rendering engine: visibility changes come in as plain batches and
//! all effects go out through the `Stage` trait.

pub mod controller;
pub mod report;

pub use controller::{
    FLY_DURATION_MS, INTERSECTION_THRESHOLD, PlaybackController, Stage, VisibilityChange,
};
pub use report::{Report, ReportKind, ReportLog};
