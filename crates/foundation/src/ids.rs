use std::fmt;
use std::str::FromStr;

/// Ordinal identifier of a note in its sequence.
///
/// The same ordinal identifies the note's sidecar section and its map
/// marker, so lookups never go through loosely-typed DOM attribute strings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(u32);

impl NoteId {
    pub fn new(n: u32) -> Self {
        NoteId(n)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(NoteId)
    }
}
