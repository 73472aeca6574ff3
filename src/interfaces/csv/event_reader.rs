use crate::application::session::EditEvent;
use crate::error::{FieldError, Result};
use std::io::Read;

/// Reads edit scripts from a CSV source.
///
/// The expected header is `event,text`. Whitespace around fields is trimmed
/// and rows may omit `text`, which is how `backspace` and `focus` are written.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    pub fn events(self) -> impl Iterator<Item = Result<EditEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(FieldError::from))
    }
}
