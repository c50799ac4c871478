use crate::core::Point;
use crate::render::{CellBuffer, Style, TextWrite};

/// Buffer that keeps every write in call order.
///
/// Hosts can replay the captured writes into their own grid, and tests can
/// assert on exact text and coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingBuffer {
    pub writes: Vec<TextWrite>,
}

impl RecordingBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// First write anchored exactly at `at`.
    #[must_use]
    pub fn text_at(&self, at: Point) -> Option<&str> {
        self.writes
            .iter()
            .find(|write| write.at == at)
            .map(|write| write.text.as_str())
    }

    /// Texts of every write whose text starts with `prefix`, in call order.
    pub fn texts_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.writes
            .iter()
            .map(|write| write.text.as_str())
            .filter(move |text| text.starts_with(prefix))
    }

    pub fn replay(&self, target: &mut impl CellBuffer) {
        for write in &self.writes {
            target.set_string(&write.text, write.style, write.at);
        }
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl CellBuffer for RecordingBuffer {
    fn set_string(&mut self, text: &str, style: Style, at: Point) {
        self.writes.push(TextWrite::new(text, style, at));
    }
}
