use unicode_width::UnicodeWidthStr;

use crate::core::Point;
use crate::render::{CellBuffer, Style};

/// Write sink used by benches and headless hosts.
///
/// It drops the text but still counts calls, so callers can check how much
/// a render pass would have drawn.
#[derive(Debug, Default)]
pub struct NullBuffer {
    pub write_count: usize,
    /// Display cells, measured the way [`GridBuffer`](super::GridBuffer) places them.
    pub cell_count: usize,
}

impl CellBuffer for NullBuffer {
    fn set_string(&mut self, text: &str, _style: Style, _at: Point) {
        self.write_count += 1;
        self.cell_count += UnicodeWidthStr::width(text);
    }
}
