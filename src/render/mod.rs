mod frame;
mod grid;
mod null_buffer;
mod primitives;

pub use frame::RecordingBuffer;
pub use grid::{GridBuffer, GridCell};
pub use null_buffer::NullBuffer;
pub use primitives::{Color, Style, TextWrite};

use crate::core::Point;

/// Write capability the legend draws through.
///
/// Implementations own clipping: a write may start outside the grid or run
/// past its edge, and only the in-bounds cells should land.
pub trait CellBuffer {
    fn set_string(&mut self, text: &str, style: Style, at: Point);
}

impl<B: CellBuffer + ?Sized> CellBuffer for &mut B {
    fn set_string(&mut self, text: &str, style: Style, at: Point) {
        (**self).set_string(text, style, at);
    }
}
