use unicode_width::UnicodeWidthChar;

use crate::core::Point;
use crate::render::{CellBuffer, Style};

/// One character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub symbol: char,
    pub style: Style,
    /// Trailing half of a double-width symbol stored in the previous cell.
    pub continuation: bool,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            style: Style::default(),
            continuation: false,
        }
    }
}

/// In-memory character grid with per-cell clipping.
///
/// Writes that start or run outside the grid keep their in-bounds cells and
/// drop the rest. A double-width symbol that would straddle the right edge is
/// not drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuffer {
    width: usize,
    height: usize,
    cells: Vec<GridCell>,
}

impl GridBuffer {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![GridCell::default(); width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<&GridCell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Visible text of row `y`, trailing blanks trimmed.
    #[must_use]
    pub fn row_text(&self, y: i32) -> String {
        let Ok(row) = usize::try_from(y) else {
            return String::new();
        };
        if row >= self.height {
            return String::new();
        }
        let start = row * self.width;
        let text: String = self.cells[start..start + self.width]
            .iter()
            .filter(|cell| !cell.continuation)
            .map(|cell| cell.symbol)
            .collect();
        text.trim_end().to_owned()
    }

    pub fn clear(&mut self) {
        self.cells.fill(GridCell::default());
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn put(&mut self, x: i32, y: i32, cell: GridCell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }
}

impl CellBuffer for GridBuffer {
    fn set_string(&mut self, text: &str, style: Style, at: Point) {
        let width_limit = i32::try_from(self.width).unwrap_or(i32::MAX);
        let mut x = at.x;
        for symbol in text.chars() {
            let symbol_width = UnicodeWidthChar::width(symbol).unwrap_or(0);
            if symbol_width == 0 {
                continue;
            }
            if x >= width_limit {
                break;
            }
            let symbol_width = symbol_width as i32;
            if x + symbol_width > width_limit {
                break;
            }
            if x < 0 && x + symbol_width > 0 {
                // Lead cell is off-grid; the visible tail becomes blank cells.
                for visible in 0..x + symbol_width {
                    self.put(
                        visible,
                        at.y,
                        GridCell {
                            symbol: ' ',
                            style,
                            continuation: false,
                        },
                    );
                }
                x += symbol_width;
                continue;
            }

            self.put(
                x,
                at.y,
                GridCell {
                    symbol,
                    style,
                    continuation: false,
                },
            );
            for tail in 1..symbol_width {
                self.put(
                    x + tail,
                    at.y,
                    GridCell {
                        symbol: ' ',
                        style,
                        continuation: true,
                    },
                );
            }
            x += symbol_width;
        }
    }
}
