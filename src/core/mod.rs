pub mod primitives;
pub mod time_line;
pub mod types;

pub use time_line::{Extrema, TimeLine, TimePoint};
pub use types::{Point, Rect};
