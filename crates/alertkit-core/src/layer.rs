use crate::{Color, Path, Rect};

/// A filled vector shape positioned in its parent's coordinate space.
///
/// This is the value the styling layer hands to the rendering side: a frame,
/// an outline, and a solid fill. Nothing here interprets the path; a backend
/// replays it however it draws.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeLayer {
    pub frame: Rect,
    pub path: Path,
    pub fill_color: Color,
}

impl ShapeLayer {
    pub fn new(frame: Rect, path: Path, fill_color: Color) -> Self {
        ShapeLayer {
            frame,
            path,
            fill_color,
        }
    }
}
