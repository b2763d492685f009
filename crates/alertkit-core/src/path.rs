use smallvec::SmallVec;

use crate::{Rect, Vec2};

/// One command of a vector outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo(Vec2, Vec2),
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

/// Vector outline built from [`PathSegment`]s.
///
/// Segments are stored inline; icon glyphs rarely exceed a couple dozen
/// commands. The path itself carries no fill or stroke information, that
/// lives on the layer consuming it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: SmallVec<[PathSegment; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Vec2) {
        self.segments.push(PathSegment::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Vec2) {
        self.segments.push(PathSegment::LineTo(p));
    }

    pub fn quad_to(&mut self, ctrl: Vec2, to: Vec2) {
        self.segments.push(PathSegment::QuadTo(ctrl, to));
    }

    pub fn cubic_to(&mut self, ctrl1: Vec2, ctrl2: Vec2, to: Vec2) {
        self.segments.push(PathSegment::CubicTo(ctrl1, ctrl2, to));
    }

    pub fn close(&mut self) {
        self.segments.push(PathSegment::Close);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Axis-aligned box over every anchor and control point, or `None` for a
    /// path with no points. Conservative: control points count even where the
    /// curve itself stays inside them.
    pub fn bounds(&self) -> Option<Rect> {
        let mut min = Vec2 {
            x: f32::INFINITY,
            y: f32::INFINITY,
        };
        let mut max = Vec2 {
            x: f32::NEG_INFINITY,
            y: f32::NEG_INFINITY,
        };
        let mut seen = false;
        for seg in &self.segments {
            let pts = match *seg {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => [Some(p), None, None],
                PathSegment::QuadTo(c, p) => [Some(c), Some(p), None],
                PathSegment::CubicTo(c1, c2, p) => [Some(c1), Some(c2), Some(p)],
                PathSegment::Close => [None, None, None],
            };
            for p in pts.into_iter().flatten() {
                min.x = min.x.min(p.x);
                min.y = min.y.min(p.y);
                max.x = max.x.max(p.x);
                max.y = max.y.max(p.y);
                seen = true;
            }
        }
        seen.then_some(Rect {
            x: min.x,
            y: min.y,
            w: max.x - min.x,
            h: max.y - min.y,
        })
    }
}
