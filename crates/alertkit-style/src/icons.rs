//! Stock icon glyphs for the built-in tones.
//!
//! Geometry is authored in unit coordinates (y down) and scaled to the
//! requested size, so the same glyph serves 24×24 chips and 48×48 headers.

use alertkit_core::{Path, Size, Vec2};

use crate::tone::{AlertTone, IconPathProvider};

/// Default [`IconPathProvider`]: one simple filled glyph per tone.
///
/// `Normal` has no glyph and resolves to an empty path. Everything else is a
/// recognizable monochrome mark: check, "i", exclamation, cross, pencil, key.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinIcons;

impl IconPathProvider for BuiltinIcons {
    fn icon_path(&self, tone: AlertTone, size: Size) -> Path {
        let mut path = Path::new();
        match tone {
            AlertTone::Normal => {}
            AlertTone::Success { .. } => check_mark(&mut path, size),
            AlertTone::Information { .. } => info_mark(&mut path, size),
            AlertTone::Warning { .. } => exclamation_mark(&mut path, size),
            AlertTone::Error { .. } => cross_mark(&mut path, size),
            AlertTone::Edit { .. } => pencil(&mut path, size),
            AlertTone::Authorize { .. } => key(&mut path, size),
        }
        path
    }
}

// Quarter-circle cubic Bezier control offset.
const KAPPA: f32 = 0.552_284_8;

fn at(size: Size) -> impl Fn(f32, f32) -> Vec2 {
    move |x, y| Vec2 {
        x: x * size.width,
        y: y * size.height,
    }
}

fn polygon(path: &mut Path, size: Size, corners: &[(f32, f32)]) {
    let p = at(size);
    let mut corners = corners.iter().copied();
    let Some((x, y)) = corners.next() else {
        return;
    };
    path.move_to(p(x, y));
    for (x, y) in corners {
        path.line_to(p(x, y));
    }
    path.close();
}

fn ellipse(path: &mut Path, size: Size, cx: f32, cy: f32, rx: f32, ry: f32) {
    let p = at(size);
    let kx = rx * KAPPA;
    let ky = ry * KAPPA;
    path.move_to(p(cx, cy - ry));
    path.cubic_to(p(cx + kx, cy - ry), p(cx + rx, cy - ky), p(cx + rx, cy));
    path.cubic_to(p(cx + rx, cy + ky), p(cx + kx, cy + ry), p(cx, cy + ry));
    path.cubic_to(p(cx - kx, cy + ry), p(cx - rx, cy + ky), p(cx - rx, cy));
    path.cubic_to(p(cx - rx, cy - ky), p(cx - kx, cy - ry), p(cx, cy - ry));
    path.close();
}

fn check_mark(path: &mut Path, size: Size) {
    polygon(
        path,
        size,
        &[
            (0.38, 0.68),
            (0.20, 0.50),
            (0.14, 0.56),
            (0.38, 0.80),
            (0.86, 0.32),
            (0.80, 0.26),
        ],
    );
}

fn info_mark(path: &mut Path, size: Size) {
    ellipse(path, size, 0.50, 0.20, 0.09, 0.09);
    polygon(
        path,
        size,
        &[(0.41, 0.36), (0.59, 0.36), (0.59, 0.84), (0.41, 0.84)],
    );
}

fn exclamation_mark(path: &mut Path, size: Size) {
    // Bar tapers slightly toward the dot.
    polygon(
        path,
        size,
        &[(0.42, 0.12), (0.58, 0.12), (0.54, 0.60), (0.46, 0.60)],
    );
    ellipse(path, size, 0.50, 0.80, 0.08, 0.08);
}

fn cross_mark(path: &mut Path, size: Size) {
    polygon(
        path,
        size,
        &[
            (0.78, 0.28),
            (0.72, 0.22),
            (0.50, 0.44),
            (0.28, 0.22),
            (0.22, 0.28),
            (0.44, 0.50),
            (0.22, 0.72),
            (0.28, 0.78),
            (0.50, 0.56),
            (0.72, 0.78),
            (0.78, 0.72),
            (0.56, 0.50),
        ],
    );
}

fn pencil(path: &mut Path, size: Size) {
    // Body slanted at 45 degrees, tip as a separate triangle.
    polygon(
        path,
        size,
        &[(0.24, 0.60), (0.62, 0.22), (0.78, 0.38), (0.40, 0.76)],
    );
    polygon(path, size, &[(0.22, 0.62), (0.38, 0.78), (0.16, 0.84)]);
}

fn key(path: &mut Path, size: Size) {
    ellipse(path, size, 0.30, 0.50, 0.16, 0.16);
    polygon(
        path,
        size,
        &[(0.44, 0.46), (0.88, 0.46), (0.88, 0.54), (0.44, 0.54)],
    );
    polygon(
        path,
        size,
        &[(0.64, 0.54), (0.72, 0.54), (0.72, 0.68), (0.64, 0.68)],
    );
    polygon(
        path,
        size,
        &[(0.80, 0.54), (0.88, 0.54), (0.88, 0.72), (0.80, 0.72)],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use alertkit_core::PathSegment;

    const SIZES: [Size; 2] = [
        Size {
            width: 24.0,
            height: 24.0,
        },
        Size {
            width: 48.0,
            height: 48.0,
        },
    ];

    #[test]
    fn test_normal_has_no_glyph() {
        for size in SIZES {
            assert!(BuiltinIcons.icon_path(AlertTone::Normal, size).is_empty());
        }
    }

    #[test]
    fn test_icon_tones_have_glyphs() {
        for tone in &AlertTone::all(true)[1..] {
            for size in SIZES {
                let path = BuiltinIcons.icon_path(*tone, size);
                assert!(!path.is_empty(), "{tone:?} at {size:?}");
            }
        }
    }

    #[test]
    fn test_glyphs_stay_inside_the_box() {
        for tone in &AlertTone::all(true)[1..] {
            for size in SIZES {
                let bounds = BuiltinIcons.icon_path(*tone, size).bounds().unwrap();
                assert!(bounds.x >= 0.0, "{tone:?}: {bounds:?}");
                assert!(bounds.y >= 0.0, "{tone:?}: {bounds:?}");
                assert!(bounds.x + bounds.w <= size.width, "{tone:?}: {bounds:?}");
                assert!(bounds.y + bounds.h <= size.height, "{tone:?}: {bounds:?}");
            }
        }
    }

    #[test]
    fn test_glyphs_scale_linearly_with_size() {
        // 48 is exactly double 24, so every coordinate doubles exactly.
        let small = BuiltinIcons.icon_path(AlertTone::Success { icon: true }, SIZES[0]);
        let large = BuiltinIcons.icon_path(AlertTone::Success { icon: true }, SIZES[1]);

        let double = |p: Vec2| Vec2 {
            x: p.x * 2.0,
            y: p.y * 2.0,
        };
        let doubled: Vec<PathSegment> = small
            .segments()
            .iter()
            .map(|seg| match *seg {
                PathSegment::MoveTo(p) => PathSegment::MoveTo(double(p)),
                PathSegment::LineTo(p) => PathSegment::LineTo(double(p)),
                PathSegment::QuadTo(c, p) => PathSegment::QuadTo(double(c), double(p)),
                PathSegment::CubicTo(c1, c2, p) => {
                    PathSegment::CubicTo(double(c1), double(c2), double(p))
                }
                PathSegment::Close => PathSegment::Close,
            })
            .collect();
        assert_eq!(large.segments(), doubled.as_slice());
    }

    #[test]
    fn test_provider_is_pure() {
        for tone in AlertTone::all(true) {
            for size in SIZES {
                assert_eq!(
                    BuiltinIcons.icon_path(tone, size),
                    BuiltinIcons.icon_path(tone, size)
                );
            }
        }
    }

    #[test]
    fn test_zero_size_degenerates_quietly() {
        let zero = Size {
            width: 0.0,
            height: 0.0,
        };
        for tone in &AlertTone::all(true)[1..] {
            let path = BuiltinIcons.icon_path(*tone, zero);
            assert!(!path.is_empty(), "{tone:?}");
            let bounds = path.bounds().unwrap();
            assert_eq!(bounds.w, 0.0);
            assert_eq!(bounds.h, 0.0);
        }
    }
}
