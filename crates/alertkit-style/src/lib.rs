//! Styling layer for AlertKit dialogs.
//!
//! This crate owns the closed presentation enumerations of the component —
//! [`AlertStyle`], [`ActionStyle`], [`ButtonLayout`], [`LabelRole`] — and the
//! semantic [`AlertTone`] that decides how a dialog is tinted: text color,
//! action-button background, icon color, and whether an icon glyph is drawn
//! at all.
//!
//! Tones resolve to colors through a fixed table; nothing here is themable or
//! stateful. The one construction step, [`AlertTone::icon_layer`], pairs the
//! table with an injected [`IconPathProvider`] so glyph geometry can be
//! swapped without touching the palette:
//!
//! ```rust
//! use alertkit_core::Rect;
//! use alertkit_style::{AlertTone, BuiltinIcons};
//!
//! let tone = AlertTone::Warning { icon: true };
//! let palette = tone.palette();
//! assert_eq!(palette.text, tone.text_color());
//!
//! let frame = Rect { x: 0.0, y: 0.0, w: 24.0, h: 24.0 };
//! let layer = tone.icon_layer(frame, &BuiltinIcons);
//! assert_eq!(layer.frame, frame);
//! assert_eq!(layer.fill_color, tone.icon_color());
//! ```
//!
//! View construction, layout, and gesture handling live with the dialog's
//! view layer, not here.

pub mod icons;
pub mod style;
pub mod tone;

pub use icons::*;
pub use style::*;
pub use tone::*;

/// Convenience imports for dialog code consuming the styling layer.
pub mod prelude {
    pub use crate::icons::BuiltinIcons;
    pub use crate::style::{ActionStyle, AlertStyle, ButtonLayout, LabelRole};
    pub use crate::tone::{AlertTone, IconPathProvider, TonePalette};
    pub use alertkit_core::{Color, Path, PathSegment, Rect, ShapeLayer, Size, Vec2};
}
