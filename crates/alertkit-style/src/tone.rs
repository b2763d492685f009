//! Semantic tones and the tone → visual-style table.
//!
//! A tone names what kind of dialog is being shown (success, warning, …) and
//! resolves to a fixed set of visual attributes. The mapping is total — every
//! tone has a palette row, enforced by exhaustive matching — and pure: no
//! state, no configuration, the same tone always resolves to the same values.

use alertkit_core::{Color, Path, Rect, ShapeLayer, Size};

/// Semantic category of an alert, selecting its color and icon treatment.
///
/// Every variant except [`Normal`](AlertTone::Normal) carries an `icon` flag
/// deciding whether the tone's glyph is drawn next to the title. `Normal` has
/// no glyph and never shows an icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertTone {
    /// Plain dialog: black text, neutral gray buttons, no icon.
    Normal,
    /// A completed operation.
    Success { icon: bool },
    /// Neutral information the user should read.
    Information { icon: bool },
    /// Something needs attention before proceeding.
    Warning { icon: bool },
    /// A failed operation.
    Error { icon: bool },
    /// A dialog asking for text input or edits.
    Edit { icon: bool },
    /// A dialog asking for credentials or permission.
    Authorize { icon: bool },
}

/// One row of the tone color table. Alpha is always 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TonePalette {
    /// Title and message text, also used for the dialog's accent border.
    pub text: Color,
    /// Fill behind the action buttons; a light tint of the tone.
    pub button_background: Color,
    /// Fill of the generated icon glyph; lighter than `text`.
    pub icon: Color,
}

/// Produces icon outline geometry for a tone at a target size.
///
/// Implementations must be pure the same way the palette is: the same
/// `(tone, size)` pair always yields the same path. The styling layer ships
/// [`BuiltinIcons`](crate::icons::BuiltinIcons); renderers with their own
/// glyph sets substitute here without touching the color table.
pub trait IconPathProvider {
    fn icon_path(&self, tone: AlertTone, size: Size) -> Path;
}

impl AlertTone {
    /// Every tone, with `icon` applied to the variants that carry the flag.
    pub const fn all(icon: bool) -> [AlertTone; 7] {
        [
            AlertTone::Normal,
            AlertTone::Success { icon },
            AlertTone::Information { icon },
            AlertTone::Warning { icon },
            AlertTone::Error { icon },
            AlertTone::Edit { icon },
            AlertTone::Authorize { icon },
        ]
    }

    /// The full palette row for this tone.
    ///
    /// The icon flag plays no part here; `Success { icon: false }` and
    /// `Success { icon: true }` share a row.
    pub const fn palette(self) -> TonePalette {
        match self {
            AlertTone::Normal => TonePalette {
                text: Color::BLACK,
                button_background: Color::from_rgb(0.8902, 0.8902, 0.898),
                icon: Color::BLACK,
            },
            AlertTone::Success { .. } => TonePalette {
                text: Color::from_rgb(0.1843, 0.3922, 0.1804),
                button_background: Color::from_rgb(0.8745, 0.9412, 0.8471),
                icon: Color::from_rgb(0.8039, 0.898, 0.7412),
            },
            AlertTone::Information { .. } => TonePalette {
                text: Color::from_rgb(0.1922, 0.4392, 0.5608),
                button_background: Color::from_rgb(0.851, 0.9294, 0.9686),
                icon: Color::from_rgb(0.7373, 0.8863, 0.9294),
            },
            AlertTone::Warning { .. } => TonePalette {
                text: Color::from_rgb(0.4627, 0.3529, 0.1765),
                button_background: Color::from_rgb(0.9882, 0.9725, 0.8902),
                icon: Color::from_rgb(0.949, 0.902, 0.7529),
            },
            AlertTone::Error { .. } => TonePalette {
                text: Color::from_rgb(0.5882, 0.1882, 0.1961),
                button_background: Color::from_rgb(0.949, 0.8706, 0.8706),
                icon: Color::from_rgb(0.9294, 0.7725, 0.7725),
            },
            AlertTone::Edit { .. } => TonePalette {
                text: Color::from_rgb(0.5176, 0.2431, 0.5922),
                button_background: Color::from_rgb(0.9333, 0.8549, 0.949),
                icon: Color::from_rgb(0.9059, 0.8078, 0.9294),
            },
            AlertTone::Authorize { .. } => TonePalette {
                text: Color::from_rgb(0.5961, 0.3373, 0.6588),
                button_background: Color::from_rgb(0.9333, 0.8549, 0.949),
                icon: Color::from_rgb(0.9059, 0.8078, 0.9294),
            },
        }
    }

    /// Title and message text color.
    pub const fn text_color(self) -> Color {
        self.palette().text
    }

    /// Action button fill color.
    pub const fn button_background_color(self) -> Color {
        self.palette().button_background
    }

    /// Fill color for the tone's icon glyph.
    pub const fn icon_color(self) -> Color {
        self.palette().icon
    }

    /// Whether the dialog should draw this tone's icon glyph.
    ///
    /// Returns the carried flag; always `false` for `Normal`.
    pub const fn shows_icon(self) -> bool {
        match self {
            AlertTone::Normal => false,
            AlertTone::Success { icon }
            | AlertTone::Information { icon }
            | AlertTone::Warning { icon }
            | AlertTone::Error { icon }
            | AlertTone::Edit { icon }
            | AlertTone::Authorize { icon } => icon,
        }
    }

    /// Builds the renderable icon layer for this tone.
    ///
    /// The layer occupies `frame` exactly; its outline comes from `paths`
    /// scaled to the frame's size and its fill is [`icon_color`]. Callers
    /// consult [`shows_icon`] first — the layer is built unconditionally.
    ///
    /// [`icon_color`]: AlertTone::icon_color
    /// [`shows_icon`]: AlertTone::shows_icon
    pub fn icon_layer(self, frame: Rect, paths: &dyn IconPathProvider) -> ShapeLayer {
        let path = paths.icon_path(self, frame.size());
        log::trace!(
            "icon layer for {:?}: {} segments in {:?}",
            self,
            path.segments().len(),
            frame
        );
        ShapeLayer::new(frame, path, self.icon_color())
    }
}
