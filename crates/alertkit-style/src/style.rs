use thiserror::Error;

/// How a dialog is presented: centered modal alert or bottom action sheet.
///
/// Chosen once when the dialog is created and never changed afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertStyle {
    Alert,
    ActionSheet,
}

/// Visual weight of an action button, reflecting the consequence of
/// pressing it.
///
/// Styles carry stable integer codes (`Default` = 0, `Cancel` = 1,
/// `Destructive` = 2) so they can be stored and compared across versions;
/// [`Ord`] follows the code order.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionStyle {
    /// A regular choice.
    Default = 0,
    /// The safe way out; at most one per dialog.
    Cancel = 1,
    /// An action the user should notice before committing to it.
    Destructive = 2,
}

impl ActionStyle {
    /// Every style in code order.
    pub const ALL: [ActionStyle; 3] = [
        ActionStyle::Default,
        ActionStyle::Cancel,
        ActionStyle::Destructive,
    ];

    /// Stable storage/wire code for this style.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// An action-style code outside the closed `0..=2` set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown action style code {0} (expected 0, 1 or 2)")]
pub struct ActionStyleCodeError(pub u8);

impl TryFrom<u8> for ActionStyle {
    type Error = ActionStyleCodeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ActionStyle::Default),
            1 => Ok(ActionStyle::Cancel),
            2 => Ok(ActionStyle::Destructive),
            other => Err(ActionStyleCodeError(other)),
        }
    }
}

// Serialized as the bare code rather than the variant name, so stored values
// survive renames and match what `code()` reports.
#[cfg(feature = "serde")]
impl serde::Serialize for ActionStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ActionStyle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        ActionStyle::try_from(code).map_err(serde::de::Error::custom)
    }
}

/// Which dialog label a piece of text styling applies to.
///
/// Wiring detail between the styling layer and the dialog's label
/// construction; application code normally never touches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelRole {
    Title,
    Message,
}

/// How a dialog's action buttons are arranged.
///
/// The dialog's layout pass picks one from button count and content width;
/// the styling layer only names the options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonLayout {
    /// Full-width buttons stacked top to bottom.
    Vertical,
    /// Stacked table-style rows, as in an action sheet.
    VerticalTable,
    /// Two buttons side by side in one row.
    Horizontal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_style_codes_are_stable() {
        assert_eq!(ActionStyle::Default.code(), 0);
        assert_eq!(ActionStyle::Cancel.code(), 1);
        assert_eq!(ActionStyle::Destructive.code(), 2);

        // ALL is listed in code order and covers the closed set.
        let codes: Vec<u8> = ActionStyle::ALL.iter().map(|s| s.code()).collect();
        assert_eq!(codes, vec![0, 1, 2]);
    }

    #[test]
    fn test_action_style_ordering_follows_codes() {
        assert!(ActionStyle::Default < ActionStyle::Cancel);
        assert!(ActionStyle::Cancel < ActionStyle::Destructive);
    }

    #[test]
    fn test_action_style_from_code() {
        for style in ActionStyle::ALL {
            assert_eq!(ActionStyle::try_from(style.code()), Ok(style));
        }
        assert_eq!(ActionStyle::try_from(3), Err(ActionStyleCodeError(3)));
        assert_eq!(ActionStyle::try_from(255), Err(ActionStyleCodeError(255)));
    }

    #[test]
    fn test_presentation_enums_are_plain_values() {
        assert_ne!(AlertStyle::Alert, AlertStyle::ActionSheet);
        assert_ne!(LabelRole::Title, LabelRole::Message);

        let layout = ButtonLayout::Horizontal;
        let copy = layout;
        assert_eq!(layout, copy);
        assert_ne!(ButtonLayout::Vertical, ButtonLayout::VerticalTable);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::super::*;

        #[test]
        fn test_action_style_serializes_as_code() {
            assert_eq!(serde_json::to_string(&ActionStyle::Default).unwrap(), "0");
            assert_eq!(serde_json::to_string(&ActionStyle::Cancel).unwrap(), "1");
            assert_eq!(
                serde_json::to_string(&ActionStyle::Destructive).unwrap(),
                "2"
            );
        }

        #[test]
        fn test_action_style_deserializes_from_code() {
            for style in ActionStyle::ALL {
                let json = style.code().to_string();
                assert_eq!(serde_json::from_str::<ActionStyle>(&json).unwrap(), style);
            }
            assert!(serde_json::from_str::<ActionStyle>("3").is_err());
            assert!(serde_json::from_str::<ActionStyle>("\"Cancel\"").is_err());
        }
    }
}
