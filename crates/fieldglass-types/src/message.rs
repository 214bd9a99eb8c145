//! Transient HUD notification types.

use serde::{Deserialize, Serialize};

/// Icon kinds understood by the host HUD.
///
/// Growth status messages always use [`HudIcon::None`]; the other variants
/// exist so hosts can route fieldglass output through the same queue as
/// their own notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HudIcon {
    /// No icon; the message renders as a plain text box.
    #[default]
    None,
    /// Achievement banner.
    Achievement,
    /// New-quest exclamation mark.
    NewQuest,
    /// Error cross.
    Error,
    /// Stamina plus.
    Stamina,
    /// Health plus.
    Health,
}

/// A transient on-screen notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HudMessage {
    /// The text shown to the player. De-duplication compares this exactly.
    pub text: String,
    /// Icon the host renders alongside the text.
    pub icon: HudIcon,
}

impl HudMessage {
    /// Create an icon-less message, the form all growth status output uses.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            icon: HudIcon::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_messages_carry_no_icon() {
        let message = HudMessage::plain("Melon is ready for harvest");
        assert_eq!(message.icon, HudIcon::None);
        assert_eq!(message.text, "Melon is ready for harvest");
    }
}
