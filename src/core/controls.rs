//=========================================================================
// Controls
//=========================================================================
//
// One-button arcade input policies built on the input tracker.
//
//   fly_held: continuous thrust (primary key, or any hold on the stage)
//   tap:      discrete action, offered to UI buttons first
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::{Button, InputTracker};
use crate::core::ui::{ButtonBar, ButtonId};

//=== Tap =================================================================

/// Result of [`tap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tap {
    /// Nothing was pressed this frame.
    None,

    /// A press landed on a UI button; gameplay should ignore it.
    Ui(ButtonId),

    /// A gameplay tap.
    Action,
}

//=== Policies ============================================================

/// `true` while the primary key is held, or while any button is held with
/// the pointer on the stage.
pub fn fly_held(input: &InputTracker) -> bool {
    if input.button(Button::PrimaryKey).held() {
        return true;
    }
    input.any_held() && input.is_within_bounds()
}

/// Classifies this frame's press.
///
/// A press is first hit-tested against `ui`. Otherwise a primary key press
/// or a press on the stage counts as a gameplay tap.
pub fn tap(input: &InputTracker, ui: &ButtonBar) -> Tap {
    if !input.any_pressed() {
        return Tap::None;
    }

    if let Some(id) = ui.click_at(input.position()) {
        return Tap::Ui(id);
    }

    if input.button(Button::PrimaryKey).pressed() || input.is_within_bounds() {
        Tap::Action
    } else {
        Tap::None
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
