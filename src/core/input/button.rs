//=========================================================================
// Button State
//=========================================================================
//
// Edge-triggered state machine for one logical button.
//
// Architecture:
//   down() / up()  → held (level) + pressed/released/repeated (pulses)
//   reset()        → clears pulses, never touches `held`
//
// Frame lifecycle: events (down/up, any number) → query → reset()
//
//=========================================================================

//=== Button ==============================================================

/// The three logical buttons tracked by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// The configured primary keyboard key (Space by default).
    PrimaryKey,

    /// The primary (left) pointer button.
    PointerPrimary,

    /// Any touch on the surface.
    Tap,
}

impl Button {
    /// All buttons, in index order.
    pub const ALL: [Button; 3] = [Button::PrimaryKey, Button::PointerPrimary, Button::Tap];

    #[inline]
    pub(super) const fn index(self) -> usize {
        match self {
            Button::PrimaryKey => 0,
            Button::PointerPrimary => 1,
            Button::Tap => 2,
        }
    }
}

//=== ButtonState =========================================================

/// Level (`held`) and one-frame pulse (`pressed`, `released`, `repeated`)
/// flags for a single logical button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    held: bool,
    pressed: bool,
    released: bool,
    repeated: bool,
}

impl ButtonState {
    pub const fn new() -> Self {
        Self {
            held: false,
            pressed: false,
            released: false,
            repeated: false,
        }
    }

    //--- Transitions ------------------------------------------------------

    /// Registers a down event.
    ///
    /// Only an UP → DOWN transition pulses `pressed`; every call (including
    /// OS key-repeat while held) pulses `repeated`.
    pub fn down(&mut self) {
        if !self.held {
            self.held = true;
            self.pressed = true;
        }
        self.repeated = true;
    }

    /// Registers an up event, regardless of the previous state.
    pub fn up(&mut self) {
        self.held = false;
        self.released = true;
    }

    /// Clears the one-frame pulses. `held` is left untouched.
    pub fn reset(&mut self) {
        self.pressed = false;
        self.released = false;
        self.repeated = false;
    }

    //--- Queries ----------------------------------------------------------

    /// `true` while the button is down.
    pub fn held(&self) -> bool {
        self.held
    }

    /// `true` for the frame in which the button went down.
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// `true` for the frame in which the button went up.
    pub fn released(&self) -> bool {
        self.released
    }

    /// `true` for any frame that saw at least one down event.
    pub fn repeated(&self) -> bool {
        self.repeated
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_down_pulses_pressed() {
        let mut state = ButtonState::new();
        state.down();
        assert!(state.held());
        assert!(state.pressed());
        assert!(state.repeated());
        assert!(!state.released());
    }

    #[test]
    fn repeated_down_does_not_pulse_pressed() {
        let mut state = ButtonState::new();
        state.down();
        state.reset();

        // OS key-repeat
        state.down();
        assert!(!state.pressed(), "Pressed must only pulse once per hold");
        assert!(state.repeated(), "Every down() pulses repeated");
        assert!(state.held());

        state.reset();
        state.down();
        assert!(!state.pressed());
        assert!(state.repeated());
    }

    #[test]
    fn double_down_same_frame_keeps_single_press() {
        let mut state = ButtonState::new();
        state.down();
        state.down();
        assert!(state.pressed());
        assert!(state.repeated());
    }

    #[test]
    fn up_always_pulses_released() {
        let mut state = ButtonState::new();
        state.up();
        assert!(state.released(), "Spurious up still pulses released");
        assert!(!state.held());
    }

    #[test]
    fn reset_never_clears_held() {
        let mut state = ButtonState::new();
        state.down();
        for _ in 0..5 {
            state.reset();
            assert!(state.held());
            assert!(!state.pressed());
            assert!(!state.repeated());
            assert!(!state.released());
        }
    }

    #[test]
    fn tap_within_one_frame() {
        let mut state = ButtonState::new();
        state.down();
        state.up();
        assert!(state.pressed());
        assert!(state.released());
        assert!(!state.held());
    }

    #[test]
    fn button_indices_are_distinct() {
        let indices: Vec<usize> = Button::ALL.iter().map(|b| b.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
