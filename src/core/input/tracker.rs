//=========================================================================
// Input Tracker
//=========================================================================
//
// Edge-triggered state for the engine's three logical buttons, plus the
// last-known pointer position and the active touch count.
//
// Architecture:
//   InputEvent → apply() → ButtonState::down()/up() + update_position()
//                                    ↓
//                  any_held() / any_pressed() / is_within_bounds()
//                                    ↓
//                       reset() (once per frame, after render)
//
// Positions are stored in surface space: viewport coordinates minus the
// surface's top-left corner at the time of the event.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::button::{Button, ButtonState};
use super::event::{InputEvent, KeyCode, MouseButton, TouchPhase};
use crate::core::geometry::{rect_contains_point, Point, Rect};

//=== InputTracker ========================================================

/// Logical input state consumed by gameplay code.
#[derive(Debug, Clone)]
pub struct InputTracker {
    buttons: [ButtonState; 3],
    position: Point,
    touch_count: usize,
    surface: Rect,
    primary_key: KeyCode,
}

impl InputTracker {
    /// Creates a tracker for a surface of the given bounds, with Space as
    /// the primary key.
    pub fn new(surface: Rect) -> Self {
        Self {
            buttons: [ButtonState::new(); 3],
            position: Point::ORIGIN,
            touch_count: 0,
            surface,
            primary_key: KeyCode::Space,
        }
    }

    //--- Configuration ----------------------------------------------------

    /// Rebinds the key that drives [`Button::PrimaryKey`].
    pub fn set_primary_key(&mut self, key: KeyCode) {
        self.primary_key = key;
    }

    pub fn primary_key(&self) -> KeyCode {
        self.primary_key
    }

    /// Updates the surface's bounding box (viewport space).
    ///
    /// Called by the host whenever the surface moves or is resized.
    pub fn set_surface(&mut self, surface: Rect) {
        self.surface = surface;
    }

    pub fn surface(&self) -> Rect {
        self.surface
    }

    //--- Button Transitions -----------------------------------------------

    pub fn down(&mut self, button: Button) {
        self.buttons[button.index()].down();
    }

    pub fn up(&mut self, button: Button) {
        self.buttons[button.index()].up();
    }

    /// Clears every button's one-frame pulses and the touch count.
    ///
    /// Must run exactly once per frame, after render.
    pub fn reset(&mut self) {
        for state in &mut self.buttons {
            state.reset();
        }
        self.touch_count = 0;
    }

    //--- Position ---------------------------------------------------------

    /// Stores `(client_x, client_y)` relative to the surface's top-left.
    pub fn update_position(&mut self, client_x: f32, client_y: f32) {
        self.position = Point::new(client_x - self.surface.x, client_y - self.surface.y);
    }

    //--- Event Routing ----------------------------------------------------

    /// Routes one platform event into the button state machines.
    ///
    /// - Only the primary key drives [`Button::PrimaryKey`]
    /// - Only [`MouseButton::Left`] drives [`Button::PointerPrimary`], but
    ///   every pointer event moves the position
    /// - Touch start/end drive [`Button::Tap`]; every touch batch moves the
    ///   position and records its point count
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key } => {
                if *key == self.primary_key {
                    self.down(Button::PrimaryKey);
                } else {
                    trace!(target: "input", "ignored key down: {:?}", key);
                }
            }

            InputEvent::KeyUp { key } => {
                if *key == self.primary_key {
                    self.up(Button::PrimaryKey);
                }
            }

            InputEvent::PointerDown { button, x, y } => {
                self.update_position(*x, *y);
                if *button == MouseButton::Left {
                    self.down(Button::PointerPrimary);
                }
            }

            InputEvent::PointerMoved { x, y } => {
                self.update_position(*x, *y);
            }

            InputEvent::PointerUp { button, x, y } => {
                self.update_position(*x, *y);
                if *button == MouseButton::Left {
                    self.up(Button::PointerPrimary);
                }
            }

            InputEvent::Touch { phase, points } => {
                let Some(latest) = points.last() else {
                    warn!(target: "input", "empty touch batch ({:?}) ignored", phase);
                    return;
                };

                self.update_position(latest.x, latest.y);
                self.touch_count = points.len();

                match phase {
                    TouchPhase::Started => self.down(Button::Tap),
                    TouchPhase::Ended | TouchPhase::Cancelled => self.up(Button::Tap),
                    TouchPhase::Moved => {}
                }
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn button(&self, button: Button) -> &ButtonState {
        &self.buttons[button.index()]
    }

    /// Last pointer/touch position in surface space.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Touch points in the most recent batch of this frame (0 after reset).
    pub fn touch_count(&self) -> usize {
        self.touch_count
    }

    /// While a touch is active, TAP's `held` alone; otherwise any button.
    pub fn any_held(&self) -> bool {
        self.any(ButtonState::held)
    }

    /// While a touch is active, TAP's `pressed` alone; otherwise any button.
    pub fn any_pressed(&self) -> bool {
        self.any(ButtonState::pressed)
    }

    /// Returns `true` if the pointer lies in `[0, w) × [0, h)` of the surface.
    pub fn is_within_bounds(&self) -> bool {
        let local = Rect::new(0.0, 0.0, self.surface.w, self.surface.h);
        rect_contains_point(&local, self.position)
    }

    fn any(&self, flag: fn(&ButtonState) -> bool) -> bool {
        if self.touch_count > 0 {
            return flag(self.button(Button::Tap));
        }
        self.buttons.iter().any(flag)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> InputTracker {
        InputTracker::new(Rect::new(0.0, 0.0, 960.0, 540.0))
    }

    fn touch(phase: TouchPhase, points: &[(f32, f32)]) -> InputEvent {
        InputEvent::Touch {
            phase,
            points: points.iter().copied().map(Point::from).collect(),
        }
    }

    //=====================================================================
    // Keyboard Tests
    //=====================================================================

    #[test]
    fn primary_key_drives_primary_button() {
        let mut input = tracker();
        input.apply(&InputEvent::KeyDown { key: KeyCode::Space });

        let state = input.button(Button::PrimaryKey);
        assert!(state.held());
        assert!(state.pressed());
        assert!(input.any_pressed());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut input = tracker();
        input.apply(&InputEvent::KeyDown { key: KeyCode::KeyA });
        assert!(!input.any_held());
        assert!(!input.any_pressed());
    }

    #[test]
    fn rebound_primary_key() {
        let mut input = tracker();
        input.set_primary_key(KeyCode::ArrowUp);

        input.apply(&InputEvent::KeyDown { key: KeyCode::Space });
        assert!(!input.any_held());

        input.apply(&InputEvent::KeyDown { key: KeyCode::ArrowUp });
        assert!(input.button(Button::PrimaryKey).held());
    }

    #[test]
    fn key_repeat_across_frames() {
        let mut input = tracker();
        input.apply(&InputEvent::KeyDown { key: KeyCode::Space });
        input.reset();

        input.apply(&InputEvent::KeyDown { key: KeyCode::Space });
        let state = input.button(Button::PrimaryKey);
        assert!(!state.pressed());
        assert!(state.repeated());
        assert!(state.held());
        assert!(!input.any_pressed());
        assert!(input.any_held());
    }

    //=====================================================================
    // Pointer Tests
    //=====================================================================

    #[test]
    fn left_button_drives_pointer_primary() {
        let mut input = tracker();
        input.apply(&InputEvent::PointerDown { button: MouseButton::Left, x: 10.0, y: 20.0 });
        assert!(input.button(Button::PointerPrimary).pressed());
        assert_eq!(input.position(), Point::new(10.0, 20.0));

        input.apply(&InputEvent::PointerUp { button: MouseButton::Left, x: 11.0, y: 21.0 });
        assert!(input.button(Button::PointerPrimary).released());
        assert!(!input.button(Button::PointerPrimary).held());
    }

    #[test]
    fn secondary_button_moves_position_only() {
        let mut input = tracker();
        input.apply(&InputEvent::PointerDown { button: MouseButton::Right, x: 5.0, y: 6.0 });
        assert!(!input.any_held());
        assert_eq!(input.position(), Point::new(5.0, 6.0));
    }

    #[test]
    fn position_is_relative_to_surface() {
        let mut input = InputTracker::new(Rect::new(100.0, 50.0, 960.0, 540.0));
        input.apply(&InputEvent::PointerMoved { x: 110.0, y: 70.0 });
        assert_eq!(input.position(), Point::new(10.0, 20.0));

        // Surface moved between frames
        input.set_surface(Rect::new(0.0, 0.0, 960.0, 540.0));
        input.apply(&InputEvent::PointerMoved { x: 110.0, y: 70.0 });
        assert_eq!(input.position(), Point::new(110.0, 70.0));
    }

    #[test]
    fn bounds_are_half_open() {
        let mut input = tracker();

        input.update_position(0.0, 0.0);
        assert!(input.is_within_bounds());

        input.update_position(959.9, 539.9);
        assert!(input.is_within_bounds());

        input.update_position(960.0, 100.0);
        assert!(!input.is_within_bounds());

        input.update_position(100.0, 540.0);
        assert!(!input.is_within_bounds());

        input.update_position(-1.0, 100.0);
        assert!(!input.is_within_bounds());
    }

    //=====================================================================
    // Touch Tests
    //=====================================================================

    #[test]
    fn touch_uses_last_changed_point() {
        let mut input = tracker();
        input.apply(&touch(TouchPhase::Started, &[(1.0, 1.0), (30.0, 40.0)]));

        assert_eq!(input.position(), Point::new(30.0, 40.0));
        assert_eq!(input.touch_count(), 2);
        assert!(input.button(Button::Tap).pressed());
    }

    #[test]
    fn active_touch_masks_keyboard_and_mouse() {
        let mut input = tracker();
        input.apply(&InputEvent::KeyDown { key: KeyCode::Space });
        input.apply(&touch(TouchPhase::Moved, &[(1.0, 1.0)]));

        // Touch active, TAP not pressed: keyboard is ignored
        assert!(!input.any_pressed());
        assert!(!input.any_held());

        input.apply(&touch(TouchPhase::Started, &[(2.0, 2.0)]));
        assert!(input.any_pressed());
        assert!(input.any_held());
    }

    #[test]
    fn reset_clears_touch_count_but_not_tap_held() {
        let mut input = tracker();
        input.apply(&touch(TouchPhase::Started, &[(1.0, 1.0)]));
        input.reset();

        assert_eq!(input.touch_count(), 0);
        assert!(input.button(Button::Tap).held());
        assert!(input.any_held(), "Falls back to OR across buttons");
        assert!(!input.any_pressed());
    }

    #[test]
    fn touch_end_releases_tap() {
        let mut input = tracker();
        input.apply(&touch(TouchPhase::Started, &[(1.0, 1.0)]));
        input.reset();
        input.apply(&touch(TouchPhase::Ended, &[(3.0, 4.0)]));

        let tap = input.button(Button::Tap);
        assert!(tap.released());
        assert!(!tap.held());
        assert_eq!(input.position(), Point::new(3.0, 4.0));
    }

    #[test]
    fn empty_touch_batch_is_noop() {
        let mut input = tracker();
        input.update_position(7.0, 8.0);
        input.apply(&touch(TouchPhase::Started, &[]));

        assert_eq!(input.touch_count(), 0);
        assert_eq!(input.position(), Point::new(7.0, 8.0));
        assert!(!input.button(Button::Tap).held());
    }

    //=====================================================================
    // Frame Lifecycle Tests
    //=====================================================================

    #[test]
    fn reset_clears_pulses_for_all_buttons() {
        let mut input = tracker();
        input.apply(&InputEvent::KeyDown { key: KeyCode::Space });
        input.apply(&InputEvent::PointerDown { button: MouseButton::Left, x: 0.0, y: 0.0 });
        input.reset();

        for button in Button::ALL {
            assert!(!input.button(button).pressed());
            assert!(!input.button(button).released());
            assert!(!input.button(button).repeated());
        }
        assert!(input.button(Button::PrimaryKey).held());
        assert!(input.button(Button::PointerPrimary).held());
    }
}
