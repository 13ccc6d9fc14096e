//=========================================================================
// UI Buttons
//=========================================================================
//
// Hit-testing for on-screen rectangular buttons.
//
// Buttons are declared by their centre point and size and hit-tested in
// stage space. Drawing is left to the game.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::{rect_contains_point, Point, Rect};

//=== ButtonId ============================================================

/// Handle returned by [`ButtonBar::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(usize);

//=== UiButton ============================================================

#[derive(Debug, Clone, PartialEq)]
pub struct UiButton {
    pub rect: Rect,
    pub label: String,
}

//=== ButtonBar ===========================================================

/// Ordered set of buttons; earlier buttons win overlapping hits.
#[derive(Debug, Clone, Default)]
pub struct ButtonBar {
    buttons: Vec<UiButton>,
}

impl ButtonBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `w × h` button centred on `center`.
    pub fn add(&mut self, center: Point, w: f32, h: f32, label: impl Into<String>) -> ButtonId {
        self.buttons.push(UiButton {
            rect: Rect::centered(center, w, h),
            label: label.into(),
        });
        ButtonId(self.buttons.len() - 1)
    }

    pub fn get(&self, id: ButtonId) -> Option<&UiButton> {
        self.buttons.get(id.0)
    }

    pub fn set_label(&mut self, id: ButtonId, label: impl Into<String>) {
        if let Some(button) = self.buttons.get_mut(id.0) {
            button.label = label.into();
        }
    }

    /// First button whose rectangle contains `point`.
    pub fn click_at(&self, point: Point) -> Option<ButtonId> {
        self.buttons
            .iter()
            .position(|button| rect_contains_point(&button.rect, point))
            .map(ButtonId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ButtonId, &UiButton)> {
        self.buttons.iter().enumerate().map(|(i, b)| (ButtonId(i), b))
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_centres_rect() {
        let mut bar = ButtonBar::new();
        let id = bar.add(Point::new(32.0, 32.0), 100.0, 50.0, "MUTE");

        let button = bar.get(id).unwrap();
        assert_eq!(button.rect, Rect::new(-18.0, 7.0, 100.0, 50.0));
        assert_eq!(button.label, "MUTE");
    }

    #[test]
    fn click_at_hits_first_match() {
        let mut bar = ButtonBar::new();
        let first = bar.add(Point::new(50.0, 50.0), 100.0, 100.0, "a");
        let _second = bar.add(Point::new(60.0, 60.0), 100.0, 100.0, "b");

        assert_eq!(bar.click_at(Point::new(55.0, 55.0)), Some(first));
    }

    #[test]
    fn click_at_misses() {
        let mut bar = ButtonBar::new();
        bar.add(Point::new(50.0, 50.0), 20.0, 20.0, "a");

        assert_eq!(bar.click_at(Point::new(0.0, 0.0)), None);
        // Right edge is outside (half-open)
        assert_eq!(bar.click_at(Point::new(60.0, 50.0)), None);
    }

    #[test]
    fn set_label_updates_button() {
        let mut bar = ButtonBar::new();
        let id = bar.add(Point::ORIGIN, 10.0, 10.0, "MUTE");
        bar.set_label(id, "UNMUTE");
        assert_eq!(bar.get(id).map(|b| b.label.as_str()), Some("UNMUTE"));
        assert_eq!(bar.len(), 1);
    }
}
