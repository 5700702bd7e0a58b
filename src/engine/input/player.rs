// Player input state management

use super::action::Action;
use super::source::InputSource;
use std::collections::HashSet;

/// Represents the input state for the local player
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently held
    pressed: HashSet<Action>,

    /// Actions that went down this frame
    just_pressed: HashSet<Action>,

    /// Actions that went up this frame
    just_released: HashSet<Action>,
}

impl PlayerInput {
    /// Create a new player input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Close the current frame
    /// Call this once per frame after gameplay has read the input
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Raw horizontal direction from the held movement actions (-1.0, 0.0 or 1.0)
    pub fn horizontal(&self) -> f32 {
        let mut horizontal = 0.0;

        if self.is_pressed(Action::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.is_pressed(Action::MoveRight) {
            horizontal += 1.0;
        }

        horizontal
    }
}

impl InputSource for PlayerInput {
    fn axis_value(&self) -> f32 {
        self.horizontal()
    }

    fn edge_pressed(&self, action: Action) -> bool {
        self.just_pressed(action)
    }

    fn edge_released(&self, action: Action) -> bool {
        self.just_released(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        assert!(input.is_pressed(Action::Jump));
        assert!(input.edge_pressed(Action::Jump));
    }

    #[test]
    fn test_release_action() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.update();
        input.release(Action::Jump);
        assert!(!input.is_pressed(Action::Jump));
        assert!(input.edge_released(Action::Jump));
    }

    #[test]
    fn test_edges_cleared_on_update() {
        let mut input = PlayerInput::new();
        input.press(Action::Dash);
        assert!(input.edge_pressed(Action::Dash));

        input.update();
        assert!(input.is_pressed(Action::Dash));
        assert!(!input.edge_pressed(Action::Dash));
    }

    #[test]
    fn test_held_key_is_not_pressed_again() {
        let mut input = PlayerInput::new();
        input.press(Action::Attack);
        input.update();
        // OS key repeat re-sends the press
        input.press(Action::Attack);
        assert!(!input.edge_pressed(Action::Attack));
    }

    #[test]
    fn test_tap_between_steps_reports_both_edges() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.release(Action::Jump);

        assert!(input.edge_pressed(Action::Jump));
        assert!(input.edge_released(Action::Jump));
        assert!(!input.is_pressed(Action::Jump));
    }

    #[test]
    fn test_release_unpressed_action() {
        let mut input = PlayerInput::new();
        input.release(Action::Jump);
        assert!(!input.edge_released(Action::Jump));
    }

    #[test]
    fn test_axis_value() {
        let mut input = PlayerInput::new();
        assert_eq!(input.axis_value(), 0.0);

        input.press(Action::MoveRight);
        assert_eq!(input.axis_value(), 1.0);

        input.press(Action::MoveLeft);
        assert_eq!(input.axis_value(), 0.0);

        input.release(Action::MoveRight);
        assert_eq!(input.axis_value(), -1.0);
    }

    #[test]
    fn test_reset() {
        let mut input = PlayerInput::new();
        input.press(Action::Jump);
        input.press(Action::MoveLeft);
        input.reset();

        assert!(!input.is_pressed(Action::Jump));
        assert_eq!(input.axis_value(), 0.0);
    }
}
