// Input manager - routes window events into player input state

use super::action::{Action, Binding};
use super::config::InputConfig;
use super::player::PlayerInput;
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Coordinates bindings and the player's per-frame input state
#[derive(Debug, Default)]
pub struct InputManager {
    /// Binding configuration
    config: InputConfig,

    /// Input state for the player
    player: PlayerInput,

    /// Physical inputs currently down, with the action each was bound to when pressed
    held: HashMap<Binding, Action>,
}

impl InputManager {
    /// Create an input manager with the default bindings
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    /// Create an input manager with custom bindings
    pub fn with_config(config: InputConfig) -> Self {
        for action in config.unbound_actions() {
            log::warn!("No binding for {:?}; the action can never fire", action);
        }

        Self {
            config,
            player: PlayerInput::new(),
            held: HashMap::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Key repeats are not new presses
        if event.repeat {
            return;
        }

        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_binding(Binding::key(key_code), event.state);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        self.process_binding(Binding::mouse(button), state);
    }

    /// Apply a press or release of a physical input
    ///
    /// An action bound to several inputs goes down with the first of them and
    /// up with the last.
    pub fn process_binding(&mut self, binding: Binding, state: ElementState) {
        match state {
            ElementState::Pressed => {
                let Some(action) = self.config.action_for(binding) else {
                    return;
                };
                self.held.insert(binding, action);
                self.player.press(action);
            }
            ElementState::Released => {
                let Some(action) = self.held.remove(&binding) else {
                    return;
                };
                if self.held.values().any(|held| *held == action) {
                    log::trace!("{:?} still held by another binding", action);
                    return;
                }
                self.player.release(action);
            }
        }
    }

    /// Close the current frame
    /// Call this once per fixed update, after gameplay has read the input
    pub fn update(&mut self) {
        self.player.update();
    }

    /// Get the player's input state
    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    /// Get the player's input state mutably
    pub fn player_mut(&mut self) -> &mut PlayerInput {
        &mut self.player
    }

    /// Check whether a meta action was pressed this frame
    pub fn menu_requested(&self) -> bool {
        self.player.just_pressed(Action::Menu)
    }

    /// Get the binding configuration
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Get the binding configuration mutably
    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Reset the player's input state
    pub fn reset(&mut self) {
        self.held.clear();
        self.player.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::InputSource;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_key_press_reaches_player() {
        let mut manager = InputManager::new();
        manager.process_binding(Binding::key(KeyCode::Space), ElementState::Pressed);

        assert!(manager.player().edge_pressed(Action::Jump));
    }

    #[test]
    fn test_mouse_press_reaches_player() {
        let mut manager = InputManager::new();
        manager.process_mouse_button(MouseButton::Left, ElementState::Pressed);

        assert!(manager.player().edge_pressed(Action::Attack));
    }

    #[test]
    fn test_release_edge() {
        let mut manager = InputManager::new();
        manager.process_binding(Binding::key(KeyCode::KeyW), ElementState::Pressed);
        manager.update();
        manager.process_binding(Binding::key(KeyCode::KeyW), ElementState::Released);

        assert!(!manager.player().is_pressed(Action::Jump));
        assert!(manager.player().edge_released(Action::Jump));
    }

    #[test]
    fn test_unbound_input_is_ignored() {
        let mut manager = InputManager::new();
        manager.process_binding(Binding::key(KeyCode::KeyZ), ElementState::Pressed);

        assert!(!Action::EDGE_TRIGGERED
            .iter()
            .any(|action| manager.player().is_pressed(*action)));
    }

    #[test]
    fn test_update_clears_edges() {
        let mut manager = InputManager::new();
        manager.process_binding(Binding::key(KeyCode::ShiftLeft), ElementState::Pressed);
        assert!(manager.player().edge_pressed(Action::Dash));

        manager.update();
        assert!(!manager.player().edge_pressed(Action::Dash));
        assert!(manager.player().is_pressed(Action::Dash));
    }

    #[test]
    fn test_menu_requested() {
        let mut manager = InputManager::new();
        manager.process_binding(Binding::key(KeyCode::Escape), ElementState::Pressed);
        assert!(manager.menu_requested());
    }

    #[test]
    fn test_rebinding_through_config() {
        let mut manager = InputManager::new();
        manager
            .config_mut()
            .bind(Binding::key(KeyCode::KeyK), Action::Dash);
        manager.process_binding(Binding::key(KeyCode::KeyK), ElementState::Pressed);

        assert!(manager.player().edge_pressed(Action::Dash));
    }

    #[test]
    fn test_reset() {
        let mut manager = InputManager::new();
        manager.process_binding(Binding::key(KeyCode::KeyD), ElementState::Pressed);
        manager.reset();

        assert_eq!(manager.player().axis_value(), 0.0);
    }

    #[test]
    fn test_axis_holds_while_another_key_is_down() {
        let mut manager = InputManager::new();
        manager.process_binding(Binding::key(KeyCode::KeyA), ElementState::Pressed);
        manager.process_binding(Binding::key(KeyCode::ArrowLeft), ElementState::Pressed);
        manager.update();

        manager.process_binding(Binding::key(KeyCode::KeyA), ElementState::Released);
        assert_eq!(manager.player().axis_value(), -1.0);
        assert!(!manager.player().edge_released(Action::MoveLeft));

        manager.process_binding(Binding::key(KeyCode::ArrowLeft), ElementState::Released);
        assert_eq!(manager.player().axis_value(), 0.0);
        assert!(manager.player().edge_released(Action::MoveLeft));
    }

    #[test]
    fn test_jump_released_by_last_key_only() {
        let mut manager = InputManager::new();
        manager.process_binding(Binding::key(KeyCode::Space), ElementState::Pressed);
        manager.update();

        // Second key on the same action is not a new press
        manager.process_binding(Binding::key(KeyCode::KeyW), ElementState::Pressed);
        assert!(!manager.player().edge_pressed(Action::Jump));

        manager.process_binding(Binding::key(KeyCode::KeyW), ElementState::Released);
        assert!(manager.player().is_pressed(Action::Jump));
        assert!(!manager.player().edge_released(Action::Jump));
        manager.update();

        manager.process_binding(Binding::key(KeyCode::Space), ElementState::Released);
        assert!(!manager.player().is_pressed(Action::Jump));
        assert!(manager.player().edge_released(Action::Jump));
    }

    #[test]
    fn test_release_follows_binding_at_press_time() {
        let mut manager = InputManager::new();
        manager.process_binding(Binding::key(KeyCode::KeyK), ElementState::Pressed);
        manager
            .config_mut()
            .bind(Binding::key(KeyCode::KeyK), Action::Dash);
        manager.process_binding(Binding::key(KeyCode::KeyK), ElementState::Released);

        // K was unbound when it went down, so its release touches nothing
        assert!(!manager.player().edge_released(Action::Dash));

        manager.process_binding(Binding::key(KeyCode::KeyK), ElementState::Pressed);
        manager.process_binding(Binding::key(KeyCode::KeyK), ElementState::Released);
        assert!(manager.player().edge_released(Action::Dash));
    }

    #[test]
    fn test_reset_forgets_held_keys() {
        let mut manager = InputManager::new();
        manager.process_binding(Binding::key(KeyCode::KeyA), ElementState::Pressed);
        manager.process_binding(Binding::key(KeyCode::ArrowLeft), ElementState::Pressed);
        manager.reset();

        manager.process_binding(Binding::key(KeyCode::KeyA), ElementState::Pressed);
        manager.update();
        manager.process_binding(Binding::key(KeyCode::KeyA), ElementState::Released);
        assert!(manager.player().edge_released(Action::MoveLeft));
    }
}
