// Game action definitions and default bindings

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    MoveLeft,
    MoveRight,
    Jump,
    Dash,

    // Combat
    Attack,

    // Meta actions
    Menu,
}

impl Action {
    /// Actions whose press/release edges feed the motion controller
    pub const EDGE_TRIGGERED: [Action; 3] = [Action::Jump, Action::Dash, Action::Attack];
}

/// A physical input bound to an action (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl Binding {
    /// Create a keyboard binding
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button binding
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard/mouse bindings for the player
pub fn default_bindings() -> Vec<(Binding, Action)> {
    vec![
        // Movement (WASD plus arrows)
        (Binding::key(KeyCode::KeyA), Action::MoveLeft),
        (Binding::key(KeyCode::KeyD), Action::MoveRight),
        (Binding::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (Binding::key(KeyCode::ArrowRight), Action::MoveRight),
        (Binding::key(KeyCode::Space), Action::Jump),
        (Binding::key(KeyCode::KeyW), Action::Jump),
        (Binding::key(KeyCode::ShiftLeft), Action::Dash),
        // Attack on left mouse, with a keyboard fallback
        (Binding::mouse(MouseButton::Left), Action::Attack),
        (Binding::key(KeyCode::KeyJ), Action::Attack),
        (Binding::key(KeyCode::Escape), Action::Menu),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_keyboard_creation() {
        let binding = Binding::key(KeyCode::KeyA);
        assert_eq!(binding, Binding::Keyboard(KeyCode::KeyA));
    }

    #[test]
    fn test_binding_mouse_creation() {
        let binding = Binding::mouse(MouseButton::Left);
        assert_eq!(binding, Binding::Mouse(MouseButton::Left));
    }

    #[test]
    fn test_every_edge_action_has_a_default_binding() {
        let bindings = default_bindings();
        for action in Action::EDGE_TRIGGERED {
            assert!(
                bindings.iter().any(|(_, bound)| *bound == action),
                "{action:?} has no default binding"
            );
        }
    }

    #[test]
    fn test_attack_uses_left_mouse() {
        let bindings = default_bindings();
        assert!(bindings
            .iter()
            .any(|(binding, action)| *action == Action::Attack
                && *binding == Binding::Mouse(MouseButton::Left)));
    }

    #[test]
    fn test_no_duplicate_bindings() {
        let bindings = default_bindings();
        let mut seen = std::collections::HashSet::new();
        for (binding, _) in bindings {
            assert!(seen.insert(binding), "Duplicate binding found: {binding:?}");
        }
    }
}
