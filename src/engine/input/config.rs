// Input configuration and remapping system

use super::action::{default_bindings, Action, Binding};
use std::collections::HashMap;

/// Maps physical inputs (keys/buttons) to game actions
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from bindings to actions
    bindings: HashMap<Binding, Action>,

    /// Reverse mapping for quick lookups (action -> all bindings)
    action_to_bindings: HashMap<Action, Vec<Binding>>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_bindings: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(Binding, Action)>) -> Self {
        let mut config = Self::new();
        for (binding, action) in bindings {
            config.bind(binding, action);
        }
        config
    }

    /// Bind a physical input to an action
    pub fn bind(&mut self, binding: Binding, action: Action) {
        // A binding drives exactly one action
        self.unbind(binding);

        self.bindings.insert(binding, action);
        self.action_to_bindings
            .entry(action)
            .or_default()
            .push(binding);
    }

    /// Remove a physical input's binding
    pub fn unbind(&mut self, binding: Binding) {
        if let Some(action) = self.bindings.remove(&binding) {
            if let Some(bindings) = self.action_to_bindings.get_mut(&action) {
                bindings.retain(|b| *b != binding);
                if bindings.is_empty() {
                    self.action_to_bindings.remove(&action);
                }
            }
        }
    }

    /// Remove every binding of an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(bindings) = self.action_to_bindings.remove(&action) {
            for binding in bindings {
                self.bindings.remove(&binding);
            }
        }
    }

    /// Get the action bound to a physical input
    pub fn action_for(&self, binding: Binding) -> Option<Action> {
        self.bindings.get(&binding).copied()
    }

    /// Get all physical inputs bound to an action
    pub fn bindings_for(&self, action: Action) -> Vec<Binding> {
        self.action_to_bindings
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_bindings.contains_key(&action)
    }

    /// Actions the controller listens to that currently have no binding
    pub fn unbound_actions(&self) -> Vec<Action> {
        [Action::MoveLeft, Action::MoveRight]
            .into_iter()
            .chain(Action::EDGE_TRIGGERED)
            .filter(|action| !self.has_binding(*action))
            .collect()
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_bindings.clear();
    }

    /// Reset to the default bindings
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (binding, action) in default_bindings() {
            self.bind(binding, action);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::MouseButton;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_bind_action() {
        let mut config = InputConfig::new();
        let binding = Binding::key(KeyCode::KeyA);
        config.bind(binding, Action::MoveLeft);

        assert_eq!(config.action_for(binding), Some(Action::MoveLeft));
    }

    #[test]
    fn test_unbind() {
        let mut config = InputConfig::new();
        let binding = Binding::key(KeyCode::KeyA);
        config.bind(binding, Action::MoveLeft);
        config.unbind(binding);

        assert_eq!(config.action_for(binding), None);
        assert!(!config.has_binding(Action::MoveLeft));
    }

    #[test]
    fn test_unbind_action() {
        let mut config = InputConfig::new();
        let space = Binding::key(KeyCode::Space);
        let w = Binding::key(KeyCode::KeyW);

        config.bind(space, Action::Jump);
        config.bind(w, Action::Jump);
        config.unbind_action(Action::Jump);

        assert_eq!(config.action_for(space), None);
        assert_eq!(config.action_for(w), None);
    }

    #[test]
    fn test_bindings_for() {
        let mut config = InputConfig::new();
        let mouse = Binding::mouse(MouseButton::Left);
        let key = Binding::key(KeyCode::KeyJ);

        config.bind(mouse, Action::Attack);
        config.bind(key, Action::Attack);

        let bindings = config.bindings_for(Action::Attack);
        assert_eq!(bindings.len(), 2);
        assert!(bindings.contains(&mouse));
        assert!(bindings.contains(&key));
    }

    #[test]
    fn test_rebind_moves_binding_to_new_action() {
        let mut config = InputConfig::new();
        let shift = Binding::key(KeyCode::ShiftLeft);

        config.bind(shift, Action::Dash);
        config.bind(shift, Action::Jump);

        assert_eq!(config.action_for(shift), Some(Action::Jump));
        assert!(!config.has_binding(Action::Dash));
    }

    #[test]
    fn test_unbound_actions() {
        let mut config = InputConfig::default();
        assert!(config.unbound_actions().is_empty());

        config.unbind_action(Action::Dash);
        assert_eq!(config.unbound_actions(), vec![Action::Dash]);
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::new();
        config.bind(Binding::key(KeyCode::KeyZ), Action::Dash);
        config.reset_to_defaults();

        assert_eq!(config.action_for(Binding::key(KeyCode::KeyZ)), None);
        assert!(config.has_binding(Action::Dash));
        assert!(config.has_binding(Action::Jump));
    }
}
