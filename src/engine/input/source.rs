// The input boundary the motion controller reads each frame

use super::action::Action;

/// Per-frame input queries consumed by gameplay
///
/// Edge queries report transitions that happened during the current frame only;
/// holding a button down is not a press on later frames.
pub trait InputSource {
    /// Horizontal axis in `[-1, 1]` (negative is left)
    fn axis_value(&self) -> f32;

    /// Whether `action` went down this frame
    fn edge_pressed(&self, action: Action) -> bool;

    /// Whether `action` went up this frame
    fn edge_released(&self, action: Action) -> bool;
}

/// Snapshot of everything the controller reads from an `InputSource` in one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub axis: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub dash_pressed: bool,
    pub attack_pressed: bool,
}

impl FrameInput {
    /// Read the current frame from an input source
    pub fn capture(source: &impl InputSource) -> Self {
        Self {
            axis: source.axis_value().clamp(-1.0, 1.0),
            jump_pressed: source.edge_pressed(Action::Jump),
            jump_released: source.edge_released(Action::Jump),
            dash_pressed: source.edge_pressed(Action::Dash),
            attack_pressed: source.edge_pressed(Action::Attack),
        }
    }

    /// Input with only a horizontal axis value
    pub fn axis(axis: f32) -> Self {
        Self {
            axis,
            ..Self::default()
        }
    }

    /// Jump pressed this frame
    pub fn jump() -> Self {
        Self {
            jump_pressed: true,
            ..Self::default()
        }
    }

    /// Jump released this frame
    pub fn jump_release() -> Self {
        Self {
            jump_released: true,
            ..Self::default()
        }
    }

    /// Dash pressed this frame
    pub fn dash() -> Self {
        Self {
            dash_pressed: true,
            ..Self::default()
        }
    }

    /// Attack pressed this frame
    pub fn attack() -> Self {
        Self {
            attack_pressed: true,
            ..Self::default()
        }
    }
}

impl InputSource for FrameInput {
    fn axis_value(&self) -> f32 {
        self.axis
    }

    fn edge_pressed(&self, action: Action) -> bool {
        match action {
            Action::Jump => self.jump_pressed,
            Action::Dash => self.dash_pressed,
            Action::Attack => self.attack_pressed,
            _ => false,
        }
    }

    fn edge_released(&self, action: Action) -> bool {
        match action {
            Action::Jump => self.jump_released,
            _ => false,
        }
    }
}
