// Input handling system
//
// Turns winit keyboard and mouse events into per-frame action state for the player,
// and exposes it to gameplay through the `InputSource` trait.
//
// ## Architecture
//
// - `action`: Game actions and default bindings
// - `config`: Rebindable mapping from physical inputs to actions
// - `player`: Pressed/just-pressed/just-released state for one player
// - `manager`: Routes winit events through the config into the player state
// - `source`: The `InputSource` trait and the `FrameInput` snapshot the controller reads
//
// ## Usage Example
//
// ```rust
// use rusted_knight::engine::input::{Action, InputManager, InputSource};
//
// let mut input_manager = InputManager::new();
//
// // In your event loop
// input_manager.process_keyboard_event(&key_event);
//
// // Gameplay reads the frame's state, then the frame is closed
// if input_manager.player().edge_pressed(Action::Jump) {
//     // jump pressed this frame
// }
// input_manager.update();
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;
pub mod source;

// Re-export commonly used types
pub use action::{Action, Binding};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::PlayerInput;
pub use source::{FrameInput, InputSource};
