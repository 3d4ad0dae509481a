//! Pointer input handling: device normalisation and gesture recognition.
//!
//! ## Architecture
//!
//! Raw callbacks go through [`PointerDevice`], which enforces the
//! single-pointer assumption, then through [`EventFold`], an explicit state
//! machine ([`PointerContext`]) that turns presses, moves and releases into
//! press and drag events for the model.
//!
//! ## Modules
//!
//! - `device` - Button/pressure/scroll normalisation
//! - `state` - Gesture state machine enum and helper methods
//! - `gesture` - The fold itself and its timing configuration

mod device;
mod gesture;
mod state;

pub use device::PointerDevice;
pub use gesture::{EventFold, GestureConfig};
pub use state::PointerContext;
