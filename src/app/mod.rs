//! Application module - the model, its reducer and the session that drives it.
//!
//! This module is organized into several submodules:
//! - `model` - The immutable model and the sketch host seam
//! - `interaction` - Interaction types and the pointer mapping table
//! - `adapter` - Pluggable handler table for interactions
//! - `main_adapter` - Default sketching, selection and navigation behaviour
//! - `update` - The reducer applying one event to a model
//! - `session` - Gesture fold, snapshot publication and settings reload

mod adapter;
mod interaction;
mod main_adapter;
mod model;
mod session;
mod update;

pub use adapter::{Adapter, DragHandler, FileDropHandler, KeyHandler, PressHandler, TextHandler};
pub use interaction::{InteractionMappings, InteractionType, PointerMapping};
pub use model::{
    ApplicationModel, ClientModel, LocalSketchHost, Model, SketchHost, SketchModel, SketchSnapshot,
};
pub use session::Session;
pub use update::update_model;
