//! Input-to-model core of a freehand sketching canvas.
//!
//! ## Architecture
//!
//! ```text
//! raw callbacks → PointerDevice → EventFold (gesture state machine)
//!                                      │ Event
//!                                      ▼
//!                                update_model ──► Adapter handlers
//!                                      │ Model
//!                                      ▼
//!                  Session: SnapshotCell + Broadcaster ──► draw_model → DrawContext
//! ```
//!
//! Models are immutable. Every input produces a new [`app::Model`]; the
//! gesture fold keeps the pre-gesture model so a completed drag replaces its
//! partial previews instead of stacking on them.
//!
//! ## Modules
//!
//! - `geometry` - Phantom-typed vectors, bounds and paths
//! - `viewport` - World/view/screen transforms
//! - `entity`, `entity_set`, `spatial_index` - Sketch contents and culling
//! - `input` - Device normalisation and gesture recognition
//! - `app` - Model, reducer, adapters and the session
//! - `render` - Drawing contract
//! - `settings`, `settings_watcher` - JSON settings with hot reload

pub mod app;
pub mod colour;
pub mod constants;
pub mod entity;
pub mod entity_set;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod perf;
pub mod render;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod subscription;
pub mod viewport;
pub mod visual_hint;

pub use app::{Adapter, InteractionType, Model, Session, update_model};
pub use error::{InkboardError, InkboardResult};
pub use events::{Event, InputEvent, PointerMode, ScrollMode};
