//! Pluggable interaction behaviour.
//!
//! An [`Adapter`] is a table of handler functions keyed by
//! [`InteractionType`]. Handlers are fallible; a failing handler is logged
//! and the model it was given is kept, so one bad handler never aborts the
//! fold or leaves a half-applied update behind.

use super::interaction::InteractionType;
use super::model::Model;
use crate::events::KeyEvent;
use crate::geometry::{Path, Point, Screen};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

pub type PressHandler = Arc<dyn Fn(&Model, Point<Screen>) -> anyhow::Result<Model> + Send + Sync>;
pub type DragHandler = Arc<dyn Fn(&Model, &Path<Screen>) -> anyhow::Result<Model> + Send + Sync>;
pub type KeyHandler = Arc<dyn Fn(&Model, &KeyEvent) -> anyhow::Result<Model> + Send + Sync>;
pub type TextHandler = Arc<dyn Fn(&Model, &str) -> anyhow::Result<Model> + Send + Sync>;
pub type FileDropHandler = Arc<dyn Fn(&Model, &[PathBuf]) -> anyhow::Result<Model> + Send + Sync>;

/// Named set of interaction handlers. Missing entries leave the model as is.
#[derive(Clone, Default)]
pub struct Adapter {
    name: String,
    press: HashMap<InteractionType, PressHandler>,
    partial_drag: HashMap<InteractionType, DragHandler>,
    complete_drag: HashMap<InteractionType, DragHandler>,
    key: Option<KeyHandler>,
    text: Option<TextHandler>,
    file_drop: Option<FileDropHandler>,
}

impl Adapter {
    /// An adapter with no handlers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ------------------------------------------------------------------------
    // Builder
    // ------------------------------------------------------------------------

    pub fn on_press<F>(mut self, interaction: InteractionType, handler: F) -> Self
    where
        F: Fn(&Model, Point<Screen>) -> anyhow::Result<Model> + Send + Sync + 'static,
    {
        self.press.insert(interaction, Arc::new(handler));
        self
    }

    pub fn on_partial_drag<F>(mut self, interaction: InteractionType, handler: F) -> Self
    where
        F: Fn(&Model, &Path<Screen>) -> anyhow::Result<Model> + Send + Sync + 'static,
    {
        self.partial_drag.insert(interaction, Arc::new(handler));
        self
    }

    pub fn on_complete_drag<F>(mut self, interaction: InteractionType, handler: F) -> Self
    where
        F: Fn(&Model, &Path<Screen>) -> anyhow::Result<Model> + Send + Sync + 'static,
    {
        self.complete_drag.insert(interaction, Arc::new(handler));
        self
    }

    /// Register one partial-drag handler for several interactions.
    pub fn on_partial_drags<F>(mut self, interactions: &[InteractionType], handler: F) -> Self
    where
        F: Fn(&Model, &Path<Screen>) -> anyhow::Result<Model> + Send + Sync + 'static,
    {
        let handler: DragHandler = Arc::new(handler);
        for &interaction in interactions {
            self.partial_drag.insert(interaction, Arc::clone(&handler));
        }
        self
    }

    pub fn on_key<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Model, &KeyEvent) -> anyhow::Result<Model> + Send + Sync + 'static,
    {
        self.key = Some(Arc::new(handler));
        self
    }

    pub fn on_text<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Model, &str) -> anyhow::Result<Model> + Send + Sync + 'static,
    {
        self.text = Some(Arc::new(handler));
        self
    }

    pub fn on_file_drop<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Model, &[PathBuf]) -> anyhow::Result<Model> + Send + Sync + 'static,
    {
        self.file_drop = Some(Arc::new(handler));
        self
    }

    // ------------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------------

    pub fn handle_press(&self, model: &Model, interaction: InteractionType, point: Point<Screen>) -> Model {
        match self.press.get(&interaction) {
            Some(handler) => self.trap("press", Some(interaction), model, handler(model, point)),
            None => model.clone(),
        }
    }

    pub fn handle_partial_drag(&self, model: &Model, interaction: InteractionType, path: &Path<Screen>) -> Model {
        match self.partial_drag.get(&interaction) {
            Some(handler) => self.trap("partial_drag", Some(interaction), model, handler(model, path)),
            None => model.clone(),
        }
    }

    pub fn handle_complete_drag(&self, model: &Model, interaction: InteractionType, path: &Path<Screen>) -> Model {
        match self.complete_drag.get(&interaction) {
            Some(handler) => self.trap("complete_drag", Some(interaction), model, handler(model, path)),
            None => model.clone(),
        }
    }

    pub fn handle_key(&self, model: &Model, key: &KeyEvent) -> Model {
        match &self.key {
            Some(handler) => self.trap("key", None, model, handler(model, key)),
            None => model.clone(),
        }
    }

    pub fn handle_text(&self, model: &Model, text: &str) -> Model {
        match &self.text {
            Some(handler) => self.trap("text", None, model, handler(model, text)),
            None => model.clone(),
        }
    }

    pub fn handle_file_drop(&self, model: &Model, files: &[PathBuf]) -> Model {
        match &self.file_drop {
            Some(handler) => self.trap("file_drop", None, model, handler(model, files)),
            None => model.clone(),
        }
    }

    fn trap(
        &self,
        handler: &'static str,
        interaction: Option<InteractionType>,
        model: &Model,
        result: anyhow::Result<Model>,
    ) -> Model {
        result.unwrap_or_else(|err| {
            warn!(
                adapter = %self.name,
                handler,
                interaction = ?interaction,
                error = %format!("{err:#}"),
                "Adapter handler failed; keeping previous model"
            );
            model.clone()
        })
    }
}

impl fmt::Debug for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapter")
            .field("name", &self.name)
            .field("press", &keys(&self.press))
            .field("partial_drag", &keys(&self.partial_drag))
            .field("complete_drag", &keys(&self.complete_drag))
            .field("key", &self.key.is_some())
            .field("text", &self.text.is_some())
            .field("file_drop", &self.file_drop.is_some())
            .finish()
    }
}

fn keys<H>(table: &HashMap<InteractionType, H>) -> Vec<InteractionType> {
    let mut keys: Vec<InteractionType> = table.keys().copied().collect();
    keys.sort();
    keys
}
