//! The immutable application model.
//!
//! Every update builds a new [`Model`]. Unchanged parts are shared by
//! reference (`Arc`) between versions, so the fold can keep the pre-gesture
//! model around cheaply and renderers can hold old snapshots safely.

use super::adapter::Adapter;
use super::interaction::{InteractionMappings, InteractionType};
use crate::colour::Colour;
use crate::constants::{LINE_WIDTH, POINT_SIZE, SCROLL_TRANSLATION_SCALING};
use crate::entity::{Entity, EntityId};
use crate::entity_set::EntitySet;
use crate::events::PointerMode;
use crate::geometry::{Screen, Vector, World};
use crate::viewport::Viewport;
use crate::visual_hint::VisualHint;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// Sketch host
// ============================================================================

/// The entities a host provides at startup.
#[derive(Debug, Clone, Default)]
pub struct SketchSnapshot {
    pub entities: EntitySet,
}

/// Source of the sketch being edited. Queried once when the model is built.
pub trait SketchHost: fmt::Debug + Send + Sync {
    fn constant_snapshot(&self) -> SketchSnapshot;
}

/// In-process host with a fixed set of starting entities.
#[derive(Debug, Clone, Default)]
pub struct LocalSketchHost {
    entities: Vec<Entity>,
}

impl LocalSketchHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        Self {
            entities: entities.into_iter().collect(),
        }
    }
}

impl SketchHost for LocalSketchHost {
    fn constant_snapshot(&self) -> SketchSnapshot {
        SketchSnapshot {
            entities: EntitySet::from_entities(self.entities.iter().cloned()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SketchModel {
    host: Arc<dyn SketchHost>,
    pub snapshot: SketchSnapshot,
}

impl SketchModel {
    pub fn from_host(host: Arc<dyn SketchHost>) -> Self {
        let snapshot = host.constant_snapshot();
        tracing::debug!(entities = snapshot.entities.len(), "loaded sketch snapshot");
        Self { host, snapshot }
    }

    pub fn host(&self) -> &Arc<dyn SketchHost> {
        &self.host
    }

    pub fn entities(&self) -> &EntitySet {
        &self.snapshot.entities
    }
}

// ============================================================================
// Client
// ============================================================================

/// Drawing style of this client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientModel {
    pub colour: Colour,
    /// Radius multiplier for tapped points, in pixels
    pub point_size: f64,
    /// Width multiplier for strokes, in pixels
    pub line_width: f64,
    /// Replace strokes with a fitted curve
    pub smooth_strokes: bool,
}

impl Default for ClientModel {
    fn default() -> Self {
        Self {
            colour: Colour::default(),
            point_size: POINT_SIZE,
            line_width: LINE_WIDTH,
            smooth_strokes: false,
        }
    }
}

// ============================================================================
// Application
// ============================================================================

#[derive(Debug, Clone)]
pub struct ApplicationModel {
    pub selected: Arc<BTreeSet<EntityId>>,
    pub last_added: Option<EntityId>,
    pub adapter: Arc<Adapter>,
    /// Last known pointer position
    pub pointer: Vector<Screen>,
    pub visual_hint: VisualHint,
    pub viewport: Viewport,
    pub pointer_mappings: Arc<InteractionMappings>,
    /// Pixels panned per unit of primary scroll
    pub scroll_translation_scale: f64,
}

impl Default for ApplicationModel {
    fn default() -> Self {
        Self {
            selected: Arc::default(),
            last_added: None,
            adapter: Arc::new(Adapter::main()),
            pointer: Vector::zero(),
            visual_hint: VisualHint::None,
            viewport: Viewport::default(),
            pointer_mappings: Arc::new(InteractionMappings::default()),
            scroll_translation_scale: SCROLL_TRANSLATION_SCALING,
        }
    }
}

// ============================================================================
// Model
// ============================================================================

#[derive(Debug, Clone)]
pub struct Model {
    pub sketch: SketchModel,
    pub client: ClientModel,
    pub application: ApplicationModel,
}

impl Model {
    pub fn new(host: Arc<dyn SketchHost>) -> Self {
        Self {
            sketch: SketchModel::from_host(host),
            client: ClientModel::default(),
            application: ApplicationModel::default(),
        }
    }

    pub fn entities(&self) -> &EntitySet {
        self.sketch.entities()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.application.viewport
    }

    pub fn interaction_for(&self, mode: PointerMode, alternate: bool) -> InteractionType {
        self.application.pointer_mappings.resolve(mode, alternate)
    }

    pub fn is_selected(&self, id: EntityId) -> bool {
        self.application.selected.contains(&id)
    }

    // ------------------------------------------------------------------------
    // Field updates. Each returns a new model.
    // ------------------------------------------------------------------------

    pub fn with_client(&self, client: ClientModel) -> Self {
        Self {
            client,
            ..self.clone()
        }
    }

    fn with_application(&self, application: ApplicationModel) -> Self {
        Self {
            application,
            ..self.clone()
        }
    }

    fn with_viewport(&self, viewport: Viewport) -> Self {
        self.with_application(ApplicationModel {
            viewport,
            ..self.application.clone()
        })
    }

    pub fn with_window_size(&self, window_size: Vector<Screen>) -> Self {
        self.with_viewport(self.application.viewport.with_window_size(window_size))
    }

    pub fn translate_viewport(&self, translation: Vector<World>) -> Self {
        self.with_viewport(self.application.viewport.translated(translation))
    }

    /// Zoom by `adjustment` (log2) around the screen point `anchor`.
    pub fn zoom_viewport(&self, adjustment: f64, anchor: Vector<Screen>) -> Self {
        self.with_viewport(self.application.viewport.zoomed_around(adjustment, anchor))
    }

    pub fn with_pointer(&self, pointer: Vector<Screen>) -> Self {
        self.with_application(ApplicationModel {
            pointer,
            ..self.application.clone()
        })
    }

    pub fn with_visual_hint(&self, visual_hint: VisualHint) -> Self {
        self.with_application(ApplicationModel {
            visual_hint,
            ..self.application.clone()
        })
    }

    pub fn with_adapter(&self, adapter: Arc<Adapter>) -> Self {
        self.with_application(ApplicationModel {
            adapter,
            ..self.application.clone()
        })
    }

    pub fn with_pointer_mappings(&self, pointer_mappings: Arc<InteractionMappings>) -> Self {
        self.with_application(ApplicationModel {
            pointer_mappings,
            ..self.application.clone()
        })
    }

    pub fn with_scroll_translation_scale(&self, scroll_translation_scale: f64) -> Self {
        self.with_application(ApplicationModel {
            scroll_translation_scale,
            ..self.application.clone()
        })
    }

    /// Replace the selection.
    pub fn select(&self, ids: impl IntoIterator<Item = EntityId>) -> Self {
        self.with_application(ApplicationModel {
            selected: Arc::new(ids.into_iter().collect()),
            ..self.application.clone()
        })
    }

    pub fn deselect(&self) -> Self {
        if self.application.selected.is_empty() {
            return self.clone();
        }
        self.select([])
    }

    /// Add an entity, remember it as the last added and clear the selection.
    pub fn add_entity(&self, entity: Entity) -> Self {
        let (entities, id) = self.sketch.snapshot.entities.add(entity);
        tracing::trace!(%id, "entity added");

        Self {
            sketch: SketchModel {
                snapshot: SketchSnapshot { entities },
                ..self.sketch.clone()
            },
            client: self.client.clone(),
            application: ApplicationModel {
                last_added: Some(id),
                ..self.application.clone()
            },
        }
        .deselect()
    }
}
