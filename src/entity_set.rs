//! Persistent entity collection with visibility culling.
//!
//! `add` returns a new set and leaves the receiver untouched. Entity storage
//! is shared between versions; the spatial index is cloned on write.

use crate::constants::DETAIL_THRESHOLD;
use crate::entity::{Entity, EntityId, StoredEntity};
use crate::geometry::{Scalar, World};
use crate::profile_scope;
use crate::spatial_index::SpatialIndex;
use crate::viewport::Viewport;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct EntitySet {
    entities: Arc<Vec<Arc<StoredEntity>>>,
    index: Arc<SpatialIndex>,
}

impl EntitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from entities, assigning ids in iteration order.
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let stored: Vec<Arc<StoredEntity>> = entities
            .into_iter()
            .enumerate()
            .map(|(i, entity)| {
                Arc::new(StoredEntity {
                    id: EntityId(i as u64),
                    entity,
                })
            })
            .collect();

        let index = SpatialIndex::from_entries(
            stored.iter().map(|s| (s.id, s.entity.bounding_area())),
        );

        Self {
            entities: Arc::new(stored),
            index: Arc::new(index),
        }
    }

    /// A new set with `entity` appended, and the id it was given.
    pub fn add(&self, entity: Entity) -> (Self, EntityId) {
        let id = EntityId(self.entities.len() as u64);

        let mut index = SpatialIndex::clone(&self.index);
        index.insert(id, &entity.bounding_area());

        let mut entities = Vec::clone(&self.entities);
        entities.push(Arc::new(StoredEntity { id, entity }));

        (
            Self {
                entities: Arc::new(entities),
                index: Arc::new(index),
            },
            id,
        )
    }

    pub fn get(&self, id: EntityId) -> Option<&StoredEntity> {
        usize::try_from(id.0)
            .ok()
            .and_then(|i| self.entities.get(i))
            .map(Arc::as_ref)
    }

    /// Every entity, in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &StoredEntity> {
        self.entities.iter().map(Arc::as_ref)
    }

    /// Entities that strictly overlap the viewport's world area and whose
    /// detail projects to more than [`DETAIL_THRESHOLD`] pixels, in
    /// insertion order.
    pub fn all_visible(&self, viewport: &Viewport) -> Vec<&StoredEntity> {
        profile_scope!("entity_set::all_visible");

        let area = viewport.to_bounding_area();
        let to_screen = viewport.world_to_screen();
        let is_detailed = |detail: Scalar<World>| detail.transform(&to_screen).value > DETAIL_THRESHOLD;

        let mut ids = self.index.query_area(&area);
        ids.sort_unstable();

        ids.into_iter()
            .filter_map(|id| self.get(id))
            .filter(|stored| is_detailed(stored.entity.detail()))
            .filter(|stored| stored.entity.bounding_area().overlaps(&area))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl fmt::Debug for EntitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntitySet")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
