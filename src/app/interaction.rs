//! Interaction types and the pointer gesture → interaction table.

use crate::error::{InkboardError, InkboardResult};
use crate::events::PointerMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What a pointer gesture means to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionType {
    /// Drawing points and strokes
    Sketch,
    /// Panning around the sketch
    Navigation,
    /// Movement based on entity metadata
    SpecialNavigation,
    /// Selecting entities by geometry
    SelectSpatial,
    /// Selecting entities by insertion time
    SelectTemporal,
    /// Selecting entities by metadata
    SelectMeta,
    /// Application-wide action
    Action,
}

/// One row of the mapping table, as stored in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerMapping {
    pub mode: PointerMode,
    #[serde(default)]
    pub alternate: bool,
    pub interaction: InteractionType,
}

impl PointerMapping {
    pub const fn new(mode: PointerMode, alternate: bool, interaction: InteractionType) -> Self {
        Self {
            mode,
            alternate,
            interaction,
        }
    }

    /// Primary draws, secondary selects, tertiary navigates; the alternate
    /// of each picks the variant.
    pub fn defaults() -> Vec<PointerMapping> {
        use InteractionType::*;
        use PointerMode::*;

        vec![
            Self::new(Primary, false, Sketch),
            Self::new(Primary, true, SelectMeta),
            Self::new(Secondary, false, SelectSpatial),
            Self::new(Secondary, true, SelectTemporal),
            Self::new(Tertiary, false, Navigation),
            Self::new(Tertiary, true, SpecialNavigation),
        ]
    }
}

/// Lookup table from `(mode, alternate)` to [`InteractionType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionMappings {
    table: BTreeMap<(PointerMode, bool), InteractionType>,
}

impl InteractionMappings {
    /// A table with no entries; every gesture resolves to `Sketch`.
    pub fn empty() -> Self {
        Self {
            table: BTreeMap::new(),
        }
    }

    pub fn get(&self, mode: PointerMode, alternate: bool) -> Option<InteractionType> {
        self.table.get(&(mode, alternate)).copied()
    }

    /// The mapped interaction, falling back to `Sketch` for unmapped gestures.
    pub fn resolve(&self, mode: PointerMode, alternate: bool) -> InteractionType {
        self.get(mode, alternate).unwrap_or(InteractionType::Sketch)
    }

    /// Same table with one entry replaced.
    pub fn with(mut self, mode: PointerMode, alternate: bool, interaction: InteractionType) -> Self {
        self.table.insert((mode, alternate), interaction);
        self
    }

    /// Rows in `(mode, alternate)` order.
    pub fn to_rows(&self) -> Vec<PointerMapping> {
        self.table
            .iter()
            .map(|(&(mode, alternate), &interaction)| PointerMapping::new(mode, alternate, interaction))
            .collect()
    }

    /// Build from settings rows. A gesture bound twice is an error.
    pub fn from_rows(rows: &[PointerMapping]) -> InkboardResult<Self> {
        let mut table = BTreeMap::new();
        for row in rows {
            if let Some(existing) = table.insert((row.mode, row.alternate), row.interaction) {
                return Err(InkboardError::InvalidPointerMapping(format!(
                    "{:?} (alternate: {}) is bound to both {:?} and {:?}",
                    row.mode, row.alternate, existing, row.interaction
                )));
            }
        }
        Ok(Self { table })
    }
}

impl Default for InteractionMappings {
    fn default() -> Self {
        PointerMapping::defaults()
            .into_iter()
            .fold(Self::empty(), |table, row| table.with(row.mode, row.alternate, row.interaction))
    }
}

impl TryFrom<&[PointerMapping]> for InteractionMappings {
    type Error = InkboardError;

    fn try_from(rows: &[PointerMapping]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}
