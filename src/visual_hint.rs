//! Transient overlays shown while an interaction is in progress.

use crate::colour::palette;
use crate::geometry::{BoundingArea, Path, Screen};
use crate::render::DrawContext;
use std::ops::Add;

/// An ephemeral, screen-space overlay. Never part of the sketch itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum VisualHint {
    #[default]
    None,
    /// A stroke being drawn
    Path(Path<Screen>),
    /// A rectangular selection box
    Selection(BoundingArea<Screen>),
    /// Several hints drawn in order. Never nested, never contains `None`.
    Union(Vec<VisualHint>),
}

impl VisualHint {
    /// Combine hints, dropping `None`s and duplicates.
    pub fn all(hints: impl IntoIterator<Item = VisualHint>) -> Self {
        hints.into_iter().fold(Self::None, |acc, hint| acc + hint)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Leaf hints in draw order.
    pub fn parts(&self) -> &[VisualHint] {
        match self {
            Self::None => &[],
            Self::Union(hints) => hints,
            single => std::slice::from_ref(single),
        }
    }

    pub fn draw(&self, ctx: &mut impl DrawContext) {
        for hint in self.parts() {
            match hint {
                Self::Path(path) => ctx.path(path, palette::LIGHT_GREY),
                Self::Selection(area) => ctx.box_outline(area, palette::WHITE),
                Self::None | Self::Union(_) => {}
            }
        }
    }

    fn from_parts(mut parts: Vec<VisualHint>) -> Self {
        match parts.len() {
            0 => Self::None,
            1 => parts.pop().unwrap_or_default(),
            _ => Self::Union(parts),
        }
    }
}

impl Add for VisualHint {
    type Output = VisualHint;

    fn add(self, other: VisualHint) -> VisualHint {
        if self.is_none() {
            return other;
        }
        if other.is_none() {
            return self;
        }

        let mut parts = self.parts().to_vec();
        for hint in other.parts() {
            if !parts.contains(hint) {
                parts.push(hint.clone());
            }
        }
        Self::from_parts(parts)
    }
}
