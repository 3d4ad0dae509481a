use super::DrawContext;
use crate::colour::Colour;
use crate::geometry::{BoundingArea, Path, Point, Screen};

/// One recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Point { point: Point<Screen>, colour: Colour },
    Path { path: Path<Screen>, colour: Colour },
    BoxOutline { area: BoundingArea<Screen>, colour: Colour },
}

/// A [`DrawContext`] that records commands for a renderer on another thread,
/// or for inspection in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawContext for DrawList {
    fn point(&mut self, point: &Point<Screen>, colour: Colour) {
        self.commands.push(DrawCommand::Point { point: *point, colour });
    }

    fn path(&mut self, path: &Path<Screen>, colour: Colour) {
        self.commands.push(DrawCommand::Path {
            path: path.clone(),
            colour,
        });
    }

    fn box_outline(&mut self, area: &BoundingArea<Screen>, colour: Colour) {
        self.commands.push(DrawCommand::BoxOutline { area: *area, colour });
    }
}
