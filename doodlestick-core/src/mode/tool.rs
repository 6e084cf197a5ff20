//! Draw-mode tools

use crate::geometry::ShapeKind;

use super::command::Selection;

/// Tool selected in Draw mode, keys 1-8 in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tool {
    /// Move without drawing
    Free,
    /// Draw under the cursor as it moves
    Trace,
    Line,
    Rectangle,
    Triangle,
    /// Smiley relief, repainted every iteration
    Smiley,
    /// One-shot "hi" or smiley, picked by the latest x sample
    Greeting,
    /// Blank the matrix every iteration
    Clear,
}

impl Tool {
    pub const fn from_selection(selection: Selection) -> Self {
        match selection.get() {
            1 => Tool::Free,
            2 => Tool::Trace,
            3 => Tool::Line,
            4 => Tool::Rectangle,
            5 => Tool::Triangle,
            6 => Tool::Smiley,
            7 => Tool::Greeting,
            _ => Tool::Clear,
        }
    }

    /// Shape built by button presses with this tool
    pub const fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Triangle => Some(ShapeKind::Triangle),
            _ => None,
        }
    }

    /// Pen state this tool sets, or `None` to leave it as it is
    pub const fn pen(self) -> Option<bool> {
        match self {
            Tool::Trace => Some(true),
            Tool::Free | Tool::Line | Tool::Rectangle | Tool::Triangle => Some(false),
            Tool::Smiley | Tool::Greeting | Tool::Clear => None,
        }
    }

    /// Tools that act once and then drop the selection
    pub const fn is_one_shot(self) -> bool {
        matches!(self, Tool::Greeting)
    }
}
