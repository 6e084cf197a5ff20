//! Mode state machine

use super::command::{KeyCommand, Selection};
use super::tool::Tool;

/// Operating mode and its current selection
///
/// `None` means nothing has been selected since the mode was entered (or a
/// one-shot selection was consumed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Pick the draw color
    Color(Option<Selection>),
    /// Flood the matrix once
    Fill(Option<Selection>),
    Draw(Option<Tool>),
    /// Movement prescaler
    Speed(Option<Selection>),
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Draw(Some(Tool::Trace))
    }
}

impl Mode {
    /// Apply a command and return the next mode
    pub fn transition(self, command: KeyCommand) -> Self {
        use KeyCommand::*;
        use Mode::*;

        match (self, command) {
            (_, EnterColor) => Color(None),
            (_, EnterFill) => Fill(None),
            (_, EnterDraw) => Draw(None),
            (_, EnterSpeed) => Speed(None),

            (Color(_), Select(s)) => Color(Some(s)),
            (Fill(_), Select(s)) => Fill(Some(s)),
            (Draw(_), Select(s)) => Draw(Some(Tool::from_selection(s))),
            (Speed(_), Select(s)) => Speed(Some(s)),
        }
    }

    /// Same mode with the selection dropped
    pub fn without_selection(self) -> Self {
        match self {
            Mode::Color(_) => Mode::Color(None),
            Mode::Fill(_) => Mode::Fill(None),
            Mode::Draw(_) => Mode::Draw(None),
            Mode::Speed(_) => Mode::Speed(None),
        }
    }

    /// Tool in use, if this is Draw mode with a selection
    pub fn tool(&self) -> Option<Tool> {
        match self {
            Mode::Draw(tool) => *tool,
            _ => None,
        }
    }
}

/// Outcome of a dispatched command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// A mode key was pressed; selection cleared
    Entered(Mode),
    /// A selection key was pressed within the current mode
    Selected(Mode),
}

impl Dispatch {
    pub fn mode(&self) -> Mode {
        match self {
            Dispatch::Entered(m) | Dispatch::Selected(m) => *m,
        }
    }

    /// True when Draw mode was (re-)entered
    pub fn entered_draw(&self) -> bool {
        matches!(self, Dispatch::Entered(Mode::Draw(_)))
    }
}

/// Holds the current mode
#[derive(Debug, Clone, Default)]
pub struct ModeDispatcher {
    mode: Mode,
}

impl ModeDispatcher {
    /// Start in Draw mode with the trace tool
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn handle(&mut self, command: KeyCommand) -> Dispatch {
        self.mode = self.mode.transition(command);
        match command {
            KeyCommand::Select(_) => Dispatch::Selected(self.mode),
            _ => Dispatch::Entered(self.mode),
        }
    }

    /// Drop the selection after a one-shot effect ran
    pub fn clear_selection(&mut self) {
        self.mode = self.mode.without_selection();
    }
}
