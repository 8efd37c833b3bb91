//! The closed set of commands the simulation understands.
//!
//! Commands are addressed by a small integer index. The registry is built once and never
//! changes afterwards.

use std::{collections::BTreeMap, fmt};

use once_cell::sync::Lazy;
use thiserror::Error;

static REGISTRY: Lazy<BTreeMap<i64, Command>> =
    Lazy::new(|| Command::ALL.iter().map(|c| (c.index, *c)).collect());

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Action {
    Quit,
    MoveForward,
    MoveBackward,
    RotateCw,
    RotateCcw,
}

impl Action {
    /// Whether the action is carried out by the object rather than by the simulation itself.
    pub fn targets_object(self) -> bool {
        matches!(
            self,
            Action::MoveForward | Action::MoveBackward | Action::RotateCw | Action::RotateCcw
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::MoveForward => "move forward",
            Action::MoveBackward => "move backward",
            Action::RotateCw => "rotate clockwise",
            Action::RotateCcw => "rotate counterclockwise",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Command {
    index: i64,
    action: Action,
}

impl Command {
    pub const QUIT: Command = Command::new(0, Action::Quit);
    pub const MOVE_FORWARD: Command = Command::new(1, Action::MoveForward);
    pub const MOVE_BACKWARD: Command = Command::new(2, Action::MoveBackward);
    pub const ROTATE_CW: Command = Command::new(3, Action::RotateCw);
    pub const ROTATE_CCW: Command = Command::new(4, Action::RotateCcw);

    pub const ALL: [Command; 5] = [
        Command::QUIT,
        Command::MOVE_FORWARD,
        Command::MOVE_BACKWARD,
        Command::ROTATE_CW,
        Command::ROTATE_CCW,
    ];

    const fn new(index: i64, action: Action) -> Self {
        Self { index, action }
    }

    pub fn find_by_index(index: i64) -> Option<Command> {
        REGISTRY.get(&index).copied()
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn action(&self) -> Action {
        self.action
    }
}

impl TryFrom<i64> for Command {
    type Error = CommandError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Command::find_by_index(value).ok_or(CommandError::UnknownIndex(value))
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command index {0}")]
    UnknownIndex(i64),
}
