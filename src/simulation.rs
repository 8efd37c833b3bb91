//! Simulation of a single object on a grid.
//!
//! `init` sets up a grid and an object, `run` applies a sequence of command indices to the object
//! and reports where it ended up. An object that left the grid is reported as the `[-1,-1]`
//! sentinel.

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{
    Action, Command, Grid, GridError, MovableObject, ObjectError, ObjectId, Vector2,
};

/// Grid size and start position of the object.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SimulationConfig {
    pub width: i32,
    pub height: i32,
    pub start: Vector2,
}

impl SimulationConfig {
    pub const fn new(width: i32, height: i32, start: Vector2) -> Self {
        Self {
            width,
            height,
            start,
        }
    }
}

impl TryFrom<&[i64]> for SimulationConfig {
    type Error = SimulationError;

    /// Reads `[width, height, x, y, ...]`; trailing values are ignored.
    fn try_from(values: &[i64]) -> Result<Self, Self::Error> {
        let [width, height, x, y] = match values {
            [width, height, x, y, ..] => [*width, *height, *x, *y].map(narrow),
            _ => return Err(SimulationError::MissingValues(values.len())),
        };
        Ok(Self::new(width?, height?, Vector2::new(x?.into(), y?.into())))
    }
}

fn narrow(value: i64) -> Result<i32, SimulationError> {
    i32::try_from(value).map_err(|_| SimulationError::OutOfRange(value))
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Phase {
    #[default]
    Uninitialized,
    Ready,
    Running,
    Finished,
}

/// Why a run stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Halt {
    Exhausted,
    Quit { step: usize },
    UnknownCommand { step: usize, index: i64 },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    OnGrid(Vector2),
    OffGrid,
}

impl Outcome {
    pub const SENTINEL: (i64, i64) = (-1, -1);

    pub fn as_pair(&self) -> (i64, i64) {
        match self {
            Outcome::OnGrid(position) => (*position).into(),
            Outcome::OffGrid => Self::SENTINEL,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::OnGrid(position) => position.fmt(f),
            Outcome::OffGrid => f.write_str("[-1,-1]"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunReport {
    pub outcome: Outcome,
    /// Number of commands that were applied to the object.
    pub applied: usize,
    pub halt: Halt,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct World {
    grid: Grid,
    object: ObjectId,
}

#[derive(Clone, Debug, Default)]
pub struct Simulation {
    phase: Phase,
    world: Option<World>,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.world.as_ref().map(|w| &w.grid)
    }

    pub fn object(&self) -> Option<&MovableObject> {
        self.world
            .as_ref()
            .and_then(|w| w.grid.object(w.object).ok())
    }

    /// Replaces any previous grid and object. On error the previous state is kept.
    pub fn init(&mut self, values: &[i64]) -> Result<(), SimulationError> {
        self.init_with(SimulationConfig::try_from(values)?)
    }

    pub fn init_with(&mut self, config: SimulationConfig) -> Result<(), SimulationError> {
        let mut grid = Grid::new(config.width, config.height)?;
        let object = MovableObject::new(config.start);
        debug!("initial object state: {object}");
        let object = grid.place(object);

        self.world = Some(World { grid, object });
        self.phase = Phase::Ready;
        Ok(())
    }

    /// Applies the commands in order, continuing from the current object state.
    ///
    /// QUIT stops the run. An unknown index stops it as well and is logged as a warning.
    pub fn run(&mut self, commands: &[i64]) -> Result<RunReport, SimulationError> {
        let world = self.world.as_mut().ok_or(SimulationError::Uninitialized)?;
        self.phase = Phase::Running;

        let mut applied = 0;
        let mut halt = Halt::Exhausted;

        for (step, &index) in commands.iter().enumerate() {
            let Some(command) = Command::find_by_index(index) else {
                warn!(step, "Unknown command [index: {index}]. Interrupting simulation.");
                halt = Halt::UnknownCommand { step, index };
                break;
            };

            match command.action() {
                Action::Quit => {
                    debug!(step, "quit");
                    halt = Halt::Quit { step };
                    break;
                }
                action if action.targets_object() => {
                    let object = world.grid.object_mut(world.object)?;
                    object.execute(action)?;
                    debug!(step, %action, "{object}");
                    applied += 1;
                }
                action => debug!(step, %action, "no target for action"),
            }
        }

        let outcome = world.outcome()?;
        self.phase = Phase::Finished;
        Ok(RunReport {
            outcome,
            applied,
            halt,
        })
    }
}

impl World {
    fn outcome(&self) -> Result<Outcome, SimulationError> {
        let position = self.grid.object(self.object)?.position();
        Ok(if self.grid.contains(position) {
            Outcome::OnGrid(position)
        } else {
            Outcome::OffGrid
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("expected width, height, x and y, got {0} values")]
    MissingValues(usize),
    #[error("value {0} does not fit a grid coordinate")]
    OutOfRange(i64),
    #[error("simulation has not been initialized")]
    Uninitialized,
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Object(#[from] ObjectError),
}
