//! Terminal front end: captions, reading the two input lines and printing the result.

use std::io::{self, BufRead};

use console::Term;
use thiserror::Error;
use tracing::debug;

use crate::{
    input::parse_input,
    scenario::SCENARIOS,
    simulation::{RunReport, Simulation, SimulationError},
};

const TABLE_CAPTION: &str = "Input table size and object position. Ex: 4,4,2,2";
const COMMANDS_CAPTION: &str = "Input simulation commands. Ex: 1,4,1,3,2,3,2,4,1,0";

/// Line oriented text I/O.
pub trait Console {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn read_line(&mut self) -> io::Result<String>;
}

impl Console for Term {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        Term::write_line(self, line)
    }

    /// Falls back to plain stdin when input is piped, where `Term` cannot read lines.
    fn read_line(&mut self) -> io::Result<String> {
        if self.is_term() {
            return Term::read_line(self);
        }
        read_piped_line(&mut io::stdin().lock())
    }
}

fn read_piped_line(reader: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before a line was read",
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub print_captions: bool,
    /// Table line given up front instead of being read from the console.
    pub table: Option<String>,
    /// Commands line given up front instead of being read from the console.
    pub commands: Option<String>,
}

/// Runs one simulation from console input and prints the outcome.
pub fn run_session(
    console: &mut impl Console,
    config: &SessionConfig,
) -> Result<RunReport, SessionError> {
    let mut simulation = Simulation::new();

    let table = acquire(console, config, TABLE_CAPTION, config.table.as_deref())?;
    simulation.init(&parse_input(&table))?;

    let commands = acquire(console, config, COMMANDS_CAPTION, config.commands.as_deref())?;
    let report = simulation.run(&parse_input(&commands))?;
    debug!(applied = report.applied, halt = ?report.halt, "simulation finished");

    console.write_line(&report.outcome.to_string())?;
    Ok(report)
}

fn acquire(
    console: &mut impl Console,
    config: &SessionConfig,
    caption: &str,
    given: Option<&str>,
) -> Result<String, SessionError> {
    if let Some(line) = given {
        return Ok(line.to_string());
    }
    if config.print_captions {
        console.write_line(caption)?;
    }
    Ok(console.read_line()?)
}

/// Runs every built-in scenario, printing its caption followed by its outcome.
pub fn run_demo(console: &mut impl Console) -> Result<(), SessionError> {
    let mut simulation = Simulation::new();
    for (i, scenario) in SCENARIOS.iter().enumerate() {
        if i > 0 {
            console.write_line("")?;
        }
        console.write_line(scenario.caption)?;
        simulation.init(scenario.config)?;
        let report = simulation.run(scenario.commands)?;
        console.write_line(&report.outcome.to_string())?;
    }
    Ok(())
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("console I/O failed")]
    Io(#[from] io::Error),
    #[error("simulation rejected the input")]
    Simulation(#[from] SimulationError),
}
