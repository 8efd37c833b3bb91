//! Simulation of a single object moving on a bounded table under a fixed set of commands.
//!
//! The object ends either at a position on the table, reported as `[x, y]`, or off the table,
//! reported as `[-1,-1]`.


pub mod domain;
pub mod input;
pub mod logging;
pub mod scenario;
pub mod session;
pub mod simulation;
