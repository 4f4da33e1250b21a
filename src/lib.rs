//! Assigns professors to courses and timeslots under preference and
//! availability constraints.
//!
//! - **`model`**: professors, courses, the timeslot catalog, schedules, traces
//! - **`intake`**: survey rows to fixed-shape domain records
//! - **`constraints`** / **`score`**: legality and preference score of a schedule
//! - **`solver`**: greedy and exhaustive strategies behind one `Engine`
//! - **`export`**: `Professor,Course,Timeslot` CSV
//! - **`server`**: HTTP endpoints

pub mod config;
pub mod constraints;
pub mod data;
pub mod error;
pub mod export;
pub mod intake;
pub mod model;
pub mod score;
pub mod server;
pub mod solver;

pub use error::{ConstraintViolation, SchedulerError};
pub use solver::{Engine, Solution, StrategyKind};
