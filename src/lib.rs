//! Simulation of classic CPU scheduling disciplines.
//!
//! The [`scheduler`] module is the engine: shortest-job-first, priority and
//! round-robin policies that turn a [`ProcessSet`] into a [`ScheduleResult`]
//! holding per-process waiting/turnaround times, the execution trace and the
//! averages. Everything else (configuration, the process-file loader, the
//! text report and the terminal replay) sits on top of it.

pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod report;
pub mod scheduler;

pub use scheduler::{
    simulate, ExecutionSegment, InvalidInput, PolicyKind, ProcessOutcome, ProcessSet,
    ProcessSpec, ScheduleResult, SelectionStrategy, Summary, Trace,
};
