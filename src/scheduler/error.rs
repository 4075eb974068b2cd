use super::{Pid, Ticks};
use thiserror::Error;

/// Input rejected before any simulation starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("invalid input: the process set is empty")]
    EmptyProcessSet,

    #[error("invalid input: process {pid} has non-positive burst time {burst_time}")]
    NonPositiveBurst { pid: Pid, burst_time: Ticks },

    #[error("invalid input: process {pid} has negative arrival time {arrival_time}")]
    NegativeArrival { pid: Pid, arrival_time: Ticks },

    #[error("invalid input: total burst time overflows the simulated clock")]
    BurstTimeOverflow,

    #[error("invalid input: time quantum must be positive, got {0}")]
    NonPositiveQuantum(Ticks),
}
