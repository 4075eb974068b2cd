mod error;
mod non_preemptive;
mod priority;
mod process;
mod result;
mod round_robin;
mod selection;
mod shortest_job;
mod stats;
mod trace;

use std::fmt;

pub use error::InvalidInput;
pub use priority::PriorityScheduler;
pub use process::{Process, ProcessSet, ProcessSpec};
pub use result::{ProcessOutcome, ScheduleResult};
pub use round_robin::RoundRobinScheduler;
pub use selection::{HeapQueue, LinearScanQueue, ReadyQueue, SelectionStrategy};
pub use shortest_job::ShortestJobFirstScheduler;
pub use stats::Summary;
pub use trace::{ExecutionSegment, Trace};

pub type Pid = u32;

/// Simulated time unit. Signed because non-preemptive waiting times can go
/// negative when a process "arrives" after it was already dispatched.
pub type Ticks = i64;

pub const DEFAULT_TIME_QUANTUM: Ticks = 2;

/// A scheduling discipline run over a whole process set.
///
/// Runs are pure: the process set is only read, and every call produces a
/// fresh, fully populated result.
pub trait Scheduler {
    const NAME: &'static str;

    fn schedule(&self, processes: &ProcessSet) -> ScheduleResult;
}

/// Runtime choice of policy, for callers that pick one from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    ShortestJobFirst,
    Priority,
    RoundRobin { time_quantum: Ticks },
}

impl PolicyKind {
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::ShortestJobFirst => ShortestJobFirstScheduler::NAME,
            PolicyKind::Priority => PriorityScheduler::NAME,
            PolicyKind::RoundRobin { .. } => RoundRobinScheduler::NAME,
        }
    }

    /// Validates the policy parameters and runs the policy to completion.
    pub fn run(
        &self,
        processes: &ProcessSet,
        selection: SelectionStrategy,
    ) -> Result<ScheduleResult, InvalidInput> {
        log::info!("Running {} over {} processes", self.name(), processes.len());

        let result = match *self {
            PolicyKind::ShortestJobFirst => {
                ShortestJobFirstScheduler::new(selection).schedule(processes)
            }
            PolicyKind::Priority => PriorityScheduler::new(selection).schedule(processes),
            PolicyKind::RoundRobin { time_quantum } => {
                RoundRobinScheduler::new(time_quantum)?.schedule(processes)
            }
        };

        log::info!(
            "{} finished at t={} | avg waiting {:.2} | avg turnaround {:.2}",
            result.policy(),
            result.end_time(),
            result.summary().avg_waiting_time,
            result.summary().avg_turnaround_time
        );
        Ok(result)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::RoundRobin { time_quantum } => {
                write!(f, "{} (quantum {})", self.name(), time_quantum)
            }
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Builds a process set from raw specs and runs the chosen policy over it.
pub fn simulate(
    specs: Vec<ProcessSpec>,
    policy: PolicyKind,
    selection: SelectionStrategy,
) -> Result<ScheduleResult, InvalidInput> {
    let processes = ProcessSet::new(specs)?;
    policy.run(&processes, selection)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks the laws every completed schedule must satisfy.
    pub(crate) fn assert_consistent(processes: &ProcessSet, result: &ScheduleResult) {
        assert_eq!(result.outcomes().len(), processes.len());

        for (process, outcome) in processes.iter().zip(result.outcomes()) {
            assert_eq!(process, &outcome.process, "outcomes keep input order");
            assert_eq!(outcome.turnaround_time, outcome.waiting_time + process.burst_time());
            assert_eq!(result.trace().run_time_of(process.pid()), process.burst_time());
        }

        let segments = result.trace().segments();
        assert_eq!(segments.first().map(|s| s.start_time), Some(0));
        for pair in segments.windows(2) {
            assert!(pair[0].start_time <= pair[1].start_time);
            assert_eq!(pair[0].end_time(), pair[1].start_time);
        }
        assert_eq!(result.end_time(), processes.total_burst_time());
    }

    #[test]
    fn test_every_policy_is_consistent() {
        let processes = ProcessSet::new(vec![
            ProcessSpec::new(7, 0, 4),
            ProcessSpec::new(2, 3, 1),
            ProcessSpec::new(7, 1, 4),
            ProcessSpec::new(1, 9, 0),
            ProcessSpec::new(4, 2, 2),
        ])
        .unwrap();

        let policies = [
            PolicyKind::ShortestJobFirst,
            PolicyKind::Priority,
            PolicyKind::RoundRobin { time_quantum: 1 },
            PolicyKind::RoundRobin { time_quantum: 3 },
            PolicyKind::RoundRobin { time_quantum: 100 },
        ];
        for policy in policies {
            for selection in [SelectionStrategy::Heap, SelectionStrategy::LinearScan] {
                let result = policy.run(&processes, selection).unwrap();
                assert_eq!(result.policy(), policy.name());
                assert_consistent(&processes, &result);
            }
        }
    }

    #[test]
    fn test_simulate_rejects_invalid_input_before_running() {
        assert_eq!(
            simulate(Vec::new(), PolicyKind::ShortestJobFirst, SelectionStrategy::Heap),
            Err(InvalidInput::EmptyProcessSet)
        );
        assert_eq!(
            simulate(
                vec![ProcessSpec::with_burst(3)],
                PolicyKind::RoundRobin { time_quantum: 0 },
                SelectionStrategy::Heap
            ),
            Err(InvalidInput::NonPositiveQuantum(0))
        );
        assert_eq!(
            simulate(
                vec![ProcessSpec::with_burst(3)],
                PolicyKind::RoundRobin { time_quantum: -4 },
                SelectionStrategy::Heap
            ),
            Err(InvalidInput::NonPositiveQuantum(-4))
        );
    }

    #[test]
    fn test_clock_near_limit_does_not_overflow() {
        let processes = ProcessSet::from_bursts(&[Ticks::MAX - 2, 1, 1]).unwrap();
        let result = PolicyKind::ShortestJobFirst
            .run(&processes, SelectionStrategy::Heap)
            .unwrap();

        assert_eq!(result.end_time(), Ticks::MAX);
        assert_eq!(result.outcome(1).unwrap().turnaround_time, Ticks::MAX);
        assert_eq!(result.summary().total_turnaround_time, i128::from(Ticks::MAX) + 3);
        assert!(result.summary().avg_turnaround_time > 0.0);
    }

    #[test]
    fn test_overflowing_burst_total_rejected_before_running() {
        let half = Ticks::MAX / 2 + 1;
        assert_eq!(
            simulate(
                vec![ProcessSpec::with_burst(half), ProcessSpec::with_burst(half)],
                PolicyKind::ShortestJobFirst,
                SelectionStrategy::Heap
            ),
            Err(InvalidInput::BurstTimeOverflow)
        );
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let processes = ProcessSet::from_bursts(&[5, 3, 8, 2]).unwrap();
        let policy = PolicyKind::RoundRobin { time_quantum: 2 };

        let first = policy.run(&processes, SelectionStrategy::Heap).unwrap();
        let second = policy.run(&processes, SelectionStrategy::Heap).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(
            PolicyKind::RoundRobin { time_quantum: 4 }.to_string(),
            "Round Robin Scheduler (quantum 4)"
        );
        assert_eq!(PolicyKind::Priority.to_string(), "Priority Scheduler");
    }
}
