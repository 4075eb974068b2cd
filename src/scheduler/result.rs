use super::{Pid, Process, Summary, Ticks, Trace};

/// Timing of one process after a policy has run it to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub process: Process,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
    pub completion_time: Ticks,
}

impl ProcessOutcome {
    pub fn pid(&self) -> Pid {
        self.process.pid()
    }
}

/// A completed schedule: per-process outcomes in input order, the
/// chronological trace, and the aggregate summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleResult {
    policy: &'static str,
    outcomes: Vec<ProcessOutcome>,
    trace: Trace,
    summary: Summary,
}

impl ScheduleResult {
    pub(crate) fn new(policy: &'static str, outcomes: Vec<ProcessOutcome>, trace: Trace) -> Self {
        let summary = Summary::from_outcomes(&outcomes);
        Self {
            policy,
            outcomes,
            trace,
            summary,
        }
    }

    pub fn policy(&self) -> &'static str {
        self.policy
    }

    pub fn outcomes(&self) -> &[ProcessOutcome] {
        &self.outcomes
    }

    pub fn outcome(&self, pid: Pid) -> Option<&ProcessOutcome> {
        self.outcomes.iter().find(|outcome| outcome.pid() == pid)
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Clock value when the last process completed.
    pub fn end_time(&self) -> Ticks {
        self.trace.end_time()
    }

    /// Pids in the order they were first dispatched.
    pub fn dispatch_order(&self) -> Vec<Pid> {
        let mut order: Vec<Pid> = Vec::with_capacity(self.outcomes.len());
        for segment in self.trace.iter() {
            if !order.contains(&segment.pid) {
                order.push(segment.pid);
            }
        }
        order
    }
}
