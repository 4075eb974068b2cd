use super::{non_preemptive, Process, ProcessSet, ScheduleResult, Scheduler, SelectionStrategy};

/// Non-preemptive shortest-job-first: the smallest burst runs next.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestJobFirstScheduler {
    selection: SelectionStrategy,
}

impl ShortestJobFirstScheduler {
    pub fn new(selection: SelectionStrategy) -> Self {
        Self { selection }
    }
}

impl Scheduler for ShortestJobFirstScheduler {
    const NAME: &'static str = "Shortest Job First Scheduler";

    fn schedule(&self, processes: &ProcessSet) -> ScheduleResult {
        non_preemptive::run_to_completion(
            Self::NAME,
            processes,
            self.selection,
            Process::burst_time,
        )
    }
}
