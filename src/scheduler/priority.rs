use super::{non_preemptive, ProcessSet, ScheduleResult, Scheduler, SelectionStrategy, Ticks};

/// Non-preemptive priority scheduling: the lowest priority value runs next.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler {
    selection: SelectionStrategy,
}

impl PriorityScheduler {
    pub fn new(selection: SelectionStrategy) -> Self {
        Self { selection }
    }
}

impl Scheduler for PriorityScheduler {
    const NAME: &'static str = "Priority Scheduler";

    fn schedule(&self, processes: &ProcessSet) -> ScheduleResult {
        non_preemptive::run_to_completion(Self::NAME, processes, self.selection, |process| {
            Ticks::from(process.priority())
        })
    }
}
