use super::{
    trace::Timeline, Process, ProcessOutcome, ProcessSet, ScheduleResult, SelectionStrategy,
    Ticks,
};

/// Runs every process to completion, one at a time, in ascending `key` order.
///
/// Every process is treated as ready at time 0: arrival time only enters the
/// waiting-time formula, so a process that "arrives" after it is dispatched
/// gets a negative waiting time.
pub(super) fn run_to_completion<K>(
    name: &'static str,
    processes: &ProcessSet,
    selection: SelectionStrategy,
    key: K,
) -> ScheduleResult
where
    K: Fn(&Process) -> Ticks,
{
    let keys: Vec<Ticks> = processes.iter().map(&key).collect();
    let mut ready = selection.ready_queue(&keys);

    let mut timeline = Timeline::new();
    let mut outcomes: Vec<Option<ProcessOutcome>> = vec![None; processes.len()];

    while let Some(index) = ready.pop_min() {
        let process = &processes.processes()[index];

        let waiting_time = timeline.current_time() - process.arrival_time();
        let segment = timeline.run(process.pid(), process.burst_time());

        outcomes[index] = Some(ProcessOutcome {
            process: process.clone(),
            waiting_time,
            turnaround_time: waiting_time + process.burst_time(),
            completion_time: segment.end_time(),
        });
    }

    // The ready queue hands out every index exactly once.
    let outcomes = outcomes.into_iter().flatten().collect();
    ScheduleResult::new(name, outcomes, timeline.into_trace())
}
