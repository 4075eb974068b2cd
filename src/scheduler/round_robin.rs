use super::{
    trace::Timeline, InvalidInput, ProcessOutcome, ProcessSet, ScheduleResult, Scheduler, Ticks,
};
use std::collections::VecDeque;

/// Preemptive round robin over a FIFO queue seeded in input order.
///
/// A process that needs more than one quantum runs for exactly one quantum and
/// goes to the back of the queue; otherwise it runs what it has left and
/// completes.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    time_quantum: Ticks,
}

impl RoundRobinScheduler {
    pub fn new(time_quantum: Ticks) -> Result<Self, InvalidInput> {
        if time_quantum <= 0 {
            return Err(InvalidInput::NonPositiveQuantum(time_quantum));
        }
        Ok(Self { time_quantum })
    }

    pub fn time_quantum(&self) -> Ticks {
        self.time_quantum
    }
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round Robin Scheduler";

    fn schedule(&self, processes: &ProcessSet) -> ScheduleResult {
        // (input index, remaining time)
        let mut queue: VecDeque<(usize, Ticks)> = processes
            .iter()
            .enumerate()
            .map(|(index, process)| (index, process.burst_time()))
            .collect();

        let mut timeline = Timeline::new();
        let mut outcomes: Vec<Option<ProcessOutcome>> = vec![None; processes.len()];

        while let Some((index, remaining)) = queue.pop_front() {
            let process = &processes.processes()[index];

            if remaining > self.time_quantum {
                timeline.run(process.pid(), self.time_quantum);
                queue.push_back((index, remaining - self.time_quantum));
                continue;
            }

            let segment = timeline.run(process.pid(), remaining);
            // Measured from t=0 rather than from arrival.
            let waiting_time = segment.end_time() - process.burst_time();
            log::trace!("process {} completed at t={}", process.pid(), segment.end_time());

            outcomes[index] = Some(ProcessOutcome {
                process: process.clone(),
                waiting_time,
                turnaround_time: waiting_time + process.burst_time(),
                completion_time: segment.end_time(),
            });
        }

        let outcomes = outcomes.into_iter().flatten().collect();
        ScheduleResult::new(Self::NAME, outcomes, timeline.into_trace())
    }
}
