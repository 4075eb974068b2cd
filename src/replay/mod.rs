mod display;
mod runner;

use crate::scheduler::{ExecutionSegment, Pid, ProcessOutcome, ScheduleResult, Ticks};

pub use runner::ReplayRunner;

/// Playback position over a finished schedule.
///
/// The schedule is computed up front; a replay only decides how much of its
/// trace has been "shown" so far.
pub struct Replay {
    result: ScheduleResult,
    played: usize,
}

impl Replay {
    pub fn new(result: ScheduleResult) -> Self {
        Self { result, played: 0 }
    }

    pub fn result(&self) -> &ScheduleResult {
        &self.result
    }

    /// Plays the next segment, returning it, or `None` once the trace is exhausted.
    pub fn step(&mut self) -> Option<&ExecutionSegment> {
        let segment = self.result.trace().segments().get(self.played)?;
        self.played += 1;
        Some(segment)
    }

    /// The most recently played segment.
    pub fn current_segment(&self) -> Option<&ExecutionSegment> {
        self.played_segments().last()
    }

    pub fn played_segments(&self) -> &[ExecutionSegment] {
        &self.result.trace().segments()[..self.played]
    }

    pub fn is_complete(&self) -> bool {
        self.played == self.result.trace().len()
    }

    /// Simulated clock at the end of the last played segment.
    pub fn clock(&self) -> Ticks {
        self.current_segment().map_or(0, ExecutionSegment::end_time)
    }

    pub fn executed_for(&self, pid: Pid) -> Ticks {
        self.played_segments()
            .iter()
            .filter(|segment| segment.pid == pid)
            .map(|segment| segment.duration)
            .sum()
    }

    /// Outcome of `pid` if its final segment has already been played.
    pub fn finished_outcome(&self, pid: Pid) -> Option<&ProcessOutcome> {
        self.result
            .outcome(pid)
            .filter(|outcome| self.executed_for(pid) >= outcome.process.burst_time())
    }

    pub fn progress_percentage(&self, pid: Pid) -> String {
        match self.result.outcome(pid) {
            Some(outcome) => format!(
                "{}%",
                (self.executed_for(pid) as f64 / outcome.process.burst_time() as f64 * 100.0)
                    .round()
            ),
            None => "-".to_owned(),
        }
    }
}
