use super::{Pid, Ticks};

/// One contiguous run of a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSegment {
    pub pid: Pid,
    pub start_time: Ticks,
    pub duration: Ticks,
}

impl ExecutionSegment {
    pub fn end_time(&self) -> Ticks {
        self.start_time + self.duration
    }
}

/// Chronological record of every dispatch made during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    segments: Vec<ExecutionSegment>,
}

impl Trace {
    pub fn segments(&self) -> &[ExecutionSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExecutionSegment> {
        self.segments.iter()
    }

    pub fn for_process(&self, pid: Pid) -> impl Iterator<Item = &ExecutionSegment> {
        self.segments.iter().filter(move |segment| segment.pid == pid)
    }

    /// Total CPU time the process received across all its segments.
    pub fn run_time_of(&self, pid: Pid) -> Ticks {
        self.for_process(pid).map(|segment| segment.duration).sum()
    }

    /// Clock value after the last segment, 0 for an empty trace.
    pub fn end_time(&self) -> Ticks {
        self.segments.last().map_or(0, ExecutionSegment::end_time)
    }
}

/// Simulated clock that records every run it advances over.
///
/// Segments can only be appended at the current clock value, so a trace built
/// through a timeline never has gaps or overlaps.
#[derive(Debug, Default)]
pub(crate) struct Timeline {
    current_time: Ticks,
    trace: Trace,
}

impl Timeline {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current_time(&self) -> Ticks {
        self.current_time
    }

    /// Runs `pid` for `duration` ticks and returns the segment that was recorded.
    pub(crate) fn run(&mut self, pid: Pid, duration: Ticks) -> ExecutionSegment {
        let segment = ExecutionSegment {
            pid,
            start_time: self.current_time,
            duration,
        };
        log::debug!(
            "t={} | process {} runs for {} units",
            segment.start_time,
            pid,
            duration
        );

        self.current_time += duration;
        self.trace.segments.push(segment);
        segment
    }

    pub(crate) fn into_trace(self) -> Trace {
        self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_segments_are_contiguous() {
        let mut timeline = Timeline::new();
        timeline.run(1, 2);
        timeline.run(2, 3);
        let last = timeline.run(1, 1);

        assert_eq!(last.start_time, 5);
        assert_eq!(timeline.current_time(), 6);

        let trace = timeline.into_trace();
        for pair in trace.segments().windows(2) {
            assert_eq!(pair[0].end_time(), pair[1].start_time);
        }
        assert_eq!(trace.end_time(), 6);
    }

    #[test]
    fn test_run_time_of_sums_segments() {
        let mut timeline = Timeline::new();
        timeline.run(1, 2);
        timeline.run(2, 2);
        timeline.run(1, 1);
        let trace = timeline.into_trace();

        assert_eq!(trace.run_time_of(1), 3);
        assert_eq!(trace.run_time_of(2), 2);
        assert_eq!(trace.run_time_of(9), 0);
        assert_eq!(trace.for_process(1).count(), 2);
    }

    #[test]
    fn test_empty_trace_ends_at_zero() {
        let trace = Trace::default();
        assert!(trace.is_empty());
        assert_eq!(trace.end_time(), 0);
    }
}
