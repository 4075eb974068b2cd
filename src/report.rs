//! Plain-text rendering of a finished schedule, for headless runs.

use crate::scheduler::ScheduleResult;
use std::fmt::Write;

pub fn render_timeline(result: &ScheduleResult) -> String {
    let mut out = String::from("Time | Process Execution\n");
    for segment in result.trace().iter() {
        let _ = writeln!(
            out,
            "{} | Process {} is running for {} units.",
            segment.start_time, segment.pid, segment.duration
        );
    }
    out
}

pub fn render_statistics(result: &ScheduleResult) -> String {
    let mut out = String::from("Final Process Statistics:\n");
    out.push_str("ProcessID\tBurstTime\tWaitingTime\tTurnAroundTime\tPriority\n");

    for outcome in result.outcomes() {
        let process = &outcome.process;
        let _ = writeln!(
            out,
            "{}\t\t{}\t\t{}\t\t{}\t\t{}",
            process.pid(),
            process.burst_time(),
            outcome.waiting_time,
            outcome.turnaround_time,
            process.priority()
        );
    }

    let summary = result.summary();
    let _ = writeln!(out, "\nAverage Waiting Time: {}", summary.avg_waiting_time);
    let _ = writeln!(out, "Average Turnaround Time: {}", summary.avg_turnaround_time);
    out
}

pub fn render(result: &ScheduleResult) -> String {
    format!(
        "--- {} ---\n\n{}\n{}",
        result.policy(),
        render_timeline(result),
        render_statistics(result)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{ProcessSet, RoundRobinScheduler, Scheduler, ShortestJobFirstScheduler};

    #[test]
    fn test_statistics_table() {
        let processes = ProcessSet::from_bursts(&[5, 3, 8, 2]).unwrap();
        let text = render_statistics(&ShortestJobFirstScheduler::default().schedule(&processes));

        let rows: Vec<&str> = text.lines().skip(2).take(4).collect();
        assert_eq!(rows[0], "1\t\t5\t\t5\t\t10\t\t0");
        assert_eq!(rows[3], "4\t\t2\t\t0\t\t2\t\t0");
        assert!(text.contains("Average Waiting Time: 4.25"));
        assert!(text.contains("Average Turnaround Time: 8.75"));
    }

    #[test]
    fn test_timeline_lists_every_segment() {
        let processes = ProcessSet::from_bursts(&[5, 3]).unwrap();
        let result = RoundRobinScheduler::new(2).unwrap().schedule(&processes);
        let text = render_timeline(&result);

        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("7 | Process 1 is running for 1 units."));
        assert!(render(&result).starts_with("--- Round Robin Scheduler ---"));
    }
}
