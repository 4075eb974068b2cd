use super::ProcessOutcome;

/// Aggregate timing of a completed schedule.
///
/// Totals are widened to `i128` since n per-process times can each be close
/// to the final clock value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total_waiting_time: i128,
    pub total_turnaround_time: i128,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[ProcessOutcome]) -> Self {
        let total_waiting_time: i128 = outcomes
            .iter()
            .map(|o| i128::from(o.waiting_time))
            .sum();
        let total_turnaround_time: i128 = outcomes
            .iter()
            .map(|o| i128::from(o.turnaround_time))
            .sum();

        // An empty slice never reaches here through a policy; report zeros rather than NaN.
        let count = outcomes.len().max(1) as f64;

        Self {
            total_waiting_time,
            total_turnaround_time,
            avg_waiting_time: total_waiting_time as f64 / count,
            avg_turnaround_time: total_turnaround_time as f64 / count,
        }
    }
}
