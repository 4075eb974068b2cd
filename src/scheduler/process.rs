use super::{InvalidInput, Pid, Ticks};

/// Raw attributes of a process, before an id is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    pub burst_time: Ticks,
    pub arrival_time: Ticks,
    pub priority: i32,
}

impl ProcessSpec {
    pub fn new(burst_time: Ticks, arrival_time: Ticks, priority: i32) -> Self {
        Self {
            burst_time,
            arrival_time,
            priority,
        }
    }

    pub fn with_burst(burst_time: Ticks) -> Self {
        ProcessSpec::new(burst_time, 0, Process::DEFAULT_PRIORITY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pid: Pid,
    burst_time: Ticks,
    arrival_time: Ticks,
    priority: i32,
}

impl Process {
    const DEFAULT_PRIORITY: i32 = 0;

    fn from_spec(pid: Pid, spec: ProcessSpec) -> Result<Self, InvalidInput> {
        if spec.burst_time <= 0 {
            return Err(InvalidInput::NonPositiveBurst {
                pid,
                burst_time: spec.burst_time,
            });
        }
        if spec.arrival_time < 0 {
            return Err(InvalidInput::NegativeArrival {
                pid,
                arrival_time: spec.arrival_time,
            });
        }

        Ok(Self {
            pid,
            burst_time: spec.burst_time,
            arrival_time: spec.arrival_time,
            priority: spec.priority,
        })
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }

    pub fn arrival_time(&self) -> Ticks {
        self.arrival_time
    }

    /// Lower value means higher priority.
    pub fn priority(&self) -> i32 {
        self.priority
    }
}

/// The validated, ordered input of every policy.
///
/// Ids are assigned `1..=n` in input order and the order is never changed;
/// policies build their own working order on top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    pub fn new(specs: Vec<ProcessSpec>) -> Result<Self, InvalidInput> {
        if specs.is_empty() {
            return Err(InvalidInput::EmptyProcessSet);
        }

        let processes = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| Process::from_spec(index as Pid + 1, spec))
            .collect::<Result<Vec<_>, _>>()?;

        // Every policy's clock ends at the total burst time.
        processes
            .iter()
            .try_fold(0, |total: Ticks, process| total.checked_add(process.burst_time()))
            .ok_or(InvalidInput::BurstTimeOverflow)?;

        Ok(Self { processes })
    }

    /// Builds a set where only burst times matter (arrival 0, default priority).
    pub fn from_bursts(bursts: &[Ticks]) -> Result<Self, InvalidInput> {
        ProcessSet::new(bursts.iter().copied().map(ProcessSpec::with_burst).collect())
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn get(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|process| process.pid() == pid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    pub fn total_burst_time(&self) -> Ticks {
        self.processes.iter().map(Process::burst_time).sum()
    }
}
