use crate::core::state::Ticks;

/// A process as submitted: `P<n>` label, arrival and burst in ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub pid: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

impl Process {
    pub fn new(pid: impl Into<String>, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            pid: pid.into(),
            arrival_time,
            burst_time,
        }
    }

    // `n` is 1-based submission order
    pub fn numbered(n: usize, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self::new(format!("P{n}"), arrival_time, burst_time)
    }
}

/// Numeric part of a `P<n>` label, used to order the results table.
pub fn pid_number(pid: &str) -> Option<u64> {
    pid.get(1..)?.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionBlock {
    pub pid: String,
    pub start: Ticks,
    pub end: Ticks,
}

impl ExecutionBlock {
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub pid: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub completion_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

#[derive(Debug, Clone)]
pub struct JobInstance {
    pub job: Process,
    pub completion_time: Option<Ticks>,
}

impl JobInstance {
    pub fn new(job: Process) -> Self {
        Self {
            job,
            completion_time: None,
        }
    }

    pub fn result(&self) -> Option<ProcessResult> {
        let completion_time = self.completion_time?;
        let turnaround_time = completion_time - self.job.arrival_time;
        Some(ProcessResult {
            pid: self.job.pid.clone(),
            arrival_time: self.job.arrival_time,
            burst_time: self.job.burst_time,
            completion_time,
            waiting_time: turnaround_time - self.job.burst_time,
            turnaround_time,
        })
    }
}

/// Everything a run produces: the dispatch trace in chronological order,
/// per-process results ordered by label number, and the mean turnaround
/// (`None` when there were no processes).
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub trace: Vec<ExecutionBlock>,
    pub results: Vec<ProcessResult>,
    pub average_turnaround: Option<f64>,
}
