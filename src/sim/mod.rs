pub mod driver;
pub mod error;
pub mod input;
pub mod job;
pub mod random;

pub use driver::Sim;
pub use error::InvalidInput;
pub use input::{parse_processes, parse_quantum};
pub use job::{ExecutionBlock, JobInstance, Process, ProcessResult, Schedule};
pub use random::random_processes;

use crate::{config::SimConfig, scheduler::RoundRobinScheduler};

/// Round-robin schedule of `processes` with the given quantum.
///
/// Fails with [`InvalidInput`] on a zero quantum or a zero burst, before any
/// scheduling happens.
pub fn simulate(processes: Vec<Process>, quantum: u64) -> Result<Schedule, InvalidInput> {
    let config = SimConfig::new(quantum)?;
    Ok(Sim::<RoundRobinScheduler>::new(processes, &config)?.run())
}

/// Like [`simulate`], but from raw `(arrival, burst)` text fields and a
/// quantum string, as an input form would hand them over.
pub fn simulate_raw(fields: &[(&str, &str)], quantum: &str) -> Result<Schedule, InvalidInput> {
    let config = parse_quantum(quantum)?;
    let processes = parse_processes(fields)?;
    Ok(Sim::<RoundRobinScheduler>::new(processes, &config)?.run())
}
