use super::{error::InvalidInput, job::Process};
use crate::{config::SimConfig, core::state::Ticks};

pub fn parse_quantum(value: &str) -> Result<SimConfig, InvalidInput> {
    let quantum = value
        .trim()
        .parse::<u64>()
        .map_err(|_| InvalidInput::Quantum {
            value: value.to_string(),
        })?;
    SimConfig::new(quantum)
}

/// Parse `(arrival, burst)` text fields in submission order, labelling them
/// `P1`, `P2`, ... The first bad field fails the whole batch.
pub fn parse_processes(fields: &[(&str, &str)]) -> Result<Vec<Process>, InvalidInput> {
    fields
        .iter()
        .enumerate()
        .map(|(index, &(arrival, burst))| {
            let pid = format!("P{}", index + 1);
            let arrival_time = parse_ticks(arrival).ok_or_else(|| InvalidInput::Arrival {
                pid: pid.clone(),
                value: arrival.to_string(),
            })?;
            let burst_time = parse_ticks(burst).ok_or_else(|| InvalidInput::Burst {
                pid: pid.clone(),
                value: burst.to_string(),
            })?;
            let process = Process::new(pid, arrival_time, burst_time);
            validate(&process)?;
            Ok(process)
        })
        .collect()
}

pub fn validate(process: &Process) -> Result<(), InvalidInput> {
    if process.burst_time == 0 {
        return Err(InvalidInput::ZeroBurst {
            pid: process.pid.clone(),
        });
    }
    Ok(())
}

/// Every run ends by `max(arrival) + sum(burst)`; reject inputs where that
/// bound does not fit in `Ticks`.
pub fn validate_horizon(processes: &[Process]) -> Result<Ticks, InvalidInput> {
    let latest = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes.iter().try_fold(latest, |horizon, p| {
        horizon
            .checked_add(p.burst_time)
            .ok_or_else(|| InvalidInput::Horizon { pid: p.pid.clone() })
    })
}

fn parse_ticks(value: &str) -> Option<Ticks> {
    value.trim().parse().ok()
}
