use rand::Rng;

use super::job::Process;
use crate::core::state::Ticks;

pub const MAX_ARRIVAL: Ticks = 10;
pub const MAX_BURST: Ticks = 10;

/// `count` processes labelled `P1..=Pcount`, arrival uniform in
/// `0..=MAX_ARRIVAL` and burst uniform in `1..=MAX_BURST`.
pub fn random_processes<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Process> {
    (1..=count)
        .map(|n| {
            let arrival_time = rng.random_range(0..=MAX_ARRIVAL);
            let burst_time = rng.random_range(1..=MAX_BURST);
            Process::numbered(n, arrival_time, burst_time)
        })
        .collect()
}
