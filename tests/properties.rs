use rand::{Rng, SeedableRng, rngs::StdRng};
use rr_model::{Process, Schedule, sim::random_processes, simulate};
use std::collections::HashMap;

const RUNS: u64 = 300;

fn random_case(seed: u64) -> (Vec<Process>, u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = rng.random_range(0..=9);
    let quantum = rng.random_range(1..=6);
    (random_processes(count, &mut rng), quantum)
}

fn check(processes: &[Process], quantum: u64, schedule: &Schedule) {
    // Completeness
    assert_eq!(schedule.results.len(), processes.len());
    for p in processes {
        assert_eq!(
            schedule.results.iter().filter(|r| r.pid == p.pid).count(),
            1,
            "{} must have exactly one result",
            p.pid
        );
    }

    // Conservation and slice bounds
    let mut served: HashMap<&str, u64> = HashMap::new();
    for block in &schedule.trace {
        assert!(block.end > block.start);
        assert!(block.duration() <= quantum);
        *served.entry(block.pid.as_str()).or_default() += block.duration();
    }
    for p in processes {
        assert_eq!(served.get(p.pid.as_str()).copied(), Some(p.burst_time));
    }

    // Non-overlap
    for pair in schedule.trace.windows(2) {
        assert!(pair[0].end <= pair[1].start, "{:?} overlaps {:?}", pair[0], pair[1]);
    }

    // Waiting-time identity
    for r in &schedule.results {
        let p = processes.iter().find(|p| p.pid == r.pid).unwrap();
        let last = schedule.trace.iter().rev().find(|b| b.pid == r.pid).unwrap();
        assert_eq!(r.completion_time, last.end);
        assert_eq!(r.turnaround_time, r.completion_time - p.arrival_time);
        assert_eq!(r.waiting_time, r.turnaround_time - p.burst_time);
        assert!(r.turnaround_time >= r.burst_time);
        let first = schedule.trace.iter().find(|b| b.pid == r.pid).unwrap();
        assert!(first.start >= p.arrival_time);
    }

    if processes.is_empty() {
        assert_eq!(schedule.average_turnaround, None);
    } else {
        let total: u64 = schedule.results.iter().map(|r| r.turnaround_time).sum();
        let expected = total as f64 / processes.len() as f64;
        let avg = schedule.average_turnaround.unwrap();
        assert!((avg - expected).abs() < 1e-9);
    }
}

#[test]
fn random_inputs_hold_schedule_invariants() {
    for seed in 0..RUNS {
        let (processes, quantum) = random_case(seed);
        let schedule = simulate(processes.clone(), quantum).unwrap();
        check(&processes, quantum, &schedule);
    }
}

#[test]
fn large_quantum_degenerates_to_fcfs() {
    for seed in 0..RUNS {
        let (processes, _) = random_case(seed);
        let max_burst = processes.iter().map(|p| p.burst_time).max().unwrap_or(1);
        let schedule = simulate(processes.clone(), max_burst).unwrap();

        let mut fcfs = processes.clone();
        fcfs.sort_by_key(|p| p.arrival_time);
        let expected: Vec<_> = fcfs.iter().map(|p| p.pid.as_str()).collect();
        let actual: Vec<_> = schedule.trace.iter().map(|b| b.pid.as_str()).collect();
        assert_eq!(actual, expected, "seed {seed}");
    }
}

#[test]
fn runs_are_independent() {
    let (processes, quantum) = random_case(11);
    let a = simulate(processes.clone(), quantum).unwrap();
    let b = simulate(processes, quantum).unwrap();
    assert_eq!(a.trace, b.trace);
    assert_eq!(a.results, b.results);
}
