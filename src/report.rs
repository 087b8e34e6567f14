use crate::sim::{ExecutionBlock, Schedule};

// Characters per tick in the Gantt chart
const TICK_WIDTH: usize = 3;

const HEADERS: [&str; 5] = [
    "Process ID",
    "Arrival Time",
    "Burst Time",
    "Waiting Time",
    "Turnaround Time",
];

/// Gantt chart as two lines: labels on top, `start - end` below. Cell width
/// grows with block duration.
pub fn render_gantt(trace: &[ExecutionBlock]) -> String {
    if trace.is_empty() {
        return String::new();
    }

    let mut labels = String::from("|");
    let mut times = String::from("|");
    for block in trace {
        let span = format!("{} - {}", block.start, block.end);
        let width = (block.duration() as usize * TICK_WIDTH)
            .max(span.len() + 2)
            .max(block.pid.len() + 2);
        labels.push_str(&format!("{:^width$}|", block.pid));
        times.push_str(&format!("{span:^width$}|"));
    }

    format!("{labels}\n{times}")
}

/// Results table in `schedule.results` order, then the average turnaround
/// rounded to two decimals.
pub fn render_results(schedule: &Schedule) -> String {
    let mut out = HEADERS.join(" | ");
    out.push('\n');
    out.push_str(
        &HEADERS
            .iter()
            .map(|h| "-".repeat(h.len()))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');

    for r in &schedule.results {
        let cells = [
            r.pid.clone(),
            r.arrival_time.to_string(),
            r.burst_time.to_string(),
            r.waiting_time.to_string(),
            r.turnaround_time.to_string(),
        ];
        let row: Vec<_> = cells
            .iter()
            .zip(HEADERS)
            .map(|(cell, header)| format!("{cell:<width$}", width = header.len()))
            .collect();
        out.push_str(row.join(" | ").trim_end());
        out.push('\n');
    }

    match schedule.average_turnaround {
        Some(avg) => out.push_str(&format!("Average Turnaround Time: {avg:.2}")),
        None => out.push_str("Average Turnaround Time: n/a"),
    }
    out
}
