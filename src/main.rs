use anyhow::{Context, Result, bail};
use log::{info, warn};
use rand::prelude::*;
use rr_model::{
    Sim,
    config::DEFAULT_QUANTUM,
    logger,
    report::{render_gantt, render_results},
    scheduler::RoundRobinScheduler,
    sim::{parse_processes, parse_quantum, random_processes},
};

const USAGE: &str = "usage: rr_model [--quantum N] [--seed S] [--count C] [ARRIVAL:BURST ...]";

struct Args {
    quantum: String,
    seed: u64,
    count: usize,
    pairs: Vec<String>,
}

impl Args {
    fn parse(mut argv: impl Iterator<Item = String>) -> Result<Self> {
        let mut args = Args {
            quantum: DEFAULT_QUANTUM.to_string(),
            seed: 0,
            count: 5,
            pairs: Vec::new(),
        };

        while let Some(arg) = argv.next() {
            match arg.as_str() {
                "--quantum" | "-q" => {
                    args.quantum = argv.next().context("--quantum needs a value")?;
                }
                "--seed" => {
                    let value = argv.next().context("--seed needs a value")?;
                    args.seed = value.parse().with_context(|| format!("bad seed {value:?}"))?;
                }
                "--count" => {
                    let value = argv.next().context("--count needs a value")?;
                    args.count = value
                        .parse()
                        .with_context(|| format!("bad count {value:?}"))?;
                }
                "--help" | "-h" => bail!(USAGE),
                flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
                _ => args.pairs.push(arg),
            }
        }

        Ok(args)
    }
}

fn main() -> Result<()> {
    if let Err(err) = logger::init() {
        eprintln!("logger already installed: {err}");
    }

    let args = Args::parse(std::env::args().skip(1))?;
    let config = parse_quantum(&args.quantum).context("invalid quantum")?;

    let processes = if args.pairs.is_empty() {
        let mut rng = StdRng::seed_from_u64(args.seed);
        info!("generating {} random processes (seed {})", args.count, args.seed);
        random_processes(args.count, &mut rng)
    } else {
        let fields = args
            .pairs
            .iter()
            .map(|pair| {
                pair.split_once(':')
                    .with_context(|| format!("expected ARRIVAL:BURST, got {pair:?}"))
            })
            .collect::<Result<Vec<_>>>()?;
        parse_processes(&fields).context("invalid process list")?
    };

    if processes.is_empty() {
        warn!("no processes to schedule");
    }
    for p in &processes {
        info!("{}: arrival={} burst={}", p.pid, p.arrival_time, p.burst_time);
    }

    let schedule = Sim::<RoundRobinScheduler>::new(processes, &config)?.run();

    println!("Gantt chart (quantum {}):", config.quantum);
    println!("{}", render_gantt(&schedule.trace));
    println!();
    println!("{}", render_results(&schedule));

    Ok(())
}
