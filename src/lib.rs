pub mod config;
pub mod core;
pub mod logger;
pub mod report;
pub mod scheduler;
pub mod sim;

pub use config::SimConfig;
pub use scheduler::Scheduler;
pub use sim::{
    ExecutionBlock, InvalidInput, Process, ProcessResult, Schedule, Sim, simulate, simulate_raw,
};
