pub mod round_robin;

use crate::{
    config::SimConfig,
    core::state::{KernelCtx, TaskId},
};
pub use round_robin::RoundRobinScheduler;

pub type EnqueueFlags = u64;

pub const ENQ_WAKEUP: EnqueueFlags = 1 << 0;
pub const ENQ_PREEMPT: EnqueueFlags = 1 << 32;
pub const ENQ_REENQ: EnqueueFlags = 1 << 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    NoRunnableTask,
}

pub trait Scheduler {
    fn init(ctx: &mut KernelCtx, config: &SimConfig) -> Self;

    // Called on arrival (ENQ_WAKEUP) and after preemption (ENQ_PREEMPT | ENQ_REENQ)
    fn enqueue(&mut self, ctx: &mut KernelCtx, task: TaskId, flags: EnqueueFlags);

    // Pick the next task to run when the CPU is free
    fn dispatch(&mut self, ctx: &mut KernelCtx) -> Result<TaskId, DispatchError>;
}
