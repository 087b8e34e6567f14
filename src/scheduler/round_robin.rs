use std::num::NonZeroU64;

use log::trace;

use super::{DispatchError, ENQ_REENQ, EnqueueFlags, KernelCtx, Scheduler, TaskId};
use crate::config::SimConfig;

/// Plain round robin: one FIFO queue, every enqueue grants a full quantum.
pub struct RoundRobinScheduler {
    quantum: NonZeroU64,
}

impl Scheduler for RoundRobinScheduler {
    fn init(_ctx: &mut KernelCtx, config: &SimConfig) -> Self {
        Self {
            quantum: config.quantum,
        }
    }

    fn enqueue(&mut self, ctx: &mut KernelCtx, task: TaskId, flags: EnqueueFlags) {
        trace!(
            "enqueue task={task} reenq={} queue_len={}",
            flags & ENQ_REENQ != 0,
            ctx.ready.len()
        );
        ctx.dsq_push_back(task, self.quantum.get());
    }

    fn dispatch(&mut self, ctx: &mut KernelCtx) -> Result<TaskId, DispatchError> {
        ctx.dsq_pop_front().ok_or(DispatchError::NoRunnableTask)
    }
}
