use log::trace;

use super::{
    event::SchedCoreEvent,
    observer::Observer,
    state::{KernelCtx, TaskId, Ticks},
};
use crate::{
    config::SimConfig,
    scheduler::{DispatchError, ENQ_PREEMPT, ENQ_REENQ, ENQ_WAKEUP, EnqueueFlags, Scheduler},
};

/// One dispatch of a task: it held the CPU over `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSlice {
    pub task: TaskId,
    pub start: Ticks,
    pub end: Ticks,
    pub completed: bool,
}

pub struct SchedCore<S: Scheduler> {
    pub ctx: KernelCtx,
    pub scheduler: S,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(config: &SimConfig) -> Self {
        let mut ctx = KernelCtx::new();
        let scheduler = S::init(&mut ctx, config);
        let observer = Observer::new();
        Self {
            ctx,
            scheduler,
            observer,
        }
    }

    pub fn wake_task(&mut self, task: TaskId) -> SchedCoreEvent {
        self.ctx.mark_runnable(task);
        self.scheduler.enqueue(&mut self.ctx, task, ENQ_WAKEUP);
        SchedCoreEvent::Arrived {
            task,
            at: self.ctx.now,
        }
    }

    // Put a preempted task back; callers admit new arrivals first
    pub fn requeue(&mut self, task: TaskId) -> SchedCoreEvent {
        self.ctx.mark_runnable(task);
        let flags: EnqueueFlags = ENQ_PREEMPT | ENQ_REENQ;
        self.scheduler.enqueue(&mut self.ctx, task, flags);
        SchedCoreEvent::Preempted {
            task,
            at: self.ctx.now,
            remaining: self.ctx.task(task).remaining(),
        }
    }

    /// Run the next ready task for `min(slice, remaining)` ticks and release
    /// the CPU. A task that finishes is marked completed, one that does not
    /// stays off the ready queue until `requeue`.
    pub fn run_next(&mut self) -> Result<RunSlice, DispatchError> {
        debug_assert!(self.ctx.cpu_is_idle(), "CPU busy at dispatch");
        let task_id = self.scheduler.dispatch(&mut self.ctx)?;
        self.ctx.set_running(task_id);

        let start = self.ctx.now;
        let exec = {
            let task = self.ctx.task_mut(task_id);
            let slice = task
                .allocated_timeslice
                .expect("Dispatched task must have a slice");
            let exec = slice.min(task.remaining());
            task.consumed_service += exec;
            exec
        };
        debug_assert!(exec > 0, "Dispatched task {task_id} with nothing to run");

        self.ctx.advance_time(exec);
        self.ctx.clear_cpu();

        let completed = self.ctx.task(task_id).remaining() == 0;
        if completed {
            self.ctx.mark_completed(task_id, self.ctx.now);
        }
        trace!("ran task={task_id} [{start}, {}) completed={completed}", self.ctx.now);

        Ok(RunSlice {
            task: task_id,
            start,
            end: self.ctx.now,
            completed,
        })
    }

    pub fn idle_until(&mut self, until: Ticks) -> SchedCoreEvent {
        debug_assert!(
            !self.ctx.has_ready(),
            "CPU idled with runnable tasks queued"
        );
        let from = self.ctx.now;
        self.ctx.advance_to(until);
        SchedCoreEvent::CpuIdle { from, to: until }
    }

    pub fn observe(&mut self) {
        self.observer.observe(&self.ctx);
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::TaskState, scheduler::RoundRobinScheduler};

    fn core(quantum: u64) -> SchedCore<RoundRobinScheduler> {
        SchedCore::new(&SimConfig::new(quantum).unwrap())
    }

    #[test]
    fn run_is_capped_by_quantum() {
        let mut core = core(2);
        let task = core.ctx.create_task(0, 5);
        core.wake_task(task);

        let slice = core.run_next().unwrap();
        assert_eq!(
            slice,
            RunSlice {
                task,
                start: 0,
                end: 2,
                completed: false
            }
        );
        assert_eq!(core.ctx.task(task).remaining(), 3);
        assert!(!core.ctx.has_ready());
    }

    #[test]
    fn run_is_capped_by_remaining_service() {
        let mut core = core(4);
        let task = core.ctx.create_task(0, 3);
        core.wake_task(task);

        let slice = core.run_next().unwrap();
        assert_eq!(slice.end, 3);
        assert!(slice.completed);
        assert_eq!(core.ctx.task(task).state, TaskState::Completed);
        assert_eq!(core.ctx.task(task).completion_time, Some(3));
    }

    #[test]
    fn requeue_reports_remaining_service() {
        let mut core = core(1);
        let task = core.ctx.create_task(0, 3);
        core.wake_task(task);
        core.run_next().unwrap();

        let event = core.requeue(task);
        assert_eq!(
            event,
            SchedCoreEvent::Preempted {
                task,
                at: 1,
                remaining: 2
            }
        );
        core.observe();
        assert_eq!(core.observer().steps(), 1);
    }

    #[test]
    fn empty_queue_has_nothing_to_dispatch() {
        let mut core = core(1);
        assert_eq!(core.run_next(), Err(DispatchError::NoRunnableTask));
        assert_eq!(core.idle_until(4), SchedCoreEvent::CpuIdle { from: 0, to: 4 });
        assert_eq!(core.now(), 4);
    }
}
