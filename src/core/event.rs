use crate::core::{TaskId, Ticks};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedCoreEvent {
    // Task admitted to the ready queue
    Arrived {
        task: TaskId,
        at: Ticks,
    },
    Dispatched {
        task: TaskId,
        start: Ticks,
        slice: Ticks,
    },
    // Slice expired with service left; the task goes back to the queue tail
    Preempted {
        task: TaskId,
        at: Ticks,
        remaining: Ticks,
    },
    Completed {
        task: TaskId,
        at: Ticks,
    },
    // Nothing runnable; clock jumped to the next arrival
    CpuIdle {
        from: Ticks,
        to: Ticks,
    },
}
