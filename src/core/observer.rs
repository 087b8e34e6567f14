use super::state::{KernelCtx, TaskState, Ticks};

#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
    last_now: Ticks,
}

impl Observer {
    pub fn new() -> Self {
        Self {
            step: 0,
            last_now: 0,
        }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, core: &KernelCtx) {
        self.step += 1;

        debug_assert!(
            core.now >= self.last_now,
            "Clock went backwards: {} -> {}",
            self.last_now,
            core.now
        );
        self.last_now = core.now;

        debug_assert!(
            core.current.is_none(),
            "CPU must be released between dispatches"
        );

        for &task_id in &core.ready {
            let task = core.task(task_id);
            debug_assert!(task.queued, "Task {task_id} in ready queue but not flagged");
            debug_assert_eq!(
                task.state,
                TaskState::Runnable,
                "Queued task {task_id} must be Runnable"
            );
            debug_assert!(
                task.remaining() > 0,
                "Task {task_id} queued with no service left"
            );
        }

        let queued = core.tasks.iter().filter(|t| t.queued).count();
        debug_assert_eq!(
            queued,
            core.ready.len(),
            "Ready queue holds duplicates or lost a task"
        );

        for task in &core.tasks {
            debug_assert!(
                task.consumed_service <= task.required_service,
                "Task {} overran its burst",
                task.id
            );
            if task.state == TaskState::Completed {
                debug_assert!(!task.queued, "Completed task {} still queued", task.id);
                let earliest = task.arrival_time.checked_add(task.required_service);
                debug_assert_eq!(
                    task.completion_time
                        .zip(earliest)
                        .map(|(done, earliest)| done >= earliest),
                    Some(true),
                    "Completed task {} has an impossible completion time",
                    task.id
                );
            }
        }
    }
}
