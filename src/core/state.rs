use std::collections::VecDeque;

// Index into Task Vec
pub type TaskId = usize;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Runnable,
    Running,
    Completed,
}

#[derive(Debug)]
pub struct Task {
    pub id: TaskId,
    pub state: TaskState,
    pub arrival_time: Ticks,
    pub required_service: Ticks,
    pub consumed_service: Ticks,
    pub allocated_timeslice: Option<Ticks>,
    pub completion_time: Option<Ticks>,
    pub queued: bool,
}

impl Task {
    pub fn remaining(&self) -> Ticks {
        self.required_service - self.consumed_service
    }
}

/// Scheduling state of a single run: the task table, the ready queue and the
/// clock. Owned by one `SchedCore` and dropped with it.
#[derive(Debug)]
pub struct KernelCtx {
    pub now: Ticks,
    pub current: Option<TaskId>,
    pub tasks: Vec<Task>,
    pub ready: VecDeque<TaskId>,

    // Increment upon task creation
    next_task_id: TaskId,
}

impl KernelCtx {
    pub fn new() -> Self {
        Self {
            now: 0,
            current: None,
            tasks: Vec::new(),
            ready: VecDeque::new(),
            next_task_id: 0,
        }
    }

    pub fn create_task(&mut self, arrival_time: Ticks, required_service: Ticks) -> TaskId {
        let id = self.next_task_id;
        self.next_task_id += 1;

        let task = Task {
            id,
            state: TaskState::Runnable,
            arrival_time,
            required_service,
            consumed_service: 0,
            allocated_timeslice: None,
            completion_time: None,
            queued: false,
        };

        debug_assert_eq!(self.tasks.len(), id, "TaskId must match Vec index");
        self.tasks.push(task);

        id
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self
            .now
            .checked_add(delta)
            .expect("Clock advanced past Ticks::MAX");
    }

    pub fn advance_to(&mut self, time: Ticks) {
        debug_assert!(time >= self.now, "Clock cannot move backwards");
        self.now = time;
    }

    pub fn dsq_push_back(&mut self, task_id: TaskId, slice: Ticks) {
        let task = self.task_mut(task_id);
        assert!(!task.queued, "Task {task_id} already present in the ready queue");
        debug_assert!(
            task.state == TaskState::Runnable,
            "Task {task_id} must be Runnable when enqueued"
        );
        debug_assert!(slice > 0, "Task {task_id} enqueued with an empty slice");

        task.allocated_timeslice = Some(slice);
        task.queued = true;
        self.ready.push_back(task_id);
    }

    pub fn dsq_pop_front(&mut self) -> Option<TaskId> {
        let task = self.ready.pop_front()?;
        let was_queued = std::mem::replace(&mut self.task_mut(task).queued, false);
        debug_assert!(was_queued, "Task {task} missing ready queue membership");
        Some(task)
    }

    pub fn has_ready(&self) -> bool {
        !self.ready.is_empty()
    }

    pub fn task(&self, task_id: TaskId) -> &Task {
        &self.tasks[task_id]
    }

    pub fn task_mut(&mut self, task_id: TaskId) -> &mut Task {
        &mut self.tasks[task_id]
    }

    pub fn cpu_is_idle(&self) -> bool {
        self.current.is_none()
    }

    pub fn mark_runnable(&mut self, task_id: TaskId) {
        let task = self.task_mut(task_id);
        debug_assert!(
            task.state != TaskState::Completed,
            "Completed task {} cannot be runnable",
            task.id
        );
        task.state = TaskState::Runnable;
    }

    pub fn mark_completed(&mut self, task_id: TaskId, completion_time: Ticks) {
        let task = &mut self.tasks[task_id];
        debug_assert!(!task.queued, "Completing task {task_id} that is still enqueued");
        debug_assert!(
            task.state == TaskState::Running,
            "Task {task_id} must have been running before marked complete"
        );

        task.state = TaskState::Completed;
        task.consumed_service = task.required_service;
        task.completion_time = Some(completion_time);
    }

    pub fn set_running(&mut self, task_id: TaskId) {
        debug_assert!(
            !self.task(task_id).queued,
            "Running task {task_id} must not be enqueued"
        );
        debug_assert!(self.current.is_none(), "CPU already running a task");

        self.current = Some(task_id);
        self.task_mut(task_id).state = TaskState::Running;
    }

    pub fn clear_cpu(&mut self) {
        self.current = None;
    }
}

impl Default for KernelCtx {
    fn default() -> Self {
        Self::new()
    }
}
