use average::{Estimate, Mean};
use log::{debug, info};
use rustc_hash::FxHashMap;

use super::{
    error::InvalidInput,
    input::{validate, validate_horizon},
    job::{ExecutionBlock, JobInstance, Process, Schedule, pid_number},
};
use crate::{
    config::SimConfig,
    core::{
        SchedCoreEvent,
        driver::SchedCore,
        state::{TaskId, Ticks},
    },
    scheduler::{DispatchError, Scheduler},
};

pub struct Sim<S: Scheduler> {
    pub core: SchedCore<S>,
    pub jobs: Vec<JobInstance>,
    job_cursor: usize,
    // TaskId --> job[index] map; used to propagate task completion to Job object
    tasks_to_jobs: FxHashMap<TaskId, usize>,
    trace: Vec<ExecutionBlock>,
    // job indices in the order they finished
    finished: Vec<usize>,
}

impl<S: Scheduler> Sim<S> {
    pub fn new(mut jobs: Vec<Process>, config: &SimConfig) -> Result<Self, InvalidInput> {
        for job in &jobs {
            validate(job)?;
        }
        validate_horizon(&jobs)?;

        // Stable: equal arrivals keep submission order
        jobs.sort_by_key(|job| job.arrival_time);
        let jobs: Vec<JobInstance> = jobs.into_iter().map(JobInstance::new).collect();

        Ok(Self {
            core: SchedCore::<S>::new(config),
            tasks_to_jobs: FxHashMap::default(),
            trace: Vec::with_capacity(jobs.len()),
            finished: Vec::with_capacity(jobs.len()),
            jobs,
            job_cursor: 0,
        })
    }

    /// One pass of the dispatch loop: admit arrivals, then either run the
    /// queue head for one slice or idle until the next arrival.
    pub fn step(&mut self) -> Vec<SchedCoreEvent> {
        let mut events = self.handle_arrivals();

        match self.core.run_next() {
            Ok(slice) => {
                events.push(SchedCoreEvent::Dispatched {
                    task: slice.task,
                    start: slice.start,
                    slice: slice.end - slice.start,
                });

                let job_index = self.job_index(slice.task);
                self.trace.push(ExecutionBlock {
                    pid: self.jobs[job_index].job.pid.clone(),
                    start: slice.start,
                    end: slice.end,
                });

                if slice.completed {
                    self.jobs[job_index].completion_time = Some(slice.end);
                    self.finished.push(job_index);
                    events.push(SchedCoreEvent::Completed {
                        task: slice.task,
                        at: slice.end,
                    });
                } else {
                    // Processes that arrived while the slice ran are queued
                    // ahead of the task being preempted.
                    events.extend(self.handle_arrivals());
                    events.push(self.core.requeue(slice.task));
                }
            }
            Err(DispatchError::NoRunnableTask) => {
                if let Some(next) = self.next_arrival() {
                    events.push(self.core.idle_until(next));
                }
            }
        }

        self.core.observe();
        events
    }

    fn handle_arrivals(&mut self) -> Vec<SchedCoreEvent> {
        let now = self.core.now();
        let mut events = Vec::new();

        // Jobs are sorted, so arrivals are contiguous from the cursor
        while let Some(instance) = self.jobs.get_mut(self.job_cursor) {
            if instance.job.arrival_time > now {
                break;
            }

            let task_id = self
                .core
                .ctx
                .create_task(instance.job.arrival_time, instance.job.burst_time);
            self.tasks_to_jobs.insert(task_id, self.job_cursor);
            events.push(self.core.wake_task(task_id));

            self.job_cursor += 1;
        }

        events
    }

    fn job_index(&self, task: TaskId) -> usize {
        *self
            .tasks_to_jobs
            .get(&task)
            .expect("Dispatched task missing associated job")
    }

    pub fn next_arrival(&self) -> Option<Ticks> {
        self.jobs
            .get(self.job_cursor)
            .map(|instance| instance.job.arrival_time)
    }

    pub fn all_jobs_completed(&self) -> bool {
        self.jobs.iter().all(|job| job.completion_time.is_some())
    }

    pub fn jobs_map<T>(&self, f: impl Fn(&JobInstance) -> T) -> impl Iterator<Item = T> {
        self.jobs.iter().map(f)
    }

    pub fn trace(&self) -> &[ExecutionBlock] {
        &self.trace
    }

    /// Step until every job has completed, logging each engine event.
    pub fn run(mut self) -> Schedule {
        while !self.all_jobs_completed() {
            let now = self.core.now();
            for event in self.step() {
                debug!("t={} {:?}", now, event);
            }
        }

        info!(
            "simulated {} processes in {} steps, finished at t={}",
            self.jobs.len(),
            self.core.observer().steps(),
            self.core.now()
        );
        self.into_schedule()
    }

    pub fn into_schedule(self) -> Schedule {
        debug_assert!(self.all_jobs_completed(), "Schedule taken before completion");

        let mut results: Vec<_> = self
            .finished
            .iter()
            .filter_map(|&index| self.jobs[index].result())
            .collect();

        let average_turnaround = if results.is_empty() {
            None
        } else {
            let mean: Mean = results
                .iter()
                .map(|result| result.turnaround_time as f64)
                .collect();
            Some(mean.estimate())
        };

        results.sort_by_key(|result| pid_number(&result.pid).unwrap_or(u64::MAX));

        Schedule {
            trace: self.trace,
            results,
            average_turnaround,
        }
    }
}
