//! Dedicated worker thread for generator tasks.
//!
//! The worker owns one [`RandomArrayGenerator`] for its whole lifetime.
//! Tasks arrive over a channel, run one at a time in submission order, and
//! each result travels back over the reply channel created for that task.

use crate::error::{WorkerError, WorkerResult};
use array_core::config::GeneratorConfig;
use array_core::{Array, GeneratorResult, RandomArrayGenerator};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Work executed on the worker thread against its generator.
pub type Task = Box<dyn FnOnce(&mut RandomArrayGenerator) -> GeneratorResult<Array> + Send>;

type Reply = Sender<WorkerResult<Array>>;

enum Message {
    Run { task: Task, reply: Reply },
    Stop,
}

/// Receives the result of one submitted task.
#[derive(Debug)]
pub struct TaskHandle {
    receiver: Receiver<WorkerResult<Array>>,
}

impl TaskHandle {
    /// Blocks until the task finishes.
    pub fn wait(self) -> WorkerResult<Array> {
        self.receiver
            .recv()
            .map_err(|_| WorkerError::Disconnected)?
    }

    /// Blocks for at most `timeout`.
    ///
    /// On [`WorkerError::Timeout`] the task keeps running; its result is
    /// discarded when it completes.
    pub fn wait_timeout(self, timeout: Duration) -> WorkerResult<Array> {
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(WorkerError::Timeout),
            Err(RecvTimeoutError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }

    /// Returns the result if it is ready, `None` otherwise.
    ///
    /// The result is handed out once; later calls report
    /// [`WorkerError::Disconnected`].
    pub fn try_result(&self) -> Option<WorkerResult<Array>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(WorkerError::Disconnected)),
        }
    }
}

/// Background worker running generator tasks on its own thread.
///
/// Dropping the worker stops it: queued tasks finish first, then the thread
/// is joined.
pub struct ComputeWorker {
    sender: Option<Sender<Message>>,
    handle: Option<JoinHandle<()>>,
    completed: Arc<AtomicUsize>,
}

impl ComputeWorker {
    /// Spawns the worker thread with a generator built from `config`.
    pub fn spawn(config: GeneratorConfig) -> WorkerResult<Self> {
        let (sender, receiver) = mpsc::channel();
        let completed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&completed);

        info!(
            layout = %config.layout,
            delay_ms = config.delay_ms,
            seed = ?config.seed,
            "Spawning compute worker"
        );

        let handle = thread::Builder::new()
            .name("array-worker".to_string())
            .spawn(move || {
                let generator = RandomArrayGenerator::new(config);
                run_loop(generator, receiver, counter);
            })
            .map_err(|e| WorkerError::Spawn(e.to_string()))?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
            completed,
        })
    }

    /// Queues `task` and returns immediately.
    ///
    /// # Errors
    ///
    /// - [`WorkerError::Stopped`] after [`stop`](Self::stop)
    /// - [`WorkerError::Disconnected`] if the worker thread has exited
    pub fn run_task(&self, task: Task) -> WorkerResult<TaskHandle> {
        let sender = self.sender.as_ref().ok_or(WorkerError::Stopped)?;
        let (reply, receiver) = mpsc::channel();

        sender
            .send(Message::Run { task, reply })
            .map_err(|_| WorkerError::Disconnected)?;

        Ok(TaskHandle { receiver })
    }

    /// Queues a `generate(size)` call on the worker's generator.
    pub fn submit_generate(&self, size: usize) -> WorkerResult<TaskHandle> {
        self.run_task(Box::new(move |generator: &mut RandomArrayGenerator| {
            generator.generate(size)
        }))
    }

    /// Returns `true` until the worker has been stopped or its thread exited.
    pub fn is_running(&self) -> bool {
        self.sender.is_some()
            && self
                .handle
                .as_ref()
                .is_some_and(|handle| !handle.is_finished())
    }

    /// Number of tasks the worker has finished, including failed ones.
    pub fn tasks_completed(&self) -> usize {
        self.completed.load(Ordering::Acquire)
    }

    /// Stops the worker and joins its thread.
    ///
    /// Tasks queued before this call still run. Calling `stop` again is a
    /// no-op.
    pub fn stop(&mut self) -> WorkerResult<()> {
        let Some(sender) = self.sender.take() else {
            return Ok(());
        };

        info!("Stopping compute worker");
        // A send failure means the thread is already gone; joining still applies.
        let _ = sender.send(Message::Stop);
        drop(sender);

        if let Some(handle) = self.handle.take() {
            handle
                .join()
                .map_err(|payload| WorkerError::TaskPanicked(panic_message(payload.as_ref())))?;
        }

        info!(tasks_completed = self.tasks_completed(), "Compute worker stopped");
        Ok(())
    }
}

impl Drop for ComputeWorker {
    fn drop(&mut self) {
        if self.sender.is_some() {
            debug!("Dropping compute worker");
        }
        if let Err(err) = self.stop() {
            warn!(error = %err, "Compute worker did not shut down cleanly");
        }
    }
}

impl std::fmt::Debug for ComputeWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputeWorker")
            .field("running", &self.is_running())
            .field("tasks_completed", &self.tasks_completed())
            .finish()
    }
}

fn run_loop(
    mut generator: RandomArrayGenerator,
    receiver: Receiver<Message>,
    completed: Arc<AtomicUsize>,
) {
    debug!("Compute worker thread started");

    for message in receiver {
        match message {
            Message::Run { task, reply } => {
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| task(&mut generator)));
                let result = match outcome {
                    Ok(Ok(array)) => Ok(array),
                    Ok(Err(err)) => Err(WorkerError::Generator(err)),
                    Err(payload) => {
                        let message = panic_message(payload.as_ref());
                        warn!(panic = %message, "Task panicked on compute worker");
                        Err(WorkerError::TaskPanicked(message))
                    }
                };
                completed.fetch_add(1, Ordering::Release);

                if reply.send(result).is_err() {
                    debug!("Task handle dropped before result was delivered");
                }
            }
            Message::Stop => break,
        }
    }

    info!("Shutting down compute worker thread");
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
