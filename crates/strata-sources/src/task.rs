//! Safe background execution.
//!
//! Resolution is synchronous, but hosts sometimes run a whole resolution
//! pass off the startup thread. [`spawn`] runs a unit of work on a
//! background thread and converts a panic into [`SourceError::TaskPanic`]
//! instead of letting it take the process down; [`TaskHandle::wait`]
//! blocks until completion and surfaces the outcome as an ordinary
//! `Result`.

use std::any::Any;
use std::thread;

use crate::error::{Result, SourceError};

/// Handle to a unit of work running on a background thread.
#[derive(Debug)]
pub struct TaskHandle<T> {
    handle: thread::JoinHandle<Result<T>>,
}

impl<T> TaskHandle<T> {
    /// Blocks until the task finishes.
    ///
    /// A panic inside the task is returned as
    /// [`SourceError::TaskPanic`] carrying the panic payload's message.
    pub fn wait(self) -> Result<T> {
        match self.handle.join() {
            Ok(result) => result,
            Err(payload) => Err(SourceError::TaskPanic(panic_message(payload.as_ref()))),
        }
    }

    /// Returns true once the task has finished running.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Runs `f` on a background thread.
pub fn spawn<T, F>(f: F) -> TaskHandle<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    TaskHandle {
        handle: thread::spawn(f),
    }
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
