//! Build-log collaborator seam.
//!
//! The hosting orchestrator surfaces task output through its own build log;
//! this trait keeps that boundary testable. [`TracingBuildLogger`] routes
//! entries through `tracing` for standalone use, [`MemoryBuildLogger`]
//! captures them for assertions.

use std::cell::RefCell;
use tracing::{error, info};

pub trait BuildLogger {
    fn log(&self, message: &str);
    fn error(&self, message: &str);
}

/// Emits build-log entries as `tracing` events.
#[derive(Debug, Default)]
pub struct TracingBuildLogger;

impl BuildLogger for TracingBuildLogger {
    fn log(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }
}

/// Captures build-log entries in memory.
#[derive(Debug, Default)]
pub struct MemoryBuildLogger {
    entries: RefCell<Vec<String>>,
}

impl MemoryBuildLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn contains(&self, fragment: &str) -> bool {
        self.entries.borrow().iter().any(|e| e.contains(fragment))
    }
}

impl BuildLogger for MemoryBuildLogger {
    fn log(&self, message: &str) {
        self.entries.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.entries.borrow_mut().push(message.to_string());
    }
}
