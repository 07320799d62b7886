use crate::drains::{Drain, StdoutDrain};
use crate::record::Record;
use crate::severity::Severity;
use anyhow::Result;
use std::sync::{Arc, RwLock};

/// Prints records whose severity is at or above the minimum severity.
///
/// Cloning gives another handle to the same threshold and drains, which is
/// how a single logger gets shared between components.
#[derive(Clone)]
pub struct Logger {
    drains: Arc<RwLock<Vec<Box<dyn Drain>>>>,
    minimum_severity: Arc<RwLock<Severity>>,
}

impl Logger {
    /// Logger writing to STDOUT with the default `Warn` threshold.
    pub fn new() -> Self {
        let logger = Self::empty();
        logger.add_drain(Box::new(StdoutDrain::new()));
        logger
    }

    /// Logger with no drains attached.
    pub fn empty() -> Self {
        Logger {
            drains: Arc::new(RwLock::new(vec![])),
            minimum_severity: Arc::new(RwLock::new(Severity::default())),
        }
    }

    pub fn with_minimum_severity(self, severity: Severity) -> Self {
        self.set_severity(severity);
        self
    }

    pub fn add_drain(&self, drain: Box<dyn Drain>) {
        self.drains.write().expect("poisoned lock").push(drain);
    }

    pub fn minimum_severity(&self) -> Severity {
        *self.minimum_severity.read().expect("poisoned lock")
    }

    pub fn set_severity(&self, severity: Severity) {
        *self.minimum_severity.write().expect("poisoned lock") = severity;
    }

    /// Sets the threshold from one of the `d`/`w`/`e` tokens.
    ///
    /// An unknown token keeps the current threshold and prints a
    /// `[LOGGER]` diagnostic. The error is returned as well, callers are
    /// free to ignore it.
    pub fn set_minimum_severity(&self, token: &str) -> Result<()> {
        match token.parse::<Severity>() {
            Ok(severity) => {
                self.set_severity(severity);
                Ok(())
            }
            Err(e) => {
                self.emit(&Record::diagnostic(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.rank() >= self.minimum_severity().rank()
    }

    pub fn log_at<M: Into<String>>(&self, severity: Severity, message: M) {
        if self.is_enabled(severity) {
            self.emit(&Record::new(severity, message));
        }
    }

    pub fn log_debug<M: Into<String>>(&self, message: M) {
        self.log_at(Severity::Debug, message);
    }

    fn emit(&self, record: &Record) {
        let drains = self.drains.read().expect("poisoned lock");
        for drain in drains.iter() {
            drain.log_record(record);
        }
    }
}
