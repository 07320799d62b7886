use super::Drain;
use crate::record::{Record, Tag};
use crate::severity::Severity;
use colored::*;
use std::sync::{Arc, Mutex};

/// Simple drain that prints every record into STDOUT, one line each
pub struct StdoutDrain {
    /// Colors the `[TAG]` prefix. Off by default so that the output is
    /// exactly `[LEVEL] message`.
    pub use_color: bool,
}

// Similar to STDOUT drain, but instead logs everything into a string
// that it owns that can later be inspected/dumped.
#[derive(Clone)]
pub struct StringDrain {
    pub output: Arc<Mutex<String>>,
    use_color: bool,
}

impl StdoutDrain {
    pub fn new() -> Self {
        Self { use_color: false }
    }
}

impl Drain for StdoutDrain {
    fn log_record(&self, record: &Record) {
        println!("{}", make_string(record, self.use_color));
    }
}

impl StringDrain {
    pub fn new() -> Self {
        Self {
            output: Arc::new(Mutex::new(String::new())),
            use_color: false,
        }
    }

    /// Captures lines exactly as a colored `StdoutDrain` would print them,
    /// ANSI escapes included.
    pub fn with_color() -> Self {
        Self {
            use_color: true,
            ..Self::new()
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.output
            .lock()
            .expect("poisoned lock")
            .lines()
            .map(String::from)
            .collect()
    }

    pub fn clear(&self) {
        self.output.lock().expect("poisoned lock").clear();
    }
}

impl Drain for StringDrain {
    fn log_record(&self, record: &Record) {
        let result = make_string(record, self.use_color);
        let mut output = self.output.lock().expect("poisoned lock");
        output.push_str(&result);
        output.push('\n');
    }
}

impl std::fmt::Display for StringDrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.output.lock().expect("poisoned lock");
        write!(f, "{}", &s)
    }
}

/// Renders a record without the trailing newline.
pub fn make_string(record: &Record, use_color: bool) -> String {
    if !use_color {
        return record.to_string();
    }

    let tag = format!("[{}]", record.tag.label());
    let tag = match record.tag {
        Tag::Severity(Severity::Debug) => tag.dimmed(),
        Tag::Severity(Severity::Warn) => tag.yellow(),
        Tag::Severity(Severity::Error) => tag.red(),
        Tag::Logger => tag.magenta(),
    };
    format!("{} {}", tag, record.message)
}
