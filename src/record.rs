use crate::severity::Severity;

const LOGGER_TAG: &str = "LOGGER";

/// What goes between the brackets of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Severity(Severity),
    /// Diagnostics the logger emits about its own configuration.
    /// Never filtered.
    Logger,
}

impl Tag {
    pub fn label(self) -> &'static str {
        match self {
            Tag::Severity(s) => s.label(),
            Tag::Logger => LOGGER_TAG,
        }
    }
}

/// A single line of output.
#[derive(Debug, Clone)]
pub struct Record {
    pub tag: Tag,
    pub message: String,
}

impl Record {
    pub fn new<M: Into<String>>(severity: Severity, message: M) -> Self {
        Self {
            tag: Tag::Severity(severity),
            message: message.into(),
        }
    }

    pub fn diagnostic<M: Into<String>>(message: M) -> Self {
        Self {
            tag: Tag::Logger,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.tag.label(), self.message)
    }
}
