pub mod stdout;

use crate::record::Record;

pub use stdout::{StdoutDrain, StringDrain};

/// Destination for records that passed the severity filter.
pub trait Drain: Send + Sync {
    fn log_record(&self, record: &Record);
}
