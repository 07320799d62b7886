/*!
# sevlog

Console logger that tags each line with a severity and drops anything below
a configurable minimum severity.

```
use sevlog::{Logger, Severity};

let logger = Logger::new();
logger.log_at(Severity::Warn, "disk almost full"); // [WARNING] disk almost full
logger.log_debug("not printed, default minimum is WARN");

logger.set_minimum_severity(sevlog::DEBUG).unwrap();
logger.log_debug("printed now"); // [DEBUG] printed now
```
 */
#![allow(clippy::new_without_default)]

pub mod drains;
pub mod logger;
pub mod record;
pub mod severity;

pub use drains::{Drain, StdoutDrain, StringDrain};
pub use logger::Logger;
pub use record::{Record, Tag};
pub use severity::{Severity, DEBUG, ERR, WARN};
