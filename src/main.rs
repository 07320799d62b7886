use sevlog::{Logger, Severity};

// Logs one line per severity. Without an argument the default threshold
// applies and the debug line must not show up. An optional `d`/`w`/`e`
// argument sets the threshold first.
fn main() {
    let logger = Logger::new();
    if let Some(token) = std::env::args().nth(1) {
        logger.set_minimum_severity(&token).ok();
    }
    logger.log_at(Severity::Debug, "Debug test");
    logger.log_at(Severity::Warn, "Warning test");
    logger.log_at(Severity::Error, "Error test");
}
