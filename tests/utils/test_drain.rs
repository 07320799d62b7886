use sevlog::{Drain, Record, Tag};
use std::sync::{Arc, Mutex};

pub fn strip_ansi(s: &str) -> String {
    String::from_utf8(
        strip_ansi_escapes::strip(s).expect("Cant strip ANSI escape characters from a string"),
    )
    .expect("not a utf8 string")
}

/// Keeps the records themselves rather than rendered text, so tests can
/// look at tags and messages separately.
#[derive(Clone)]
pub struct TestDrain {
    pub records: Arc<Mutex<Vec<Record>>>,
}

impl TestDrain {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn tags(&self) -> Vec<Tag> {
        let records = self.records.lock().expect("poisoned lock");
        records.iter().map(|r| r.tag).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        let records = self.records.lock().expect("poisoned lock");
        records.iter().map(|r| r.message.clone()).collect()
    }

    pub fn lines(&self) -> Vec<String> {
        let records = self.records.lock().expect("poisoned lock");
        records.iter().map(|r| r.to_string()).collect()
    }
}

impl Drain for TestDrain {
    fn log_record(&self, record: &Record) {
        self.records
            .lock()
            .expect("poisoned lock")
            .push(record.clone());
    }
}
