mod types;
mod view;

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::types::Student;

// ==========================================
// LOG CAPTURE
// ==========================================

// Records are kept per thread so parallel tests don't see each other's logs.
thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|c| {
            c.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Install the capturing logger (once per binary) and clear this thread's records
fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger in the test binary");
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.with(|c| c.borrow_mut().clear());
}

fn captured_errors() -> Vec<String> {
    CAPTURED.with(|c| {
        c.borrow()
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}

// ==========================================
// FIXTURES
// ==========================================

const ALICE_ONLY: &str = r#"[{"Id":"101","Name":"Alice","School":"Trinity"}]"#;

const THREE_STUDENTS: &str = r#"[
    {"Id": 10000, "Name": "Aru", "School": "Gehenna"},
    {"Id": 10001, "Name": "Eimi", "School": "Millennium"},
    {"Id": 10002, "Name": "Haruna", "School": "Gehenna"}
]"#;

fn student(id: &str, name: &str, school: &str) -> Student {
    Student::new(id, name, school)
}
