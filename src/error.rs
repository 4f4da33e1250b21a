use thiserror::Error;

/// Errors surfaced to whoever invoked the engine.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("Parsing resulted in empty data: no {0}")]
    EmptyInput(&'static str),

    /// Carries the strategy's trace so callers can see why nothing was placed.
    #[error("Algorithm did not produce a valid schedule: the input is too constrained")]
    EmptySchedule { steps: Vec<String> },

    #[error("Exhaustive search needs a node budget; set SCHEDULER_NODE_BUDGET")]
    UnboundedSearch,

    #[error("Course '{course}' has unsupported duration {hours}h (expected 2 or 3)")]
    UnsupportedDuration { course: String, hours: u8 },

    #[error("Unsupported timeslot duration key '{0}' (expected \"2\" or \"3\")")]
    UnsupportedSlotDuration(String),
}

/// Why the checker rejected a candidate schedule. Stays inside the engine:
/// the exhaustive search only uses it to discard a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("assignment {index}: professor {professor} exceeds the weekly hour cap ({hours}h)")]
    HoursExceeded {
        index: usize,
        professor: usize,
        hours: u32,
    },

    #[error("assignment {index}: professor {professor} teaches course {course} {count} times")]
    CourseCapExceeded {
        index: usize,
        professor: usize,
        course: usize,
        count: u32,
    },

    #[error("assignment {index}: professor {professor} is not available for that slot")]
    Unavailable { index: usize, professor: usize },

    #[error("assignment {index}: professor {professor} already holds that timeslot")]
    DoubleBooked { index: usize, professor: usize },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("could not flush csv writer: {0}")]
    Flush(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}
