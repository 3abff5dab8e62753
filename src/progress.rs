// src/progress.rs
use crate::specs::status::ExtractionResult;

/// Lightweight progress reporting for multi-course checks.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of courses.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    fn item_done(&mut self, _course: &str, _result: &ExtractionResult) {}

    fn item_failed(&mut self, _course: &str, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
