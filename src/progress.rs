// src/progress.rs
/// Status reporting for the processing pipeline.
/// Frontends (GUI/CLI) implement this to surface what is happening.
pub trait Progress {
    /// Called at the start with the number of steps (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one step completes (input read, report built, file written...).
    fn step_done(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
