/// Console adapters for progress and diagnostic output
mod progress_reporter;

pub use progress_reporter::{SilentProgressReporter, StderrProgressReporter};
