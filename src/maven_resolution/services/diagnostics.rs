use crate::ports::outbound::ProgressReporter;

/// Warning log for one resolution run
///
/// Warnings are kept in the order they were raised and echoed to the
/// progress reporter as they happen. Informational events are only echoed.
pub struct Diagnostics<'r> {
    warnings: Vec<String>,
    reporter: &'r dyn ProgressReporter,
}

impl<'r> Diagnostics<'r> {
    pub fn new(reporter: &'r dyn ProgressReporter) -> Self {
        Self {
            warnings: Vec::new(),
            reporter,
        }
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.reporter.report_error(&message);
        self.warnings.push(message);
    }

    pub fn info(&self, message: &str) {
        self.reporter.report(message);
    }

    pub fn progress(&self, current: usize, total: usize, message: &str) {
        self.reporter.report_progress(current, total, Some(message));
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingReporter {
        errors: RefCell<Vec<String>>,
        infos: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, message: &str) {
            self.infos.borrow_mut().push(message.to_string());
        }
        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
        fn report_error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
        fn report_completion(&self, _message: &str) {}
    }

    #[test]
    fn test_warnings_are_recorded_in_order_and_echoed() {
        let reporter = RecordingReporter::default();
        let mut diagnostics = Diagnostics::new(&reporter);

        diagnostics.warn("WARNING: first");
        diagnostics.warn(String::from("ERROR: second"));

        assert_eq!(diagnostics.warnings(), ["WARNING: first", "ERROR: second"]);
        assert_eq!(*reporter.errors.borrow(), vec!["WARNING: first", "ERROR: second"]);
    }

    #[test]
    fn test_info_is_not_a_warning() {
        let reporter = RecordingReporter::default();
        let mut diagnostics = Diagnostics::new(&reporter);
        diagnostics.info("INFO: Loaded POM from disk cache: /tmp/x.pom");

        assert!(diagnostics.warnings().is_empty());
        assert_eq!(reporter.infos.borrow().len(), 1);
        diagnostics.warn("WARNING: w");
        assert_eq!(diagnostics.into_warnings(), vec!["WARNING: w"]);
    }
}
