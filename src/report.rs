use std::process::ExitCode;

use crate::formatter::FormatError;

/// What happened while events were fed into a formatter.
#[derive(Debug)]
#[non_exhaustive]
pub struct RunReport<FmtError> {
    pub events: usize,
    /// Examples the run announced on start.
    pub scheduled: usize,
    pub passed: usize,
    pub failed: usize,
    pub pending: usize,
    pub stopped: bool,
    pub closed: bool,
    pub fmt_errors: Vec<(FormatError, FmtError)>,
}

impl<FmtError> RunReport<FmtError> {
    pub(crate) fn new() -> Self {
        Self {
            events: 0,
            scheduled: 0,
            passed: 0,
            failed: 0,
            pending: 0,
            stopped: false,
            closed: false,
            fmt_errors: Vec::new(),
        }
    }

    /// Failure if an example failed or the run never stopped.
    pub fn exit_code(&self) -> ExitCode {
        match self.failed == 0 && self.stopped {
            true => ExitCode::SUCCESS,
            false => ExitCode::FAILURE,
        }
    }
}
