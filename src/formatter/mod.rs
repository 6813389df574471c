//! Formatting of run events.
//!
//! A [`RunFormatter`] is handed every lifecycle event of a test run, in the
//! order the test engine emitted them: the run starts, groups start and
//! finish, examples pass, fail or stay pending, the run stops, the failures
//! are dumped and finally the run is closed.
//!
//! Every callback has a no-op default, so a formatter only implements the
//! events it cares about. Errors a callback returns are collected by the
//! caller and do not interrupt the event stream.

use crate::failure::FailureRecord;

pub mod common;
pub mod explain;
pub mod no;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtStart {
    /// Number of examples scheduled to run.
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtGroup<'e> {
    pub description: &'e str,
    /// How many groups enclose this group, counting the group itself.
    pub depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtExample<'e> {
    pub full_description: &'e str,
    pub group: &'e str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtStop<'e> {
    /// Number of examples that ran.
    pub examples: usize,
    pub failures: &'e [FailureRecord],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtDumpFailures<'e> {
    pub failures: &'e [FailureRecord],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FmtClose;

/// Names the callback a formatter error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatError {
    Start,
    GroupStarted,
    GroupFinished,
    ExamplePassed,
    ExampleFailed,
    ExamplePending,
    Stop,
    DumpFailures,
    Close,
}

pub trait RunFormatter {
    type Error;

    fn fmt_start(&mut self, data: FmtStart) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_group_started(&mut self, data: FmtGroup<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_group_finished(&mut self, data: FmtGroup<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_example_passed(&mut self, data: FmtExample<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_example_failed(&mut self, data: FmtExample<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_example_pending(&mut self, data: FmtExample<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_stop(&mut self, data: FmtStop<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    /// Called right after [`fmt_stop`](Self::fmt_stop) with the same failures.
    fn fmt_dump_failures(&mut self, data: FmtDumpFailures<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_close(&mut self, data: FmtClose) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }
}
