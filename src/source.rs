//! Feeding run events into a formatter.
//!
//! A test engine describes a run as a sequence of [`RunEvent`]s. They are
//! either replayed from anything iterable with [`replay`], or sent over a
//! [`channel`] from the thread the engine runs on while the receiving side
//! [`drive`](EventReceiver::drive)s the formatter on its own thread.
//!
//! Either way the formatter sees every event exactly once, in the order it
//! was produced, and one at a time.

use std::borrow::Cow;

use crossbeam_channel::{Receiver, Sender};
use thiserror::Error;

use crate::{RunReport, failure::FailureRecord, formatter::*};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunEvent {
    Start {
        count: usize,
    },
    GroupStarted {
        description: Cow<'static, str>,
        depth: usize,
    },
    GroupFinished {
        description: Cow<'static, str>,
        depth: usize,
    },
    ExamplePassed {
        full_description: Cow<'static, str>,
        group: Cow<'static, str>,
    },
    ExampleFailed {
        full_description: Cow<'static, str>,
        group: Cow<'static, str>,
    },
    ExamplePending {
        full_description: Cow<'static, str>,
        group: Cow<'static, str>,
    },
    Stop {
        examples: usize,
        failures: Vec<FailureRecord>,
    },
    Close,
}

impl RunEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RunEvent::Start { .. } => "start",
            RunEvent::GroupStarted { .. } => "group_started",
            RunEvent::GroupFinished { .. } => "group_finished",
            RunEvent::ExamplePassed { .. } => "example_passed",
            RunEvent::ExampleFailed { .. } => "example_failed",
            RunEvent::ExamplePending { .. } => "example_pending",
            RunEvent::Stop { .. } => "stop",
            RunEvent::Close => "close",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("the receiving side hung up before the {event} event could be delivered")]
    Disconnected { event: &'static str },
}

macro_rules! named_fmt {
    ($kind:ident: $fmt:expr) => {
        ($fmt).map_err(|err| (FormatError::$kind, err))
    };
}

trait FmtErrors<E> {
    fn push_on_error(&mut self, res: Result<(), (FormatError, E)>);
}

impl<E> FmtErrors<E> for Vec<(FormatError, E)> {
    fn push_on_error(&mut self, res: Result<(), (FormatError, E)>) {
        if let Err(err) = res {
            self.push(err);
        }
    }
}

fn dispatch<F: RunFormatter>(formatter: &mut F, event: &RunEvent, report: &mut RunReport<F::Error>) {
    tracing::trace!(event = event.name(), "dispatching run event");
    report.events += 1;

    let fmt_errors = &mut report.fmt_errors;
    match event {
        RunEvent::Start { count } => {
            report.scheduled = *count;
            fmt_errors.push_on_error(named_fmt!(Start: formatter.fmt_start(FmtStart { count: *count })));
        }
        RunEvent::GroupStarted { description, depth } => {
            fmt_errors.push_on_error(named_fmt!(GroupStarted: formatter.fmt_group_started(
                FmtGroup {
                    description,
                    depth: *depth,
                }
            )));
        }
        RunEvent::GroupFinished { description, depth } => {
            fmt_errors.push_on_error(named_fmt!(GroupFinished: formatter.fmt_group_finished(
                FmtGroup {
                    description,
                    depth: *depth,
                }
            )));
        }
        RunEvent::ExamplePassed {
            full_description,
            group,
        } => {
            report.passed += 1;
            fmt_errors.push_on_error(named_fmt!(ExamplePassed: formatter.fmt_example_passed(
                FmtExample {
                    full_description,
                    group,
                }
            )));
        }
        RunEvent::ExampleFailed {
            full_description,
            group,
        } => {
            report.failed += 1;
            fmt_errors.push_on_error(named_fmt!(ExampleFailed: formatter.fmt_example_failed(
                FmtExample {
                    full_description,
                    group,
                }
            )));
        }
        RunEvent::ExamplePending {
            full_description,
            group,
        } => {
            report.pending += 1;
            fmt_errors.push_on_error(named_fmt!(ExamplePending: formatter.fmt_example_pending(
                FmtExample {
                    full_description,
                    group,
                }
            )));
        }
        RunEvent::Stop { examples, failures } => {
            report.stopped = true;
            if failures.len() != report.failed {
                tracing::debug!(
                    reported = failures.len(),
                    seen = report.failed,
                    "failure list does not match the failed examples seen"
                );
            }

            fmt_errors.push_on_error(named_fmt!(Stop: formatter.fmt_stop(FmtStop {
                examples: *examples,
                failures,
            })));
            fmt_errors.push_on_error(named_fmt!(DumpFailures: formatter.fmt_dump_failures(
                FmtDumpFailures { failures }
            )));
        }
        RunEvent::Close => {
            report.closed = true;
            fmt_errors.push_on_error(named_fmt!(Close: formatter.fmt_close(FmtClose)));
        }
    }
}

/// Hand every event to `formatter` in order, up to and including `Close`.
///
/// Events after `Close` are never looked at.
pub fn replay<F, I>(events: I, formatter: &mut F) -> RunReport<F::Error>
where
    F: RunFormatter,
    I: IntoIterator<Item = RunEvent>,
{
    let mut report = RunReport::new();
    for event in events {
        dispatch(formatter, &event, &mut report);
        if report.closed {
            break;
        }
    }

    if !report.closed {
        tracing::debug!(events = report.events, "event stream ended without close");
    }
    report
}

pub fn channel() -> (EventSender, EventReceiver) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (EventSender(tx), EventReceiver(rx))
}

/// The engine side of a [`channel`].
#[derive(Debug, Clone)]
pub struct EventSender(Sender<RunEvent>);

impl EventSender {
    pub fn send(&self, event: RunEvent) -> Result<(), SourceError> {
        let event_name = event.name();
        self.0
            .send(event)
            .map_err(|_| SourceError::Disconnected { event: event_name })
    }

    pub fn start(&self, count: usize) -> Result<(), SourceError> {
        self.send(RunEvent::Start { count })
    }

    pub fn group_started(
        &self,
        description: impl Into<Cow<'static, str>>,
        depth: usize,
    ) -> Result<(), SourceError> {
        self.send(RunEvent::GroupStarted {
            description: description.into(),
            depth,
        })
    }

    pub fn group_finished(
        &self,
        description: impl Into<Cow<'static, str>>,
        depth: usize,
    ) -> Result<(), SourceError> {
        self.send(RunEvent::GroupFinished {
            description: description.into(),
            depth,
        })
    }

    pub fn example_passed(
        &self,
        full_description: impl Into<Cow<'static, str>>,
        group: impl Into<Cow<'static, str>>,
    ) -> Result<(), SourceError> {
        self.send(RunEvent::ExamplePassed {
            full_description: full_description.into(),
            group: group.into(),
        })
    }

    pub fn example_failed(
        &self,
        full_description: impl Into<Cow<'static, str>>,
        group: impl Into<Cow<'static, str>>,
    ) -> Result<(), SourceError> {
        self.send(RunEvent::ExampleFailed {
            full_description: full_description.into(),
            group: group.into(),
        })
    }

    pub fn example_pending(
        &self,
        full_description: impl Into<Cow<'static, str>>,
        group: impl Into<Cow<'static, str>>,
    ) -> Result<(), SourceError> {
        self.send(RunEvent::ExamplePending {
            full_description: full_description.into(),
            group: group.into(),
        })
    }

    pub fn stop(&self, examples: usize, failures: Vec<FailureRecord>) -> Result<(), SourceError> {
        self.send(RunEvent::Stop { examples, failures })
    }

    pub fn close(&self) -> Result<(), SourceError> {
        self.send(RunEvent::Close)
    }
}

/// The reporter side of a [`channel`].
#[derive(Debug)]
pub struct EventReceiver(Receiver<RunEvent>);

impl EventReceiver {
    /// Block on incoming events and format them until `Close` arrives or
    /// every sender is gone.
    pub fn drive<F: RunFormatter>(self, formatter: &mut F) -> RunReport<F::Error> {
        replay(self.0.iter(), formatter)
    }
}
