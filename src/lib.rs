//! A live test-run reporter that explains what happened.
//!
//! Events of a test run flow from an engine, through [`source`], into a
//! [`RunFormatter`](formatter::RunFormatter). The
//! [`ExplainFormatter`](formatter::explain::ExplainFormatter) prints progress
//! as it arrives and, once the run stopped, hands the failures to the
//! interactive [`FailureBrowser`](browser::FailureBrowser).

pub mod browser;
pub mod config;
pub mod failure;
pub mod formatter;
pub mod source;
pub mod terminal;

mod report;
pub use report::*;

pub mod prelude {
    pub use crate::{
        RunReport,
        config::{BrowseMode, ExplainConfig},
        failure::FailureRecord,
        formatter::{
            RunFormatter,
            common::color::{ColorSetting, SupportsColor},
            explain::ExplainFormatter,
            no::NoFormatter,
        },
        source::{EventReceiver, EventSender, RunEvent, channel, replay},
        terminal::{ClearScreen, CrosstermClear, NoClear},
    };
}
