use std::{io::Cursor, time::Duration};

use kiexplain::prelude::*;

use super::{Buffer, MarkClear};

pub type TestFormatter = ExplainFormatter<Buffer, Cursor<Vec<u8>>, MarkClear>;

pub fn formatter(output: &Buffer, input: &str) -> TestFormatter {
    ExplainFormatter::new(output.clone(), Cursor::new(input.as_bytes().to_vec()), MarkClear)
        .with_config(ExplainConfig {
            color: ColorSetting::Never,
            throttle: Duration::ZERO,
            rule_width: 10,
            browse: BrowseMode::Interactive,
        })
}

pub fn group_started(description: &'static str, depth: usize) -> RunEvent {
    RunEvent::GroupStarted {
        description: description.into(),
        depth,
    }
}

pub fn group_finished(description: &'static str, depth: usize) -> RunEvent {
    RunEvent::GroupFinished {
        description: description.into(),
        depth,
    }
}

pub fn passed(full_description: &'static str, group: &'static str) -> RunEvent {
    RunEvent::ExamplePassed {
        full_description: full_description.into(),
        group: group.into(),
    }
}

pub fn failed(full_description: &'static str, group: &'static str) -> RunEvent {
    RunEvent::ExampleFailed {
        full_description: full_description.into(),
        group: group.into(),
    }
}

pub fn pending(full_description: &'static str, group: &'static str) -> RunEvent {
    RunEvent::ExamplePending {
        full_description: full_description.into(),
        group: group.into(),
    }
}
