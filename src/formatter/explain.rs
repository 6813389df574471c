use std::{
    io::{self, BufRead},
    thread,
    time::Duration,
};

use chrono::Local;

use crate::{
    browser::FailureBrowser,
    config::{BrowseMode, ConfigError, ExplainConfig},
    formatter::{
        common::{
            color::{Color, ColorSetting, SupportsColor},
            render::Renderer,
            stats::{RunState, is_top_level},
        },
        *,
    },
    terminal::{ClearScreen, CrosstermClear},
};

/// Explains a test run as it happens and lets us dig through the failures
/// afterwards.
///
/// Every top-level group gets a header, every example a colored `PASS` or
/// numbered `FAIL` line and every group a short summary. Once the run
/// stopped and something failed, the [`FailureBrowser`] takes over the
/// input until the user quits.
#[derive(Debug)]
pub struct ExplainFormatter<W, R, C> {
    renderer: Renderer<W, C>,
    input: R,
    throttle: Duration,
    browse: BrowseMode,
    state: RunState,
}

impl Default for ExplainFormatter<io::Stdout, io::StdinLock<'static>, CrosstermClear> {
    fn default() -> Self {
        Self::from_config(ExplainConfig::default())
    }
}

impl ExplainFormatter<io::Stdout, io::StdinLock<'static>, CrosstermClear> {
    pub fn from_config(config: ExplainConfig) -> Self {
        Self::new(io::stdout(), io::stdin().lock(), CrosstermClear).with_config(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        ExplainConfig::from_env().map(Self::from_config)
    }
}

impl<W, R, C> ExplainFormatter<W, R, C> {
    /// A formatter with the default config writing to `target` and reading
    /// browser commands from `input`.
    pub fn new(target: W, input: R, clear: C) -> Self {
        Self {
            renderer: Renderer::new(target, clear),
            input,
            throttle: Duration::ZERO,
            browse: BrowseMode::default(),
            state: RunState::default(),
        }
        .with_config(ExplainConfig::default())
    }

    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> ExplainFormatter<WithTarget, R, C> {
        ExplainFormatter {
            renderer: self.renderer.with_target(with_target),
            input: self.input,
            throttle: self.throttle,
            browse: self.browse,
            state: self.state,
        }
    }

    pub fn with_input<WithInput: BufRead>(
        self,
        with_input: WithInput,
    ) -> ExplainFormatter<W, WithInput, C> {
        ExplainFormatter {
            renderer: self.renderer,
            input: with_input,
            throttle: self.throttle,
            browse: self.browse,
            state: self.state,
        }
    }

    pub fn with_clear<WithClear: ClearScreen>(
        self,
        with_clear: WithClear,
    ) -> ExplainFormatter<W, R, WithClear> {
        ExplainFormatter {
            renderer: self.renderer.with_clear(with_clear),
            input: self.input,
            throttle: self.throttle,
            browse: self.browse,
            state: self.state,
        }
    }

    pub fn with_config(self, config: ExplainConfig) -> Self {
        let ExplainConfig {
            color,
            throttle,
            rule_width,
            browse,
        } = config;

        ExplainFormatter {
            renderer: self
                .renderer
                .with_color_setting(color)
                .with_rule_width(rule_width),
            throttle,
            browse,
            ..self
        }
    }

    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        ExplainFormatter {
            renderer: self.renderer.with_color_setting(color_setting),
            ..self
        }
    }

    pub fn with_throttle(self, throttle: Duration) -> Self {
        ExplainFormatter { throttle, ..self }
    }

    pub fn with_browse_mode(self, browse: BrowseMode) -> Self {
        ExplainFormatter { browse, ..self }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn target(&self) -> &W {
        self.renderer.target()
    }

    fn pause(&self) {
        if !self.throttle.is_zero() {
            thread::sleep(self.throttle);
        }
    }
}

impl<W, R, C> RunFormatter for ExplainFormatter<W, R, C>
where
    W: io::Write + SupportsColor,
    R: BufRead,
    C: ClearScreen,
{
    type Error = io::Error;

    fn fmt_start(&mut self, data: FmtStart) -> io::Result<()> {
        self.renderer.clear_screen()?;

        let now = Local::now().format("%H:%M:%S");
        self.renderer.line(Color::BoldYellow)?;
        self.renderer.text(
            &format!("  {now} - Starting {} Tests", data.count),
            Color::BoldYellow,
        )?;
        self.renderer.line(Color::BoldYellow)?;

        self.renderer.empty_line(1)?;
        self.state.start();
        Ok(())
    }

    fn fmt_group_started(&mut self, data: FmtGroup<'_>) -> io::Result<()> {
        if !self.state.enter_group(data.description, data.depth) {
            tracing::trace!(group = data.description, depth = data.depth, "nested group started");
            return Ok(());
        }

        self.renderer
            .text(&format!("- {}:\n", data.description), Color::BoldYellow)
    }

    fn fmt_group_finished(&mut self, data: FmtGroup<'_>) -> io::Result<()> {
        if !is_top_level(data.depth) {
            return Ok(());
        }

        // The run-wide failure count decides the message, not the group's own.
        let stats = self.state.group_stats(data.description);
        let msg = match self.state.fails_count() {
            0 => "🎉 ALL PASS".to_string(),
            _ => format!("😡 {} example fails", stats.failed),
        };
        self.renderer.text(&format!("  {msg}\n\n"), Color::White)
    }

    fn fmt_example_passed(&mut self, data: FmtExample<'_>) -> io::Result<()> {
        let res = self.renderer.text(
            &format!("  ✅ PASS - {} \n", data.full_description),
            Color::Green,
        );
        self.state.record_pass();
        self.pause();
        res
    }

    fn fmt_example_failed(&mut self, data: FmtExample<'_>) -> io::Result<()> {
        let res = self.renderer.text(
            &format!(
                "  ❌ FAIL #{} - {}\n",
                self.state.next_failure_number(),
                data.full_description
            ),
            Color::Red,
        );
        self.state.record_failure();
        self.pause();
        res
    }

    fn fmt_example_pending(&mut self, _: FmtExample<'_>) -> io::Result<()> {
        self.renderer.raw("*")
    }

    fn fmt_stop(&mut self, data: FmtStop<'_>) -> io::Result<()> {
        let (color, msg) = match data.failures.len() {
            0 => (Color::BoldGreen, "  Finished. No tests failed. 🎉🎉🎉".to_string()),
            failed => (
                Color::BoldRed,
                format!("  Finished. {failed}/{} tests failed 😡", data.examples),
            ),
        };

        self.renderer.line(color)?;
        self.renderer.text(&msg, color)?;
        self.renderer.line(color)
    }

    fn fmt_dump_failures(&mut self, data: FmtDumpFailures<'_>) -> io::Result<()> {
        if data.failures.is_empty() {
            return Ok(());
        }

        tracing::debug!(failures = data.failures.len(), mode = ?self.browse, "dumping failures");
        let mut browser = FailureBrowser::new(&mut self.renderer, &mut self.input, data.failures);
        match self.browse {
            BrowseMode::Interactive => browser.run(),
            BrowseMode::All => browser.show_all_details(),
            BrowseMode::Off => Ok(()),
        }
    }

    fn fmt_close(&mut self, _: FmtClose) -> io::Result<()> {
        self.renderer.empty_line(1)?;
        self.renderer.flush()
    }
}
