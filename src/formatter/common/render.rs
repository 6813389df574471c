use std::io;

use crate::{
    formatter::common::color::{Color, ColorSetting, SupportsColor},
    terminal::ClearScreen,
};

pub const DEFAULT_RULE_WIDTH: usize = 80;

/// Writes colored text, horizontal rules and padding into an output sink.
///
/// The renderer owns the sink and the screen clearer, everything else about a
/// run lives in the formatter.
#[derive(Debug)]
pub struct Renderer<W, C> {
    target: W,
    clear: C,
    color_setting: ColorSetting,
    rule_width: usize,
}

impl<W, C> Renderer<W, C> {
    pub fn new(target: W, clear: C) -> Self {
        Self {
            target,
            clear,
            color_setting: ColorSetting::default(),
            rule_width: DEFAULT_RULE_WIDTH,
        }
    }

    pub fn with_target<WithTarget>(self, target: WithTarget) -> Renderer<WithTarget, C> {
        Renderer {
            target,
            clear: self.clear,
            color_setting: self.color_setting,
            rule_width: self.rule_width,
        }
    }

    pub fn with_clear<WithClear>(self, clear: WithClear) -> Renderer<W, WithClear> {
        Renderer {
            target: self.target,
            clear,
            color_setting: self.color_setting,
            rule_width: self.rule_width,
        }
    }

    pub fn with_color_setting(self, color_setting: impl Into<ColorSetting>) -> Self {
        Renderer {
            color_setting: color_setting.into(),
            ..self
        }
    }

    pub fn with_rule_width(self, rule_width: usize) -> Self {
        Renderer { rule_width, ..self }
    }

    pub fn target(&self) -> &W {
        &self.target
    }

    pub fn into_target(self) -> W {
        self.target
    }
}

impl<W: SupportsColor, C> Renderer<W, C> {
    /// Return whether this renderer will currently emit colored output.
    pub fn use_color(&self) -> bool {
        match self.color_setting {
            ColorSetting::Automatic => self.target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }
}

impl<W: io::Write + SupportsColor, C: ClearScreen> Renderer<W, C> {
    /// A rule of the configured width with a blank line on either side.
    pub fn line(&mut self, color: Color) -> io::Result<()> {
        self.line_with_width(color, self.rule_width)
    }

    pub fn line_with_width(&mut self, color: Color, width: usize) -> io::Result<()> {
        let rule = format!("\n{}\n", "-".repeat(width));
        self.text(&rule, color)
    }

    pub fn text(&mut self, content: &str, color: Color) -> io::Result<()> {
        let use_color = self.use_color();
        self.target.write_all(color.wrap(content, use_color).as_bytes())
    }

    /// Write without any color handling.
    pub fn raw(&mut self, content: &str) -> io::Result<()> {
        self.target.write_all(content.as_bytes())
    }

    pub fn empty_line(&mut self, lines: usize) -> io::Result<()> {
        self.raw(&"\n".repeat(lines))
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.clear.clear_screen(&mut self.target)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.target.flush()
    }
}
