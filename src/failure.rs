use std::borrow::Cow;

/// A failed example as reported by the test engine once the run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct FailureRecord {
    /// Fully qualified description of the example.
    pub description: Cow<'static, str>,
    /// Description of the group the example is defined in.
    pub group_description: Cow<'static, str>,
    /// The rendered error message, one entry per line.
    pub message_lines: Vec<String>,
    /// The rendered backtrace, one location per entry.
    pub backtrace: Vec<String>,
}

impl FailureRecord {
    pub fn new(
        description: impl Into<Cow<'static, str>>,
        group_description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            description: description.into(),
            group_description: group_description.into(),
            message_lines: Vec::new(),
            backtrace: Vec::new(),
        }
    }

    /// Set the error message, splitting it into lines.
    pub fn with_message(self, message: impl AsRef<str>) -> Self {
        FailureRecord {
            message_lines: message.as_ref().lines().map(String::from).collect(),
            ..self
        }
    }

    pub fn with_backtrace<I, S>(self, backtrace: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FailureRecord {
            backtrace: backtrace.into_iter().map(Into::into).collect(),
            ..self
        }
    }
}
