use crate::formatter::*;

/// A formatter that produces no output.
///
/// `NoFormatter` implements [`RunFormatter`] but discards every event. This is
/// useful when events should be consumed without any reporting, for example
/// when only the [`RunReport`](crate::RunReport) of a replay is of interest.
#[derive(Debug, Default, Clone)]
pub struct NoFormatter;

impl RunFormatter for NoFormatter {
    type Error = ();
}
