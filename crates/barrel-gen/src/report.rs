//! Report sinks for run outcomes.
//!
//! Every invocation ends with exactly one human-readable message: success,
//! or the reason the run stopped. Hosts decide where it goes by implementing
//! [`Reporter`].

use tracing::info;

/// A sink for human-readable run messages.
///
/// # Examples
///
/// ```
/// use barrel_gen::{CollectingReporter, Reporter};
///
/// let mut reporter = CollectingReporter::default();
/// reporter.report("index file created in /components");
/// assert_eq!(reporter.messages(), ["index file created in /components"]);
/// ```
pub trait Reporter {
    /// Delivers one message.
    fn report(&mut self, message: &str);
}

/// Forwards messages to `tracing` at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, message: &str) {
        info!("{message}");
    }
}

/// Keeps every message in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    messages: Vec<String>,
}

impl CollectingReporter {
    /// Returns the messages received so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the most recent message.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_reporter_order() {
        let mut reporter = CollectingReporter::default();
        reporter.report("first");
        reporter.report("second");
        assert_eq!(reporter.messages(), ["first", "second"]);
        assert_eq!(reporter.last(), Some("second"));
    }

    #[test]
    fn test_tracing_reporter_accepts_messages() {
        let mut reporter = TracingReporter;
        reporter.report("no subscriber installed");
    }
}
