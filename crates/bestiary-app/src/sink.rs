//! Console output for summary runs
//!
//! Summary lines go to the writer (stdout in production).
//! Errors go through tracing, which writes to stderr.

use std::io::{self, Write};

use bestiary_usecase::SummarySink;
use tracing::{error, warn};

/// Writes summary lines to a terminal or any other writer
#[derive(Debug)]
pub struct ConsoleSink<W> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SummarySink for ConsoleSink<W> {
    fn line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            warn!(error = %e, "Failed to write summary line");
        }
    }

    fn error(&mut self, message: &str) {
        error!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestiary_usecase::Summary;

    #[test]
    fn test_text_output() {
        let summary = Summary {
            by_difficulty: vec!["Eagle".into(), "Wolf".into(), "Crab".into()],
            quickest_swimmer: "Crab".into(),
            fastest_fliers: vec!["Eagle".into()],
        };
        let mut sink = ConsoleSink::new(Vec::new());
        sink.summary(&summary);

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "Creatures ordered by difficulty: Eagle, Wolf, Crab.\n\
             Quickest swimming creature: Crab.\n\
             Five quickest flying creatures: Eagle.\n"
        );
    }

    #[test]
    fn test_error_writes_nothing_to_output() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.error("Failed to fetch creatures: Not Found");

        assert!(sink.into_inner().is_empty());
    }
}
